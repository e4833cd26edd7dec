use crate::*;

api_enum! {
    pub enum AudioType {
        CleanEffects => "CLEAN_EFFECTS",
        HearingImpaired => "HEARING_IMPAIRED",
        Undefined => "UNDEFINED",
        VisualImpairedCommentary => "VISUAL_IMPAIRED_COMMENTARY",
    }
}

api_enum! {
    pub enum AudioDescriptionAudioTypeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

api_enum! {
    pub enum AudioDescriptionLanguageCodeControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

api_model! {
    /// Exactly one of the codec settings is expected to be set.
    pub struct AudioCodecSettings {
        aac_settings: AacSettings,
        ac3_settings: Ac3Settings,
        eac3_settings: Eac3Settings,
        mp2_settings: Mp2Settings,
        pass_through_settings: PassThroughSettings,
    }
}

api_model! {
    pub struct AudioDescription {
        /// The name of the AudioSelector used as the source for this
        /// AudioDescription.
        audio_selector_name: String,
        /// Applies only if audioTypeControl is useConfigured. The values for
        /// audioType are defined in ISO-IEC 13818-1.
        audio_type: AudioType,
        /// Determines how audio type is determined.
        audio_type_control: AudioDescriptionAudioTypeControl,
        /// Audio codec settings.
        codec_settings: AudioCodecSettings,
        /// RFC 5646 language code representing the language of the audio
        /// output track. Only used if languageControlMode is useConfigured, or
        /// there is no ISO 639 language code specified in the input.
        language_code: String,
        /// Choosing followInput will cause the ISO 639 language code of the
        /// output to follow the ISO 639 language code of the input.
        language_code_control: AudioDescriptionLanguageCodeControl,
        /// The name of this AudioDescription. Outputs will use this name to
        /// uniquely identify this AudioDescription.
        name: String,
        /// Used for MS Smooth and Apple HLS outputs. Indicates the name
        /// displayed by the player (eg. English, or Director Commentary).
        stream_name: String,
    }
}

impl Validate for AudioCodecSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.ac3_settings.validate()?;
        self.eac3_settings.validate()?;
        Ok(())
    }
}

impl Validate for AudioDescription {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(language_code) = &self.language_code
            && language_code.chars().count() != 3
        {
            return Err(ModelError::invalid(
                "AudioDescription.languageCode",
                format!("{language_code:?} is not a three letter language code"),
            ));
        }
        self.codec_settings.validate()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn codec_settings_serialize_camel_case() {
        let description = AudioDescription::default()
            .name("audio_1")
            .audio_selector_name("default")
            .codec_settings(
                AudioCodecSettings::default().eac3_settings(
                    Eac3Settings::default()
                        .bitrate(384000)
                        .coding_mode(Eac3CodingMode::CodingMode3_2)
                        .drc_line("FILM_STANDARD")
                        .lo_ro_center_mix_level(-3.0),
                ),
            );

        assert_eq!(
            serde_json::to_value(&description).unwrap(),
            json!({
                "audioSelectorName": "default",
                "codecSettings": {
                    "eac3Settings": {
                        "bitrate": 384000.0,
                        "codingMode": "CODING_MODE_3_2",
                        "drcLine": "FILM_STANDARD",
                        "loRoCenterMixLevel": -3.0,
                    }
                },
                "name": "audio_1",
            })
        );
    }

    #[test]
    fn dialnorm_out_of_range() {
        let settings = AudioCodecSettings::default().ac3_settings(Ac3Settings::default().dialnorm(0));
        assert!(matches!(
            settings.validate(),
            Err(ModelError::OutOfRange {
                field: "Ac3Settings.dialnorm",
                ..
            })
        ));

        let settings = AudioCodecSettings::default().eac3_settings(Eac3Settings::default().dialnorm(31));
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn language_code_must_have_three_letters() {
        let description = AudioDescription::default().language_code("en");
        assert!(description.validate().is_err());
        let description = AudioDescription::default().language_code("eng");
        assert_eq!(description.validate(), Ok(()));
    }

    #[test]
    fn aac_settings_accept_raw_strings() {
        let typed = AacSettings::default()
            .profile(AacProfile::Lc)
            .raw_format(AacRawFormat::None);
        let raw = AacSettings::default().profile("LC").raw_format("NONE");
        assert_eq!(typed, raw);
        assert_eq!(typed.profile.unwrap().to_string(), "LC");
    }
}
