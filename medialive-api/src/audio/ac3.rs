use crate::common::check_range;
use crate::*;

api_enum! {
    pub enum Ac3BitstreamMode {
        Commentary => "COMMENTARY",
        CompleteMain => "COMPLETE_MAIN",
        Dialogue => "DIALOGUE",
        Emergency => "EMERGENCY",
        HearingImpaired => "HEARING_IMPAIRED",
        MusicAndEffects => "MUSIC_AND_EFFECTS",
        VisuallyImpaired => "VISUALLY_IMPAIRED",
        VoiceOver => "VOICE_OVER",
    }
}

api_enum! {
    pub enum Ac3CodingMode {
        CodingMode1_0 => "CODING_MODE_1_0",
        CodingMode1_1 => "CODING_MODE_1_1",
        CodingMode2_0 => "CODING_MODE_2_0",
        CodingMode3_2Lfe => "CODING_MODE_3_2_LFE",
    }
}

api_enum! {
    pub enum Ac3DrcProfile {
        FilmStandard => "FILM_STANDARD",
        None => "NONE",
    }
}

api_enum! {
    pub enum Ac3LfeFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum Ac3MetadataControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

api_model! {
    pub struct Ac3Settings {
        /// Average bitrate in bits/second.
        bitrate: f64,
        /// Specifies the bitstream mode (bsmod) for the emitted AC-3 stream.
        bitstream_mode: Ac3BitstreamMode,
        /// Dolby Digital coding mode. Determines number of channels.
        coding_mode: Ac3CodingMode,
        /// Sets the dialnorm for the output. If excluded and input audio is
        /// Dolby Digital, dialnorm will be passed through.
        dialnorm: i32,
        /// If set to filmStandard, adds dynamic range compression signaling to
        /// the output bitstream as defined in the Dolby Digital specification.
        drc_profile: Ac3DrcProfile,
        /// When set to enabled, applies a 120Hz lowpass filter to the LFE
        /// channel prior to encoding. Only valid in codingMode32Lfe mode.
        lfe_filter: Ac3LfeFilter,
        /// When set to "followInput", encoder metadata will be sourced from the
        /// DD, DD+, or DolbyE decoder that supplied this audio data. If audio
        /// was not supplied from one of these streams, then the static metadata
        /// settings will be used.
        metadata_control: Ac3MetadataControl,
    }
}

impl Validate for Ac3Settings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("Ac3Settings.dialnorm", self.dialnorm, 1..=31)
    }
}
