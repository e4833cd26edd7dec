use crate::common::check_range;
use crate::*;

api_enum! {
    pub enum Eac3AttenuationControl {
        Attenuate3Db => "ATTENUATE_3_DB",
        None => "NONE",
    }
}

api_enum! {
    pub enum Eac3BitstreamMode {
        Commentary => "COMMENTARY",
        CompleteMain => "COMPLETE_MAIN",
        Emergency => "EMERGENCY",
        HearingImpaired => "HEARING_IMPAIRED",
        VisuallyImpaired => "VISUALLY_IMPAIRED",
    }
}

api_enum! {
    pub enum Eac3CodingMode {
        CodingMode1_0 => "CODING_MODE_1_0",
        CodingMode2_0 => "CODING_MODE_2_0",
        CodingMode3_2 => "CODING_MODE_3_2",
    }
}

api_enum! {
    pub enum Eac3DcFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    /// Dynamic range compression profile, shared by the line and RF modes.
    pub enum Eac3DrcProfile {
        FilmLight => "FILM_LIGHT",
        FilmStandard => "FILM_STANDARD",
        MusicLight => "MUSIC_LIGHT",
        MusicStandard => "MUSIC_STANDARD",
        None => "NONE",
        Speech => "SPEECH",
    }
}

api_enum! {
    pub enum Eac3LfeControl {
        Lfe => "LFE",
        NoLfe => "NO_LFE",
    }
}

api_enum! {
    pub enum Eac3LfeFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum Eac3MetadataControl {
        FollowInput => "FOLLOW_INPUT",
        UseConfigured => "USE_CONFIGURED",
    }
}

api_enum! {
    pub enum Eac3PassthroughControl {
        NoPassthrough => "NO_PASSTHROUGH",
        WhenPossible => "WHEN_POSSIBLE",
    }
}

api_enum! {
    pub enum Eac3PhaseControl {
        NoShift => "NO_SHIFT",
        Shift90Degrees => "SHIFT_90_DEGREES",
    }
}

api_enum! {
    pub enum Eac3StereoDownmix {
        Dpl2 => "DPL2",
        LoRo => "LO_RO",
        LtRt => "LT_RT",
        NotIndicated => "NOT_INDICATED",
    }
}

api_enum! {
    pub enum Eac3SurroundExMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        NotIndicated => "NOT_INDICATED",
    }
}

api_enum! {
    pub enum Eac3SurroundMode {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        NotIndicated => "NOT_INDICATED",
    }
}

api_model! {
    pub struct Eac3Settings {
        /// When set to attenuate3Db, applies a 3 dB attenuation to the
        /// surround channels. Only used for 3/2 coding mode.
        attenuation_control: Eac3AttenuationControl,
        /// Average bitrate in bits/second. Valid bitrates depend on the coding
        /// mode.
        bitrate: f64,
        /// Specifies the bitstream mode (bsmod) for the emitted E-AC-3 stream.
        /// See ATSC A/52-2012 (Annex E) for background on these values.
        bitstream_mode: Eac3BitstreamMode,
        /// Dolby Digital Plus coding mode. Determines number of channels.
        coding_mode: Eac3CodingMode,
        /// When set to enabled, activates a DC highpass filter for all input
        /// channels.
        dc_filter: Eac3DcFilter,
        /// Sets the dialnorm for the output. If blank and input audio is Dolby
        /// Digital Plus, dialnorm will be passed through.
        dialnorm: i32,
        /// Sets the Dolby dynamic range compression profile.
        drc_line: Eac3DrcProfile,
        /// Sets the profile for heavy Dolby dynamic range compression,
        /// ensures that the instantaneous signal peaks do not exceed specified
        /// levels.
        drc_rf: Eac3DrcProfile,
        /// When encoding 3/2 audio, setting to lfe enables the LFE channel
        lfe_control: Eac3LfeControl,
        /// When set to enabled, applies a 120Hz lowpass filter to the LFE
        /// channel prior to encoding. Only valid with codingMode32 coding mode.
        lfe_filter: Eac3LfeFilter,
        /// Left only/Right only center mix level. Only used for 3/2 coding
        /// mode.
        lo_ro_center_mix_level: f64,
        /// Left only/Right only surround mix level. Only used for 3/2 coding
        /// mode.
        lo_ro_surround_mix_level: f64,
        /// Left total/Right total center mix level. Only used for 3/2 coding
        /// mode.
        lt_rt_center_mix_level: f64,
        /// Left total/Right total surround mix level. Only used for 3/2 coding
        /// mode.
        lt_rt_surround_mix_level: f64,
        /// When set to followInput, encoder metadata will be sourced from the
        /// DD, DD+, or DolbyE decoder that supplied this audio data. If audio
        /// was not supplied from one of these streams, then the static
        /// metadata settings will be used.
        metadata_control: Eac3MetadataControl,
        /// When set to whenPossible, input DD+ audio will be passed through if
        /// it is present on the input. This detection is dynamic over the life
        /// of the transcode. Inputs that alternate between DD+ and non-DD+
        /// content will have a consistent DD+ output as the system alternates
        /// between passthrough and encoding.
        passthrough_control: Eac3PassthroughControl,
        /// When set to shift90Degrees, applies a 90-degree phase shift to the
        /// surround channels. Only used for 3/2 coding mode.
        phase_control: Eac3PhaseControl,
        /// Stereo downmix preference. Only used for 3/2 coding mode.
        stereo_downmix: Eac3StereoDownmix,
        /// When encoding 3/2 audio, sets whether an extra center back surround
        /// channel is matrix encoded into the left and right surround channels.
        surround_ex_mode: Eac3SurroundExMode,
        /// When encoding 2/0 audio, sets whether Dolby Surround is matrix
        /// encoded into the two channels.
        surround_mode: Eac3SurroundMode,
    }
}

impl Validate for Eac3Settings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("Eac3Settings.dialnorm", self.dialnorm, 1..=31)
    }
}
