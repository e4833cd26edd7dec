api_enum! {
    /// Mono, stereo, or 5.1 channel layout.
    pub enum AacCodingMode {
        AdReceiverMix => "AD_RECEIVER_MIX",
        CodingMode1_0 => "CODING_MODE_1_0",
        CodingMode1_1 => "CODING_MODE_1_1",
        CodingMode2_0 => "CODING_MODE_2_0",
        CodingMode5_1 => "CODING_MODE_5_1",
    }
}

api_enum! {
    pub enum AacInputType {
        /// Indicates the stream carries an audio description (broadcaster
        /// mixed AD), so the codec signals it in the stream.
        BroadcasterMixedAd => "BROADCASTER_MIXED_AD",
        Normal => "NORMAL",
    }
}

api_enum! {
    pub enum AacProfile {
        Hev1 => "HEV1",
        Hev2 => "HEV2",
        Lc => "LC",
    }
}

api_enum! {
    pub enum AacRateControlMode {
        Cbr => "CBR",
        Vbr => "VBR",
    }
}

api_enum! {
    /// Wraps the AAC stream in LATM/LOAS when set.
    pub enum AacRawFormat {
        LatmLoas => "LATM_LOAS",
        None => "NONE",
    }
}

api_enum! {
    /// MPEG-2 AAC is only supported with transport streams.
    pub enum AacSpec {
        Mpeg2 => "MPEG2",
        Mpeg4 => "MPEG4",
    }
}

api_enum! {
    pub enum AacVbrQuality {
        High => "HIGH",
        Low => "LOW",
        MediumHigh => "MEDIUM_HIGH",
        MediumLow => "MEDIUM_LOW",
    }
}

api_model! {
    pub struct AacSettings {
        /// Average bitrate in bits/second. Valid values depend on rate control
        /// mode and profile.
        bitrate: f64,
        /// Mono, Stereo, or 5.1 channel layout. Valid values depend on rate
        /// control mode and profile. The adReceiverMix setting receives a
        /// stereo description plus control track and emits a mono AAC encode
        /// of the description track, with control data emitted in the PES
        /// header as per ETSI TS 101 154 Annex E.
        coding_mode: AacCodingMode,
        input_type: AacInputType,
        /// AAC Profile.
        profile: AacProfile,
        rate_control_mode: AacRateControlMode,
        raw_format: AacRawFormat,
        /// Sample rate in Hz. Valid values depend on rate control mode and
        /// profile.
        sample_rate: f64,
        /// Use MPEG-2 AAC audio instead of MPEG-4 AAC audio for raw or MPEG-2
        /// Transport Stream containers.
        spec: AacSpec,
        /// VBR Quality Level - Only used if rateControlMode is VBR.
        vbr_quality: AacVbrQuality,
    }
}
