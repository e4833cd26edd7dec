api_enum! {
    /// Active Format Description signaling in the output video.
    pub enum AfdSignaling {
        Auto => "AUTO",
        Fixed => "FIXED",
        None => "NONE",
    }
}

api_enum! {
    pub enum FixedAfd {
        Afd0000 => "AFD_0000",
        Afd0010 => "AFD_0010",
        Afd0011 => "AFD_0011",
        Afd0100 => "AFD_0100",
        Afd1000 => "AFD_1000",
        Afd1001 => "AFD_1001",
        Afd1010 => "AFD_1010",
        Afd1011 => "AFD_1011",
        Afd1101 => "AFD_1101",
        Afd1110 => "AFD_1110",
        Afd1111 => "AFD_1111",
    }
}

api_enum! {
    pub enum TemporalFilterPostFilterSharpening {
        Auto => "AUTO",
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum TemporalFilterStrength {
        Auto => "AUTO",
        Strength1 => "STRENGTH_1",
        Strength2 => "STRENGTH_2",
        Strength3 => "STRENGTH_3",
        Strength4 => "STRENGTH_4",
        Strength5 => "STRENGTH_5",
        Strength6 => "STRENGTH_6",
        Strength7 => "STRENGTH_7",
        Strength8 => "STRENGTH_8",
        Strength9 => "STRENGTH_9",
        Strength10 => "STRENGTH_10",
        Strength11 => "STRENGTH_11",
        Strength12 => "STRENGTH_12",
        Strength13 => "STRENGTH_13",
        Strength14 => "STRENGTH_14",
        Strength15 => "STRENGTH_15",
        Strength16 => "STRENGTH_16",
    }
}

api_model! {
    pub struct TemporalFilterSettings {
        /// If you enable this filter, the results are the following:
        /// - If the source content is noisy (it contains excessive digital
        ///   artifacts), the filter cleans up the source.
        /// - If the source content is already clean, the filter tends to
        ///   decrease the bitrate, especially when the rate control mode is
        ///   QVBR.
        post_filter_sharpening: TemporalFilterPostFilterSharpening,
        /// Choose a filter strength. We recommend a strength of 1 or 2. A
        /// higher strength might take out good information, resulting in an
        /// image that is overly soft.
        strength: TemporalFilterStrength,
    }
}
