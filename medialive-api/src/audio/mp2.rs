api_enum! {
    pub enum Mp2CodingMode {
        CodingMode1_0 => "CODING_MODE_1_0",
        CodingMode2_0 => "CODING_MODE_2_0",
    }
}

api_model! {
    pub struct Mp2Settings {
        /// Average bitrate in bits/second.
        bitrate: f64,
        /// The MPEG2 Audio coding mode. Valid values are codingMode10 (for mono)
        /// or codingMode20 (for stereo).
        coding_mode: Mp2CodingMode,
        /// Sample rate in Hz.
        sample_rate: f64,
    }
}

api_model! {
    /// Copies the source audio to the output without re-encoding.
    pub struct PassThroughSettings {}
}
