use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum InputDeblockFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum InputDenoiseFilter {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum InputFilter {
        Auto => "AUTO",
        Disabled => "DISABLED",
        Forced => "FORCED",
    }
}

api_enum! {
    pub enum InputSourceEndBehavior {
        Continue => "CONTINUE",
        Loop => "LOOP",
    }
}

api_enum! {
    pub enum Smpte2038DataPreference {
        Ignore => "IGNORE",
        Prefer => "PREFER",
    }
}

api_enum! {
    pub enum NetworkInputServerValidation {
        CheckCryptographyAndValidateName => "CHECK_CRYPTOGRAPHY_AND_VALIDATE_NAME",
        CheckCryptographyOnly => "CHECK_CRYPTOGRAPHY_ONLY",
    }
}

api_model! {
    /// Hls Input Settings
    pub struct HlsInputSettings {
        /// When specified the HLS stream with the m3u8 BANDWIDTH that most
        /// closely matches this value will be chosen, otherwise the highest
        /// bandwidth stream in the m3u8 will be chosen. The bitrate is
        /// specified in bits per second, as in an HLS manifest.
        bandwidth: i32,
        /// When specified, reading of the HLS input will begin this many
        /// buffer segments from the end (most recently written segment). When
        /// not specified, the HLS input will begin with the first segment
        /// specified in the m3u8.
        buffer_segments: i32,
        /// The number of consecutive times that attempts to read a manifest or
        /// segment must fail before the input is considered unavailable.
        retries: i32,
        /// The number of seconds between retries when an attempt to read a
        /// manifest or segment fails.
        retry_interval: i32,
    }
}

impl Validate for HlsInputSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min("HlsInputSettings.bandwidth", self.bandwidth, 0)?;
        check_min("HlsInputSettings.bufferSegments", self.buffer_segments, 0)?;
        check_min("HlsInputSettings.retries", self.retries, 0)?;
        check_min("HlsInputSettings.retryInterval", self.retry_interval, 0)
    }
}

api_model! {
    /// Network source to transcode. Must be accessible to the Elemental Live
    /// node that is running the live event through a network connection.
    pub struct NetworkInputSettings {
        /// Specifies HLS input settings when the uri is for a HLS manifest.
        hls_input_settings: HlsInputSettings,
        /// Check HTTPS server certificates.
        server_validation: NetworkInputServerValidation,
    }
}

api_model! {
    /// Live Event input parameters. There can be multiple inputs in a single
    /// Live Event.
    pub struct InputSettings {
        /// Enable or disable the deblock filter when filtering.
        deblock_filter: InputDeblockFilter,
        /// Enable or disable the denoise filter when filtering.
        denoise_filter: InputDenoiseFilter,
        /// Adjusts the magnitude of filtering from 1 (minimal) to 5 (strongest).
        filter_strength: i32,
        /// Turns on the filter for this input. MPEG-2 inputs have the
        /// deblocking filter enabled by default.
        input_filter: InputFilter,
        /// Input settings.
        network_input_settings: NetworkInputSettings,
        /// Specifies whether to extract applicable ancillary data from a
        /// SMPTE-2038 source in this input.
        smpte2038_data_preference: Smpte2038DataPreference,
        /// Loop input if it is a file. This allows a file input to be streamed
        /// indefinitely.
        source_end_behavior: InputSourceEndBehavior,
    }
}

impl Validate for InputSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("InputSettings.filterStrength", self.filter_strength, 1..=5)?;
        self.network_input_settings
            .as_ref()
            .and_then(|settings| settings.hls_input_settings.as_ref())
            .map_or(Ok(()), Validate::validate)
    }
}

api_model! {
    /// Attaches an existing input to a channel.
    pub struct InputAttachment {
        /// User-specified name for the attachment. This is required if the
        /// user wants to use this input in an input switch action.
        input_attachment_name: String,
        /// The ID of the input.
        input_id: String,
        /// Settings of an input (caption selector, etc.)
        input_settings: InputSettings,
    }
}

impl Validate for InputAttachment {
    fn validate(&self) -> Result<(), ModelError> {
        self.input_settings.validate()
    }
}
