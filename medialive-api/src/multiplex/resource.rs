use crate::common::check_range;
use crate::*;

api_enum! {
    /// Lifecycle state of a multiplex as reported by the service.
    pub enum MultiplexState {
        Creating => "CREATING",
        CreateFailed => "CREATE_FAILED",
        Idle => "IDLE",
        Starting => "STARTING",
        Running => "RUNNING",
        Recovering => "RECOVERING",
        Stopping => "STOPPING",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
}

api_model! {
    /// Contains configuration for a Multiplex event.
    pub struct MultiplexSettings {
        /// Maximum video buffer delay in milliseconds.
        maximum_video_buffer_delay_milliseconds: i32,
        /// Transport stream bit rate.
        transport_stream_bitrate: i32,
        /// Transport stream ID.
        transport_stream_id: i32,
        /// Transport stream reserved bit rate.
        transport_stream_reserved_bitrate: i32,
    }
}

impl Validate for MultiplexSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "MultiplexSettings.maximumVideoBufferDelayMilliseconds",
            self.maximum_video_buffer_delay_milliseconds,
            800..=3000,
        )?;
        check_range(
            "MultiplexSettings.transportStreamBitrate",
            self.transport_stream_bitrate,
            1_000_000..=100_000_000,
        )?;
        check_range(
            "MultiplexSettings.transportStreamId",
            self.transport_stream_id,
            0..=65535,
        )?;
        check_range(
            "MultiplexSettings.transportStreamReservedBitrate",
            self.transport_stream_reserved_bitrate,
            0..=100_000_000,
        )
    }
}

api_model! {
    pub struct MultiplexSettingsSummary {
        transport_stream_bitrate: i32,
    }
}

api_model! {
    /// Multiplex MediaConnect output destination settings.
    pub struct MultiplexMediaConnectOutputDestinationSettings {
        /// The MediaConnect entitlement ARN available as a Flow source.
        entitlement_arn: String,
    }
}

api_model! {
    pub struct MultiplexOutputDestination {
        media_connect_settings: MultiplexMediaConnectOutputDestinationSettings,
    }
}

api_model! {
    /// The multiplex object.
    pub struct Multiplex {
        /// The unique arn of the multiplex.
        arn: String,
        /// A list of availability zones for the multiplex.
        availability_zones: Vec<String>,
        /// A list of the multiplex output destinations.
        destinations: Vec<MultiplexOutputDestination>,
        /// The unique id of the multiplex.
        id: String,
        multiplex_settings: MultiplexSettings,
        /// The name of the multiplex.
        name: String,
        /// The number of currently healthy pipelines.
        pipelines_running_count: i32,
        /// The number of programs in the multiplex.
        program_count: i32,
        state: MultiplexState,
        tags: Tags,
    }
}

api_model! {
    /// Entry of a multiplex listing.
    pub struct MultiplexSummary {
        arn: String,
        availability_zones: Vec<String>,
        id: String,
        multiplex_settings: MultiplexSettingsSummary,
        name: String,
        pipelines_running_count: i32,
        program_count: i32,
        state: MultiplexState,
        tags: Tags,
    }
}

impl_tags!(Multiplex, MultiplexSummary);
