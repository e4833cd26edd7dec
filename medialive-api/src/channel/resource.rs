use crate::*;

api_enum! {
    pub enum ChannelState {
        Creating => "CREATING",
        CreateFailed => "CREATE_FAILED",
        Idle => "IDLE",
        Starting => "STARTING",
        Running => "RUNNING",
        Recovering => "RECOVERING",
        Stopping => "STOPPING",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Updating => "UPDATING",
        UpdateFailed => "UPDATE_FAILED",
    }
}

api_enum! {
    /// A standard channel has two encoding pipelines and a single pipeline
    /// channel only has one.
    pub enum ChannelClass {
        Standard => "STANDARD",
        SinglePipeline => "SINGLE_PIPELINE",
    }
}

api_enum! {
    /// The log level the user wants for their channel.
    pub enum LogLevel {
        Error => "ERROR",
        Warning => "WARNING",
        Info => "INFO",
        Debug => "DEBUG",
        Disabled => "DISABLED",
    }
}

api_enum! {
    pub enum InputCodec {
        Mpeg2 => "MPEG2",
        Avc => "AVC",
        Hevc => "HEVC",
    }
}

api_enum! {
    pub enum InputMaximumBitrate {
        Max10Mbps => "MAX_10_MBPS",
        Max20Mbps => "MAX_20_MBPS",
        Max50Mbps => "MAX_50_MBPS",
    }
}

api_enum! {
    pub enum InputResolution {
        Sd => "SD",
        Hd => "HD",
        Uhd => "UHD",
    }
}

api_model! {
    /// Coarse description of the input, used to size the channel.
    pub struct InputSpecification {
        /// Input codec.
        codec: InputCodec,
        /// Maximum input bitrate, categorized coarsely.
        maximum_bitrate: InputMaximumBitrate,
        /// Input resolution, categorized coarsely.
        resolution: InputResolution,
    }
}

api_model! {
    pub struct ChannelEgressEndpoint {
        /// Public IP of where a channel's output comes from.
        source_ip: String,
    }
}

api_model! {
    /// A running or idle channel, as reported by the service.
    pub struct Channel {
        /// The unique arn of the channel.
        arn: String,
        /// The class for this channel. STANDARD for a channel with two
        /// pipelines or SINGLE_PIPELINE for a channel with one pipeline.
        channel_class: ChannelClass,
        /// A list of destinations of the channel. For UDP outputs, there is
        /// one destination per output. For other types (HLS, for example),
        /// there is one destination per packager.
        destinations: Vec<OutputDestination>,
        /// The endpoints where outgoing connections initiate from.
        egress_endpoints: Vec<ChannelEgressEndpoint>,
        encoder_settings: EncoderSettings,
        /// The unique id of the channel.
        id: String,
        /// List of input attachments for channel.
        input_attachments: Vec<InputAttachment>,
        input_specification: InputSpecification,
        /// The log level being written to CloudWatch Logs.
        log_level: LogLevel,
        /// The name of the channel. (user-mutable)
        name: String,
        /// The number of currently healthy pipelines.
        pipelines_running_count: i32,
        /// The Amazon Resource Name (ARN) of the role assumed when running the
        /// Channel.
        role_arn: String,
        state: ChannelState,
        /// A collection of key-value pairs.
        tags: Tags,
    }
}

api_model! {
    /// Entry of a channel listing. Same as `Channel` without encoder settings.
    pub struct ChannelSummary {
        arn: String,
        channel_class: ChannelClass,
        destinations: Vec<OutputDestination>,
        egress_endpoints: Vec<ChannelEgressEndpoint>,
        id: String,
        input_attachments: Vec<InputAttachment>,
        input_specification: InputSpecification,
        log_level: LogLevel,
        name: String,
        pipelines_running_count: i32,
        role_arn: String,
        state: ChannelState,
        tags: Tags,
    }
}

impl_tags!(Channel, ChannelSummary);
