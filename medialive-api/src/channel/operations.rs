use std::collections::HashSet;

use crate::common::check_range;
use crate::*;

api_model! {
    /// A request to create a channel.
    pub struct CreateChannelRequest {
        /// The class for this channel. STANDARD for a channel with two
        /// pipelines or SINGLE_PIPELINE for a channel with one pipeline.
        channel_class: ChannelClass,
        destinations: Vec<OutputDestination>,
        encoder_settings: EncoderSettings,
        /// List of input attachments for channel.
        input_attachments: Vec<InputAttachment>,
        /// Specification of input for this channel (max. bitrate, resolution,
        /// codec, etc.)
        input_specification: InputSpecification,
        /// The log level to write to CloudWatch Logs.
        log_level: LogLevel,
        /// Name of channel.
        name: String,
        /// Unique request ID to be specified. This is needed to prevent
        /// retries from creating multiple resources.
        request_id: String,
        /// An optional Amazon Resource Name (ARN) of the role to assume when
        /// running the Channel.
        role_arn: String,
        /// A collection of key-value pairs.
        tags: Tags,
    }
}

impl_tags!(CreateChannelRequest);

impl Validate for CreateChannelRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_destinations(
            self.channel_class.as_ref(),
            self.destinations.as_deref(),
            self.encoder_settings.as_ref(),
        )?;
        self.input_attachments.validate()?;
        self.encoder_settings.validate()
    }
}

api_model! {
    pub struct CreateChannelResult {
        channel: Channel,
    }
}

api_model! {
    pub struct DescribeChannelRequest {
        /// channel ID
        channel_id: String,
    }
}

pub type DescribeChannelResult = Channel;

api_model! {
    /// A request to update a channel.
    pub struct UpdateChannelRequest {
        /// channel ID. Sent in the request path.
        channel_id: String,
        /// A list of output destinations for this channel.
        destinations: Vec<OutputDestination>,
        /// The encoder settings for this channel.
        encoder_settings: EncoderSettings,
        input_attachments: Vec<InputAttachment>,
        /// Specification of input for this channel (max. bitrate, resolution,
        /// codec, etc.)
        input_specification: InputSpecification,
        /// The log level to write to CloudWatch Logs.
        log_level: LogLevel,
        /// The name of the channel.
        name: String,
        /// An optional Amazon Resource Name (ARN) of the role to assume when
        /// running the Channel. If you do not specify this on an update call
        /// but the role was previously set that role will be removed.
        role_arn: String,
    }
}

impl Validate for UpdateChannelRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_destinations(
            None,
            self.destinations.as_deref(),
            self.encoder_settings.as_ref(),
        )?;
        self.input_attachments.validate()?;
        self.encoder_settings.validate()
    }
}

api_model! {
    pub struct UpdateChannelResult {
        channel: Channel,
    }
}

api_model! {
    pub struct DeleteChannelRequest {
        /// Unique ID of the channel.
        channel_id: String,
    }
}

pub type DeleteChannelResult = Channel;

api_model! {
    pub struct StartChannelRequest {
        /// A request to start a channel
        channel_id: String,
    }
}

pub type StartChannelResult = Channel;

api_model! {
    pub struct StopChannelRequest {
        /// A request to stop a running channel
        channel_id: String,
    }
}

pub type StopChannelResult = Channel;

api_model! {
    pub struct ListChannelsRequest {
        max_results: i32,
        next_token: String,
    }
}

impl Validate for ListChannelsRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("ListChannelsRequest.maxResults", self.max_results, 1..=1000)
    }
}

api_model! {
    pub struct ListChannelsResult {
        channels: Vec<ChannelSummary>,
        next_token: String,
    }
}

/// Destination ids must be unique and cover every destination referenced by
/// the encoder settings. Standard channels push to one URL per pipeline.
fn check_destinations(
    channel_class: Option<&ChannelClass>,
    destinations: Option<&[OutputDestination]>,
    encoder_settings: Option<&EncoderSettings>,
) -> Result<(), ModelError> {
    let destinations = destinations.unwrap_or_default();

    let mut ids = HashSet::new();
    for destination in destinations {
        if let Some(id) = destination.id.as_deref()
            && !ids.insert(id)
        {
            return Err(ModelError::invalid(
                "OutputDestination.id",
                format!("duplicate destination id {id:?}"),
            ));
        }

        let expected = match channel_class {
            Some(ChannelClass::Standard) => 2,
            Some(ChannelClass::SinglePipeline) => 1,
            _ => continue,
        };
        if let Some(settings) = &destination.settings
            && settings.len() != expected
        {
            return Err(ModelError::invalid(
                "OutputDestination.settings",
                format!(
                    "{} channels need {expected} destination settings, got {}",
                    channel_class.map(ChannelClass::as_str).unwrap_or_default(),
                    settings.len()
                ),
            ));
        }
    }

    let Some(encoder_settings) = encoder_settings else {
        return Ok(());
    };
    // Updates may omit destinations and keep the existing ones.
    if destinations.is_empty() && channel_class.is_none() {
        return Ok(());
    }
    for reference in encoder_settings.destination_refs() {
        if !ids.contains(reference) {
            return Err(ModelError::invalid(
                "OutputLocationRef.destinationRefId",
                format!("no destination with id {reference:?}"),
            ));
        }
    }
    Ok(())
}
