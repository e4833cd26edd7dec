use std::collections::HashSet;

use crate::common::check_range;
use crate::*;

api_enum! {
    pub enum TimecodeConfigSource {
        Embedded => "EMBEDDED",
        Systemclock => "SYSTEMCLOCK",
        Zerobased => "ZEROBASED",
    }
}

api_model! {
    /// Timecode Config
    pub struct TimecodeConfig {
        /// Identifies the source for the timecode that will be associated with
        /// the events outputs. Embedded (embedded): Initialize the output
        /// timecode with timecode from the the source. If no embedded timecode
        /// is detected in the source, the system falls back to using "Start at
        /// 0" (zerobased). System Clock (systemclock): Use the UTC time. Start
        /// at 0 (zerobased): The time of the first frame of the event will be
        /// 00:00:00:00.
        source: TimecodeConfigSource,
        /// Threshold in frames beyond which output timecode is resynchronized
        /// to the input timecode. Discrepancies below this threshold are
        /// permitted to avoid unnecessary discontinuities in the output
        /// timecode. No timecode sync when this is not specified.
        sync_threshold: i32,
    }
}

impl Validate for TimecodeConfig {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("TimecodeConfig.syncThreshold", self.sync_threshold, 1..=1_000_000)
    }
}

api_model! {
    /// Encoder Settings
    pub struct EncoderSettings {
        audio_descriptions: Vec<AudioDescription>,
        /// Settings for caption decriptions.
        caption_descriptions: Vec<CaptionDescription>,
        output_groups: Vec<OutputGroup>,
        /// Contains settings used to acquire and adjust timecode information
        /// from inputs.
        timecode_config: TimecodeConfig,
        video_descriptions: Vec<VideoDescription>,
    }
}

impl Validate for EncoderSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.audio_descriptions.validate()?;
        self.caption_descriptions.validate()?;
        self.video_descriptions.validate()?;
        self.timecode_config.validate()?;
        self.output_groups.validate()?;
        self.check_references()
    }
}

impl EncoderSettings {
    /// Every `destinationRefId` used by output groups and outputs, in order of
    /// appearance.
    pub fn destination_refs(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        for group in self.output_groups.iter().flatten() {
            if let Some(settings) = &group.output_group_settings {
                let group_destination = settings
                    .hls_group_settings
                    .as_ref()
                    .and_then(|hls| hls.destination.as_ref())
                    .or_else(|| {
                        settings
                            .ms_smooth_group_settings
                            .as_ref()
                            .and_then(|smooth| smooth.destination.as_ref())
                    });
                refs.extend(group_destination.and_then(|d| d.destination_ref_id.as_deref()));
            }
            for output in group.outputs.iter().flatten() {
                let Some(settings) = &output.output_settings else {
                    continue;
                };
                let output_destination = settings
                    .udp_output_settings
                    .as_ref()
                    .and_then(|udp| udp.destination.as_ref())
                    .or_else(|| {
                        settings
                            .multiplex_output_settings
                            .as_ref()
                            .and_then(|multiplex| multiplex.destination.as_ref())
                    });
                refs.extend(output_destination.and_then(|d| d.destination_ref_id.as_deref()));
            }
        }
        refs
    }

    /// Outputs refer to audio, caption and video descriptions by name. Every
    /// referenced name must exist.
    fn check_references(&self) -> Result<(), ModelError> {
        let audio = description_names(&self.audio_descriptions, |d| d.name.as_deref());
        let captions = description_names(&self.caption_descriptions, |d| d.name.as_deref());
        let video = description_names(&self.video_descriptions, |d| d.name.as_deref());

        let outputs = self
            .output_groups
            .iter()
            .flatten()
            .flat_map(|group| group.outputs.iter().flatten());
        for output in outputs {
            for name in output.audio_description_names.iter().flatten() {
                check_reference("Output.audioDescriptionNames", &audio, name)?;
            }
            for name in output.caption_description_names.iter().flatten() {
                check_reference("Output.captionDescriptionNames", &captions, name)?;
            }
            if let Some(name) = &output.video_description_name {
                check_reference("Output.videoDescriptionName", &video, name)?;
            }
        }
        Ok(())
    }
}

fn description_names<'a, T>(
    descriptions: &'a Option<Vec<T>>,
    name: impl Fn(&'a T) -> Option<&'a str>,
) -> HashSet<&'a str> {
    descriptions.iter().flatten().filter_map(name).collect()
}

fn check_reference(
    field: &'static str,
    known: &HashSet<&str>,
    name: &str,
) -> Result<(), ModelError> {
    if known.contains(name) {
        return Ok(());
    }
    Err(ModelError::invalid(
        field,
        format!("no description named {name:?}"),
    ))
}
