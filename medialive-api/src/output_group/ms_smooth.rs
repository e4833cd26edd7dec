use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum SmoothGroupAudioOnlyTimecodeControl {
        Passthrough => "PASSTHROUGH",
        UseConfiguredClock => "USE_CONFIGURED_CLOCK",
    }
}

api_enum! {
    pub enum SmoothGroupCertificateMode {
        SelfSigned => "SELF_SIGNED",
        VerifyAuthenticity => "VERIFY_AUTHENTICITY",
    }
}

api_enum! {
    pub enum SmoothGroupEventIdMode {
        NoEventId => "NO_EVENT_ID",
        UseConfigured => "USE_CONFIGURED",
        UseTimestamp => "USE_TIMESTAMP",
    }
}

api_enum! {
    pub enum SmoothGroupEventStopBehavior {
        None => "NONE",
        SendEos => "SEND_EOS",
    }
}

api_enum! {
    pub enum SmoothGroupSegmentationMode {
        UseInputSegmentation => "USE_INPUT_SEGMENTATION",
        UseSegmentDuration => "USE_SEGMENT_DURATION",
    }
}

api_enum! {
    pub enum SmoothGroupSparseTrackType {
        None => "NONE",
        Scte35 => "SCTE_35",
        Scte35WithoutSegmentation => "SCTE_35_WITHOUT_SEGMENTATION",
    }
}

api_enum! {
    pub enum SmoothGroupStreamManifestBehavior {
        DoNotSend => "DO_NOT_SEND",
        Send => "SEND",
    }
}

api_enum! {
    pub enum SmoothGroupTimestampOffsetMode {
        UseConfiguredOffset => "USE_CONFIGURED_OFFSET",
        UseEventStartDate => "USE_EVENT_START_DATE",
    }
}

api_enum! {
    pub enum MsSmoothH265PackagingType {
        Hev1 => "HEV1",
        Hvc1 => "HVC1",
    }
}

api_model! {
    /// Microsoft Smooth Streaming output group, pushed to an IIS publishing
    /// point.
    pub struct MsSmoothGroupSettings {
        /// The value of the "Acquisition Point Identity" element used in each
        /// message placed in the sparse track. Only enabled if sparseTrackType
        /// is not "none".
        acquisition_point_id: String,
        /// If set to passthrough for an audio-only MS Smooth output, the
        /// fragment absolute time will be set to the current timecode. This
        /// option does not write timecodes to the audio elementary stream.
        audio_only_timecode_control: SmoothGroupAudioOnlyTimecodeControl,
        /// If set to verifyAuthenticity, verify the https certificate chain to
        /// a trusted Certificate Authority (CA). This will cause https outputs
        /// to self-signed certificates to fail.
        certificate_mode: SmoothGroupCertificateMode,
        /// Number of seconds to wait before retrying connection to the IIS
        /// server if the connection is lost.
        connection_retry_interval: i32,
        /// Smooth Streaming publish point on an IIS server.
        destination: OutputLocationRef,
        /// MS Smooth event ID to be sent to the IIS server. Should only be
        /// specified if eventIdMode is set to useConfigured.
        event_id: String,
        /// Specifies whether or not to send an event ID to the IIS server.
        event_id_mode: SmoothGroupEventIdMode,
        /// When set to sendEos, send EOS signal to IIS server when stopping
        /// the event.
        event_stop_behavior: SmoothGroupEventStopBehavior,
        /// Size in seconds of file cache for streaming outputs.
        filecache_duration: i32,
        /// Length of mp4 fragments to generate (in seconds). Fragment length
        /// must be compatible with GOP size and framerate.
        fragment_length: i32,
        /// Parameter that control output group behavior on input loss.
        input_loss_action: InputLossActionForMsSmoothOut,
        /// Number of retry attempts.
        num_retries: i32,
        /// Number of seconds before initiating a restart due to output
        /// failure, due to exhausting the numRetries on one segment, or
        /// exceeding filecacheDuration.
        restart_delay: i32,
        /// useInputSegmentation has been deprecated. The configured segment
        /// size is always used.
        segmentation_mode: SmoothGroupSegmentationMode,
        /// Number of milliseconds to delay the output from the second
        /// pipeline.
        send_delay_ms: i32,
        /// If set to scte35, use incoming SCTE-35 messages to generate a
        /// sparse track in this group of MS-Smooth outputs.
        sparse_track_type: SmoothGroupSparseTrackType,
        /// When set to send, send stream manifest so publishing point doesn't
        /// start until all streams start.
        stream_manifest_behavior: SmoothGroupStreamManifestBehavior,
        /// Timestamp offset for the event. Only used if timestampOffsetMode is
        /// set to useConfiguredOffset.
        timestamp_offset: String,
        /// Type of timestamp date offset to use.
        timestamp_offset_mode: SmoothGroupTimestampOffsetMode,
    }
}

api_enum! {
    pub enum InputLossActionForMsSmoothOut {
        EmitOutput => "EMIT_OUTPUT",
        PauseOutput => "PAUSE_OUTPUT",
    }
}

impl Validate for MsSmoothGroupSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min(
            "MsSmoothGroupSettings.connectionRetryInterval",
            self.connection_retry_interval,
            0,
        )?;
        check_min(
            "MsSmoothGroupSettings.filecacheDuration",
            self.filecache_duration,
            0,
        )?;
        check_min("MsSmoothGroupSettings.fragmentLength", self.fragment_length, 1)?;
        check_min("MsSmoothGroupSettings.numRetries", self.num_retries, 0)?;
        check_min("MsSmoothGroupSettings.restartDelay", self.restart_delay, 0)?;
        check_range(
            "MsSmoothGroupSettings.sendDelayMs",
            self.send_delay_ms,
            0..=10000,
        )?;

        if self.event_id_mode == Some(SmoothGroupEventIdMode::UseConfigured)
            && self.event_id.is_none()
        {
            return Err(ModelError::invalid(
                "MsSmoothGroupSettings.eventId",
                "required when eventIdMode is USE_CONFIGURED",
            ));
        }
        Ok(())
    }
}

api_model! {
    pub struct MsSmoothOutputSettings {
        /// Only applicable when this output is referencing an H.265 video
        /// description.
        h265_packaging_type: MsSmoothH265PackagingType,
        /// String concatenated to the end of the destination filename.
        name_modifier: String,
    }
}
