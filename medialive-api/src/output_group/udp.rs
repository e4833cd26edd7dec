use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum InputLossActionForUdpOut {
        DropProgram => "DROP_PROGRAM",
        DropTs => "DROP_TS",
        EmitProgram => "EMIT_PROGRAM",
    }
}

api_enum! {
    pub enum UdpTimedMetadataId3Frame {
        None => "NONE",
        Priv => "PRIV",
        Tdrl => "TDRL",
    }
}

api_model! {
    pub struct UdpGroupSettings {
        /// Specifies behavior of last resort when input video is lost, and no
        /// more backup inputs are available.
        input_loss_action: InputLossActionForUdpOut,
        /// Indicates ID3 frame that has the timecode.
        timed_metadata_id3_frame: UdpTimedMetadataId3Frame,
        /// Timed Metadata interval in seconds.
        timed_metadata_id3_period: i32,
    }
}

impl Validate for UdpGroupSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min(
            "UdpGroupSettings.timedMetadataId3Period",
            self.timed_metadata_id3_period,
            0,
        )
    }
}

api_model! {
    pub struct UdpContainerSettings {
        m2ts_settings: M2tsSettings,
    }
}

api_model! {
    /// MPEG transport stream pushed over UDP or RTP.
    pub struct UdpOutputSettings {
        /// UDP output buffering in milliseconds. Larger values increase latency
        /// through the transcoder but simultaneously assist the transcoder in
        /// maintaining a constant, low-jitter UDP/RTP output while
        /// accommodating clock recovery, input switching, input disruptions,
        /// picture reordering, etc.
        buffer_msec: i32,
        container_settings: UdpContainerSettings,
        /// Destination address and port number for RTP or UDP packets. Can be
        /// unicast or multicast RTP or UDP (eg. rtp://239.10.10.10:5001 or
        /// udp://10.100.100.100:5002).
        destination: OutputLocationRef,
    }
}

impl Validate for UdpOutputSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("UdpOutputSettings.bufferMsec", self.buffer_msec, 0..=10000)?;
        self.container_settings
            .as_ref()
            .and_then(|container| container.m2ts_settings.as_ref())
            .map_or(Ok(()), Validate::validate)
    }
}
