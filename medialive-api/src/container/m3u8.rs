use crate::common::{check_min, check_pid, check_pid_list, check_range};
use crate::*;

api_enum! {
    pub enum M3u8NielsenId3Behavior {
        NoPassthrough => "NO_PASSTHROUGH",
        Passthrough => "PASSTHROUGH",
    }
}

api_enum! {
    pub enum M3u8PcrControl {
        ConfiguredPcrPeriod => "CONFIGURED_PCR_PERIOD",
        PcrEveryPesPacket => "PCR_EVERY_PES_PACKET",
    }
}

api_enum! {
    pub enum M3u8Scte35Behavior {
        NoPassthrough => "NO_PASSTHROUGH",
        Passthrough => "PASSTHROUGH",
    }
}

api_enum! {
    pub enum M3u8TimedMetadataBehavior {
        NoPassthrough => "NO_PASSTHROUGH",
        Passthrough => "PASSTHROUGH",
    }
}

api_model! {
    /// Transport stream settings for HLS segments.
    pub struct M3u8Settings {
        /// The number of audio frames to insert for each PES packet.
        audio_frames_per_pes: i32,
        /// Packet Identifier (PID) of the elementary audio stream(s) in the
        /// transport stream. Multiple values are accepted, and can be
        /// represented as ranges and/or by comma separated values.
        audio_pids: String,
        /// This parameter is unused and deprecated.
        ecm_pid: String,
        /// If set to passthrough, Nielsen inaudible tones for media tracking
        /// will be detected in the input audio and an equivalent ID3 tag will
        /// be inserted in the output.
        nielsen_id3_behavior: M3u8NielsenId3Behavior,
        /// The number of milliseconds between instances of this table in the
        /// output transport stream.
        pat_interval: i32,
        /// When set to pcrEveryPesPacket, a Program Clock Reference value is
        /// inserted for every Packetized Elementary Stream (PES) header.
        pcr_control: M3u8PcrControl,
        /// Maximum time in milliseconds between Program Clock References
        /// (PCRs) inserted into the transport stream.
        pcr_period: i32,
        /// Packet Identifier (PID) of the Program Clock Reference (PCR) in the
        /// transport stream.
        pcr_pid: String,
        /// The number of milliseconds between instances of this table in the
        /// output transport stream.
        pmt_interval: i32,
        /// Packet Identifier (PID) for the Program Map Table (PMT) in the
        /// transport stream.
        pmt_pid: String,
        /// The value of the program number field in the Program Map Table.
        program_num: i32,
        /// If set to passthrough, passes any SCTE-35 signals from the input
        /// source to this output.
        scte35_behavior: M3u8Scte35Behavior,
        /// Packet Identifier (PID) of the SCTE-35 stream in the transport
        /// stream.
        scte35_pid: String,
        /// When set to passthrough, timed metadata is passed through from
        /// input to output.
        timed_metadata_behavior: M3u8TimedMetadataBehavior,
        /// Packet Identifier (PID) of the timed metadata stream in the
        /// transport stream.
        timed_metadata_pid: String,
        /// The value of the transport stream ID field in the Program Map
        /// Table.
        transport_stream_id: i32,
        /// Packet Identifier (PID) of the elementary video stream in the
        /// transport stream.
        video_pid: String,
    }
}

impl Validate for M3u8Settings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min("M3u8Settings.audioFramesPerPes", self.audio_frames_per_pes, 0)?;
        check_range("M3u8Settings.patInterval", self.pat_interval, 0..=1000)?;
        check_range("M3u8Settings.pcrPeriod", self.pcr_period, 0..=500)?;
        check_range("M3u8Settings.pmtInterval", self.pmt_interval, 0..=1000)?;
        check_range("M3u8Settings.programNum", self.program_num, 0..=65535)?;
        check_range(
            "M3u8Settings.transportStreamId",
            self.transport_stream_id,
            0..=65535,
        )?;

        check_pid_list("M3u8Settings.audioPids", self.audio_pids.as_ref())?;
        check_pid("M3u8Settings.pcrPid", self.pcr_pid.as_ref())?;
        check_pid("M3u8Settings.pmtPid", self.pmt_pid.as_ref())?;
        check_pid("M3u8Settings.scte35Pid", self.scte35_pid.as_ref())?;
        check_pid("M3u8Settings.timedMetadataPid", self.timed_metadata_pid.as_ref())?;
        check_pid("M3u8Settings.videoPid", self.video_pid.as_ref())
    }
}
