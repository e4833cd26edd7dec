use crate::common::{check_min, check_pid, check_pid_list, check_range};
use crate::*;

api_enum! {
    pub enum M2tsAbsentInputAudioBehavior {
        Drop => "DROP",
        EncodeSilence => "ENCODE_SILENCE",
    }
}

api_enum! {
    pub enum M2tsArib {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum M2tsAribCaptionsPidControl {
        Auto => "AUTO",
        UseConfigured => "USE_CONFIGURED",
    }
}

api_enum! {
    pub enum M2tsAudioBufferModel {
        Atsc => "ATSC",
        Dvb => "DVB",
    }
}

api_enum! {
    pub enum M2tsAudioInterval {
        VideoAndFixedIntervals => "VIDEO_AND_FIXED_INTERVALS",
        VideoInterval => "VIDEO_INTERVAL",
    }
}

api_enum! {
    pub enum M2tsAudioStreamType {
        Atsc => "ATSC",
        Dvb => "DVB",
    }
}

api_enum! {
    pub enum M2tsBufferModel {
        Multiplex => "MULTIPLEX",
        None => "NONE",
    }
}

api_enum! {
    pub enum M2tsCcDescriptor {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum M2tsEbifControl {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

api_enum! {
    pub enum M2tsEbpPlacement {
        VideoAndAudioPids => "VIDEO_AND_AUDIO_PIDS",
        VideoPid => "VIDEO_PID",
    }
}

api_enum! {
    pub enum M2tsEsRateInPes {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

api_enum! {
    pub enum M2tsKlv {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

api_enum! {
    pub enum M2tsNielsenId3Behavior {
        NoPassthrough => "NO_PASSTHROUGH",
        Passthrough => "PASSTHROUGH",
    }
}

api_enum! {
    pub enum M2tsPcrControl {
        ConfiguredPcrPeriod => "CONFIGURED_PCR_PERIOD",
        PcrEveryPesPacket => "PCR_EVERY_PES_PACKET",
    }
}

api_enum! {
    pub enum M2tsRateMode {
        Cbr => "CBR",
        Vbr => "VBR",
    }
}

api_enum! {
    pub enum M2tsScte35Control {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
    }
}

api_enum! {
    pub enum M2tsSegmentationMarkers {
        Ebp => "EBP",
        EbpLegacy => "EBP_LEGACY",
        None => "NONE",
        PsiSegstart => "PSI_SEGSTART",
        RaiAdapt => "RAI_ADAPT",
        RaiSegstart => "RAI_SEGSTART",
    }
}

api_enum! {
    pub enum M2tsSegmentationStyle {
        MaintainCadence => "MAINTAIN_CADENCE",
        ResetCadence => "RESET_CADENCE",
    }
}

api_enum! {
    pub enum M2tsTimedMetadataBehavior {
        NoPassthrough => "NO_PASSTHROUGH",
        Passthrough => "PASSTHROUGH",
    }
}

api_model! {
    /// MPEG-2 transport stream muxer settings.
    ///
    /// PID fields are strings holding a decimal or hexadecimal value in
    /// `32..=8182`; `*_pids` fields additionally accept comma separated lists
    /// and ranges such as `"482-492, 0x1f0"`.
    pub struct M2tsSettings {
        /// When set to drop, output audio streams will be removed from the
        /// program if the selected input audio stream is removed from the
        /// input. If this is set to encodeSilence, all output audio streams
        /// will output encoded silence when not connected to an active input
        /// stream.
        absent_input_audio_behavior: M2tsAbsentInputAudioBehavior,
        /// When set to enabled, uses ARIB-compliant field muxing and removes
        /// video descriptor.
        arib: M2tsArib,
        /// Packet Identifier (PID) for ARIB Captions in the transport stream.
        arib_captions_pid: String,
        /// If set to auto, pid number used for ARIB Captions will be
        /// auto-selected from unused pids. If set to useConfigured, ARIB
        /// Captions will be on the configured pid number.
        arib_captions_pid_control: M2tsAribCaptionsPidControl,
        /// When set to dvb, uses DVB buffer model for Dolby Digital audio. When
        /// set to atsc, the ATSC model is used.
        audio_buffer_model: M2tsAudioBufferModel,
        /// The number of audio frames to insert for each PES packet.
        audio_frames_per_pes: i32,
        /// Packet Identifier (PID) of the elementary audio stream(s) in the
        /// transport stream.
        audio_pids: String,
        /// When set to atsc, uses stream type = 0x81 for AC3 and stream type =
        /// 0x87 for EAC3. When set to dvb, uses stream type = 0x06.
        audio_stream_type: M2tsAudioStreamType,
        /// The output bitrate of the transport stream in bits per second.
        /// Setting to 0 lets the muxer automatically determine the appropriate
        /// bitrate.
        bitrate: i32,
        /// If set to multiplex, use multiplex buffer model for accurate
        /// interleaving. Setting to bufferModel to none can lead to lower
        /// latency, but low-memory devices may not be able to play back the
        /// stream without interruptions.
        buffer_model: M2tsBufferModel,
        /// When set to enabled, generates captionServiceDescriptor in PMT.
        cc_descriptor: M2tsCcDescriptor,
        /// Inserts DVB Network Information Table (NIT) at the specified table
        /// repetition interval.
        dvb_nit_settings: DvbNitSettings,
        /// Inserts DVB Service Description Table (SDT) at the specified table
        /// repetition interval.
        dvb_sdt_settings: DvbSdtSettings,
        /// Packet Identifier (PID) for input source DVB Subtitle data to this
        /// output.
        dvb_sub_pids: String,
        /// Inserts DVB Time and Date Table (TDT) at the specified table
        /// repetition interval.
        dvb_tdt_settings: DvbTdtSettings,
        /// Packet Identifier (PID) for input source DVB Teletext data to this
        /// output.
        dvb_teletext_pid: String,
        /// If set to passthrough, passes any EBIF data from the input source
        /// to this output.
        ebif: M2tsEbifControl,
        /// When videoAndFixedIntervals is selected, audio EBP markers will be
        /// added to partitions 3 and 4. The interval between these additional
        /// markers will be fixed, and will be slightly shorter than the video
        /// EBP marker interval. Only available when EBP Cablelabs segmentation
        /// markers are selected.
        ebp_audio_interval: M2tsAudioInterval,
        /// When set, enforces that Encoder Boundary Points do not come within
        /// the specified time interval of each other by looking ahead at input
        /// video.
        ebp_lookahead_ms: i32,
        /// Controls placement of EBP on Audio PIDs. If set to
        /// videoAndAudioPids, EBP markers will be placed on the video PID and
        /// all audio PIDs. If set to videoPid, EBP markers will be placed on
        /// only the video PID.
        ebp_placement: M2tsEbpPlacement,
        /// This field is unused and deprecated.
        ecm_pid: String,
        /// Include or exclude the ES Rate field in the PES header.
        es_rate_in_pes: M2tsEsRateInPes,
        /// Packet Identifier (PID) for input source ETV Platform data to this
        /// output.
        etv_platform_pid: String,
        /// Packet Identifier (PID) for input source ETV Signal data to this
        /// output.
        etv_signal_pid: String,
        /// The length in seconds of each fragment. Only used with EBP markers.
        fragment_time: f64,
        /// If set to passthrough, passes any KLV data from the input source to
        /// this output.
        klv: M2tsKlv,
        /// Packet Identifier (PID) for input source KLV data to this output.
        klv_data_pids: String,
        /// If set to passthrough, Nielsen inaudible tones for media tracking
        /// will be detected in the input audio and an equivalent ID3 tag will
        /// be inserted in the output.
        nielsen_id3_behavior: M2tsNielsenId3Behavior,
        /// Value in bits per second of extra null packets to insert into the
        /// transport stream. This can be used if a downstream encryption system
        /// requires periodic null packets.
        null_packet_bitrate: f64,
        /// The number of milliseconds between instances of this table in the
        /// output transport stream. Valid values are 0, 10..1000.
        pat_interval: i32,
        /// When set to pcrEveryPesPacket, a Program Clock Reference value is
        /// inserted for every Packetized Elementary Stream (PES) header. This
        /// parameter is effective only when the PCR PID is the same as the
        /// video or audio elementary stream.
        pcr_control: M2tsPcrControl,
        /// Maximum time in milliseconds between Program Clock Reference (PCRs)
        /// inserted into the transport stream.
        pcr_period: i32,
        /// Packet Identifier (PID) of the Program Clock Reference (PCR) in the
        /// transport stream. When no value is given, the encoder will assign
        /// the same value as the Video PID.
        pcr_pid: String,
        /// The number of milliseconds between instances of this table in the
        /// output transport stream. Valid values are 0, 10..1000.
        pmt_interval: i32,
        /// Packet Identifier (PID) for the Program Map Table (PMT) in the
        /// transport stream.
        pmt_pid: String,
        /// The value of the program number field in the Program Map Table.
        program_num: i32,
        /// When vbr, does not insert null packets into transport stream to fill
        /// specified bitrate. The bitrate setting acts as the maximum bitrate
        /// when vbr is set.
        rate_mode: M2tsRateMode,
        /// Packet Identifier (PID) for input source SCTE-27 data to this
        /// output.
        scte27_pids: String,
        /// Optionally pass SCTE-35 signals from the input source to this
        /// output.
        scte35_control: M2tsScte35Control,
        /// Packet Identifier (PID) of the SCTE-35 stream in the transport
        /// stream.
        scte35_pid: String,
        /// Inserts segmentation markers at each segmentationTime period.
        /// raiSegstart sets the Random Access Indicator bit in the adaptation
        /// field. raiAdapt sets the RAI bit and adds the current timecode in
        /// the private data bytes. psiSegstart inserts PAT and PMT tables at
        /// the start of segments. ebp adds Encoder Boundary Point information
        /// to the adaptation field as per OpenCable specification
        /// OC-SP-EBP-I01-130118. ebpLegacy adds Encoder Boundary Point
        /// information to the adaptation field using a legacy proprietary
        /// format.
        segmentation_markers: M2tsSegmentationMarkers,
        /// The segmentation style parameter controls how segmentation markers
        /// are inserted into the transport stream. With resetCadence a segment
        /// truncated by an avail resets the segmentation cadence, so the next
        /// segment lasts segmentationTime seconds. With maintainCadence the
        /// cadence is kept and the next segment is likely truncated as well.
        segmentation_style: M2tsSegmentationStyle,
        /// The length in seconds of each segment. Required unless markers is
        /// set to _none_.
        segmentation_time: f64,
        /// When set to passthrough, timed metadata will be passed through from
        /// input to output.
        timed_metadata_behavior: M2tsTimedMetadataBehavior,
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

impl Validate for M2tsSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min("M2tsSettings.audioFramesPerPes", self.audio_frames_per_pes, 0)?;
        check_min("M2tsSettings.bitrate", self.bitrate, 0)?;
        check_range("M2tsSettings.ebpLookaheadMs", self.ebp_lookahead_ms, 0..=10000)?;
        check_table_interval("M2tsSettings.patInterval", self.pat_interval)?;
        check_range("M2tsSettings.pcrPeriod", self.pcr_period, 0..=500)?;
        check_table_interval("M2tsSettings.pmtInterval", self.pmt_interval)?;
        check_range("M2tsSettings.programNum", self.program_num, 0..=65535)?;
        check_range(
            "M2tsSettings.transportStreamId",
            self.transport_stream_id,
            0..=65535,
        )?;

        check_pid("M2tsSettings.aribCaptionsPid", self.arib_captions_pid.as_ref())?;
        check_pid_list("M2tsSettings.audioPids", self.audio_pids.as_ref())?;
        check_pid_list("M2tsSettings.dvbSubPids", self.dvb_sub_pids.as_ref())?;
        check_pid("M2tsSettings.dvbTeletextPid", self.dvb_teletext_pid.as_ref())?;
        check_pid("M2tsSettings.etvPlatformPid", self.etv_platform_pid.as_ref())?;
        check_pid("M2tsSettings.etvSignalPid", self.etv_signal_pid.as_ref())?;
        check_pid_list("M2tsSettings.klvDataPids", self.klv_data_pids.as_ref())?;
        check_pid("M2tsSettings.pcrPid", self.pcr_pid.as_ref())?;
        check_pid("M2tsSettings.pmtPid", self.pmt_pid.as_ref())?;
        check_pid_list("M2tsSettings.scte27Pids", self.scte27_pids.as_ref())?;
        check_pid("M2tsSettings.scte35Pid", self.scte35_pid.as_ref())?;
        check_pid("M2tsSettings.timedMetadataPid", self.timed_metadata_pid.as_ref())?;
        check_pid("M2tsSettings.videoPid", self.video_pid.as_ref())?;

        let markers_enabled = !matches!(
            self.segmentation_markers,
            None | Some(M2tsSegmentationMarkers::None)
        );
        if markers_enabled && self.segmentation_time.is_none() {
            return Err(ModelError::invalid(
                "M2tsSettings.segmentationTime",
                "required when segmentation markers are enabled",
            ));
        }

        self.dvb_nit_settings.validate()?;
        self.dvb_sdt_settings.validate()?;
        self.dvb_tdt_settings.validate()?;
        Ok(())
    }
}

/// PSI table repetition interval: either disabled (0) or 10..=1000 ms.
pub(crate) fn check_table_interval(
    field: &'static str,
    value: Option<i32>,
) -> Result<(), ModelError> {
    match value {
        Some(0) => Ok(()),
        value => check_range(field, value, 10..=1000),
    }
}
