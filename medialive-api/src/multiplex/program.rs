use crate::common::{check_pid_number, check_range};
use crate::*;

api_enum! {
    /// Indicates which pipeline is preferred by the multiplex for program
    /// ingest.
    pub enum PreferredChannelPipeline {
        CurrentlyActive => "CURRENTLY_ACTIVE",
        Pipeline0 => "PIPELINE_0",
        Pipeline1 => "PIPELINE_1",
    }
}

api_model! {
    /// Packet identifiers assigned to a multiplex program. Unlike the muxer
    /// settings of an output, PIDs here are plain integers.
    pub struct MultiplexProgramPacketIdentifiersMap {
        audio_pids: Vec<i32>,
        dvb_sub_pids: Vec<i32>,
        dvb_teletext_pid: i32,
        etv_platform_pid: i32,
        etv_signal_pid: i32,
        klv_data_pids: Vec<i32>,
        pcr_pid: i32,
        pmt_pid: i32,
        private_metadata_pid: i32,
        scte27_pids: Vec<i32>,
        scte35_pid: i32,
        timed_metadata_pid: i32,
        video_pid: i32,
    }
}

impl Validate for MultiplexProgramPacketIdentifiersMap {
    fn validate(&self) -> Result<(), ModelError> {
        let single = [
            ("MultiplexProgramPacketIdentifiersMap.dvbTeletextPid", self.dvb_teletext_pid),
            ("MultiplexProgramPacketIdentifiersMap.etvPlatformPid", self.etv_platform_pid),
            ("MultiplexProgramPacketIdentifiersMap.etvSignalPid", self.etv_signal_pid),
            ("MultiplexProgramPacketIdentifiersMap.pcrPid", self.pcr_pid),
            ("MultiplexProgramPacketIdentifiersMap.pmtPid", self.pmt_pid),
            (
                "MultiplexProgramPacketIdentifiersMap.privateMetadataPid",
                self.private_metadata_pid,
            ),
            ("MultiplexProgramPacketIdentifiersMap.scte35Pid", self.scte35_pid),
            (
                "MultiplexProgramPacketIdentifiersMap.timedMetadataPid",
                self.timed_metadata_pid,
            ),
            ("MultiplexProgramPacketIdentifiersMap.videoPid", self.video_pid),
        ];
        for (field, pid) in single {
            check_pid_number(field, pid)?;
        }

        let lists = [
            ("MultiplexProgramPacketIdentifiersMap.audioPids", &self.audio_pids),
            ("MultiplexProgramPacketIdentifiersMap.dvbSubPids", &self.dvb_sub_pids),
            ("MultiplexProgramPacketIdentifiersMap.klvDataPids", &self.klv_data_pids),
            ("MultiplexProgramPacketIdentifiersMap.scte27Pids", &self.scte27_pids),
        ];
        for (field, pids) in lists {
            for pid in pids.iter().flatten() {
                check_pid_number(field, Some(*pid))?;
            }
        }
        Ok(())
    }
}

api_model! {
    /// Transport stream service descriptor configuration for the Multiplex
    /// program.
    pub struct MultiplexProgramServiceDescriptor {
        /// Name of the provider. Maximum length is 256 characters.
        provider_name: String,
        /// Name of the service. Maximum length is 256 characters.
        service_name: String,
    }
}

impl Validate for MultiplexProgramServiceDescriptor {
    fn validate(&self) -> Result<(), ModelError> {
        for (field, value) in [
            ("MultiplexProgramServiceDescriptor.providerName", &self.provider_name),
            ("MultiplexProgramServiceDescriptor.serviceName", &self.service_name),
        ] {
            if let Some(value) = value
                && value.chars().count() > 256
            {
                return Err(ModelError::invalid(field, "longer than 256 characters"));
            }
        }
        Ok(())
    }
}

api_model! {
    /// Statmux rate control settings.
    pub struct MultiplexStatmuxVideoSettings {
        /// Maximum statmux bitrate.
        maximum_bitrate: i32,
        /// Minimum statmux bitrate.
        minimum_bitrate: i32,
        /// The purpose of the priority is to use a combination of the
        /// priority and the bitrate range to affect the quality of the video
        /// when there is not enough bandwidth for all the programs.
        priority: i32,
    }
}

impl Validate for MultiplexStatmuxVideoSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "MultiplexStatmuxVideoSettings.maximumBitrate",
            self.maximum_bitrate,
            100_000..=100_000_000,
        )?;
        check_range(
            "MultiplexStatmuxVideoSettings.minimumBitrate",
            self.minimum_bitrate,
            100_000..=100_000_000,
        )?;
        check_range("MultiplexStatmuxVideoSettings.priority", self.priority, -5..=5)?;
        if let (Some(min), Some(max)) = (self.minimum_bitrate, self.maximum_bitrate)
            && min > max
        {
            return Err(ModelError::invalid(
                "MultiplexStatmuxVideoSettings.minimumBitrate",
                format!("{min} is greater than maximumBitrate ({max})"),
            ));
        }
        Ok(())
    }
}

api_model! {
    /// The video configuration for each program in a multiplex. Either a
    /// constant bitrate or statmux settings are expected, not both.
    pub struct MultiplexVideoSettings {
        /// The constant bitrate configuration for the video encode. When this
        /// field is defined, StatmuxSettings must be undefined.
        constant_bitrate: i32,
        /// Statmux rate control settings. When this field is defined,
        /// ConstantBitrate must be undefined.
        statmux_settings: MultiplexStatmuxVideoSettings,
    }
}

impl Validate for MultiplexVideoSettings {
    fn validate(&self) -> Result<(), ModelError> {
        if self.constant_bitrate.is_some() && self.statmux_settings.is_some() {
            return Err(ModelError::invalid(
                "MultiplexVideoSettings",
                "constantBitrate and statmuxSettings are mutually exclusive",
            ));
        }
        check_range(
            "MultiplexVideoSettings.constantBitrate",
            self.constant_bitrate,
            100_000..=100_000_000,
        )?;
        self.statmux_settings.validate()
    }
}

api_model! {
    /// Multiplex Program settings configuration.
    pub struct MultiplexProgramSettings {
        /// Indicates which pipeline is preferred by the multiplex for program
        /// ingest.
        preferred_channel_pipeline: PreferredChannelPipeline,
        /// Unique program number.
        program_number: i32,
        /// Transport stream service descriptor configuration for the Multiplex
        /// program.
        service_descriptor: MultiplexProgramServiceDescriptor,
        /// Program video settings configuration.
        video_settings: MultiplexVideoSettings,
    }
}

impl Validate for MultiplexProgramSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "MultiplexProgramSettings.programNumber",
            self.program_number,
            0..=65535,
        )?;
        self.service_descriptor.validate()?;
        self.video_settings.validate()
    }
}

api_model! {
    /// The current source for one of the pipelines in the multiplex.
    pub struct MultiplexProgramPipelineDetail {
        /// Identifies the channel pipeline that is currently active for the
        /// pipeline (identified by PipelineId) in the multiplex.
        active_channel_pipeline: String,
        /// Identifies a specific pipeline in the multiplex.
        pipeline_id: String,
    }
}

api_model! {
    /// The multiplex program object.
    pub struct MultiplexProgram {
        /// The MediaLive channel associated with the program.
        channel_id: String,
        /// The settings for this multiplex program.
        multiplex_program_settings: MultiplexProgramSettings,
        /// The packet identifier map for this multiplex program.
        packet_identifiers_map: MultiplexProgramPacketIdentifiersMap,
        /// Contains information about the current sources for the specified
        /// program in the specified multiplex.
        pipeline_details: Vec<MultiplexProgramPipelineDetail>,
        /// The name of the multiplex program.
        program_name: String,
    }
}

impl Validate for MultiplexProgram {
    fn validate(&self) -> Result<(), ModelError> {
        self.multiplex_program_settings.validate()?;
        self.packet_identifiers_map.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_identifiers() {
        let map = MultiplexProgramPacketIdentifiersMap::default()
            .video_pid(481)
            .audio_pids([482, 483])
            .scte35_pid(500);
        assert_eq!(map.validate(), Ok(()));

        assert!(matches!(
            map.clone().pmt_pid(8191).validate(),
            Err(ModelError::OutOfRange {
                field: "MultiplexProgramPacketIdentifiersMap.pmtPid",
                ..
            })
        ));
        assert!(matches!(
            map.audio_pids(vec![482, 16]).validate(),
            Err(ModelError::OutOfRange {
                field: "MultiplexProgramPacketIdentifiersMap.audioPids",
                ..
            })
        ));
    }

    #[test]
    fn test_video_settings_exclusive() {
        let settings = MultiplexVideoSettings::default()
            .constant_bitrate(2_000_000)
            .statmux_settings(MultiplexStatmuxVideoSettings::default().priority(1));
        assert!(matches!(
            settings.validate(),
            Err(ModelError::Invalid { .. })
        ));

        let statmux = MultiplexStatmuxVideoSettings::default()
            .minimum_bitrate(3_000_000)
            .maximum_bitrate(2_000_000);
        assert!(statmux.validate().is_err());
        assert!(statmux.priority(6).maximum_bitrate(4_000_000).validate().is_err());
    }

    #[test]
    fn test_program_settings() {
        let program = MultiplexProgram::default()
            .program_name("news")
            .multiplex_program_settings(
                MultiplexProgramSettings::default()
                    .program_number(1)
                    .preferred_channel_pipeline("PIPELINE_0")
                    .video_settings(MultiplexVideoSettings::default().constant_bitrate(3_000_000)),
            );
        assert_eq!(program.validate(), Ok(()));
        assert_eq!(
            program
                .multiplex_program_settings
                .as_ref()
                .and_then(|settings| settings.preferred_channel_pipeline.clone()),
            Some(PreferredChannelPipeline::Pipeline0)
        );
    }
}
