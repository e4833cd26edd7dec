use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum FrameCaptureIntervalUnit {
        Milliseconds => "MILLISECONDS",
        Seconds => "SECONDS",
    }
}

api_enum! {
    pub enum VideoDescriptionRespondToAfd {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
        Respond => "RESPOND",
    }
}

api_enum! {
    pub enum VideoDescriptionScalingBehavior {
        Default => "DEFAULT",
        StretchToOutput => "STRETCH_TO_OUTPUT",
    }
}

api_model! {
    /// Periodic JPEG frame grabs instead of a video encode.
    pub struct FrameCaptureSettings {
        /// The frequency at which to capture frames for inclusion in the
        /// output. May be specified in either seconds or milliseconds, as
        /// specified by captureIntervalUnits.
        capture_interval: i32,
        /// Unit for the frame capture interval.
        capture_interval_units: FrameCaptureIntervalUnit,
    }
}

api_model! {
    /// Exactly one of the codec settings is expected to be set.
    pub struct VideoCodecSettings {
        frame_capture_settings: FrameCaptureSettings,
        h264_settings: H264Settings,
        h265_settings: H265Settings,
    }
}

api_model! {
    pub struct VideoDescription {
        /// Video codec settings.
        codec_settings: VideoCodecSettings,
        /// Output video height, in pixels. Must be an even number. For most
        /// codecs, you can leave this field and width blank in order to use
        /// the height and width (resolution) from the source.
        height: i32,
        /// The name of this VideoDescription. Outputs will use this name to
        /// uniquely identify this Description. Description names should be
        /// unique within this Live Event.
        name: String,
        /// Indicates how to respond to the AFD values in the input stream.
        respond_to_afd: VideoDescriptionRespondToAfd,
        /// STRETCH_TO_OUTPUT configures the output position to stretch the
        /// video to the specified output resolution (height and width). This
        /// option will override any position value. DEFAULT may insert black
        /// boxes (pillar boxes or letter boxes) around the video to provide
        /// the specified output resolution.
        scaling_behavior: VideoDescriptionScalingBehavior,
        /// Changes the strength of the anti-alias filter used for scaling. 0
        /// is the softest setting, 100 is the sharpest.
        sharpness: i32,
        /// Output video width, in pixels. Must be an even number.
        width: i32,
    }
}

impl Validate for FrameCaptureSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "FrameCaptureSettings.captureInterval",
            self.capture_interval,
            1..=3_600_000,
        )
    }
}

impl Validate for VideoCodecSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.frame_capture_settings.validate()?;
        self.h264_settings.validate()?;
        self.h265_settings.validate()?;
        Ok(())
    }
}

impl Validate for VideoDescription {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("VideoDescription.sharpness", self.sharpness, 0..=100)?;
        check_min("VideoDescription.height", self.height, 0)?;
        check_min("VideoDescription.width", self.width, 0)?;
        for (field, value) in [
            ("VideoDescription.height", self.height),
            ("VideoDescription.width", self.width),
        ] {
            if let Some(value) = value
                && value % 2 != 0
            {
                return Err(ModelError::invalid(field, format!("{value} is not even")));
            }
        }
        self.codec_settings.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h264_ranges() {
        let settings = H264Settings::default()
            .bitrate(5_000_000)
            .gop_num_b_frames(3)
            .slices(1);
        assert_eq!(settings.validate(), Ok(()));

        let settings = settings.gop_num_b_frames(8);
        assert_eq!(
            settings.validate(),
            Err(ModelError::OutOfRange {
                field: "H264Settings.gopNumBFrames",
                value: "8".to_owned(),
                expected: "a value in [0, 7] range".to_owned(),
            })
        );
    }

    #[test]
    fn gop_size_in_frames_must_be_whole() {
        let settings = H264Settings::default()
            .gop_size(2.5)
            .gop_size_units(H264GopSizeUnits::Seconds);
        assert_eq!(settings.validate(), Ok(()));

        let settings = settings.gop_size_units(H264GopSizeUnits::Frames);
        assert!(matches!(
            settings.validate(),
            Err(ModelError::Invalid {
                field: "H264Settings.gopSize",
                ..
            })
        ));
    }

    #[test]
    fn h265_settings_inside_description_are_checked() {
        let description = VideoDescription::default()
            .name("video_1080p")
            .width(1920)
            .height(1080)
            .codec_settings(
                VideoCodecSettings::default()
                    .h265_settings(H265Settings::default().bitrate(50_000)),
            );
        assert!(matches!(
            description.validate(),
            Err(ModelError::OutOfRange {
                field: "H265Settings.bitrate",
                ..
            })
        ));
    }

    #[test]
    fn odd_resolution_is_rejected() {
        let description = VideoDescription::default().width(1279).height(720);
        assert!(matches!(
            description.validate(),
            Err(ModelError::Invalid {
                field: "VideoDescription.width",
                ..
            })
        ));
    }

    #[test]
    fn enum_overloads_are_equal() {
        let typed = H264Settings::default()
            .level(H264Level::H264Level4_1)
            .profile(H264Profile::High);
        let raw = H264Settings::default()
            .level("H264_LEVEL_4_1")
            .profile("HIGH".to_owned());
        assert_eq!(typed, raw);
        assert_eq!(H264Level::H264Level4_1.to_string(), "H264_LEVEL_4_1");
    }

    #[test]
    fn unknown_enum_value_survives_round_trip() {
        let json = r#"{"level":"H264_LEVEL_9","scanType":"PROGRESSIVE"}"#;
        let settings: H264Settings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.level,
            Some(H264Level::Unknown("H264_LEVEL_9".to_owned()))
        );
        assert_eq!(settings.scan_type, Some(H264ScanType::Progressive));
        assert_eq!(serde_json::to_string(&settings).unwrap(), json);
    }
}
