use crate::common::{check_min, check_range};
use crate::video::h264::check_gop_size;
use crate::*;

api_enum! {
    pub enum H265AdaptiveQuantization {
        High => "HIGH",
        Higher => "HIGHER",
        Low => "LOW",
        Max => "MAX",
        Medium => "MEDIUM",
        Off => "OFF",
    }
}

api_enum! {
    pub enum H265AlternativeTransferFunction {
        Insert => "INSERT",
        Omit => "OMIT",
    }
}

api_enum! {
    pub enum H265ColorMetadata {
        Ignore => "IGNORE",
        Insert => "INSERT",
    }
}

api_enum! {
    pub enum H265FlickerAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H265GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

api_enum! {
    pub enum H265Level {
        H265Level1 => "H265_LEVEL_1",
        H265Level2 => "H265_LEVEL_2",
        H265Level2_1 => "H265_LEVEL_2_1",
        H265Level3 => "H265_LEVEL_3",
        H265Level3_1 => "H265_LEVEL_3_1",
        H265Level4 => "H265_LEVEL_4",
        H265Level4_1 => "H265_LEVEL_4_1",
        H265Level5 => "H265_LEVEL_5",
        H265Level5_1 => "H265_LEVEL_5_1",
        H265Level5_2 => "H265_LEVEL_5_2",
        H265Level6 => "H265_LEVEL_6",
        H265Level6_1 => "H265_LEVEL_6_1",
        H265Level6_2 => "H265_LEVEL_6_2",
        H265LevelAuto => "H265_LEVEL_AUTO",
    }
}

api_enum! {
    pub enum H265LookAheadRateControl {
        High => "HIGH",
        Low => "LOW",
        Medium => "MEDIUM",
    }
}

api_enum! {
    pub enum H265Profile {
        Main => "MAIN",
        Main10Bit => "MAIN_10BIT",
    }
}

api_enum! {
    pub enum H265RateControlMode {
        Cbr => "CBR",
        Multiplex => "MULTIPLEX",
        Qvbr => "QVBR",
    }
}

api_enum! {
    pub enum H265ScanType {
        Interlaced => "INTERLACED",
        Progressive => "PROGRESSIVE",
    }
}

api_enum! {
    pub enum H265SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H265Tier {
        High => "HIGH",
        Main => "MAIN",
    }
}

api_enum! {
    pub enum H265TimecodeInsertionBehavior {
        Disabled => "DISABLED",
        PicTimingSei => "PIC_TIMING_SEI",
    }
}

api_model! {
    pub struct H265Settings {
        /// Adaptive quantization. Allows intra-frame quantizers to vary to
        /// improve visual quality.
        adaptive_quantization: H265AdaptiveQuantization,
        /// Indicates that AFD values will be written into the output stream.
        afd_signaling: AfdSignaling,
        /// Whether or not EML should insert an Alternative Transfer Function
        /// SEI message to support backwards compatibility with non-HDR
        /// decoders and displays.
        alternative_transfer_function: H265AlternativeTransferFunction,
        /// Average bitrate in bits/second. Required when the rate control mode
        /// is VBR or CBR. Not used for QVBR.
        bitrate: i32,
        /// Size of buffer (HRD buffer model) in bits.
        buf_size: i32,
        /// Includes colorspace metadata in the output.
        color_metadata: H265ColorMetadata,
        /// Color Space settings
        color_space_settings: H265ColorSpaceSettings,
        /// Four bit AFD value to write on all frames of video in the output
        /// stream. Only valid when afdSignaling is set to 'Fixed'.
        fixed_afd: FixedAfd,
        /// If set to enabled, adjust quantization within each frame to reduce
        /// flicker or 'pop' on I-frames.
        flicker_aq: H265FlickerAq,
        /// Framerate denominator.
        framerate_denominator: i32,
        /// Framerate numerator - framerate is a fraction, e.g. 24000 / 1001 =
        /// 23.976 fps.
        framerate_numerator: i32,
        /// Frequency of closed GOPs. In streaming applications, it is
        /// recommended that this be set to 1 so a decoder joining mid-stream
        /// will receive an IDR frame as quickly as possible.
        gop_closed_cadence: i32,
        /// GOP size (keyframe interval) in units of either frames or seconds
        /// per gopSizeUnits.
        gop_size: f64,
        /// Indicates if the gopSize is specified in frames or seconds.
        gop_size_units: H265GopSizeUnits,
        /// H.265 Level.
        level: H265Level,
        /// Amount of lookahead. A value of low can decrease latency and memory
        /// usage, while high can produce better quality for certain content.
        look_ahead_rate_control: H265LookAheadRateControl,
        /// For QVBR: See the tooltip for Quality level.
        max_bitrate: i32,
        /// Only meaningful if sceneChangeDetect is set to enabled. Enforces
        /// separation between repeated (cadence) I-frames and I-frames inserted
        /// by Scene Change Detection.
        min_i_interval: i32,
        /// Pixel Aspect Ratio denominator.
        par_denominator: i32,
        /// Pixel Aspect Ratio numerator.
        par_numerator: i32,
        /// H.265 Profile.
        profile: H265Profile,
        /// Controls the target quality for the video encode. Applies only when
        /// the rate control mode is QVBR.
        qvbr_quality_level: i32,
        /// Rate control mode.
        rate_control_mode: H265RateControlMode,
        /// Sets the scan type of the output to progressive or top-field-first
        /// interlaced.
        scan_type: H265ScanType,
        /// Scene change detection.
        scene_change_detect: H265SceneChangeDetect,
        /// Number of slices per picture.
        slices: i32,
        /// H.265 Tier.
        tier: H265Tier,
        /// Determines how timecodes should be inserted into the video
        /// elementary stream.
        timecode_insertion: H265TimecodeInsertionBehavior,
    }
}

impl Validate for H265Settings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("H265Settings.bitrate", self.bitrate, 100_000..=40_000_000)?;
        check_range("H265Settings.bufSize", self.buf_size, 100_000..=80_000_000)?;
        check_range(
            "H265Settings.framerateDenominator",
            self.framerate_denominator,
            1..=3003,
        )?;
        check_min("H265Settings.framerateNumerator", self.framerate_numerator, 1)?;
        check_min("H265Settings.gopClosedCadence", self.gop_closed_cadence, 0)?;
        check_range("H265Settings.maxBitrate", self.max_bitrate, 100_000..=40_000_000)?;
        check_range("H265Settings.minIInterval", self.min_i_interval, 0..=30)?;
        check_min("H265Settings.parDenominator", self.par_denominator, 1)?;
        check_min("H265Settings.parNumerator", self.par_numerator, 1)?;
        check_range("H265Settings.qvbrQualityLevel", self.qvbr_quality_level, 1..=10)?;
        check_range("H265Settings.slices", self.slices, 1..=16)?;
        check_gop_size(
            "H265Settings.gopSize",
            self.gop_size,
            self.gop_size_units == Some(H265GopSizeUnits::Frames),
        )?;
        self.color_space_settings.validate()
    }
}
