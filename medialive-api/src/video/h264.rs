use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum H264AdaptiveQuantization {
        High => "HIGH",
        Higher => "HIGHER",
        Low => "LOW",
        Max => "MAX",
        Medium => "MEDIUM",
        Off => "OFF",
    }
}

api_enum! {
    pub enum H264ColorMetadata {
        Ignore => "IGNORE",
        Insert => "INSERT",
    }
}

api_enum! {
    pub enum H264EntropyEncoding {
        Cabac => "CABAC",
        Cavlc => "CAVLC",
    }
}

api_enum! {
    pub enum H264FlickerAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H264ForceFieldPictures {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H264FramerateControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

api_enum! {
    pub enum H264GopBReference {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H264GopSizeUnits {
        Frames => "FRAMES",
        Seconds => "SECONDS",
    }
}

api_enum! {
    pub enum H264Level {
        H264Level1 => "H264_LEVEL_1",
        H264Level1_1 => "H264_LEVEL_1_1",
        H264Level1_2 => "H264_LEVEL_1_2",
        H264Level1_3 => "H264_LEVEL_1_3",
        H264Level2 => "H264_LEVEL_2",
        H264Level2_1 => "H264_LEVEL_2_1",
        H264Level2_2 => "H264_LEVEL_2_2",
        H264Level3 => "H264_LEVEL_3",
        H264Level3_1 => "H264_LEVEL_3_1",
        H264Level3_2 => "H264_LEVEL_3_2",
        H264Level4 => "H264_LEVEL_4",
        H264Level4_1 => "H264_LEVEL_4_1",
        H264Level4_2 => "H264_LEVEL_4_2",
        H264Level5 => "H264_LEVEL_5",
        H264Level5_1 => "H264_LEVEL_5_1",
        H264Level5_2 => "H264_LEVEL_5_2",
        H264LevelAuto => "H264_LEVEL_AUTO",
    }
}

api_enum! {
    pub enum H264LookAheadRateControl {
        High => "HIGH",
        Low => "LOW",
        Medium => "MEDIUM",
    }
}

api_enum! {
    pub enum H264ParControl {
        InitializeFromSource => "INITIALIZE_FROM_SOURCE",
        Specified => "SPECIFIED",
    }
}

api_enum! {
    pub enum H264Profile {
        Baseline => "BASELINE",
        High => "HIGH",
        High10Bit => "HIGH_10BIT",
        High422 => "HIGH_422",
        High422_10Bit => "HIGH_422_10BIT",
        Main => "MAIN",
    }
}

api_enum! {
    pub enum H264QualityLevel {
        EnhancedQuality => "ENHANCED_QUALITY",
        StandardQuality => "STANDARD_QUALITY",
    }
}

api_enum! {
    pub enum H264RateControlMode {
        Cbr => "CBR",
        /// Bitrate is assigned by the multiplex the channel feeds.
        Multiplex => "MULTIPLEX",
        Qvbr => "QVBR",
        Vbr => "VBR",
    }
}

api_enum! {
    pub enum H264ScanType {
        Interlaced => "INTERLACED",
        Progressive => "PROGRESSIVE",
    }
}

api_enum! {
    pub enum H264SceneChangeDetect {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H264SpatialAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H264SubGopLength {
        Dynamic => "DYNAMIC",
        Fixed => "FIXED",
    }
}

api_enum! {
    pub enum H264Syntax {
        Default => "DEFAULT",
        Rp2027 => "RP2027",
    }
}

api_enum! {
    pub enum H264TemporalAq {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum H264TimecodeInsertionBehavior {
        Disabled => "DISABLED",
        PicTimingSei => "PIC_TIMING_SEI",
    }
}

api_model! {
    pub struct H264FilterSettings {
        temporal_filter_settings: TemporalFilterSettings,
    }
}

api_model! {
    pub struct H264Settings {
        /// Adaptive quantization. Allows intra-frame quantizers to vary to
        /// improve visual quality.
        adaptive_quantization: H264AdaptiveQuantization,
        /// Indicates that AFD values will be written into the output stream.
        /// If afdSignaling is "auto", the system will try to preserve the
        /// input AFD value (in cases where multiple AFD values are valid). If
        /// set to "fixed", the AFD value will be the value configured in the
        /// fixedAfd parameter.
        afd_signaling: AfdSignaling,
        /// Average bitrate in bits/second. Required when the rate control mode
        /// is VBR or CBR. Not used for QVBR. In an MS Smooth output group,
        /// each output must have a unique value when its bitrate is rounded
        /// down to the nearest multiple of 1000.
        bitrate: i32,
        /// Percentage of the buffer that should initially be filled (HRD
        /// buffer model).
        buf_fill_pct: i32,
        /// Size of buffer (HRD buffer model) in bits.
        buf_size: i32,
        /// Includes colorspace metadata in the output.
        color_metadata: H264ColorMetadata,
        /// Color Space settings
        color_space_settings: H264ColorSpaceSettings,
        /// Entropy encoding mode. Use cabac (must be in Main or High profile)
        /// or cavlc.
        entropy_encoding: H264EntropyEncoding,
        /// Optional filters that you can apply to an encode.
        filter_settings: H264FilterSettings,
        /// Four bit AFD value to write on all frames of video in the output
        /// stream. Only valid when afdSignaling is set to 'Fixed'.
        fixed_afd: FixedAfd,
        /// If set to enabled, adjust quantization within each frame to reduce
        /// flicker or 'pop' on I-frames.
        flicker_aq: H264FlickerAq,
        /// This setting applies only when scan type is "interlaced." It
        /// controls whether coding is performed on a field basis or on a frame
        /// basis.
        force_field_pictures: H264ForceFieldPictures,
        /// This field indicates how the output video frame rate is specified.
        /// If "specified" is selected then the output video frame rate is
        /// determined by framerateNumerator and framerateDenominator, else if
        /// "initializeFromSource" is selected then the output video frame rate
        /// will be set equal to the input video frame rate of the first input.
        framerate_control: H264FramerateControl,
        /// Framerate denominator.
        framerate_denominator: i32,
        /// Framerate numerator - framerate is a fraction, e.g. 24000 / 1001 =
        /// 23.976 fps.
        framerate_numerator: i32,
        /// If enabled, use reference B frames for GOP structures that have B
        /// frames > 1.
        gop_b_reference: H264GopBReference,
        /// Frequency of closed GOPs. In streaming applications, it is
        /// recommended that this be set to 1 so a decoder joining mid-stream
        /// will receive an IDR frame as quickly as possible. Setting this
        /// value to 0 will break output segmenting.
        gop_closed_cadence: i32,
        /// Number of B-frames between reference frames.
        gop_num_b_frames: i32,
        /// GOP size (keyframe interval) in units of either frames or seconds
        /// per gopSizeUnits. If gopSizeUnits is frames, gopSize must be an
        /// integer and must be greater than or equal to 1. If gopSizeUnits is
        /// seconds, gopSize must be greater than 0, but need not be an
        /// integer.
        gop_size: f64,
        /// Indicates if the gopSize is specified in frames or seconds. If
        /// seconds the system will convert the gopSize into a frame count at
        /// run time.
        gop_size_units: H264GopSizeUnits,
        /// H.264 Level.
        level: H264Level,
        /// Amount of lookahead. A value of low can decrease latency and memory
        /// usage, while high can produce better quality for certain content.
        look_ahead_rate_control: H264LookAheadRateControl,
        /// For QVBR: See the tooltip for Quality level. For VBR: Set the
        /// maximum bitrate in order to accommodate expected spikes in the
        /// complexity of the video.
        max_bitrate: i32,
        /// Only meaningful if sceneChangeDetect is set to enabled. Defaults to
        /// 5 if multiplex rate control is used. Enforces separation between
        /// repeated (cadence) I-frames and I-frames inserted by Scene Change
        /// Detection.
        min_i_interval: i32,
        /// Number of reference frames to use. The encoder may use more than
        /// requested if using B-frames and/or interlaced encoding.
        num_ref_frames: i32,
        /// This field indicates how the output pixel aspect ratio is
        /// specified.
        par_control: H264ParControl,
        /// Pixel Aspect Ratio denominator.
        par_denominator: i32,
        /// Pixel Aspect Ratio numerator.
        par_numerator: i32,
        /// H.264 Profile.
        profile: H264Profile,
        /// Leave as STANDARD_QUALITY or choose a different value (which might
        /// result in additional costs to run the channel).
        quality_level: H264QualityLevel,
        /// Controls the target quality for the video encode. Applies only when
        /// the rate control mode is QVBR.
        qvbr_quality_level: i32,
        /// Rate control mode.
        rate_control_mode: H264RateControlMode,
        /// Sets the scan type of the output to progressive or top-field-first
        /// interlaced.
        scan_type: H264ScanType,
        /// Scene change detection.
        scene_change_detect: H264SceneChangeDetect,
        /// Number of slices per picture. Must be less than or equal to the
        /// number of macroblock rows for progressive pictures, and less than or
        /// equal to half the number of macroblock rows for interlaced
        /// pictures.
        slices: i32,
        /// Softness. Selects quantizer matrix, larger values reduce high-
        /// frequency content in the encoded image.
        softness: i32,
        /// If set to enabled, adjust quantization within each frame based on
        /// spatial variation of content complexity.
        spatial_aq: H264SpatialAq,
        /// If set to fixed, use gopNumBFrames B-frames per sub-GOP. If set to
        /// dynamic, optimize the number of B-frames used for each sub-GOP to
        /// improve visual quality.
        subgop_length: H264SubGopLength,
        /// Produces a bitstream compliant with SMPTE RP-2027.
        syntax: H264Syntax,
        /// If set to enabled, adjust quantization within each frame based on
        /// temporal variation of content complexity.
        temporal_aq: H264TemporalAq,
        /// Determines how timecodes should be inserted into the video
        /// elementary stream.
        timecode_insertion: H264TimecodeInsertionBehavior,
    }
}

impl Validate for H264Settings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min("H264Settings.bitrate", self.bitrate, 1000)?;
        check_range("H264Settings.bufFillPct", self.buf_fill_pct, 0..=100)?;
        check_min("H264Settings.bufSize", self.buf_size, 0)?;
        check_min("H264Settings.framerateDenominator", self.framerate_denominator, 1)?;
        check_min("H264Settings.framerateNumerator", self.framerate_numerator, 1)?;
        check_min("H264Settings.gopClosedCadence", self.gop_closed_cadence, 0)?;
        check_range("H264Settings.gopNumBFrames", self.gop_num_b_frames, 0..=7)?;
        check_min("H264Settings.maxBitrate", self.max_bitrate, 1000)?;
        check_range("H264Settings.minIInterval", self.min_i_interval, 0..=30)?;
        check_range("H264Settings.numRefFrames", self.num_ref_frames, 1..=6)?;
        check_min("H264Settings.parDenominator", self.par_denominator, 1)?;
        check_range("H264Settings.qvbrQualityLevel", self.qvbr_quality_level, 1..=10)?;
        check_range("H264Settings.slices", self.slices, 1..=32)?;
        check_range("H264Settings.softness", self.softness, 0..=128)?;
        check_gop_size(
            "H264Settings.gopSize",
            self.gop_size,
            self.gop_size_units == Some(H264GopSizeUnits::Frames),
        )?;
        Ok(())
    }
}

/// GOP size has to be a positive value, and a whole number when it is counted
/// in frames.
pub(crate) fn check_gop_size(
    field: &'static str,
    gop_size: Option<f64>,
    in_frames: bool,
) -> Result<(), ModelError> {
    let Some(gop_size) = gop_size else {
        return Ok(());
    };
    if in_frames && (gop_size < 1.0 || gop_size.fract() != 0.0) {
        return Err(ModelError::invalid(
            field,
            format!("{gop_size} is not a whole number of frames"),
        ));
    }
    if gop_size <= 0.0 {
        return Err(ModelError::OutOfRange {
            field,
            value: gop_size.to_string(),
            expected: "a value greater than 0".to_owned(),
        });
    }
    Ok(())
}
