use crate::common::check_min;
use crate::*;

api_model! {
    /// Keeps the color space of the source.
    pub struct ColorSpacePassthroughSettings {}
}

api_model! {
    pub struct Rec601Settings {}
}

api_model! {
    pub struct Rec709Settings {}
}

api_model! {
    pub struct Hdr10Settings {
        /// Maximum Content Light Level. An integer metadata value defining the
        /// maximum light level, in nits, of any single pixel within an encoded
        /// HDR video stream or file.
        max_cll: i32,
        /// Maximum Frame Average Light Level. An integer metadata value
        /// defining the maximum average light level, in nits, for any single
        /// frame within an encoded HDR video stream or file.
        max_fall: i32,
    }
}

api_model! {
    /// Exactly one color space conversion is expected to be set.
    pub struct H264ColorSpaceSettings {
        color_space_passthrough_settings: ColorSpacePassthroughSettings,
        rec601_settings: Rec601Settings,
        rec709_settings: Rec709Settings,
    }
}

api_model! {
    /// Exactly one color space conversion is expected to be set.
    pub struct H265ColorSpaceSettings {
        color_space_passthrough_settings: ColorSpacePassthroughSettings,
        hdr10_settings: Hdr10Settings,
        rec601_settings: Rec601Settings,
        rec709_settings: Rec709Settings,
    }
}

impl Validate for Hdr10Settings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min("Hdr10Settings.maxCll", self.max_cll, 0)?;
        check_min("Hdr10Settings.maxFall", self.max_fall, 0)?;
        Ok(())
    }
}

impl Validate for H265ColorSpaceSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.hdr10_settings.validate()
    }
}
