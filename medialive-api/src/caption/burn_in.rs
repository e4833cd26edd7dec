use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum BurnInAlignment {
        Centered => "CENTERED",
        Left => "LEFT",
        Smart => "SMART",
    }
}

api_enum! {
    pub enum BurnInBackgroundColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

api_enum! {
    pub enum BurnInFontColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

api_enum! {
    pub enum BurnInOutlineColor {
        Black => "BLACK",
        Blue => "BLUE",
        Green => "GREEN",
        Red => "RED",
        White => "WHITE",
        Yellow => "YELLOW",
    }
}

api_enum! {
    pub enum BurnInShadowColor {
        Black => "BLACK",
        None => "NONE",
        White => "WHITE",
    }
}

api_enum! {
    pub enum BurnInTeletextGridControl {
        Fixed => "FIXED",
        Scaled => "SCALED",
    }
}

api_model! {
    /// Caption burn-in styling.
    ///
    /// All burn-in and DVB-Sub font settings of a channel must match; the
    /// service rejects channels where they differ.
    pub struct BurnInDestinationSettings {
        /// If no explicit xPosition or yPosition is provided, setting
        /// alignment to centered will place the captions at the bottom center
        /// of the output. Similarly, setting a left alignment will align
        /// captions to the bottom left of the output. If x and y positions are
        /// given in conjunction with the alignment parameter, the font will be
        /// justified (either left or centered) relative to those coordinates.
        /// Selecting "smart" justification will left-justify live subtitles
        /// and center-justify pre-recorded subtitles.
        alignment: BurnInAlignment,
        /// Specifies the color of the rectangle behind the captions.
        background_color: BurnInBackgroundColor,
        /// Specifies the opacity of the background rectangle. 255 is opaque;
        /// 0 is transparent. Leaving this parameter out is equivalent to
        /// setting it to 0 (transparent).
        background_opacity: i32,
        /// External font file used for caption burn-in. File extension must be
        /// 'ttf' or 'tte'. Embedded, STL and teletext sources use a strict
        /// grid system, so external fonts with these caption sources could
        /// cause unexpected display of proportional fonts.
        font: InputLocation,
        /// Specifies the color of the burned-in captions. This option is not
        /// valid for source captions that are STL, 608/embedded or teletext.
        font_color: BurnInFontColor,
        /// Specifies the opacity of the burned-in captions. 255 is opaque; 0
        /// is transparent.
        font_opacity: i32,
        /// Font resolution in DPI (dots per inch); default is 96 dpi.
        font_resolution: i32,
        /// When set to 'auto' fontSize will scale depending on the size of the
        /// output. Giving a positive integer will specify the exact font size
        /// in points.
        font_size: String,
        /// Specifies font outline color. This option is not valid for source
        /// captions that are either 608/embedded or teletext.
        outline_color: BurnInOutlineColor,
        /// Specifies font outline size in pixels. This option is not valid for
        /// source captions that are either 608/embedded or teletext.
        outline_size: i32,
        /// Specifies the color of the shadow cast by the captions.
        shadow_color: BurnInShadowColor,
        /// Specifies the opacity of the shadow. 255 is opaque; 0 is
        /// transparent. Leaving this parameter out is equivalent to setting it
        /// to 0 (transparent).
        shadow_opacity: i32,
        /// Specifies the horizontal offset of the shadow relative to the
        /// captions in pixels. A value of -2 would result in a shadow offset 2
        /// pixels to the left.
        shadow_x_offset: i32,
        /// Specifies the vertical offset of the shadow relative to the
        /// captions in pixels. A value of -2 would result in a shadow offset 2
        /// pixels above the text.
        shadow_y_offset: i32,
        /// Controls whether a fixed grid size will be used to generate the
        /// output subtitles bitmap. Only applicable for Teletext inputs and
        /// DVB-Sub/Burn-in outputs.
        teletext_grid_control: BurnInTeletextGridControl,
        /// Specifies the horizontal position of the caption relative to the
        /// left side of the output in pixels. If no explicit xPosition is
        /// provided, the horizontal caption position will be determined by the
        /// alignment parameter.
        x_position: i32,
        /// Specifies the vertical position of the caption relative to the top
        /// of the output in pixels. If no explicit yPosition is provided, the
        /// caption will be positioned towards the bottom of the output.
        y_position: i32,
    }
}

impl Validate for BurnInDestinationSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "BurnInDestinationSettings.backgroundOpacity",
            self.background_opacity,
            0..=255,
        )?;
        check_range(
            "BurnInDestinationSettings.fontOpacity",
            self.font_opacity,
            0..=255,
        )?;
        check_range(
            "BurnInDestinationSettings.fontResolution",
            self.font_resolution,
            96..=600,
        )?;
        check_range(
            "BurnInDestinationSettings.outlineSize",
            self.outline_size,
            0..=10,
        )?;
        check_range(
            "BurnInDestinationSettings.shadowOpacity",
            self.shadow_opacity,
            0..=255,
        )?;
        check_min("BurnInDestinationSettings.xPosition", self.x_position, 0)?;
        check_min("BurnInDestinationSettings.yPosition", self.y_position, 0)?;

        if let Some(font_size) = &self.font_size
            && font_size != "auto"
            && !font_size.parse::<u32>().is_ok_and(|size| size > 0)
        {
            return Err(ModelError::invalid(
                "BurnInDestinationSettings.fontSize",
                format!("{font_size:?} is neither \"auto\" nor a positive integer"),
            ));
        }
        Ok(())
    }
}
