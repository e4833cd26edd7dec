use crate::common::check_range;
use crate::*;

api_enum! {
    pub enum TtmlDestinationStyleControl {
        Passthrough => "PASSTHROUGH",
        UseConfigured => "USE_CONFIGURED",
    }
}

api_model! {
    pub struct EmbeddedDestinationSettings {}
}

api_model! {
    pub struct Scte27DestinationSettings {}
}

api_model! {
    pub struct TeletextDestinationSettings {}
}

api_model! {
    pub struct WebvttDestinationSettings {}
}

api_model! {
    pub struct TtmlDestinationSettings {
        /// When set to passthrough, passes through style and position
        /// information from a TTML-like input source (TTML, SMPTE-TT, CFF-TT)
        /// to the CFF-TT output or TTML output.
        style_control: TtmlDestinationStyleControl,
    }
}

api_model! {
    /// Exactly one destination format is expected to be set.
    pub struct CaptionDestinationSettings {
        burn_in_destination_settings: BurnInDestinationSettings,
        embedded_destination_settings: EmbeddedDestinationSettings,
        scte27_destination_settings: Scte27DestinationSettings,
        teletext_destination_settings: TeletextDestinationSettings,
        ttml_destination_settings: TtmlDestinationSettings,
        webvtt_destination_settings: WebvttDestinationSettings,
    }
}

api_model! {
    /// Caption track written to the outputs that reference it by name.
    pub struct CaptionDescription {
        /// Specifies which input caption selector to use as a caption source
        /// when generating output captions. This field should match a
        /// captionSelector name.
        caption_selector_name: String,
        /// Additional settings for captions destination that depend on the
        /// destination type.
        destination_settings: CaptionDestinationSettings,
        /// ISO 639-2 three-digit code: http://www.loc.gov/standards/iso639-2/
        language_code: String,
        /// Human readable information to indicate captions available for
        /// players (eg. English, or Spanish).
        language_description: String,
        /// Name of the caption description. Used to associate a caption
        /// description with an output. Names must be unique within an event.
        name: String,
    }
}

api_model! {
    /// Maps a caption channel to an ISO 693-2 language code, with an optional
    /// description.
    pub struct CaptionLanguageMapping {
        /// The closed caption channel being described by this
        /// CaptionLanguageMapping. Each channel mapping must have a unique
        /// channel number (maximum of 4)
        caption_channel: i32,
        /// Three character ISO 639-2 language code (see
        /// http://www.loc.gov/standards/iso639-2)
        language_code: String,
        /// Textual description of language
        language_description: String,
    }
}

impl Validate for CaptionDestinationSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.burn_in_destination_settings.validate()
    }
}

impl Validate for CaptionDescription {
    fn validate(&self) -> Result<(), ModelError> {
        self.destination_settings.validate()
    }
}

impl Validate for CaptionLanguageMapping {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "CaptionLanguageMapping.captionChannel",
            self.caption_channel,
            1..=4,
        )
    }
}
