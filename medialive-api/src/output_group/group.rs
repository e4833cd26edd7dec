use crate::*;

api_model! {
    /// Multiplex output group. Outputs of this group feed a multiplex program.
    pub struct MultiplexGroupSettings {}
}

api_model! {
    pub struct MultiplexOutputSettings {
        /// Destination is a multiplex.
        destination: OutputLocationRef,
    }
}

api_model! {
    /// Group settings. Exactly one of the variants is expected to be set.
    pub struct OutputGroupSettings {
        hls_group_settings: HlsGroupSettings,
        ms_smooth_group_settings: MsSmoothGroupSettings,
        multiplex_group_settings: MultiplexGroupSettings,
        udp_group_settings: UdpGroupSettings,
    }
}

impl Validate for OutputGroupSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.hls_group_settings.validate()?;
        self.ms_smooth_group_settings.validate()?;
        self.udp_group_settings.validate()
    }
}

api_model! {
    /// Output settings. Must match the kind of the enclosing output group.
    pub struct OutputSettings {
        hls_output_settings: HlsOutputSettings,
        ms_smooth_output_settings: MsSmoothOutputSettings,
        multiplex_output_settings: MultiplexOutputSettings,
        udp_output_settings: UdpOutputSettings,
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.hls_output_settings.validate()?;
        self.udp_output_settings.validate()
    }
}

api_model! {
    /// A single rendition inside an output group, built from named audio,
    /// caption and video descriptions of the encoder settings.
    pub struct Output {
        /// The names of the AudioDescriptions used as audio sources for this
        /// output.
        audio_description_names: Vec<String>,
        /// The names of the CaptionDescriptions used as caption sources for
        /// this output.
        caption_description_names: Vec<String>,
        /// The name used to identify an output, unique in the encoder settings.
        output_name: String,
        /// Output type-specific settings.
        output_settings: OutputSettings,
        /// The name of the VideoDescription used as the source for this
        /// output.
        video_description_name: String,
    }
}

impl Validate for Output {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.output_name
            && (name.is_empty() || name.len() > 255)
        {
            return Err(ModelError::invalid(
                "Output.outputName",
                "must be 1 to 255 characters long",
            ));
        }
        self.output_settings.validate()
    }
}

api_model! {
    pub struct OutputGroup {
        /// Custom output group name optionally defined by the user. Only
        /// letters, numbers, and the underscore character allowed; only 32
        /// characters allowed.
        name: String,
        /// Settings associated with the output group.
        output_group_settings: OutputGroupSettings,
        outputs: Vec<Output>,
    }
}

impl Validate for OutputGroup {
    fn validate(&self) -> Result<(), ModelError> {
        check_name("OutputGroup.name", self.name.as_deref())?;
        self.output_group_settings.validate()?;
        self.outputs.validate()
    }
}

fn check_name(field: &'static str, value: Option<&str>) -> Result<(), ModelError> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.is_empty() || value.len() > 32 {
        return Err(ModelError::invalid(field, "must be 1 to 32 characters long"));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ModelError::invalid(
            field,
            "only letters, numbers and underscores are allowed",
        ));
    }
    Ok(())
}
