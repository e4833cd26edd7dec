api_model! {
    /// Location of a file the encoder reads, such as a font or a key file.
    pub struct InputLocation {
        /// key used to extract the password from EC2 Parameter store
        password_param: String,
        /// Uniform Resource Identifier - This should be a path to a file
        /// accessible to the Live system (eg. a http:// URI) depending on the
        /// output type.
        uri: String,
        /// Username if credentials are required to access a file or publishing
        /// point.
        username: String,
    }
}

api_model! {
    /// Reference to an `OutputDestination` declared on the channel.
    pub struct OutputLocationRef {
        destination_ref_id: String,
    }
}

api_model! {
    pub struct OutputDestinationSettings {
        /// key used to extract the password from EC2 Parameter store
        password_param: String,
        /// Stream name for RTMP destinations (URLs of type rtmp://)
        stream_name: String,
        /// A URL specifying a destination
        url: String,
        /// username for destination
        username: String,
    }
}

api_model! {
    pub struct MediaPackageOutputDestinationSettings {
        /// ID of the channel in MediaPackage that is the destination for this
        /// output group.
        channel_id: String,
    }
}

api_model! {
    /// Multiplex program the channel output is delivered to.
    pub struct MultiplexProgramChannelDestinationSettings {
        /// The ID of the Multiplex that the encoder is providing output to.
        multiplex_id: String,
        /// The program name of the Multiplex program that the encoder is
        /// providing output to.
        program_name: String,
    }
}

api_model! {
    /// Placeholder for a destination; each output group references one by id.
    pub struct OutputDestination {
        /// User-specified id. This is used in an output group or an output.
        id: String,
        /// Destination settings for a MediaPackage output; one destination for
        /// both encoders.
        media_package_settings: Vec<MediaPackageOutputDestinationSettings>,
        /// Destination settings for a Multiplex output; one destination for
        /// both encoders.
        multiplex_settings: MultiplexProgramChannelDestinationSettings,
        /// Destination settings for a standard output; one destination for
        /// each redundant encoder.
        settings: Vec<OutputDestinationSettings>,
    }
}
