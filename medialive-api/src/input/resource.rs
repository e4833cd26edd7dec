use crate::*;

api_enum! {
    pub enum InputState {
        Creating => "CREATING",
        Detached => "DETACHED",
        Attached => "ATTACHED",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
}

api_enum! {
    pub enum InputType {
        UdpPush => "UDP_PUSH",
        RtpPush => "RTP_PUSH",
        RtmpPush => "RTMP_PUSH",
        RtmpPull => "RTMP_PULL",
        UrlPull => "URL_PULL",
        Mp4File => "MP4_FILE",
        Mediaconnect => "MEDIACONNECT",
        InputDevice => "INPUT_DEVICE",
        AwsCdi => "AWS_CDI",
        TsFile => "TS_FILE",
    }
}

impl InputType {
    /// Push inputs receive content on service-allocated destinations; every
    /// other type pulls from sources or flows.
    pub fn is_push(&self) -> bool {
        matches!(self, Self::UdpPush | Self::RtpPush | Self::RtmpPush)
    }
}

api_enum! {
    /// A standard input has two sources and a single pipeline input only
    /// has one.
    pub enum InputClass {
        Standard => "STANDARD",
        SinglePipeline => "SINGLE_PIPELINE",
    }
}

api_enum! {
    pub enum InputSourceType {
        Static => "STATIC",
        Dynamic => "DYNAMIC",
    }
}

api_model! {
    /// The properties for a VPC type input destination.
    pub struct InputDestinationVpc {
        /// The availability zone of the Input destination.
        availability_zone: String,
        /// The network interface ID of the Input destination in the VPC.
        network_interface_id: String,
    }
}

api_model! {
    /// The settings for a PUSH type input.
    pub struct InputDestination {
        /// The system-generated static IP address of endpoint. It remains fixed
        /// for the lifetime of the input.
        ip: String,
        /// The port number for the input.
        port: String,
        /// This represents the endpoint that the customer stream will be
        /// pushed to.
        url: String,
        vpc: InputDestinationVpc,
    }
}

api_model! {
    /// The settings for a PULL type input.
    pub struct InputSource {
        /// The key used to extract the password from EC2 Parameter store.
        password_param: String,
        /// This represents the customer's source URL where stream is pulled
        /// from.
        url: String,
        /// The username for the input source.
        username: String,
    }
}

api_model! {
    /// Settings for an input device.
    pub struct InputDeviceSettings {
        /// The unique ID for the device.
        id: String,
    }
}

api_model! {
    /// The settings for a MediaConnect Flow.
    pub struct MediaConnectFlow {
        /// The unique ARN of the MediaConnect Flow being used as a source.
        flow_arn: String,
    }
}

api_model! {
    /// A live video source, as reported by the service.
    pub struct Input {
        /// The Unique ARN of the input (generated, immutable).
        arn: String,
        /// A list of channel IDs that that input is attached to (currently an
        /// input can only be attached to one channel).
        attached_channels: Vec<String>,
        /// A list of the destinations of the input (PUSH-type).
        destinations: Vec<InputDestination>,
        /// The generated ID of the input (unique for user account,
        /// immutable).
        id: String,
        /// STANDARD - MediaLive expects two sources to be connected to this
        /// input. SINGLE_PIPELINE - You can connect only one source to this
        /// input.
        input_class: InputClass,
        /// Settings for the input devices.
        input_devices: Vec<InputDeviceSettings>,
        /// Certain pull input sources can be dynamic, meaning that they can
        /// have their URL's dynamically changes during input switch actions.
        input_source_type: InputSourceType,
        /// A list of MediaConnect Flows for this input.
        media_connect_flows: Vec<MediaConnectFlow>,
        /// The user-assigned name (This is a mutable value).
        name: String,
        /// The Amazon Resource Name (ARN) of the role this input assumes during
        /// and after creation.
        role_arn: String,
        /// A list of IDs for all the Input Security Groups attached to the
        /// input.
        security_groups: Vec<String>,
        /// A list of the sources of the input (PULL-type).
        sources: Vec<InputSource>,
        state: InputState,
        tags: Tags,
        #[serde(rename = "type")]
        input_type: InputType,
    }
}

impl_tags!(Input);

api_model! {
    /// Endpoint settings for a PUSH type input.
    pub struct InputDestinationRequest {
        /// A unique name for the location the RTMP stream is being pushed to.
        stream_name: String,
    }
}

api_model! {
    /// Settings for for a PULL type input.
    pub struct InputSourceRequest {
        /// The key used to extract the password from EC2 Parameter store.
        password_param: String,
        /// This represents the customer's source URL where stream is pulled
        /// from.
        url: String,
        /// The username for the input source.
        username: String,
    }
}

api_model! {
    /// Settings for an input device.
    pub struct InputDeviceRequest {
        /// The unique ID for the device.
        id: String,
    }
}

api_model! {
    /// The settings for a MediaConnect Flow.
    pub struct MediaConnectFlowRequest {
        /// The ARN of the MediaConnect Flow that you want to use as a source.
        flow_arn: String,
    }
}

api_model! {
    /// Settings for a private VPC Input. When this property is specified,
    /// the input destination addresses will be created in a VPC rather than
    /// with public Internet addresses.
    pub struct InputVpcRequest {
        /// A list of up to 5 EC2 VPC security group IDs to attach to the Input
        /// VPC network interfaces.
        security_group_ids: Vec<String>,
        /// A list of 2 VPC subnet IDs from the same VPC. Subnet IDs must be
        /// mapped to two unique availability zones (AZ).
        subnet_ids: Vec<String>,
    }
}

impl Validate for InputVpcRequest {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(groups) = &self.security_group_ids
            && groups.len() > 5
        {
            return Err(ModelError::invalid(
                "InputVpcRequest.securityGroupIds",
                "at most 5 security groups can be attached",
            ));
        }
        if let Some(subnets) = &self.subnet_ids
            && subnets.len() != 2
        {
            return Err(ModelError::invalid(
                "InputVpcRequest.subnetIds",
                "exactly 2 subnets are required",
            ));
        }
        Ok(())
    }
}
