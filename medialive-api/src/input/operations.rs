use crate::common::check_range;
use crate::*;

/// Standard inputs take at most two destinations, sources or flows, one per
/// pipeline.
const MAX_PIPELINE_ENDPOINTS: usize = 2;

fn check_endpoints<T>(field: &'static str, value: &Option<Vec<T>>) -> Result<(), ModelError> {
    match value {
        Some(list) if list.len() > MAX_PIPELINE_ENDPOINTS => Err(ModelError::invalid(
            field,
            format!("at most {MAX_PIPELINE_ENDPOINTS} entries are allowed"),
        )),
        _ => Ok(()),
    }
}

api_model! {
    /// A request to create an input.
    pub struct CreateInputRequest {
        /// Destination settings for PUSH type inputs.
        destinations: Vec<InputDestinationRequest>,
        /// Settings for the devices.
        input_devices: Vec<InputDeviceSettings>,
        /// A list of security groups referenced by IDs to attach to the input.
        input_security_groups: Vec<String>,
        /// A list of the MediaConnect Flows that you want to use in this
        /// input. You can specify as few as one Flow and presently, as many as
        /// two.
        media_connect_flows: Vec<MediaConnectFlowRequest>,
        /// Name of the input.
        name: String,
        /// Unique identifier of the request to ensure the request is handled
        /// exactly once in case of retries.
        request_id: String,
        /// The Amazon Resource Name (ARN) of the role this input assumes during
        /// and after creation.
        role_arn: String,
        /// The source URLs for a PULL-type input. Every PULL type input needs
        /// exactly two source URLs for redundancy. Only specify sources for
        /// PULL type Inputs. Leave Destinations empty.
        sources: Vec<InputSourceRequest>,
        /// A collection of key-value pairs.
        tags: Tags,
        #[serde(rename = "type")]
        input_type: InputType,
        vpc: InputVpcRequest,
    }
}

impl_tags!(CreateInputRequest);

impl Validate for CreateInputRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_endpoints("CreateInputRequest.destinations", &self.destinations)?;
        check_endpoints("CreateInputRequest.sources", &self.sources)?;
        check_endpoints(
            "CreateInputRequest.mediaConnectFlows",
            &self.media_connect_flows,
        )?;

        if let Some(input_type) = &self.input_type
            && input_type.is_push()
            && self.sources.as_ref().is_some_and(|sources| !sources.is_empty())
        {
            return Err(ModelError::invalid(
                "CreateInputRequest.sources",
                format!("{input_type} inputs take destinations, not sources"),
            ));
        }
        self.vpc.validate()
    }
}

api_model! {
    pub struct CreateInputResult {
        input: Input,
    }
}

api_model! {
    pub struct DescribeInputRequest {
        /// Unique ID of the input.
        input_id: String,
    }
}

pub type DescribeInputResult = Input;

api_model! {
    /// A request to update an input.
    pub struct UpdateInputRequest {
        /// Destination settings for PUSH type inputs.
        destinations: Vec<InputDestinationRequest>,
        /// Settings for the devices.
        input_devices: Vec<InputDeviceRequest>,
        /// Unique ID of the input. Sent in the request path.
        input_id: String,
        /// A list of security groups referenced by IDs to attach to the input.
        input_security_groups: Vec<String>,
        /// A list of the MediaConnect Flow ARNs that you want to use as the
        /// source of the input.
        media_connect_flows: Vec<MediaConnectFlowRequest>,
        /// Name of the input.
        name: String,
        /// The Amazon Resource Name (ARN) of the role this input assumes during
        /// and after creation.
        role_arn: String,
        /// The source URLs for a PULL-type input.
        sources: Vec<InputSourceRequest>,
    }
}

impl Validate for UpdateInputRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_endpoints("UpdateInputRequest.destinations", &self.destinations)?;
        check_endpoints("UpdateInputRequest.sources", &self.sources)?;
        check_endpoints(
            "UpdateInputRequest.mediaConnectFlows",
            &self.media_connect_flows,
        )
    }
}

api_model! {
    pub struct UpdateInputResult {
        input: Input,
    }
}

api_model! {
    pub struct DeleteInputRequest {
        /// Unique ID of the input.
        input_id: String,
    }
}

api_model! {
    /// Delete responds with an empty object.
    pub struct DeleteInputResult {}
}

api_model! {
    pub struct ListInputsRequest {
        max_results: i32,
        next_token: String,
    }
}

impl Validate for ListInputsRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("ListInputsRequest.maxResults", self.max_results, 0..=1000)
    }
}

api_model! {
    pub struct ListInputsResult {
        inputs: Vec<Input>,
        next_token: String,
    }
}
