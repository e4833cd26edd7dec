use medialive_api::*;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{ClientError, ServiceError},
    operation::Operation,
    transport::{PreparedRequest, ReqwestTransport, Transport, default_headers},
};

/// Blocking MediaLive control-plane client.
///
/// Requests are not signed. Point `endpoint` at a gateway or proxy that adds
/// credentials, or at a local emulator.
#[derive(Debug)]
pub struct MediaLiveClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl MediaLiveClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> MediaLiveClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves an operation against the configured endpoint without sending
    /// it.
    pub fn prepare<O: Operation>(&self, operation: &O) -> Result<PreparedRequest, ClientError> {
        if self.config.validate_requests {
            operation.validate_request()?;
        }
        let request = operation.http_request()?;

        let mut url = self.config.endpoint.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::EndpointNotABase(self.config.endpoint.clone()))?;
            segments.pop_if_empty().extend(&request.path);
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let body = request
            .body
            .map(|body| serde_json::to_string(&body))
            .transpose()
            .map_err(|err| ClientError::SerializationError(O::NAME, err))?;

        Ok(PreparedRequest {
            method: request.method,
            url,
            headers: default_headers(body.is_some()),
            body,
        })
    }

    pub fn execute<O: Operation>(&self, operation: &O) -> Result<O::Output, ClientError> {
        let request = self.prepare(operation)?;
        debug!(
            operation = O::NAME,
            method = %request.method,
            url = %request.url,
            "Sending request"
        );

        let response = self.transport.send(request)?;
        if !response.status.is_success() {
            let err =
                ServiceError::from_response(response.status, &response.headers, &response.body);
            warn!(operation = O::NAME, %err, request_id = ?err.request_id, "Request failed");
            return Err(err.into());
        }

        debug!(operation = O::NAME, status = %response.status, "Received response");
        operation.parse_response(&response.body)
    }
}

macro_rules! impl_operations {
    ($($method:ident($request:ty) -> $output:ty;)*) => {
        impl<T: Transport> MediaLiveClient<T> {
            $(
                pub fn $method(&self, request: &$request) -> Result<$output, ClientError> {
                    self.execute(request)
                }
            )*
        }
    };
}

impl_operations! {
    create_channel(CreateChannelRequest) -> CreateChannelResult;
    describe_channel(DescribeChannelRequest) -> DescribeChannelResult;
    update_channel(UpdateChannelRequest) -> UpdateChannelResult;
    delete_channel(DeleteChannelRequest) -> DeleteChannelResult;
    start_channel(StartChannelRequest) -> StartChannelResult;
    stop_channel(StopChannelRequest) -> StopChannelResult;
    list_channels(ListChannelsRequest) -> ListChannelsResult;

    create_input(CreateInputRequest) -> CreateInputResult;
    describe_input(DescribeInputRequest) -> DescribeInputResult;
    update_input(UpdateInputRequest) -> UpdateInputResult;
    delete_input(DeleteInputRequest) -> DeleteInputResult;
    list_inputs(ListInputsRequest) -> ListInputsResult;

    describe_input_device(DescribeInputDeviceRequest) -> DescribeInputDeviceResult;
    update_input_device(UpdateInputDeviceRequest) -> UpdateInputDeviceResult;
    list_input_devices(ListInputDevicesRequest) -> ListInputDevicesResult;

    create_multiplex(CreateMultiplexRequest) -> CreateMultiplexResult;
    describe_multiplex(DescribeMultiplexRequest) -> DescribeMultiplexResult;
    update_multiplex(UpdateMultiplexRequest) -> UpdateMultiplexResult;
    delete_multiplex(DeleteMultiplexRequest) -> DeleteMultiplexResult;
    start_multiplex(StartMultiplexRequest) -> StartMultiplexResult;
    stop_multiplex(StopMultiplexRequest) -> StopMultiplexResult;
    list_multiplexes(ListMultiplexesRequest) -> ListMultiplexesResult;

    create_multiplex_program(CreateMultiplexProgramRequest) -> CreateMultiplexProgramResult;
    describe_multiplex_program(DescribeMultiplexProgramRequest) -> DescribeMultiplexProgramResult;
    update_multiplex_program(UpdateMultiplexProgramRequest) -> UpdateMultiplexProgramResult;
    delete_multiplex_program(DeleteMultiplexProgramRequest) -> DeleteMultiplexProgramResult;
    list_multiplex_programs(ListMultiplexProgramsRequest) -> ListMultiplexProgramsResult;

    batch_update_schedule(BatchUpdateScheduleRequest) -> BatchUpdateScheduleResult;
    describe_schedule(DescribeScheduleRequest) -> DescribeScheduleResult;
    delete_schedule(DeleteScheduleRequest) -> DeleteScheduleResult;

    create_tags(CreateTagsRequest) -> ();
    list_tags_for_resource(ListTagsForResourceRequest) -> ListTagsForResourceResult;
    delete_tags(DeleteTagsRequest) -> ();
}
