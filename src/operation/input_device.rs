use medialive_api::*;
use reqwest::Method;

use super::{HttpRequest, Operation, json_body, path_param};
use crate::error::ClientError;

impl Operation for DescribeInputDeviceRequest {
    const NAME: &'static str = "DescribeInputDevice";
    type Output = DescribeInputDeviceResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let device_id = path_param("inputDeviceId", &self.input_device_id)?;
        Ok(HttpRequest::new(
            Method::GET,
            ["prod", "inputDevices", device_id],
        ))
    }
}

impl Operation for UpdateInputDeviceRequest {
    const NAME: &'static str = "UpdateInputDevice";
    type Output = UpdateInputDeviceResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let device_id = path_param("inputDeviceId", &self.input_device_id)?;
        let body = json_body(Self::NAME, self, &["inputDeviceId"])?;
        Ok(HttpRequest::new(Method::PUT, ["prod", "inputDevices", device_id]).with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for ListInputDevicesRequest {
    const NAME: &'static str = "ListInputDevices";
    type Output = ListInputDevicesResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::new(Method::GET, ["prod", "inputDevices"])
            .with_query("maxResults", self.max_results)
            .with_query("nextToken", self.next_token.as_ref()))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}
