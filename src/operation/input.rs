use medialive_api::*;
use reqwest::Method;

use super::{HttpRequest, Operation, json_body, path_param};
use crate::error::ClientError;

impl Operation for CreateInputRequest {
    const NAME: &'static str = "CreateInput";
    type Output = CreateInputResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let body = json_body(Self::NAME, self, &[])?;
        Ok(HttpRequest::new(Method::POST, ["prod", "inputs"]).with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DescribeInputRequest {
    const NAME: &'static str = "DescribeInput";
    type Output = DescribeInputResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let input_id = path_param("inputId", &self.input_id)?;
        Ok(HttpRequest::new(Method::GET, ["prod", "inputs", input_id]))
    }
}

impl Operation for UpdateInputRequest {
    const NAME: &'static str = "UpdateInput";
    type Output = UpdateInputResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let input_id = path_param("inputId", &self.input_id)?;
        let body = json_body(Self::NAME, self, &["inputId"])?;
        Ok(HttpRequest::new(Method::PUT, ["prod", "inputs", input_id]).with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DeleteInputRequest {
    const NAME: &'static str = "DeleteInput";
    type Output = DeleteInputResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let input_id = path_param("inputId", &self.input_id)?;
        Ok(HttpRequest::new(Method::DELETE, ["prod", "inputs", input_id]))
    }
}

impl Operation for ListInputsRequest {
    const NAME: &'static str = "ListInputs";
    type Output = ListInputsResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::new(Method::GET, ["prod", "inputs"])
            .with_query("maxResults", self.max_results)
            .with_query("nextToken", self.next_token.as_ref()))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}
