use medialive_api::*;
use reqwest::Method;

use super::{HttpRequest, Operation, json_body, path_param};
use crate::error::ClientError;

impl Operation for CreateMultiplexRequest {
    const NAME: &'static str = "CreateMultiplex";
    type Output = CreateMultiplexResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let body = json_body(Self::NAME, self, &[])?;
        Ok(HttpRequest::new(Method::POST, ["prod", "multiplexes"]).with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DescribeMultiplexRequest {
    const NAME: &'static str = "DescribeMultiplex";
    type Output = DescribeMultiplexResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        Ok(HttpRequest::new(
            Method::GET,
            ["prod", "multiplexes", multiplex_id],
        ))
    }
}

impl Operation for UpdateMultiplexRequest {
    const NAME: &'static str = "UpdateMultiplex";
    type Output = UpdateMultiplexResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        let body = json_body(Self::NAME, self, &["multiplexId"])?;
        Ok(HttpRequest::new(Method::PUT, ["prod", "multiplexes", multiplex_id]).with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DeleteMultiplexRequest {
    const NAME: &'static str = "DeleteMultiplex";
    type Output = DeleteMultiplexResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        Ok(HttpRequest::new(
            Method::DELETE,
            ["prod", "multiplexes", multiplex_id],
        ))
    }
}

impl Operation for StartMultiplexRequest {
    const NAME: &'static str = "StartMultiplex";
    type Output = StartMultiplexResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        Ok(HttpRequest::new(
            Method::POST,
            ["prod", "multiplexes", multiplex_id, "start"],
        ))
    }
}

impl Operation for StopMultiplexRequest {
    const NAME: &'static str = "StopMultiplex";
    type Output = StopMultiplexResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        Ok(HttpRequest::new(
            Method::POST,
            ["prod", "multiplexes", multiplex_id, "stop"],
        ))
    }
}

impl Operation for ListMultiplexesRequest {
    const NAME: &'static str = "ListMultiplexes";
    type Output = ListMultiplexesResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::new(Method::GET, ["prod", "multiplexes"])
            .with_query("maxResults", self.max_results)
            .with_query("nextToken", self.next_token.as_ref()))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for CreateMultiplexProgramRequest {
    const NAME: &'static str = "CreateMultiplexProgram";
    type Output = CreateMultiplexProgramResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        let body = json_body(Self::NAME, self, &["multiplexId"])?;
        Ok(HttpRequest::new(
            Method::POST,
            ["prod", "multiplexes", multiplex_id, "programs"],
        )
        .with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DescribeMultiplexProgramRequest {
    const NAME: &'static str = "DescribeMultiplexProgram";
    type Output = DescribeMultiplexProgramResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        let program_name = path_param("programName", &self.program_name)?;
        Ok(HttpRequest::new(
            Method::GET,
            ["prod", "multiplexes", multiplex_id, "programs", program_name],
        ))
    }
}

impl Operation for UpdateMultiplexProgramRequest {
    const NAME: &'static str = "UpdateMultiplexProgram";
    type Output = UpdateMultiplexProgramResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        let program_name = path_param("programName", &self.program_name)?;
        let body = json_body(Self::NAME, self, &["multiplexId", "programName"])?;
        Ok(HttpRequest::new(
            Method::PUT,
            ["prod", "multiplexes", multiplex_id, "programs", program_name],
        )
        .with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DeleteMultiplexProgramRequest {
    const NAME: &'static str = "DeleteMultiplexProgram";
    type Output = DeleteMultiplexProgramResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        let program_name = path_param("programName", &self.program_name)?;
        Ok(HttpRequest::new(
            Method::DELETE,
            ["prod", "multiplexes", multiplex_id, "programs", program_name],
        ))
    }
}

impl Operation for ListMultiplexProgramsRequest {
    const NAME: &'static str = "ListMultiplexPrograms";
    type Output = ListMultiplexProgramsResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let multiplex_id = path_param("multiplexId", &self.multiplex_id)?;
        Ok(
            HttpRequest::new(Method::GET, ["prod", "multiplexes", multiplex_id, "programs"])
                .with_query("maxResults", self.max_results)
                .with_query("nextToken", self.next_token.as_ref()),
        )
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}
