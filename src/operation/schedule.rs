use medialive_api::*;
use reqwest::Method;

use super::{HttpRequest, Operation, json_body, path_param};
use crate::error::ClientError;

impl Operation for BatchUpdateScheduleRequest {
    const NAME: &'static str = "BatchUpdateSchedule";
    type Output = BatchUpdateScheduleResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        let body = json_body(Self::NAME, self, &["channelId"])?;
        Ok(
            HttpRequest::new(Method::PUT, ["prod", "channels", channel_id, "schedule"])
                .with_body(body),
        )
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DescribeScheduleRequest {
    const NAME: &'static str = "DescribeSchedule";
    type Output = DescribeScheduleResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        Ok(
            HttpRequest::new(Method::GET, ["prod", "channels", channel_id, "schedule"])
                .with_query("maxResults", self.max_results)
                .with_query("nextToken", self.next_token.as_ref()),
        )
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DeleteScheduleRequest {
    const NAME: &'static str = "DeleteSchedule";
    type Output = DeleteScheduleResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        Ok(HttpRequest::new(
            Method::DELETE,
            ["prod", "channels", channel_id, "schedule"],
        ))
    }
}
