use medialive_api::*;
use reqwest::Method;

use super::{HttpRequest, Operation, json_body, path_param};
use crate::error::ClientError;

impl Operation for CreateChannelRequest {
    const NAME: &'static str = "CreateChannel";
    type Output = CreateChannelResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let body = json_body(Self::NAME, self, &[])?;
        Ok(HttpRequest::new(Method::POST, ["prod", "channels"]).with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DescribeChannelRequest {
    const NAME: &'static str = "DescribeChannel";
    type Output = DescribeChannelResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        Ok(HttpRequest::new(Method::GET, ["prod", "channels", channel_id]))
    }
}

impl Operation for UpdateChannelRequest {
    const NAME: &'static str = "UpdateChannel";
    type Output = UpdateChannelResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        let body = json_body(Self::NAME, self, &["channelId"])?;
        Ok(HttpRequest::new(Method::PUT, ["prod", "channels", channel_id]).with_body(body))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}

impl Operation for DeleteChannelRequest {
    const NAME: &'static str = "DeleteChannel";
    type Output = DeleteChannelResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        Ok(HttpRequest::new(Method::DELETE, ["prod", "channels", channel_id]))
    }
}

impl Operation for StartChannelRequest {
    const NAME: &'static str = "StartChannel";
    type Output = StartChannelResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        Ok(HttpRequest::new(
            Method::POST,
            ["prod", "channels", channel_id, "start"],
        ))
    }
}

impl Operation for StopChannelRequest {
    const NAME: &'static str = "StopChannel";
    type Output = StopChannelResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let channel_id = path_param("channelId", &self.channel_id)?;
        Ok(HttpRequest::new(
            Method::POST,
            ["prod", "channels", channel_id, "stop"],
        ))
    }
}

impl Operation for ListChannelsRequest {
    const NAME: &'static str = "ListChannels";
    type Output = ListChannelsResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::new(Method::GET, ["prod", "channels"])
            .with_query("maxResults", self.max_results)
            .with_query("nextToken", self.next_token.as_ref()))
    }

    fn validate_request(&self) -> Result<(), ModelError> {
        self.validate()
    }
}
