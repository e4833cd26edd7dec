use medialive_api::*;
use reqwest::Method;

use super::{HttpRequest, Operation, json_body, path_param};
use crate::error::ClientError;

impl Operation for CreateTagsRequest {
    const NAME: &'static str = "CreateTags";
    type Output = ();

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let resource_arn = path_param("resourceArn", &self.resource_arn)?;
        let body = json_body(Self::NAME, self, &["resourceArn"])?;
        Ok(HttpRequest::new(Method::POST, ["prod", "tags", resource_arn]).with_body(body))
    }

    fn parse_response(&self, _body: &[u8]) -> Result<(), ClientError> {
        Ok(())
    }
}

impl Operation for ListTagsForResourceRequest {
    const NAME: &'static str = "ListTagsForResource";
    type Output = ListTagsForResourceResult;

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let resource_arn = path_param("resourceArn", &self.resource_arn)?;
        Ok(HttpRequest::new(Method::GET, ["prod", "tags", resource_arn]))
    }
}

impl Operation for DeleteTagsRequest {
    const NAME: &'static str = "DeleteTags";
    type Output = ();

    fn http_request(&self) -> Result<HttpRequest, ClientError> {
        let resource_arn = path_param("resourceArn", &self.resource_arn)?;
        let mut request = HttpRequest::new(Method::DELETE, ["prod", "tags", resource_arn]);
        for key in self.tag_keys.iter().flatten() {
            request = request.with_query("tagKeys", Some(key));
        }
        Ok(request)
    }

    fn parse_response(&self, _body: &[u8]) -> Result<(), ClientError> {
        Ok(())
    }
}
