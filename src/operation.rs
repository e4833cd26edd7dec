//! Mapping of request types to REST calls.

use medialive_api::ModelError;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::ClientError;

mod channel;
mod input;
mod input_device;
mod multiplex;
mod schedule;
mod tags;

#[cfg(test)]
mod operation_tests;

/// Method, path and body of a single API call, independent of the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Unencoded path segments. Each one is percent-encoded as a whole when
    /// the URL is built, so values containing `/` stay a single segment.
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new<I, S>(method: Method, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            path: path.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_owned(), value.to_string()));
        }
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

pub trait Operation {
    /// Name used in logs, e.g. `CreateChannel`.
    const NAME: &'static str;

    type Output: DeserializeOwned;

    fn http_request(&self) -> Result<HttpRequest, ClientError>;

    /// Client-side checks run before sending, when enabled in the config.
    fn validate_request(&self) -> Result<(), ModelError> {
        Ok(())
    }

    fn parse_response(&self, body: &[u8]) -> Result<Self::Output, ClientError> {
        serde_json::from_slice(body).map_err(|err| ClientError::BodyParsingError(Self::NAME, err))
    }
}

/// Returns a required path parameter or fails with the wire name of the
/// missing field.
///
/// `.` and `..` are rejected because URL normalization would resolve them
/// into a different route.
pub(crate) fn path_param<'a>(
    name: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ClientError> {
    match value.as_deref() {
        None | Some("") => Err(ClientError::MissingParameter(name)),
        Some(value @ ("." | "..")) => Err(ClientError::InvalidParameter(name, value.to_owned())),
        Some(value) => Ok(value),
    }
}

/// Serializes the request as a JSON object, dropping fields that are sent in
/// the path or query instead.
pub(crate) fn json_body<T: Serialize>(
    operation: &'static str,
    request: &T,
    exclude: &[&str],
) -> Result<serde_json::Value, ClientError> {
    let mut body = serde_json::to_value(request)
        .map_err(|err| ClientError::SerializationError(operation, err))?;
    if let Some(object) = body.as_object_mut() {
        for field in exclude {
            object.remove(*field);
        }
    }
    Ok(body)
}
