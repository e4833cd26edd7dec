use std::fmt;

use medialive_api::ModelError;
use reqwest::{Method, StatusCode, header::HeaderMap};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed client-side validation.")]
    Validation(#[from] ModelError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Missing required parameter \"{0}\".")]
    MissingParameter(&'static str),

    #[error("Parameter \"{0}\" has value {1:?} that cannot be sent as a path segment.")]
    InvalidParameter(&'static str, String),

    #[error("Request failed! Method: {0} URL: {1}")]
    RequestFailed(Method, Url, #[source] reqwest::Error),

    #[error("Failed to read response body.")]
    BodyReadError(#[source] reqwest::Error),

    #[error("Failed to build HTTP client.")]
    HttpClientInitError(#[source] reqwest::Error),

    #[error("Failed to serialize {0} request body.")]
    SerializationError(&'static str, #[source] serde_json::Error),

    #[error("Failed to parse {0} response body.")]
    BodyParsingError(&'static str, #[source] serde_json::Error),

    #[error("Invalid endpoint URL: {1}")]
    InvalidEndpointUrl(#[source] url::ParseError, String),

    #[error("Endpoint URL {0} cannot be used as a base for API paths.")]
    EndpointNotABase(Url),
}

impl ClientError {
    /// Error returned by the service, if that is what failed.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            ClientError::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// Error category reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceErrorKind {
    BadRequest,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    BadGateway,
    GatewayTimeout,
    /// Raw error code that does not match any known category.
    Unknown(String),
}

impl ServiceErrorKind {
    /// Maps an error code such as `NotFoundException` (with or without the
    /// `Exception` suffix) to a category.
    pub fn from_code(code: &str) -> Self {
        match code.trim().trim_end_matches("Exception") {
            "BadRequest" => Self::BadRequest,
            "Forbidden" => Self::Forbidden,
            "NotFound" => Self::NotFound,
            "Conflict" => Self::Conflict,
            "UnprocessableEntity" => Self::UnprocessableEntity,
            "TooManyRequests" => Self::TooManyRequests,
            "InternalServerError" => Self::InternalServerError,
            "BadGateway" => Self::BadGateway,
            "GatewayTimeout" => Self::GatewayTimeout,
            _ => Self::Unknown(code.trim().to_owned()),
        }
    }

    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::Conflict,
            StatusCode::UNPROCESSABLE_ENTITY => Self::UnprocessableEntity,
            StatusCode::TOO_MANY_REQUESTS => Self::TooManyRequests,
            StatusCode::INTERNAL_SERVER_ERROR => Self::InternalServerError,
            StatusCode::BAD_GATEWAY => Self::BadGateway,
            StatusCode::GATEWAY_TIMEOUT => Self::GatewayTimeout,
            status => Self::Unknown(status.as_str().to_owned()),
        }
    }

    /// Throttling and server-side failures may succeed when retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::TooManyRequests
                | Self::InternalServerError
                | Self::BadGateway
                | Self::GatewayTimeout
        )
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => f.write_str("BadRequest"),
            Self::Forbidden => f.write_str("Forbidden"),
            Self::NotFound => f.write_str("NotFound"),
            Self::Conflict => f.write_str("Conflict"),
            Self::UnprocessableEntity => f.write_str("UnprocessableEntity"),
            Self::TooManyRequests => f.write_str("TooManyRequests"),
            Self::InternalServerError => f.write_str("InternalServerError"),
            Self::BadGateway => f.write_str("BadGateway"),
            Self::GatewayTimeout => f.write_str("GatewayTimeout"),
            Self::Unknown(code) => write!(f, "Unknown({code})"),
        }
    }
}

/// Single entry of the `validationErrors` list returned with
/// `UnprocessableEntityException`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub element_path: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Service returned {kind} (status: {status}): {}",
    .message.as_deref().unwrap_or("no message")
)]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub status: StatusCode,
    pub message: Option<String>,
    pub request_id: Option<String>,
    pub validation_errors: Vec<ValidationError>,
}

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

impl ServiceError {
    /// Builds the error from a non-2xx response.
    ///
    /// The kind is taken from the `x-amzn-ErrorType` header, then from the
    /// `__type` body field, then from the status code. Body fields are read
    /// one by one, so a malformed field only loses itself.
    pub fn from_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Self {
        let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let header_code = headers
            .get(ERROR_TYPE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(':').next().unwrap_or(value));
        // `__type` may be namespaced, e.g. `com.amazonaws.medialive#NotFoundException`.
        let body_code = body
            .get("__type")
            .and_then(Value::as_str)
            .map(|value| value.rsplit('#').next().unwrap_or(value));
        let kind = match non_empty(header_code).or(non_empty(body_code)) {
            Some(code) => ServiceErrorKind::from_code(code),
            None => ServiceErrorKind::from_status(status),
        };

        let message = ["message", "Message"]
            .iter()
            .find_map(|field| body.get(field).and_then(Value::as_str))
            .map(str::to_owned);

        let validation_errors = body
            .get("validationErrors")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| ValidationError::deserialize(entry).ok())
                    .collect()
            })
            .unwrap_or_default();

        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Self {
            kind,
            status,
            message,
            request_id,
            validation_errors,
        }
    }
}

fn non_empty(code: Option<&str>) -> Option<&str> {
    code.map(str::trim).filter(|code| !code.is_empty())
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn kind_from_header() {
        let err = ServiceError::from_response(
            StatusCode::NOT_FOUND,
            &headers(&[
                ("x-amzn-ErrorType", "NotFoundException:http://internal.amazon.com/"),
                ("x-amzn-RequestId", "req-1"),
            ]),
            br#"{"message":"Channel not found"}"#,
        );
        assert_eq!(err.kind, ServiceErrorKind::NotFound);
        assert_eq!(err.message.as_deref(), Some("Channel not found"));
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn kind_from_body_type() {
        let err = ServiceError::from_response(
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            br#"{"__type":"com.amazonaws.medialive#ConflictException","Message":"Channel is running"}"#,
        );
        assert_eq!(err.kind, ServiceErrorKind::Conflict);
        assert_eq!(err.message.as_deref(), Some("Channel is running"));
        assert_eq!(err.request_id, None);
    }

    #[test]
    fn kind_from_status() {
        let cases = [
            (StatusCode::BAD_REQUEST, ServiceErrorKind::BadRequest),
            (StatusCode::FORBIDDEN, ServiceErrorKind::Forbidden),
            (StatusCode::TOO_MANY_REQUESTS, ServiceErrorKind::TooManyRequests),
            (StatusCode::BAD_GATEWAY, ServiceErrorKind::BadGateway),
            (StatusCode::GATEWAY_TIMEOUT, ServiceErrorKind::GatewayTimeout),
            (
                StatusCode::IM_A_TEAPOT,
                ServiceErrorKind::Unknown("418".to_owned()),
            ),
        ];
        for (status, kind) in cases {
            let err = ServiceError::from_response(status, &HeaderMap::new(), b"<html>oops</html>");
            assert_eq!(err.kind, kind);
            assert_eq!(err.message, None);
        }
    }

    #[test]
    fn validation_errors() {
        let err = ServiceError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &headers(&[("x-amzn-ErrorType", "UnprocessableEntityException")]),
            br#"{
                "message": "Invalid encoder settings",
                "validationErrors": [
                    {"elementPath": "encoderSettings.videoDescriptions[0].width", "errorMessage": "must be even"}
                ]
            }"#,
        );
        assert_eq!(err.kind, ServiceErrorKind::UnprocessableEntity);
        assert_eq!(err.validation_errors.len(), 1);
        assert_eq!(
            err.validation_errors[0].error_message.as_deref(),
            Some("must be even")
        );
        assert!(!err.kind.is_retryable());
        assert!(ServiceErrorKind::TooManyRequests.is_retryable());
    }

    #[test]
    fn malformed_field_keeps_the_rest() {
        let err = ServiceError::from_response(
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            br#"{"__type":"ConflictException","message":"busy","validationErrors":null}"#,
        );
        assert_eq!(err.kind, ServiceErrorKind::Conflict);
        assert_eq!(err.message.as_deref(), Some("busy"));
        assert!(err.validation_errors.is_empty());

        let err = ServiceError::from_response(
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            br#"{"__type":"ConflictException","message":"busy","Message":"Busy"}"#,
        );
        assert_eq!(err.kind, ServiceErrorKind::Conflict);
        assert_eq!(err.message.as_deref(), Some("busy"));

        let err = ServiceError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &HeaderMap::new(),
            br#"{"validationErrors":[{"elementPath":"name","errorMessage":"too long"},"oops"]}"#,
        );
        assert_eq!(err.validation_errors.len(), 1);
    }

    #[test]
    fn empty_header_falls_back_to_body_type() {
        let err = ServiceError::from_response(
            StatusCode::BAD_REQUEST,
            &headers(&[("x-amzn-ErrorType", "")]),
            br#"{"__type":"ForbiddenException"}"#,
        );
        assert_eq!(err.kind, ServiceErrorKind::Forbidden);

        let err = ServiceError::from_response(
            StatusCode::NOT_FOUND,
            &headers(&[("x-amzn-ErrorType", ":http://internal.amazon.com/")]),
            b"",
        );
        assert_eq!(err.kind, ServiceErrorKind::NotFound);
    }

    #[test]
    fn unknown_code_is_kept() {
        assert_eq!(
            ServiceErrorKind::from_code("LimitExceededException"),
            ServiceErrorKind::Unknown("LimitExceededException".to_owned())
        );
    }
}
