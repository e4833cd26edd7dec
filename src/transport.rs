use std::{sync::Arc, time::Duration};

use reqwest::{
    Method, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use url::Url;

use crate::error::ClientError;

/// Fully resolved request, ready to be put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Sends prepared requests. Implemented by [`ReqwestTransport`] and by
/// in-memory fakes in tests.
pub trait Transport {
    fn send(&self, request: PreparedRequest) -> Result<HttpResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: PreparedRequest) -> Result<HttpResponse, ClientError> {
        (**self).send(request)
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::HttpClientInitError)?;
        Ok(Self { http_client })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: PreparedRequest) -> Result<HttpResponse, ClientError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self
            .http_client
            .request(method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .map_err(|err| ClientError::RequestFailed(method, url, err))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .map_err(ClientError::BodyReadError)?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

pub(crate) fn default_headers(with_body: bool) -> HeaderMap {
    let mut header_map = HeaderMap::new();
    header_map.append(
        USER_AGENT,
        HeaderValue::from_static(concat!("medialive-rs/", env!("CARGO_PKG_VERSION"))),
    );
    if with_body {
        header_map.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    header_map
}
