//! The HTTP boundary consumed by [`JsonServiceClient`](crate::client::JsonServiceClient).
//!
//! The client only needs "send this request, give me status and body". Connection pooling,
//! TLS and proxies belong to the [`Transport`] implementation.

use std::future::Future;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// A fully resolved request: absolute URL with query, headers (credentials included) and body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// A received response. Any status, success or not.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }
}

/// A failure to obtain a response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Performs one HTTP exchange.
///
/// Implementations must not retry: each call to [`Transport::execute`] is exactly one
/// round trip, and any response that was received (whatever its status) is returned as
/// `Ok`.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).execute(request)
    }
}
