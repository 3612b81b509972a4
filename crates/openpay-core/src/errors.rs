//! Failure taxonomy shared by every Openpay operation.
//!
//! Three kinds of failure exist and are never conflated:
//!
//! - [`EncodingError`]: the request could not be built locally. Nothing was sent.
//! - [`ClassifiedError`]: the API (or the network path to it) rejected the call.
//! - [`DeserializationError`]: a successful response did not match the expected entity shape.

use std::fmt::Display;

/// The category of a [`ClassifiedError`], derived from the HTTP status of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    RateLimited,
    ServerFault,
    /// No response was received: connection failure, timeout or an unreadable body.
    ServiceUnavailable,
    Unknown,
}

impl ErrorCategory {
    /// Maps a received HTTP status code to its category.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorCategory::BadRequest,
            401 | 403 => ErrorCategory::Unauthorized,
            404 => ErrorCategory::NotFound,
            409 => ErrorCategory::Conflict,
            429 => ErrorCategory::RateLimited,
            500..=599 => ErrorCategory::ServerFault,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Only transient infrastructure faults are worth retrying unmodified.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::ServiceUnavailable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::BadRequest => "bad request",
            ErrorCategory::Unauthorized => "unauthorized",
            ErrorCategory::NotFound => "not found",
            ErrorCategory::Conflict => "conflict",
            ErrorCategory::RateLimited => "rate limited",
            ErrorCategory::ServerFault => "server fault",
            ErrorCategory::ServiceUnavailable => "service unavailable",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure reported by the API or by the network path to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Openpay {category} error{}: {message}", describe_codes(.http_status, .gateway_error_code))]
pub struct ClassifiedError {
    pub category: ErrorCategory,
    /// HTTP status of the response; `None` when no response was received.
    pub http_status: Option<u16>,
    /// Gateway-specific numeric error code from the error body.
    pub gateway_error_code: Option<i64>,
    pub message: String,
    /// The gateway's own category label (`request`, `gateway`, `internal`...).
    pub gateway_category: Option<String>,
    pub request_id: Option<String>,
    /// Anti-fraud rules that rejected the transaction, if any.
    pub fraud_rules: Vec<String>,
}

fn describe_codes(http_status: &Option<u16>, gateway_error_code: &Option<i64>) -> String {
    match (http_status, gateway_error_code) {
        (Some(status), Some(code)) => format!(" (http {status}, code {code})"),
        (Some(status), None) => format!(" (http {status})"),
        (None, Some(code)) => format!(" (code {code})"),
        (None, None) => String::new(),
    }
}

impl ClassifiedError {
    /// A failure where no HTTP response was obtained.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ClassifiedError {
            category: ErrorCategory::ServiceUnavailable,
            http_status: None,
            gateway_error_code: None,
            message: message.into(),
            gateway_category: None,
            request_id: None,
            fraud_rules: Vec::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category == ErrorCategory::NotFound
    }
}

/// The request could not be encoded. Raised before anything is sent over the wire.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("Missing required field '{field}' in {params}")]
    MissingField {
        params: &'static str,
        field: &'static str,
    },

    #[error("{params} did not encode to a JSON object")]
    NotAnObject { params: &'static str },

    #[error("Parameter serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Path template '{template}' has no value for placeholder '{placeholder}'")]
    UnresolvedPath {
        template: &'static str,
        placeholder: String,
    },

    #[error("Identifier '{id}' cannot be addressed as a path segment")]
    DotSegment { id: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A successful (2xx) response body that does not match the expected entity shape.
///
/// This indicates a client/server contract mismatch, not a business failure.
#[derive(Debug, thiserror::Error)]
#[error("Failed to decode {expected} from http {http_status} response: {source}")]
pub struct DeserializationError {
    pub http_status: u16,
    /// The Rust type the body was decoded into.
    pub expected: &'static str,
    /// Leading part of the offending body, for diagnostics.
    pub body_excerpt: String,
    #[source]
    pub source: serde_json::Error,
}

const BODY_EXCERPT_LEN: usize = 256;

impl DeserializationError {
    pub fn new<E>(http_status: u16, body: &[u8], source: serde_json::Error) -> Self {
        let text = String::from_utf8_lossy(body);
        DeserializationError {
            http_status,
            expected: std::any::type_name::<E>(),
            body_excerpt: text.chars().take(BODY_EXCERPT_LEN).collect(),
            source,
        }
    }
}

/// Error type for all Openpay client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Api(#[from] ClassifiedError),

    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
}

impl Error {
    /// The category of an API failure; `None` for local encoding and decoding failures.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Api(err) => Some(err.category),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_some_and(|c| c.is_retryable())
    }

    pub fn as_classified(&self) -> Option<&ClassifiedError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// A specialized `Result` type for Openpay operations.
pub type Result<T> = std::result::Result<T, Error>;
