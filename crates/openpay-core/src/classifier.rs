//! Maps failed HTTP exchanges to [`ClassifiedError`]s.
//!
//! Classification is a pure function of the status code and the response body. The status
//! decides the category; the body only contributes the gateway code and message.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::{ClassifiedError, ErrorCategory};

/// The JSON error body returned by the gateway on failure.
///
/// ```json
/// {
///   "category": "request",
///   "description": "The requested resource doesn't exist",
///   "http_code": 404,
///   "error_code": 1005,
///   "request_id": "1981cdb8-19cb-4bad-8256-e95d58bc035c"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    /// Short form of `error_code` used by some endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fraud_rules: Vec<String>,
}

const MAX_RAW_MESSAGE_LEN: usize = 512;

/// Classifies a response that was received but did not succeed.
///
/// An empty or non-JSON body still yields the status-derived category; its text (or the
/// canonical reason phrase) becomes the message.
pub fn classify_response(status: u16, body: &[u8]) -> ClassifiedError {
    let category = ErrorCategory::from_status(status);

    match serde_json::from_slice::<GatewayErrorBody>(body) {
        Ok(parsed) => ClassifiedError {
            category,
            http_status: Some(status),
            gateway_error_code: parsed.error_code.or(parsed.code),
            message: parsed
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| fallback_message(status, body)),
            gateway_category: parsed.category,
            request_id: parsed.request_id,
            fraud_rules: parsed.fraud_rules,
        },
        Err(_) => ClassifiedError {
            category,
            http_status: Some(status),
            gateway_error_code: None,
            message: fallback_message(status, body),
            gateway_category: None,
            request_id: None,
            fraud_rules: Vec::new(),
        },
    }
}

/// Classifies a failure where no response was obtained (refused connection, timeout,
/// unreadable body). Always [`ErrorCategory::ServiceUnavailable`].
pub fn classify_transport_failure(reason: impl std::fmt::Display) -> ClassifiedError {
    ClassifiedError::service_unavailable(reason.to_string())
}

fn fallback_message(status: u16, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return StatusCode::from_u16(status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP status {status}"));
    }
    text.chars().take(MAX_RAW_MESSAGE_LEN).collect()
}
