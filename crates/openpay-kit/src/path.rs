//! Resource path templates such as `/v1/{merchantId}/customers/{customerId}/charges`.

use std::borrow::Cow;

use openpay_core::errors::EncodingError;

pub const MERCHANT_ID: &str = "merchantId";
pub const CUSTOMER_ID: &str = "customerId";

pub const MERCHANT_PATH: &str = "/v1/{merchantId}";
pub const CARDS_PATH: &str = "/v1/{merchantId}/cards";
pub const CUSTOMER_CARDS_PATH: &str = "/v1/{merchantId}/customers/{customerId}/cards";
pub const CHARGES_PATH: &str = "/v1/{merchantId}/charges";
pub const CUSTOMER_CHARGES_PATH: &str = "/v1/{merchantId}/customers/{customerId}/charges";
pub const CUSTOMERS_PATH: &str = "/v1/{merchantId}/customers";
pub const FEES_PATH: &str = "/v1/{merchantId}/fees";
pub const PAYOUTS_PATH: &str = "/v1/{merchantId}/payouts";
pub const CUSTOMER_PAYOUTS_PATH: &str = "/v1/{merchantId}/customers/{customerId}/payouts";

/// A path with `{name}` placeholders.
///
/// Resolution fails if any placeholder is left without a value. Substituted values are
/// escaped with [`encode_segment`] and never re-scanned for placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    pub const fn new(template: &'static str) -> Self {
        PathTemplate(template)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitutes every placeholder with its bound value.
    pub fn resolve(&self, bindings: &[(&str, &str)]) -> Result<String, EncodingError> {
        let mut resolved = String::with_capacity(self.0.len() + 32);
        let mut rest = self.0;

        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + len];
            let value = bindings
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| EncodingError::UnresolvedPath {
                    template: self.0,
                    placeholder: name.to_string(),
                })?;

            resolved.push_str(&rest[..start]);
            resolved.push_str(&encode_segment(value)?);
            rest = &rest[start + len + 1..];
        }

        resolved.push_str(rest);
        Ok(resolved)
    }
}

/// Escapes an opaque identifier so it always stays a single path segment.
///
/// `/`, `?` and `#` are percent-encoded. The empty string passes through unchanged;
/// `.` and `..` are rejected since no URL can carry them as a segment.
pub fn encode_segment(id: &str) -> Result<Cow<'_, str>, EncodingError> {
    if id == "." || id == ".." {
        return Err(EncodingError::DotSegment { id: id.to_string() });
    }
    Ok(urlencoding::encode(id))
}
