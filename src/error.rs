//! Error types for the RewardsKit client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the rewards service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP round-trip itself failed (connection, TLS, timeout,
    /// cancellation). Never interpreted as a missing resource.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a structured error response.
    #[error("API error ({0})")]
    Api(ApiErrorPayload),

    /// A success response carried a body that does not match the contract.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// A decoded service error response.
///
/// The service reports failures as an ordered list of error objects; the
/// effective status code lives in the last entry. Both are resolved here,
/// once, when the response is read — callers only ever look at
/// `status_code` and `details`.
#[derive(Debug, Clone)]
pub struct ApiErrorPayload {
    /// Effective status code: the last error entry's `status` when present,
    /// otherwise the HTTP status of the response.
    pub status_code: u16,
    /// Every structured error object from the response, in service order.
    pub details: Vec<ErrorDetail>,
}

/// One structured error object from the service's error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable description.
    pub message: String,
    /// Machine-readable error code (e.g. "code_already_claimed").
    #[serde(default)]
    pub code: Option<String>,
    /// Status code attached to this entry.
    #[serde(default)]
    pub status: Option<u16>,
}

/// Wire shape of an error response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub errors: Vec<ErrorDetail>,
}

impl std::fmt::Display for ApiErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status {}", self.status_code)?;
        if let Some(first) = self.details.first() {
            write!(f, ": {}", first.message)?;
        }
        Ok(())
    }
}

impl ApiErrorPayload {
    /// Resolve a decoded envelope against the HTTP status of the response.
    pub(crate) fn from_envelope(http_status: u16, envelope: ErrorEnvelope) -> Self {
        let status_code = envelope
            .errors
            .last()
            .and_then(|entry| entry.status)
            .unwrap_or(http_status);
        Self {
            status_code,
            details: envelope.errors,
        }
    }

    /// Fallback for error bodies that are not the documented envelope.
    pub(crate) fn from_raw(http_status: u16, body: String) -> Self {
        let details = if body.is_empty() {
            Vec::new()
        } else {
            vec![ErrorDetail {
                message: body,
                code: None,
                status: None,
            }]
        };
        Self {
            status_code: http_status,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_comes_from_last_entry() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"errors":[{"message":"first","status":422},{"message":"second","status":409}]}"#,
        )
        .unwrap();
        let payload = ApiErrorPayload::from_envelope(400, envelope);
        assert_eq!(payload.status_code, 409);
        assert_eq!(payload.details.len(), 2);
        assert_eq!(payload.details[0].message, "first");
    }

    #[test]
    fn status_falls_back_to_http_status() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"errors":[{"message":"nope"}]}"#).unwrap();
        let payload = ApiErrorPayload::from_envelope(500, envelope);
        assert_eq!(payload.status_code, 500);
    }

    #[test]
    fn empty_envelope_uses_http_status() {
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"errors":[]}"#).unwrap();
        let payload = ApiErrorPayload::from_envelope(503, envelope);
        assert_eq!(payload.status_code, 503);
        assert!(payload.details.is_empty());
    }

    #[test]
    fn raw_body_becomes_single_detail() {
        let payload = ApiErrorPayload::from_raw(502, "bad gateway".to_string());
        assert_eq!(payload.status_code, 502);
        assert_eq!(payload.details.len(), 1);
        assert_eq!(payload.details[0].message, "bad gateway");
    }

    #[test]
    fn empty_raw_body_has_no_details() {
        let payload = ApiErrorPayload::from_raw(404, String::new());
        assert_eq!(payload.status_code, 404);
        assert!(payload.details.is_empty());
    }

    #[test]
    fn detail_decodes_optional_code() {
        let detail: ErrorDetail = serde_json::from_str(
            r#"{"message":"code already claimed","code":"code_already_claimed","status":409}"#,
        )
        .unwrap();
        assert_eq!(detail.code.as_deref(), Some("code_already_claimed"));
        assert_eq!(detail.status, Some(409));
    }

    #[test]
    fn api_error_display_includes_status() {
        let err = ClientError::Api(ApiErrorPayload {
            status_code: 422,
            details: Vec::new(),
        });
        assert!(format!("{err}").contains("422"));
    }
}
