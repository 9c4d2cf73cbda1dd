//! Response envelopes. Errors follow RFC 7807 problem details.

use serde::{Deserialize, Serialize};

/// Envelope for operations that return an acknowledgement rather than a
/// resource body (delete, for instance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }
}

/// RFC 7807 problem details body.
///
/// `type` stays `about:blank`: the title plus the status code is the whole
/// taxonomy this API needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ErrorResponse {
    fn problem(status: u16, title: &str, detail: Option<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.to_string(),
            status,
            detail,
            instance: None,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::problem(400, "Bad Request", Some(detail.into()))
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::problem(404, "Not Found", Some(detail.into()))
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::problem(409, "Conflict", Some(detail.into()))
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::problem(422, "Validation Failed", Some(detail.into()))
    }

    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self::problem(502, "Upstream Service Failure", Some(detail.into()))
    }

    // No detail: internal causes are logged, not leaked to the client.
    pub fn internal_error() -> Self {
        Self::problem(500, "Internal Server Error", None)
    }
}
