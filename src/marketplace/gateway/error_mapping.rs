//! Error mapping helpers for the HTTP gateway.

use reqwest::StatusCode;

use crate::marketplace::error::ClientError;

/// Checks if a status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ClientError {
    if error.is_builder() {
        return ClientError::InvalidUrl(format!("{operation}: {error}"));
    }
    if error.is_decode() {
        return ClientError::Decode {
            message: format!("{operation}: {error}"),
        };
    }
    ClientError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> ClientError {
    let message = maybe_message.unwrap_or_else(|| "no details provided".to_owned());
    if is_auth_failure(status) {
        ClientError::Authentication {
            message: format!("{operation} failed: backend returned {status} {message}"),
        }
    } else if status == StatusCode::NOT_FOUND {
        ClientError::NotFound {
            message: format!("{operation}: {message}"),
        }
    } else {
        ClientError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// The backend answers errors with `{"message": "..."}` or
/// `{"error": "..."}`; anything else that is non-blank is used verbatim.
pub(super) fn extract_backend_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
            .map(ToOwned::to_owned);
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
