//! Classification of HTTP response errors into user-facing messages.
//!
//! Failures are terminal for the invocation; classification only makes
//! the failing status legible before the error propagates.

use reqwest::StatusCode;

/// Turns a `reqwest` status error into a message a user can act on.
pub fn describe_status_error(error: &reqwest::Error) -> String {
    match error.status() {
        Some(StatusCode::NOT_FOUND) => {
            "HTTP 404: no artifact at this URL; the release or platform build may not exist"
                .to_string()
        }
        Some(StatusCode::UNAUTHORIZED) => {
            "HTTP 401: authentication required".to_string()
        }
        Some(StatusCode::FORBIDDEN) => {
            "HTTP 403: access forbidden, possibly rate limited".to_string()
        }
        Some(StatusCode::TOO_MANY_REQUESTS) => {
            "HTTP 429: too many requests, try again later".to_string()
        }
        Some(s) if s.is_client_error() => format!("HTTP {} client error", s.as_u16()),
        Some(s) if s.is_server_error() => format!("HTTP {} server error", s.as_u16()),
        _ => error.to_string(),
    }
}

/// Wraps an `error_for_status()` failure with its classified message.
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    let message = describe_status_error(&error);
    anyhow::Error::from(error).context(message)
}
