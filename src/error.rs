use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardenError {
    #[error("invalid {field}: '{value}' is not a valid IPv4 address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("security event {0} not found")]
    EventNotFound(u64),
}

impl WardenError {
    fn status(&self) -> StatusCode {
        match self {
            WardenError::InvalidAddress { .. } => StatusCode::BAD_REQUEST,
            WardenError::EventNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for WardenError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Dotted-quad IPv4 check for user-supplied trigger input. Rejects anything
/// `Ipv4Addr` cannot parse (e.g. "999.1.1.1", hostnames, IPv6).
pub fn validate_ipv4(field: &'static str, value: &str) -> Result<(), WardenError> {
    if value.parse::<std::net::Ipv4Addr>().is_ok() {
        Ok(())
    } else {
        Err(WardenError::InvalidAddress {
            field,
            value: value.to_string(),
        })
    }
}
