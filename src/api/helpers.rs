//! Common helper functions for API handlers.
//!
//! This module provides the JSON response builders shared across routes.

use serde_json::{Value, json};

use crate::errors::QuoteError;

/// Returns a 200 OK response with `body` serialized as the JSON body.
#[must_use]
pub fn ok_json(body: &impl serde::Serialize) -> Value {
    json!({
        "statusCode": 200,
        "body": serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string())
    })
}

/// Returns an error response with the given status code, error label, and
/// human-readable message.
#[must_use]
pub fn err_response(status_code: u16, error: &str, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": error, "message": message }).to_string()
    })
}

/// Maps a selection failure to its response: empty pools are a 404 with the
/// pool description, everything else a 500.
#[must_use]
pub fn quote_error_response(error: &QuoteError) -> Value {
    let status = match error {
        QuoteError::EmptyPool { .. } => 404,
        _ => 500,
    };
    err_response(status, error.label(), &error.to_string())
}
