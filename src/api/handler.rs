//! API Lambda handler - thin router that delegates to the core selector.
//!
//! This module handles:
//! - Request path routing (`/quotes/random`, `/themes`)
//! - Theme query parameter extraction
//! - Mapping selection failures to JSON error payloads

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::dataset;
use crate::core::selector;

pub use self::function_handler as handler;

/// Lambda handler for the read API entrypoint.
///
/// Routes requests by path: `/quotes/random` returns one uniformly-random
/// quote for an optional `theme` query parameter, `/themes` returns the
/// dataset's theme list with the `"All"` sentinel prepended.
///
/// # Errors
///
/// Returns an error response payload when the request path is unknown, the
/// dataset cannot be loaded, or the candidate pool is empty; never fails
/// the Lambda invocation itself.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "API received request");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(%request_id, "Config error: {}", e);
            return Ok(helpers::err_response(500, "ConfigError", &e));
        }
    };

    let Some(path) = extract_path(&event.payload) else {
        error!(%request_id, "Request missing path");
        return Ok(helpers::err_response(400, "BadRequest", "Missing request path"));
    };
    info!(%request_id, raw_path = %path, "Request path");

    let quotes = match dataset::load_dataset(&config.quotes_path) {
        Ok(quotes) => quotes,
        Err(e) => {
            error!(%request_id, "Dataset error: {}", e);
            return Ok(helpers::quote_error_response(&e));
        }
    };

    if path.ends_with("/quotes/random") {
        let theme = extract_theme(&event.payload);
        return Ok(match selector::random_quote(&quotes, theme.as_deref()) {
            Ok(quote) => helpers::ok_json(&quote),
            Err(e) => {
                info!(%request_id, "No quote selected: {}", e);
                helpers::quote_error_response(&e)
            }
        });
    }

    if path.ends_with("/themes") {
        return Ok(helpers::ok_json(&dataset::available_themes(&quotes)));
    }

    Ok(helpers::err_response(404, "NotFound", "Unknown request path"))
}

/// Pulls the request path from either the HTTP API v2 (`rawPath`) or v1
/// (`path`) payload shape.
fn extract_path(payload: &Value) -> Option<&str> {
    payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("path").and_then(|v| v.as_str()))
}

/// Pulls the optional `theme` query parameter, preferring the decoded
/// `queryStringParameters` map and falling back to `rawQueryString`.
#[must_use]
pub fn extract_theme(payload: &Value) -> Option<String> {
    if let Some(theme) = payload
        .get("queryStringParameters")
        .and_then(|params| params.get("theme"))
        .and_then(|v| v.as_str())
    {
        return Some(theme.to_string());
    }

    let raw = payload.get("rawQueryString").and_then(|v| v.as_str())?;
    raw.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != "theme" {
            return None;
        }
        urlencoding::decode(value).ok().map(|v| v.into_owned())
    })
}
