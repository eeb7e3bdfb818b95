//! Remote services.
//!
//! This module provides the two single-call wrappers behind the submit
//! flow, plus their shared error normalization:
//!
//! # Services
//!
//! - [`leads`] - lead row insert into the hosted database table
//! - [`confirmation`] - confirmation-email function invocation
//!
//! Both wrappers catch every failure (transport or HTTP) and normalize
//! it into an [`OperationResult`] so the flow controller never sees a
//! raw error shape.

pub mod confirmation;
pub mod leads;

pub use confirmation::*;
pub use leads::*;

use crate::config::DEFAULT_ERROR_MESSAGE;
use crate::types::OperationResult;
use gloo_net::http::Response;

/// Normalize a non-2xx response into a failed result.
///
/// Reads the body once, logs the status for debugging, and keeps only
/// the extracted message for the UI.
pub(crate) async fn failure_from(response: Response) -> OperationResult {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::error!("❌ Remote call failed ({}): {}", status, body);
    OperationResult::failed(message_from_body(&body))
}

/// Extract a human-readable message from a JSON error body.
///
/// Understands the shapes our remotes produce: `{"message": …}` from
/// the database REST layer, `{"error": "…"}` from the confirmation
/// function, and `{"error": {"message": …}}` from proxied provider
/// errors. Anything else falls back to the fixed message.
pub fn message_from_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value["error"].as_str() {
            return message.to_string();
        }
        if let Some(message) = value["error"]["message"].as_str() {
            return message.to_string();
        }
        if let Some(message) = value["message"].as_str() {
            return message.to_string();
        }
    }
    DEFAULT_ERROR_MESSAGE.to_string()
}
