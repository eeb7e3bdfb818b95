//! REST API types for the confirmation function.
//!
//! The request body matches what the frontend's confirmation service
//! sends: the three captured lead fields, nothing else.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Body of `POST /send-confirmation`.
///
/// Missing fields deserialize as empty strings so absent and blank get
/// the same 400, with a message naming the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    /// Lead's full name
    #[serde(default)]
    pub name: String,

    /// Recipient address
    #[serde(default)]
    pub email: String,

    /// Industry used to personalize the copy
    #[serde(default)]
    pub industry: String,
}

impl ConfirmationRequest {
    /// First blank field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.email.trim().is_empty() {
            return Some("email");
        }
        if self.industry.trim().is_empty() {
            return Some("industry");
        }
        None
    }
}

/// Success response of the confirmation function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    /// Always true on the 200 path
    pub success: bool,

    /// Mail provider's message id
    pub id: String,
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "error": error
    })
}
