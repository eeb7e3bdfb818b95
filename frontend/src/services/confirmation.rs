//! Confirmation email trigger.
//!
//! Invokes the remote `send-confirmation` function with the lead's
//! fields. The function does the heavy lifting (copy generation and
//! delivery); this wrapper only reports success or a message.

use gloo_net::http::Request;

use super::failure_from;
use crate::config::{CONFIRMATION_FUNCTION, FUNCTIONS_URL, SUPABASE_ANON_KEY};
use crate::flow::ConfirmationMailer;
use crate::types::{LeadInput, OperationResult};

/// Client for the confirmation-email function.
pub struct ConfirmationApi {
    function_url: String,
}

impl ConfirmationApi {
    /// Client against the configured functions host.
    pub fn new() -> Self {
        Self {
            function_url: format!("{}/{}", FUNCTIONS_URL, CONFIRMATION_FUNCTION),
        }
    }
}

impl ConfirmationMailer for ConfirmationApi {
    async fn send_confirmation(&self, lead: &LeadInput) -> OperationResult {
        log::info!("📧 Requesting confirmation email for {}...", lead.email);

        let request = match Request::post(&self.function_url)
            .header("Authorization", &format!("Bearer {}", SUPABASE_ANON_KEY))
            .json(lead)
        {
            Ok(request) => request,
            Err(e) => return OperationResult::failed(e.to_string()),
        };

        match request.send().await {
            Ok(response) if response.ok() => {
                log::info!("✅ Confirmation email queued");
                OperationResult::ok()
            }
            Ok(response) => failure_from(response).await,
            Err(e) => {
                log::error!("❌ Confirmation request failed: {}", e);
                OperationResult::failed(e.to_string())
            }
        }
    }
}
