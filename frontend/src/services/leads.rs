//! Lead persistence via the hosted database's REST endpoint.
//!
//! One call, one row. The anon key only permits inserts on this table,
//! so the browser never holds a credential worth stealing.

use gloo_net::http::Request;

use super::failure_from;
use crate::config::{LEADS_TABLE, SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::flow::LeadStore;
use crate::types::{LeadInput, OperationResult};

/// Client for the remote leads table.
pub struct LeadsTable {
    rest_url: String,
}

impl LeadsTable {
    /// Client against the configured project.
    pub fn new() -> Self {
        Self {
            rest_url: format!("{}/rest/v1/{}", SUPABASE_URL, LEADS_TABLE),
        }
    }
}

impl LeadStore for LeadsTable {
    async fn insert_lead(&self, lead: &LeadInput) -> OperationResult {
        log::info!("📤 Inserting lead into '{}'...", LEADS_TABLE);

        let request = match Request::post(&self.rest_url)
            .header("apikey", SUPABASE_ANON_KEY)
            .header("Authorization", &format!("Bearer {}", SUPABASE_ANON_KEY))
            .header("Prefer", "return=minimal")
            .json(lead)
        {
            Ok(request) => request,
            Err(e) => return OperationResult::failed(e.to_string()),
        };

        match request.send().await {
            Ok(response) if response.ok() => {
                log::info!("✅ Lead stored");
                OperationResult::ok()
            }
            Ok(response) => failure_from(response).await,
            Err(e) => {
                log::error!("❌ Lead insert failed: {}", e);
                OperationResult::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_row_carries_exactly_the_captured_fields() {
        let lead = LeadInput {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            industry: "finance".to_string(),
        };
        let row = serde_json::to_value(&lead).unwrap();
        let object = row.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["name"], "Ana");
        assert_eq!(object["email"], "ana@x.com");
        assert_eq!(object["industry"], "finance");
    }
}
