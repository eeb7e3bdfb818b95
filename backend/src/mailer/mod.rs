//! Confirmation email pipeline.
//!
//! Generates personalized welcome copy with the OpenAI chat completions
//! API and delivers it through the Resend mail API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use leadbloom::mailer::deliver_confirmation;
//!
//! let sent = deliver_confirmation("Ana", "ana@x.com", "finance").await?;
//! println!("delivered as {}", sent.provider_id);
//! ```

pub mod prompt;

use serde::Deserialize;
use std::env;

use crate::error::{ContentError, ContentResult, DeliveryError, DeliveryResult, NotifyResult};

pub use prompt::{build_messages, subject_for, system_prompt, user_prompt};

/// Chat completions endpoint.
const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Mail send endpoint.
const SEND_EMAIL_URL: &str = "https://api.resend.com/emails";

/// Default sender, on the domain verified with the mail provider.
const DEFAULT_FROM: &str = "Leadbloom <hello@mail.leadbloom.app>";

// =============================================================================
// Copy generation
// =============================================================================

/// Chat completions client for email copy generation.
#[derive(Clone)]
pub struct ContentClient {
    api_key: String,
    model: String,
    max_tokens: u32,
}

/// Chat completions response structure
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Chat completions error response
#[derive(Debug, Deserialize)]
struct CompletionErrorBody {
    error: CompletionErrorDetail,
}

#[derive(Debug, Deserialize)]
struct CompletionErrorDetail {
    message: String,
}

impl ContentClient {
    /// Create a new client with explicit API key
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 600,
        }
    }

    /// Create a client from environment variable OPENAI_API_KEY
    pub fn from_env() -> ContentResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| ContentError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Set the model to use
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Generate the HTML body of one confirmation email.
    pub async fn generate_email_body(&self, name: &str, industry: &str) -> ContentResult<String> {
        tracing::info!(model = %self.model, max_tokens = self.max_tokens, "📡 Calling completion API");

        let client = reqwest::Client::new();

        let request_body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": 0.7,
            "messages": prompt::build_messages(name, industry),
        });

        let response = client
            .post(CHAT_COMPLETIONS_URL)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ContentError::HttpError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ContentError::HttpError(e.to_string()))?;

        if !status.is_success() {
            // Try to parse the provider's error shape
            if let Ok(error) = serde_json::from_str::<CompletionErrorBody>(&body) {
                tracing::error!("✗ Completion API error: {}", error.error.message);
                return Err(ContentError::ApiError(error.error.message));
            }
            tracing::error!("✗ Completion HTTP error: {}", status);
            return Err(ContentError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| ContentError::InvalidResponse(e.to_string()))?;

        extract_body(response)
    }
}

/// Pull the generated HTML out of a completion response.
///
/// The request asks for a single completion, so only choice index 0 is
/// ever read. An empty `choices` array is a provider error, never a
/// panic.
fn extract_body(response: ChatResponse) -> ContentResult<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ContentError::NoChoices)?;

    let html = strip_code_fences(&choice.message.content);
    if html.is_empty() {
        return Err(ContentError::InvalidResponse("Empty completion".to_string()));
    }
    Ok(html)
}

/// Strip the markdown code fences models sometimes wrap HTML in.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix("```") {
        // Skip the language identifier (e.g. "html") on the fence line
        let content_start = rest.find('\n').map(|i| i + 1).unwrap_or(0);
        let content = &rest[content_start..];
        if let Some(end) = content.rfind("```") {
            return content[..end].trim().to_string();
        }
        return content.trim().to_string();
    }
    trimmed.to_string()
}

// =============================================================================
// Delivery
// =============================================================================

/// Mail API client for email delivery.
#[derive(Clone)]
pub struct DeliveryClient {
    api_key: String,
    from: String,
}

/// Mail API success response
#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// Mail API error response
#[derive(Debug, Deserialize)]
struct SendErrorBody {
    message: String,
}

impl DeliveryClient {
    /// Create a new client with explicit API key
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            from: DEFAULT_FROM.to_string(),
        }
    }

    /// Create a client from environment variable RESEND_API_KEY.
    ///
    /// `CONFIRMATION_FROM` overrides the default sender; whatever is
    /// used must live on a domain verified with the mail provider.
    pub fn from_env() -> DeliveryResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key = env::var("RESEND_API_KEY").map_err(|_| DeliveryError::MissingApiKey)?;

        let mut client = Self::new(api_key);
        if let Ok(from) = env::var("CONFIRMATION_FROM") {
            client.from = from;
        }
        Ok(client)
    }

    /// Set the sender address
    pub fn with_from(mut self, from: &str) -> Self {
        self.from = from.to_string();
        self
    }

    /// Send one email; returns the provider's message id.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> DeliveryResult<String> {
        tracing::info!(to = %to, from = %self.from, "📨 Sending via mail API");

        let client = reqwest::Client::new();

        let request_body = serde_json::json!({
            "from": self.from,
            "to": [to],
            "subject": subject,
            "html": html,
        });

        let response = client
            .post(SEND_EMAIL_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DeliveryError::HttpError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DeliveryError::HttpError(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<SendErrorBody>(&body) {
                tracing::error!("✗ Mail API error: {}", error.message);
                return Err(DeliveryError::ApiError(error.message));
            }
            tracing::error!("✗ Mail HTTP error: {}", status);
            return Err(DeliveryError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let sent: SendResponse =
            serde_json::from_str(&body).map_err(|e| DeliveryError::InvalidResponse(e.to_string()))?;

        Ok(sent.id)
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// A successfully delivered confirmation.
#[derive(Debug, Clone)]
pub struct SentConfirmation {
    /// Mail provider's message id
    pub provider_id: String,
    /// Subject line that was sent
    pub subject: String,
}

/// Generate and deliver the confirmation email for one lead.
///
/// Both clients read their keys from the environment. Each provider is
/// called exactly once; there is no retry here, the caller decides
/// whether to invoke the function again.
pub async fn deliver_confirmation(
    name: &str,
    email: &str,
    industry: &str,
) -> NotifyResult<SentConfirmation> {
    let content = ContentClient::from_env()?;
    let html = content.generate_email_body(name, industry).await?;
    tracing::info!(bytes = html.len(), "✓ Copy generated");

    let delivery = DeliveryClient::from_env()?;
    let subject = prompt::subject_for(name);
    let provider_id = delivery.send(email, &subject, &html).await?;
    tracing::info!(provider_id = %provider_id, "✅ Confirmation delivered");

    Ok(SentConfirmation {
        provider_id,
        subject,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_is_used() {
        // Extra fields and extra choices must not break the parse
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "<p>Welcome!</p>"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "<p>Other copy</p>"}, "finish_reason": "stop"}
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let html = extract_body(response).unwrap();
        assert_eq!(html, "<p>Welcome!</p>");
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = extract_body(response).unwrap_err();
        assert!(matches!(err, ContentError::NoChoices));
    }

    #[test]
    fn test_code_fences_are_stripped() {
        let fenced = "```html\n<p>Hi Ana</p>\n```";
        assert_eq!(strip_code_fences(fenced), "<p>Hi Ana</p>");

        let generic = "```\n<p>Hi</p>\n```";
        assert_eq!(strip_code_fences(generic), "<p>Hi</p>");

        let plain = "<p>Hi Ana</p>";
        assert_eq!(strip_code_fences(plain), plain);
    }

    #[test]
    fn test_completion_error_body_parses() {
        let body = r#"{"error": {"message": "Rate limit reached", "type": "requests", "code": null}}"#;
        let parsed: CompletionErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Rate limit reached");
    }

    #[test]
    fn test_send_error_body_parses() {
        let body = r#"{"statusCode": 429, "message": "Too many requests", "name": "rate_limit_exceeded"}"#;
        let parsed: SendErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.message, "Too many requests");
    }
}
