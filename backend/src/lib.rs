//! # Leadbloom - lead capture confirmation service
//!
//! Hosts the function the Leadbloom frontend invokes after a lead is
//! stored: generate a personalized welcome email and deliver it through
//! the mail provider.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Frontend   │────▶│  /send-       │────▶│ Completion  │────▶│  Mail API   │
//! │  (browser)  │     │  confirmation │     │ API (copy)  │     │ (delivery)  │
//! └─────────────┘     └───────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leadbloom::mailer::deliver_confirmation;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sent = deliver_confirmation("Ana", "ana@x.com", "finance").await.unwrap();
//!     println!("delivered as {}", sent.provider_id);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`mailer`] - Copy generation and delivery pipeline
//! - [`api`] - HTTP API server

// Core modules
pub mod error;

// Email pipeline
pub mod mailer;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ContentError,
    ContentResult,
    DeliveryError,
    DeliveryResult,
    NotifyError,
    NotifyResult,
    ServerError,
    ServerResult,
};

// =============================================================================
// Re-exports - Mailer
// =============================================================================

pub use mailer::{
    deliver_confirmation,
    subject_for,
    ContentClient,
    DeliveryClient,
    SentConfirmation,
};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{
    error_response,
    ConfirmationRequest,
    ConfirmationResponse,
};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
