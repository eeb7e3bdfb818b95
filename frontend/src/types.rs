//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Lead Types** - Form input and captured leads
//! - **Operation Types** - Normalized remote-call results
//! - **Validation Types** - Per-field error reporting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// =============================================================================
// Lead Types
// =============================================================================

/// One lead as entered in the form.
///
/// Built from form state at submit time; the `trimmed` copy is what gets
/// validated, persisted and logged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LeadInput {
    /// Full name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact email address
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    /// Industry the lead works in (one of [`crate::config::INDUSTRIES`])
    #[validate(length(min = 1, message = "Select your industry"))]
    pub industry: String,
}

impl LeadInput {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            industry: self.industry.trim().to_string(),
        }
    }
}

/// A lead that was accepted by the persistence layer.
///
/// Lives only in the in-memory session log; created on successful
/// persistence, never mutated, gone on page reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmittedLead {
    /// The captured fields
    #[serde(flatten)]
    pub lead: LeadInput,
    /// When the persistence call succeeded
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedLead {
    /// Stamp a lead with the current time.
    pub fn new(lead: LeadInput) -> Self {
        Self {
            lead,
            submitted_at: Utc::now(),
        }
    }
}

// =============================================================================
// Operation Types
// =============================================================================

/// Uniform result of one remote call.
///
/// Both service wrappers normalize every outcome into this shape.
/// `error` is only ever present when `success` is false; use the
/// constructors to keep that invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationResult {
    /// Whether the remote operation succeeded
    pub success: bool,
    /// Normalized error message, set only on failure
    pub error: Option<String>,
}

impl OperationResult {
    /// Successful call, no error attached.
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Failed call with a normalized message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

// =============================================================================
// Validation Types
// =============================================================================

/// The three form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Full name input
    Name,
    /// Email input
    Email,
    /// Industry select
    Industry,
}

impl Field {
    /// Struct-field name, matching the serialized lead.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Industry => "industry",
        }
    }

    /// Inverse of [`Field::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "industry" => Some(Field::Industry),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One validation failure, addressed to a single field.
///
/// Cleared individually as the user edits that field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    /// Which input the message belongs to
    pub field: Field,
    /// Human-readable message shown under the input
    pub message: String,
}
