//! UI Components for the Leadbloom application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`LeadForm`] - The capture form (name, email, industry)
//! - [`SubmittedPanel`] - Success state with resend / submit-another
//! - [`SessionPanel`] - Leads submitted during this session

mod footer;
mod hero;
mod lead_form;
mod session;
mod submitted;

pub use footer::*;
pub use hero::*;
pub use lead_form::*;
pub use session::*;
pub use submitted::*;
