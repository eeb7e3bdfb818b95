//! Leadbloom - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for capturing marketing leads and triggering
//! a personalized confirmation email for each one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── LeadForm or SubmittedPanel (one LeadFlow signal)       │
//! │  └── SessionPanel (leads captured this session)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (LeadInput, SubmittedLead, etc.)
//! - [`validation`] - Field validation over the form input
//! - [`flow`] - Submit flow controller (state machine + async drivers)
//! - [`components`] - UI components (LeadForm, SubmittedPanel, etc.)
//! - [`services`] - Remote communication (lead insert, confirmation email)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod flow;
pub mod services;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Field, FieldError, LeadInput, OperationResult, SubmittedLead};

// Flow
pub use flow::{FlowPhase, LeadFlow, SubmitOutcome};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🌱 Leadbloom - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // All flow state lives in one signal shared by every component.
    let state = create_rw_signal(LeadFlow::new());

    view! {
        <div class="container">
            <Hero/>

            // Form while idle/submitting, success panel once submitted
            <Show
                when=move || state.with(|flow| flow.is_submitted())
                fallback=move || view! { <LeadForm state=state/> }
            >
                <SubmittedPanel state=state/>
            </Show>

            <SessionPanel state=state/>
        </div>

        <Footer/>
    }
}
