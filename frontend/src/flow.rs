//! Submit flow controller.
//!
//! Owns everything between "user pressed Submit" and "the UI shows the
//! outcome": validation, the persistence call, the confirmation email
//! call, the session log and the two error channels.
//!
//! # State machine
//!
//! ```text
//! Idle --begin_submit (valid)--> Submitting --persistence ok--> Submitted
//!   ^                                |
//!   |                                | persistence failed
//!   +--- critical error set ---------+
//!
//! Submitted --submit_another--> Idle
//! Submitted --begin_resend/finish_resend--> Submitted (resending flag only)
//! ```
//!
//! Persistence failure is fatal to the attempt: no lead is recorded and
//! the email step never runs. Notification failure is non-critical: the
//! lead is recorded and the user may retry the email by hand. There is
//! no automatic retry, timeout or cancellation anywhere in this flow.
//!
//! [`LeadFlow`] itself is plain state with synchronous transitions, so
//! the whole flow is testable on the host. The remote calls sit behind
//! [`LeadStore`] and [`ConfirmationMailer`]; components drive them with
//! [`run_submit`] / [`run_resend`] inside `spawn_local`.

use crate::config::DEFAULT_ERROR_MESSAGE;
use crate::types::{Field, FieldError, LeadInput, OperationResult, SubmittedLead};
use crate::validation::validate_lead;

// =============================================================================
// Remote-call seams
// =============================================================================

/// Persists one lead into the remote table.
#[allow(async_fn_in_trait)]
pub trait LeadStore {
    /// Insert a single row; never retries.
    async fn insert_lead(&self, lead: &LeadInput) -> OperationResult;
}

/// Triggers the confirmation email for one lead.
#[allow(async_fn_in_trait)]
pub trait ConfirmationMailer {
    /// Invoke the remote function once; never retries.
    async fn send_confirmation(&self, lead: &LeadInput) -> OperationResult;
}

// =============================================================================
// Flow state
// =============================================================================

/// Where the submit flow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    /// Form shown, accepting edits
    #[default]
    Idle,
    /// Persistence/notification calls in flight
    Submitting,
    /// Success panel shown
    Submitted,
}

/// Outcome of one full submit attempt, applied via [`LeadFlow::finish_submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Persistence failed: nothing was recorded and no email was sent.
    Rejected {
        /// Critical error to show above the form
        error: String,
    },
    /// The lead is stored; `email_error` is set when notification failed.
    Accepted {
        /// The recorded lead, stamped at acceptance
        lead: SubmittedLead,
        /// Non-critical error from the email step
        email_error: Option<String>,
    },
}

/// State behind the form, the success panel and the session list.
///
/// One instance lives in an `RwSignal` at the root of the component
/// tree. All transitions are synchronous; the async remote work happens
/// between `begin_*` and `finish_*`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFlow {
    /// Current form contents
    pub input: LeadInput,
    /// Main flow phase
    pub phase: FlowPhase,
    /// A manual resend is in flight (only meaningful while Submitted)
    pub resending: bool,
    /// Per-field validation messages
    pub field_errors: Vec<FieldError>,
    /// Critical channel: the lead was not recorded
    pub lead_error: Option<String>,
    /// Non-critical channel: the lead was recorded but the email failed
    pub email_error: Option<String>,
    /// Leads accepted during this page session, oldest first
    pub session_log: Vec<SubmittedLead>,
}

impl LeadFlow {
    /// Fresh flow in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submit attempt is in flight.
    pub fn is_submitting(&self) -> bool {
        self.phase == FlowPhase::Submitting
    }

    /// Whether the success panel is showing.
    pub fn is_submitted(&self) -> bool {
        self.phase == FlowPhase::Submitted
    }

    /// Update one form field, clearing only that field's error.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.input.name = value,
            Field::Email => self.input.email = value,
            Field::Industry => self.input.industry = value,
        }
        self.field_errors.retain(|e| e.field != field);
    }

    /// Message for one field, if it failed validation.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Validate and enter the submitting phase.
    ///
    /// Returns the canonical (trimmed) lead to hand to [`run_submit`],
    /// or `None` when the input is invalid or a submit is already in
    /// flight. No remote work happens on the `None` path.
    pub fn begin_submit(&mut self) -> Option<LeadInput> {
        if self.phase != FlowPhase::Idle {
            return None;
        }
        let lead = self.input.trimmed();
        let errors = validate_lead(&lead);
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }
        self.field_errors.clear();
        self.lead_error = None;
        self.phase = FlowPhase::Submitting;
        Some(lead)
    }

    /// Apply the outcome of [`run_submit`].
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rejected { error } => {
                self.phase = FlowPhase::Idle;
                self.lead_error = Some(error);
            }
            SubmitOutcome::Accepted { lead, email_error } => {
                self.session_log.push(lead);
                self.input = LeadInput::default();
                self.lead_error = None;
                self.email_error = email_error;
                self.phase = FlowPhase::Submitted;
            }
        }
    }

    /// Start a manual resend for the most recently submitted lead.
    ///
    /// Single-flight: returns `None` unless the flow is Submitted, no
    /// resend is already running, and a lead exists to resend.
    pub fn begin_resend(&mut self) -> Option<LeadInput> {
        if self.phase != FlowPhase::Submitted || self.resending {
            return None;
        }
        let lead = self.session_log.last()?.lead.clone();
        self.resending = true;
        Some(lead)
    }

    /// Apply the outcome of [`run_resend`].
    pub fn finish_resend(&mut self, result: OperationResult) {
        self.resending = false;
        if result.success {
            self.email_error = None;
        } else {
            self.email_error = Some(message_or_default(result.error));
        }
    }

    /// Leave the success panel and show a fresh form.
    ///
    /// Ignored while a resend is in flight so its completion cannot
    /// write into the new form's error channel. The session log stays.
    pub fn submit_another(&mut self) {
        if self.phase != FlowPhase::Submitted || self.resending {
            return;
        }
        self.phase = FlowPhase::Idle;
        self.field_errors.clear();
        self.lead_error = None;
        self.email_error = None;
    }

    /// The lead the success panel describes.
    pub fn last_submitted(&self) -> Option<&SubmittedLead> {
        self.session_log.last()
    }
}

// =============================================================================
// Async drivers
// =============================================================================

/// Run one submit attempt: persist, then notify.
///
/// The mailer is never touched when the store fails; the lead exists
/// in the returned outcome only once persistence succeeded.
pub async fn run_submit(
    lead: LeadInput,
    store: &impl LeadStore,
    mailer: &impl ConfirmationMailer,
) -> SubmitOutcome {
    let stored = store.insert_lead(&lead).await;
    if !stored.success {
        return SubmitOutcome::Rejected {
            error: message_or_default(stored.error),
        };
    }
    // The lead is recorded from this point, whatever the email step does.
    let recorded = SubmittedLead::new(lead);

    let notified = mailer.send_confirmation(&recorded.lead).await;
    let email_error = if notified.success {
        None
    } else {
        Some(message_or_default(notified.error))
    };

    SubmitOutcome::Accepted {
        lead: recorded,
        email_error,
    }
}

/// Re-invoke the confirmation email for an already-recorded lead.
pub async fn run_resend(lead: LeadInput, mailer: &impl ConfirmationMailer) -> OperationResult {
    mailer.send_confirmation(&lead).await
}

/// Error text of a failed result, or the fixed fallback.
fn message_or_default(error: Option<String>) -> String {
    error.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeStore {
        result: OperationResult,
        calls: Cell<usize>,
    }

    impl FakeStore {
        fn succeeding() -> Self {
            Self {
                result: OperationResult::ok(),
                calls: Cell::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: OperationResult::failed(message),
                calls: Cell::new(0),
            }
        }
    }

    impl LeadStore for FakeStore {
        async fn insert_lead(&self, _lead: &LeadInput) -> OperationResult {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    struct FakeMailer {
        result: OperationResult,
        calls: Cell<usize>,
        last_lead: RefCell<Option<LeadInput>>,
    }

    impl FakeMailer {
        fn succeeding() -> Self {
            Self {
                result: OperationResult::ok(),
                calls: Cell::new(0),
                last_lead: RefCell::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: OperationResult::failed(message),
                calls: Cell::new(0),
                last_lead: RefCell::new(None),
            }
        }

        fn failing_without_message() -> Self {
            Self {
                result: OperationResult {
                    success: false,
                    error: None,
                },
                calls: Cell::new(0),
                last_lead: RefCell::new(None),
            }
        }
    }

    impl ConfirmationMailer for FakeMailer {
        async fn send_confirmation(&self, lead: &LeadInput) -> OperationResult {
            self.calls.set(self.calls.get() + 1);
            *self.last_lead.borrow_mut() = Some(lead.clone());
            self.result.clone()
        }
    }

    fn ana() -> LeadInput {
        LeadInput {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            industry: "finance".to_string(),
        }
    }

    fn submit(flow: &mut LeadFlow, store: &FakeStore, mailer: &FakeMailer) {
        let lead = flow.begin_submit().unwrap();
        let outcome = block_on(run_submit(lead, store, mailer));
        flow.finish_submit(outcome);
    }

    #[test]
    fn test_successful_submit_records_lead_without_errors() {
        let mut flow = LeadFlow::new();
        flow.input = ana();
        let store = FakeStore::succeeding();
        let mailer = FakeMailer::succeeding();

        submit(&mut flow, &store, &mailer);

        assert_eq!(flow.phase, FlowPhase::Submitted);
        assert_eq!(flow.session_log.len(), 1);
        assert_eq!(flow.session_log[0].lead, ana());
        assert!(flow.lead_error.is_none());
        assert!(flow.email_error.is_none());
        assert_eq!(flow.input, LeadInput::default());
        assert_eq!(store.calls.get(), 1);
        assert_eq!(mailer.calls.get(), 1);
    }

    #[test]
    fn test_persistence_failure_halts_before_email() {
        let mut flow = LeadFlow::new();
        flow.input = ana();
        let store = FakeStore::failing("database unavailable");
        let mailer = FakeMailer::succeeding();

        submit(&mut flow, &store, &mailer);

        assert_eq!(flow.phase, FlowPhase::Idle);
        assert!(flow.session_log.is_empty());
        assert_eq!(flow.lead_error.as_deref(), Some("database unavailable"));
        assert_eq!(mailer.calls.get(), 0);
    }

    #[test]
    fn test_email_failure_still_records_lead() {
        let mut flow = LeadFlow::new();
        flow.input = ana();
        let store = FakeStore::succeeding();
        let mailer = FakeMailer::failing("rate limited");

        submit(&mut flow, &store, &mailer);

        assert_eq!(flow.phase, FlowPhase::Submitted);
        assert_eq!(flow.session_log.len(), 1);
        assert_eq!(flow.session_log[0].lead, ana());
        assert!(flow.lead_error.is_none());
        assert_eq!(flow.email_error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_invalid_input_sets_field_errors_and_stays_idle() {
        let mut flow = LeadFlow::new();
        assert!(flow.begin_submit().is_none());
        assert_eq!(flow.phase, FlowPhase::Idle);
        assert_eq!(flow.field_errors.len(), 3);
    }

    #[test]
    fn test_begin_submit_returns_trimmed_lead() {
        let mut flow = LeadFlow::new();
        flow.input = LeadInput {
            name: "  Ana ".to_string(),
            email: " ana@x.com ".to_string(),
            industry: "finance".to_string(),
        };
        let lead = flow.begin_submit().unwrap();
        assert_eq!(lead, ana());
    }

    #[test]
    fn test_begin_submit_is_single_flight() {
        let mut flow = LeadFlow::new();
        flow.input = ana();
        assert!(flow.begin_submit().is_some());
        assert_eq!(flow.phase, FlowPhase::Submitting);
        assert!(flow.begin_submit().is_none());
    }

    #[test]
    fn test_begin_submit_clears_previous_critical_error() {
        let mut flow = LeadFlow::new();
        flow.input = ana();
        flow.lead_error = Some("database unavailable".to_string());
        assert!(flow.begin_submit().is_some());
        assert!(flow.lead_error.is_none());
    }

    #[test]
    fn test_set_field_clears_only_that_fields_error() {
        let mut flow = LeadFlow::new();
        assert!(flow.begin_submit().is_none());
        assert!(flow.field_error(Field::Name).is_some());
        assert!(flow.field_error(Field::Email).is_some());

        flow.set_field(Field::Name, "Ana".to_string());

        assert_eq!(flow.input.name, "Ana");
        assert!(flow.field_error(Field::Name).is_none());
        assert!(flow.field_error(Field::Email).is_some());
        assert!(flow.field_error(Field::Industry).is_some());
    }

    #[test]
    fn test_resend_targets_most_recent_lead() {
        let mut flow = LeadFlow::new();
        let store = FakeStore::succeeding();
        let mailer = FakeMailer::succeeding();

        flow.input = ana();
        submit(&mut flow, &store, &mailer);
        flow.submit_another();
        flow.input = LeadInput {
            name: "Ben".to_string(),
            email: "ben@x.com".to_string(),
            industry: "retail".to_string(),
        };
        submit(&mut flow, &store, &mailer);

        let lead = flow.begin_resend().unwrap();
        assert_eq!(lead.name, "Ben");
        assert!(flow.resending);
        assert_eq!(flow.session_log.len(), 2);
    }

    #[test]
    fn test_resend_is_single_flight() {
        let mut flow = LeadFlow::new();
        let store = FakeStore::succeeding();
        let mailer = FakeMailer::succeeding();
        flow.input = ana();
        submit(&mut flow, &store, &mailer);

        assert!(flow.begin_resend().is_some());
        assert!(flow.begin_resend().is_none());
    }

    #[test]
    fn test_resend_requires_a_submitted_lead() {
        let mut flow = LeadFlow::new();
        assert!(flow.begin_resend().is_none());
        assert!(!flow.resending);
    }

    #[test]
    fn test_finish_resend_updates_email_channel() {
        let mut flow = LeadFlow::new();
        let store = FakeStore::succeeding();
        flow.input = ana();
        submit(&mut flow, &store, &FakeMailer::failing("rate limited"));
        assert_eq!(flow.email_error.as_deref(), Some("rate limited"));

        let lead = flow.begin_resend().unwrap();
        let retry = FakeMailer::failing("still rate limited");
        let result = block_on(run_resend(lead, &retry));
        flow.finish_resend(result);
        assert!(!flow.resending);
        assert_eq!(flow.email_error.as_deref(), Some("still rate limited"));
        assert_eq!(retry.last_lead.borrow().as_ref().unwrap().name, "Ana");

        let lead = flow.begin_resend().unwrap();
        let result = block_on(run_resend(lead, &FakeMailer::succeeding()));
        flow.finish_resend(result);
        assert!(flow.email_error.is_none());
        assert_eq!(flow.session_log.len(), 1);
    }

    #[test]
    fn test_failure_without_message_falls_back() {
        let mut flow = LeadFlow::new();
        flow.input = ana();
        let store = FakeStore::succeeding();
        submit(&mut flow, &store, &FakeMailer::failing_without_message());
        assert_eq!(flow.email_error.as_deref(), Some(DEFAULT_ERROR_MESSAGE));
    }

    #[test]
    fn test_submit_another_resets_form_but_keeps_log() {
        let mut flow = LeadFlow::new();
        let store = FakeStore::succeeding();
        flow.input = ana();
        submit(&mut flow, &store, &FakeMailer::failing("rate limited"));

        flow.submit_another();

        assert_eq!(flow.phase, FlowPhase::Idle);
        assert!(flow.lead_error.is_none());
        assert!(flow.email_error.is_none());
        assert!(flow.field_errors.is_empty());
        assert_eq!(flow.session_log.len(), 1);
    }

    #[test]
    fn test_submit_another_ignored_while_resending() {
        let mut flow = LeadFlow::new();
        let store = FakeStore::succeeding();
        flow.input = ana();
        submit(&mut flow, &store, &FakeMailer::succeeding());

        assert!(flow.begin_resend().is_some());
        flow.submit_another();
        assert_eq!(flow.phase, FlowPhase::Submitted);
        assert!(flow.resending);
    }
}
