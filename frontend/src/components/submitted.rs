//! Success panel shown after a lead is recorded.
//!
//! Offers a manual resend of the confirmation email (the lead itself is
//! already stored, so a failed email never requires re-submitting) and
//! a way back to a fresh form.

use leptos::*;

use crate::flow::{run_resend, LeadFlow};
use crate::services::ConfirmationApi;

#[component]
pub fn SubmittedPanel(state: RwSignal<LeadFlow>) -> impl IntoView {
    let on_resend = move |_| {
        // None while a resend is in flight (single-flight guard).
        let lead = state.try_update(|flow| flow.begin_resend()).flatten();
        if let Some(lead) = lead {
            spawn_local(async move {
                let mailer = ConfirmationApi::new();
                let result = run_resend(lead, &mailer).await;
                state.update(|flow| flow.finish_resend(result));
            });
        }
    };

    view! {
        <div class="success-panel">
            <div class="success-icon">"🎉"</div>
            <h2>"You're on the list!"</h2>
            <p class="success-text">
                {move || state.with(|flow| match flow.last_submitted() {
                    Some(entry) => format!(
                        "Thanks {}! A confirmation email is on its way to {}.",
                        entry.lead.name, entry.lead.email
                    ),
                    None => "Thanks! Your details were recorded.".to_string(),
                })}
            </p>

            <Show
                when=move || state.with(|flow| flow.email_error.is_some())
                fallback=|| view! { }
            >
                <div class="warning-message">
                    <div>
                        {move || state.with(|flow| flow.email_error.clone().unwrap_or_default())}
                    </div>
                    <div class="warning-hint">
                        "Your details were saved. You can retry the email below."
                    </div>
                </div>
            </Show>

            <div class="success-actions">
                <button
                    class="resend-button"
                    on:click=on_resend
                    disabled=move || state.with(|flow| flow.resending)
                >
                    {move || if state.with(|flow| flow.resending) {
                        "⏳ Resending..."
                    } else {
                        "Didn't get it? Resend email"
                    }}
                </button>
                <button
                    class="again-button"
                    on:click=move |_| state.update(|flow| flow.submit_another())
                    disabled=move || state.with(|flow| flow.resending)
                >
                    "Submit another lead"
                </button>
            </div>
        </div>
    }
}
