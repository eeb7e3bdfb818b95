//! Lead capture form.
//!
//! Renders the three inputs, surfaces validation and critical errors,
//! and drives the submit flow. All state lives in the shared
//! [`LeadFlow`] signal; this component only wires events to it.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::config::INDUSTRIES;
use crate::flow::{run_submit, LeadFlow};
use crate::services::{ConfirmationApi, LeadsTable};
use crate::types::Field;

#[component]
pub fn LeadForm(state: RwSignal<LeadFlow>) -> impl IntoView {
    // One message per field, re-read on every state change.
    let field_error = move |field: Field| {
        state.with(|flow| flow.field_error(field).map(str::to_string))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // None when invalid or already submitting; no remote call then.
        let lead = state.try_update(|flow| flow.begin_submit()).flatten();
        if let Some(lead) = lead {
            spawn_local(async move {
                let store = LeadsTable::new();
                let mailer = ConfirmationApi::new();
                let outcome = run_submit(lead, &store, &mailer).await;
                state.update(|flow| flow.finish_submit(outcome));
            });
        }
    };

    view! {
        <form class="lead-form" on:submit=on_submit>
            <Show
                when=move || state.with(|flow| flow.lead_error.is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || state.with(|flow| flow.lead_error.clone().unwrap_or_default())}
                </div>
            </Show>

            <div class="form-field">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Ana Martins"
                    prop:value=move || state.with(|flow| flow.input.name.clone())
                    on:input=move |ev| {
                        state.update(|flow| flow.set_field(Field::Name, event_target_value(&ev)))
                    }
                    disabled=move || state.with(|flow| flow.is_submitting())
                />
                <Show
                    when=move || field_error(Field::Name).is_some()
                    fallback=|| view! { }
                >
                    <div class="field-error">
                        {move || field_error(Field::Name).unwrap_or_default()}
                    </div>
                </Show>
            </div>

            <div class="form-field">
                <label for="email">"Work email"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="ana@company.com"
                    prop:value=move || state.with(|flow| flow.input.email.clone())
                    on:input=move |ev| {
                        state.update(|flow| flow.set_field(Field::Email, event_target_value(&ev)))
                    }
                    disabled=move || state.with(|flow| flow.is_submitting())
                />
                <Show
                    when=move || field_error(Field::Email).is_some()
                    fallback=|| view! { }
                >
                    <div class="field-error">
                        {move || field_error(Field::Email).unwrap_or_default()}
                    </div>
                </Show>
            </div>

            <div class="form-field">
                <label for="industry">"Industry"</label>
                <select
                    id="industry"
                    prop:value=move || state.with(|flow| flow.input.industry.clone())
                    on:change=move |ev| {
                        state.update(|flow| flow.set_field(Field::Industry, event_target_value(&ev)))
                    }
                    disabled=move || state.with(|flow| flow.is_submitting())
                >
                    <option value="">"Select your industry"</option>
                    {INDUSTRIES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <Show
                    when=move || field_error(Field::Industry).is_some()
                    fallback=|| view! { }
                >
                    <div class="field-error">
                        {move || field_error(Field::Industry).unwrap_or_default()}
                    </div>
                </Show>
            </div>

            <button
                type="submit"
                class="submit-button"
                disabled=move || state.with(|flow| flow.is_submitting())
            >
                {move || if state.with(|flow| flow.is_submitting()) {
                    "⏳ Submitting..."
                } else {
                    "Get my briefings"
                }}
            </button>
        </form>
    }
}
