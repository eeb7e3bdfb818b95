//! Session log panel.
//!
//! Lists the leads accepted during this page session, newest last.
//! Purely informational; the log lives in memory only and is gone on
//! reload.

use leptos::*;

use crate::flow::LeadFlow;

#[component]
pub fn SessionPanel(state: RwSignal<LeadFlow>) -> impl IntoView {
    view! {
        <Show
            when=move || state.with(|flow| !flow.session_log.is_empty())
            fallback=|| view! { }
        >
            <div class="session-panel">
                <div class="session-header">
                    <span class="session-title">"📋 Submitted this session"</span>
                    <span class="session-count">
                        {move || state.with(|flow| flow.session_log.len())}
                    </span>
                </div>
                <div class="session-content">
                    <For
                        each=move || {
                            state.with(|flow| flow.session_log.clone()).into_iter().enumerate()
                        }
                        key=|(i, _)| *i
                        children=move |(_, entry)| {
                            let time = entry
                                .submitted_at
                                .with_timezone(&chrono::Local)
                                .format("%H:%M:%S")
                                .to_string();
                            view! {
                                <div class="session-entry">
                                    <span class="session-time">"[" {time} "] "</span>
                                    <span class="session-name">{entry.lead.name.clone()}</span>
                                    <span class="session-email">{entry.lead.email.clone()}</span>
                                    <span class="session-industry">{entry.lead.industry.clone()}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
