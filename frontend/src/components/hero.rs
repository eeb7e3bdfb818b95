//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Industry briefings worth opening"</h1>
            <p class="subtitle">
                "Tell us where you work and Leadbloom tailors every issue to your market. "
                "One email a week, no filler."
            </p>
        </div>
    }
}
