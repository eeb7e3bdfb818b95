//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2026 Leadbloom • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://leadbloom.app/privacy" class="footer-link" target="_blank">
                    "Privacy"
                </a>
                <a href="https://leadbloom.app/archive" class="footer-link" target="_blank">
                    "Past issues"
                </a>
                <a href="https://github.com/leadbloom" class="footer-link" target="_blank">
                    "GitHub"
                </a>
            </div>
        </footer>
    }
}
