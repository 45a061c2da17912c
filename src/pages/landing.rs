//! Landing Page
//!
//! Static marketing view linking to the login and task pages.

use leptos::prelude::*;

use crate::app::{LOGIN_ROUTE, TASKS_ROUTE};

/// Feature cards (title, blurb)
const FEATURES: &[(&str, &str)] = &[
    ("Lightning Fast", "Instant updates across all devices"),
    ("Track Progress", "Monitor your productivity with progress indicators"),
    ("Stay Focused", "Distraction-free interface to keep you on track"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <div class="landing-icon">"📝"</div>
            <h1 class="landing-title">"Task Master"</h1>
            <p class="landing-tagline">"Organize your day. Master your tasks. Achieve your goals."</p>
            <p class="landing-subtitle">"A fast task management app designed for productivity."</p>

            <div class="landing-actions">
                <a href=TASKS_ROUTE class="btn primary">"🚀 Launch App"</a>
                <a href=LOGIN_ROUTE class="btn secondary">"🔐 Sign In"</a>
            </div>

            <div class="feature-grid">
                {FEATURES.iter().map(|(title, blurb)| view! {
                    <div class="feature-card">
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                }).collect_view()}
            </div>

            <p class="landing-footer">"Built with Rust • Leptos • WebAssembly"</p>
        </div>
    }
}
