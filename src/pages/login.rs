//! Login Page
//!
//! Sign-in / sign-up form. On success the session is stored and the task
//! page opens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::app::TASKS_ROUTE;
use crate::auth::{self, AuthMode};
use crate::context::use_app_context;
use crate::models::Credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (mode, set_mode) = signal(AuthMode::SignIn);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        set_error.set(None);

        let api = ctx.api();
        let sessions = ctx.sessions.clone();
        let navigate = navigate.clone();
        let mode = mode.get_untracked();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        spawn_local(async move {
            let result = auth::authenticate(&api, &sessions, mode, credentials).await;
            set_loading.set(false);
            match result {
                Ok(_) => navigate(TASKS_ROUTE, NavigateOptions::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <span class="auth-icon">"🔐"</span>
                    <h1>{move || mode.get().title()}</h1>
                    <p>{move || mode.get().subtitle()}</p>
                </div>

                <form class="auth-form" on:submit=submit>
                    <label>
                        "Email Address"
                        <input
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>

                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|message| view! {
                        <div class="auth-error">
                            <span>"⚠️"</span>
                            <span>{message}</span>
                        </div>
                    })}

                    <button type="submit" class="btn primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Processing..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <div class="auth-footer">
                    {move || mode.get().switch_prompt()}
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| set_mode.update(|m| *m = m.toggled())
                    >
                        {move || mode.get().switch_label()}
                    </button>
                </div>
            </div>

            <div class="guest-access">
                <p>"Or continue as guest:"</p>
                <a href=TASKS_ROUTE class="btn secondary">"Guest Access →"</a>
            </div>
        </div>
    }
}
