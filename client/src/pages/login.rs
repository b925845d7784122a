//! Login page: email + password sign-in.
//!
//! A successful login persists the session (token + user document) and
//! navigates to the dashboard. Failures are reported by the notification
//! banner; the form only shows local validation messages.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::net::types::Credentials;
use crate::state::session;
use crate::util::storage::BrowserStorage;

const MISSING_FIELDS: &str = "Enter your email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(INVALID_EMAIL),
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&config, &credentials).await {
                Ok(resp) => {
                    session::persist(&BrowserStorage, &config.storage, &resp.token, &resp.user);
                    navigate("/", NavigateOptions::default());
                }
                Err(_) => busy.set(false),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Finboard"</h1>
                <p class="login-card__subtitle">"Sign in to your dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
