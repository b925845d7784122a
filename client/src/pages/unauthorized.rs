//! Fallback view for role-guard denials.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Not authorized"</h1>
            <p>"Your account does not have access to that page."</p>
            <a href="/" class="btn btn--primary">
                "Back to overview"
            </a>
        </div>
    }
}
