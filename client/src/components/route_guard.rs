//! Route guard components.
//!
//! UI-only gating: the guards keep unauthorized viewers off protected views,
//! but the API must still authorize every request.
//!
//! Each guard evaluates its policy once, on the client, when it mounts (that
//! is, once per navigation to the guarded route). Storage is read untracked,
//! so a session that changes while the view is mounted is not re-checked
//! until the next navigation. Until the check has run (server render,
//! hydration) the guard renders nothing, which keeps SSR and hydrated markup
//! identical.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::state::access::{AuthPolicy, GuardDecision, GuardPhase, RolePolicy};
use crate::state::session::SessionSnapshot;
use crate::util::storage::BrowserStorage;

/// Renders `children` only for viewers with a session token.
///
/// Without a token, replaces the current history entry with `redirect_to`
/// (default: the configured login path).
#[component]
pub fn RequireAuth(#[prop(optional, into)] redirect_to: Option<String>, children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let policy = AuthPolicy::new(redirect_to.unwrap_or_else(|| config.login_path.clone()));
    let keys = config.storage;

    let phase = evaluate_once(move || policy.evaluate(&SessionSnapshot::load(&BrowserStorage, &keys)));

    view! { <Show when=move || phase.get().renders_children()>{children()}</Show> }
}

/// Renders `children` only if the viewer holds one of `roles`.
///
/// Otherwise replaces the current history entry with the configured fallback
/// path. Token presence is not checked here; nest inside [`RequireAuth`] for
/// that.
#[component]
pub fn RequireRoles(#[prop(into)] roles: Vec<String>, children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let policy = RolePolicy::new(roles, config.fallback_path.clone());
    let keys = config.storage;

    let phase = evaluate_once(move || policy.evaluate(&SessionSnapshot::load(&BrowserStorage, &keys)));

    view! { <Show when=move || phase.get().renders_children()>{children()}</Show> }
}

/// Run `evaluate` once on mount; redirect on denial.
fn evaluate_once(evaluate: impl Fn() -> GuardDecision + Send + Sync + 'static) -> RwSignal<GuardPhase> {
    let phase = RwSignal::new(GuardPhase::Pending);
    let navigate = use_navigate();

    // Reads no signals, so this runs exactly once per mount.
    Effect::new(move || {
        let mut next = phase.get_untracked();
        let redirect = next.settle(evaluate());
        phase.set(next);
        if let Some(redirect) = redirect {
            log::info!("route guard denied access; redirecting to {redirect}");
            navigate(&redirect, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    phase
}
