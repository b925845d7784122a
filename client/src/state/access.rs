//! Route access policies.
//!
//! Two independent checks: [`AuthPolicy`] gates on token presence and
//! [`RolePolicy`] gates on role membership. Both are pure functions of a
//! [`SessionSnapshot`]; the `route_guard` components decide when to run them.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use std::collections::BTreeSet;

use crate::config::{DEFAULT_FALLBACK_PATH, DEFAULT_LOGIN_PATH};
use crate::state::session::SessionSnapshot;

/// Outcome of evaluating a policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Granted,
    Denied { redirect: String },
}

impl GuardDecision {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Granted => None,
            Self::Denied { redirect } => Some(redirect),
        }
    }
}

/// Lifecycle of a mounted guard.
///
/// Starts `Pending` (nothing rendered, including during server render) and
/// settles exactly once. Only `Granted` renders the guarded subtree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Pending,
    Granted,
    Denied,
}

impl GuardPhase {
    #[must_use]
    pub fn renders_children(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Settle a pending guard with `decision`.
    ///
    /// Returns the redirect to issue on the first denial; an already settled
    /// guard ignores further decisions and returns `None`.
    pub fn settle(&mut self, decision: GuardDecision) -> Option<String> {
        if *self != Self::Pending {
            return None;
        }
        match decision {
            GuardDecision::Granted => {
                *self = Self::Granted;
                None
            }
            GuardDecision::Denied { redirect } => {
                *self = Self::Denied;
                Some(redirect)
            }
        }
    }
}

/// Requires a session token; otherwise redirects to `redirect_to`.
///
/// The originally requested path is not remembered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthPolicy {
    redirect_to: String,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH)
    }
}

impl AuthPolicy {
    pub fn new(redirect_to: impl Into<String>) -> Self {
        Self { redirect_to: redirect_to.into() }
    }

    #[must_use]
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    #[must_use]
    pub fn evaluate(&self, session: &SessionSnapshot) -> GuardDecision {
        if session.has_token {
            GuardDecision::Granted
        } else {
            GuardDecision::Denied { redirect: self.redirect_to.clone() }
        }
    }
}

/// Requires at least one of the permitted role names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RolePolicy {
    permitted: BTreeSet<String>,
    fallback: String,
}

impl RolePolicy {
    pub fn new<I, S>(permitted: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { permitted: permitted.into_iter().map(Into::into).collect(), fallback: fallback.into() }
    }

    /// Policy redirecting denials to the default fallback path.
    pub fn permitting<I, S>(permitted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(permitted, DEFAULT_FALLBACK_PATH)
    }

    #[must_use]
    pub fn permitted(&self) -> &BTreeSet<String> {
        &self.permitted
    }

    /// Granted iff the session's roles intersect the permitted set. An empty
    /// permitted set or a session with no roles always denies.
    #[must_use]
    pub fn evaluate(&self, session: &SessionSnapshot) -> GuardDecision {
        if session.role_names.iter().any(|name| self.permitted.contains(name)) {
            GuardDecision::Granted
        } else {
            GuardDecision::Denied { redirect: self.fallback.clone() }
        }
    }
}
