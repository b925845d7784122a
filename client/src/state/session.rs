//! Persisted session record and the typed view route guards consume.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes a token and a user JSON document to storage; the
//! route guards read them back on every protected navigation; logout clears
//! both. The token is only ever checked for presence.
//!
//! ERROR HANDLING
//! ==============
//! Stored user data is untrusted. Any parse failure collapses to "no user",
//! which the guards treat as zero roles. Nothing here panics or returns an
//! error to the caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::StorageKeys;
use crate::util::storage::KeyValueStore;

/// Role name carried by a role assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
}

/// One role granted to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: Role,
}

/// The user object stored alongside the session token.
///
/// Only `roles` is read strictly; the display fields are picked out of the
/// document when they have a usable type and ignored otherwise, so an odd
/// `id` or `name` never costs the user their roles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub roles: Vec<RoleAssignment>,
}

impl SessionUser {
    /// Parse a stored user document. Malformed input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                log::warn!("ignoring malformed session user: {e}");
                None
            }
        }
    }

    /// Build from an already-decoded document. Anything but a JSON object,
    /// or a `roles` field of the wrong shape, yields `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let Some(fields) = value.as_object() else {
            log::warn!("ignoring session user: expected a JSON object");
            return None;
        };
        let roles = match fields.get("roles") {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => match Vec::<RoleAssignment>::deserialize(raw) {
                Ok(roles) => roles,
                Err(e) => {
                    log::warn!("ignoring session user with malformed roles: {e}");
                    return None;
                }
            },
        };
        Some(Self {
            id: fields.get("id").and_then(scalar_text),
            email: fields.get("email").and_then(Value::as_str).map(str::to_owned),
            name: fields.get("name").and_then(Value::as_str).map(str::to_owned),
            roles,
        })
    }

    #[must_use]
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|a| a.role.name.clone()).collect()
    }

    /// Name to greet the user with, falling back to their email.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

/// String or number as text; ids arrive as either.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// What the guards need to know about the current viewer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub has_token: bool,
    pub role_names: Vec<String>,
}

impl SessionSnapshot {
    /// Build a snapshot from the raw stored values.
    #[must_use]
    pub fn from_raw(token: Option<&str>, user: Option<&str>) -> Self {
        let role_names = user
            .and_then(SessionUser::parse)
            .map(|u| u.role_names())
            .unwrap_or_default();
        Self { has_token: token.is_some_and(|t| !t.is_empty()), role_names }
    }

    /// Read the current session from `store`.
    pub fn load(store: &impl KeyValueStore, keys: &StorageKeys) -> Self {
        let token = store.get(&keys.token);
        let user = store.get(&keys.user);
        Self::from_raw(token.as_deref(), user.as_deref())
    }
}

/// Stored token, treating an empty value as absent.
pub fn read_token(store: &impl KeyValueStore, keys: &StorageKeys) -> Option<String> {
    store.get(&keys.token).filter(|t| !t.is_empty())
}

/// Stored user, if present and well-formed.
pub fn read_user(store: &impl KeyValueStore, keys: &StorageKeys) -> Option<SessionUser> {
    store.get(&keys.user).as_deref().and_then(SessionUser::parse)
}

/// Write the session returned by a successful login.
///
/// The user document is stored as received so fields this client does not
/// model survive a round trip.
pub fn persist(store: &impl KeyValueStore, keys: &StorageKeys, token: &str, user: &serde_json::Value) {
    store.set(&keys.token, token);
    store.set(&keys.user, &user.to_string());
}

/// Remove the session (logout).
pub fn clear(store: &impl KeyValueStore, keys: &StorageKeys) {
    store.remove(&keys.token);
    store.remove(&keys.user);
}
