//! REST DTOs for the finance API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::RoleAssignment;

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login: the session token plus the user document to persist.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: serde_json::Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
    Investment,
    #[serde(other)]
    Other,
}

impl AccountKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::Credit => "Credit",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }
}

/// A linked account with its current balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub kind: AccountKind,
    /// Signed balance in minor units (cents). Credit balances owed are negative.
    pub balance_cents: i64,
    /// ISO 4217 code.
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    /// Posting date, `YYYY-MM-DD`.
    pub posted_on: String,
    pub description: String,
    /// Signed amount in minor units; debits are negative.
    pub amount_cents: i64,
    pub currency: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Row in the admin user list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

impl UserSummary {
    #[must_use]
    pub fn role_list(&self) -> String {
        self.roles.iter().map(|a| a.role.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}
