//! REST API helpers for the finance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a client fault, since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every browser-side failure is mapped to a [`NetworkFailure`], published
//! through the global error channel, and then still returned to the caller.
//! The channel is a side channel for the banner; callers keep their normal
//! `Result` flow. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::failure::NetworkFailure;
use super::types::{Account, Credentials, LoginResponse, Transaction, UserSummary};
use crate::config::AppConfig;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const ACCOUNTS_PATH: &str = "/api/accounts";
#[cfg(any(test, feature = "hydrate"))]
const ADMIN_USERS_PATH: &str = "/api/admin/users";

#[cfg(any(test, feature = "hydrate"))]
fn transactions_path(limit: u32) -> String {
    format!("/api/transactions?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> NetworkFailure {
    NetworkFailure::client_fault("not available on server")
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder, config: &AppConfig) -> gloo_net::http::RequestBuilder {
    use crate::state::session::read_token;
    use crate::util::storage::BrowserStorage;

    match read_token(&BrowserStorage, &config.storage) {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

/// Send a built request and decode a JSON success body.
#[cfg(feature = "hydrate")]
async fn dispatch<T: serde::de::DeserializeOwned>(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, NetworkFailure> {
    let result = async {
        let request = request.map_err(|e| NetworkFailure::client_fault(e.to_string()))?;
        let resp = request.send().await.map_err(NetworkFailure::from_send_error)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NetworkFailure::server_error(resp.status(), &body));
        }
        resp.json::<T>()
            .await
            .map_err(|e| NetworkFailure::client_fault(format!("response decode failed: {e}")))
    }
    .await;
    result.map_err(report)
}

#[cfg(feature = "hydrate")]
fn report(failure: NetworkFailure) -> NetworkFailure {
    log::warn!("api request failed: {failure}");
    super::error_channel::global().classify_and_publish(&failure);
    failure
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(config: &AppConfig, path: &str) -> Result<T, NetworkFailure> {
    let url = config.endpoint(path);
    dispatch(authorized(gloo_net::http::Request::get(&url), config).build()).await
}

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the [`NetworkFailure`] after publishing it to the error channel.
pub async fn login(config: &AppConfig, credentials: &Credentials) -> Result<LoginResponse, NetworkFailure> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(LOGIN_PATH);
        dispatch(gloo_net::http::Request::post(&url).json(credentials)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(unavailable())
    }
}

/// Fetch the viewer's accounts from `GET /api/accounts`.
///
/// # Errors
///
/// Returns the [`NetworkFailure`] after publishing it to the error channel.
pub async fn fetch_accounts(config: &AppConfig) -> Result<Vec<Account>, NetworkFailure> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, ACCOUNTS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(unavailable())
    }
}

/// Fetch the most recent `limit` transactions across all accounts.
///
/// # Errors
///
/// Returns the [`NetworkFailure`] after publishing it to the error channel.
pub async fn fetch_transactions(config: &AppConfig, limit: u32) -> Result<Vec<Transaction>, NetworkFailure> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, &transactions_path(limit)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, limit);
        Err(unavailable())
    }
}

/// Fetch all users with their roles (admin only).
///
/// # Errors
///
/// Returns the [`NetworkFailure`] after publishing it to the error channel.
pub async fn fetch_users(config: &AppConfig) -> Result<Vec<UserSummary>, NetworkFailure> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, ADMIN_USERS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(unavailable())
    }
}
