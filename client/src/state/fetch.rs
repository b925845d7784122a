//! Loading/error/data triple for a single REST call.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::error_channel::classify;
use crate::net::failure::NetworkFailure;

/// State for one fetch-on-mount call.
///
/// `error` holds the same user-facing text the notification banner shows,
/// so pages can render an inline placeholder without re-classifying.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> FetchState<T> {
    /// Mark a request in flight. Previously loaded data is kept.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<T, NetworkFailure>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(failure) => self.error = Some(classify(&failure).message),
        }
    }
}

/// What a list section should render for its fetch state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

impl<T> FetchState<Vec<T>> {
    /// Loaded data wins over a later error, so a failed refresh keeps the
    /// last good list on screen. Before the first response this is
    /// `Loading`, including during server render.
    #[must_use]
    pub fn list_status(&self) -> ListStatus {
        match (&self.data, &self.error) {
            (Some(items), _) if items.is_empty() => ListStatus::Empty,
            (Some(_), _) => ListStatus::Ready,
            (None, Some(message)) => ListStatus::Failed(message.clone()),
            (None, None) => ListStatus::Loading,
        }
    }
}
