//! Process-wide error reporting channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Network call sites publish user-facing errors here without threading a
//! callback through the component tree. The notification banner is the one
//! subscriber: it registers when mounted and unregisters on cleanup.
//!
//! DESIGN
//! ======
//! The channel holds a single handler slot. Registering replaces whatever is
//! there (last registration wins). Unregistering only clears the slot if the
//! caller's registration is still the active one, so a stale banner being
//! torn down after a newer one mounted cannot silence the newer one.
//! Publishing with an empty slot is a no-op; callers must not rely on
//! delivery.
//!
//! The slot is behind a `Mutex` because the global must be `Sync`. All use is
//! on the browser's single thread, so the lock is never contended. The handler
//! is cloned out before it is invoked, so a handler may itself publish or
//! re-register.

#[cfg(test)]
#[path = "error_channel_test.rs"]
mod error_channel_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use crate::net::failure::NetworkFailure;
use crate::state::notice::{Notice, Severity};

/// Shown when nothing more specific is known.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when a request was sent but no response arrived.
pub const NO_RESPONSE_MESSAGE: &str = "No response from the server. Check your connection and try again.";

pub type Handler = Arc<dyn Fn(Notice) + Send + Sync>;

/// Token identifying one registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct Registration {
    id: HandlerId,
    handler: Handler,
}

#[derive(Default)]
pub struct ErrorChannel {
    slot: Mutex<Option<Registration>>,
    next_id: AtomicU64,
}

static GLOBAL: LazyLock<ErrorChannel> = LazyLock::new(ErrorChannel::new);

/// The channel shared by the whole client.
pub fn global() -> &'static ErrorChannel {
    &GLOBAL
}

impl ErrorChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handler`, replacing any existing registration.
    pub fn register(&self, handler: impl Fn(Notice) + Send + Sync + 'static) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let previous = self.slot().replace(Registration { id, handler: Arc::new(handler) });
        if let Some(previous) = previous {
            log::debug!("error channel handler {:?} replaced by {:?}", previous.id, id);
        }
        id
    }

    /// Remove the registration `id` if it is still active.
    ///
    /// Returns `true` if the slot was cleared.
    pub fn unregister(&self, id: HandlerId) -> bool {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|r| r.id == id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.slot().is_some()
    }

    /// Deliver a notification to the registered handler.
    ///
    /// Returns `false` (and does nothing else) when no handler is registered.
    pub fn publish(&self, message: impl Into<String>, severity: Severity) -> bool {
        let handler = self.slot().as_ref().map(|r| Arc::clone(&r.handler));
        let notice = Notice::new(message, severity);
        match handler {
            Some(handler) => {
                handler(notice);
                true
            }
            None => {
                log::debug!("error channel has no handler; dropped: {}", notice.message);
                false
            }
        }
    }

    /// [`publish`](Self::publish) with [`Severity::Error`].
    pub fn publish_error(&self, message: impl Into<String>) -> bool {
        self.publish(message, Severity::default())
    }

    /// Classify a network failure and publish the result.
    pub fn classify_and_publish(&self, failure: &NetworkFailure) -> bool {
        let Notice { message, severity } = classify(failure);
        self.publish(message, severity)
    }

    fn slot(&self) -> MutexGuard<'_, Option<Registration>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// User-facing message and severity for a network failure.
///
/// Server errors use the server's `message` when it sent one. A request that
/// got no response is a warning. Everything else gets the generic message.
#[must_use]
pub fn classify(failure: &NetworkFailure) -> Notice {
    match failure {
        NetworkFailure::ServerError { .. } => {
            let message = failure.server_message().unwrap_or(GENERIC_MESSAGE);
            Notice::new(message, Severity::Error)
        }
        NetworkFailure::Unreachable { .. } => Notice::new(NO_RESPONSE_MESSAGE, Severity::Warning),
        NetworkFailure::ClientFault { .. } => Notice::new(GENERIC_MESSAGE, Severity::Error),
    }
}
