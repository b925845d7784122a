//! The single live user-facing notification.
//!
//! DESIGN
//! ======
//! There is no queue: `show` overwrites whatever is pending, and `acknowledge`
//! clears it. `seq` increments on every `show` so a delayed auto-hide can tell
//! whether the notification it was scheduled for is still the live one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use serde::{Deserialize, Serialize};

/// Notification severity, mirrored in the banner's CSS modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

/// A message/severity pair as published through the error channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }
}

/// Banner state: the one notification that may currently be visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    pub seq: u64,
}

impl NoticeState {
    /// Replace the live notification and make it visible.
    pub fn show(&mut self, notice: Notice) {
        self.open = true;
        self.message = notice.message;
        self.severity = notice.severity;
        self.seq = self.seq.wrapping_add(1);
    }

    /// Hide the notification and clear its message.
    pub fn acknowledge(&mut self) {
        self.open = false;
        self.message.clear();
    }

    /// Acknowledge only if `seq` still identifies the live notification.
    ///
    /// Returns `true` when the notification was hidden.
    pub fn expire(&mut self, seq: u64) -> bool {
        if !self.open || self.seq != seq {
            return false;
        }
        self.acknowledge();
        true
    }
}
