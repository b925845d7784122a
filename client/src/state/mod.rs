//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `access`, `notice`, `fetch`) and
//! kept free of Leptos types so it can be unit-tested natively; components
//! wrap these in signals.

pub mod access;
pub mod fetch;
pub mod notice;
pub mod session;
