//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps REST calls, `failure` classifies how a call failed,
//! `error_channel` carries user-facing failures to the notification banner,
//! and `types` defines the wire schema.

pub mod api;
pub mod error_channel;
pub mod failure;
pub mod types;
