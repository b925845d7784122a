//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and read shared configuration from
//! Leptos context. `route_guard` and `notification_banner` hold the only
//! cross-cutting behavior; the rest are presentational.

pub mod account_card;
pub mod nav_bar;
pub mod notification_banner;
pub mod route_guard;
