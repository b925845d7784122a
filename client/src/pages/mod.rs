//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data fetching and delegates rendering details to
//! `components`. Access control is applied in `app` by wrapping pages in
//! route guards, not inside the pages themselves.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod unauthorized;
