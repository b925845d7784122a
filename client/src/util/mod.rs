//! Browser and formatting helpers.

pub mod money;
pub mod storage;
