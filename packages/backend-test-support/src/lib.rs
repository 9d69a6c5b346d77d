//! Backend test support utilities
//!
//! Unified logging initialization and assertion helpers for the stable
//! error wire contract, shared by unit and integration tests.

pub mod error_body;
pub mod logging;
