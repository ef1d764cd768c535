//! # chatrelay_core
//!
//! Message store and completion gateway for chatrelay.

pub mod completion;
pub mod db;
pub mod messages;
pub mod schema;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
