//! An in-memory query executor which replays canned results.
//!
//! This is most useful for testing the connectors and sessions without a
//! live database.

mod executor;
pub use executor::*;
