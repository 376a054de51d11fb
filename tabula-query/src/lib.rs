//! Browsing state for table and aggregate views and the synthesis of
//! dialect-specific SELECT statements from that state.

pub mod state;
pub mod synth;

pub use state::*;
pub use synth::*;
