//! The flows through which callers reach a database: free-text SQL from an
//! assistant, which must pass the guardrail, and interactive views, whose SQL
//! is synthesized from validated state.

mod assistant;
mod browse;
mod error;

pub use assistant::*;
pub use browse::*;
pub use error::*;
