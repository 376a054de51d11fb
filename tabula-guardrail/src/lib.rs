//! Guardrail deciding whether free-text SQL is a single, read-only SELECT statement.
//!
//! The classifier has no dialect context, so it recognises the quoting styles of
//! every supported dialect at once and fails closed whenever the text is ambiguous.

mod classifier;
mod comments;
mod keywords;
mod mask;

pub use classifier::*;
pub use keywords::DENIED_KEYWORDS;
