use std::{error::Error, fmt};

use tabula_core::err;
use tabula_guardrail::Rejection;
use tabula_query::ViewState;

/// Raised when SQL from the assistant is refused by the guardrail
#[derive(Debug, Clone, PartialEq)]
pub struct GuardrailRejection {
    pub sql: String,
    pub reason: Rejection,
}

impl GuardrailRejection {
    pub fn new(sql: impl Into<String>, reason: Rejection) -> Self {
        Self {
            sql: sql.into(),
            reason,
        }
    }
}

impl fmt::Display for GuardrailRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query rejected: {}", self.reason)
    }
}

impl Error for GuardrailRejection {}

/// Raised when the database fails to execute a query.
///
/// The executor's error is kept unchanged as the source.
#[derive(Debug)]
pub struct ExecutionFailure {
    pub sql: String,
    /// The view which synthesized the query, none for assistant queries
    pub state: Option<ViewState>,
    source: err::Error,
}

impl ExecutionFailure {
    pub fn new(sql: impl Into<String>, state: Option<ViewState>, source: err::Error) -> Self {
        Self {
            sql: sql.into(),
            state,
            source,
        }
    }

    pub fn cause(&self) -> &err::Error {
        &self.source
    }
}

impl fmt::Display for ExecutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to execute query: {}", self.source)
    }
}

impl Error for ExecutionFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}
