use tabula_connectors_base::interface::DatabaseCapability;
use tabula_core::{data::QueryOutput, err::Result};
use tabula_guardrail::classify;
use tabula_logging::{info, warn, MaxLogLength};

use super::{ExecutionFailure, GuardrailRejection};

/// Runs free-text SQL written by an assistant.
///
/// Only SQL the guardrail considers a single read-only SELECT reaches the database.
pub struct AssistantQuery<'a> {
    capability: &'a dyn DatabaseCapability,
    log_length: Option<usize>,
}

impl<'a> AssistantQuery<'a> {
    pub fn new(capability: &'a dyn DatabaseCapability) -> Self {
        Self {
            capability,
            log_length: None,
        }
    }

    pub fn with_log_length(mut self, log_length: Option<usize>) -> Self {
        self.log_length = log_length;
        self
    }

    /// Classifies and executes the query.
    ///
    /// Fails with [`GuardrailRejection`] when the query is refused and with
    /// [`ExecutionFailure`] when the database fails.
    pub async fn run(&self, sql: &str) -> Result<QueryOutput> {
        if let Some(reason) = classify(sql).reason {
            warn!(
                "Rejected assistant query ({}): {}",
                reason,
                MaxLogLength::new(self.log_length, sql)
            );
            return Err(GuardrailRejection::new(sql, reason).into());
        }

        info!(
            "Running assistant query: {}",
            MaxLogLength::new(self.log_length, sql)
        );

        self.capability
            .execute(sql)
            .await
            .map_err(|err| ExecutionFailure::new(sql, None, err).into())
    }
}
