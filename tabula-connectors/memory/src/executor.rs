use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tabula_connectors_base::interface::QueryExecutor;
use tabula_core::{
    data::{ColumnDescriptor, QueryOutput},
    err::{anyhow, bail, Result},
};
use tabula_logging::trace;

#[derive(Debug, Clone)]
enum MemoryResponse {
    Output(QueryOutput),
    Error(String),
}

/// Answers queries with the first registered response whose pattern is
/// contained in the SQL text, recording every query it receives
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    responses: Vec<(String, MemoryResponse)>,
    executed: Mutex<Vec<String>>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, pattern: impl Into<String>, output: QueryOutput) -> Self {
        self.responses
            .push((pattern.into(), MemoryResponse::Output(output)));
        self
    }

    pub fn with_error(mut self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .push((pattern.into(), MemoryResponse::Error(message.into())));
        self
    }

    /// Answers metadata queries mentioning the table with its columns
    pub fn with_columns(self, table_name: &str, cols: &[ColumnDescriptor]) -> Self {
        let pattern = format!("TABLE_NAME = '{}'", table_name.replace('\'', "''"));
        self.with_output(pattern, metadata_output(cols))
    }

    /// The queries executed so far, in order
    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QueryExecutor for MemoryExecutor {
    async fn execute(&self, sql: &str) -> Result<QueryOutput> {
        trace!("Memory executor received query: {}", sql);

        self.executed
            .lock()
            .map_err(|_| anyhow!("Failed to lock executed query log"))?
            .push(sql.to_string());

        let response = self
            .responses
            .iter()
            .find(|(pattern, _)| sql.contains(pattern.as_str()))
            .map(|(_, res)| res.clone());

        match response {
            Some(MemoryResponse::Output(output)) => Ok(output),
            Some(MemoryResponse::Error(message)) => bail!("{}", message),
            None => bail!("No response registered for query: {}", sql),
        }
    }
}

/// Builds the output of a metadata query describing the columns
pub fn metadata_output(cols: &[ColumnDescriptor]) -> QueryOutput {
    QueryOutput::from_values(
        [
            "COLUMN_NAME",
            "DATA_TYPE",
            "IS_NULLABLE",
            "IS_PRIMARY_KEY",
            "IS_FOREIGN_KEY",
            "IS_IDENTITY",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        cols.iter()
            .map(|c| {
                vec![
                    json!(c.name),
                    json!(c.data_type),
                    json!(if c.nullable { "YES" } else { "NO" }),
                    json!(c.is_primary_key as u8),
                    json!(c.is_foreign_key as u8),
                    Value::Bool(c.is_identity),
                ]
            })
            .collect(),
        0,
    )
}
