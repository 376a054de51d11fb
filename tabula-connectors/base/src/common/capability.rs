use std::marker::PhantomData;

use async_trait::async_trait;
use tabula_core::{
    data::{ColumnDescriptor, QueryOutput, TableRef},
    dialect::Dialect,
    err::{Context, Result},
};
use tabula_logging::{debug, warn, MaxLogLength};

use crate::{
    common::metadata::parse_columns,
    interface::{ColumnSearcher, DatabaseCapability, QueryExecutor},
};

/// A database capability which issues SQL through an executor and reads its
/// metadata through the column searcher of its dialect
pub struct SqlCapability<TSearcher, TExecutor> {
    executor: TExecutor,
    /// Truncates SQL text in log lines
    log_length: Option<usize>,
    _searcher: PhantomData<fn() -> TSearcher>,
}

impl<TSearcher: ColumnSearcher, TExecutor: QueryExecutor> SqlCapability<TSearcher, TExecutor> {
    pub fn new(executor: TExecutor) -> Self {
        Self {
            executor,
            log_length: None,
            _searcher: PhantomData,
        }
    }

    pub fn with_log_length(mut self, log_length: Option<usize>) -> Self {
        self.log_length = log_length;
        self
    }

    pub fn executor(&self) -> &TExecutor {
        &self.executor
    }
}

#[async_trait]
impl<TSearcher: ColumnSearcher, TExecutor: QueryExecutor> DatabaseCapability
    for SqlCapability<TSearcher, TExecutor>
{
    fn dialect(&self) -> Dialect {
        TSearcher::DIALECT
    }

    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnDescriptor>> {
        let sql = TSearcher::metadata_query(table);
        debug!(
            "Retrieving columns of \"{}\": {}",
            table.table_name,
            MaxLogLength::new(self.log_length, &sql)
        );

        let output = self
            .executor
            .execute(&sql)
            .await
            .with_context(|| format!("Failed to retrieve columns of \"{}\"", table.table_name))?;

        let cols = parse_columns(&output, TSearcher::parse_column);

        if cols.is_empty() {
            warn!("Found no columns for table \"{}\"", table.table_name);
        }

        Ok(cols)
    }

    async fn execute(&self, sql: &str) -> Result<QueryOutput> {
        debug!("Executing query: {}", MaxLogLength::new(self.log_length, sql));

        self.executor.execute(sql).await
    }
}
