use std::sync::Arc;

use async_trait::async_trait;
use tabula_core::{data::QueryOutput, err::Result};

/// Runs SQL text on a database connection.
///
/// Connection lifecycle and pooling are owned by the implementation.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes the query and buffers its entire result set
    async fn execute(&self, sql: &str) -> Result<QueryOutput>;
}

#[async_trait]
impl<T: QueryExecutor + ?Sized> QueryExecutor for Arc<T> {
    async fn execute(&self, sql: &str) -> Result<QueryOutput> {
        (**self).execute(sql).await
    }
}
