use async_trait::async_trait;
use tabula_core::{
    data::{ColumnDescriptor, QueryOutput, TableRef},
    dialect::Dialect,
    err::Result,
};

/// The operations a database offers to the browsing and query flows
#[async_trait]
pub trait DatabaseCapability: Send + Sync {
    /// The dialect of the SQL accepted by the database
    fn dialect(&self) -> Dialect;

    /// Retrieves the columns of the table in their defined order
    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnDescriptor>>;

    /// Executes the query
    async fn execute(&self, sql: &str) -> Result<QueryOutput>;
}
