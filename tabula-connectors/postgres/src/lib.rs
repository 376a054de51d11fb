use tabula_connectors_base::{common::capability::SqlCapability, interface::QueryExecutor};

mod column_searcher;
pub use column_searcher::*;

/// The connector for PostgreSQL
pub struct PostgresConnector;

impl PostgresConnector {
    pub const TYPE: &'static str = "postgres";

    pub fn capability<E: QueryExecutor>(executor: E) -> PostgresCapability<E> {
        SqlCapability::new(executor)
    }
}

pub type PostgresCapability<E> = SqlCapability<PostgresColumnSearcher, E>;
