use tabula_connectors_base::{common::capability::SqlCapability, interface::QueryExecutor};

mod column_searcher;
pub use column_searcher::*;

/// The connector for Microsoft SQL Server
pub struct MssqlConnector;

impl MssqlConnector {
    pub const TYPE: &'static str = "mssql";

    pub fn capability<E: QueryExecutor>(executor: E) -> MssqlCapability<E> {
        SqlCapability::new(executor)
    }
}

pub type MssqlCapability<E> = SqlCapability<MssqlColumnSearcher, E>;
