use tabula_connectors_base::{common::capability::SqlCapability, interface::QueryExecutor};

mod column_searcher;
pub use column_searcher::*;

/// The connector for MySQL and compatible databases
pub struct MysqlConnector;

impl MysqlConnector {
    pub const TYPE: &'static str = "mysql";

    pub fn capability<E: QueryExecutor>(executor: E) -> MysqlCapability<E> {
        SqlCapability::new(executor)
    }
}

pub type MysqlCapability<E> = SqlCapability<MysqlColumnSearcher, E>;
