use tabula_connectors_base::interface::{DatabaseCapability, QueryExecutor};
use tabula_core::{
    config::SourceConfig,
    dialect::Dialect,
    err::{bail, Result},
};

pub use tabula_connectors_mssql::MssqlConnector;
pub use tabula_connectors_mysql::MysqlConnector;
pub use tabula_connectors_postgres::PostgresConnector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectors {
    Mssql,
    Mysql,
    Postgres,
}

impl Connectors {
    pub fn from_type(r#type: &str) -> Option<Self> {
        Some(match r#type {
            MssqlConnector::TYPE | "sqlserver" => Connectors::Mssql,
            MysqlConnector::TYPE => Connectors::Mysql,
            PostgresConnector::TYPE | "postgresql" => Connectors::Postgres,
            _ => return None,
        })
    }

    /// Resolves the connector of the data source
    pub fn from_source(source: &SourceConfig) -> Result<Self> {
        match Self::from_type(&source.r#type) {
            Some(c) => Ok(c),
            None => bail!(
                "Unknown connector type \"{}\" for data source \"{}\"",
                source.r#type,
                source.id
            ),
        }
    }

    pub fn r#type(&self) -> &'static str {
        match self {
            Connectors::Mssql => MssqlConnector::TYPE,
            Connectors::Mysql => MysqlConnector::TYPE,
            Connectors::Postgres => PostgresConnector::TYPE,
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Connectors::Mssql => Dialect::SqlServer,
            Connectors::Mysql => Dialect::MySql,
            Connectors::Postgres => Dialect::Postgres,
        }
    }

    /// Creates the database capability of the connector over the executor
    pub fn capability<E: QueryExecutor + 'static>(
        &self,
        executor: E,
        log_length: Option<usize>,
    ) -> Box<dyn DatabaseCapability> {
        match self {
            Connectors::Mssql => {
                Box::new(MssqlConnector::capability(executor).with_log_length(log_length))
            }
            Connectors::Mysql => {
                Box::new(MysqlConnector::capability(executor).with_log_length(log_length))
            }
            Connectors::Postgres => {
                Box::new(PostgresConnector::capability(executor).with_log_length(log_length))
            }
        }
    }
}
