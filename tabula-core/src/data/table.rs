use serde::{Deserialize, Serialize};

/// Identifies a table on a connection
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// The id of the connection the table belongs to
    pub connection_id: String,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub table_name: String,
}

impl TableRef {
    pub fn new(
        connection_id: impl Into<String>,
        database: Option<String>,
        schema: Option<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            connection_id: connection_id.into(),
            database,
            schema,
            table_name: table_name.into(),
        }
    }

    pub fn minimal(connection_id: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self::new(connection_id, None, None, table_name)
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }
}
