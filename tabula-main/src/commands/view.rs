use serde::{Deserialize, Serialize};
use tabula_core::data::{ColumnDescriptor, TableRef};
use tabula_query::{RefreshPayload, ViewKind};

/// A view over a table, defined in a file, along with the refreshes
/// applied to it after opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDefinition {
    /// The id of the data source holding the table
    #[serde(default)]
    pub source: Option<String>,
    pub table: TableDefinition,
    #[serde(default)]
    pub kind: ViewKind,
    /// The columns of the table, in their defined order
    pub columns: Vec<ColumnDescriptor>,
    #[serde(default)]
    pub payloads: Vec<RefreshPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
}

impl TableDefinition {
    pub fn table_ref(&self, connection_id: &str) -> TableRef {
        TableRef::new(
            connection_id,
            self.database.clone(),
            self.schema.clone(),
            self.name.clone(),
        )
    }
}
