use serde::{Deserialize, Serialize};

/// A column of a table as reported by the database metadata
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// The name of the column
    pub name: String,
    /// The native data type name, as reported by the database
    pub data_type: String,
    /// Whether the column is nullable
    #[serde(default)]
    pub nullable: bool,
    /// Whether the column is part of the table's primary key
    #[serde(default)]
    pub is_primary_key: bool,
    /// Whether the column references another table
    #[serde(default)]
    pub is_foreign_key: bool,
    /// Whether the column is generated by the database
    #[serde(default)]
    pub is_identity: bool,
}

impl ColumnDescriptor {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        nullable: bool,
        is_primary_key: bool,
        is_foreign_key: bool,
        is_identity: bool,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable,
            is_primary_key,
            is_foreign_key,
            is_identity,
        }
    }

    /// A nullable column with no key or identity flags
    pub fn minimal(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self::new(name, data_type, true, false, false, false)
    }
}
