use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// A data source which can be browsed and queried
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// The ID of the data source, used as the connection id of its views
    pub id: String,
    /// The connector type, eg `mssql`, `mysql` or `postgres`
    pub r#type: String,
    /// Connector-specific options
    #[serde(default)]
    pub options: Value,
}

impl SourceConfig {
    pub fn new(id: impl Into<String>, r#type: impl Into<String>, options: Value) -> Self {
        Self {
            id: id.into(),
            r#type: r#type.into(),
            options,
        }
    }
}
