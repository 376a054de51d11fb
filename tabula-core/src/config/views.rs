use serde::{Deserialize, Serialize};

/// Defaults for newly opened views
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ViewDefaults {
    /// Row cap of a new view, must be one of the supported page sizes
    #[serde(default = "ViewDefaults::default_limit")]
    pub default_limit: u32,
}

impl ViewDefaults {
    fn default_limit() -> u32 {
        100
    }
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            default_limit: Self::default_limit(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Truncate logged SQL text to this many characters
    pub max_sql_length: Option<usize>,
}
