use serde::{Deserialize, Serialize};

pub use serde_yaml::{from_value, Mapping, Value};

mod sources;
pub use sources::*;
mod views;
pub use views::*;
mod util;
pub use util::*;

/// The configuration of a tabula instance
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Default)]
pub struct TabulaConfig {
    /// The human-readable name of the instance
    #[serde(default)]
    pub name: String,
    /// List of data sources which can be browsed
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    /// Defaults applied when opening a view
    #[serde(default)]
    pub views: ViewDefaults,
    /// Logging options
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TabulaConfig {
    /// Finds the data source with the supplied id
    pub fn source(&self, id: &str) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.id == id)
    }
}
