use std::path::Path;

use tabula_config::ConfigLoader;
use tabula_connectors_all::Connectors;
use tabula_connectors_base::interface::{DatabaseCapability, QueryExecutor};
use tabula_core::{
    config::{SourceConfig, TabulaConfig},
    err::{bail, Context, Result},
};
use tabula_logging::info;

/// Loads the configuration of the instance
pub fn init_conf(config_path: &Path) -> Result<TabulaConfig> {
    info!("Loading configuration...");

    ConfigLoader::new()
        .load(config_path)
        .context("Failed to load configuration")
}

/// Finds the data source to use, the only source is used when none is requested
pub fn resolve_source<'a>(conf: &'a TabulaConfig, id: Option<&str>) -> Result<&'a SourceConfig> {
    match id {
        Some(id) => conf
            .source(id)
            .with_context(|| format!("Unknown data source \"{}\"", id)),
        None if conf.sources.len() == 1 => Ok(&conf.sources[0]),
        None if conf.sources.is_empty() => bail!("No data sources are configured"),
        None => bail!(
            "Multiple data sources are configured, one must be chosen from: {}",
            conf.sources
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Creates the capability of the data source, with I/O going through the executor
pub fn init_capability<E: QueryExecutor + 'static>(
    conf: &TabulaConfig,
    source: &SourceConfig,
    executor: E,
) -> Result<Box<dyn DatabaseCapability>> {
    let connector = Connectors::from_source(source)?;
    info!(
        "Initializing {} connector for data source \"{}\"",
        connector.r#type(),
        source.id
    );

    Ok(connector.capability(executor, conf.logging.max_sql_length))
}

#[cfg(test)]
mod tests {
    use tabula_core::config::Value;

    use super::*;

    use pretty_assertions::assert_eq;

    fn mock_conf(ids: &[&str]) -> TabulaConfig {
        TabulaConfig {
            sources: ids
                .iter()
                .map(|id| SourceConfig::new(*id, "postgres", Value::Null))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_requested_source() {
        let conf = mock_conf(&["a", "b"]);

        assert_eq!(resolve_source(&conf, Some("b")).unwrap().id, "b");
        assert_eq!(
            resolve_source(&conf, Some("c")).unwrap_err().to_string(),
            "Unknown data source \"c\""
        );
    }

    #[test]
    fn test_resolve_only_source() {
        assert_eq!(resolve_source(&mock_conf(&["a"]), None).unwrap().id, "a");
        assert!(resolve_source(&mock_conf(&[]), None).is_err());
        assert_eq!(
            resolve_source(&mock_conf(&["a", "b"]), None)
                .unwrap_err()
                .to_string(),
            "Multiple data sources are configured, one must be chosen from: a, b"
        );
    }
}
