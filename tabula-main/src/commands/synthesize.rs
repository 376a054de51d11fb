use tabula_config::ConfigLoader;
use tabula_connectors_all::Connectors;
use tabula_core::{
    config::TabulaConfig,
    err::{ensure, Context, Result},
};
use tabula_logging::info;
use tabula_query::{RowLimit, ViewState};

use crate::{args::SynthesizeArgs, conf::resolve_source};

use super::ViewDefinition;

/// Prints the SQL of the view once its payloads are applied
pub fn run(args: &SynthesizeArgs, conf: &TabulaConfig) -> Result<i32> {
    let def: ViewDefinition = ConfigLoader::new()
        .load_as(&args.view)
        .context("Failed to load view definition")?;

    println!("{}", synthesize(&def, args.source.as_deref(), conf)?);

    Ok(0)
}

pub fn synthesize(def: &ViewDefinition, source: Option<&str>, conf: &TabulaConfig) -> Result<String> {
    ensure!(
        !def.columns.is_empty(),
        "View of \"{}\" must define at least one column",
        def.table.name
    );

    let source = resolve_source(conf, source.or(def.source.as_deref()))?;
    let dialect = Connectors::from_source(source)?.dialect();
    let limit =
        RowLimit::try_from(conf.views.default_limit).context("Invalid default row limit")?;

    info!(
        "Synthesizing {:?} view of \"{}\" for {} source \"{}\"",
        def.kind, def.table.name, dialect, source.id
    );

    let state = def.payloads.iter().fold(
        ViewState::open(def.kind, def.table.table_ref(&source.id), &def.columns).with_limit(limit),
        |state, payload| state.merge(payload),
    );

    Ok(state.synthesize(dialect))
}

#[cfg(test)]
mod tests {
    use tabula_core::{
        config::{SourceConfig, Value, ViewDefaults},
        data::ColumnDescriptor,
    };
    use tabula_query::{RefreshPayload, ViewKind};

    use crate::commands::TableDefinition;

    use super::*;

    use pretty_assertions::assert_eq;

    fn mock_conf() -> TabulaConfig {
        TabulaConfig {
            sources: vec![
                SourceConfig::new("warehouse", "mssql", Value::Null),
                SourceConfig::new("app", "mysql", Value::Null),
            ],
            ..Default::default()
        }
    }

    fn mock_def() -> ViewDefinition {
        ViewDefinition {
            source: Some("app".into()),
            table: TableDefinition {
                database: None,
                schema: Some("sales".into()),
                name: "orders".into(),
            },
            kind: ViewKind::Rows,
            columns: vec![
                ColumnDescriptor::minimal("id", "int"),
                ColumnDescriptor::minimal("total", "decimal"),
            ],
            payloads: vec![RefreshPayload {
                limit: Some(20),
                sort_column: Some("total".into()),
                sort_direction: Some("desc".into()),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_synthesize_view_definition() {
        assert_eq!(
            synthesize(&mock_def(), None, &mock_conf()).unwrap(),
            "SELECT * FROM `sales`.`orders` ORDER BY `total` DESC LIMIT 20"
        );
    }

    #[test]
    fn test_synthesize_source_override() {
        assert_eq!(
            synthesize(&mock_def(), Some("warehouse"), &mock_conf()).unwrap(),
            "SELECT TOP (20) * FROM [sales].[orders] ORDER BY [total] DESC"
        );
    }

    #[test]
    fn test_synthesize_applies_default_limit() {
        let mut def = mock_def();
        def.payloads.clear();
        let conf = TabulaConfig {
            views: ViewDefaults { default_limit: 250 },
            ..mock_conf()
        };

        assert_eq!(
            synthesize(&def, None, &conf).unwrap(),
            "SELECT * FROM `sales`.`orders` LIMIT 250"
        );
    }

    #[test]
    fn test_synthesize_invalid_definitions() {
        let mut def = mock_def();
        def.columns.clear();
        assert!(synthesize(&def, None, &mock_conf()).is_err());

        assert!(synthesize(&mock_def(), Some("missing"), &mock_conf()).is_err());

        let conf = TabulaConfig {
            views: ViewDefaults { default_limit: 7 },
            ..mock_conf()
        };
        assert!(synthesize(&mock_def(), None, &conf).is_err());
    }
}
