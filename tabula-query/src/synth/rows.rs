use tabula_core::dialect::Dialect;
use tabula_logging::warn;

use super::{compile_limit, compile_order_by, compile_source, compile_top, compile_where, join_fragments};
use crate::state::{RowViewState, ViewOptions};

/// Builds the SELECT statement of a table view
pub fn synthesize_rows(state: &RowViewState, dialect: Dialect) -> String {
    let view = state.view();

    join_fragments([
        "SELECT".to_string(),
        compile_top(view, dialect),
        compile_projection(view, dialect),
        compile_source(view, dialect),
        compile_where(view, dialect),
        compile_order_by(view, view.available_columns(), dialect),
        compile_limit(view, dialect),
    ])
}

fn compile_projection(view: &ViewOptions, dialect: Dialect) -> String {
    let cols = view
        .selected_columns()
        .iter()
        .filter(|c| {
            let known = view.is_available(c);
            if !known {
                warn!("Omitting unknown column \"{}\" from projection", c);
            }
            known
        })
        .map(|c| dialect.quote_identifier(c))
        .collect::<Vec<_>>();

    if cols.is_empty() {
        return "*".into();
    }

    cols.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tabula_core::data::{ColumnDescriptor, TableRef};

    fn mock_state(table: TableRef) -> RowViewState {
        RowViewState::open(
            table,
            &[
                ColumnDescriptor::minimal("id", "int"),
                ColumnDescriptor::minimal("name", "varchar"),
            ],
        )
    }

    fn merged(state: &RowViewState, payload: serde_json::Value) -> RowViewState {
        state.merge(&serde_json::from_value(payload).unwrap())
    }

    #[test]
    fn test_synthesize_all_columns() {
        let state = mock_state(TableRef::minimal("c", "people"));

        assert_eq!(
            synthesize_rows(&state, Dialect::SqlServer),
            "SELECT TOP (100) * FROM [dbo].[people]"
        );
        assert_eq!(
            synthesize_rows(&state, Dialect::MySql),
            "SELECT * FROM `people` LIMIT 100"
        );
        assert_eq!(
            synthesize_rows(&state, Dialect::Postgres),
            "SELECT * FROM \"people\" LIMIT 100"
        );
    }

    #[test]
    fn test_synthesize_qualified_source() {
        let state = mock_state(TableRef::new(
            "c",
            Some("crm".into()),
            Some("sales".into()),
            "people",
        ));

        assert_eq!(
            synthesize_rows(&state, Dialect::SqlServer),
            "SELECT TOP (100) * FROM [crm].[sales].[people]"
        );
        assert_eq!(
            synthesize_rows(&state, Dialect::MySql),
            "SELECT * FROM `crm`.`people` LIMIT 100"
        );
        assert_eq!(
            synthesize_rows(&state, Dialect::Postgres),
            "SELECT * FROM \"sales\".\"people\" LIMIT 100"
        );
    }

    #[test]
    fn test_synthesize_full_row_query() {
        let state = merged(
            &mock_state(TableRef::minimal("c", "people")),
            json!({
                "selected_columns": ["name", "id"],
                "limit": 20,
                "sort_column": "id",
                "sort_direction": "desc",
                "filter_field": "name",
                "filter_operator": "like",
                "filter_value": "%o'neil%"
            }),
        );

        assert_eq!(
            synthesize_rows(&state, Dialect::SqlServer),
            "SELECT TOP (20) [name], [id] FROM [dbo].[people] WHERE [name] LIKE '%o''neil%' ORDER BY [id] DESC"
        );
        assert_eq!(
            synthesize_rows(&state, Dialect::MySql),
            "SELECT `name`, `id` FROM `people` WHERE `name` LIKE '%o''neil%' ORDER BY `id` DESC LIMIT 20"
        );
        assert_eq!(
            synthesize_rows(&state, Dialect::Postgres),
            "SELECT \"name\", \"id\" FROM \"people\" WHERE \"name\" LIKE '%o''neil%' ORDER BY \"id\" DESC LIMIT 20"
        );
    }

    #[test]
    fn test_synthesize_numeric_filter() {
        let state = merged(
            &mock_state(TableRef::minimal("c", "people")),
            json!({"filter_field": "id", "filter_operator": ">", "filter_value": " 10 "}),
        );

        assert_eq!(
            synthesize_rows(&state, Dialect::Postgres),
            "SELECT * FROM \"people\" WHERE \"id\" > 10 LIMIT 100"
        );
    }

    #[test]
    fn test_synthesize_incomplete_filter_is_omitted() {
        let state = merged(
            &mock_state(TableRef::minimal("c", "people")),
            json!({"filter_field": "id", "filter_value": "10"}),
        );

        assert_eq!(
            synthesize_rows(&state, Dialect::MySql),
            "SELECT * FROM `people` LIMIT 100"
        );
    }

    #[test]
    fn test_synthesize_sort_without_direction_is_omitted() {
        let state = merged(
            &mock_state(TableRef::minimal("c", "people")),
            json!({"sort_column": "name"}),
        );

        assert_eq!(
            synthesize_rows(&state, Dialect::MySql),
            "SELECT * FROM `people` LIMIT 100"
        );
    }

    #[test]
    fn test_synthesize_quotes_hostile_identifiers() {
        let state = RowViewState::open(
            TableRef::minimal("c", "t]; DROP TABLE x; --"),
            &[ColumnDescriptor::minimal("a]b", "int")],
        );
        let state = merged(&state, json!({"selected_columns": ["a]b"]}));

        assert_eq!(
            synthesize_rows(&state, Dialect::SqlServer),
            "SELECT TOP (100) [a]]b] FROM [dbo].[t]]; DROP TABLE x; --]"
        );
    }
}
