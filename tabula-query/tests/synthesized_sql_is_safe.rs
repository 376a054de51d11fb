use pretty_assertions::assert_eq;
use serde_json::json;
use tabula_core::{
    data::{ColumnDescriptor, TableRef},
    dialect::Dialect,
};
use tabula_guardrail::classify;
use tabula_query::{AggregateState, RefreshPayload, RowViewState, ViewState};

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::minimal("id", "int"),
        ColumnDescriptor::minimal("update", "varchar"),
        ColumnDescriptor::minimal("it's; a column", "varchar"),
        ColumnDescriptor::minimal("amount", "decimal"),
    ]
}

fn table() -> TableRef {
    TableRef::new("c", Some("db".into()), Some("select".into()), "drop table")
}

fn payloads() -> Vec<RefreshPayload> {
    [
        json!({"limit": 250}),
        json!({"selected_columns": ["update", "it's; a column", "missing"]}),
        json!({"sort_column": "it's; a column", "sort_direction": "desc"}),
        json!({"filter_field": "update", "filter_operator": "like", "filter_value": "%; DELETE FROM x --%"}),
        json!({"filter_field": "id", "filter_operator": "=", "filter_value": "1 OR 1=1"}),
        json!({"filter_field": "update", "filter_operator": "=", "filter_value": "C:\\temp\\"}),
        json!({"filter_field": "update", "filter_operator": "like", "filter_value": "\\'; DROP TABLE files; -- "}),
        json!({"add_aggregation": {"field": "update", "function": "none"}}),
        json!({"add_aggregation": {"field": "amount", "function": "sum"}}),
        json!({"add_aggregation": {"field": "it's; a column", "function": "max"}}),
        json!({"include_count_all": true}),
        json!({"sort_column": "update", "sort_direction": "asc"}),
        json!({"remove_aggregation": 1}),
        json!({"filter_field": ""}),
    ]
    .into_iter()
    .map(|p| serde_json::from_value(p).unwrap())
    .collect()
}

fn assert_every_step_is_safe(mut state: ViewState) {
    for payload in payloads() {
        state = state.merge(&payload);

        for dialect in Dialect::ALL {
            let sql = state.synthesize(dialect);
            let res = classify(&sql);
            assert!(res.is_safe, "{} was rejected: {:?}", sql, res.reason);
        }
    }
}

#[test]
fn test_row_views_synthesize_safe_sql() {
    assert_every_step_is_safe(RowViewState::open(table(), &columns()).into());
}

#[test]
fn test_aggregate_views_synthesize_safe_sql() {
    assert_every_step_is_safe(AggregateState::open(table(), &columns()).into());
}

#[test]
fn test_backslash_filter_values_stay_inside_the_literal() {
    for value in [r"C:\temp\", r"\'; DROP TABLE files; -- ", r"\", r"a\\'b"] {
        for operator in ["=", "like"] {
            let payload: RefreshPayload = serde_json::from_value(json!({
                "filter_field": "update",
                "filter_operator": operator,
                "filter_value": value
            }))
            .unwrap();
            let state = ViewState::from(RowViewState::open(table(), &columns())).merge(&payload);

            for dialect in Dialect::ALL {
                let sql = state.synthesize(dialect);
                let res = classify(&sql);

                assert!(res.is_safe, "{} was rejected: {:?}", sql, res.reason);
                assert!(sql.contains(&dialect.quote_literal(value)), "{}", sql);
            }
        }
    }
}

#[test]
fn test_merge_never_references_unknown_columns() {
    let mut state: ViewState = AggregateState::open(table(), &columns()).into();

    for field in ["missing", "ID", " id", "id ", "amount;", "\"amount\""] {
        let payload: RefreshPayload = serde_json::from_value(json!({
            "sort_column": field,
            "filter_field": field,
            "selected_columns": [field],
            "add_aggregation": {"field": field, "function": "count"}
        }))
        .unwrap();

        state = state.merge(&payload);

        let view = state.view();
        assert_eq!(view.sort_column(), None);
        assert_eq!(view.filter_field(), None);
        assert!(view
            .selected_columns()
            .iter()
            .all(|c| view.available_columns().contains(c)));
        assert!(state.as_aggregate().unwrap().aggregations().is_empty());
    }
}

#[test]
fn test_row_view_pagination() {
    let state = RowViewState::open(
        TableRef::minimal("c", "t"),
        &[
            ColumnDescriptor::minimal("id", "int"),
            ColumnDescriptor::minimal("name", "varchar"),
        ],
    );

    assert!(tabula_query::synthesize_rows(&state, Dialect::SqlServer).starts_with("SELECT TOP (100) *"));
    assert!(tabula_query::synthesize_rows(&state, Dialect::MySql).ends_with("LIMIT 100"));
    assert!(tabula_query::synthesize_rows(&state, Dialect::Postgres).ends_with("LIMIT 100"));
}
