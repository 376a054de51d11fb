use itertools::Itertools;
use serde::Serialize;
use tabula_core::data::{ColumnDescriptor, TableRef};
use tabula_logging::debug;

use super::{FilterOperator, RefreshPayload, RowLimit, SortDirection};

/// The options shared by every view of a table: the column selection,
/// row cap, sort and filter.
///
/// Every column reference held here is a member of `available_columns`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewOptions {
    table: TableRef,
    available_columns: Vec<String>,
    /// Empty means all columns
    selected_columns: Vec<String>,
    limit: RowLimit,
    sort_column: Option<String>,
    sort_direction: SortDirection,
    filter_field: Option<String>,
    filter_operator: Option<FilterOperator>,
    filter_value: Option<String>,
}

impl ViewOptions {
    pub(crate) fn open(table: TableRef, columns: &[ColumnDescriptor]) -> Self {
        Self {
            table,
            available_columns: columns.iter().map(|c| c.name.clone()).unique().collect(),
            selected_columns: vec![],
            limit: RowLimit::default(),
            sort_column: None,
            sort_direction: SortDirection::default(),
            filter_field: None,
            filter_operator: None,
            filter_value: None,
        }
    }

    pub(crate) fn set_limit(&mut self, limit: RowLimit) {
        self.limit = limit;
    }

    pub(crate) fn set_sort_column(&mut self, column: Option<String>) {
        self.sort_column = column;
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn available_columns(&self) -> &[String] {
        &self.available_columns
    }

    pub fn selected_columns(&self) -> &[String] {
        &self.selected_columns
    }

    pub fn limit(&self) -> RowLimit {
        self.limit
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn filter_field(&self) -> Option<&str> {
        self.filter_field.as_deref()
    }

    pub fn filter_operator(&self) -> Option<FilterOperator> {
        self.filter_operator
    }

    pub fn filter_value(&self) -> Option<&str> {
        self.filter_value.as_deref()
    }

    pub fn is_available(&self, column: &str) -> bool {
        self.available_columns.iter().any(|c| c == column)
    }

    /// Applies the shared fields of the payload, dropping any invalid values
    pub(crate) fn merge(&self, payload: &RefreshPayload) -> Self {
        let mut next = self.clone();

        if let Some(limit) = payload.limit {
            match RowLimit::try_from(limit) {
                Ok(limit) => next.limit = limit,
                Err(err) => debug!("Ignoring limit: {}", err),
            }
        }

        if let Some(selected) = payload.selected_columns.as_ref() {
            next.selected_columns = self.merge_selection(selected);
        }

        match payload.sort_column.as_deref() {
            Some("") => next.sort_column = None,
            Some(col) if self.is_available(col) => next.sort_column = Some(col.to_string()),
            Some(col) => debug!("Ignoring unknown sort column \"{}\"", col),
            None => {}
        }

        if let Some(dir) = payload.sort_direction.as_deref() {
            match dir.parse::<SortDirection>() {
                Ok(dir) => next.sort_direction = dir,
                Err(err) => debug!("Ignoring sort direction: {}", err),
            }
        }

        if payload.filter_field.as_deref() == Some("") {
            next.filter_field = None;
            next.filter_operator = None;
            next.filter_value = None;
            return next;
        }

        match payload.filter_field.as_deref() {
            Some(col) if self.is_available(col) => next.filter_field = Some(col.to_string()),
            Some(col) => debug!("Ignoring unknown filter field \"{}\"", col),
            None => {}
        }

        if let Some(op) = payload.filter_operator.as_deref() {
            match op.parse::<FilterOperator>() {
                Ok(op) => next.filter_operator = Some(op),
                Err(err) => debug!("Ignoring filter operator: {}", err),
            }
        }

        if let Some(value) = payload.filter_value() {
            next.filter_value = Some(value);
        }

        next
    }

    fn merge_selection(&self, requested: &[String]) -> Vec<String> {
        let selected = requested
            .iter()
            .filter(|c| self.is_available(c))
            .unique()
            .cloned()
            .collect::<Vec<_>>();

        if selected.is_empty() {
            return self.available_columns.clone();
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn mock_options() -> ViewOptions {
        ViewOptions::open(
            TableRef::minimal("db", "people"),
            &[
                ColumnDescriptor::minimal("id", "int"),
                ColumnDescriptor::minimal("name", "varchar"),
                ColumnDescriptor::minimal("age", "int"),
                ColumnDescriptor::minimal("name", "varchar"),
            ],
        )
    }

    fn payload(value: serde_json::Value) -> RefreshPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_open_collapses_duplicate_columns() {
        let opts = mock_options();

        assert_eq!(opts.available_columns(), &["id", "name", "age"]);
        assert!(opts.selected_columns().is_empty());
        assert_eq!(opts.limit().value(), 100);
        assert_eq!(opts.sort_column(), None);
        assert_eq!(opts.sort_direction(), SortDirection::None);
        assert_eq!(opts.filter_field(), None);
    }

    #[test]
    fn test_merge_empty_payload_is_identity() {
        let opts = mock_options();

        assert_eq!(opts.merge(&RefreshPayload::default()), opts);
    }

    #[test]
    fn test_merge_limit() {
        let opts = mock_options();

        assert_eq!(opts.merge(&payload(json!({"limit": 20}))).limit().value(), 20);
        assert_eq!(opts.merge(&payload(json!({"limit": 50}))).limit().value(), 100);
    }

    #[test]
    fn test_merge_selection() {
        let opts = mock_options();

        let next = opts.merge(&payload(json!({"selected_columns": ["age", "missing", "id", "age"]})));
        assert_eq!(next.selected_columns(), &["age", "id"]);

        let next = opts.merge(&payload(json!({"selected_columns": ["missing"]})));
        assert_eq!(next.selected_columns(), &["id", "name", "age"]);

        let next = opts.merge(&payload(json!({"selected_columns": []})));
        assert_eq!(next.selected_columns(), &["id", "name", "age"]);
    }

    #[test]
    fn test_merge_sort() {
        let opts = mock_options();

        let next = opts.merge(&payload(json!({"sort_column": "name", "sort_direction": "desc"})));
        assert_eq!(next.sort_column(), Some("name"));
        assert_eq!(next.sort_direction(), SortDirection::Desc);

        let unchanged = next.merge(&payload(json!({"sort_column": "salary", "sort_direction": "up"})));
        assert_eq!(unchanged, next);

        let cleared = next.merge(&payload(json!({"sort_column": ""})));
        assert_eq!(cleared.sort_column(), None);
        assert_eq!(cleared.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn test_merge_filter() {
        let opts = mock_options();

        let next = opts.merge(&payload(
            json!({"filter_field": "age", "filter_operator": ">", "filter_value": 30}),
        ));
        assert_eq!(next.filter_field(), Some("age"));
        assert_eq!(next.filter_operator(), Some(FilterOperator::Gt));
        assert_eq!(next.filter_value(), Some("30"));

        let unchanged = next.merge(&payload(
            json!({"filter_field": "salary; DROP", "filter_operator": "<>"}),
        ));
        assert_eq!(unchanged, next);

        let cleared = next.merge(&payload(json!({"filter_field": "", "filter_operator": "="})));
        assert_eq!(cleared.filter_field(), None);
        assert_eq!(cleared.filter_operator(), None);
        assert_eq!(cleared.filter_value(), None);
    }
}
