use lazy_static::lazy_static;
use regex::Regex;
use tabula_core::dialect::{Dialect, PaginationStyle};
use tabula_logging::warn;

use crate::state::{FilterOperator, ViewOptions, ViewState};

mod aggregate;
mod rows;

pub use aggregate::synthesize_aggregate;
pub use rows::synthesize_rows;

lazy_static! {
    static ref NUMERIC_LITERAL: Regex = Regex::new(r"^-?\d+(\.\d+)?$").unwrap();
}

impl ViewState {
    /// Builds the SELECT statement for the view in the dialect
    pub fn synthesize(&self, dialect: Dialect) -> String {
        match self {
            ViewState::Rows(s) => synthesize_rows(s, dialect),
            ViewState::Aggregate(s) => synthesize_aggregate(s, dialect),
        }
    }
}

/// Joins the non-empty fragments of a statement
fn join_fragments(fragments: impl IntoIterator<Item = String>) -> String {
    fragments
        .into_iter()
        .filter(|i| !i.is_empty())
        .collect::<Vec<String>>()
        .join(" ")
}

fn compile_top(view: &ViewOptions, dialect: Dialect) -> String {
    match dialect.pagination_style() {
        PaginationStyle::LeadingTop => format!("TOP ({})", view.limit()),
        PaginationStyle::TrailingLimit => "".into(),
    }
}

fn compile_limit(view: &ViewOptions, dialect: Dialect) -> String {
    match dialect.pagination_style() {
        PaginationStyle::LeadingTop => "".into(),
        PaginationStyle::TrailingLimit => format!("LIMIT {}", view.limit()),
    }
}

fn compile_source(view: &ViewOptions, dialect: Dialect) -> String {
    let table = view.table();

    format!(
        "FROM {}",
        dialect.qualify_name(&table.table_name, table.schema(), table.database())
    )
}

/// Compiles the WHERE clause, a filter is only applied once its field,
/// operator and value are all set
fn compile_where(view: &ViewOptions, dialect: Dialect) -> String {
    let (field, op, value) = match (
        view.filter_field(),
        view.filter_operator(),
        view.filter_value(),
    ) {
        (Some(field), Some(op), Some(value)) => (field, op, value),
        _ => return "".into(),
    };

    if !view.is_available(field) {
        warn!("Omitting filter on unknown column \"{}\"", field);
        return "".into();
    }

    format!(
        "WHERE {} {} {}",
        dialect.quote_identifier(field),
        op.sql(),
        compile_operand(op, value, dialect)
    )
}

fn compile_operand(op: FilterOperator, value: &str, dialect: Dialect) -> String {
    match op {
        FilterOperator::Like => dialect.quote_literal(value),
        _ if NUMERIC_LITERAL.is_match(value.trim()) => value.trim().to_string(),
        _ => dialect.quote_literal(value),
    }
}

/// Compiles the ORDER BY clause if the sort column is one of `orderable`
fn compile_order_by<S: AsRef<str>>(view: &ViewOptions, orderable: &[S], dialect: Dialect) -> String {
    let (col, keyword) = match (view.sort_column(), view.sort_direction().keyword()) {
        (Some(col), Some(keyword)) => (col, keyword),
        _ => return "".into(),
    };

    if !orderable.iter().any(|c| c.as_ref() == col) {
        warn!("Omitting sort on column \"{}\" which is not in the output", col);
        return "".into();
    }

    format!("ORDER BY {} {}", dialect.quote_identifier(col), keyword)
}
