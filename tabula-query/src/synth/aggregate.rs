use tabula_core::dialect::Dialect;
use tabula_logging::warn;

use super::{compile_limit, compile_order_by, compile_source, compile_top, compile_where, join_fragments};
use crate::state::{AggregateState, COUNT_ALL};

/// Builds the grouped SELECT statement of an aggregate view
pub fn synthesize_aggregate(state: &AggregateState, dialect: Dialect) -> String {
    let view = state.view();
    let mut projection = vec![];
    let mut group_by = vec![];
    let mut output = vec![];

    for agg in state.aggregations() {
        if !view.is_available(&agg.field) {
            warn!("Omitting aggregation of unknown column \"{}\"", agg.field);
            continue;
        }

        let col = dialect.quote_identifier(&agg.field);

        match agg.function.sql() {
            Some(func) => {
                let alias = agg.output_name();
                projection.push(format!(
                    "{}({}) AS {}",
                    func,
                    col,
                    dialect.quote_identifier(&alias)
                ));
                output.push(alias);
            }
            None => {
                projection.push(col.clone());
                group_by.push(col);
                output.push(agg.field.clone());
            }
        }
    }

    if projection.is_empty() || state.include_count_all() {
        projection.push(format!("COUNT(*) AS {}", COUNT_ALL));
        output.push(COUNT_ALL.to_string());
    }

    let group_by = if group_by.is_empty() {
        "".to_string()
    } else {
        format!("GROUP BY {}", group_by.join(", "))
    };

    join_fragments([
        "SELECT".to_string(),
        compile_top(view, dialect),
        projection.join(", "),
        compile_source(view, dialect),
        compile_where(view, dialect),
        group_by,
        compile_order_by(view, output.as_slice(), dialect),
        compile_limit(view, dialect),
    ])
}
