use serde::Serialize;
use tabula_core::data::{ColumnDescriptor, TableRef};
use tabula_logging::debug;

use super::{AggregateFunction, Aggregation, AggregationRequest, RefreshPayload, RowLimit, ViewOptions};

/// The name of the row count term of aggregate views
pub const COUNT_ALL: &str = "count_all";

/// The state of a grouped view over a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateState {
    #[serde(flatten)]
    view: ViewOptions,
    /// Unique by (field, function)
    aggregations: Vec<Aggregation>,
    include_count_all: bool,
}

impl AggregateState {
    /// Opens an aggregate view with no aggregations, which counts all rows
    pub fn open(table: TableRef, columns: &[ColumnDescriptor]) -> Self {
        Self {
            view: ViewOptions::open(table, columns),
            aggregations: vec![],
            include_count_all: false,
        }
    }

    pub fn with_limit(mut self, limit: RowLimit) -> Self {
        self.view.set_limit(limit);
        self
    }

    pub fn view(&self) -> &ViewOptions {
        &self.view
    }

    pub fn aggregations(&self) -> &[Aggregation] {
        &self.aggregations
    }

    pub fn include_count_all(&self) -> bool {
        self.include_count_all
    }

    /// Whether the `COUNT(*)` term is part of the output
    pub fn counts_all(&self) -> bool {
        self.aggregations.is_empty() || self.include_count_all
    }

    /// The names of the columns of the result set, in projection order
    pub fn output_names(&self) -> Vec<String> {
        let mut names = self
            .aggregations
            .iter()
            .map(|a| a.output_name())
            .collect::<Vec<_>>();

        if self.counts_all() {
            names.push(COUNT_ALL.to_string());
        }

        names
    }

    /// Whether the view can be ordered by the column, either a table column
    /// or one of the output names
    pub fn is_orderable(&self, column: &str) -> bool {
        self.view.is_available(column) || self.output_names().iter().any(|c| c == column)
    }

    pub fn merge(&self, payload: &RefreshPayload) -> Self {
        let mut next = Self {
            view: self.view.merge(payload),
            aggregations: self.aggregations.clone(),
            include_count_all: self.include_count_all,
        };

        if let Some(idx) = payload.remove_aggregation {
            if idx < next.aggregations.len() {
                next.aggregations.remove(idx);
            } else {
                debug!("Ignoring removal of aggregation {} out of bounds", idx);
            }
        }

        if let Some(req) = payload.add_aggregation.as_ref() {
            if let Some(agg) = self.validate_aggregation(req) {
                let name = agg.output_name();

                if next.aggregations.iter().any(|a| a.output_name() == name) {
                    debug!("Ignoring aggregation {:?}, \"{}\" is already in the output", agg, name);
                } else {
                    next.aggregations.push(agg);
                }
            }
        }

        if let Some(include) = payload.include_count_all {
            next.include_count_all = include;
        }

        // aliases only exist once the aggregations are known
        match payload.sort_column.as_deref() {
            Some(col) if !col.is_empty() && next.is_orderable(col) => {
                next.view.set_sort_column(Some(col.to_string()))
            }
            _ => {}
        }

        if let Some(col) = next.view.sort_column() {
            if !next.is_orderable(col) {
                debug!("Clearing sort on \"{}\" which left the output", col);
                next.view.set_sort_column(None);
            }
        }

        next
    }

    fn validate_aggregation(&self, req: &AggregationRequest) -> Option<Aggregation> {
        if !self.view.is_available(&req.field) {
            debug!("Ignoring aggregation of unknown field \"{}\"", req.field);
            return None;
        }

        let agg = match req.function.parse::<AggregateFunction>() {
            Ok(function) => Aggregation::new(req.field.clone(), function),
            Err(err) => {
                debug!("Ignoring aggregation: {}", err);
                return None;
            }
        };

        if agg.output_name() == COUNT_ALL {
            debug!("Ignoring aggregation {:?}, \"{}\" is reserved", agg, COUNT_ALL);
            return None;
        }

        Some(agg)
    }
}
