use serde::Serialize;
use tabula_core::data::{ColumnDescriptor, TableRef};

use super::{RefreshPayload, RowLimit, ViewOptions};

/// The state of a plain table view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowViewState {
    #[serde(flatten)]
    view: ViewOptions,
}

impl RowViewState {
    /// Opens a view over all columns of the table
    pub fn open(table: TableRef, columns: &[ColumnDescriptor]) -> Self {
        Self {
            view: ViewOptions::open(table, columns),
        }
    }

    pub fn with_limit(mut self, limit: RowLimit) -> Self {
        self.view.set_limit(limit);
        self
    }

    pub fn view(&self) -> &ViewOptions {
        &self.view
    }

    pub fn merge(&self, payload: &RefreshPayload) -> Self {
        Self {
            view: self.view.merge(payload),
        }
    }
}
