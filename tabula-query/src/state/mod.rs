use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};
use tabula_core::data::{ColumnDescriptor, TableRef};

mod aggregate;
mod options;
mod payload;
mod rows;
mod view;

pub use aggregate::*;
pub use options::*;
pub use payload::*;
pub use rows::*;
pub use view::*;

/// The kinds of views which can be opened over a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    Rows,
    Aggregate,
}

/// The state of an open view
#[derive(Debug, Clone, PartialEq, Serialize, EnumAsInner)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewState {
    Rows(RowViewState),
    Aggregate(AggregateState),
}

impl ViewState {
    pub fn open(kind: ViewKind, table: TableRef, columns: &[ColumnDescriptor]) -> Self {
        match kind {
            ViewKind::Rows => RowViewState::open(table, columns).into(),
            ViewKind::Aggregate => AggregateState::open(table, columns).into(),
        }
    }

    pub fn with_limit(self, limit: RowLimit) -> Self {
        match self {
            ViewState::Rows(s) => s.with_limit(limit).into(),
            ViewState::Aggregate(s) => s.with_limit(limit).into(),
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::Rows(_) => ViewKind::Rows,
            ViewState::Aggregate(_) => ViewKind::Aggregate,
        }
    }

    pub fn view(&self) -> &ViewOptions {
        match self {
            ViewState::Rows(s) => s.view(),
            ViewState::Aggregate(s) => s.view(),
        }
    }

    pub fn table(&self) -> &TableRef {
        self.view().table()
    }

    pub fn merge(&self, payload: &RefreshPayload) -> Self {
        match self {
            ViewState::Rows(s) => ViewState::Rows(s.merge(payload)),
            ViewState::Aggregate(s) => ViewState::Aggregate(s.merge(payload)),
        }
    }
}

impl From<RowViewState> for ViewState {
    fn from(s: RowViewState) -> Self {
        ViewState::Rows(s)
    }
}

impl From<AggregateState> for ViewState {
    fn from(s: AggregateState) -> Self {
        ViewState::Aggregate(s)
    }
}
