use tabula_connectors_base::interface::DatabaseCapability;
use tabula_core::{
    config::ViewDefaults,
    data::{QueryOutput, TableRef},
    err::{ensure, Context, Result},
};
use tabula_logging::{debug, info, MaxLogLength};
use tabula_query::{RefreshPayload, RowLimit, ViewKind, ViewState};

use super::ExecutionFailure;

/// An interactive view over a table.
///
/// The view only ever changes through refresh payloads merged into its state,
/// the SQL it runs is always synthesized from that state.
pub struct BrowseSession<'a> {
    capability: &'a dyn DatabaseCapability,
    state: ViewState,
    log_length: Option<usize>,
}

impl<'a> BrowseSession<'a> {
    /// Opens a view over the table using its column metadata
    pub async fn open(
        capability: &'a dyn DatabaseCapability,
        table: TableRef,
        kind: ViewKind,
        defaults: &ViewDefaults,
    ) -> Result<BrowseSession<'a>> {
        let columns = capability.columns(&table).await?;
        ensure!(
            !columns.is_empty(),
            "Could not find any columns of table \"{}\"",
            table.table_name
        );

        let limit = RowLimit::try_from(defaults.default_limit)
            .context("Invalid default row limit")?;

        info!(
            "Opened {:?} view of \"{}\" with {} columns",
            kind,
            table.table_name,
            columns.len()
        );

        Ok(Self::from_state(
            capability,
            ViewState::open(kind, table, &columns).with_limit(limit),
        ))
    }

    pub fn from_state(capability: &'a dyn DatabaseCapability, state: ViewState) -> Self {
        Self {
            capability,
            state,
            log_length: None,
        }
    }

    pub fn with_log_length(mut self, log_length: Option<usize>) -> Self {
        self.log_length = log_length;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The SQL of the current state in the dialect of the database
    pub fn sql(&self) -> String {
        self.state.synthesize(self.capability.dialect())
    }

    /// Merges the payload into the current state
    pub fn apply(&mut self, payload: &RefreshPayload) {
        self.state = self.state.merge(payload);
        debug!("View state after refresh: {:?}", self.state);
    }

    /// Runs the query of the current state
    pub async fn fetch(&self) -> Result<QueryOutput> {
        let sql = self.sql();
        info!(
            "Fetching view of \"{}\": {}",
            self.state.table().table_name,
            MaxLogLength::new(self.log_length, &sql)
        );

        match self.capability.execute(&sql).await {
            Ok(output) => Ok(output),
            Err(err) => Err(ExecutionFailure::new(sql, Some(self.state.clone()), err).into()),
        }
    }

    /// Applies the payload and runs the resulting query
    pub async fn refresh(&mut self, payload: &RefreshPayload) -> Result<QueryOutput> {
        self.apply(payload);
        self.fetch().await
    }
}
