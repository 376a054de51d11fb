use tabula_core::{
    data::{ColumnDescriptor, Record, TableRef},
    dialect::Dialect,
    err::Result,
};

use crate::common::metadata::parse_column_row;

/// Retrieves column metadata from a database's information schema
pub trait ColumnSearcher: Send + Sync + 'static {
    const DIALECT: Dialect;

    /// Builds the query listing the columns of the table.
    ///
    /// The query must yield the columns `COLUMN_NAME`, `DATA_TYPE`,
    /// `IS_NULLABLE`, `IS_PRIMARY_KEY`, `IS_FOREIGN_KEY` and `IS_IDENTITY`.
    fn metadata_query(table: &TableRef) -> String;

    /// Parses a row returned by the metadata query
    fn parse_column(row: &Record) -> Result<ColumnDescriptor> {
        parse_column_row(row)
    }
}
