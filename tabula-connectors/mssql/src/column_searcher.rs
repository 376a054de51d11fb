use tabula_connectors_base::interface::ColumnSearcher;
use tabula_core::{
    data::TableRef,
    dialect::{Dialect, MSSQL_DEFAULT_SCHEMA},
};

/// Reads column metadata from SQL Server's INFORMATION_SCHEMA views
pub struct MssqlColumnSearcher;

impl ColumnSearcher for MssqlColumnSearcher {
    const DIALECT: Dialect = Dialect::SqlServer;

    fn metadata_query(table: &TableRef) -> String {
        let d = Self::DIALECT;
        // the information schema views are scoped to the database they are queried from
        let catalog = match table.database().filter(|db| !db.is_empty()) {
            Some(db) => format!("{}.", d.quote_identifier(db)),
            None => "".into(),
        };
        let schema = table
            .schema()
            .filter(|s| !s.is_empty())
            .unwrap_or(MSSQL_DEFAULT_SCHEMA);

        format!(
            r#"
                SELECT
                    C.COLUMN_NAME,
                    C.DATA_TYPE,
                    C.IS_NULLABLE,
                    (
                        SELECT COUNT(1)
                        FROM {catalog}INFORMATION_SCHEMA.KEY_COLUMN_USAGE U
                        INNER JOIN {catalog}INFORMATION_SCHEMA.TABLE_CONSTRAINTS S
                            ON U.CONSTRAINT_SCHEMA = S.CONSTRAINT_SCHEMA AND U.CONSTRAINT_NAME = S.CONSTRAINT_NAME
                        WHERE S.CONSTRAINT_TYPE = 'PRIMARY KEY'
                        AND U.TABLE_SCHEMA = C.TABLE_SCHEMA
                        AND U.TABLE_NAME = C.TABLE_NAME
                        AND U.COLUMN_NAME = C.COLUMN_NAME
                    ) AS IS_PRIMARY_KEY,
                    (
                        SELECT COUNT(1)
                        FROM {catalog}INFORMATION_SCHEMA.KEY_COLUMN_USAGE U
                        INNER JOIN {catalog}INFORMATION_SCHEMA.TABLE_CONSTRAINTS S
                            ON U.CONSTRAINT_SCHEMA = S.CONSTRAINT_SCHEMA AND U.CONSTRAINT_NAME = S.CONSTRAINT_NAME
                        WHERE S.CONSTRAINT_TYPE = 'FOREIGN KEY'
                        AND U.TABLE_SCHEMA = C.TABLE_SCHEMA
                        AND U.TABLE_NAME = C.TABLE_NAME
                        AND U.COLUMN_NAME = C.COLUMN_NAME
                    ) AS IS_FOREIGN_KEY,
                    COLUMNPROPERTY(
                        OBJECT_ID(QUOTENAME(C.TABLE_CATALOG) + '.' + QUOTENAME(C.TABLE_SCHEMA) + '.' + QUOTENAME(C.TABLE_NAME)),
                        C.COLUMN_NAME,
                        'IsIdentity'
                    ) AS IS_IDENTITY
                FROM {catalog}INFORMATION_SCHEMA.COLUMNS C
                WHERE C.TABLE_SCHEMA = {schema}
                AND C.TABLE_NAME = {table}
                ORDER BY C.ORDINAL_POSITION
            "#,
            catalog = catalog,
            schema = d.quote_literal(schema),
            table = d.quote_literal(&table.table_name),
        )
    }
}
