use tabula_connectors_base::interface::ColumnSearcher;
use tabula_core::{data::TableRef, dialect::Dialect};

/// Reads column metadata from PostgreSQL's information_schema.
///
/// The connection is bound to a single database so only the schema
/// scopes the lookup.
pub struct PostgresColumnSearcher;

impl ColumnSearcher for PostgresColumnSearcher {
    const DIALECT: Dialect = Dialect::Postgres;

    fn metadata_query(table: &TableRef) -> String {
        let d = Self::DIALECT;
        let schema = match table.schema().filter(|s| !s.is_empty()) {
            Some(schema) => d.quote_literal(schema),
            None => "current_schema()".into(),
        };

        format!(
            r#"
                SELECT
                    C.COLUMN_NAME AS "COLUMN_NAME",
                    C.DATA_TYPE AS "DATA_TYPE",
                    C.IS_NULLABLE AS "IS_NULLABLE",
                    EXISTS (
                        SELECT 1
                        FROM information_schema.TABLE_CONSTRAINTS S
                        INNER JOIN information_schema.KEY_COLUMN_USAGE U
                            ON U.CONSTRAINT_SCHEMA = S.CONSTRAINT_SCHEMA AND U.CONSTRAINT_NAME = S.CONSTRAINT_NAME
                        WHERE S.CONSTRAINT_TYPE = 'PRIMARY KEY'
                        AND U.TABLE_SCHEMA = C.TABLE_SCHEMA
                        AND U.TABLE_NAME = C.TABLE_NAME
                        AND U.COLUMN_NAME = C.COLUMN_NAME
                    ) AS "IS_PRIMARY_KEY",
                    EXISTS (
                        SELECT 1
                        FROM information_schema.TABLE_CONSTRAINTS S
                        INNER JOIN information_schema.KEY_COLUMN_USAGE U
                            ON U.CONSTRAINT_SCHEMA = S.CONSTRAINT_SCHEMA AND U.CONSTRAINT_NAME = S.CONSTRAINT_NAME
                        WHERE S.CONSTRAINT_TYPE = 'FOREIGN KEY'
                        AND U.TABLE_SCHEMA = C.TABLE_SCHEMA
                        AND U.TABLE_NAME = C.TABLE_NAME
                        AND U.COLUMN_NAME = C.COLUMN_NAME
                    ) AS "IS_FOREIGN_KEY",
                    (C.IS_IDENTITY = 'YES' OR COALESCE(C.COLUMN_DEFAULT, '') LIKE 'nextval(%') AS "IS_IDENTITY"
                FROM information_schema.COLUMNS C
                WHERE C.TABLE_SCHEMA = {schema}
                AND C.TABLE_NAME = {table}
                ORDER BY C.ORDINAL_POSITION
            "#,
            schema = schema,
            table = d.quote_literal(&table.table_name),
        )
    }
}
