use tabula_connectors_base::interface::ColumnSearcher;
use tabula_core::{data::TableRef, dialect::Dialect};

/// Reads column metadata from MySQL's information_schema
pub struct MysqlColumnSearcher;

impl ColumnSearcher for MysqlColumnSearcher {
    const DIALECT: Dialect = Dialect::MySql;

    fn metadata_query(table: &TableRef) -> String {
        let d = Self::DIALECT;
        // databases and schemas are synonyms in mysql
        let schema = match table
            .database()
            .filter(|db| !db.is_empty())
            .or_else(|| table.schema().filter(|s| !s.is_empty()))
        {
            Some(db) => d.quote_literal(db),
            None => "DATABASE()".into(),
        };

        format!(
            r#"
                SELECT
                    C.COLUMN_NAME,
                    C.DATA_TYPE,
                    C.IS_NULLABLE,
                    C.COLUMN_KEY = 'PRI' AS IS_PRIMARY_KEY,
                    EXISTS (
                        SELECT 1
                        FROM information_schema.KEY_COLUMN_USAGE U
                        WHERE U.TABLE_SCHEMA = C.TABLE_SCHEMA
                        AND U.TABLE_NAME = C.TABLE_NAME
                        AND U.COLUMN_NAME = C.COLUMN_NAME
                        AND U.REFERENCED_TABLE_NAME IS NOT NULL
                    ) AS IS_FOREIGN_KEY,
                    C.EXTRA LIKE '%auto_increment%' AS IS_IDENTITY
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_query_current_database() {
        let sql = MysqlColumnSearcher::metadata_query(&TableRef::minimal("c", "orders"));

        assert!(sql.contains("WHERE C.TABLE_SCHEMA = DATABASE()"));
        assert!(sql.contains("AND C.TABLE_NAME = 'orders'"));
    }

    #[test]
    fn test_metadata_query_prefers_database() {
        let sql = MysqlColumnSearcher::metadata_query(&TableRef::new(
            "c",
            Some("shop".into()),
            Some("ignored".into()),
            "orders",
        ));
        assert!(sql.contains("WHERE C.TABLE_SCHEMA = 'shop'"));

        let sql = MysqlColumnSearcher::metadata_query(&TableRef::new(
            "c",
            None,
            Some("shop".into()),
            "orders",
        ));
        assert!(sql.contains("WHERE C.TABLE_SCHEMA = 'shop'"));
    }
}
