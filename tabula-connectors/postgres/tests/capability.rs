use pretty_assertions::assert_eq;
use tabula_connectors_base::interface::DatabaseCapability;
use tabula_connectors_memory::MemoryExecutor;
use tabula_connectors_postgres::PostgresConnector;
use tabula_core::{
    data::{ColumnDescriptor, TableRef},
    dialect::Dialect,
};

#[tokio::test]
async fn test_postgres_columns() {
    let cols = vec![
        ColumnDescriptor::new("id", "integer", false, true, false, true),
        ColumnDescriptor::new("team_id", "integer", true, false, true, false),
    ];
    let capability =
        PostgresConnector::capability(MemoryExecutor::new().with_columns("members", &cols));

    assert_eq!(capability.dialect(), Dialect::Postgres);
    assert_eq!(
        capability
            .columns(&TableRef::new("c", None, Some("public".into()), "members"))
            .await
            .unwrap(),
        cols
    );
}

#[tokio::test]
async fn test_postgres_unknown_table_has_no_columns() {
    let capability = PostgresConnector::capability(
        MemoryExecutor::new().with_columns("members", &[]),
    );

    assert_eq!(
        capability
            .columns(&TableRef::minimal("c", "members"))
            .await
            .unwrap(),
        Vec::<ColumnDescriptor>::new()
    );
}
