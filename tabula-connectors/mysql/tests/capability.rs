use pretty_assertions::assert_eq;
use tabula_connectors_base::interface::DatabaseCapability;
use tabula_connectors_memory::MemoryExecutor;
use tabula_connectors_mysql::MysqlConnector;
use tabula_core::{
    data::{ColumnDescriptor, TableRef},
    dialect::Dialect,
};

#[tokio::test]
async fn test_mysql_columns() {
    let cols = vec![
        ColumnDescriptor::new("id", "bigint", false, true, false, true),
        ColumnDescriptor::new("email", "varchar", true, false, false, false),
    ];
    let capability =
        MysqlConnector::capability(MemoryExecutor::new().with_columns("users", &cols));

    assert_eq!(capability.dialect(), Dialect::MySql);
    assert_eq!(
        capability
            .columns(&TableRef::new("c", Some("app".into()), None, "users"))
            .await
            .unwrap(),
        cols
    );
    assert!(capability.executor().executed()[0].contains("C.TABLE_SCHEMA = 'app'"));
}

#[tokio::test]
async fn test_mysql_columns_error_is_propagated() {
    let capability = MysqlConnector::capability(
        MemoryExecutor::new().with_error("information_schema", "Access denied"),
    );

    let err = capability
        .columns(&TableRef::minimal("c", "users"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to retrieve columns of \"users\"");
    assert_eq!(err.root_cause().to_string(), "Access denied");
}
