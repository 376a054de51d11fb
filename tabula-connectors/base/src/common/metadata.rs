use serde_json::Value;
use tabula_core::{
    data::{ColumnDescriptor, QueryOutput, Record},
    err::{bail, Context, Result},
};
use tabula_logging::warn;

/// Parses a row of a metadata query into a column descriptor
pub fn parse_column_row(row: &Record) -> Result<ColumnDescriptor> {
    Ok(ColumnDescriptor::new(
        text(row, "COLUMN_NAME")?,
        text(row, "DATA_TYPE")?,
        flag(row, "IS_NULLABLE")?,
        flag(row, "IS_PRIMARY_KEY")?,
        flag(row, "IS_FOREIGN_KEY")?,
        flag(row, "IS_IDENTITY")?,
    ))
}

/// Parses every row of the output, rows which fail to parse are skipped
pub fn parse_columns(
    output: &QueryOutput,
    parse: impl Fn(&Record) -> Result<ColumnDescriptor>,
) -> Vec<ColumnDescriptor> {
    output
        .rows
        .iter()
        .filter_map(|row| {
            parse(row)
                .map_err(|e| {
                    warn!(
                        "Ignoring column \"{}\": {:?}",
                        QueryOutput::str_value(row, "COLUMN_NAME").unwrap_or("<unknown>"),
                        e
                    )
                })
                .ok()
        })
        .collect()
}

fn text(row: &Record, key: &str) -> Result<String> {
    match row.get(key).context(key.to_string())? {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        other => bail!("Expected {} to be a non-empty string, found {}", key, other),
    }
}

/// Reads a boolean-like metadata value, null is false
fn flag(row: &Record, key: &str) -> Result<bool> {
    Ok(match row.get(key).context(key.to_string())? {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().context(key.to_string())? != 0.0,
        Value::String(s) => match s.trim().to_uppercase().as_str() {
            "YES" | "Y" | "TRUE" | "T" | "1" => true,
            "NO" | "N" | "FALSE" | "F" | "0" | "" => false,
            _ => bail!("Unexpected value \"{}\" for {}", s, key),
        },
        other => bail!("Unexpected value {} for {}", other, key),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    use pretty_assertions::assert_eq;

    fn row(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_parse_column_row() {
        let col = parse_column_row(&row(json!({
            "COLUMN_NAME": "id",
            "DATA_TYPE": "int",
            "IS_NULLABLE": "NO",
            "IS_PRIMARY_KEY": 1,
            "IS_FOREIGN_KEY": false,
            "IS_IDENTITY": null
        })))
        .unwrap();

        assert_eq!(col, ColumnDescriptor::new("id", "int", false, true, false, false));
    }

    #[test]
    fn test_parse_column_row_flag_variants() {
        let col = parse_column_row(&row(json!({
            "COLUMN_NAME": "name",
            "DATA_TYPE": "varchar",
            "IS_NULLABLE": "YES",
            "IS_PRIMARY_KEY": "0",
            "IS_FOREIGN_KEY": "t",
            "IS_IDENTITY": 1.0
        })))
        .unwrap();

        assert_eq!(col, ColumnDescriptor::new("name", "varchar", true, false, true, true));
    }

    #[test]
    fn test_parse_column_row_invalid() {
        assert!(parse_column_row(&row(json!({"COLUMN_NAME": "id"}))).is_err());
        assert!(parse_column_row(&row(json!({
            "COLUMN_NAME": "",
            "DATA_TYPE": "int",
            "IS_NULLABLE": "NO",
            "IS_PRIMARY_KEY": 0,
            "IS_FOREIGN_KEY": 0,
            "IS_IDENTITY": 0
        })))
        .is_err());
        assert!(parse_column_row(&row(json!({
            "COLUMN_NAME": "id",
            "DATA_TYPE": "int",
            "IS_NULLABLE": "maybe",
            "IS_PRIMARY_KEY": 0,
            "IS_FOREIGN_KEY": 0,
            "IS_IDENTITY": 0
        })))
        .is_err());
    }

    #[test]
    fn test_parse_columns_skips_invalid_rows() {
        let output = QueryOutput::new(
            vec!["COLUMN_NAME".into(), "DATA_TYPE".into()],
            vec![
                row(json!({
                    "COLUMN_NAME": "id",
                    "DATA_TYPE": "int",
                    "IS_NULLABLE": "NO",
                    "IS_PRIMARY_KEY": 1,
                    "IS_FOREIGN_KEY": 0,
                    "IS_IDENTITY": 1
                })),
                row(json!({"COLUMN_NAME": "broken"})),
            ],
            1,
        );

        assert_eq!(
            parse_columns(&output, parse_column_row),
            vec![ColumnDescriptor::new("id", "int", false, true, false, true)]
        );
    }
}
