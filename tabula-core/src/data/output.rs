use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single row of a result set, keyed by column name
pub type Record = Map<String, Value>;

/// The results of an executed query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryOutput {
    /// The column names in projection order
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
    /// The number of rows returned
    pub row_count: u64,
    /// Wall-clock execution time in milliseconds
    pub elapsed_ms: u64,
}

impl QueryOutput {
    pub fn new(columns: Vec<String>, rows: Vec<Record>, elapsed_ms: u64) -> Self {
        Self {
            columns,
            row_count: rows.len() as u64,
            rows,
            elapsed_ms,
        }
    }

    /// Builds an output from positional row values
    pub fn from_values(columns: Vec<String>, values: Vec<Vec<Value>>, elapsed_ms: u64) -> Self {
        let rows = values
            .into_iter()
            .map(|row| columns.iter().cloned().zip(row.into_iter()).collect())
            .collect();

        Self::new(columns, rows, elapsed_ms)
    }

    /// Gets the string value of the column in the supplied row, if any
    pub fn str_value<'a>(row: &'a Record, col: &str) -> Option<&'a str> {
        row.get(col).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_output_from_values() {
        let output = QueryOutput::from_values(
            vec!["id".into(), "name".into()],
            vec![vec![json!(1), json!("a")], vec![json!(2), json!("b")]],
            5,
        );

        assert_eq!(output.row_count, 2);
        assert_eq!(output.rows[1]["id"], json!(2));
        assert_eq!(QueryOutput::str_value(&output.rows[0], "name"), Some("a"));
        assert_eq!(QueryOutput::str_value(&output.rows[0], "id"), None);
    }
}
