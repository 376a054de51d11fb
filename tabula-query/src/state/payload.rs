use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError};

/// A partial update to a view, as sent by the UI or an assistant.
///
/// Every field is optional and ill-typed fields deserialize as absent, the
/// values are only validated when merged into a view state.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshPayload {
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub limit: Option<u32>,
    #[serde(alias = "selectedColumns")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub selected_columns: Option<Vec<String>>,
    /// An empty string clears the sort
    #[serde(alias = "sortColumn")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub sort_column: Option<String>,
    #[serde(alias = "sortDirection")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub sort_direction: Option<String>,
    /// An empty string clears the filter
    #[serde(alias = "filterField")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub filter_field: Option<String>,
    #[serde(alias = "filterOperator")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub filter_operator: Option<String>,
    /// Any scalar is accepted as the filter value
    #[serde(alias = "filterValue")]
    pub filter_value: Option<Value>,
    #[serde(alias = "addAggregation")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub add_aggregation: Option<AggregationRequest>,
    /// The index of the aggregation to remove
    #[serde(alias = "removeAggregation")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub remove_aggregation: Option<usize>,
    #[serde(alias = "includeCountAll")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub include_count_all: Option<bool>,
}

/// A requested aggregation, validated on merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRequest {
    pub field: String,
    pub function: String,
}

impl AggregationRequest {
    pub fn new(field: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            function: function.into(),
        }
    }
}

impl RefreshPayload {
    /// The filter value as text, if it is a scalar
    pub fn filter_value(&self) -> Option<String> {
        match self.filter_value.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
