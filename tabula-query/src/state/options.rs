use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabula_core::err::{bail, Error, Result};

/// The row caps offered by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RowLimit(u32);

impl RowLimit {
    pub const ALLOWED: [u32; 4] = [20, 100, 250, 1000];

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for RowLimit {
    fn default() -> Self {
        Self(100)
    }
}

impl TryFrom<u32> for RowLimit {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        if !Self::ALLOWED.contains(&value) {
            bail!(
                "Row limit {} is not one of {:?}",
                value,
                Self::ALLOWED
            );
        }

        Ok(Self(value))
    }
}

impl From<RowLimit> for u32 {
    fn from(limit: RowLimit) -> Self {
        limit.0
    }
}

impl fmt::Display for RowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    None,
}

impl SortDirection {
    /// The ORDER BY keyword, if the direction sorts at all
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            SortDirection::Asc => Some("ASC"),
            SortDirection::Desc => Some("DESC"),
            SortDirection::None => None,
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            "none" => SortDirection::None,
            _ => bail!("Unknown sort direction \"{}\"", s),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "like")]
    Like,
}

impl FilterOperator {
    pub fn sql(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Lt => "<",
            FilterOperator::Gt => ">",
            FilterOperator::Like => "LIKE",
        }
    }
}

impl FromStr for FilterOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_lowercase().as_str() {
            "=" => FilterOperator::Eq,
            "<" => FilterOperator::Lt,
            ">" => FilterOperator::Gt,
            "like" => FilterOperator::Like,
            _ => bail!("Unknown filter operator \"{}\"", s),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFunction {
    /// Groups by the column
    None,
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::None => "none",
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
        }
    }

    /// The SQL function name, none for grouping columns
    pub fn sql(&self) -> Option<&'static str> {
        match self {
            AggregateFunction::None => None,
            AggregateFunction::Count => Some("COUNT"),
            AggregateFunction::Sum => Some("SUM"),
            AggregateFunction::Avg => Some("AVG"),
            AggregateFunction::Min => Some("MIN"),
            AggregateFunction::Max => Some("MAX"),
        }
    }
}

impl FromStr for AggregateFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_lowercase().as_str() {
            "none" => AggregateFunction::None,
            "count" => AggregateFunction::Count,
            "sum" => AggregateFunction::Sum,
            "avg" => AggregateFunction::Avg,
            "min" => AggregateFunction::Min,
            "max" => AggregateFunction::Max,
            _ => bail!("Unknown aggregate function \"{}\"", s),
        })
    }
}

/// A column of an aggregate view, either grouped or aggregated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aggregation {
    pub field: String,
    pub function: AggregateFunction,
}

impl Aggregation {
    pub fn new(field: impl Into<String>, function: AggregateFunction) -> Self {
        Self {
            field: field.into(),
            function,
        }
    }

    /// The name of the column this aggregation yields in the result set
    pub fn output_name(&self) -> String {
        match self.function {
            AggregateFunction::None => self.field.clone(),
            func => format!(
                "{}_{}",
                func.name(),
                self.field
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                    .collect::<String>()
            ),
        }
    }
}
