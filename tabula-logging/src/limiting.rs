use std::fmt::{self, Display};

/// Truncates long SQL text when it is written to the log
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxLogLength<'a> {
    limit: Option<usize>,
    sql: &'a str,
}

impl<'a> MaxLogLength<'a> {
    pub fn new(limit: Option<usize>, sql: &'a str) -> Self {
        Self { limit, sql }
    }
}

impl<'a> Display for MaxLogLength<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            Some(limit) if self.sql.chars().count() > limit => {
                let truncated = self.sql.chars().take(limit).collect::<String>();
                write!(f, "{}...", truncated)
            }
            _ => write!(f, "{}", self.sql),
        }
    }
}
