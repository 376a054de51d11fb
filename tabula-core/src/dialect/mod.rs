use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::err::{bail, Error, Result};

/// The schema SQL Server resolves unqualified objects against
pub const MSSQL_DEFAULT_SCHEMA: &str = "dbo";

/// The SQL dialects supported by tabula.
///
/// Each variant carries the quoting, qualification and pagination rules of
/// its database. This is the only place where raw identifiers and literals
/// are turned into SQL fragments, callers are expected to only pass identifiers
/// which were confirmed to exist in fetched metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    #[serde(rename = "mssql", alias = "sqlserver")]
    SqlServer,
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "postgres", alias = "postgresql")]
    Postgres,
}

/// How a dialect expresses a row cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStyle {
    /// `SELECT TOP (n) ...`
    LeadingTop,
    /// `... LIMIT n`
    TrailingLimit,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::SqlServer, Dialect::MySql, Dialect::Postgres];

    /// Wraps the identifier in the dialect's quote characters, doubling any
    /// embedded closing quote
    pub fn quote_identifier(&self, name: &str) -> String {
        match self {
            // @see https://learn.microsoft.com/en-us/sql/relational-databases/databases/database-identifiers
            Dialect::SqlServer => format!("[{}]", name.replace(']', "]]")),
            // @see https://dev.mysql.com/doc/refman/8.0/en/identifiers.html
            Dialect::MySql => format!("`{}`", name.replace('`', "``")),
            // @see https://www.postgresql.org/docs/current/sql-syntax-lexical.html#SQL-SYNTAX-IDENTIFIERS
            Dialect::Postgres => format!("\"{}\"", name.replace('"', "\"\"")),
        }
    }

    /// Produces a string literal of the value.
    ///
    /// Embedded quotes are doubled. Backslashes are written so that the
    /// literal ends in the same place whether or not the server treats a
    /// backslash as an escape character.
    pub fn quote_literal(&self, value: &str) -> String {
        let doubled = value.replace('\'', "''");

        if !value.contains('\\') {
            return format!("'{}'", doubled);
        }

        match self {
            // backslash escapes are on unless NO_BACKSLASH_ESCAPES is set
            Dialect::MySql => format!("'{}'", doubled.replace('\\', "\\\\")),
            // escape strings honour backslashes regardless of standard_conforming_strings
            Dialect::Postgres => format!("E'{}'", doubled.replace('\\', "\\\\")),
            // no escape syntax, so each backslash is spliced in as a character
            Dialect::SqlServer => doubled
                .split('\\')
                .map(|part| format!("'{}'", part))
                .collect::<Vec<_>>()
                .join(" + CHAR(92) + "),
        }
    }

    /// Composes the fully scoped reference to the object
    pub fn qualify_name(&self, object: &str, schema: Option<&str>, database: Option<&str>) -> String {
        let schema = schema.filter(|s| !s.is_empty());
        let database = database.filter(|d| !d.is_empty());

        let parts = match self {
            // database and schema are synonyms in mysql
            Dialect::MySql => vec![database.or(schema), Some(object)],
            Dialect::SqlServer => match database {
                Some(db) => vec![
                    Some(db),
                    Some(schema.unwrap_or(MSSQL_DEFAULT_SCHEMA)),
                    Some(object),
                ],
                None => vec![Some(schema.unwrap_or(MSSQL_DEFAULT_SCHEMA)), Some(object)],
            },
            // postgres connections are bound to a single database
            Dialect::Postgres => vec![schema, Some(object)],
        };

        parts
            .into_iter()
            .flatten()
            .map(|p| self.quote_identifier(p))
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn pagination_style(&self) -> PaginationStyle {
        match self {
            Dialect::SqlServer => PaginationStyle::LeadingTop,
            Dialect::MySql | Dialect::Postgres => PaginationStyle::TrailingLimit,
        }
    }

    /// The canonical connector type name of the dialect
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::SqlServer => "mssql",
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_lowercase().as_str() {
            "mssql" | "sqlserver" => Dialect::SqlServer,
            "mysql" => Dialect::MySql,
            "postgres" | "postgresql" => Dialect::Postgres,
            other => bail!("Unknown SQL dialect \"{}\"", other),
        })
    }
}
