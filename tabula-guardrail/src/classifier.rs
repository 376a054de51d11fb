use std::fmt;

use serde::Serialize;
use serde_with::SerializeDisplay;
use tabula_logging::debug;

use crate::{
    comments::strip_leading_comments,
    keywords::{find_denied_keyword, has_locking_read, has_select_into, starts_with_query_keyword},
    mask::{mask, Convention},
};

/// The reason a statement was refused
#[derive(Debug, Clone, PartialEq, Eq, SerializeDisplay)]
pub enum Rejection {
    Empty,
    UnterminatedQuote,
    MultipleStatements,
    NotSelect,
    /// Holds the lower-cased keyword
    ForbiddenKeyword(String),
    SelectInto,
    LockingRead,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty"),
            Rejection::UnterminatedQuote => write!(f, "unterminated quoted region"),
            Rejection::MultipleStatements => write!(f, "multiple statements"),
            Rejection::NotSelect => write!(f, "not a SELECT statement"),
            Rejection::ForbiddenKeyword(kw) => write!(f, "forbidden keyword \"{}\"", kw),
            Rejection::SelectInto => write!(f, "SELECT ... INTO is not allowed"),
            Rejection::LockingRead => write!(f, "FOR UPDATE is not allowed"),
        }
    }
}

impl std::error::Error for Rejection {}

/// The verdict on a single statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_safe: bool,
    pub reason: Option<Rejection>,
}

impl Classification {
    pub fn safe() -> Self {
        Self {
            is_safe: true,
            reason: None,
        }
    }

    pub fn rejected(reason: Rejection) -> Self {
        Self {
            is_safe: false,
            reason: Some(reason),
        }
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self.reason {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }
}

impl From<Result<(), Rejection>> for Classification {
    fn from(res: Result<(), Rejection>) -> Self {
        match res {
            Ok(()) => Self::safe(),
            Err(reason) => Self::rejected(reason),
        }
    }
}

/// Decides whether the text is a single, read-only SELECT statement.
///
/// Any text which cannot be confidently accepted is rejected.
pub fn classify(sql: &str) -> Classification {
    let classification = Classification::from(check(sql));

    match &classification.reason {
        Some(reason) => debug!("Rejected statement: {}", reason),
        None => debug!("Accepted statement"),
    }

    classification
}

fn check(sql: &str) -> Result<(), Rejection> {
    if sql.trim().is_empty() {
        return Err(Rejection::Empty);
    }

    for convention in Convention::ALL {
        let masked = mask(sql, convention)?;
        let statement = strip_leading_comments(&masked, convention);

        if statement.trim().is_empty() {
            return Err(Rejection::Empty);
        }

        check_masked(statement)?;
    }

    Ok(())
}

fn check_masked(masked: &str) -> Result<(), Rejection> {
    if let Some((_, rest)) = masked.split_once(';') {
        if !rest.trim().is_empty() {
            return Err(Rejection::MultipleStatements);
        }
    }

    if has_select_into(masked) {
        return Err(Rejection::SelectInto);
    }

    if has_locking_read(masked) {
        return Err(Rejection::LockingRead);
    }

    if let Some(keyword) = find_denied_keyword(masked) {
        return Err(Rejection::ForbiddenKeyword(keyword));
    }

    if !starts_with_query_keyword(masked.trim()) {
        return Err(Rejection::NotSelect);
    }

    Ok(())
}
