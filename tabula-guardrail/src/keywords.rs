use lazy_static::lazy_static;
use regex::Regex;

/// Keywords which must not appear anywhere outside of quoted text in an
/// accepted statement
pub const DENIED_KEYWORDS: [&str; 23] = [
    "insert",
    "update",
    "delete",
    "merge",
    "create",
    "alter",
    "drop",
    "truncate",
    "grant",
    "revoke",
    "exec",
    "execute",
    "call",
    "do",
    "set",
    "use",
    "begin",
    "commit",
    "rollback",
    "savepoint",
    "vacuum",
    "analyze",
    "replace",
];

lazy_static! {
    static ref LEADING_KEYWORD: Regex = Regex::new(r"(?i)^(select|with)\b").unwrap();
    static ref DENIED: Regex =
        Regex::new(&format!(r"(?i)\b({})\b", DENIED_KEYWORDS.join("|"))).unwrap();
    static ref SELECT_INTO: Regex = Regex::new(r"(?is)\bselect\b.*\binto\b").unwrap();
    static ref LOCKING_READ: Regex = Regex::new(r"(?i)\bfor\s+update\b").unwrap();
}

pub(crate) fn starts_with_query_keyword(masked: &str) -> bool {
    LEADING_KEYWORD.is_match(masked)
}

/// Returns the first denied keyword in the statement, lowercased
pub(crate) fn find_denied_keyword(masked: &str) -> Option<String> {
    DENIED
        .captures(masked)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_lowercase())
}

pub(crate) fn has_select_into(masked: &str) -> bool {
    SELECT_INTO.is_match(masked)
}

pub(crate) fn has_locking_read(masked: &str) -> bool {
    LOCKING_READ.is_match(masked)
}
