use crate::mask::{is_executable_comment, Convention};

/// Strips any leading whitespace and comments from the statement, reading
/// comments the way the convention does.
///
/// An unterminated block comment swallows the remainder of the text. The
/// text is expected to be masked, so quotes never hide a comment marker.
pub(crate) fn strip_leading_comments(mut sql: &str, convention: Convention) -> &str {
    loop {
        let trimmed = sql.trim_start();

        let rest = if let Some(comment) = trimmed.strip_prefix("--") {
            skip_line(comment)
        } else if let Some(comment) = trimmed
            .strip_prefix('#')
            .filter(|_| convention.is_mysql_like())
        {
            skip_line(comment)
        } else if convention.is_mysql_like() && is_executable_comment(&leading_chars(trimmed)) {
            trimmed
        } else if let Some(comment) = trimmed.strip_prefix("/*") {
            match block_comment_end(comment, convention.nests_comments()) {
                Some(end) => &comment[end..],
                None => "",
            }
        } else {
            trimmed
        };

        if rest.len() == sql.len() {
            return rest;
        }

        sql = rest;
    }
}

fn skip_line(comment: &str) -> &str {
    match comment.find('\n') {
        Some(end) => &comment[end + 1..],
        None => "",
    }
}

fn leading_chars(sql: &str) -> Vec<char> {
    sql.chars().take(4).collect()
}

/// Returns the offset just past the `*/` which closes a block comment, given
/// the text after its opening `/*`
fn block_comment_end(comment: &str, nests: bool) -> Option<usize> {
    let bytes = comment.as_bytes();
    let mut depth = 1;
    let mut i = 0;

    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'*', b'/') => {
                i += 2;
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            (b'/', b'*') if nests => {
                i += 2;
                depth += 1;
            }
            _ => i += 1,
        }
    }

    None
}
