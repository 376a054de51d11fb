use crate::Rejection;

/// Lexical conventions the masker applies to quoted text and comments.
///
/// The dialect of the statement is unknown, so statements are masked under
/// each convention and must pass the checks under all of them. Each
/// convention is the lexer of a family of servers:
///
/// * `Standard` is SQL Server, and ANSI text in general.
/// * `Extended` is PostgreSQL.
/// * `Flat` is MySQL with `NO_BACKSLASH_ESCAPES`.
/// * `Backslash` is MySQL and MariaDB by default.
///
/// Text which lexes differently under two conventions is only accepted when
/// every reading passes. That rejects some valid text, such as `$$it's$$`
/// (an unterminated quote outside of PostgreSQL) or `'C:\'` (an unterminated
/// quote under backslash escapes). Literals containing a backslash must be
/// written in a form every convention ends at the same quote, which is what
/// `Dialect::quote_literal` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Convention {
    /// Quotes are escaped by doubling them, block comments nest
    Standard,
    /// `Standard` plus `$tag$` bodies and `E'...'` strings taking backslash escapes
    Extended,
    /// Quotes are escaped by doubling them, a block comment ends at the first
    /// `*/`, `#` starts a line comment and `/*!` text is code
    Flat,
    /// `Flat` where string quotes may also be escaped by a backslash
    Backslash,
}

impl Convention {
    pub(crate) const ALL: [Convention; 4] = [
        Convention::Standard,
        Convention::Extended,
        Convention::Flat,
        Convention::Backslash,
    ];

    pub(crate) fn nests_comments(&self) -> bool {
        matches!(self, Convention::Standard | Convention::Extended)
    }

    /// `#` line comments and `/*!` executable comments
    pub(crate) fn is_mysql_like(&self) -> bool {
        matches!(self, Convention::Flat | Convention::Backslash)
    }

    /// `$tag$` bodies and `E'...'` escape strings
    fn is_postgres_like(&self) -> bool {
        *self == Convention::Extended
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single,
    /// `E'...'`
    EscapeString,
    Double,
    Backtick,
    Bracket,
}

impl Quote {
    fn opened_by(c: char) -> Option<Self> {
        Some(match c {
            '\'' => Quote::Single,
            '"' => Quote::Double,
            '`' => Quote::Backtick,
            '[' => Quote::Bracket,
            _ => return None,
        })
    }

    fn close(&self) -> char {
        match self {
            Quote::Single | Quote::EscapeString => '\'',
            Quote::Double => '"',
            Quote::Backtick => '`',
            Quote::Bracket => ']',
        }
    }

    fn backslash_escapes(&self, convention: Convention) -> bool {
        match self {
            Quote::EscapeString => true,
            Quote::Single | Quote::Double => convention == Convention::Backslash,
            Quote::Backtick | Quote::Bracket => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Quoted(Quote),
    /// The next char is the second half of an escape sequence
    Escaped(Quote),
    LineComment,
    /// Depth is above one only for conventions that nest comments
    BlockComment { depth: usize },
    /// Inside a dollar-quoted body, the delimiter is `chars[start..start + len]`
    DollarBody { start: usize, len: usize },
}

/// Replaces the interior of every quoted region with blanks, keeping the
/// quote characters and every position outside of quotes intact.
///
/// Comments and dollar-quoted bodies are left visible, only their effect of
/// hiding quote characters is honoured. That way any text which the database
/// might read as code is always visible to the subsequent scans.
pub(crate) fn mask(sql: &str, convention: Convention) -> Result<String, Rejection> {
    let chars = sql.chars().collect::<Vec<char>>();
    let mut masked = String::with_capacity(sql.len());
    let mut state = State::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let mut consumed = 1;

        match (state, c, next) {
            (State::Code, '-', Some('-')) => {
                masked.push_str("--");
                consumed = 2;
                state = State::LineComment;
            }
            (State::Code, '/', Some('*'))
                if convention.is_mysql_like() && is_executable_comment(&chars[i..]) =>
            {
                masked.push_str("/*");
                consumed = 2;
            }
            (State::Code, '/', Some('*')) => {
                masked.push_str("/*");
                consumed = 2;
                state = State::BlockComment { depth: 1 };
            }
            (State::Code, '#', _) if convention.is_mysql_like() => {
                masked.push(c);
                state = State::LineComment;
            }
            (State::Code, '$', _)
                if convention.is_postgres_like() && !follows_identifier(&chars, i) =>
            {
                match dollar_delimiter(&chars[i..]) {
                    Some(len) => {
                        masked.extend(&chars[i..i + len]);
                        consumed = len;
                        state = State::DollarBody { start: i, len };
                    }
                    None => masked.push(c),
                }
            }
            (State::Code, 'E' | 'e', Some('\''))
                if convention.is_postgres_like() && !follows_identifier(&chars, i) =>
            {
                masked.push(c);
                masked.push('\'');
                consumed = 2;
                state = State::Quoted(Quote::EscapeString);
            }
            (State::Code, c, _) => {
                if let Some(quote) = Quote::opened_by(c) {
                    state = State::Quoted(quote);
                }
                masked.push(c);
            }
            (State::LineComment, c, _) => {
                masked.push(c);
                if c == '\n' {
                    state = State::Code;
                }
            }
            (State::BlockComment { depth }, '/', Some('*')) if convention.nests_comments() => {
                masked.push_str("/*");
                consumed = 2;
                state = State::BlockComment { depth: depth + 1 };
            }
            (State::BlockComment { depth }, '*', Some('/')) => {
                masked.push_str("*/");
                consumed = 2;
                state = match depth {
                    1 => State::Code,
                    _ => State::BlockComment { depth: depth - 1 },
                };
            }
            (State::BlockComment { .. }, c, _) => masked.push(c),
            (State::DollarBody { start, len }, '$', _)
                if chars[i..].starts_with(&chars[start..start + len]) =>
            {
                masked.extend(&chars[start..start + len]);
                consumed = len;
                state = State::Code;
            }
            (State::DollarBody { .. }, c, _) => masked.push(c),
            (State::Quoted(quote), '\\', Some(_))
                if quote.backslash_escapes(convention) =>
            {
                masked.push(' ');
                state = State::Escaped(quote);
            }
            (State::Quoted(quote), c, Some(n)) if c == quote.close() && n == quote.close() => {
                masked.push(' ');
                state = State::Escaped(quote);
            }
            (State::Quoted(quote), c, _) if c == quote.close() => {
                masked.push(c);
                state = State::Code;
            }
            (State::Quoted(_), _, _) => masked.push(' '),
            (State::Escaped(quote), _, _) => {
                masked.push(' ');
                state = State::Quoted(quote);
            }
        }

        i += consumed;
    }

    match state {
        State::Quoted(_) | State::Escaped(_) => Err(Rejection::UnterminatedQuote),
        _ => Ok(masked),
    }
}

/// MySQL runs the body of `/*! ... */` and MariaDB that of `/*M! ... */`
pub(crate) fn is_executable_comment(chars: &[char]) -> bool {
    matches!(chars, ['/', '*', '!', ..] | ['/', '*', 'M', '!', ..])
}

/// `$` continues an identifier such as `a$b` rather than opening a body
fn follows_identifier(chars: &[char], i: usize) -> bool {
    i > 0 && {
        let prev = chars[i - 1];
        prev.is_alphanumeric() || prev == '_' || prev == '$'
    }
}

/// Returns the length of the `$tag$` delimiter at the start of the slice
fn dollar_delimiter(chars: &[char]) -> Option<usize> {
    let mut len = 1;

    while let Some(&c) = chars.get(len) {
        match c {
            '$' => return Some(len + 1),
            c if c.is_ascii_digit() && len == 1 => return None,
            c if c.is_alphanumeric() || c == '_' => len += 1,
            _ => return None,
        }
    }

    None
}
