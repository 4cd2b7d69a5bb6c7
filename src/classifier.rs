//! A Classifier that recognizes INSERT statement lines in a dump and the table they target.
//!
//! See [`classify`](crate::classify()) as the entry point for classifying a line.

use crate::error::Error;

/// Literal prefix a dump line must start with to count as an INSERT statement.
pub const INSERT_PREFIX: &[u8] = b"INSERT INTO ";

/// How the table token of an INSERT line is turned into a table name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableNameStyle {
    /// The token exactly as written, backticks included.
    Raw,
    /// The token with every backtick removed.
    Unquoted,
}

/// Convenience function to classify a dump line.
///
/// Returns `Ok(None)` for lines that are not INSERT statements and the table name otherwise.
/// `line_number` is 1-based and only used for error reporting.
///
/// ## Example
///
/// ```rust
/// use sql_dump_trim::TableNameStyle;
///
/// let line = b"INSERT INTO `users` VALUES (1,'a');\n";
/// let raw = sql_dump_trim::classify(line, 1, TableNameStyle::Raw).unwrap();
/// assert_eq!(raw.as_deref(), Some("`users`"));
/// let unquoted = sql_dump_trim::classify(line, 1, TableNameStyle::Unquoted).unwrap();
/// assert_eq!(unquoted.as_deref(), Some("users"));
/// ```
pub fn classify(
    line: &[u8],
    line_number: usize,
    style: TableNameStyle,
) -> Result<Option<String>, Error> {
    if !is_insert(line) {
        return Ok(None);
    }
    match table_token(line) {
        Some(token) => Ok(Some(table_name(token, style))),
        None => Err(Error::MalformedInsert {
            line_number,
            line: preview(line),
        }),
    }
}

/// Whether the line starts with [`INSERT_PREFIX`]. Case-sensitive, and shorter lines never match.
pub fn is_insert(line: &[u8]) -> bool {
    line.starts_with(INSERT_PREFIX)
}

/// The third whitespace separated token of the line, if there is one.
pub fn table_token(line: &[u8]) -> Option<&[u8]> {
    line.split(|b| is_whitespace(*b))
        .filter(|token| !token.is_empty())
        .nth(2)
}

fn table_name(token: &[u8], style: TableNameStyle) -> String {
    match style {
        TableNameStyle::Raw => String::from_utf8_lossy(token).into_owned(),
        TableNameStyle::Unquoted => {
            let unquoted: Vec<u8> = token.iter().copied().filter(|b| *b != b'`').collect();
            String::from_utf8_lossy(&unquoted).into_owned()
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

fn preview(line: &[u8]) -> String {
    String::from_utf8_lossy(line).trim().to_string()
}
