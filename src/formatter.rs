//! A Formatter that puts each row of a multi-row INSERT statement on its own line.
//!
//! This is a literal substring replacement, not a SQL parser: a `),(` inside a quoted string
//! value is split as well.
//!
//! See [`split_rows`](crate::split_rows()) as the entry point for formatting an INSERT line.

use std::borrow::Cow;

use crate::helper;

/// Separator between two value groups of an extended INSERT.
pub const ROW_SEPARATOR: &[u8] = b"),(";
/// What [`ROW_SEPARATOR`] becomes once rows are split.
pub const SPLIT_ROW_SEPARATOR: &[u8] = b"),\n\t(";

/// Convenience function to split the rows of an INSERT line.
///
/// ## Example
///
/// ```rust
/// let line = b"INSERT INTO users VALUES (1,'a'),(2,'b');\n";
/// let result = sql_dump_trim::split_rows(line);
/// assert_eq!(&*result, b"INSERT INTO users VALUES (1,'a'),\n\t(2,'b');\n");
/// ```
pub fn split_rows(line: &[u8]) -> Cow<'_, [u8]> {
    helper::replace_all(line, ROW_SEPARATOR, SPLIT_ROW_SEPARATOR)
}
