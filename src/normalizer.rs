//! A Normalizer that drops the `(6)` precision from TIMESTAMP column definitions.
//!
//! MySQL servers with default settings may refuse `TIMESTAMP(6)`, so dumps taken from newer
//! servers are rewritten to plain `TIMESTAMP`. Only the two exact spellings below are replaced;
//! mixed-case variants such as `Timestamp(6)` are left alone.
//!
//! See [`normalize_timestamps`](crate::normalize_timestamps()) for a stateless entry point and
//! [`TimestampNormalizer`] for the counting variant used by the rewrite pipeline.

use std::borrow::Cow;

use crate::helper;

/// Ordered literal `(pattern, replacement)` pairs.
pub const TIMESTAMP_REPLACEMENTS: [(&[u8], &[u8]); 2] = [
    (b"timestamp(6)", b"timestamp"),
    (b"TIMESTAMP(6)", b"TIMESTAMP"),
];

const GATE: &[u8] = b"timestamp(6)";

/// Convenience function to normalize timestamp precision on one line.
///
/// ## Example
///
/// ```rust
/// let line = b"  `created_at` TIMESTAMP(6) NOT NULL,\n";
/// let result = sql_dump_trim::normalize_timestamps(line);
/// assert_eq!(&*result, b"  `created_at` TIMESTAMP NOT NULL,\n");
/// ```
pub fn normalize_timestamps(line: &[u8]) -> Cow<'_, [u8]> {
    let mut normalized = Cow::Borrowed(line);
    for (pattern, replacement) in TIMESTAMP_REPLACEMENTS {
        let replaced = match helper::replace_all(&normalized, pattern, replacement) {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };
        if let Some(replaced) = replaced {
            normalized = Cow::Owned(replaced);
        }
    }
    normalized
}

/// Whether the line could hold a timestamp precision annotation in any letter case.
pub fn needs_normalization(line: &[u8]) -> bool {
    line.len() >= GATE.len()
        && line
            .windows(GATE.len())
            .any(|window| window.eq_ignore_ascii_case(GATE))
}

/// Normalizer that counts the lines it was applied to.
#[derive(Debug, Default)]
pub struct TimestampNormalizer {
    lines_modified: usize,
}

impl TimestampNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a line when [`needs_normalization`] says so.
    ///
    /// The counter goes up once per line that passes the check, whatever the number of
    /// replacements, and even when the only match has a case that is not replaced.
    pub fn normalize<'a>(&mut self, line: &'a [u8]) -> Cow<'a, [u8]> {
        if !needs_normalization(line) {
            return Cow::Borrowed(line);
        }
        self.lines_modified += 1;
        normalize_timestamps(line)
    }

    /// Number of lines the substitution was invoked on.
    pub fn lines_modified(&self) -> usize {
        self.lines_modified
    }
}
