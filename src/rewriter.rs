//! A Rewriter that copies a dump line by line, normalizing timestamps, splitting INSERT rows
//! onto their own lines and dropping the INSERT statements of excluded tables.
//!
//! See [`rewrite`](crate::rewrite()) as the entry point for rewriting a stream and
//! [`rewrite_file`](crate::rewrite_file()) for files on disk.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::classifier::{self, TableNameStyle};
use crate::error::Error;
use crate::formatter;
use crate::normalizer::TimestampNormalizer;

/// Convenience function to rewrite a dump.
///
/// ## Example
///
/// ```rust
/// use sql_dump_trim::RewriteOptions;
///
/// let dump = "INSERT INTO users VALUES (1,'a'),(2,'b');\nINSERT INTO `logs` VALUES (1);\n";
/// let mut output = Vec::new();
/// let options = RewriteOptions::new().with_excluded_tables(vec!["logs".into()]);
/// let summary = sql_dump_trim::rewrite(dump.as_bytes(), &mut output, &options).unwrap();
/// assert_eq!(output, b"INSERT INTO users VALUES (1,'a'),\n\t(2,'b');\n");
/// assert_eq!(summary.lines_excluded, 1);
/// ```
pub fn rewrite<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    options: &RewriteOptions,
) -> Result<RewriteSummary, Error> {
    rewrite_with_notices(reader, writer, options, |_| {})
}

/// Same as [`rewrite`], calling `on_excluded` with the table name the first time the INSERT
/// statements of an excluded table are dropped.
pub fn rewrite_with_notices<R, W, F>(
    reader: R,
    writer: W,
    options: &RewriteOptions,
    on_excluded: F,
) -> Result<RewriteSummary, Error>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str),
{
    Rewriter::new(writer, options, on_excluded).run(reader)
}

/// Rewrite the file at `input` into `output`, replacing `output` if it exists.
///
/// Fails before `output` is touched when `input` is not a file or both paths name the same file.
pub fn rewrite_file<F: FnMut(&str)>(
    input: &Path,
    output: &Path,
    options: &RewriteOptions,
    on_excluded: F,
) -> Result<RewriteSummary, Error> {
    if !input.is_file() {
        return Err(Error::FileNotFound(input.display().to_string()));
    }
    if same_file(input, output) {
        return Err(Error::InvalidArguments(
            "Input and Output cannot be the same file.".into(),
        ));
    }
    if output.exists() {
        tracing::debug!("Replacing existing output {}", output.display());
    }
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    rewrite_with_notices(reader, writer, options, on_excluded)
}

fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Tables whose INSERT statements are left out, compared without backticks.
    pub excluded_tables: Vec<String>,
    /// Split multi-row INSERT statements to one row per line.
    pub reformat: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            excluded_tables: Vec::new(),
            reformat: true,
        }
    }
}

impl RewriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_excluded_tables(mut self, excluded_tables: Vec<String>) -> Self {
        self.excluded_tables = excluded_tables;
        self
    }

    pub fn with_reformat(mut self, reformat: bool) -> Self {
        self.reformat = reformat;
        self
    }
}

/// Counters collected over one rewrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_excluded: usize,
    /// INSERT lines that had rows split onto separate lines.
    pub inserts_reformatted: usize,
    /// Lines the timestamp substitution was run on.
    pub timestamp_lines_modified: usize,
    /// Excluded tables that actually appeared, in order of first appearance.
    pub excluded_tables_found: Vec<String>,
}

struct Rewriter<W, F> {
    writer: W,
    excluded: HashSet<String>,
    reformat: bool,
    on_excluded: F,
    normalizer: TimestampNormalizer,
    summary: RewriteSummary,
}

impl<W, F> Rewriter<W, F>
where
    W: Write,
    F: FnMut(&str),
{
    fn new(writer: W, options: &RewriteOptions, on_excluded: F) -> Self {
        Self {
            writer,
            excluded: options.excluded_tables.iter().cloned().collect(),
            reformat: options.reformat,
            on_excluded,
            normalizer: TimestampNormalizer::new(),
            summary: RewriteSummary::default(),
        }
    }

    fn run<R: BufRead>(mut self, mut reader: R) -> Result<RewriteSummary, Error> {
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            self.summary.lines_read += 1;
            self.process_line(&line)?;
            line.clear();
        }
        self.writer.flush()?;
        self.summary.timestamp_lines_modified = self.normalizer.lines_modified();
        tracing::debug!(
            "Read {} lines, wrote {}, excluded {}, reformatted {} INSERT statements",
            self.summary.lines_read,
            self.summary.lines_written,
            self.summary.lines_excluded,
            self.summary.inserts_reformatted
        );
        Ok(self.summary)
    }

    fn process_line(&mut self, line: &[u8]) -> Result<(), Error> {
        let line = self.normalizer.normalize(line);
        let table =
            classifier::classify(&line, self.summary.lines_read, TableNameStyle::Unquoted)?;
        match table {
            None => self.write(&line),
            Some(table) if self.excluded.contains(&table) => {
                self.exclude(table);
                Ok(())
            }
            Some(_) if self.reformat => {
                let split = formatter::split_rows(&line);
                if split.len() != line.len() {
                    self.summary.inserts_reformatted += 1;
                }
                self.write(&split)
            }
            Some(_) => self.write(&line),
        }
    }

    fn exclude(&mut self, table: String) {
        self.summary.lines_excluded += 1;
        if !self.summary.excluded_tables_found.contains(&table) {
            tracing::debug!(
                "First INSERT for excluded table {} on line {}",
                table,
                self.summary.lines_read
            );
            (self.on_excluded)(&table);
            self.summary.excluded_tables_found.push(table);
        }
    }

    fn write(&mut self, line: &[u8]) -> Result<(), Error> {
        self.writer.write_all(line)?;
        self.summary.lines_written += 1;
        Ok(())
    }
}
