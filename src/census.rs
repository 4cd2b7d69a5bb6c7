//! A Census that counts INSERT statements per table in a dump.
//!
//! See [`census`](crate::census()) as the entry point for counting a stream and
//! [`census_file`](crate::census_file()) for a file on disk.

use core::fmt;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classifier::{self, TableNameStyle};
use crate::error::Error;

/// Number of tables listed in a [`CensusReport`].
pub const TOP_TABLES: usize = 10;

/// Convenience function to count INSERT statements per table.
///
/// Table names are the raw tokens, so `` `t1` `` and `t1` are counted separately.
///
/// ## Example
///
/// ```rust
/// let dump = "INSERT INTO logs VALUES (1);\nINSERT INTO users VALUES (1);\nINSERT INTO logs VALUES (2);\n";
/// let census = sql_dump_trim::census(dump.as_bytes()).unwrap();
/// let top = census.top(10);
/// assert_eq!(top[0].table, "logs");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn census<R: BufRead>(reader: R) -> Result<TableCensus, Error> {
    TableCensus::count(reader)
}

/// Count INSERT statements of the file at `path`.
pub fn census_file(path: &Path) -> Result<TableCensus, Error> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    tracing::debug!("Counting INSERT statements in {}", path.display());
    let file = File::open(path)?;
    census(BufReader::new(file))
}

/// Occurrence count of one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableCount {
    pub table: String,
    pub count: usize,
}

/// INSERT statement counts per table, in the order tables were first seen.
#[derive(Debug, Default)]
pub struct TableCensus {
    counts: Vec<TableCount>,
    index: HashMap<String, usize>,
    lines_read: usize,
}

impl TableCensus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count<R: BufRead>(mut reader: R) -> Result<TableCensus, Error> {
        let mut census = Self::new();
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            census.lines_read += 1;
            let table = classifier::classify(&line, census.lines_read, TableNameStyle::Raw)?;
            if let Some(table) = table {
                census.record(table);
            }
            line.clear();
        }
        tracing::debug!(
            "Read {} lines, {} INSERT statements across {} tables",
            census.lines_read,
            census.total_inserts(),
            census.distinct_tables()
        );
        Ok(census)
    }

    /// Add one occurrence for `table`.
    pub fn record(&mut self, table: String) {
        match self.index.get(&table) {
            Some(&idx) => self.counts[idx].count += 1,
            None => {
                self.index.insert(table.clone(), self.counts.len());
                self.counts.push(TableCount { table, count: 1 });
            }
        }
    }

    pub fn total_inserts(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn distinct_tables(&self) -> usize {
        self.counts.len()
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// The `n` tables with the most INSERT statements, highest count first.
    /// Tables with equal counts keep the order in which they were first seen.
    pub fn top(&self, n: usize) -> Vec<TableCount> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    pub fn report(&self) -> CensusReport {
        CensusReport {
            rows: self.top(TOP_TABLES),
        }
    }
}

/// The ranked table listing printed in census mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CensusReport {
    pub rows: Vec<TableCount>,
}

impl fmt::Display for CensusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tCount\tTableName")?;
        writeln!(f, "\t-----\t---------")?;
        for row in &self.rows {
            writeln!(f, "\t{}\t{}", row.count, row.table)?;
        }
        Ok(())
    }
}
