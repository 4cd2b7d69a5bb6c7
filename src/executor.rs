use std::path::PathBuf;

use sql_dump_trim::error::Error;
use sql_dump_trim::RewriteOptions;

pub trait CliExecutable {
    /// Run the command, printing progress to stdout, and return the number of lines whose
    /// timestamp precision was rewritten.
    fn execute(&self) -> Result<usize, Error>;
}

pub struct CensusExecutor {
    in_file: PathBuf,
}

impl CensusExecutor {
    pub fn new(in_file: PathBuf) -> Self {
        Self { in_file }
    }
}

impl CliExecutable for CensusExecutor {
    fn execute(&self) -> Result<usize, Error> {
        if !self.in_file.is_file() {
            return Err(Error::FileNotFound(self.in_file.display().to_string()));
        }
        println!("\nProcessing: {}\n", self.in_file.display());
        let census = sql_dump_trim::census_file(&self.in_file)?;
        print!("{}", census.report());
        Ok(0)
    }
}

pub struct RewriteExecutor {
    in_file: PathBuf,
    out_file: PathBuf,
    trailing: Vec<String>,
}

impl RewriteExecutor {
    pub fn new(in_file: PathBuf, out_file: PathBuf, trailing: Vec<String>) -> Self {
        Self {
            in_file,
            out_file,
            trailing,
        }
    }

    /// `--NoReformat` only counts as the first trailing argument, everything else is a table.
    fn options(&self) -> RewriteOptions {
        match self.trailing.split_first() {
            Some((first, tables)) if first == NO_REFORMAT => RewriteOptions::new()
                .with_reformat(false)
                .with_excluded_tables(tables.to_vec()),
            _ => RewriteOptions::new().with_excluded_tables(self.trailing.clone()),
        }
    }
}

const NO_REFORMAT: &str = "--NoReformat";

impl CliExecutable for RewriteExecutor {
    fn execute(&self) -> Result<usize, Error> {
        if !self.in_file.is_file() {
            return Err(Error::FileNotFound(self.in_file.display().to_string()));
        }
        if self.in_file == self.out_file {
            return Err(Error::InvalidArguments(
                "Input and Output cannot be the same file.".into(),
            ));
        }
        println!("\nProcessing Input File: {}", self.in_file.display());
        if self.out_file.is_file() {
            println!(
                "          Output File: {} (will be overwritten)",
                self.out_file.display()
            );
        } else {
            println!("          Output File: {}", self.out_file.display());
        }

        let options = self.options();
        if !self.trailing.is_empty() {
            if options.reformat {
                println!("Reformatting of SQL enabled (default)");
            } else {
                println!("Reformatting of SQL disabled");
            }
            println!(
                "\nTables requested to exclude: {}",
                options.excluded_tables.join(", ")
            );
        }

        let summary =
            sql_dump_trim::rewrite_file(&self.in_file, &self.out_file, &options, |table| {
                println!("   Excluded INSERTS for: {}", table)
            })?;
        Ok(summary.timestamp_lines_modified)
    }
}
