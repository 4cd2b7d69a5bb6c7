mod executor;

use crate::executor::{CensusExecutor, CliExecutable, RewriteExecutor};
use clap::Parser;
use sql_dump_trim::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "

Usage: sql-dump-trim [InFile] [OutFile] [TableName] ...

      with just InFile     - List top 10 tables by INSERT count.


      with In/Out files    - Create OutFile with readable SQL.

      with --NoReformat    - Disable reformat to readable INSERTs
                             Currently must be given as 3rd param

      with TableName(s) to exclude
                           - Create OutFile as above & exclude
                             INSERT statements of those tables.


";

#[derive(Debug, Parser)]
#[command(name = "sql-dump-trim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
    /// The dump to read
    in_file: PathBuf,
    /// Where to write the rewritten dump. Without it, tables are ranked by INSERT count instead
    out_file: Option<PathBuf>,
    /// Tables whose INSERT statements are left out, optionally preceded by `--NoReformat`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tables: Vec<String>,
}

impl Cli {
    fn executor(self) -> Box<dyn CliExecutable> {
        match self.out_file {
            None => Box::new(CensusExecutor::new(self.in_file)),
            Some(out_file) => Box::new(RewriteExecutor::new(self.in_file, out_file, self.tables)),
        }
    }
}

fn init_tracing(debug: u8) {
    let level = match debug {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<usize, Error> {
    if std::env::args_os().len() <= 1 {
        return Err(Error::NoArguments);
    }
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!("{:?}", cli);

    println!("\nStarting sql-dump-trim - v{}", env!("CARGO_PKG_VERSION"));
    cli.executor().execute()
}

fn main() -> ExitCode {
    match run() {
        Ok(timestamp_lines) => {
            if timestamp_lines > 0 {
                println!("\nLines with TIMESTAMP(6) modified: {}", timestamp_lines);
            }
            println!("\nDone.\n");
            ExitCode::SUCCESS
        }
        Err(Error::NoArguments) => {
            print!("{}", USAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("\nERROR: {}", e);
            println!("\nTerminating Process.\n");
            ExitCode::FAILURE
        }
    }
}
