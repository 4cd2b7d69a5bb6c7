#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("File \"{0}\" not found.")]
    FileNotFound(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("No arguments given.")]
    NoArguments,
    #[error("Malformed INSERT statement on line {line_number}: {line}")]
    MalformedInsert { line_number: usize, line: String },
    #[error("{0}")]
    IOError(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IOError(error.to_string())
    }
}
