use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The document tree is structurally broken, e.g. a table whose rows
    /// disagree on cell count. The fill pass stops; locations already
    /// visited stay mutated.
    InconsistentTable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InconsistentTable(msg) => write!(f, "inconsistent table: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
