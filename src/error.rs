use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExoError {
    /// DNS, connect, or non-success HTTP status.
    #[error("Error fetching: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("Error reading: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("Error parsing: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error saving {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console (stdin/stdout) failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ExoError {
    /// Stdout went away (e.g. piped into `head`); not worth reporting.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ExoError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, ExoError>;
