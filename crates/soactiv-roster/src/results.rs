use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error as ThisError;

/// Query errors
#[derive(Debug, Clone, ThisError)]
pub enum QueryError {
    #[error("Not found")]
    NotFound,
}

/// Errors raised while importing a roster file
#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("Could not read roster {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid roster: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Client {id} membership ends {end} before it starts {start}")]
    InvalidPeriod {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: String },
}
