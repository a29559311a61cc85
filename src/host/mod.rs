//! Host Session
//!
//! The embedding side of the board: keeps the authoritative guesses and
//! feedback, decides which row is editable and journals every change.

pub mod journal;
pub mod session;

use thiserror::Error;

pub use journal::EventJournal;
pub use session::{HostSession, Submission};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Incomplete guess")]
    IncompleteGuess,
    #[error("Incomplete feedback")]
    IncompleteFeedback,
    #[error("No guesses left")]
    BoardFull,
    #[error("Not a five letter word: {0}")]
    InvalidWord(String),
    #[error("Journal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Journal encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
