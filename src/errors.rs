//! Error types for authoring, storage and quiz sessions.
//!
//! Every error here is recoverable: the presentation layer shows it to the user
//! and keeps its previous state.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with user input in the authoring tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter question text")]
    EmptyText,

    #[error("Please enter 4 unique options")]
    DuplicateOrEmptyOption,

    #[error("Please select a correct answer")]
    InvalidCorrectAnswer,

    #[error("Please enter a name for the question set")]
    EmptyName,

    #[error("No questions added")]
    EmptySet,
}

/// Low-level reason a question set file could not be read or written.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Failures of the question set store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not prepare question set directory '{}': {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not load questions from '{file}': {source}")]
    Load {
        file: String,
        #[source]
        source: FileError,
    },

    #[error("Could not save question set '{name}': {source}")]
    Save {
        name: String,
        #[source]
        source: FileError,
    },

    #[error("Could not import questions from '{}': {source}", .path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("'{0}' is not a valid question set name")]
    InvalidName(String),
}

/// Engine calls made outside the state they are valid in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No questions available")]
    EmptySet,

    #[error("The quiz is already complete")]
    SessionComplete,

    #[error("Please select an option")]
    NoSelection,

    #[error("The quiz is not finished yet")]
    SessionIncomplete,
}

/// Umbrella error used where the UI reports any failure the same way.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl QuizError {
    /// Input problems are warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            QuizError::Validation(_)
                | QuizError::Session(SessionError::NoSelection)
                | QuizError::Session(SessionError::EmptySet)
        )
    }
}
