use thiserror::Error;

use crate::types::Severity;

/// Conditions the engine refuses a command for. None of them are fatal: the
/// engine keeps its previous, well-defined state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("The loaded text appears to be empty")]
    EmptyContent,
    #[error("No 'CHAPTER ...' headings found in this text")]
    NoHeadingsFound,
    #[error("This text only has {available} chapters by our heuristic; you requested chapter {requested}")]
    ChapterOutOfRange { requested: usize, available: usize },
    #[error("Chapter must be a number >= 1 (got {0:?})")]
    InvalidOrdinal(String),
}

impl EngineError {
    pub fn severity(&self) -> Severity {
        match self {
            EngineError::EmptyContent => Severity::Info,
            EngineError::NoHeadingsFound | EngineError::ChapterOutOfRange { .. } => {
                Severity::Warning
            }
            EngineError::InvalidOrdinal(_) => Severity::Error,
        }
    }
}
