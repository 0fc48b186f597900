pub mod chapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod params;
pub mod source;
pub mod text;
pub mod types;

pub use chapter::{parse_ordinal, slice_chapter, ChapterIndex};
pub use engine::{Engine, Shell};
pub use error::EngineError;
pub use layout::next_chunk;
pub use params::ParameterSet;
pub use text::tokenize;
pub use types::{Chunk, PlaybackState, Progress, Severity, WordStream};
