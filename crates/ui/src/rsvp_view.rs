mod render;
#[cfg(test)]
mod tests;

use reader_core::{Chunk, Progress, Severity, Shell};
use unicode_segmentation::UnicodeSegmentation;

pub use render::Status;

/// What the engine last reported, kept for the next frame.
#[derive(Debug, Default)]
pub struct Screen {
    pub words: Vec<String>,
    /// Number of chunks rendered since the last clear; picks the chunk color.
    pub frame: usize,
    pub progress: Progress,
    pub notice: Option<(String, Severity)>,
}

impl Shell for Screen {
    fn render_chunk(&mut self, chunk: &Chunk<'_>) {
        self.words = chunk.words.to_vec();
        self.frame += 1;
    }

    fn render_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
        self.notice = Some((message.to_string(), severity));
    }

    fn clear(&mut self) {
        self.words.clear();
        self.frame = 0;
    }
}

impl Screen {
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Splits a word for emphasis: the first half (rounded up) and the rest,
/// counted in grapheme clusters.
pub fn split_emphasis(word: &str) -> (&str, &str) {
    let count = word.graphemes(true).count();
    let split = count.div_ceil(2);
    match word.grapheme_indices(true).nth(split) {
        Some((idx, _)) => word.split_at(idx),
        None => (word, ""),
    }
}
