use std::fmt;

/// Ordered words of a text. Built once by the tokenizer and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStream {
    words: Vec<String>,
}

impl WordStream {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Consecutive words `[start, start + words.len())` shown together for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub start: usize,
    pub words: &'a [String],
}

impl<'a> Chunk<'a> {
    pub fn empty(start: usize) -> Self {
        Self { start, words: &[] }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn end(&self) -> usize {
        self.start + self.words.len()
    }

    /// Rendered width: word widths plus one separator per inter-word gap.
    pub fn width(&self) -> usize {
        let letters: usize = self.words.iter().map(|w| word_width(w)).sum();
        letters + self.words.len().saturating_sub(1)
    }

    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Length of a single word in code points. A decomposed accent counts as
/// its own character.
pub fn word_width(word: &str) -> usize {
    word.chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Running => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Finished => "Finished",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub cursor: usize,
    pub total: usize,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.cursor.min(self.total) as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(words: &[&str]) -> WordStream {
        WordStream::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn chunk_width_counts_separators() {
        let s = stream(&["The", "quick"]);
        let chunk = Chunk {
            start: 0,
            words: s.as_slice(),
        };
        assert_eq!(chunk.width(), 9);
        assert_eq!(chunk.text(), "The quick");
        assert_eq!(chunk.end(), 2);
    }

    #[test]
    fn word_width_counts_code_points() {
        assert_eq!(word_width("caf\u{e9}"), 4);
        assert_eq!(word_width("cafe\u{301}"), 5);
        assert_eq!(word_width("e\u{301}t\u{e9}"), 4);
    }

    #[test]
    fn progress_ratio_is_bounded() {
        assert_eq!(Progress { cursor: 0, total: 0 }.ratio(), 0.0);
        assert_eq!(Progress { cursor: 5, total: 10 }.ratio(), 0.5);
        assert_eq!(Progress { cursor: 12, total: 10 }.ratio(), 1.0);
    }
}
