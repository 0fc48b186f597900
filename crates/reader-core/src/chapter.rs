//! Heuristic chapter boundaries for plain text.
//!
//! A heading is any line that, once trimmed and upper-cased, starts with
//! `"CHAPTER "`. Chapter N is the N-th such heading, whatever number the
//! heading itself carries, and runs up to the next heading or the end of the
//! text. Text before the first heading is not addressable.

use log::debug;

use crate::error::EngineError;

const HEADING_PREFIX: &str = "CHAPTER ";
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterIndex {
    /// Line numbers of the headings, strictly increasing.
    lines: Vec<usize>,
    titles: Vec<String>,
    line_count: usize,
}

impl ChapterIndex {
    pub fn scan(text: &str) -> Self {
        let lines = split_lines(text);
        let mut index = ChapterIndex {
            line_count: lines.len(),
            ..ChapterIndex::default()
        };
        for (i, line) in lines.into_iter().enumerate() {
            let trimmed = line.trim();
            if is_heading(trimmed) {
                index.lines.push(i);
                index.titles.push(trimmed.to_string());
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn heading_lines(&self) -> &[usize] {
        &self.lines
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Line range `[start, end)` covered by the 1-based chapter `ordinal`.
    pub fn line_range(&self, ordinal: usize) -> Result<(usize, usize), EngineError> {
        if ordinal < 1 {
            return Err(EngineError::InvalidOrdinal(ordinal.to_string()));
        }
        if self.lines.is_empty() {
            return Err(EngineError::NoHeadingsFound);
        }
        let idx = ordinal - 1;
        let Some(&start) = self.lines.get(idx) else {
            return Err(EngineError::ChapterOutOfRange {
                requested: ordinal,
                available: self.lines.len(),
            });
        };
        let end = self.lines.get(idx + 1).copied().unwrap_or(self.line_count);
        Ok((start, end))
    }
}

fn is_heading(trimmed: &str) -> bool {
    trimmed.to_uppercase().starts_with(HEADING_PREFIX)
}

/// Text of chapter `ordinal` (1-based): its heading line through the line
/// before the next heading, joined with `\n`.
pub fn slice_chapter(text: &str, ordinal: usize) -> Result<String, EngineError> {
    let index = ChapterIndex::scan(text);
    let (start, end) = index.line_range(ordinal)?;
    debug!(
        "chapter {ordinal}: lines {start}..{end} of {} ({} headings)",
        index.line_count,
        index.len()
    );
    Ok(split_lines(text)[start..end].join("\n"))
}

/// Splits on every line boundary: `\n`, `\r`, `\r\n`, vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators. A trailing boundary does not start an empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    LINE_BREAKS.contains(&c)
}

/// Parses a user-typed chapter number. Only plain ASCII digits are accepted.
pub fn parse_ordinal(input: &str) -> Result<usize, EngineError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidOrdinal(trimmed.to_string()));
    }
    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => Err(EngineError::InvalidOrdinal(trimmed.to_string())),
        Ok(n) => Ok(n),
    }
}
