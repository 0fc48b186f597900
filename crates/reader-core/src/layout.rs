use crate::types::{word_width, Chunk, WordStream};

/// Greedily packs words starting at `cursor` while the running width (word
/// widths plus one separator per gap) stays within `window`. The first word
/// is always taken so a word wider than the window cannot stall playback.
///
/// At or past the end of the stream this returns an empty chunk and the
/// cursor unchanged.
pub fn next_chunk(stream: &WordStream, cursor: usize, window: usize) -> (Chunk<'_>, usize) {
    let words = stream.as_slice();
    if cursor >= words.len() {
        return (Chunk::empty(cursor), cursor);
    }

    let mut end = cursor;
    let mut total = 0usize;
    for word in &words[cursor..] {
        let added = if end == cursor {
            word_width(word)
        } else {
            word_width(word) + 1
        };
        if end > cursor && total + added > window {
            break;
        }
        total += added;
        end += 1;
    }

    let chunk = Chunk {
        start: cursor,
        words: &words[cursor..end],
    };
    (chunk, end)
}
