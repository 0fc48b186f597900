//! Text acquisition. Runs before anything is handed to the engine and never
//! from inside a playback tick.

use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use log::info;
use thiserror::Error;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "rsvp-reader";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not fetch book: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Please enter a numeric Gutenberg ID (e.g. 84, 1342), got {0:?}")]
    InvalidGutenbergId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Gutenberg(u32),
}

impl TextSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        TextSource::File(path.as_ref().to_path_buf())
    }

    pub fn gutenberg(id: &str) -> Result<Self, SourceError> {
        parse_gutenberg_id(id).map(TextSource::Gutenberg)
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::File(path) => write!(f, "{}", path.display()),
            TextSource::Gutenberg(id) => write!(f, "Gutenberg #{id}"),
        }
    }
}

pub fn parse_gutenberg_id(input: &str) -> Result<u32, SourceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SourceError::InvalidGutenbergId(trimmed.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| SourceError::InvalidGutenbergId(trimmed.to_string()))
}

pub fn gutenberg_url(id: u32) -> String {
    format!("https://www.gutenberg.org/cache/epub/{id}/pg{id}.txt")
}

pub fn read_text(source: &TextSource) -> Result<String, SourceError> {
    match source {
        TextSource::File(path) => Ok(std::fs::read_to_string(path)?),
        TextSource::Gutenberg(id) => fetch_url(&gutenberg_url(*id)),
    }
}

fn fetch_url(url: &str) -> Result<String, SourceError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let bytes = response.bytes()?;
    info!("fetched {} bytes from {url}", bytes.len());
    Ok(decode_dropping_invalid(&bytes))
}

/// UTF-8 decode that skips invalid byte sequences instead of substituting them.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn gutenberg_url_uses_cache_layout() {
        assert_eq!(
            gutenberg_url(1342),
            "https://www.gutenberg.org/cache/epub/1342/pg1342.txt"
        );
    }

    #[test]
    fn gutenberg_id_must_be_digits() {
        assert_eq!(parse_gutenberg_id(" 84 ").ok(), Some(84));
        assert!(parse_gutenberg_id("84a").is_err());
        assert!(parse_gutenberg_id("-84").is_err());
        assert!(parse_gutenberg_id("").is_err());
        assert!(parse_gutenberg_id("99999999999999").is_err());
    }

    #[test]
    fn invalid_bytes_are_dropped_when_decoding() {
        assert_eq!(decode_dropping_invalid(b"caf\xc3\xa9 \xff\xfeok"), "caf\u{e9} ok");
        assert_eq!(decode_dropping_invalid(b"trunc\xe2\x80"), "trunc");
        assert_eq!(decode_dropping_invalid("kept \u{fffd}".as_bytes()), "kept \u{fffd}");
    }

    #[test]
    fn reads_local_file() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tmp file");
        tmp.write_all(b"Call me Ishmael.\n").expect("write");
        let text = read_text(&TextSource::file(tmp.path())).expect("read");
        assert_eq!(text, "Call me Ishmael.\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let err = read_text(&TextSource::file(dir.path().join("nope.txt"))).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
