use crate::types::WordStream;

/// Splits raw prose into words. Line breaks (LF or CRLF) are ordinary
/// separators, runs of whitespace collapse, and empty input gives an empty
/// stream.
pub fn tokenize(raw: &str) -> WordStream {
    let flattened = raw.replace("\r\n", " ").replace('\n', " ");
    let words = flattened
        .split_whitespace()
        .map(str::to_string)
        .collect();
    WordStream::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_stream() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n  \n").is_empty());
    }

    #[test]
    fn newlines_separate_words() {
        let words = tokenize("one\ntwo\r\nthree  four\n\nfive");
        let collected: Vec<&str> = words.iter().collect();
        assert_eq!(collected, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn punctuation_stays_attached() {
        let words = tokenize("Hello, world! \"Quoted.\"");
        assert_eq!(words.get(0), Some("Hello,"));
        assert_eq!(words.get(1), Some("world!"));
        assert_eq!(words.get(2), Some("\"Quoted.\""));
    }

    #[test]
    fn tokens_never_contain_whitespace() {
        let samples = [
            "a b\tc\u{a0}d",
            "line one\r\nline two\rline three",
            "   leading and trailing   ",
            "unicode\u{2003}em\u{3000}space",
        ];
        for sample in samples {
            for word in tokenize(sample).iter() {
                assert!(!word.is_empty());
                assert!(!word.chars().any(char::is_whitespace), "{word:?}");
            }
        }
    }
}
