use std::time::{Duration, Instant};

use ratatui::style::Modifier;
use reader_core::{Engine, ParameterSet, Progress, Severity, Shell};

use crate::theme::Theme;

use super::{split_emphasis, Screen};

#[test]
fn emphasis_rounds_first_half_up() {
    assert_eq!(split_emphasis("a"), ("a", ""));
    assert_eq!(split_emphasis("to"), ("t", "o"));
    assert_eq!(split_emphasis("hello"), ("hel", "lo"));
    assert_eq!(split_emphasis("naïve"), ("naï", "ve"));
    assert_eq!(split_emphasis(""), ("", ""));
}

#[test]
fn screen_tracks_engine_reports() {
    let mut engine = Engine::new(ParameterSet::new(600, 10), Screen::default());
    engine.load_text("The quick brown fox");
    engine.start(Instant::now()).expect("start");
    engine.poll(Instant::now());

    let screen = engine.shell();
    assert_eq!(screen.words, vec!["The", "quick"]);
    assert_eq!(screen.frame, 1);
    assert_eq!(screen.progress, Progress { cursor: 2, total: 4 });
}

#[test]
fn clear_blanks_words_but_keeps_notice() {
    let mut screen = Screen::default();
    screen.words = vec!["left".into()];
    screen.frame = 3;
    screen.notify("heads up", Severity::Warning);
    screen.clear();
    assert!(screen.words.is_empty());
    assert_eq!(screen.frame, 0);
    assert_eq!(
        screen.notice,
        Some(("heads up".to_string(), Severity::Warning))
    );
}

#[test]
fn chunk_line_bolds_word_heads_and_alternates_color() {
    let theme = Theme::default();
    let mut screen = Screen {
        words: vec!["The".into(), "quick".into()],
        frame: 1,
        ..Screen::default()
    };
    let line = screen.chunk_line(&theme);
    let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["Th", "e", " ", "qui", "ck"]);
    assert!(line.spans[0]
        .style
        .add_modifier
        .contains(Modifier::BOLD));
    assert!(!line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(line.spans[0].style.fg, Some(theme.chunk_fg[0]));

    screen.frame = 2;
    let line = screen.chunk_line(&theme);
    assert_eq!(line.spans[0].style.fg, Some(theme.chunk_fg[1]));
}

#[test]
fn first_chunk_after_reset_uses_primary_color() {
    let theme = Theme::default();
    let mut engine = Engine::new(ParameterSet::new(600, 10), Screen::default());
    engine.load_text("The quick brown fox");
    let now = Instant::now();
    engine.start(now).expect("start");
    engine.poll(now);
    let line = engine.shell().chunk_line(&theme);
    assert_eq!(line.spans[0].style.fg, Some(theme.chunk_fg[0]));

    engine.poll(now + Duration::from_millis(100));
    let line = engine.shell().chunk_line(&theme);
    assert_eq!(line.spans[0].style.fg, Some(theme.chunk_fg[1]));

    engine.reset();
    engine.start(now).expect("restart");
    engine.poll(now);
    let line = engine.shell().chunk_line(&theme);
    assert_eq!(line.spans[0].style.fg, Some(theme.chunk_fg[0]));
}
