use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reader_core::{EngineError, ParameterSet, PlaybackState, Severity};

use crate::prompt_view::PromptKind;
use crate::theme::Theme;

use super::types::{Command, CommandOutcome, PromptCommand};
use super::App;

const BOOK: &str = "Preface text\nCHAPTER 1\nalpha beta gamma\nCHAPTER 2\ndelta epsilon\n";

fn app() -> App {
    let mut app = App::new(ParameterSet::new(600, 10), Theme::default());
    app.load_text("book.txt", BOOK.to_string());
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> CommandOutcome {
    match Command::from_key(app, key(code)) {
        Some(command) => app.apply_command(command, Instant::now()),
        None => CommandOutcome::Continue,
    }
}

#[test]
fn hotkeys_map_to_engine_commands() {
    let app = app();
    assert_eq!(
        Command::from_key(&app, key(KeyCode::Char(' '))),
        Some(Command::TogglePlay)
    );
    assert_eq!(
        Command::from_key(&app, key(KeyCode::Up)),
        Some(Command::AdjustRate(1))
    );
    assert_eq!(
        Command::from_key(&app, key(KeyCode::Down)),
        Some(Command::AdjustRate(-1))
    );
    assert_eq!(
        Command::from_key(&app, key(KeyCode::Right)),
        Some(Command::AdjustWindow(1))
    );
    assert_eq!(
        Command::from_key(&app, key(KeyCode::Left)),
        Some(Command::AdjustWindow(-1))
    );
    assert_eq!(
        Command::from_key(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Command::Exit)
    );
}

#[test]
fn arrows_adjust_parameters_within_range() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.params().rate_wpm(), 650);
    for _ in 0..40 {
        press(&mut app, KeyCode::Left);
    }
    assert_eq!(app.params().window_chars(), 5);
}

#[test]
fn space_toggles_playback() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.engine.state(), PlaybackState::Running);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.engine.state(), PlaybackState::Paused);
}

#[test]
fn chapter_prompt_loads_typed_chapter() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.prompt.as_ref().map(|p| p.kind), Some(PromptKind::Chapter));
    // While the prompt is open, hotkeys become text.
    assert_eq!(
        Command::from_key(&app, key(KeyCode::Char('q'))),
        Some(Command::Prompt(PromptCommand::Insert('q')))
    );
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);

    assert!(app.prompt.is_none());
    assert_eq!(app.chapter, Some(2));
    assert_eq!(app.engine.words().len(), 4);
    assert_eq!(app.title(), "book.txt · chapter 2");
    assert!(app.raw_text.as_deref() == Some(BOOK));
}

#[test]
fn bad_chapter_input_is_reported_and_stream_kept() {
    let mut app = app();
    let before = app.engine.words().clone();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Enter);
    let notice = app.engine.shell().notice.clone().expect("notice");
    assert_eq!(notice.1, Severity::Error);
    assert_eq!(app.engine.words(), &before);

    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('9'));
    press(&mut app, KeyCode::Enter);
    let notice = app.engine.shell().notice.clone().expect("notice");
    assert_eq!(notice.1, Severity::Warning);
    assert_eq!(app.engine.words(), &before);
}

#[test]
fn picker_lists_headings_and_loads_selection() {
    let mut app = app();
    press(&mut app, KeyCode::Char('t'));
    let titles = app.picker.as_ref().map(|p| p.titles.clone());
    assert_eq!(
        titles,
        Some(vec!["CHAPTER 1".to_string(), "CHAPTER 2".to_string()])
    );
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(app.picker.is_none());
    assert_eq!(app.chapter, Some(2));
}

#[test]
fn chapter_without_book_is_refused() {
    let mut app = App::new(ParameterSet::default(), Theme::default());
    assert_eq!(app.load_chapter(1), Err(EngineError::EmptyContent));
    assert!(app.engine.shell().notice.is_some());
}

#[test]
fn invalid_gutenberg_id_never_fetches() {
    let mut app = app();
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    assert!(app.incoming.is_none());
    assert_eq!(
        app.engine.shell().notice.as_ref().map(|n| n.1),
        Some(Severity::Error)
    );
}

#[test]
fn reset_key_rewinds_running_playback() {
    let mut app = app();
    let t0 = Instant::now();
    app.apply_command(Command::Start, t0);
    app.engine.poll(t0);
    app.engine.poll(t0 + Duration::from_millis(100));
    assert!(app.engine.cursor() > 0);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.engine.cursor(), 0);
    assert_eq!(app.engine.state(), PlaybackState::Idle);
    assert!(app.engine.shell().words.is_empty());
}

#[test]
fn quit_key_exits() {
    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Char('q')), CommandOutcome::Exit);
}
