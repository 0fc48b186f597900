use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use reader_core::{
    chapter::{parse_ordinal, ChapterIndex},
    source::TextSource,
    EngineError, PlaybackState, Severity, Shell,
};

use crate::prompt_view::{PromptKind, PromptView};
use crate::views::ChapterPicker;

use super::types::{Command, CommandOutcome, PromptCommand};
use super::App;

impl Command {
    pub(super) fn from_key(app: &App, key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c')) {
            return Some(Command::Exit);
        }
        if app.prompt.is_some() {
            return match key.code {
                KeyCode::Esc => Some(Command::Prompt(PromptCommand::Cancel)),
                KeyCode::Enter => Some(Command::Prompt(PromptCommand::Submit)),
                KeyCode::Backspace => Some(Command::Prompt(PromptCommand::Backspace)),
                KeyCode::Char(c) => Some(Command::Prompt(PromptCommand::Insert(c))),
                _ => None,
            };
        }
        if app.show_help {
            return matches!(key.code, KeyCode::Esc | KeyCode::Char('?'))
                .then_some(Command::CloseHelp);
        }
        if app.picker.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('t') => Some(Command::Cancel),
                KeyCode::Enter => Some(Command::Submit),
                KeyCode::Char('j') | KeyCode::Down => Some(Command::NavigateDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Command::NavigateUp),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Command::Exit),
            KeyCode::Esc => Some(Command::Cancel),
            KeyCode::Enter => Some(Command::Start),
            KeyCode::Char(' ') => Some(Command::TogglePlay),
            KeyCode::Up | KeyCode::Char('k') => Some(Command::AdjustRate(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::AdjustRate(-1)),
            KeyCode::Right | KeyCode::Char('l') => Some(Command::AdjustWindow(1)),
            KeyCode::Left | KeyCode::Char('h') => Some(Command::AdjustWindow(-1)),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('c') => Some(Command::OpenChapterPrompt),
            KeyCode::Char('t') => Some(Command::OpenChapterPicker),
            KeyCode::Char('g') => Some(Command::OpenGutenbergPrompt),
            KeyCode::Char('?') => Some(Command::ToggleHelp),
            _ => None,
        }
    }
}

impl App {
    pub(super) fn apply_command(&mut self, command: Command, now: Instant) -> CommandOutcome {
        match command {
            Command::Exit => return CommandOutcome::Exit,
            Command::Prompt(prompt) => self.apply_prompt_command(prompt),
            Command::CloseHelp => {
                self.show_help = false;
            }
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Command::Cancel => {
                if self.picker.take().is_none() {
                    self.engine.shell_mut().dismiss_notice();
                }
            }
            Command::Submit => {
                if let Some(ordinal) = self.picker.take().and_then(|p| p.ordinal()) {
                    if let Err(err) = self.load_chapter(ordinal) {
                        debug!("chapter {ordinal} not loaded: {err}");
                    }
                }
            }
            Command::NavigateDown => {
                if let Some(picker) = &mut self.picker {
                    picker.down();
                }
            }
            Command::NavigateUp => {
                if let Some(picker) = &mut self.picker {
                    picker.up();
                }
            }
            Command::Start => {
                if self.engine.state() != PlaybackState::Running {
                    if let Err(err) = self.engine.start(now) {
                        debug!("start refused: {err}");
                    }
                }
            }
            Command::TogglePlay => {
                if let Err(err) = self.engine.toggle(now) {
                    debug!("start refused: {err}");
                }
            }
            Command::Reset => self.engine.reset(),
            Command::AdjustRate(steps) => {
                self.engine.adjust_rate(steps);
            }
            Command::AdjustWindow(steps) => {
                self.engine.adjust_window(steps);
            }
            Command::OpenChapterPrompt => {
                self.prompt = Some(PromptView::new(PromptKind::Chapter));
            }
            Command::OpenGutenbergPrompt => {
                self.prompt = Some(PromptView::new(PromptKind::Gutenberg));
            }
            Command::OpenChapterPicker => self.open_picker(),
        }
        CommandOutcome::Continue
    }

    fn apply_prompt_command(&mut self, command: PromptCommand) {
        match command {
            PromptCommand::Cancel => {
                self.prompt = None;
            }
            PromptCommand::Backspace => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.backspace();
                }
            }
            PromptCommand::Insert(c) => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.push_char(c);
                }
            }
            PromptCommand::Submit => {
                let Some(prompt) = self.prompt.take() else {
                    return;
                };
                self.submit_prompt(prompt);
            }
        }
    }

    fn submit_prompt(&mut self, prompt: PromptView) {
        match prompt.kind {
            PromptKind::Chapter => match parse_ordinal(&prompt.input) {
                Ok(ordinal) => {
                    if let Err(err) = self.load_chapter(ordinal) {
                        debug!("chapter {ordinal} not loaded: {err}");
                    }
                }
                Err(err) => self
                    .engine
                    .shell_mut()
                    .notify(&err.to_string(), err.severity()),
            },
            PromptKind::Gutenberg => match TextSource::gutenberg(&prompt.input) {
                Ok(source) => self.request_text(source),
                Err(err) => self
                    .engine
                    .shell_mut()
                    .notify(&err.to_string(), Severity::Error),
            },
        }
    }

    fn open_picker(&mut self) {
        let Some(raw) = self.raw_text.as_deref() else {
            self.engine
                .shell_mut()
                .notify("Load a text or Gutenberg book first", Severity::Info);
            return;
        };
        let index = ChapterIndex::scan(raw);
        if index.is_empty() {
            let err = EngineError::NoHeadingsFound;
            self.engine
                .shell_mut()
                .notify(&err.to_string(), err.severity());
            return;
        }
        let mut picker = ChapterPicker::new(index.titles().to_vec());
        if let Some(current) = self.chapter {
            picker.selected = current.saturating_sub(1).min(picker.titles.len() - 1);
        }
        self.picker = Some(picker);
    }
}
