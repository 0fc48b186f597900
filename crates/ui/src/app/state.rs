use std::sync::mpsc::Receiver;

use reader_core::{Engine, EngineError, ParameterSet, Severity, Shell};

use crate::{prompt_view::PromptView, rsvp_view::Screen, theme::Theme, views::ChapterPicker};

use super::types::IncomingText;

pub struct App {
    pub engine: Engine<Screen>,
    pub book_title: Option<String>,
    /// Text of the most recent acquisition; chapters are sliced from it.
    pub raw_text: Option<String>,
    pub chapter: Option<usize>,
    pub theme: Theme,
    pub prompt: Option<PromptView>,
    pub picker: Option<ChapterPicker>,
    pub show_help: bool,
    pub incoming: Option<Receiver<IncomingText>>,
}

impl App {
    pub fn new(params: ParameterSet, theme: Theme) -> Self {
        Self {
            engine: Engine::new(params, Screen::default()),
            book_title: None,
            raw_text: None,
            chapter: None,
            theme,
            prompt: None,
            picker: None,
            show_help: false,
            incoming: None,
        }
    }

    /// Makes `raw` the current book and loads all of it.
    pub fn load_text(&mut self, title: impl Into<String>, raw: String) -> usize {
        let count = self.engine.load_text(&raw);
        self.book_title = Some(title.into());
        self.raw_text = Some(raw);
        self.chapter = None;
        count
    }

    /// Loads chapter `ordinal` of the current book; the book itself is kept
    /// so another chapter can be picked later.
    pub fn load_chapter(&mut self, ordinal: usize) -> Result<usize, EngineError> {
        let Some(raw) = self.raw_text.as_deref() else {
            self.engine
                .shell_mut()
                .notify("Load a text or Gutenberg book first", Severity::Info);
            return Err(EngineError::EmptyContent);
        };
        let count = self.engine.load_chapter(raw, ordinal)?;
        self.chapter = Some(ordinal);
        Ok(count)
    }

    pub fn params(&self) -> ParameterSet {
        self.engine.params()
    }

    pub fn title(&self) -> String {
        let book = self.book_title.as_deref().unwrap_or("No book loaded");
        match self.chapter {
            Some(n) => format!("{book} · chapter {n}"),
            None => book.to_string(),
        }
    }
}
