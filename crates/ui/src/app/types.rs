use reader_core::source::{SourceError, TextSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PromptCommand {
    Cancel,
    Submit,
    Backspace,
    Insert(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Command {
    Exit,
    Cancel,
    Submit,
    Start,
    TogglePlay,
    Reset,
    AdjustRate(i32),
    AdjustWindow(i32),
    OpenChapterPrompt,
    OpenChapterPicker,
    OpenGutenbergPrompt,
    ToggleHelp,
    CloseHelp,
    NavigateDown,
    NavigateUp,
    Prompt(PromptCommand),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CommandOutcome {
    Continue,
    Exit,
}

/// Result of a background acquisition, delivered to the UI loop.
pub struct IncomingText {
    pub source: TextSource,
    pub result: Result<String, SourceError>,
}
