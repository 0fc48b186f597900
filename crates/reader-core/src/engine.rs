//! RSVP playback engine.
//!
//! The engine owns the word stream, the cursor, the playback state and the
//! reading parameters. Playback is a single armed tick: `start` arms it,
//! `poll` fires it once its deadline has passed and either re-arms it or
//! stops, `pause`/`reset`/`load_*` disarm it before returning.

use std::time::Instant;

use log::{debug, info};

use crate::chapter::slice_chapter;
use crate::error::EngineError;
use crate::layout::next_chunk;
use crate::params::ParameterSet;
use crate::text::tokenize;
use crate::types::{Chunk, PlaybackState, Progress, Severity, WordStream};

/// Receives everything the engine reports. Implemented by the UI.
pub trait Shell {
    fn render_chunk(&mut self, chunk: &Chunk<'_>);
    fn render_progress(&mut self, progress: Progress);
    fn notify(&mut self, message: &str, severity: Severity);

    /// Blank the display; called when a stream is loaded or playback reset.
    fn clear(&mut self) {}
}

pub struct Engine<S: Shell> {
    words: WordStream,
    cursor: usize,
    state: PlaybackState,
    params: ParameterSet,
    next_tick: Option<Instant>,
    shell: S,
}

impl<S: Shell> Engine<S> {
    pub fn new(params: ParameterSet, shell: S) -> Self {
        Self {
            words: WordStream::default(),
            cursor: 0,
            state: PlaybackState::Idle,
            params,
            next_tick: None,
            shell,
        }
    }

    /// Replaces the stream with the words of `text` and returns to Idle.
    /// An empty result is loaded as-is and reported as no content.
    pub fn load_text(&mut self, text: &str) -> usize {
        self.load_stream(tokenize(text))
    }

    /// Loads chapter `ordinal` (1-based) of `text`. On failure nothing about
    /// the engine changes.
    pub fn load_chapter(&mut self, text: &str, ordinal: usize) -> Result<usize, EngineError> {
        match slice_chapter(text, ordinal) {
            Ok(chapter) => Ok(self.load_text(&chapter)),
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    pub fn load_stream(&mut self, words: WordStream) -> usize {
        self.next_tick = None;
        self.words = words;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        info!("loaded {} words", self.words.len());
        self.shell.clear();
        self.shell.render_progress(self.progress());
        if self.words.is_empty() {
            self.report(&EngineError::EmptyContent);
        }
        self.words.len()
    }

    /// Idle or Paused → Running. The first tick is due immediately.
    pub fn start(&mut self, now: Instant) -> Result<(), EngineError> {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => {
                if self.words.is_empty() {
                    let err = EngineError::EmptyContent;
                    self.report(&err);
                    return Err(err);
                }
                debug!("start at word {} of {}", self.cursor, self.words.len());
                self.state = PlaybackState::Running;
                self.next_tick = Some(now);
            }
            PlaybackState::Running => {}
            PlaybackState::Finished => {
                self.shell
                    .notify("End of text reached; reset to read again", Severity::Info);
            }
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        self.next_tick = None;
        if self.state == PlaybackState::Running {
            debug!("pause at word {}", self.cursor);
            self.state = PlaybackState::Paused;
        }
    }

    pub fn toggle(&mut self, now: Instant) -> Result<(), EngineError> {
        if self.state == PlaybackState::Running {
            self.pause();
            Ok(())
        } else {
            self.start(now)
        }
    }

    pub fn reset(&mut self) {
        self.next_tick = None;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        debug!("reset");
        self.shell.clear();
        self.shell.render_progress(self.progress());
    }

    pub fn adjust_rate(&mut self, steps: i32) -> u32 {
        self.params.adjust_rate(steps)
    }

    pub fn adjust_window(&mut self, steps: i32) -> usize {
        self.params.adjust_window(steps)
    }

    /// Fires the armed tick if its deadline is at or before `now`. Returns
    /// whether a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(due) if due <= now && self.state == PlaybackState::Running => {
                self.tick(now);
                true
            }
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    fn tick(&mut self, now: Instant) {
        self.next_tick = None;
        let window = self.params.window_chars();
        let (chunk, next) = next_chunk(&self.words, self.cursor, window);
        if chunk.is_empty() {
            info!("finished after {} words", self.words.len());
            self.state = PlaybackState::Finished;
            self.shell.notify("Finished", Severity::Info);
            return;
        }
        self.shell.render_chunk(&chunk);
        self.cursor = next;
        let progress = self.progress();
        self.shell.render_progress(progress);

        let interval = self.params.tick_interval();
        self.next_tick = Some(now + interval);
    }

    fn report(&mut self, err: &EngineError) {
        self.shell.notify(&err.to_string(), err.severity());
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn progress(&self) -> Progress {
        Progress {
            cursor: self.cursor,
            total: self.words.len(),
        }
    }

    pub fn params(&self) -> ParameterSet {
        self.params
    }

    pub fn words(&self) -> &WordStream {
        &self.words
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }
}
