use std::time::Duration;

pub const RATE_MIN: u32 = 100;
pub const RATE_MAX: u32 = 1200;
pub const RATE_STEP: u32 = 50;
pub const DEFAULT_RATE: u32 = 400;

pub const WINDOW_MIN: usize = 5;
pub const WINDOW_MAX: usize = 80;
pub const WINDOW_STEP: usize = 5;
pub const DEFAULT_WINDOW: usize = 20;

/// Reading rate and chunk width. Both values are clamped on every write, so
/// a read always sees an in-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    rate_wpm: u32,
    window_chars: usize,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            rate_wpm: DEFAULT_RATE,
            window_chars: DEFAULT_WINDOW,
        }
    }
}

impl ParameterSet {
    pub fn new(rate_wpm: u32, window_chars: usize) -> Self {
        Self {
            rate_wpm: rate_wpm.clamp(RATE_MIN, RATE_MAX),
            window_chars: window_chars.clamp(WINDOW_MIN, WINDOW_MAX),
        }
    }

    pub fn rate_wpm(&self) -> u32 {
        self.rate_wpm
    }

    pub fn window_chars(&self) -> usize {
        self.window_chars
    }

    pub fn set_rate(&mut self, rate_wpm: u32) {
        self.rate_wpm = rate_wpm.clamp(RATE_MIN, RATE_MAX);
    }

    pub fn set_window(&mut self, window_chars: usize) {
        self.window_chars = window_chars.clamp(WINDOW_MIN, WINDOW_MAX);
    }

    /// Moves the rate by `steps` increments of [`RATE_STEP`]; negative slows down.
    pub fn adjust_rate(&mut self, steps: i32) -> u32 {
        let delta = i64::from(steps) * i64::from(RATE_STEP);
        let target = (i64::from(self.rate_wpm) + delta)
            .clamp(i64::from(RATE_MIN), i64::from(RATE_MAX));
        self.rate_wpm = target as u32;
        self.rate_wpm
    }

    /// Moves the window by `steps` increments of [`WINDOW_STEP`]; negative narrows.
    pub fn adjust_window(&mut self, steps: i32) -> usize {
        let delta = i64::from(steps) * WINDOW_STEP as i64;
        let target =
            (self.window_chars as i64 + delta).clamp(WINDOW_MIN as i64, WINDOW_MAX as i64);
        self.window_chars = target as usize;
        self.window_chars
    }

    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.rate_wpm)
    }
}

/// Delay between chunks for a words-per-minute rate: `60000 / rate` ms,
/// truncated, with the rate floored at 1.
pub fn tick_interval(rate_wpm: u32) -> Duration {
    Duration::from_millis(60_000 / u64::from(rate_wpm.max(1)))
}
