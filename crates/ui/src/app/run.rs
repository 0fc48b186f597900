use std::{
    io::stdout,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use reader_core::ParameterSet;

use crate::layout::centered_rect;
use crate::rsvp_view::Status;

use super::types::{Command, CommandOutcome};
use super::App;

const IDLE_POLL: Duration = Duration::from_millis(100);

const HELP_LINES: &[&str] = &[
    "Space: start / pause",
    "Enter: start or resume",
    "Up / Down (k / j): speed ±50 WPM",
    "Right / Left (l / h): window ±5 chars",
    "r: reset to the beginning",
    "c: load chapter by number",
    "t: pick a chapter from the headings found",
    "g: fetch a Project Gutenberg book by ID",
    "Esc: dismiss message / close",
    "q / Ctrl-C: quit",
    "?: toggle this help",
];

impl App {
    /// Drives the terminal until the user quits; returns the final reading
    /// parameters so the caller can persist them.
    pub fn run(mut self) -> std::io::Result<ParameterSet> {
        let mut stdout = stdout();
        let raw_ok = enable_raw_mode().is_ok();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if !raw_ok {
            // Non-interactive fallback: draw once and exit cleanly
            terminal.draw(|f| self.draw(f))?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            return Ok(self.params());
        }

        let mut exit = false;
        while !exit {
            terminal.draw(|f| self.draw(f))?;

            let timeout = self
                .engine
                .next_deadline()
                .map(|due| due.saturating_duration_since(Instant::now()).min(IDLE_POLL))
                .unwrap_or(IDLE_POLL);
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = Command::from_key(&self, key) {
                            debug!("command {command:?}");
                            if self.apply_command(command, Instant::now()) == CommandOutcome::Exit
                            {
                                exit = true;
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {
                        exit = true;
                    }
                },
                Ok(false) => {}
                Err(_) => {
                    exit = true;
                }
            }

            self.poll_incoming();
            self.engine.poll(Instant::now());
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(self.params())
    }

    fn draw(&self, f: &mut Frame<'_>) {
        let size = f.area();
        let title = self.title();
        let status = Status {
            title: &title,
            state: self.engine.state(),
            params: self.params(),
        };
        self.engine.shell().render(f, size, &self.theme, &status);

        if let Some(picker) = &self.picker {
            picker.render(f, size);
        }
        if let Some(prompt) = &self.prompt {
            prompt.render(f, size);
        }
        if self.show_help {
            let popup_area = centered_rect(60, 60, size);
            let help = Paragraph::new(HELP_LINES.join("\n"))
                .block(
                    Block::default()
                        .title("Help (Esc or ? to close)")
                        .borders(Borders::ALL),
                )
                .wrap(Wrap { trim: false });
            f.render_widget(Clear, popup_area);
            f.render_widget(help, popup_area);
        }
    }
}
