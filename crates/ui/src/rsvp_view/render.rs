use ratatui::{prelude::*, widgets::*};
use reader_core::{ParameterSet, PlaybackState, Severity};

use crate::theme::Theme;

use super::{split_emphasis, Screen};

/// Everything a frame needs besides the screen itself.
pub struct Status<'a> {
    pub title: &'a str,
    pub state: PlaybackState,
    pub params: ParameterSet,
}

impl Screen {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme, status: &Status<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(f, chunks[0], theme, status.title);
        self.render_stage(f, chunks[1], theme);
        self.render_progress(f, chunks[2], theme);
        self.render_status(f, chunks[3], theme, status);
    }

    fn render_header(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme, title: &str) {
        let header = Paragraph::new(Line::styled(
            title.to_string(),
            Style::default().fg(theme.header_fg).bg(theme.header_bg),
        ))
        .bg(theme.header_bg);
        f.render_widget(header, area);
    }

    pub(crate) fn chunk_line(&self, theme: &Theme) -> Line<'static> {
        // `frame` counts chunks already received; the first one is drawn in the primary color.
        let color = theme.chunk_fg[self.frame.saturating_sub(1) % theme.chunk_fg.len()];
        let bold = Style::default()
            .fg(color)
            .bg(theme.stage_bg)
            .add_modifier(Modifier::BOLD);
        let normal = Style::default().fg(color).bg(theme.stage_bg);

        let mut line = Line::default();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                line.push_span(Span::styled(" ", normal));
            }
            let (head, tail) = split_emphasis(word);
            if !head.is_empty() {
                line.push_span(Span::styled(head.to_string(), bold));
            }
            if !tail.is_empty() {
                line.push_span(Span::styled(tail.to_string(), normal));
            }
        }
        line
    }

    fn render_stage(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let background = Block::default().style(Style::default().bg(theme.stage_bg));
        f.render_widget(Clear, area);
        f.render_widget(background, area);

        let row = Rect {
            x: area.x,
            y: area.y + area.height / 2,
            width: area.width,
            height: 1,
        };
        let paragraph = Paragraph::new(self.chunk_line(theme))
            .alignment(Alignment::Center)
            .bg(theme.stage_bg);
        f.render_widget(paragraph, row);
    }

    fn render_progress(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let progress = self.progress.ratio();
        let bar_width = area.width.saturating_sub(8) as usize;
        let filled = (bar_width as f64 * progress).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let percentage = (progress * 100.0) as usize;

        let progress_line = Line::from(vec![
            Span::styled("[", Style::default().fg(Color::DarkGray)),
            Span::styled("▮".repeat(filled), Style::default().fg(Color::Blue)),
            Span::styled("▯".repeat(empty), Style::default().fg(Color::DarkGray)),
            Span::styled("]", Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(
                format!("{percentage}%"),
                Style::default().fg(theme.footer_fg),
            ),
        ]);

        let paragraph = Paragraph::new(progress_line)
            .bg(theme.footer_pad_bg)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn render_status(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme, status: &Status<'_>) {
        let (icon, color) = match status.state {
            PlaybackState::Running => ("▶", Color::Green),
            PlaybackState::Paused => ("⏸", Color::Yellow),
            PlaybackState::Finished => ("■", Color::Cyan),
            PlaybackState::Idle => ("·", Color::Gray),
        };

        let mut spans = vec![
            Span::styled(
                format!("{} WPM  ", status.params.rate_wpm()),
                Style::default().fg(theme.footer_fg),
            ),
            Span::styled(
                format!("{} chars  ", status.params.window_chars()),
                Style::default().fg(theme.footer_fg),
            ),
            Span::styled(
                format!("Word {}/{}  ", self.progress.cursor, self.progress.total),
                Style::default().fg(theme.footer_fg),
            ),
            Span::styled(
                format!("{icon} {}", status.state),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some((message, severity)) = &self.notice {
            let color = match severity {
                Severity::Info => theme.footer_fg,
                Severity::Warning => Color::Yellow,
                Severity::Error => Color::Red,
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(message.clone(), Style::default().fg(color)));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .bg(theme.footer_bg)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}
