use ratatui::{prelude::*, widgets::*};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Chapter,
    Gutenberg,
}

impl PromptKind {
    fn title(self) -> &'static str {
        match self {
            PromptKind::Chapter => "Chapter # (Enter load, Esc cancel)",
            PromptKind::Gutenberg => "Gutenberg ID (Enter fetch, Esc cancel)",
        }
    }
}

/// One-line input box for numeric entries.
pub struct PromptView {
    pub kind: PromptKind,
    pub input: String,
}

impl PromptView {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.input.grapheme_indices(true).last() {
            self.input.truncate(idx);
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut width = ((area.width as f32) * 0.5) as u16;
        width = width.max(20).min(area.width.saturating_sub(2).max(1)); // keep borders visible
        let height: u16 = 3;
        let popup_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        let block = Block::default()
            .title(self.kind.title())
            .borders(Borders::ALL);
        let prompt = Paragraph::new(format!("> {}", self.input)).block(block);
        f.render_widget(Clear, popup_area);
        f.render_widget(prompt, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_ignores_control_chars() {
        let mut prompt = PromptView::new(PromptKind::Chapter);
        prompt.push_char('1');
        prompt.push_char('\u{7}');
        prompt.push_char('2');
        assert_eq!(prompt.input, "12");
        prompt.backspace();
        prompt.backspace();
        prompt.backspace();
        assert_eq!(prompt.input, "");
    }
}
