use ratatui::{prelude::*, widgets::*};
use unicode_segmentation::UnicodeSegmentation;

use crate::layout::centered_rect;

/// Headings found by the chapter heuristic; Enter loads the selected one.
pub struct ChapterPicker {
    pub titles: Vec<String>,
    pub selected: usize,
}

impl ChapterPicker {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            selected: 0,
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if !self.titles.is_empty() {
            self.selected = (self.selected + 1).min(self.titles.len() - 1);
        }
    }

    /// 1-based chapter number of the selection.
    pub fn ordinal(&self) -> Option<usize> {
        (!self.titles.is_empty()).then_some(self.selected + 1)
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let popup = centered_rect(70, 80, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Chapters (j/k, Enter, Esc)");
        let max_w = popup.width.saturating_sub(2) as usize; // borders
        let visible = popup.height.saturating_sub(2) as usize;
        let first = self.selected.saturating_sub(visible.saturating_sub(1));
        let items: Vec<ListItem> = self
            .titles
            .iter()
            .enumerate()
            .skip(first)
            .take(visible.max(1))
            .map(|(i, title)| {
                let style = if i == self.selected {
                    Style::default().bg(Color::Blue).fg(Color::White)
                } else {
                    Style::default()
                };
                let label = format!("{:>3}. {}", i + 1, title);
                ListItem::new(Line::from(truncate_with_ellipsis(&label, max_w))).style(style)
            })
            .collect();
        let list = List::new(items).block(block);
        f.render_widget(Clear, popup);
        f.render_widget(list, popup);
    }
}

fn truncate_with_ellipsis(text: &str, max_w: usize) -> String {
    if max_w == 0 {
        return String::new();
    }
    let gs: Vec<&str> = text.graphemes(true).collect();
    if gs.len() <= max_w {
        return text.to_string();
    }
    if max_w == 1 {
        return "…".to_string();
    }
    let keep = max_w.saturating_sub(1);
    format!("{}…", gs[..keep].concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut picker = ChapterPicker::new(vec!["CHAPTER 1".into(), "CHAPTER 2".into()]);
        picker.up();
        assert_eq!(picker.ordinal(), Some(1));
        picker.down();
        picker.down();
        assert_eq!(picker.ordinal(), Some(2));
        assert_eq!(ChapterPicker::new(Vec::new()).ordinal(), None);
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(truncate_with_ellipsis("CHAPTER XLII", 8), "CHAPTER…");
        assert_eq!(truncate_with_ellipsis("short", 8), "short");
        assert_eq!(truncate_with_ellipsis("abc", 1), "…");
    }
}
