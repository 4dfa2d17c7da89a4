//! # StatusBar Component
//!
//! Bottom line: the latest status message on the left, key help for the
//! current view on the right.
//!
//! ## Stateless Component
//!
//! StatusBar receives everything as props and has no state of its own:
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new(app.current_view(), &app.status_message, more_below);
//! status_bar.render(frame, status_area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **More content below**: `"Domains | Domain: Risk | ↓ More"`
//! 2. **Status message**: `"Domains | Domain: Risk"`
//! 3. **Default**: `"Domains"`
//!
//! Key help is dropped first when the terminal is too narrow for both.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::view::View;
use crate::tui::component::Component;

const GLOBAL_KEYS: &str = "Tab/←→ View · PgUp/PgDn Scroll · Esc Quit";

pub struct StatusBar<'a> {
    pub view: View,
    pub status_message: &'a str,
    /// Whether the body has content below the current scroll position
    pub has_more_below: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(view: View, status_message: &'a str, has_more_below: bool) -> Self {
        Self {
            view,
            status_message,
            has_more_below,
        }
    }

    fn left_text(&self) -> String {
        let mut text = self.view.label().to_string();
        if !self.status_message.is_empty() && self.status_message != self.view.label() {
            text.push_str(" | ");
            text.push_str(self.status_message);
        }
        if self.has_more_below {
            text.push_str(" | ↓ More");
        }
        text
    }
}

/// Keys the current view adds on top of the global ones.
pub fn view_keys(view: View) -> Option<&'static str> {
    match view {
        View::AskEngine => Some("↑↓ Domain · Type question · Enter Run"),
        View::Domains => Some("↑↓ Domain"),
        View::Architecture => Some("↑↓ Layer group"),
        View::DueDiligence => Some("↑↓ Question · Enter/Space Expand"),
        _ => None,
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = self.left_text();
        let help = match view_keys(self.view) {
            Some(keys) => format!("{keys} · {GLOBAL_KEYS}"),
            None => GLOBAL_KEYS.to_string(),
        };

        let width = usize::from(area.width);
        let mut spans = vec![Span::raw(left.clone())];
        let used = left.width() + help.width();
        if used < width {
            spans.push(Span::raw(" ".repeat(width - used)));
            spans.push(Span::styled(help, Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(bar: &mut StatusBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_bar_with_more_below() {
        let mut bar = StatusBar::new(View::Domains, "Domain: Risk", true);
        let text = render_text(&mut bar, 120);
        assert!(text.contains("Domains | Domain: Risk | ↓ More"));
        assert!(text.contains("↑↓ Domain"));
        assert!(text.contains("Esc Quit"));
    }

    #[test]
    fn test_status_bar_skips_message_equal_to_view() {
        let mut bar = StatusBar::new(View::Archive, "Archive", false);
        assert_eq!(bar.left_text(), "Archive");
        let text = render_text(&mut bar, 120);
        assert!(!text.contains('|'));
        assert!(!text.contains("↓ More"));
    }

    #[test]
    fn test_narrow_terminal_drops_help() {
        let mut bar = StatusBar::new(View::DueDiligence, "Answer expanded", false);
        let text = render_text(&mut bar, 40);
        assert!(text.starts_with("Due Diligence | Answer expanded"));
        assert!(!text.contains("Esc Quit"));
    }

    #[test]
    fn test_view_keys() {
        assert!(view_keys(View::AskEngine).is_some());
        assert!(view_keys(View::Overview).is_none());
    }
}
