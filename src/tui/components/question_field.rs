//! # QuestionField Component
//!
//! Single-line text field for the Ask view's question.
//!
//! The buffer is internal state, mirrored into `App` through
//! `QuestionEvent::Changed` so the core never sees partial key handling.
//! Editing is append/backspace only: the arrow keys already belong to view
//! navigation and the domain dropdown.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionEvent {
    Changed(String),
    /// Enter pressed
    Run,
}

#[derive(Debug, Default)]
pub struct QuestionField {
    pub buffer: String,
    /// Shown dimmed while the buffer is empty
    pub placeholder: &'static str,
}

impl QuestionField {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            placeholder: "Type a question, e.g. Will the Lakers win tonight?",
        }
    }

    /// Tail of the buffer that fits in `width` columns, so the end of the
    /// text (where typing happens) stays visible.
    fn visible_tail(&self, width: usize) -> &str {
        if self.buffer.width() <= width {
            return &self.buffer;
        }
        let mut start = self.buffer.len();
        let mut used = 0;
        for (i, c) in self.buffer.char_indices().rev() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start = i;
        }
        &self.buffer[start..]
    }
}

impl Component for QuestionField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Your question ")
            .title_bottom(" Enter Run ");

        // borders + room for the cursor
        let inner = usize::from(area.width.saturating_sub(3));
        let (text, style) = if self.buffer.is_empty() {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (self.visible_tail(inner), Style::default().fg(Color::Green))
        };
        let cursor_col = if self.buffer.is_empty() {
            0
        } else {
            u16::try_from(text.width()).unwrap_or(u16::MAX)
        };

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);
        if area.width > 2 && area.height > 2 {
            frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
        }
    }
}

impl EventHandler for QuestionField {
    type Event = QuestionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(QuestionEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // single line field
                self.buffer.extend(text.chars().filter(|c| !c.is_control()));
                Some(QuestionEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| QuestionEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit => Some(QuestionEvent::Run),
            _ => None,
        }
    }
}
