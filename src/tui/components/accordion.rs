//! # Accordion Component
//!
//! The Due Diligence FAQ: one row per question, at most one answer open.
//!
//! Two parts, following the persistent state + transient wrapper pattern:
//! - `FaqCursor` lives in `TuiState` and tracks the highlighted question.
//!   It turns key presses into `AccordionEvent::Toggle`.
//! - `accordion_lines` writes the rows into a `ContentBuilder` each frame
//!   and reports where the cursor row landed, so the scroll pane can keep
//!   it on screen.
//!
//! Which answer is open is core state (`App::faq`). The cursor is not.

use ratatui::style::{Color, Modifier, Style};

use crate::core::dataset::FaqEntry;
use crate::core::selection::SingleSelectionGroup;
use crate::tui::component::EventHandler;
use crate::tui::components::content::ContentBuilder;
use crate::tui::event::TuiEvent;

const OPEN_MARKER: &str = "− ";
const CLOSED_MARKER: &str = "+ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionEvent {
    /// Open or close the question at this index.
    Toggle(usize),
}

#[derive(Debug, Default)]
pub struct FaqCursor {
    pub index: usize,
    /// Prop: number of questions, synced from the dataset before routing.
    pub len: usize,
    /// Set when the cursor moved, cleared by the next draw that scrolls
    /// the cursor row into view.
    pub reveal: bool,
}

impl FaqCursor {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            reveal: false,
        }
    }
}

impl EventHandler for FaqCursor {
    type Event = AccordionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.index = self.index.saturating_sub(1);
                self.reveal = true;
                None
            }
            TuiEvent::CursorDown => {
                self.index = (self.index + 1).min(self.len - 1);
                self.reveal = true;
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Some(AccordionEvent::Toggle(self.index.min(self.len - 1)))
            }
            _ => None,
        }
    }
}

/// Writes the accordion into `builder`. Returns the line index of the
/// cursor row.
pub fn accordion_lines(
    builder: &mut ContentBuilder,
    entries: &[FaqEntry],
    open: &SingleSelectionGroup<String>,
    cursor: usize,
) -> Option<usize> {
    let mut cursor_line = None;
    for (i, entry) in entries.iter().enumerate() {
        let is_open = open.active_index() == Some(i);
        let is_cursor = i == cursor;
        if is_cursor {
            cursor_line = Some(builder.len());
        }

        let marker = if is_open { OPEN_MARKER } else { CLOSED_MARKER };
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if is_open {
            style = style.fg(Color::Cyan);
        }
        if is_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        builder.marked(marker, &entry.question, style);

        if is_open {
            builder.indented(&entry.answer, Style::default().fg(Color::Gray));
            builder.blank();
        }
    }
    cursor_line
}
