//! # Scroll Pane
//!
//! Renders pre-wrapped lines inside a `tui_scrollview::ScrollView`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ScrollViewState` lives in `TuiState`, one per view
//! - `ScrollPane` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct ScrollPane<'a> {
    lines: Vec<Line<'static>>,
    state: &'a mut ScrollViewState,
    /// Line that must be on screen after rendering (e.g. a cursor row).
    keep_visible: Option<usize>,
}

impl<'a> ScrollPane<'a> {
    pub fn new(lines: Vec<Line<'static>>, state: &'a mut ScrollViewState) -> Self {
        Self {
            lines,
            state,
            keep_visible: None,
        }
    }

    pub fn keep_visible(mut self, line: Option<usize>) -> Self {
        self.keep_visible = line;
        self
    }

    /// Content width for a pane of `area_width` (one column for the scrollbar).
    pub fn content_width(area_width: u16) -> u16 {
        area_width.saturating_sub(1)
    }
}

/// Offset that brings `line` into a window of `height` rows starting at `offset`.
pub fn offset_to_reveal(offset: u16, height: u16, line: u16) -> u16 {
    if height == 0 {
        return offset;
    }
    if line < offset {
        line
    } else if line >= offset.saturating_add(height) {
        line + 1 - height
    } else {
        offset
    }
}

/// Whether lines remain below the window after rendering.
pub fn has_more_below(state: &ScrollViewState, content_height: usize, view_height: u16) -> bool {
    let bottom = usize::from(state.offset().y) + usize::from(view_height);
    content_height > bottom
}

/// Scroll keys and the mouse wheel move the page body of whichever view is
/// showing. The state is the persistent half of `ScrollPane`.
impl EventHandler for ScrollViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_to_top(),
            _ => {}
        }
        None
    }
}

impl Component for ScrollPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = Self::content_width(area.width);
        let height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);

        if let Some(line) = self.keep_visible {
            let line = u16::try_from(line).unwrap_or(u16::MAX);
            let current = self.state.offset();
            let y = offset_to_reveal(current.y, area.height, line);
            if y != current.y {
                self.state.set_offset(Position::new(current.x, y));
            }
        }

        let mut scroll_view = ScrollView::new(Size::new(width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let paragraph = Paragraph::new(std::mem::take(&mut self.lines));
        scroll_view.render_widget(paragraph, Rect::new(0, 0, width, height));

        frame.render_stateful_widget(scroll_view, area, &mut *self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_offset_to_reveal() {
        // Already visible
        assert_eq!(offset_to_reveal(0, 10, 5), 0);
        // Above the window
        assert_eq!(offset_to_reveal(8, 10, 3), 3);
        // Below the window: last visible row
        assert_eq!(offset_to_reveal(0, 10, 14), 5);
        assert_eq!(offset_to_reveal(4, 0, 100), 4);
    }

    #[test]
    fn test_has_more_below() {
        let mut state = ScrollViewState::default();
        assert!(has_more_below(&state, 10, 3));
        assert!(!has_more_below(&state, 3, 3));
        state.set_offset(Position::new(0, 7));
        assert!(!has_more_below(&state, 10, 3));
    }

    #[test]
    fn test_scroll_to_top_event() {
        let mut state = ScrollViewState::default();
        state.set_offset(Position::new(0, 4));
        assert_eq!(state.handle_event(&TuiEvent::ScrollToTop), None);
        assert_eq!(state.offset().y, 0);
    }

    #[test]
    fn test_renders_lines() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ScrollViewState::default();
        terminal
            .draw(|f| {
                let lines = vec![Line::from("first"), Line::from("second")];
                ScrollPane::new(lines, &mut state).render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }

    #[test]
    fn test_keep_visible_scrolls() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ScrollViewState::default();
        terminal
            .draw(|f| {
                let lines = (0..10).map(|i| Line::from(format!("row {i}"))).collect();
                ScrollPane::new(lines, &mut state)
                    .keep_visible(Some(7))
                    .render(f, f.area());
            })
            .unwrap();
        assert_eq!(state.offset().y, 5);
    }
}
