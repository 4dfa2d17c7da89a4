use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a rectangle of the frame.
///
/// Core data arrives as props (struct fields borrowed from `App`), never by
/// reaching into the session. Persistent presentation state such as a
/// scroll position is borrowed from `TuiState` for the duration of a frame.
///
/// `render` takes `&mut self` so a component can adjust that borrowed state
/// while drawing, e.g. scrolling a cursor row into view.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent presentation state that reacts to terminal input.
///
/// Returns a high-level event when the input means something to the
/// caller. `route_event` turns those into core actions.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
