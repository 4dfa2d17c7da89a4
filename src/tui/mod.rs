//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the console,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! [`route_event`] decides what a `TuiEvent` means for the current view.
//! Global keys (quit, view switching, scrolling, nav clicks) come first,
//! then the view's own controls:
//!
//! | View          | ↑ / ↓                  | Enter / typing              |
//! |---------------|------------------------|-----------------------------|
//! | Ask           | step the domain filter | edit question, Enter runs   |
//! | Domains       | step the domain tab    |                             |
//! | Architecture  | step the layer group   |                             |
//! | Due Diligence | move the FAQ cursor    | Enter/Space toggles answer  |
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize).

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::collections::HashMap;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::dataset::DatasetBundle;
use crate::core::selection::Step;
use crate::core::state::App;
use crate::core::view::View;
use crate::tui::component::EventHandler;
use crate::tui::components::{AccordionEvent, FaqCursor, QuestionEvent, QuestionField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    // One body scroll position per view, kept across view switches
    scroll: HashMap<View, ScrollViewState>,
    pub faq_cursor: FaqCursor,
    pub question: QuestionField,
    /// Set while drawing: the current body has content below the window
    pub has_more_below: bool,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            scroll: HashMap::new(),
            faq_cursor: FaqCursor::new(app.dataset.faq.len()),
            question: QuestionField::new(&app.ask.question),
            has_more_below: false,
        }
    }

    pub fn scroll_state(&mut self, view: View) -> &mut ScrollViewState {
        self.scroll.entry(view).or_default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that lack it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Translate a terminal event into an action for the current view.
///
/// Scrolling and cursor movement that only touch `TuiState` are applied
/// here and yield `None`.
pub fn route_event(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: Rect,
) -> Option<Action> {
    let view = app.current_view();
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit | TuiEvent::Escape => return Some(Action::Quit),
        TuiEvent::NextView => return Some(Action::NextView),
        TuiEvent::PrevView => return Some(Action::PrevView),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop => {
            tui.scroll_state(view).handle_event(event);
            return None;
        }
        TuiEvent::MouseClick(column, row) => {
            return route_click(*column, *row, app, frame_area);
        }
        _ => {}
    }

    match view {
        View::AskEngine => match event {
            TuiEvent::CursorUp => Some(Action::StepAskFilter(Step::Prev)),
            TuiEvent::CursorDown => Some(Action::StepAskFilter(Step::Next)),
            _ => match tui.question.handle_event(event)? {
                QuestionEvent::Changed(text) => Some(Action::EditQuestion(text)),
                QuestionEvent::Run => Some(Action::RunAsk),
            },
        },
        View::Domains => step_from_arrows(event).map(Action::StepDomain),
        View::Architecture => step_from_arrows(event).map(Action::StepArchitectureGroup),
        View::DueDiligence => {
            tui.faq_cursor.len = app.dataset.faq.len();
            match tui.faq_cursor.handle_event(event)? {
                AccordionEvent::Toggle(index) => app
                    .faq
                    .options()
                    .get(index)
                    .map(|question| Action::ToggleFaq(question.clone())),
            }
        }
        _ => None,
    }
}

fn step_from_arrows(event: &TuiEvent) -> Option<Step> {
    match event {
        TuiEvent::CursorUp => Some(Step::Prev),
        TuiEvent::CursorDown => Some(Step::Next),
        _ => None,
    }
}

fn route_click(column: u16, row: u16, app: &App, frame_area: Rect) -> Option<Action> {
    let view = app.current_view();
    if let Some(target) = ui::hit_test_nav(column, row, frame_area, view) {
        return Some(Action::SetView(target.id().to_string()));
    }
    let index = ui::hit_test_sidebar(column, row, frame_area, app)?;
    match view {
        View::Domains => app
            .domain_tabs
            .options()
            .get(index)
            .map(|key| Action::SelectDomain(key.clone())),
        View::Architecture => app
            .architecture_groups
            .options()
            .get(index)
            .map(|group| Action::SelectArchitectureGroup(group.clone())),
        View::AskEngine => app
            .ask
            .filter_choice
            .options()
            .get(index)
            .map(|option| Action::SetAskFilter(option.clone())),
        _ => None,
    }
}

pub fn run(dataset: DatasetBundle, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(dataset, config);
    let mut tui = TuiState::new(&app);
    info!("Starting on view '{}'", app.current_view());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {e}");
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain all pending events before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            if let Some(action) = route_event(&event, &app, &mut tui, frame_area)
                && update(&mut app, action) == Effect::Quit
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
