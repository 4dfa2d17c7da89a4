//! # TUI Components
//!
//! All UI pieces of the console.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `NavBar`: Brand line and one tab per view
//! - `SelectionList`: Bordered list for a single-selection group
//! - `Footer`: Owner, year and disclaimer
//! - `StatusBar`: Status message and key help
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit events:
//! - `QuestionField`: The Ask view's text field
//! - `FaqCursor`: Highlighted row of the Due Diligence accordion
//! - `ScrollPane`: Page body, borrowing its `ScrollViewState` from `TuiState`
//!
//! ### Line Builders
//!
//! Page text is turned into pre-wrapped lines before it reaches a
//! `ScrollPane`. `ContentBuilder` does the wrapping; `accordion_lines` and
//! `prediction_cards` write their blocks into a builder.
//!
//! ## Props-Based Data Flow
//!
//! Components receive core data as props and never reach into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! SelectionList::new("Domains", &app.domain_tabs).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! domain_list.render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── nav_bar.rs         (Brand + view tabs, mouse hit testing)
//! ├── status_bar.rs      (Status message + key help)
//! ├── footer.rs          (Owner, year, disclaimer)
//! ├── content.rs         (Text to wrapped lines)
//! ├── scroll_pane.rs     (Scrollable page body)
//! ├── selection_list.rs  (Tabs, sidebars, dropdown)
//! ├── accordion.rs       (FAQ rows + cursor)
//! ├── question_field.rs  (Ask text input)
//! └── prediction_card.rs (Ask result cards)
//! ```

pub mod accordion;
pub mod content;
pub mod footer;
pub mod nav_bar;
pub mod prediction_card;
pub mod question_field;
pub mod scroll_pane;
pub mod selection_list;
pub mod status_bar;

pub use accordion::{AccordionEvent, FaqCursor, accordion_lines};
pub use content::ContentBuilder;
pub use footer::Footer;
pub use nav_bar::NavBar;
pub use prediction_card::prediction_cards;
pub use question_field::{QuestionEvent, QuestionField};
pub use scroll_pane::ScrollPane;
pub use selection_list::SelectionList;
pub use status_bar::StatusBar;
