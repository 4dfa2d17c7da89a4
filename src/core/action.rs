//! # Actions
//!
//! Everything that can happen in the console becomes an `Action`.
//! User presses Tab? That's `Action::NextView`.
//! User hits Enter on a FAQ question? That's `Action::ToggleFaq(question)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and tells the caller if anything else must happen.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Inputs that name nothing known (an unknown view, a tab that does not
//! exist) leave the state as it was. They are logged and reported in the
//! status bar, never raised as errors.

use log::{debug, info};

use crate::core::selection::{Selection, Step};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch view by id (`"architecture"`) or name (`"Architecture"`).
    SetView(String),
    NextView,
    PrevView,
    SelectDomain(String),
    StepDomain(Step),
    SelectArchitectureGroup(String),
    StepArchitectureGroup(Step),
    /// Open the question, or close it if it is already open.
    ToggleFaq(String),
    /// Choose a dropdown option. Results refresh on `RunAsk`.
    SetAskFilter(String),
    StepAskFilter(Step),
    EditQuestion(String),
    RunAsk,
    Quit,
}

/// What the caller must do after `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SetView(id) => {
            if app.router.set_view_by_id(&id) {
                app.status_message = app.current_view().label().to_string();
            } else {
                app.status_message = format!("Unknown view: {id}");
            }
        }
        Action::NextView => {
            app.router.next();
            app.status_message = app.current_view().label().to_string();
        }
        Action::PrevView => {
            app.router.prev();
            app.status_message = app.current_view().label().to_string();
        }
        Action::SelectDomain(key) => {
            app.status_message = if app.domain_tabs.select(&key) {
                format!("Domain: {key}")
            } else {
                format!("Unknown domain: {key}")
            };
        }
        Action::StepDomain(step) => {
            app.domain_tabs.step(step);
            if let Some(key) = app.domain_tabs.active_key() {
                app.status_message = format!("Domain: {key}");
            }
        }
        Action::SelectArchitectureGroup(group) => {
            app.status_message = if app.architecture_groups.select(&group) {
                group
            } else {
                format!("Unknown layer group: {group}")
            };
        }
        Action::StepArchitectureGroup(step) => {
            app.architecture_groups.step(step);
            if let Some(group) = app.architecture_groups.active_key() {
                app.status_message = group.clone();
            }
        }
        Action::ToggleFaq(question) => {
            if app.faq.select(&question) {
                app.status_message = match app.faq.selection() {
                    Selection::OpenAt(_) => "Answer expanded".to_string(),
                    Selection::Closed => "Answer collapsed".to_string(),
                };
            } else {
                app.status_message = "Unknown question".to_string();
            }
        }
        Action::SetAskFilter(option) => {
            if app.ask.filter_choice.select(&option) {
                app.ask.predictions.set_filter(option.as_str());
                app.status_message = format!("Domain filter: {option}");
            } else {
                app.status_message = format!("Unknown domain filter: {option}");
            }
        }
        Action::StepAskFilter(step) => {
            app.ask.filter_choice.step(step);
            if let Some(option) = app.ask.filter_choice.active_key() {
                app.ask.predictions.set_filter(option.as_str());
                app.status_message = format!("Domain filter: {option}");
            }
        }
        Action::EditQuestion(text) => {
            app.ask.question = text;
        }
        Action::RunAsk => {
            let shown = app.ask.predictions.apply().len();
            app.ask.runs += 1;
            info!(
                "Mock prediction run {} (filter={}, shown={})",
                app.ask.runs,
                app.ask.filter_value(),
                shown
            );
            app.status_message = if app.ask.predictions.is_fallback() {
                format!(
                    "No {} examples, showing all {shown}",
                    app.ask.filter_value()
                )
            } else {
                format!("{shown} mock prediction(s)")
            };
        }
        Action::Quit => {
            info!("Quit requested");
            return Effect::Quit;
        }
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::FilterValue;
    use crate::core::view::View;
    use crate::test_support::test_app;

    fn result_ids(app: &App) -> Vec<u32> {
        app.ask.results().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_set_view() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SetView("archive".into())), Effect::None);
        assert_eq!(app.current_view(), View::Archive);
        assert_eq!(app.status_message, "Archive");
    }

    #[test]
    fn test_set_unknown_view_keeps_current() {
        let mut app = test_app();
        update(&mut app, Action::SetView("domains".into()));
        update(&mut app, Action::SetView("pricing".into()));
        assert_eq!(app.current_view(), View::Domains);
        assert_eq!(app.status_message, "Unknown view: pricing");
    }

    #[test]
    fn test_next_prev_view() {
        let mut app = test_app();
        update(&mut app, Action::PrevView);
        assert_eq!(app.current_view(), View::Legal);
        update(&mut app, Action::NextView);
        update(&mut app, Action::NextView);
        assert_eq!(app.current_view(), View::AskEngine);
    }

    #[test]
    fn test_switching_views_preserves_selections() {
        let mut app = test_app();
        update(&mut app, Action::SetView("architecture".into()));
        update(&mut app, Action::SelectArchitectureGroup("Pipeline".into()));
        update(&mut app, Action::SelectDomain("Risk".into()));
        update(&mut app, Action::ToggleFaq("Q1".into()));
        update(&mut app, Action::SetAskFilter("Markets".into()));

        for view in View::ALL {
            update(&mut app, Action::SetView(view.id().into()));
        }
        update(&mut app, Action::SetView("architecture".into()));

        assert_eq!(app.architecture_groups.active_index(), Some(1));
        assert_eq!(app.domain_tabs.active_key().map(String::as_str), Some("Risk"));
        assert_eq!(app.faq.active_key(), None);
        assert_eq!(app.ask.filter_value(), &FilterValue::from("Markets"));
    }

    #[test]
    fn test_select_unknown_domain_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::SelectDomain("Markets".into()));
        update(&mut app, Action::SelectDomain("Weather".into()));
        assert_eq!(app.domain_tabs.active_key().map(String::as_str), Some("Markets"));
        assert_eq!(app.status_message, "Unknown domain: Weather");
    }

    #[test]
    fn test_step_domain_clamps() {
        let mut app = test_app();
        update(&mut app, Action::StepDomain(Step::Prev));
        assert_eq!(app.domain_tabs.active_index(), Some(0));
        for _ in 0..5 {
            update(&mut app, Action::StepDomain(Step::Next));
        }
        assert_eq!(app.domain_tabs.active_key().map(String::as_str), Some("Risk"));
    }

    #[test]
    fn test_step_architecture_group() {
        let mut app = test_app();
        update(&mut app, Action::StepArchitectureGroup(Step::Next));
        assert_eq!(app.status_message, "Pipeline");
        assert_eq!(app.architecture_groups.active_index(), Some(1));
    }

    #[test]
    fn test_toggle_faq_sequence() {
        let mut app = test_app();
        update(&mut app, Action::ToggleFaq("Q1".into()));
        assert_eq!(app.faq.active_key(), None);
        assert_eq!(app.status_message, "Answer collapsed");

        update(&mut app, Action::ToggleFaq("Q1".into()));
        assert_eq!(app.faq.active_key().map(String::as_str), Some("Q1"));

        update(&mut app, Action::ToggleFaq("Q3".into()));
        assert_eq!(app.faq.active_key().map(String::as_str), Some("Q3"));
        assert_eq!(app.status_message, "Answer expanded");

        update(&mut app, Action::ToggleFaq("Q99".into()));
        assert_eq!(app.faq.active_key().map(String::as_str), Some("Q3"));
    }

    #[test]
    fn test_filter_applies_only_on_run() {
        let mut app = test_app();
        update(&mut app, Action::SetAskFilter("Business".into()));
        assert_eq!(result_ids(&app), vec![1, 2, 3]);

        update(&mut app, Action::RunAsk);
        assert_eq!(result_ids(&app), vec![2]);
        assert_eq!(app.ask.runs, 1);
        assert_eq!(app.status_message, "1 mock prediction(s)");
    }

    #[test]
    fn test_run_with_unmatched_category_shows_all() {
        let mut app = test_app();
        update(&mut app, Action::SetAskFilter("Risk".into()));
        update(&mut app, Action::RunAsk);
        assert_eq!(result_ids(&app), vec![1, 2, 3]);
        assert_eq!(app.status_message, "No Risk examples, showing all 3");
    }

    #[test]
    fn test_unknown_filter_option_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::SetAskFilter("Weather".into()));
        assert_eq!(app.ask.filter_value(), &FilterValue::from("Sports"));
        update(&mut app, Action::RunAsk);
        assert_eq!(result_ids(&app), vec![1]);
    }

    #[test]
    fn test_step_ask_filter_pushes_value() {
        let mut app = test_app();
        update(&mut app, Action::StepAskFilter(Step::Next));
        assert_eq!(app.ask.filter_value(), &FilterValue::from("Markets"));
        for _ in 0..10 {
            update(&mut app, Action::StepAskFilter(Step::Next));
        }
        assert_eq!(app.ask.filter_value(), &FilterValue::All);
        update(&mut app, Action::RunAsk);
        assert_eq!(result_ids(&app), vec![1, 2, 3]);
    }

    #[test]
    fn test_edit_question_does_not_affect_results() {
        let mut app = test_app();
        update(&mut app, Action::EditQuestion("Will it rain?".into()));
        update(&mut app, Action::RunAsk);
        assert_eq!(app.ask.question, "Will it rain?");
        assert_eq!(result_ids(&app), vec![1]);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
