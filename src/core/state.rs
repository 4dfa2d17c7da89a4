//! # Application State
//!
//! The single session object. Every piece of mutable UI state lives here,
//! each in its own container, and nothing else in the crate holds any.
//!
//! ```text
//! App
//! ├── dataset: DatasetBundle                          // read-only content
//! ├── router: ViewRouter                              // current view
//! ├── domain_tabs: SingleSelectionGroup<String>       // plain, Domains view
//! ├── architecture_groups: SingleSelectionGroup<..>   // plain, Architecture view
//! ├── faq: SingleSelectionGroup<String>               // toggle, Due Diligence view
//! ├── ask: AskPanel                                   // Ask view
//! │   ├── filter_choice: SingleSelectionGroup<String> // dropdown, plain
//! │   ├── predictions: FilterableCollection<..>       // mock results
//! │   └── question: String                            // free text, never read
//! └── status_message: String                          // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::dataset::{DatasetBundle, DomainCenter, FaqEntry, LayerGroup, MockPrediction, Page};
use crate::core::filter::{FilterValue, FilterableCollection};
use crate::core::selection::SingleSelectionGroup;
use crate::core::view::{View, ViewRouter};

pub struct AskPanel {
    pub filter_choice: SingleSelectionGroup<String>,
    pub predictions: FilterableCollection<MockPrediction>,
    pub question: String,
    /// How many times the mock prediction has been run this session.
    pub runs: u32,
}

impl AskPanel {
    fn new(dataset: &DatasetBundle) -> Self {
        let mut filter_choice = SingleSelectionGroup::plain(dataset.ask.filter_options.clone());
        // validate() guarantees the initial filter is one of the options
        filter_choice.select(&dataset.ask.initial_filter);
        let predictions = FilterableCollection::new(
            dataset.ask.predictions.clone(),
            FilterValue::from(dataset.ask.initial_filter.as_str()),
        );
        Self {
            filter_choice,
            predictions,
            question: String::new(),
            runs: 0,
        }
    }

    pub fn filter_value(&self) -> &FilterValue {
        self.predictions.filter_value()
    }

    pub fn results(&self) -> Vec<&MockPrediction> {
        self.predictions.visible_items()
    }
}

pub struct App {
    pub dataset: DatasetBundle,
    pub router: ViewRouter,
    pub domain_tabs: SingleSelectionGroup<String>,
    pub architecture_groups: SingleSelectionGroup<String>,
    pub faq: SingleSelectionGroup<String>,
    pub ask: AskPanel,
    pub status_message: String,
}

impl App {
    pub fn new(dataset: DatasetBundle) -> Self {
        let router = ViewRouter::new(dataset.default_view);
        let domain_tabs =
            SingleSelectionGroup::plain(dataset.domains.iter().map(|d| d.key.clone()).collect());
        let architecture_groups = SingleSelectionGroup::plain(
            dataset.architecture.iter().map(|g| g.group.clone()).collect(),
        );
        let faq =
            SingleSelectionGroup::toggle(dataset.faq.iter().map(|e| e.question.clone()).collect());
        let ask = AskPanel::new(&dataset);
        let status_message = format!("Welcome to {}", dataset.brand.title);

        Self {
            dataset,
            router,
            domain_tabs,
            architecture_groups,
            faq,
            ask,
            status_message,
        }
    }

    /// Builds the session, opening on the configured view if one was given.
    pub fn from_config(dataset: DatasetBundle, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(dataset);
        if let Some(view) = config.initial_view {
            app.router.set_view(view);
        }
        app
    }

    pub fn current_view(&self) -> View {
        self.router.current_view()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.dataset.page(self.current_view())
    }

    pub fn active_domain(&self) -> Option<&DomainCenter> {
        self.domain_tabs
            .active_key()
            .and_then(|key| self.dataset.domain(key))
    }

    pub fn active_layer_group(&self) -> Option<&LayerGroup> {
        self.architecture_groups
            .active_key()
            .and_then(|group| self.dataset.layer_group(group))
    }

    pub fn open_faq_entry(&self) -> Option<&FaqEntry> {
        self.faq
            .active_key()
            .and_then(|question| self.dataset.faq_entry(question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::Selection;
    use crate::test_support::{test_app, test_bundle};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.current_view(), View::Overview);
        assert_eq!(app.status_message, "Welcome to Test Console");
        assert_eq!(app.domain_tabs.active_key().map(String::as_str), Some("Sports"));
        assert_eq!(app.architecture_groups.active_index(), Some(0));
        assert_eq!(app.faq.selection(), Selection::OpenAt(0));
    }

    #[test]
    fn test_ask_panel_defaults() {
        let app = test_app();
        assert_eq!(
            app.ask.filter_choice.active_key().map(String::as_str),
            Some("Sports")
        );
        assert_eq!(app.ask.filter_value(), &FilterValue::from("Sports"));
        // Results start as the full list, not the filtered one
        assert_eq!(app.ask.results().len(), 3);
        assert!(app.ask.question.is_empty());
        assert_eq!(app.ask.runs, 0);
    }

    #[test]
    fn test_active_lookups_follow_selection() {
        let mut app = test_app();
        assert_eq!(app.active_domain().map(|d| d.title.as_str()), Some("Sports Center"));
        app.domain_tabs.select(&"Markets".to_string());
        assert_eq!(app.active_domain().map(|d| d.title.as_str()), Some("Markets Center"));

        assert_eq!(app.open_faq_entry().map(|e| e.answer.as_str()), Some("A1"));
        app.faq.select_index(0);
        assert!(app.open_faq_entry().is_none());

        assert_eq!(
            app.active_layer_group().map(|g| g.layers.len()),
            Some(2)
        );
    }

    #[test]
    fn test_from_config_initial_view() {
        let config = ResolvedConfig {
            initial_view: Some(View::Legal),
            ..ResolvedConfig::default()
        };
        let app = App::from_config(test_bundle(), &config);
        assert_eq!(app.current_view(), View::Legal);

        let app = App::from_config(test_bundle(), &ResolvedConfig::default());
        assert_eq!(app.current_view(), View::Overview);
    }

    #[test]
    fn test_dataset_default_view_is_honoured() {
        let mut bundle = test_bundle();
        bundle.default_view = View::Archive;
        assert_eq!(App::new(bundle).current_view(), View::Archive);
    }
}
