//! # Views
//!
//! The console is a set of named top-level screens. Exactly one of them is
//! current at any time; `ViewRouter` owns that scalar and nothing else.
//!
//! ```text
//! Overview → Ask → SimLab → Domains → ... → Admin → Legal
//!    ▲                                                │
//!    └──────────────── NextView wraps ────────────────┘
//! ```
//!
//! The router knows nothing about the other state holders.
//! Switching views never resets an accordion, a tab group or a filter.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fifteen screens of the console, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Overview,
    #[serde(rename = "ask")]
    AskEngine,
    #[serde(rename = "simlab")]
    SimulationLab,
    Domains,
    Models,
    Workflows,
    #[serde(rename = "ingestion")]
    DataIngestion,
    Agents,
    Insights,
    #[serde(rename = "api")]
    ApiExplorer,
    Archive,
    Architecture,
    #[serde(rename = "diligence")]
    DueDiligence,
    Admin,
    Legal,
}

impl View {
    /// Every view, in the order the navigation bar shows them.
    pub const ALL: [View; 15] = [
        View::Overview,
        View::AskEngine,
        View::SimulationLab,
        View::Domains,
        View::Models,
        View::Workflows,
        View::DataIngestion,
        View::Agents,
        View::Insights,
        View::ApiExplorer,
        View::Archive,
        View::Architecture,
        View::DueDiligence,
        View::Admin,
        View::Legal,
    ];

    /// Short identifier used in config files, the CLI and the dataset bundle.
    pub fn id(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::AskEngine => "ask",
            View::SimulationLab => "simlab",
            View::Domains => "domains",
            View::Models => "models",
            View::Workflows => "workflows",
            View::DataIngestion => "ingestion",
            View::Agents => "agents",
            View::Insights => "insights",
            View::ApiExplorer => "api",
            View::Archive => "archive",
            View::Architecture => "architecture",
            View::DueDiligence => "diligence",
            View::Admin => "admin",
            View::Legal => "legal",
        }
    }

    /// Label shown on the navigation tab.
    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::AskEngine => "Ask",
            View::SimulationLab => "Simulation Lab",
            View::Domains => "Domains",
            View::Models => "Models",
            View::Workflows => "Workflows",
            View::DataIngestion => "Data",
            View::Agents => "Agents",
            View::Insights => "Insights",
            View::ApiExplorer => "API",
            View::Archive => "Archive",
            View::Architecture => "Architecture",
            View::DueDiligence => "Due Diligence",
            View::Admin => "Admin",
            View::Legal => "Legal",
        }
    }

    fn position(self) -> usize {
        // ALL mirrors declaration order
        self as usize
    }

    /// The following view in navigation order (wraps around).
    pub fn next(self) -> View {
        View::ALL[(self.position() + 1) % View::ALL.len()]
    }

    /// The preceding view in navigation order (wraps around).
    pub fn prev(self) -> View {
        let len = View::ALL.len();
        View::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string names none of the fifteen views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {:?}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    /// Accepts the short id (`"diligence"`) or the variant name
    /// (`"DueDiligence"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        View::ALL
            .into_iter()
            .find(|v| {
                v.id().eq_ignore_ascii_case(needle)
                    || format!("{v:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Holds the single current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    current: View,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new(View::default())
    }
}

impl ViewRouter {
    pub fn new(initial: View) -> Self {
        Self { current: initial }
    }

    pub fn current_view(&self) -> View {
        self.current
    }

    /// Switch to `view`. Idempotent.
    pub fn set_view(&mut self, view: View) {
        if self.current != view {
            debug!("View change: {} -> {}", self.current, view);
        }
        self.current = view;
    }

    /// Switch to the view named by `id`.
    ///
    /// Returns `false` and leaves the current view untouched when `id`
    /// names no known view.
    pub fn set_view_by_id(&mut self, id: &str) -> bool {
        match id.parse::<View>() {
            Ok(view) => {
                self.set_view(view);
                true
            }
            Err(e) => {
                warn!("Ignoring view request: {e}");
                false
            }
        }
    }

    pub fn next(&mut self) {
        self.set_view(self.current.next());
    }

    pub fn prev(&mut self) {
        self.set_view(self.current.prev());
    }
}
