//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::dataset::DatasetBundle;
use crate::core::state::App;

/// A small bundle: three domains, two layer groups, three FAQ entries and
/// one mock prediction per category (Sports, Business, Markets).
pub fn test_bundle_json() -> String {
    r#"{
  "brand": { "title": "Test Console", "owner": "Tester", "disclaimer": "Mock only." },
  "domains": [
    { "key": "Sports", "title": "Sports Center", "rows": [
      { "name": "Match Model", "detail": "Win odds.", "coverage": "Leagues." }
    ] },
    { "key": "Markets", "title": "Markets Center" },
    { "key": "Risk", "title": "Risk Center" }
  ],
  "architecture": [
    { "group": "Foundations", "layers": [
      { "name": "Layer 0", "bullets": ["Repo"] },
      { "name": "Layer 1", "bullets": ["Boot"] }
    ] },
    { "group": "Pipeline", "layers": [ { "name": "Layer 2" } ] }
  ],
  "faq": [
    { "question": "Q1", "answer": "A1" },
    { "question": "Q2", "answer": "A2" },
    { "question": "Q3", "answer": "A3" }
  ],
  "ask": {
    "filter_options": ["Sports", "Markets", "Business", "Risk", "All"],
    "initial_filter": "Sports",
    "predictions": [
      { "id": 1, "question": "Team A vs Team B?", "domain": "Sports",
        "probability": "Team A win: 64%", "confidence": "High",
        "reasoning": "Form.", "horizon": "24h" },
      { "id": 2, "question": "Revenue growth?", "domain": "Business",
        "probability": "Growth: 72%", "confidence": "Medium",
        "reasoning": "Seasonality.", "horizon": "30d" },
      { "id": 3, "question": "BTC trend?", "domain": "Markets",
        "probability": "Up: 58%", "confidence": "Medium",
        "reasoning": "Momentum.", "horizon": "24h" }
    ]
  }
}"#
    .to_string()
}

pub fn test_bundle() -> DatasetBundle {
    DatasetBundle::from_json(&test_bundle_json()).expect("test bundle is valid")
}

/// Creates a test App over the small bundle.
pub fn test_app() -> App {
    App::new(test_bundle())
}
