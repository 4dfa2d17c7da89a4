//! # Dataset Bundle
//!
//! All literal content of the console: page text, domain centers,
//! architecture layers, FAQ entries and the mock prediction records.
//! The state layer only reads the option keys and the prediction
//! categories out of it; everything else is passed through to rendering.
//!
//! A default bundle is compiled in from `assets/dataset.json`. A user
//! bundle with the same shape can replace it at start-up.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::filter::Categorized;
use crate::core::view::View;

const EMBEDDED_DATASET: &str = include_str!("../../assets/dataset.json");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetBundle {
    pub brand: Brand,
    #[serde(default)]
    pub default_view: View,
    #[serde(default)]
    pub pages: Vec<Page>,
    pub domains: Vec<DomainCenter>,
    pub architecture: Vec<LayerGroup>,
    pub faq: Vec<FaqEntry>,
    pub ask: AskData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Brand {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub disclaimer: String,
}

/// Static content for one view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    pub view: View,
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub table: Option<Table>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomainCenter {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub rows: Vec<DomainRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomainRow {
    pub name: String,
    pub detail: String,
    pub coverage: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayerGroup {
    pub group: String,
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Layer {
    pub name: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AskData {
    pub filter_options: Vec<String>,
    pub initial_filter: String,
    pub predictions: Vec<MockPrediction>,
}

/// A scripted result shown by the Ask view.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MockPrediction {
    pub id: u32,
    pub question: String,
    pub domain: String,
    pub probability: String,
    pub confidence: String,
    pub reasoning: String,
    pub horizon: String,
}

impl Categorized for MockPrediction {
    fn category(&self) -> &str {
        &self.domain
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "dataset I/O error: {e}"),
            DatasetError::Parse(e) => write!(f, "dataset parse error: {e}"),
            DatasetError::Invalid(reason) => write!(f, "invalid dataset: {reason}"),
        }
    }
}

impl std::error::Error for DatasetError {}

// ============================================================================
// Loading
// ============================================================================

impl DatasetBundle {
    /// The bundle compiled into the binary.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Parse and validate a JSON bundle.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let bundle: DatasetBundle = serde_json::from_str(json).map_err(DatasetError::Parse)?;
        bundle.validate()?;
        debug!(
            "Dataset: {} pages, {} domains, {} layer groups, {} FAQ entries, {} predictions",
            bundle.pages.len(),
            bundle.domains.len(),
            bundle.architecture.len(),
            bundle.faq.len(),
            bundle.ask.predictions.len()
        );
        Ok(bundle)
    }

    /// Load a bundle from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(DatasetError::Io)?;
        let bundle = Self::from_json(&contents)?;
        info!("Loaded dataset from {}", path.display());
        Ok(bundle)
    }

    /// Checks that every selection group has options and unique keys.
    pub fn validate(&self) -> Result<(), DatasetError> {
        check_group("domains", self.domains.iter().map(|d| d.key.as_str()))?;
        check_group(
            "architecture",
            self.architecture.iter().map(|g| g.group.as_str()),
        )?;
        check_group("faq", self.faq.iter().map(|e| e.question.as_str()))?;
        check_group(
            "ask.filter_options",
            self.ask.filter_options.iter().map(String::as_str),
        )?;

        if !self.ask.filter_options.contains(&self.ask.initial_filter) {
            return Err(DatasetError::Invalid(format!(
                "ask.initial_filter {:?} is not one of ask.filter_options",
                self.ask.initial_filter
            )));
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.view) {
                return Err(DatasetError::Invalid(format!(
                    "duplicate page for view {}",
                    page.view
                )));
            }
        }
        Ok(())
    }

    pub fn page(&self, view: View) -> Option<&Page> {
        self.pages.iter().find(|p| p.view == view)
    }

    pub fn domain(&self, key: &str) -> Option<&DomainCenter> {
        self.domains.iter().find(|d| d.key == key)
    }

    pub fn layer_group(&self, group: &str) -> Option<&LayerGroup> {
        self.architecture.iter().find(|g| g.group == group)
    }

    pub fn faq_entry(&self, question: &str) -> Option<&FaqEntry> {
        self.faq.iter().find(|e| e.question == question)
    }
}

fn check_group<'a>(name: &str, keys: impl Iterator<Item = &'a str>) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(DatasetError::Invalid(format!(
                "duplicate key {key:?} in {name}"
            )));
        }
    }
    if seen.is_empty() {
        return Err(DatasetError::Invalid(format!("{name} has no entries")));
    }
    Ok(())
}
