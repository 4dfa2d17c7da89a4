//! # Filterable Collection
//!
//! A fixed item list plus a category filter and the subset it currently
//! shows. The filter is chosen with [`FilterableCollection::set_filter`] and
//! takes effect on [`FilterableCollection::apply`].
//!
//! ## Empty-match fallback
//!
//! When a specific category matches nothing, `apply` shows the whole list
//! instead of an empty one ([`FallbackPolicy::ShowAll`]). Visible items
//! therefore do not necessarily match the filter. Check
//! [`FilterableCollection::is_fallback`] before saying they do.

use log::debug;
use std::fmt;

/// Label of the catch-all filter.
pub const ALL_LABEL: &str = "All";

/// Items that belong to exactly one category.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Either every category or one specific category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    All,
    Category(String),
}

impl FilterValue {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Category(c) => c == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterValue::All => ALL_LABEL,
            FilterValue::Category(c) => c,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        if s == ALL_LABEL {
            FilterValue::All
        } else {
            FilterValue::Category(s.to_string())
        }
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        if s == ALL_LABEL {
            FilterValue::All
        } else {
            FilterValue::Category(s)
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What `apply` shows when a specific category matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Show the full, unfiltered list.
    #[default]
    ShowAll,
}

#[derive(Debug, Clone)]
pub struct FilterableCollection<T> {
    items: Vec<T>,
    filter: FilterValue,
    fallback: FallbackPolicy,
    /// Indices into `items` from the most recent `apply`, in source order.
    visible: Vec<usize>,
    /// Filter used by the most recent `apply`.
    applied: FilterValue,
    fell_back: bool,
}

impl<T: Categorized> FilterableCollection<T> {
    /// Until the first `apply`, every item is visible.
    pub fn new(items: Vec<T>, initial_filter: FilterValue) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            filter: initial_filter,
            fallback: FallbackPolicy::default(),
            visible,
            applied: FilterValue::All,
            fell_back: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter_value(&self) -> &FilterValue {
        &self.filter
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    pub fn set_filter(&mut self, value: impl Into<FilterValue>) {
        self.filter = value.into();
        debug!("Filter set to {}", self.filter);
    }

    /// Filter behind the current `visible_items`. Differs from
    /// `filter_value` between `set_filter` and the next `apply`.
    pub fn applied_filter(&self) -> &FilterValue {
        &self.applied
    }

    /// Indices the current filter selects, and whether the fallback was
    /// used. Depends only on the items and the filter.
    fn compute_visible(&self) -> (Vec<usize>, bool) {
        if self.filter == FilterValue::All {
            return ((0..self.items.len()).collect(), false);
        }
        let matched: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(item.category()))
            .map(|(i, _)| i)
            .collect();
        if matched.is_empty() {
            match self.fallback {
                FallbackPolicy::ShowAll => {
                    debug!("No items in category {}, showing all", self.filter);
                    ((0..self.items.len()).collect(), !self.items.is_empty())
                }
            }
        } else {
            (matched, false)
        }
    }

    /// Recomputes and returns the visible items.
    pub fn apply(&mut self) -> Vec<&T> {
        let (visible, fell_back) = self.compute_visible();
        self.visible = visible;
        self.fell_back = fell_back;
        self.applied = self.filter.clone();
        self.visible_items()
    }

    /// Items shown by the most recent `apply`.
    pub fn visible_items(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    /// True when the last `apply` fell back to the full list.
    pub fn is_fallback(&self) -> bool {
        self.fell_back
    }
}
