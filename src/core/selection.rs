//! # Single-Selection Groups
//!
//! A fixed, ordered set of options of which at most one is active.
//! Domain tabs, the architecture sidebar and the FAQ accordion are all
//! instances of this one primitive, differing only in [`SelectionMode`].
//!
//! ```text
//! Plain:   OpenAt(i) ──select(k)──▶ OpenAt(k)
//!
//! Toggle:  OpenAt(i) ──select(i)──▶ Closed
//!          OpenAt(i) ──select(k)──▶ OpenAt(k)      (k != i)
//!          Closed    ──select(k)──▶ OpenAt(k)
//! ```
//!
//! The active option is stored as an index into `options`, so it can
//! never name a key that is not an option. Keys outside the option set
//! are ignored.

use log::{debug, warn};
use std::fmt::Debug;

/// How `select` treats the already-active key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Tabs: selecting always activates. Never closes once opened.
    Plain,
    /// Accordion: selecting the open entry closes it.
    Toggle,
}

/// The state of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Closed,
    OpenAt(usize),
}

/// Which neighbour `step` moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleSelectionGroup<K> {
    options: Vec<K>,
    mode: SelectionMode,
    selection: Selection,
}

impl<K: PartialEq + Debug> SingleSelectionGroup<K> {
    /// Creates a group with the first option active, which is the initial
    /// state for both modes. An empty option list starts `Closed`.
    pub fn new(options: Vec<K>, mode: SelectionMode) -> Self {
        let selection = if options.is_empty() {
            Selection::Closed
        } else {
            Selection::OpenAt(0)
        };
        Self {
            options,
            mode,
            selection,
        }
    }

    pub fn plain(options: Vec<K>) -> Self {
        Self::new(options, SelectionMode::Plain)
    }

    pub fn toggle(options: Vec<K>) -> Self {
        Self::new(options, SelectionMode::Toggle)
    }

    pub fn options(&self) -> &[K] {
        &self.options
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn active_key(&self) -> Option<&K> {
        match self.selection {
            Selection::OpenAt(i) => self.options.get(i),
            Selection::Closed => None,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        match self.selection {
            Selection::OpenAt(i) => Some(i),
            Selection::Closed => None,
        }
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active_key() == Some(key)
    }

    fn index_of(&self, key: &K) -> Option<usize> {
        self.options.iter().position(|o| o == key)
    }

    /// Selects `key` according to the group's mode.
    ///
    /// Returns `false` (and changes nothing) when `key` is not an option.
    pub fn select(&mut self, key: &K) -> bool {
        match self.index_of(key) {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => {
                warn!("Ignoring selection of unknown option {:?}", key);
                false
            }
        }
    }

    /// Index form of [`select`](Self::select). Out-of-range is a no-op.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        let next = match (self.mode, self.selection) {
            (SelectionMode::Toggle, Selection::OpenAt(open)) if open == index => Selection::Closed,
            _ => Selection::OpenAt(index),
        };
        debug!("Selection {:?} -> {:?} ({:?})", self.selection, next, self.mode);
        self.selection = next;
        true
    }

    /// Activates the neighbouring option, clamped at both ends.
    ///
    /// Never closes, even in toggle mode. From `Closed` it opens the first
    /// (`Next`) or last (`Prev`) option.
    pub fn step(&mut self, step: Step) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let last = self.options.len() - 1;
        let target = match (self.selection, step) {
            (Selection::OpenAt(i), Step::Next) => (i + 1).min(last),
            (Selection::OpenAt(i), Step::Prev) => i.saturating_sub(1),
            (Selection::Closed, Step::Next) => 0,
            (Selection::Closed, Step::Prev) => last,
        };
        if self.selection == Selection::OpenAt(target) {
            return false;
        }
        self.selection = Selection::OpenAt(target);
        true
    }
}
