//! # Core Application Logic
//!
//! This module contains Foresight's state layer.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   tests/   │
//!             │  Adapter   │          │  (drive    │
//!             │ (ratatui)  │          │  update()) │
//!             └────────────┘          └────────────┘
//! ```
//!
//! `config` and `dataset::DatasetBundle::load` are the only places that
//! touch the filesystem, and only at start-up.
//!
//! ## Modules
//!
//! - [`view`]: which screen is showing (`View`, `ViewRouter`)
//! - [`selection`]: tabs and accordions (`SingleSelectionGroup`)
//! - [`filter`]: the mock results list (`FilterableCollection`)
//! - [`dataset`]: all literal content (`DatasetBundle`)
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod selection;
pub mod state;
pub mod view;
