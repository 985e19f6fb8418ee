//! finview - Terminal personal finance dashboard
//!
//! Record expenses, categorize them, set per-category monthly budgets,
//! and watch the charts from a tabbed terminal dashboard. All state
//! lives in three JSON files; there is no server and no network.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets)
//! - `storage`: JSON file storage layer (three independent stores)
//! - `reports`: Pure derived-view computation over store snapshots
//! - `charts`: Chart view-model builders and their ratatui renderers
//! - `tui`: The tabbed terminal interface

pub mod charts;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::{FinviewError, FinviewResult};
