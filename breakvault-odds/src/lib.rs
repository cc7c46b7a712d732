//! Breakvault Odds Engine
//!
//! Platform-agnostic checklist model and break-odds math for the Breakvault
//! calculators. This crate owns the dataset contract shared by the spreadsheet
//! builder and the web UI, plus the pure probability functions the calculator
//! pages call on every input change. No UI or platform-specific dependencies.

pub mod checklist;
pub mod format;
pub mod numbers;
pub mod odds;
pub mod selection;

// Re-export commonly used types
pub use checklist::{ChecklistDataset, ChecklistLine, DatasetError, Tier};
pub use format::{one_in, pct};
pub use odds::{
    OddsReport, TierOdds, at_least_one, compute, filter_lines, hit_probability, product_total,
    selection_total, tier_breakdown,
};
pub use selection::Selection;
