//! Workbook ingestion: one contract, swappable sheet-layout modes.
//!
//! A workbook is ingested by whichever [`IngestMode`] recognizes its sheets:
//! a single flexible `Checklist` sheet, or the paired `Card-Level` /
//! `Set Info` layout. Both modes emit raw checklist rows; the shared
//! [`ChecklistDataset::from_rows`] constructor then enforces the dataset
//! invariants, so the modes are interchangeable producers of the same
//! artifact.

pub mod card_level;
pub mod checklist_sheet;
pub mod columns;

use std::collections::BTreeMap;
use std::path::PathBuf;

use breakvault_odds::numbers::round_f64_to_u64;
use breakvault_odds::{ChecklistDataset, ChecklistLine};
use thiserror::Error;

use card_level::CardLevelMode;
use checklist_sheet::ChecklistSheetMode;

/// Fatal ingestion failures. No partial output is ever written.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("workbook not found: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error(
        "no ingestion mode matches this workbook (sheets: {sheets}); \
         expected a \"Checklist\" sheet, or \"Card-Level\" plus \"Set Info\""
    )]
    UnknownLayout { sheets: String },

    #[error("sheet \"{name}\" has no data rows")]
    EmptySheet { name: String },

    #[error("could not detect required columns in \"{sheet}\" (found: {found}); need at least player and team columns")]
    MissingColumns { sheet: String, found: String },

    #[error("no usable checklist rows: every row is missing a player")]
    NoUsableRows,
}

/// One cell of a source table, already coerced out of calamine's types.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Cell contents as trimmed text; empty cells yield the empty string.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.trim().to_string(),
            Self::Number(n) => n.to_string(),
        }
    }

    /// Cell contents as a non-negative count; anything non-numeric is 0.
    #[must_use]
    pub fn count(&self) -> u64 {
        match self {
            Self::Empty => 0,
            Self::Number(n) => round_f64_to_u64(*n),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(round_f64_to_u64)
                .unwrap_or(0),
        }
    }
}

static EMPTY_CELL: Cell = Cell::Empty;

/// A sheet as a header row plus body rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `column` in `row`, tolerating ragged rows and unresolved
    /// columns by yielding an empty cell.
    #[must_use]
    pub fn cell<'a>(&self, row: &'a [Cell], column: Option<usize>) -> &'a Cell {
        column.and_then(|idx| row.get(idx)).unwrap_or(&EMPTY_CELL)
    }
}

/// All sheets of a source workbook, keyed by sheet name.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    tables: BTreeMap<String, Table>,
}

impl Workbook {
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }
}

/// A sheet layout the builder knows how to aggregate into checklist rows.
pub trait IngestMode {
    fn name(&self) -> &'static str;

    /// Whether this workbook carries the sheets this mode needs.
    fn applies(&self, workbook: &Workbook) -> bool;

    /// Aggregate the workbook into raw checklist rows.
    ///
    /// # Errors
    ///
    /// Returns an error on empty sheets or unresolvable required columns.
    fn ingest(&self, workbook: &Workbook) -> Result<Vec<ChecklistLine>, IngestError>;
}

fn modes() -> [&'static dyn IngestMode; 2] {
    [&ChecklistSheetMode, &CardLevelMode]
}

/// Ingest a workbook with the first applicable mode and build the dataset.
///
/// # Errors
///
/// Fails fast when no mode applies, when the source rows are empty or
/// missing required columns, or when no row carries a player.
pub fn ingest(workbook: &Workbook) -> Result<ChecklistDataset, IngestError> {
    let mode = modes()
        .into_iter()
        .find(|mode| mode.applies(workbook))
        .ok_or_else(|| IngestError::UnknownLayout {
            sheets: workbook.sheet_names().join(", "),
        })?;
    log::info!("ingesting with {} mode", mode.name());

    let rows = mode.ingest(workbook)?;
    let dataset = ChecklistDataset::from_rows(rows);
    if dataset.rows.is_empty() {
        return Err(IngestError::NoUsableRows);
    }
    log::debug!(
        "aggregated {} rows, {} players, {} teams",
        dataset.rows.len(),
        dataset.players.len(),
        dataset.teams.len()
    );
    Ok(dataset)
}
