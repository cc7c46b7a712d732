//! Checklist dataset model: one row per catalogued card line, plus the
//! distinct player/team indexes the UI selects from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse a dataset out of its JSON wire form.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid checklist JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serial-numbered print-run tiers, in the fixed display order used
/// everywhere: highest print run first, one-of-one last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Serial99,
    Serial50,
    Serial25,
    Serial10,
    Serial5,
    OneOfOne,
}

impl Tier {
    pub const ALL: [Self; 6] = [
        Self::Serial99,
        Self::Serial50,
        Self::Serial25,
        Self::Serial10,
        Self::Serial5,
        Self::OneOfOne,
    ];

    /// Display label, e.g. `/99` or `1/1`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Serial99 => "/99",
            Self::Serial50 => "/50",
            Self::Serial25 => "/25",
            Self::Serial10 => "/10",
            Self::Serial5 => "/5",
            Self::OneOfOne => "1/1",
        }
    }

    /// Number of copies a serial run of this tier denotes.
    #[must_use]
    pub const fn run_size(self) -> u64 {
        match self {
            Self::Serial99 => 99,
            Self::Serial50 => 50,
            Self::Serial25 => 25,
            Self::Serial10 => 10,
            Self::Serial5 => 5,
            Self::OneOfOne => 1,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One checklist row: a player/team/set/code entry with its print-run
/// breakdown across the six tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChecklistLine {
    pub player: String,
    /// Empty string means the line is unattributed to a team.
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub v99: u64,
    #[serde(default)]
    pub v50: u64,
    #[serde(default)]
    pub v25: u64,
    #[serde(default)]
    pub v10: u64,
    #[serde(default)]
    pub v5: u64,
    #[serde(default)]
    pub v1: u64,
    #[serde(default)]
    pub total: u64,
}

impl ChecklistLine {
    /// Print count for a single tier on this line.
    #[must_use]
    pub const fn tier_count(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Serial99 => self.v99,
            Tier::Serial50 => self.v50,
            Tier::Serial25 => self.v25,
            Tier::Serial10 => self.v10,
            Tier::Serial5 => self.v5,
            Tier::OneOfOne => self.v1,
        }
    }

    /// Sum of the six tier counts. Ingestion uses this as the line total
    /// whenever the source supplies no explicit total column.
    #[must_use]
    pub const fn tier_sum(&self) -> u64 {
        self.v99 + self.v50 + self.v25 + self.v10 + self.v5 + self.v1
    }
}

/// Immutable dataset snapshot consumed by the odds engine and the UI.
///
/// `players` and `teams` are exactly the distinct non-empty values observed
/// in `rows`, lexicographically sorted. Rows without a player never make it
/// into a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChecklistDataset {
    pub rows: Vec<ChecklistLine>,
    pub players: Vec<String>,
    pub teams: Vec<String>,
}

impl ChecklistDataset {
    /// Create an empty dataset (useful for tests and the loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dataset from raw rows, enforcing the snapshot invariants:
    /// rows with an empty player are dropped, and the player/team indexes
    /// are derived from the surviving rows only.
    #[must_use]
    pub fn from_rows(rows: Vec<ChecklistLine>) -> Self {
        let rows: Vec<ChecklistLine> = rows
            .into_iter()
            .filter(|row| !row.player.is_empty())
            .collect();
        let players = distinct_sorted(rows.iter().map(|row| row.player.as_str()));
        let teams = distinct_sorted(
            rows.iter()
                .map(|row| row.team.as_str())
                .filter(|team| !team.is_empty()),
        );
        Self {
            rows,
            players,
            teams,
        }
    }

    /// Parse a dataset from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into the dataset shape.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Distinct, sorted teams appearing on the given player's rows.
    /// The empty "unattributed" team is never listed.
    #[must_use]
    pub fn teams_for_player(&self, player: &str) -> Vec<String> {
        distinct_sorted(
            self.rows
                .iter()
                .filter(|row| row.player == player && !row.team.is_empty())
                .map(|row| row.team.as_str()),
        )
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort();
    out.dedup();
    out
}
