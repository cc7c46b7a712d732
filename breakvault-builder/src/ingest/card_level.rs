//! Paired-sheet ingestion: a `Card-Level` listing joined to `Set Info`
//! serial descriptions.
//!
//! Print runs here are not tabulated per tier; they are scraped out of
//! free-text serial descriptions like `"Base /99, Gold /25, Superfractor
//! 1/1"`. A tier found in the text contributes its own run size as the
//! line's print count for that tier.

use std::collections::{BTreeMap, BTreeSet};

use breakvault_odds::{ChecklistLine, Tier};
use once_cell::sync::Lazy;
use regex::Regex;

use super::columns;
use super::{IngestError, IngestMode, Table, Workbook};

const CARD_SHEET: &str = "Card-Level";
const SET_INFO_SHEET: &str = "Set Info";

/// Matches `/N` print-run mentions, tolerating space after the slash.
static SERIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\s*(\d+)").unwrap());
/// Matches a literal one-of-one mention.
static ONE_OF_ONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b1\s*/\s*1\b").unwrap());
/// Trailing parenthetical suffix on a set name, e.g. `"Dynasty (Black)"`.
static SET_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.*?\)\s*$").unwrap());

pub struct CardLevelMode;

/// Set names on the two sheets differ by trailing parentheticals; the join
/// key strips them.
fn norm_set_name(name: &str) -> String {
    SET_SUFFIX_RE.replace(name, "").trim().to_string()
}

/// Collect the distinct print runs mentioned across the serial description
/// texts. A field opening with `(not stated` contributes nothing.
fn parse_serials(base: &str, parallels: &str) -> BTreeSet<u64> {
    let mut serials = BTreeSet::new();
    for text in [base, parallels] {
        let text = text.trim();
        if text.is_empty() || text.to_lowercase().starts_with("(not stated") {
            continue;
        }
        for capture in SERIAL_RE.captures_iter(text) {
            if let Ok(n) = capture[1].parse::<u64>() {
                serials.insert(n);
            }
        }
        if ONE_OF_ONE_RE.is_match(text) {
            serials.insert(1);
        }
    }
    serials
}

/// `base`/`parallels` description pair for one set.
#[derive(Debug, Clone, Default)]
struct SetSerials {
    base: String,
    parallels: String,
}

fn set_serials_by_name(set_info: &Table) -> BTreeMap<String, SetSerials> {
    let headers = set_info.headers();
    let set_col = columns::resolve(headers, columns::SET);
    let base_col = columns::resolve(headers, columns::BASE_SERIAL);
    let parallels_col = columns::resolve(headers, columns::PARALLELS);

    let mut by_name = BTreeMap::new();
    for row in set_info.rows() {
        let name = norm_set_name(&set_info.cell(row, set_col).text());
        by_name.insert(
            name,
            SetSerials {
                base: set_info.cell(row, base_col).text(),
                parallels: set_info.cell(row, parallels_col).text(),
            },
        );
    }
    by_name
}

impl IngestMode for CardLevelMode {
    fn name(&self) -> &'static str {
        "card-level"
    }

    fn applies(&self, workbook: &Workbook) -> bool {
        workbook.sheet(CARD_SHEET).is_some() && workbook.sheet(SET_INFO_SHEET).is_some()
    }

    fn ingest(&self, workbook: &Workbook) -> Result<Vec<ChecklistLine>, IngestError> {
        let cards = workbook
            .sheet(CARD_SHEET)
            .ok_or_else(|| IngestError::EmptySheet {
                name: CARD_SHEET.to_string(),
            })?;
        if cards.is_empty() {
            return Err(IngestError::EmptySheet {
                name: CARD_SHEET.to_string(),
            });
        }
        let set_info = workbook
            .sheet(SET_INFO_SHEET)
            .ok_or_else(|| IngestError::EmptySheet {
                name: SET_INFO_SHEET.to_string(),
            })?;

        let headers = cards.headers();
        let player_col = columns::resolve(headers, columns::PLAYER);
        let team_col = columns::resolve(headers, columns::TEAM);
        let (Some(player_col), Some(team_col)) = (player_col, team_col) else {
            return Err(IngestError::MissingColumns {
                sheet: CARD_SHEET.to_string(),
                found: headers.join(", "),
            });
        };
        let set_col = columns::resolve(headers, columns::SET);
        let code_col = columns::resolve(headers, columns::CODE);

        let serials_by_set = set_serials_by_name(set_info);

        let rows = cards
            .rows()
            .iter()
            .map(|row| {
                let set = cards.cell(row, set_col).text();
                let serials = serials_by_set
                    .get(&norm_set_name(&set))
                    .map(|info| parse_serials(&info.base, &info.parallels))
                    .unwrap_or_default();
                let count = |tier: Tier| {
                    if serials.contains(&tier.run_size()) {
                        tier.run_size()
                    } else {
                        0
                    }
                };
                let counts: Vec<u64> = Tier::ALL.iter().map(|&tier| count(tier)).collect();
                ChecklistLine {
                    player: cards.cell(row, Some(player_col)).text(),
                    team: cards.cell(row, Some(team_col)).text(),
                    set,
                    code: cards.cell(row, code_col).text(),
                    v99: counts[0],
                    v50: counts[1],
                    v25: counts[2],
                    v10: counts[3],
                    v5: counts[4],
                    v1: counts[5],
                    total: counts.iter().sum(),
                }
            })
            .collect();
        Ok(rows)
    }
}
