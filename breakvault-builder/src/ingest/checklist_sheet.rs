//! Single-sheet ingestion: a `Checklist` sheet with one column per tier.

use breakvault_odds::ChecklistLine;

use super::columns;
use super::{IngestError, IngestMode, Table, Workbook};

const SHEET: &str = "Checklist";

/// Reads a flat `Checklist` sheet where each serial tier has its own
/// numeric column and an explicit per-line total may or may not exist.
pub struct ChecklistSheetMode;

struct Columns {
    player: usize,
    team: usize,
    set: Option<usize>,
    code: Option<usize>,
    tiers: [Option<usize>; 6],
    total: Option<usize>,
}

impl Columns {
    fn detect(table: &Table) -> Result<Self, IngestError> {
        let headers = table.headers();
        let player = columns::resolve(headers, columns::PLAYER);
        let team = columns::resolve(headers, columns::TEAM);
        let (Some(player), Some(team)) = (player, team) else {
            log::error!("detected columns: {}", headers.join(", "));
            return Err(IngestError::MissingColumns {
                sheet: SHEET.to_string(),
                found: headers.join(", "),
            });
        };
        Ok(Self {
            player,
            team,
            set: columns::resolve(headers, columns::SET),
            code: columns::resolve(headers, columns::CODE),
            tiers: [
                columns::resolve(headers, columns::V99),
                columns::resolve(headers, columns::V50),
                columns::resolve(headers, columns::V25),
                columns::resolve(headers, columns::V10),
                columns::resolve(headers, columns::V5),
                columns::resolve(headers, columns::V1),
            ],
            total: columns::resolve(headers, columns::TOTAL),
        })
    }
}

impl IngestMode for ChecklistSheetMode {
    fn name(&self) -> &'static str {
        "checklist-sheet"
    }

    fn applies(&self, workbook: &Workbook) -> bool {
        workbook.sheet(SHEET).is_some()
    }

    fn ingest(&self, workbook: &Workbook) -> Result<Vec<ChecklistLine>, IngestError> {
        let table = workbook.sheet(SHEET).ok_or_else(|| IngestError::EmptySheet {
            name: SHEET.to_string(),
        })?;
        if table.is_empty() {
            return Err(IngestError::EmptySheet {
                name: SHEET.to_string(),
            });
        }
        let cols = Columns::detect(table)?;

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let counts: Vec<u64> = cols
                    .tiers
                    .iter()
                    .map(|&col| table.cell(row, col).count())
                    .collect();
                // Prefer the explicit total column when present, else sum
                // the tier columns.
                let total = match cols.total {
                    Some(col) => table.cell(row, Some(col)).count(),
                    None => counts.iter().sum(),
                };
                ChecklistLine {
                    player: table.cell(row, Some(cols.player)).text(),
                    team: table.cell(row, Some(cols.team)).text(),
                    set: table.cell(row, cols.set).text(),
                    code: table.cell(row, cols.code).text(),
                    v99: counts[0],
                    v50: counts[1],
                    v25: counts[2],
                    v10: counts[3],
                    v5: counts[4],
                    v1: counts[5],
                    total,
                }
            })
            .collect();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn number(n: f64) -> Cell {
        Cell::Number(n)
    }

    fn workbook_with(table: Table) -> Workbook {
        let mut workbook = Workbook::default();
        workbook.insert(SHEET, table);
        workbook
    }

    #[test]
    fn reads_tier_columns_and_sums_totals() {
        let table = Table::new(
            vec![
                "Player".into(),
                "Team".into(),
                "Set".into(),
                "Code".into(),
                "/99".into(),
                "/50".into(),
                "1/1".into(),
            ],
            vec![vec![
                text("Saka"),
                text("Arsenal"),
                text("Dynasty Autographs"),
                text("DA-BS"),
                number(99.0),
                number(50.0),
                number(1.0),
            ]],
        );
        let rows = ChecklistSheetMode.ingest(&workbook_with(table)).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.player, "Saka");
        assert_eq!(row.set, "Dynasty Autographs");
        assert_eq!(row.v99, 99);
        assert_eq!(row.v50, 50);
        assert_eq!(row.v25, 0);
        assert_eq!(row.v1, 1);
        // No total column: the tier sum is the total.
        assert_eq!(row.total, 150);
    }

    #[test]
    fn explicit_total_column_wins_over_tier_sum() {
        let table = Table::new(
            vec![
                "Players".into(),
                "Team(s)".into(),
                "Print /99".into(),
                "Total print".into(),
            ],
            vec![vec![
                text("Saka"),
                text("Arsenal"),
                number(99.0),
                number(240.0),
            ]],
        );
        let rows = ChecklistSheetMode.ingest(&workbook_with(table)).unwrap();
        assert_eq!(rows[0].total, 240);
        assert_eq!(rows[0].v99, 99);
    }

    #[test]
    fn empty_sheet_fails_fast() {
        let table = Table::new(vec!["Player".into(), "Team".into()], vec![]);
        let err = ChecklistSheetMode
            .ingest(&workbook_with(table))
            .unwrap_err();
        assert!(matches!(err, IngestError::EmptySheet { .. }));
    }

    #[test]
    fn missing_player_and_team_columns_fail_with_detected_listing() {
        let table = Table::new(
            vec!["Price".into(), "Notes".into()],
            vec![vec![number(1.0), text("promo")]],
        );
        let err = ChecklistSheetMode
            .ingest(&workbook_with(table))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Price"));
        assert!(message.contains("player and team"));
    }

    #[test]
    fn ragged_rows_read_as_empty_cells() {
        let table = Table::new(
            vec!["Player".into(), "Team".into(), "/99".into()],
            vec![vec![text("Saka")]],
        );
        let rows = ChecklistSheetMode.ingest(&workbook_with(table)).unwrap();
        assert_eq!(rows[0].team, "");
        assert_eq!(rows[0].v99, 0);
        assert_eq!(rows[0].total, 0);
    }
}
