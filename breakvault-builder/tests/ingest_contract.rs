//! Both ingestion modes must be interchangeable producers of the same
//! dataset contract: invariants hold no matter which sheet layout the
//! workbook used.

use breakvault_builder::ingest::{Cell, Table, Workbook, ingest};
use breakvault_odds::{ChecklistDataset, product_total};

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

fn number(n: f64) -> Cell {
    Cell::Number(n)
}

/// `Checklist`-sheet workbook describing two players, one playerless row.
fn checklist_workbook() -> Workbook {
    let table = Table::new(
        vec![
            "Player".into(),
            "Team".into(),
            "Set".into(),
            "Code".into(),
            "/99".into(),
            "/25".into(),
            "1/1".into(),
        ],
        vec![
            vec![
                text("Bukayo Saka"),
                text("Arsenal"),
                text("Dynasty"),
                text("D-BS"),
                number(99.0),
                number(25.0),
                number(1.0),
            ],
            vec![
                text("Jude Bellingham"),
                text("Real Madrid"),
                text("Dynasty"),
                text("D-JB"),
                number(99.0),
                number(0.0),
                number(1.0),
            ],
            vec![
                text(""),
                text("Checklist header row"),
                text(""),
                text(""),
                number(0.0),
                number(0.0),
                number(0.0),
            ],
        ],
    );
    let mut workbook = Workbook::default();
    workbook.insert("Checklist", table);
    workbook
}

/// Card-level workbook describing the same product through set serials.
fn card_level_workbook() -> Workbook {
    let cards = Table::new(
        vec![
            "Players".into(),
            "Team(s)".into(),
            "Set".into(),
            "Code".into(),
        ],
        vec![
            vec![
                text("Bukayo Saka"),
                text("Arsenal"),
                text("Dynasty (Base)"),
                text("D-BS"),
            ],
            vec![
                text("Jude Bellingham"),
                text("Real Madrid"),
                text("Dynasty Chrome"),
                text("D-JB"),
            ],
            vec![text(""), text(""), text("Dynasty"), text("")],
        ],
    );
    let set_info = Table::new(
        vec!["Set".into(), "Base serial".into(), "Parallels".into()],
        vec![
            vec![
                text("Dynasty"),
                text("Base /99"),
                text("Gold /25, Superfractor 1/1"),
            ],
            vec![
                text("Dynasty Chrome"),
                text("(not stated on base)"),
                text("Refractor /99, Superfractor 1/1"),
            ],
        ],
    );
    let mut workbook = Workbook::default();
    workbook.insert("Card-Level", cards);
    workbook.insert("Set Info", set_info);
    workbook
}

fn assert_invariants(dataset: &ChecklistDataset) {
    // Indexes are exactly the distinct non-empty values in the rows.
    let mut players: Vec<String> = dataset.rows.iter().map(|r| r.player.clone()).collect();
    players.sort();
    players.dedup();
    assert_eq!(dataset.players, players);

    let mut teams: Vec<String> = dataset
        .rows
        .iter()
        .map(|r| r.team.clone())
        .filter(|t| !t.is_empty())
        .collect();
    teams.sort();
    teams.dedup();
    assert_eq!(dataset.teams, teams);

    for row in &dataset.rows {
        assert!(!row.player.is_empty(), "playerless row survived ingestion");
    }
}

#[test]
fn checklist_mode_satisfies_dataset_invariants() {
    let dataset = ingest(&checklist_workbook()).unwrap();
    assert_invariants(&dataset);
    assert_eq!(dataset.rows.len(), 2);
    assert_eq!(dataset.players, vec!["Bukayo Saka", "Jude Bellingham"]);
    // 125 + 100
    assert_eq!(product_total(&dataset), 225);
}

#[test]
fn card_level_mode_satisfies_dataset_invariants() {
    let dataset = ingest(&card_level_workbook()).unwrap();
    assert_invariants(&dataset);
    assert_eq!(dataset.rows.len(), 2);
    assert_eq!(dataset.players, vec!["Bukayo Saka", "Jude Bellingham"]);
    // Saka: /99 + /25 + 1/1 = 125; Bellingham: /99 + 1/1 = 100.
    assert_eq!(product_total(&dataset), 225);
}

#[test]
fn the_two_modes_agree_on_equivalent_products() {
    let from_checklist = ingest(&checklist_workbook()).unwrap();
    let from_cards = ingest(&card_level_workbook()).unwrap();

    assert_eq!(from_checklist.players, from_cards.players);
    assert_eq!(from_checklist.teams, from_cards.teams);
    assert_eq!(
        product_total(&from_checklist),
        product_total(&from_cards)
    );
    for (a, b) in from_checklist.rows.iter().zip(&from_cards.rows) {
        assert_eq!(a.player, b.player);
        assert_eq!(a.total, b.total);
        assert_eq!(a.tier_sum(), b.tier_sum());
    }
}

#[test]
fn lines_without_explicit_totals_sum_their_tiers() {
    for workbook in [checklist_workbook(), card_level_workbook()] {
        let dataset = ingest(&workbook).unwrap();
        for row in &dataset.rows {
            assert_eq!(row.total, row.tier_sum());
        }
    }
}
