//! Break-odds math: pure functions from (dataset, selection) to the
//! derived figures the calculator pages render.
//!
//! Draws are modeled as independent Bernoulli trials. The product is
//! actually a finite population sampled without replacement, so the
//! per-draw probability is an approximation that holds when the draw
//! count is small relative to the product print run.

use crate::checklist::{ChecklistDataset, ChecklistLine, Tier};
use crate::numbers::u64_to_f64;
use crate::selection::Selection;

/// Odds for a single serial tier of the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TierOdds {
    pub tier: Tier,
    /// Summed print run of this tier across the filtered lines.
    pub print_run: u64,
    /// Probability a single drawn card is this tier of the selection.
    pub p_hit: f64,
    /// At-least-one odds across one box worth of cards.
    pub p_box: f64,
    /// At-least-one odds across all opened boxes.
    pub p_opened: f64,
}

/// Everything the calculator UI renders for one (dataset, selection) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsReport {
    /// How many checklist rows match the selection.
    pub matching_lines: usize,
    /// Summed print run of the matching rows.
    pub selection_total: u64,
    /// Summed print run of the entire product (the denominator).
    pub product_total: u64,
    /// Probability a single drawn card belongs to the selection.
    pub p_hit: f64,
    pub p_box: f64,
    pub p_opened: f64,
    pub p_case: f64,
    /// Per-tier breakdown in fixed tier order.
    pub tiers: Vec<TierOdds>,
}

/// Rows matching the selected player and, when one is chosen, team.
/// Dataset order is preserved.
#[must_use]
pub fn filter_lines<'a>(
    dataset: &'a ChecklistDataset,
    selection: &Selection,
) -> Vec<&'a ChecklistLine> {
    if selection.player.is_empty() {
        return Vec::new();
    }
    dataset
        .rows
        .iter()
        .filter(|row| {
            row.player == selection.player
                && (selection.team.is_empty() || row.team == selection.team)
        })
        .collect()
}

/// Total print run of the entire product, independent of any selection.
#[must_use]
pub fn product_total(dataset: &ChecklistDataset) -> u64 {
    dataset.rows.iter().map(|row| row.total).sum()
}

/// Total print run of the filtered rows.
#[must_use]
pub fn selection_total(lines: &[&ChecklistLine]) -> u64 {
    lines.iter().map(|row| row.total).sum()
}

/// Probability a single drawn card belongs to the selection:
/// `selection_total / product_total`, or 0 when the denominator is 0.
#[must_use]
pub fn hit_probability(selection_total: u64, product_total: u64) -> f64 {
    if product_total == 0 {
        return 0.0;
    }
    u64_to_f64(selection_total) / u64_to_f64(product_total)
}

/// Chance of at least one success in `trials` independent draws at
/// per-draw probability `p`: `1 - (1 - p)^trials`.
///
/// Degrades to 0 for a non-finite or non-positive `p` or zero trials;
/// never an error.
#[must_use]
pub fn at_least_one(p: f64, trials: u64) -> f64 {
    if !p.is_finite() || p <= 0.0 || trials == 0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    1.0 - (1.0 - p).powf(u64_to_f64(trials))
}

/// Per-tier odds across the filtered rows, in fixed tier order.
#[must_use]
pub fn tier_breakdown(
    lines: &[&ChecklistLine],
    product_total: u64,
    cards_per_box: u64,
    trials_opened: u64,
) -> Vec<TierOdds> {
    Tier::ALL
        .iter()
        .map(|&tier| {
            let print_run: u64 = lines.iter().map(|row| row.tier_count(tier)).sum();
            let p_hit = hit_probability(print_run, product_total);
            TierOdds {
                tier,
                print_run,
                p_hit,
                p_box: at_least_one(p_hit, cards_per_box),
                p_opened: at_least_one(p_hit, trials_opened),
            }
        })
        .collect()
}

/// Compute the full result record for one (dataset, selection) pair.
#[must_use]
pub fn compute(dataset: &ChecklistDataset, selection: &Selection) -> OddsReport {
    let filtered = filter_lines(dataset, selection);
    let product = product_total(dataset);
    let selected = selection_total(&filtered);
    let p_hit = hit_probability(selected, product);

    OddsReport {
        matching_lines: filtered.len(),
        selection_total: selected,
        product_total: product,
        p_hit,
        p_box: at_least_one(p_hit, selection.trials_per_box()),
        p_opened: at_least_one(p_hit, selection.trials_opened()),
        p_case: at_least_one(p_hit, selection.trials_per_case()),
        tiers: tier_breakdown(
            &filtered,
            product,
            selection.trials_per_box(),
            selection.trials_opened(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(player: &str, team: &str, total: u64) -> ChecklistLine {
        ChecklistLine {
            player: player.to_string(),
            team: team.to_string(),
            total,
            ..ChecklistLine::default()
        }
    }

    fn two_player_dataset() -> ChecklistDataset {
        ChecklistDataset::from_rows(vec![
            line("X", "A", 10),
            line("Y", "B", 90),
        ])
    }

    #[test]
    fn filter_respects_player_and_team() {
        let dataset = ChecklistDataset::from_rows(vec![
            line("X", "A", 1),
            line("X", "B", 2),
            line("Y", "A", 3),
        ]);
        let all_teams = filter_lines(&dataset, &Selection::for_player("X"));
        assert_eq!(all_teams.len(), 2);

        let team_b = filter_lines(
            &dataset,
            &Selection {
                team: "B".to_string(),
                ..Selection::for_player("X")
            },
        );
        assert_eq!(team_b.len(), 1);
        assert_eq!(team_b[0].total, 2);
    }

    #[test]
    fn empty_player_selection_matches_nothing() {
        let dataset = two_player_dataset();
        assert!(filter_lines(&dataset, &Selection::default()).is_empty());
    }

    #[test]
    fn totals_sum_over_expected_rows() {
        let dataset = two_player_dataset();
        assert_eq!(product_total(&dataset), 100);
        let filtered = filter_lines(&dataset, &Selection::for_player("X"));
        assert_eq!(selection_total(&filtered), 10);
    }

    #[test]
    fn hit_probability_handles_zero_denominator() {
        assert!((hit_probability(5, 0) - 0.0).abs() < f64::EPSILON);
        assert!((hit_probability(10, 100) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn at_least_one_edge_cases_degrade_to_zero() {
        assert!((at_least_one(0.0, 24) - 0.0).abs() < f64::EPSILON);
        assert!((at_least_one(-0.5, 24) - 0.0).abs() < f64::EPSILON);
        assert!((at_least_one(f64::NAN, 24) - 0.0).abs() < f64::EPSILON);
        assert!((at_least_one(0.5, 0) - 0.0).abs() < f64::EPSILON);
        assert!((at_least_one(1.0, 1) - 1.0).abs() < f64::EPSILON);
        assert!((at_least_one(2.0, 3) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn at_least_one_is_monotone_in_trials() {
        let p = 0.07;
        let mut last = 0.0;
        for trials in 1..200 {
            let current = at_least_one(p, trials);
            assert!(current >= last, "not monotone at {trials} trials");
            last = current;
        }
    }

    #[test]
    fn tier_breakdown_keeps_fixed_order() {
        let mut row = line("X", "A", 150);
        row.v99 = 99;
        row.v50 = 50;
        row.v1 = 1;
        let dataset = ChecklistDataset::from_rows(vec![row]);
        let filtered = filter_lines(&dataset, &Selection::for_player("X"));
        let tiers = tier_breakdown(&filtered, product_total(&dataset), 10, 20);

        assert_eq!(tiers.len(), 6);
        assert_eq!(tiers[0].tier, Tier::Serial99);
        assert_eq!(tiers[0].print_run, 99);
        assert_eq!(tiers[5].tier, Tier::OneOfOne);
        assert_eq!(tiers[5].print_run, 1);
        // Tiers absent from the line degrade to zero odds, not errors.
        assert_eq!(tiers[2].print_run, 0);
        assert!((tiers[2].p_hit - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn compute_is_pure_and_deterministic() {
        let dataset = two_player_dataset();
        let selection = Selection {
            cards_per_box: 24,
            ..Selection::for_player("X")
        };
        let first = compute(&dataset, &selection);
        let second = compute(&dataset, &selection);
        assert_eq!(first, second);
    }
}
