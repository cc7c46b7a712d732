//! User selection passed into the odds engine.

use serde::{Deserialize, Serialize};

/// Everything the calculator needs from the user: which player (and
/// optionally which team) to hit on, and how many cards a break opens.
///
/// The UI clamps the quantity fields to at least 1; the engine itself
/// tolerates 0 by degrading the derived odds to 0 rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected player. Empty means nothing is selected yet.
    pub player: String,
    /// Selected team. Empty means "all teams" for the player.
    pub team: String,
    pub cards_per_box: u32,
    pub boxes_opened: u32,
    pub boxes_per_case: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            player: String::new(),
            team: String::new(),
            cards_per_box: 1,
            boxes_opened: 1,
            boxes_per_case: 3,
        }
    }
}

impl Selection {
    /// Selection for a player across all teams, with default quantities.
    #[must_use]
    pub fn for_player(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            ..Self::default()
        }
    }

    /// Cards drawn in a single box.
    #[must_use]
    pub const fn trials_per_box(&self) -> u64 {
        self.cards_per_box as u64
    }

    /// Cards drawn across all opened boxes.
    #[must_use]
    pub const fn trials_opened(&self) -> u64 {
        self.cards_per_box as u64 * self.boxes_opened as u64
    }

    /// Cards drawn in one full case.
    #[must_use]
    pub const fn trials_per_case(&self) -> u64 {
        self.cards_per_box as u64 * self.boxes_per_case as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quantities_match_ui_defaults() {
        let sel = Selection::default();
        assert_eq!(sel.cards_per_box, 1);
        assert_eq!(sel.boxes_opened, 1);
        assert_eq!(sel.boxes_per_case, 3);
        assert!(sel.player.is_empty());
    }

    #[test]
    fn trial_counts_multiply_out() {
        let sel = Selection {
            cards_per_box: 24,
            boxes_opened: 2,
            boxes_per_case: 3,
            ..Selection::for_player("Saka")
        };
        assert_eq!(sel.trials_per_box(), 24);
        assert_eq!(sel.trials_opened(), 48);
        assert_eq!(sel.trials_per_case(), 72);
    }
}
