use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::minimax::MinimaxSearch;
use super::types::{FirstPlayerMode, PruningMode};

pub const DEFAULT_MAX_DEPTH: usize = 8;
/// Nine plies fill the board, so deeper limits change nothing.
pub const MAX_SEARCH_DEPTH: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub max_depth: usize,
    pub pruning: PruningMode,
    pub first_player: FirstPlayerMode,
    pub pause_before_bot: bool,
}

impl TicTacToeSettings {
    pub fn search(&self) -> MinimaxSearch {
        MinimaxSearch::new(self.max_depth).with_pruning(self.pruning)
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pruning: PruningMode::Row,
            first_player: FirstPlayerMode::Human,
            pause_before_bot: true,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 || self.max_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "max_depth must be between 1 and {}, got {}",
                MAX_SEARCH_DEPTH, self.max_depth
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSettings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.search(), MinimaxSearch::new(8));
    }

    #[test]
    fn test_depth_bounds() {
        for (max_depth, valid) in [(0, false), (1, true), (9, true), (10, false)] {
            let settings = TicTacToeSettings {
                max_depth,
                ..TicTacToeSettings::default()
            };

            assert_eq!(settings.validate().is_ok(), valid, "max_depth {}", max_depth);
        }
    }

    #[test]
    fn test_search_carries_pruning_mode() {
        let settings = TicTacToeSettings {
            max_depth: 5,
            pruning: PruningMode::Full,
            ..TicTacToeSettings::default()
        };

        let search = settings.search();

        assert_eq!(search.max_depth, 5);
        assert_eq!(search.pruning, PruningMode::Full);
    }
}
