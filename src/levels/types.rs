//! Level data structures.

use crate::challenges::code::CodeContent;
use crate::challenges::grid::GridContent;
use crate::challenges::maze::MazeContent;
use crate::challenges::memory::PairsContent;
use crate::challenges::tictactoe::BoardContent;
use crate::challenges::word_search::SearchContent;
use crate::challenges::Family;
use serde::{Deserialize, Serialize};

/// One level of a game. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Position in the game's level order
    pub index: u32,
    #[serde(default)]
    pub time_limit_seconds: Option<u32>,
    #[serde(default)]
    pub move_budget: Option<u32>,
    #[serde(default)]
    pub hint_budget: u32,
    pub xp_reward: u32,
    #[serde(default)]
    pub win_condition: WinCondition,
    pub content: LevelContent,
}

impl Level {
    /// Reward for clearing the level with `credit_percent` of full credit.
    pub fn reward_for(&self, credit_percent: u32) -> u32 {
        ((self.xp_reward as u64 * credit_percent.min(100) as u64) / 100) as u32
    }
}

/// What clears a level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WinCondition {
    /// The puzzle must be fully solved (or the engine beaten).
    #[default]
    Solve,
    /// Adversarial levels: a draw also clears the level, for part of the reward.
    #[serde(rename_all = "camelCase")]
    Outlast { draw_credit_percent: u32 },
}

/// Game-family-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "camelCase")]
pub enum LevelContent {
    Grid(GridContent),
    Maze(MazeContent),
    Pairs(PairsContent),
    Search(SearchContent),
    Code(CodeContent),
    Board(BoardContent),
}

impl LevelContent {
    pub fn family(&self) -> Family {
        match self {
            LevelContent::Grid(_) => Family::Grid,
            LevelContent::Maze(_) => Family::Maze,
            LevelContent::Pairs(_) => Family::Pairs,
            LevelContent::Search(_) => Family::Search,
            LevelContent::Code(_) => Family::Code,
            LevelContent::Board(_) => Family::Board,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_json_with_defaults() {
        let json = r#"{
            "index": 2,
            "xpReward": 40,
            "content": {
                "family": "maze",
                "width": 3,
                "height": 2,
                "start": [0, 0],
                "goal": [1, 2]
            }
        }"#;
        let level: Level = serde_json::from_str(json).unwrap();
        assert_eq!(level.index, 2);
        assert_eq!(level.time_limit_seconds, None);
        assert_eq!(level.move_budget, None);
        assert_eq!(level.hint_budget, 0);
        assert_eq!(level.win_condition, WinCondition::Solve);
        assert_eq!(level.content.family(), Family::Maze);
    }

    #[test]
    fn test_outlast_condition_from_json() {
        let json = r#"{
            "index": 0,
            "xpReward": 30,
            "hintBudget": 1,
            "winCondition": { "kind": "outlast", "drawCreditPercent": 50 },
            "content": { "family": "board", "engineMark": "O" }
        }"#;
        let level: Level = serde_json::from_str(json).unwrap();
        assert_eq!(
            level.win_condition,
            WinCondition::Outlast {
                draw_credit_percent: 50
            }
        );
        assert_eq!(level.content.family(), Family::Board);
    }

    #[test]
    fn test_reward_for_partial_credit() {
        let level = Level {
            index: 0,
            time_limit_seconds: None,
            move_budget: None,
            hint_budget: 0,
            xp_reward: 30,
            win_condition: WinCondition::Solve,
            content: LevelContent::Pairs(PairsContent {
                values: vec![],
                seed: None,
            }),
        };
        assert_eq!(level.reward_for(100), 30);
        assert_eq!(level.reward_for(50), 15);
        assert_eq!(level.reward_for(0), 0);
        assert_eq!(level.reward_for(250), 30);
    }
}
