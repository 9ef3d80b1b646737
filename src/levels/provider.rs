//! Content providers: where a game's ordered level list comes from.

use super::Level;
use crate::challenges::Family;
use crate::constants::LEVELS_FILE_EXTENSION;
use crate::utils::persistence::{file_for, load_json};
use log::{debug, warn};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Source of level definitions for a game identifier.
///
/// An unknown game or a game without levels is `Ok(vec![])`, not an error.
pub trait ContentProvider {
    fn get_levels(&self, game_id: &str) -> io::Result<Vec<Level>>;
}

/// In-memory catalogue.
#[derive(Debug, Clone, Default)]
pub struct StaticContentProvider {
    games: HashMap<String, Vec<Level>>,
}

impl StaticContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_levels(mut self, game_id: &str, levels: Vec<Level>) -> Self {
        self.games.insert(game_id.to_string(), levels);
        self
    }
}

impl ContentProvider for StaticContentProvider {
    fn get_levels(&self, game_id: &str) -> io::Result<Vec<Level>> {
        Ok(self.games.get(game_id).cloned().unwrap_or_default())
    }
}

/// Reads `<dir>/<game_id>.json`, a JSON array of levels.
#[derive(Debug, Clone)]
pub struct JsonContentProvider {
    dir: PathBuf,
}

impl JsonContentProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ContentProvider for JsonContentProvider {
    fn get_levels(&self, game_id: &str) -> io::Result<Vec<Level>> {
        let path = file_for(&self.dir, game_id, LEVELS_FILE_EXTENSION);
        debug!("Level file for {}: {:?}", game_id, path);
        Ok(load_json::<Vec<Level>>(&path)?.unwrap_or_default())
    }
}

/// Order levels ascending by index and drop any whose payload belongs to another family.
pub fn prepare_levels(mut levels: Vec<Level>, family: Family) -> Vec<Level> {
    levels.retain(|level| {
        let matches = level.content.family() == family;
        if !matches {
            warn!(
                "Dropping level {}: {:?} content in a {:?} game",
                level.index,
                level.content.family(),
                family
            );
        }
        matches
    });
    levels.sort_by_key(|level| level.index);
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenges::memory::PairsContent;
    use crate::levels::{LevelContent, WinCondition};
    use std::fs;

    fn pairs_level(index: u32) -> Level {
        Level {
            index,
            time_limit_seconds: None,
            move_budget: None,
            hint_budget: 0,
            xp_reward: 10,
            win_condition: WinCondition::Solve,
            content: LevelContent::Pairs(PairsContent {
                values: vec!["a".into()],
                seed: None,
            }),
        }
    }

    #[test]
    fn test_static_provider_unknown_game_is_empty() {
        let provider = StaticContentProvider::new().with_levels("memory-match", vec![pairs_level(0)]);
        assert_eq!(provider.get_levels("memory-match").unwrap().len(), 1);
        assert!(provider.get_levels("maze-runner").unwrap().is_empty());
    }

    #[test]
    fn test_prepare_levels_sorts_and_filters() {
        let mut wrong = pairs_level(1);
        wrong.content = LevelContent::Board(crate::challenges::tictactoe::BoardContent {
            engine_mark: crate::challenges::tictactoe::Mark::O,
            engine_moves_first: false,
            difficulty: Default::default(),
        });
        let levels = vec![pairs_level(3), wrong, pairs_level(0), pairs_level(2)];
        let prepared = prepare_levels(levels, Family::Pairs);
        let order: Vec<u32> = prepared.iter().map(|l| l.index).collect();
        assert_eq!(order, vec![0, 2, 3]);
    }

    #[test]
    fn test_json_provider_reads_and_tolerates_missing() {
        let dir = std::env::temp_dir().join("arcade-json-provider-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let json = serde_json::to_string(&vec![pairs_level(0), pairs_level(1)]).unwrap();
        fs::write(dir.join("memory-match.json"), json).unwrap();

        let provider = JsonContentProvider::new(&dir);
        assert_eq!(provider.get_levels("memory-match").unwrap().len(), 2);
        assert!(provider.get_levels("word-search").unwrap().is_empty());

        fs::write(dir.join("word-search.json"), "[{").unwrap();
        assert!(provider.get_levels("word-search").is_err());

        fs::remove_dir_all(dir).ok();
    }
}
