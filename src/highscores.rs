//! Best-runs table
//!
//! Persisted to a JSON file, tracks the top 10 runs. The game has no score
//! counter, so runs rank by bricks destroyed, then lives kept, then fewer
//! ticks spent.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunEntry {
    /// Bricks destroyed over the run
    pub bricks_destroyed: u32,
    /// Lives remaining at the end
    pub lives_left: u32,
    /// Simulation ticks the run lasted
    pub ticks: u64,
    /// Whether the board was cleared
    pub won: bool,
}

impl RunEntry {
    /// Ranking key: more bricks beats fewer, then more lives, then a
    /// faster run
    fn rank_key(&self) -> (u32, u32, std::cmp::Reverse<u64>) {
        (self.bricks_destroyed, self.lives_left, std::cmp::Reverse(self.ticks))
    }

    /// True if this run outranks the other
    pub fn beats(&self, other: &RunEntry) -> bool {
        self.rank_key() > other.rank_key()
    }
}

/// Best-runs leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<RunEntry>,
}

impl HighScores {
    /// Default high-scores file name
    pub const FILE_NAME: &'static str = "brickfall_highscores.json";

    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a run qualifies for the table
    pub fn qualifies(&self, run: &RunEntry) -> bool {
        if run.bricks_destroyed == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| run.beats(e)).unwrap_or(true)
    }

    /// Add a run to the table (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_run(&mut self, run: RunEntry) -> Option<usize> {
        if !self.qualifies(&run) {
            return None;
        }

        // Find insertion point (sorted best-first)
        let pos = self.entries.iter().position(|e| run.beats(e));
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, run);
                i + 1
            }
            None => {
                self.entries.push(run);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The best run so far (if any)
    pub fn best(&self) -> Option<&RunEntry> {
        self.entries.first()
    }

    /// Load the table from the given path; missing or corrupt files start
    /// a fresh table
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(e) => {
                    log::warn!("Corrupt high-score file {}: {e}", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the table to the given path
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(bricks: u32, lives: u32, ticks: u64) -> RunEntry {
        RunEntry {
            bricks_destroyed: bricks,
            lives_left: lives,
            ticks,
            won: false,
        }
    }

    #[test]
    fn test_empty_run_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(&run(0, 3, 100)));
        assert!(scores.qualifies(&run(1, 0, 100)));
    }

    #[test]
    fn test_runs_rank_by_bricks_then_lives_then_speed() {
        let mut scores = HighScores::new();
        scores.add_run(run(10, 1, 5000));
        scores.add_run(run(20, 1, 5000));
        scores.add_run(run(20, 3, 5000));
        scores.add_run(run(20, 3, 4000));

        let bricks: Vec<_> = scores.entries.iter().map(|e| e.bricks_destroyed).collect();
        assert_eq!(bricks, vec![20, 20, 20, 10]);
        assert_eq!(scores.best().unwrap().ticks, 4000);
        assert_eq!(scores.entries[1].lives_left, 3);
    }

    #[test]
    fn test_table_truncates_to_max() {
        let mut scores = HighScores::new();
        for i in 1..=(MAX_ENTRIES as u32 + 5) {
            scores.add_run(run(i, 0, 1000));
        }
        assert_eq!(scores.entries.len(), MAX_ENTRIES);
        // The weakest runs fell off the bottom
        assert!(scores.entries.iter().all(|e| e.bricks_destroyed > 5));
    }

    #[test]
    fn test_rank_is_one_indexed() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(run(5, 0, 100)), Some(1));
        assert_eq!(scores.add_run(run(9, 0, 100)), Some(1));
        assert_eq!(scores.add_run(run(7, 0, 100)), Some(2));
    }

    #[test]
    fn test_json_round_trip() {
        let mut scores = HighScores::new();
        scores.add_run(RunEntry {
            bricks_destroyed: 56,
            lives_left: 2,
            ticks: 90_000,
            won: true,
        });

        let json = serde_json::to_string(&scores).unwrap();
        let back: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries, scores.entries);
    }
}
