//! Persistence for the top-10 score list
//!
//! Scores are kept as a bare JSON array of integers in a small file. Reads
//! fail soft: a missing, unreadable or malformed file is treated as an empty
//! list. Writes go through a temp file in the same directory and a rename,
//! so a partial write never truncates a previously valid file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of scores kept on the board
pub const BOARD_CAPACITY: usize = 10;

/// The leaderboard: scores in descending order, at most ten of them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBoard {
    scores: Vec<u32>,
}

impl ScoreBoard {
    /// Add a score, keeping the list sorted descending and capped
    ///
    /// When the board is full the smallest values are dropped first.
    pub fn record(&mut self, score: u32) {
        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(BOARD_CAPACITY);
    }

    /// Scores in descending order
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// The best score on record, if any
    pub fn high_score(&self) -> Option<u32> {
        self.scores.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// File-backed store for the score board
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted board, falling back to an empty one
    ///
    /// Never errors: absence and corruption both read as an empty board.
    pub fn load(&self) -> ScoreBoard {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => ScoreBoard::default(),
        }
    }

    /// Persist the board, replacing any prior contents atomically
    pub fn save(&self, board: &ScoreBoard) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let json = serde_json::to_string(board).context("Failed to serialize scores")?;

        // Write to a sibling temp file, then rename over the target
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write scores to {:?}", tmp_path))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace score file {:?}", self.path))?;

        Ok(())
    }

    /// Record a score on the board and persist the result
    pub fn record(&self, board: &mut ScoreBoard, score: u32) -> Result<()> {
        board.record(score);
        self.save(board)
    }
}
