//! Score history module - results of past games, newest first.
//!
//! Records survive game restarts and are dropped only on an explicit
//! `clear()` or at process exit; nothing is persisted across runs.

use std::collections::VecDeque;
use std::fmt::Write;

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub score: u32,
    /// Tower height achieved, excluding the base block.
    pub height: u32,
}

/// Newest-first, append-only list of finished games.
#[derive(Debug, Clone, Default)]
pub struct ScoreHistory {
    records: VecDeque<GameRecord>,
    count: usize,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finished game at the front. O(1).
    pub fn record_game(&mut self, score: u32, height: u32) {
        self.records.push_front(GameRecord { score, height });
        self.count += 1;
    }

    /// Highest score of the session, 0 when no games were played. O(n).
    pub fn best_score(&self) -> u32 {
        self.records.iter().map(|r| r.score).max().unwrap_or(0)
    }

    /// Highest tower of the session, 0 when no games were played. O(n).
    pub fn best_height(&self) -> u32 {
        self.records.iter().map(|r| r.height).max().unwrap_or(0)
    }

    /// Number of games recorded since the last `clear()`. O(1).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.count = 0;
    }

    /// Newest-first read-only traversal.
    pub fn records(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.iter()
    }

    /// Formatted listing of the `n` highest scores, descending. Ties keep
    /// newest-first traversal order because the sort is stable.
    pub fn top_scores(&self, n: usize) -> String {
        if self.records.is_empty() {
            return "No games played yet!".to_string();
        }

        let mut sorted: Vec<&GameRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));

        let shown = n.min(sorted.len());
        let mut out = format!("Top {shown} Scores:\n");
        for (i, record) in sorted.iter().take(shown).enumerate() {
            let _ = writeln!(
                out,
                "{}. Score: {} (Height: {})",
                i + 1,
                record.score,
                record.height
            );
        }
        out
    }
}
