//! Game state module - the per-frame controller.
//!
//! Owns the three collections (tower, upcoming-block queue, score history)
//! and the active block, and runs movement, drop/trim geometry, scoring,
//! the difficulty ramp, and the game-over/restart transitions.

use tui_stacker_types::{Direction, GameAction, GameConfig, Rgb, BLOCK_PALETTE};

use crate::block::Block;
use crate::history::ScoreHistory;
use crate::queue::BlockQueue;
use crate::tower::{EmptyTowerError, Tower};

/// Complete game state.
///
/// Single-threaded by design: the controller owns every collection for the
/// lifetime of the process, and one `tick` plus one render per frame is the
/// entire concurrency story.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    tower: Tower,
    queue: BlockQueue,
    history: ScoreHistory,
    /// The one sliding block, owned exclusively by the controller.
    current: Option<Block>,
    score: u32,
    /// Consecutive perfect placements; resets on any imperfect one.
    combo: u32,
    speed: f32,
    direction: Direction,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game, seed the tower with its base block, and spawn the
    /// first moving block.
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self {
            config,
            tower: Tower::new(),
            queue: BlockQueue::new(),
            history: ScoreHistory::new(),
            current: None,
            score: 0,
            combo: 0,
            speed: config.initial_speed,
            direction: Direction::Right,
            paused: false,
            game_over: false,
        };
        state.initialize_game();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn current_block(&self) -> Option<&Block> {
        self.current.as_ref()
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn queue(&self) -> &BlockQueue {
        &self.queue
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Tower height shown to the player, excluding the base block.
    pub fn visible_height(&self) -> u32 {
        self.tower.height().saturating_sub(1) as u32
    }

    /// Reset everything except the score history.
    fn initialize_game(&mut self) {
        self.tower.clear();
        self.queue.clear();
        self.current = None;
        self.score = 0;
        self.combo = 0;
        self.speed = self.config.initial_speed;
        self.direction = Direction::Right;
        self.paused = false;
        self.game_over = false;

        // Base block: centered, full width, never moves.
        let base = Block::new(
            self.config.screen_width / 2.0 - self.config.initial_block_width / 2.0,
            self.config.base_y(),
            self.config.initial_block_width,
            self.config.block_height,
            block_color(0),
            0.0,
        );
        self.tower.push_top(base);

        self.generate_upcoming(self.config.preview_count);
        self.spawn_next();
    }

    /// Advance one frame by `dt` seconds. Returns whether the active block
    /// moved. `dt` is supplied by the frame loop and trusted non-negative.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        let Some(block) = self.current.as_mut() else {
            return false;
        };
        if !block.moving {
            return false;
        }

        block.advance(dt, self.direction);

        // Bounce at the playfield edges.
        if block.right() >= self.config.screen_width {
            self.direction = Direction::Left;
        } else if block.left <= 0.0 {
            self.direction = Direction::Right;
        }

        true
    }

    /// Apply a discrete player action. Returns whether it had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::TogglePause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.initialize_game();
                true
            }
            GameAction::Drop => {
                if self.game_over || self.paused {
                    return false;
                }
                self.drop_block()
            }
        }
    }

    /// Drop the active block onto the tower. No-op unless it is moving.
    fn drop_block(&mut self) -> bool {
        match self.current {
            Some(block) if block.moving => {
                let mut dropped = block;
                dropped.moving = false;
                self.current = None;
                self.trim_and_stack(dropped);
                true
            }
            _ => false,
        }
    }

    /// Trim the dropped block to its overlap with the tower top and stack
    /// it, or end the game when the overlap is missing or too small.
    fn trim_and_stack(&mut self, block: Block) {
        let below = match self.tower.top() {
            Ok(top) => *top,
            Err(EmptyTowerError) => {
                // A fresh tower has nothing to trim against; the first block
                // lands as-is for a flat 10 points.
                self.tower.push_top(block);
                self.score += 10;
                self.spawn_next();
                return;
            }
        };

        let overlap_start = block.left.max(below.left);
        let overlap_end = block.right().min(below.right());
        if overlap_end <= overlap_start {
            self.finish_game();
            return;
        }

        let overlap_width = overlap_end - overlap_start;
        if overlap_width < self.config.miss_overlap_fraction * block.width {
            // Catching only a sliver is a miss, not a placement.
            self.finish_game();
            return;
        }

        let mut trimmed = block;
        trimmed.left = overlap_start;
        trimmed.width = overlap_width;
        self.tower.push_top(trimmed);

        let is_perfect =
            (overlap_width - block.width).abs() < self.config.perfect_threshold_px;
        if is_perfect {
            self.combo += 1;
            self.score += 50 + 10 * self.combo;
        } else {
            self.combo = 0;
            let accuracy = overlap_width / block.width;
            self.score += 10 + (accuracy * 10.0) as u32;
        }

        if self.tower.height() % 5 == 0 {
            self.speed += self.config.speed_increment;
        }

        self.spawn_next();
    }

    /// Game over: discard the active block and record the result. The score
    /// history is the only state that survives the following restart.
    fn finish_game(&mut self) {
        self.game_over = true;
        self.current = None;
        self.history.record_game(self.score, self.visible_height());
    }

    /// Pre-generate `count` upcoming blocks at the back of the queue.
    ///
    /// New blocks inherit the current tower-top width so the preview shows
    /// what the player will actually have to land next.
    fn generate_upcoming(&mut self, count: usize) {
        for _ in 0..count {
            let width = match self.tower.top() {
                Ok(top) => top.width,
                Err(EmptyTowerError) => self.config.initial_block_width,
            };
            let color = block_color(self.tower.height() + self.queue.len());
            let block = Block::new(0.0, 0.0, width, self.config.block_height, color, self.speed);
            self.queue.enqueue(block);
        }
    }

    /// Move the next queued block into play and top the queue back up.
    fn spawn_next(&mut self) {
        if self.queue.is_empty() {
            // Recovery path; the queue is normally kept non-empty.
            self.generate_upcoming(1);
        }
        let Ok(mut block) = self.queue.dequeue() else {
            return;
        };

        let top_y =
            self.config.base_y() - self.tower.height() as f32 * self.config.block_height;
        block.set_position(0.0, top_y);
        block.moving = true;
        block.speed = self.speed;
        self.current = Some(block);

        // One replacement keeps the queue at its steady-state length.
        self.generate_upcoming(1);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn block_color(index: usize) -> Rgb {
    BLOCK_PALETTE[index % BLOCK_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(GameConfig::default())
    }

    /// Teleport the active block for exact-geometry tests.
    fn place_current_at(state: &mut GameState, left: f32) {
        state.current.as_mut().unwrap().left = left;
    }

    #[test]
    fn test_new_game_state() {
        let state = state();

        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.speed, state.config.initial_speed);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.tower.height(), 1);
        assert_eq!(state.queue.len(), state.config.preview_count);
        assert_eq!(state.history.count(), 0);
    }

    #[test]
    fn test_base_block_is_centered_and_static() {
        let state = state();
        let base = state.tower.blocks()[0];

        assert_eq!(base.left, 300.0);
        assert_eq!(base.width, 200.0);
        assert_eq!(base.top, 500.0);
        assert!(!base.moving);
        assert_eq!(base.speed, 0.0);
    }

    #[test]
    fn test_first_spawn_sits_on_the_base_row() {
        let state = state();
        let current = state.current.unwrap();

        assert_eq!(current.left, 0.0);
        // One row above the base block's top edge.
        assert_eq!(current.top, 470.0);
        assert!(current.moving);
        assert_eq!(current.speed, state.speed);
    }

    #[test]
    fn test_overlap_trims_to_intersection() {
        // Current [10, 50] over a 40 px base at [0, 40].
        let mut state = state();
        state.tower.clear();
        state.tower.push_top(Block::new(0.0, 500.0, 40.0, 30.0, block_color(0), 0.0));

        let mut current = Block::new(10.0, 470.0, 40.0, 30.0, block_color(1), 150.0);
        current.moving = true;
        state.current = Some(current);

        assert!(state.apply_action(GameAction::Drop));
        let top = state.tower.top().unwrap();
        assert_eq!(top.left, 10.0);
        assert_eq!(top.width, 30.0);
        assert!(!state.game_over);
    }

    #[test]
    fn test_no_overlap_ends_the_game() {
        // Current [60, 100] entirely right of base [0, 40].
        let mut state = state();
        state.tower.clear();
        state.tower.push_top(Block::new(0.0, 500.0, 40.0, 30.0, block_color(0), 0.0));

        let mut current = Block::new(60.0, 470.0, 40.0, 30.0, block_color(1), 150.0);
        current.moving = true;
        state.current = Some(current);

        assert!(state.apply_action(GameAction::Drop));
        assert!(state.game_over);
        assert!(state.current.is_none());
        assert_eq!(state.history.count(), 1);
    }

    #[test]
    fn test_sliver_overlap_counts_as_miss() {
        // Overlap of 9 px is under 10% of a 100 px block.
        let mut state = state();
        state.tower.clear();
        state
            .tower
            .push_top(Block::new(0.0, 500.0, 100.0, 30.0, block_color(0), 0.0));

        let mut current = Block::new(91.0, 470.0, 100.0, 30.0, block_color(1), 150.0);
        current.moving = true;
        state.current = Some(current);

        assert!(state.apply_action(GameAction::Drop));
        assert!(state.game_over, "9 px of 100 px must miss");
    }

    #[test]
    fn test_ten_percent_overlap_still_lands() {
        let mut state = state();
        state.tower.clear();
        state
            .tower
            .push_top(Block::new(0.0, 500.0, 100.0, 30.0, block_color(0), 0.0));

        let mut current = Block::new(90.0, 470.0, 100.0, 30.0, block_color(1), 150.0);
        current.moving = true;
        state.current = Some(current);

        assert!(state.apply_action(GameAction::Drop));
        assert!(!state.game_over);
        assert_eq!(state.tower.top().unwrap().width, 10.0);
    }

    #[test]
    fn test_perfect_drop_scores_and_combos() {
        let mut state = state();

        place_current_at(&mut state, 300.0);
        assert!(state.apply_action(GameAction::Drop));
        assert_eq!(state.score, 60, "first perfect: 50 + 10 * 1");
        assert_eq!(state.combo, 1);

        place_current_at(&mut state, 300.0);
        assert!(state.apply_action(GameAction::Drop));
        assert_eq!(state.score, 130, "second perfect adds 50 + 10 * 2");
        assert_eq!(state.combo, 2);
    }

    #[test]
    fn test_imperfect_drop_resets_combo_and_uses_accuracy() {
        let mut state = state();

        place_current_at(&mut state, 300.0);
        state.apply_action(GameAction::Drop);
        assert_eq!(state.combo, 1);

        // 150 px of 200 px: accuracy 0.75, not perfect.
        place_current_at(&mut state, 350.0);
        state.apply_action(GameAction::Drop);
        assert_eq!(state.combo, 0);
        assert_eq!(state.score, 60 + 10 + 7);
        assert_eq!(state.tower.top().unwrap().width, 150.0);
    }

    #[test]
    fn test_trimmed_block_keeps_height_color_speed() {
        let mut state = state();
        let current = state.current.unwrap();

        place_current_at(&mut state, 350.0);
        state.apply_action(GameAction::Drop);

        let top = state.tower.top().unwrap();
        assert_eq!(top.height, current.height);
        assert_eq!(top.color, current.color);
        assert_eq!(top.speed, current.speed);
        assert!(!top.moving);
    }

    #[test]
    fn test_speed_ramps_at_height_multiples_of_five() {
        let mut state = state();
        let initial = state.speed;

        // Four perfect placements take the tower from height 1 to height 5.
        for _ in 0..4 {
            place_current_at(&mut state, 300.0);
            state.apply_action(GameAction::Drop);
        }
        assert_eq!(state.tower.height(), 5);
        assert_eq!(state.speed, initial + state.config.speed_increment);

        // Five more reach height 10 for the second ramp step.
        for _ in 0..5 {
            place_current_at(&mut state, 300.0);
            state.apply_action(GameAction::Drop);
        }
        assert_eq!(state.tower.height(), 10);
        assert_eq!(state.speed, initial + 2.0 * state.config.speed_increment);
    }

    #[test]
    fn test_spawned_block_carries_ramped_speed() {
        let mut state = state();
        for _ in 0..4 {
            place_current_at(&mut state, 300.0);
            state.apply_action(GameAction::Drop);
        }
        assert_eq!(state.current.unwrap().speed, state.speed);
    }

    #[test]
    fn test_queue_length_is_stable_across_spawns() {
        let mut state = state();
        let steady = state.queue.len();

        for _ in 0..6 {
            place_current_at(&mut state, 300.0);
            state.apply_action(GameAction::Drop);
            assert_eq!(state.queue.len(), steady);
        }
    }

    #[test]
    fn test_spawn_recovers_from_an_empty_queue() {
        let mut state = state();
        state.queue.clear();

        state.spawn_next();
        assert!(state.current.is_some());
        assert_eq!(state.queue.len(), 1, "dequeue then one replacement");
    }

    #[test]
    fn test_generated_blocks_inherit_tower_top_width() {
        let mut state = state();

        // Land a 150 px block, then everything generated next matches it.
        place_current_at(&mut state, 350.0);
        state.apply_action(GameAction::Drop);

        let widths: Vec<f32> = state.queue.preview(8).iter().map(|b| b.width).collect();
        assert!(widths.last().map(|w| *w == 150.0).unwrap_or(false));
    }

    #[test]
    fn test_empty_tower_drop_lands_flat_ten_points() {
        let mut state = state();
        state.tower.clear();

        let mut current = Block::new(123.0, 470.0, 200.0, 30.0, block_color(1), 150.0);
        current.moving = true;
        state.current = Some(current);

        assert!(state.apply_action(GameAction::Drop));
        assert_eq!(state.score, 10);
        assert_eq!(state.tower.height(), 1);
        let top = state.tower.top().unwrap();
        assert_eq!(top.left, 123.0);
        assert_eq!(top.width, 200.0);
    }

    #[test]
    fn test_tick_moves_and_bounces() {
        let mut state = state();

        assert!(state.tick(1.0));
        assert_eq!(state.current.unwrap().left, 150.0);
        assert_eq!(state.direction, Direction::Right);

        // Reaching the right edge flips the direction.
        state.tick(3.0);
        assert_eq!(state.current.unwrap().right(), 800.0);
        assert_eq!(state.direction, Direction::Left);

        state.tick(4.0);
        assert_eq!(state.current.unwrap().left, 0.0);
        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn test_pause_freezes_movement_and_drops() {
        let mut state = state();
        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.paused);

        let left = state.current.unwrap().left;
        assert!(!state.tick(1.0));
        assert_eq!(state.current.unwrap().left, left);
        assert!(!state.apply_action(GameAction::Drop));

        assert!(state.apply_action(GameAction::TogglePause));
        assert!(!state.paused);
        assert!(state.tick(0.1));
    }

    #[test]
    fn test_drop_requires_a_moving_block() {
        let mut state = state();
        state.current.as_mut().unwrap().moving = false;

        assert!(!state.apply_action(GameAction::Drop));
        assert_eq!(state.tower.height(), 1, "no placement happened");
    }

    #[test]
    fn test_game_over_ignores_everything_but_restart() {
        let mut state = state();
        place_current_at(&mut state, 700.0);
        state.apply_action(GameAction::Drop);
        assert!(state.game_over);

        assert!(!state.tick(1.0));
        assert!(!state.apply_action(GameAction::Drop));
        assert!(!state.apply_action(GameAction::TogglePause));
        assert!(state.apply_action(GameAction::Restart));
        assert!(!state.game_over);
    }

    #[test]
    fn test_restart_resets_session_but_keeps_history() {
        let mut state = state();

        place_current_at(&mut state, 300.0);
        state.apply_action(GameAction::Drop);
        place_current_at(&mut state, 700.0);
        state.apply_action(GameAction::Drop);
        assert!(state.game_over);
        assert_eq!(state.history.count(), 1);
        assert_eq!(state.history.best_score(), 60);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.speed, state.config.initial_speed);
        assert_eq!(state.tower.height(), 1);
        assert_eq!(state.queue.len(), state.config.preview_count);
        assert_eq!(state.history.count(), 1, "history survives restarts");
    }

    #[test]
    fn test_restart_is_ignored_while_playing() {
        let mut state = state();
        place_current_at(&mut state, 300.0);
        state.apply_action(GameAction::Drop);

        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.score, 60);
    }

    #[test]
    fn test_game_over_records_height_without_base() {
        let mut state = state();
        for _ in 0..3 {
            place_current_at(&mut state, 300.0);
            state.apply_action(GameAction::Drop);
        }
        place_current_at(&mut state, 700.0);
        state.apply_action(GameAction::Drop);

        let record = *state.history.records().next().unwrap();
        assert_eq!(record.height, 3);
    }

    #[test]
    fn test_tower_height_invariant_holds_through_play() {
        let mut state = state();
        for _ in 0..8 {
            place_current_at(&mut state, 300.0);
            state.apply_action(GameAction::Drop);
            assert_eq!(state.tower.height(), state.tower.blocks().len());
            assert!(state.tower.height() >= 1);
        }
    }
}
