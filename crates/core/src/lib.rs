//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: block widths, colors, and speeds all derive from
//!   tower and queue state; there is no randomness anywhere
//! - **Testable**: geometry can be driven precisely through `tick(dt)`
//! - **Portable**: runs in any environment (terminal, headless, benches)
//!
//! # Module structure
//!
//! - [`block`]: the single building unit, an axis-aligned rectangle
//! - [`tower`]: LIFO stack of placed blocks with an incremental height
//! - [`queue`]: FIFO of upcoming blocks backing the preview
//! - [`history`]: newest-first record of finished games
//! - [`game_state`]: the per-frame controller tying everything together
//!
//! # Game rules
//!
//! - Blocks slide horizontally and bounce off the playfield edges
//! - A dropped block is trimmed to its overlap with the tower top
//! - No overlap, or overlap under 10% of the block width, ends the game
//! - Near-exact alignment (within 5 px) is a perfect and feeds a combo
//! - Every 5 blocks of tower height the slide speed ratchets up
//!
//! # Example
//!
//! ```
//! use tui_stacker_core::GameState;
//! use tui_stacker_types::{GameAction, GameConfig};
//!
//! let mut game = GameState::new(GameConfig::default());
//! game.tick(2.0); // slide the block for two simulated seconds
//! game.apply_action(GameAction::Drop);
//! assert!(game.score() > 0 || game.game_over());
//! ```

pub mod block;
pub mod game_state;
pub mod history;
pub mod queue;
pub mod tower;

// Re-export commonly used types
pub use block::Block;
pub use game_state::GameState;
pub use history::{GameRecord, ScoreHistory};
pub use queue::{BlockQueue, EmptyQueueError};
pub use tower::{EmptyTowerError, Tower};
