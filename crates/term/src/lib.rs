//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The game
//! view draws into a plain framebuffer of styled cells and a terminal
//! backend flushes it with diff-based redraws; there is no widget or layout
//! toolkit involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map the game's virtual-pixel playfield onto terminal cells precisely
//! - Redraw only the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
