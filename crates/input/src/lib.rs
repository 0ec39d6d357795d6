//! Input module - terminal key handling.
//!
//! The game only has discrete, press-once actions (drop, pause, restart),
//! so input is a pure key-to-action mapping with no held-key repeat state.

pub mod map;

pub use map::{handle_key_event, should_quit};
