//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, tests).
//!
//! # Playfield geometry
//!
//! The game simulates a fixed virtual playfield measured in pixels, the same
//! coordinate space the renderer maps onto terminal cells:
//!
//! - **Playfield**: 800 x 600 virtual pixels
//! - **Blocks**: 30 px tall, 200 px wide at the start of a game
//! - **Base line**: the tower's base block sits 100 px above the bottom edge
//!
//! # Tuning constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `INITIAL_SPEED` | 150.0 | Horizontal block speed in px/s |
//! | `SPEED_INCREMENT` | 15.0 | Speed gain every 5 stacked blocks |
//! | `PERFECT_THRESHOLD_PX` | 5.0 | Absolute alignment slack for a perfect |
//! | `MISS_OVERLAP_FRACTION` | 0.1 | Relative overlap below which a drop misses |
//!
//! The perfect threshold is absolute pixels while the miss threshold is a
//! fraction of the dropped block's width. The two are independently tuned
//! knobs and deliberately not expressed in a common unit.

/// Frame cadence of the outer loop, in milliseconds.
pub const TICK_MS: u32 = 16;

/// Height of every block, in virtual pixels.
pub const BLOCK_HEIGHT: f32 = 30.0;

/// Width of the base block and of the first generation of moving blocks.
pub const INITIAL_BLOCK_WIDTH: f32 = 200.0;

/// Horizontal speed of a fresh game, in virtual pixels per second.
pub const INITIAL_SPEED: f32 = 150.0;

/// Speed added whenever the tower height reaches a multiple of 5.
pub const SPEED_INCREMENT: f32 = 15.0;

/// Virtual playfield dimensions in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// A drop within this many pixels of full overlap counts as perfect.
pub const PERFECT_THRESHOLD_PX: f32 = 5.0;

/// A drop overlapping less than this fraction of its width is a miss.
pub const MISS_OVERLAP_FRACTION: f32 = 0.1;

/// Gap between the bottom of the playfield and the top of the base block.
pub const BASE_MARGIN_PX: f32 = 100.0;

/// How many upcoming blocks the queue holds for the preview.
pub const PREVIEW_COUNT: usize = 3;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Block colors, cycled by index modulo the palette length.
pub const BLOCK_PALETTE: [Rgb; 10] = [
    Rgb::new(102, 191, 255), // sky blue
    Rgb::new(255, 109, 194), // pink
    Rgb::new(255, 203, 0),   // gold
    Rgb::new(0, 158, 47),    // lime
    Rgb::new(255, 161, 0),   // orange
    Rgb::new(200, 122, 255), // purple
    Rgb::new(211, 176, 131), // beige
    Rgb::new(135, 60, 190),  // violet
    Rgb::new(190, 33, 55),   // maroon
    Rgb::new(0, 82, 172),    // dark blue
];

/// Immutable game tuning, passed to the controller at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub block_height: f32,
    pub initial_block_width: f32,
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub perfect_threshold_px: f32,
    pub miss_overlap_fraction: f32,
    pub preview_count: usize,
}

impl GameConfig {
    /// Top Y coordinate of the base block.
    pub fn base_y(&self) -> f32 {
        self.screen_height - BASE_MARGIN_PX
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_height: BLOCK_HEIGHT,
            initial_block_width: INITIAL_BLOCK_WIDTH,
            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            perfect_threshold_px: PERFECT_THRESHOLD_PX,
            miss_overlap_fraction: MISS_OVERLAP_FRACTION,
            preview_count: PREVIEW_COUNT,
        }
    }
}

/// Horizontal travel direction of the active block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn flipped(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Sign factor for position updates: -1 for left, +1 for right.
    pub fn as_sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Discrete player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Drop,
    TogglePause,
    Restart,
}
