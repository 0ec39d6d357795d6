//! Block module - the single building unit of the tower.
//!
//! A block is plain data: an axis-aligned rectangle plus a display color,
//! a horizontal speed, and a moving flag. The travel direction is owned by
//! the controller; a block only knows how fast it goes.

use tui_stacker_types::{Direction, Rgb};

/// One building block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Display attribute only, never consulted by game logic.
    pub color: Rgb,
    /// Horizontal speed in px/s.
    pub speed: f32,
    pub moving: bool,
}

impl Block {
    /// Create a stationary block. Queued blocks start like this and are
    /// positioned and set moving when spawned.
    pub fn new(left: f32, top: f32, width: f32, height: f32, color: Rgb, speed: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            color,
            speed,
            moving: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Advance horizontally by `speed * direction * dt`. No-op unless moving.
    pub fn advance(&mut self, dt: f32, direction: Direction) {
        if self.moving {
            self.left += self.speed * direction.as_sign() * dt;
        }
    }

    /// Relocate without touching speed or the moving flag.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.left = x;
        self.top = y;
    }
}
