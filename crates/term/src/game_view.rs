//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The game simulates an 800x600 virtual-pixel playfield; the view maps it
//! onto terminal cells at 10 px per column and 30 px per row, so one block
//! row is exactly one terminal row and the playfield is 80x20 cells.

use tui_stacker_core::{Block, GameState};
use tui_stacker_types::Rgb;

use crate::fb::{CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const GOLD: Rgb = Rgb::new(255, 203, 0);

/// A lightweight terminal renderer for the stacking game.
pub struct GameView {
    /// Virtual pixels per terminal column.
    px_per_col: f32,
    /// Virtual pixels per terminal row.
    px_per_row: f32,
}

impl Default for GameView {
    fn default() -> Self {
        // 10x30 px per cell: one block height maps to one terminal row and
        // roughly compensates the terminal glyph aspect ratio.
        Self {
            px_per_col: 10.0,
            px_per_row: 30.0,
        }
    }
}

impl GameView {
    pub fn new(px_per_col: f32, px_per_row: f32) -> Self {
        Self {
            px_per_col,
            px_per_row,
        }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let config = state.config();
        let field_cols = (config.screen_width / self.px_per_col).round() as u16;
        let field_rows = (config.screen_height / self.px_per_row).round() as u16;
        let frame_w = field_cols + 2;
        let frame_h = field_rows + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let inner_x = start_x + 1;
        let inner_y = start_y + 1;

        // Playfield background and frame.
        let bg = CellStyle::new(Rgb::new(80, 80, 90), FIELD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(inner_x, inner_y, field_cols, field_rows, ' ', bg);
        fb.stroke_rect(start_x, start_y, frame_w, frame_h, border);

        // Tower, bottom to top.
        for block in state.tower().blocks() {
            self.draw_block(&mut fb, inner_x, inner_y, field_cols, field_rows, block);
        }

        // The active block (absent once the game is over).
        if let Some(block) = state.current_block() {
            self.draw_block(&mut fb, inner_x, inner_y, field_cols, field_rows, block);
        }

        self.draw_hud(&mut fb, state, inner_x, inner_y, field_cols, field_rows);

        // Overlays.
        if state.paused() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        } else if state.game_over() {
            let score_line = format!("Final Score: {}", state.score());
            let height_line = format!("Tower Height: {}", state.visible_height());
            let best_line = format!("Best Score: {}", state.history().best_score());
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &[
                    "GAME OVER!",
                    &score_line,
                    &height_line,
                    &best_line,
                    "Press R to Restart",
                ],
            );
        }

        fb
    }

    /// Map a block's virtual-pixel rectangle onto field cells and fill it,
    /// clipping against the playfield.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        inner_x: u16,
        inner_y: u16,
        field_cols: u16,
        field_rows: u16,
        block: &Block,
    ) {
        let col = (block.left / self.px_per_col).round() as i32;
        let row = (block.top / self.px_per_row).round() as i32;
        let w = ((block.width / self.px_per_col).round() as i32).max(1);
        let h = ((block.height / self.px_per_row).round() as i32).max(1);

        let x0 = col.max(0);
        let y0 = row.max(0);
        let x1 = (col + w).min(field_cols as i32);
        let y1 = (row + h).min(field_rows as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let style = CellStyle::new(block.color, FIELD_BG).bold();
        fb.fill_rect(
            inner_x + x0 as u16,
            inner_y + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
            '█',
            style,
        );
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        inner_x: u16,
        inner_y: u16,
        field_cols: u16,
        field_rows: u16,
    ) {
        let label = CellStyle::new(TEXT_FG, FIELD_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), FIELD_BG);
        let faint = CellStyle::new(Rgb::new(140, 140, 150), FIELD_BG).dim();

        fb.put_str(
            inner_x + 2,
            inner_y + 1,
            &format!("Score: {}", state.score()),
            label,
        );
        fb.put_str(
            inner_x + 2,
            inner_y + 2,
            &format!("Height: {}", state.visible_height()),
            value,
        );

        let best = state.history().best_score();
        if best > 0 {
            fb.put_str(inner_x + 2, inner_y + 3, &format!("Best: {best}"), faint);
        }

        // Games played, top right.
        let games = format!("Games: {}", state.history().count());
        let games_x = inner_x + field_cols.saturating_sub(games.chars().count() as u16 + 2);
        fb.put_str(games_x, inner_y + 1, &games, faint);

        // Combo banner, centered below the score.
        if state.combo() > 0 {
            let banner = format!("PERFECT x{}!", state.combo());
            let x = inner_x + field_cols.saturating_sub(banner.chars().count() as u16) / 2;
            fb.put_str(x, inner_y + 3, &banner, CellStyle::new(GOLD, FIELD_BG).bold());
        }

        // Queue preview, top right under the games counter.
        let preview_x = inner_x + field_cols.saturating_sub(16);
        fb.put_str(preview_x, inner_y + 3, "Next Blocks:", label);
        for (i, block) in state.queue().preview(3).iter().enumerate() {
            // Scaled-down bars, 40% of the real block width.
            let bar_w = ((block.width * 0.4 / self.px_per_col).round() as u16).max(1);
            let y = inner_y + 5 + 2 * i as u16;
            fb.fill_rect(preview_x, y, bar_w, 1, '▄', CellStyle::new(block.color, FIELD_BG));
        }

        fb.put_str(
            inner_x + 2,
            inner_y + field_rows.saturating_sub(1),
            "SPACE Drop   P Pause   R Restart   Q Quit",
            faint,
        );
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let first_y = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);

        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, first_y.saturating_add(i as u16), line, style);
        }
    }
}
