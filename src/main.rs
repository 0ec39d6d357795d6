//! Terminal tower-stacker runner.
//!
//! Blocks slide across the playfield; drop them to build the tower, where
//! each landing is trimmed to its overlap with the block below. The loop is
//! synchronous: one tick and one draw per iteration, with input polled on a
//! timeout bounded by the 16 ms tick cadence.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_stacker::core::GameState;
use tui_stacker::input::{handle_key_event, should_quit};
use tui_stacker::term::{GameView, TerminalRenderer, Viewport};
use tui_stacker::types::{GameConfig, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(GameConfig::default());
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game_state, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the measured frame delta.
        if last_tick.elapsed() >= tick_duration {
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            game_state.tick(dt);
        }
    }
}
