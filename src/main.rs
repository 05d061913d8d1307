//! Terminal runner (default binary).
//!
//! Owns the gravity scheduler: a fixed-interval timer calls the engine's
//! `tick`. The engine itself never sees wall-clock time, and it ignores
//! ticks while paused or after game over, so the timer can keep firing
//! unconditionally.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::GameConfig;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let mut game = GameState::new(&config, entropy_seed());
    game.start();

    let view = GameView::from_config(&config);
    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        let snapshot = game.snapshot();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Wait for input until the next gravity deadline.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, snapshot.paused) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        if Instant::now() >= next_tick {
            game.tick();
            next_tick += tick_interval;
        }
    }
}

/// Seed the piece sequence from the clock so each run differs.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
