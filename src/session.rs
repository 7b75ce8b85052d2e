//! A game plus the logging around it.
//!
//! Both the terminal loop and headless runs drive the game through a
//! [`Session`], so lifecycle events are logged the same way in each.

use crate::core::{GameSnapshot, GameState};
use crate::types::{GameAction, GameStatus, TICK_MS};
use crate::vlog;

pub struct Session {
    game: GameState,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        vlog!("[Game] new session seed={}", seed);
        Self {
            game: GameState::new(seed),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Start from idle. Later calls are ignored.
    pub fn start(&mut self) -> bool {
        let started = self.game.start();
        if started {
            vlog!("[Game] started");
            self.report_spawn_failure();
        }
        started
    }

    /// Apply an input action. Returns true if anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let before = self.game.status();
        let changed = self.game.apply_action(action);

        match action {
            GameAction::Restart => {
                vlog!("[Game] restart (was {})", before.as_str());
                self.report_spawn_failure();
            }
            GameAction::Pause if changed => {
                vlog!("[Game] {}", self.game.status().as_str());
            }
            _ => {}
        }
        self.drain_events();
        changed
    }

    /// Advance gravity. Returns true if the piece moved or landed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let changed = self.game.tick(elapsed_ms);
        self.drain_events();
        changed
    }

    fn drain_events(&mut self) {
        if let Some(ev) = self.game.take_last_event() {
            vlog!(
                "[Game] lock color={} lines={} score={} level={}",
                ev.color,
                ev.lines_cleared,
                ev.score,
                ev.level
            );
            if ev.game_over {
                vlog!("[Game] game over, final score {}", ev.score);
            }
        }
    }

    fn report_spawn_failure(&self) {
        if self.game.status() == GameStatus::GameOver {
            vlog!("[Game] game over at spawn, final score {}", self.game.score());
        }
    }
}

/// Play a seeded game with gravity only, for at most `max_ticks` frames.
///
/// Pieces are never steered, so they stack under the spawn point until the
/// game ends. Returns the final snapshot.
pub fn run_headless(seed: u32, max_ticks: u32) -> GameSnapshot {
    let mut session = Session::new(seed);
    session.start();

    let mut ticks = 0;
    while ticks < max_ticks && session.game().status() == GameStatus::Active {
        session.tick(TICK_MS);
        ticks += 1;
    }
    vlog!("[Game] headless run stopped after {} ticks", ticks);
    session.snapshot()
}
