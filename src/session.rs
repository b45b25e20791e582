//! Game session state machine
//!
//! One [`GameSession`] is live per game instance; it owns the phase, the
//! score and the game-over reason. Invalid transitions (e.g. pausing from
//! the menu) are silent no-ops - the simulation already ignores every tick
//! outside of `Playing`, so there is nothing to guard against.

use serde::{Deserialize, Serialize};

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Initial state, nothing simulated
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation suspended, rendering may continue
    Paused,
    /// Session ended; terminal until the next start
    GameOver,
}

/// One play-through worth of lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    pub score: u32,
    /// Human-readable cause recorded by the losing/winning collision pass
    pub game_over_reason: String,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether simulation updates should run this frame
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Begin a fresh session from any phase. Score and reason reset; the
    /// owning game re-initializes its player and entity state alongside.
    pub fn start(&mut self) {
        log::info!("session start (was {:?})", self.phase);
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.game_over_reason.clear();
    }

    /// Playing -> Paused; no-op from any other phase.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            log::info!("session paused");
        }
    }

    /// Paused -> Playing; no-op from any other phase. Nothing resets.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            log::info!("session resumed");
        }
    }

    /// Playing -> GameOver with a reason; no-op from any other phase.
    pub fn end(&mut self, reason: impl Into<String>) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            self.game_over_reason = reason.into();
            log::info!(
                "session over: {} (score {})",
                self.game_over_reason,
                self.score
            );
        }
    }

    /// Back to the menu, clearing score and reason.
    pub fn reset_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.score = 0;
        self.game_over_reason.clear();
    }

    /// Award points; ignored outside of active play.
    pub fn add_score(&mut self, points: u32) {
        if self.phase == GamePhase::Playing {
            self.score += points;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_menu() {
        let session = GameSession::new();
        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.score, 0);
        assert!(session.game_over_reason.is_empty());
    }

    #[test]
    fn test_start_resets_score_and_reason() {
        let mut session = GameSession::new();
        session.start();
        session.add_score(50);
        session.end("Hit by Asteroid");
        assert_eq!(session.phase, GamePhase::GameOver);

        session.start();
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.score, 0);
        assert!(session.game_over_reason.is_empty());
    }

    #[test]
    fn test_pause_resume_cycle() {
        let mut session = GameSession::new();
        session.start();
        session.add_score(10);
        session.pause();
        assert_eq!(session.phase, GamePhase::Paused);
        session.resume();
        assert_eq!(session.phase, GamePhase::Playing);
        // Nothing reset across the cycle
        assert_eq!(session.score, 10);
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut session = GameSession::new();
        session.pause();
        assert_eq!(session.phase, GamePhase::Menu);
        session.resume();
        assert_eq!(session.phase, GamePhase::Menu);
        session.end("nope");
        assert_eq!(session.phase, GamePhase::Menu);
        assert!(session.game_over_reason.is_empty());

        session.start();
        session.end("done");
        // end() from GameOver does not overwrite the reason
        session.end("again");
        assert_eq!(session.game_over_reason, "done");
    }

    #[test]
    fn test_score_only_accumulates_while_playing() {
        let mut session = GameSession::new();
        session.add_score(5);
        assert_eq!(session.score, 0);

        session.start();
        session.add_score(5);
        session.pause();
        session.add_score(5);
        assert_eq!(session.score, 5);

        session.resume();
        session.end("over");
        session.add_score(5);
        assert_eq!(session.score, 5);
    }

    #[test]
    fn test_reusable_across_restarts() {
        let mut session = GameSession::new();
        for _ in 0..3 {
            session.start();
            session.add_score(1);
            session.end("loop");
            assert_eq!(session.phase, GamePhase::GameOver);
            assert_eq!(session.score, 1);
        }
    }
}
