//! Space Invader - fixed-shooter wave game
//!
//! A 4x8 grid of asteroids drifts slowly down the screen while the player
//! slides along the bottom edge, auto-firing. Clearing the grid awards a
//! bonus and respawns the full wave immediately; any asteroid reaching the
//! player's line ends the session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioCue, AudioSink};
use crate::consts::*;
use crate::input::FrameInput;
use crate::{GameConfig, GameSession};

/// A grid asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridAsteroid {
    pub id: u32,
    pub position: Vec2,
    pub health: u32,
}

/// An upward-travelling laser bolt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderLaser {
    pub id: u32,
    pub position: Vec2,
}

/// One Space Invader game instance
#[derive(Debug, Clone)]
pub struct InvaderGame {
    pub session: GameSession,
    pub config: GameConfig,
    /// Player x, clamped to the horizontal bounds; y is fixed
    pub player_x: f32,
    pub asteroids: Vec<GridAsteroid>,
    pub lasers: Vec<InvaderLaser>,
    pub elapsed: f32,
    next_id: u32,
    rng: Pcg32,
    starts: u64,
}

impl InvaderGame {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: GameSession::new(),
            config,
            player_x: 0.0,
            asteroids: Vec::new(),
            lasers: Vec::new(),
            elapsed: 0.0,
            next_id: 1,
            rng: Pcg32::seed_from_u64(config.seed),
            starts: 0,
        }
    }

    /// Begin a fresh session with a full asteroid wave.
    pub fn start(&mut self) {
        self.session.start();
        self.player_x = 0.0;
        self.lasers.clear();
        self.elapsed = 0.0;
        self.next_id = 1;
        self.rng = Pcg32::seed_from_u64(self.config.seed.wrapping_add(self.starts));
        self.starts += 1;
        self.spawn_wave();
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Lay out the full ROWS x COLS asteroid grid
    fn spawn_wave(&mut self) {
        self.asteroids.clear();
        for row in 0..INVADER_ROWS {
            for col in 0..INVADER_COLS {
                let id = self.next_entity_id();
                self.asteroids.push(GridAsteroid {
                    id,
                    position: Vec2::new(
                        (col as f32 - (INVADER_COLS as f32 - 1.0) / 2.0) * INVADER_COL_SPACING,
                        INVADER_GRID_TOP - row as f32 * INVADER_ROW_SPACING,
                    ),
                    health: INVADER_ASTEROID_HEALTH,
                });
            }
        }
        log::debug!("wave spawned: {} asteroids", self.asteroids.len());
    }

    /// Advance one frame. No-op unless the session is playing.
    pub fn tick(&mut self, input: &FrameInput, dt: f32, audio: &mut impl AudioSink) {
        if !self.session.is_playing() {
            return;
        }
        self.elapsed += dt;

        self.move_player(input, dt);
        self.auto_fire(audio);
        self.advance_entities(dt);
        self.resolve_laser_hits(audio);
        self.check_loss(audio);
        self.check_wave_clear();
    }

    fn move_player(&mut self, input: &FrameInput, dt: f32) {
        if input.left {
            self.player_x -= INVADER_MOVE_SPEED * dt;
        }
        if input.right {
            self.player_x += INVADER_MOVE_SPEED * dt;
        }
        self.player_x = self.player_x.clamp(-INVADER_X_BOUND, INVADER_X_BOUND);
    }

    fn auto_fire(&mut self, audio: &mut impl AudioSink) {
        if self.rng.random::<f32>() >= INVADER_FIRE_CHANCE {
            return;
        }
        let id = self.next_entity_id();
        self.lasers.push(InvaderLaser {
            id,
            position: Vec2::new(self.player_x, INVADER_PLAYER_Y),
        });
        audio.play(AudioCue::Shoot);
    }

    fn advance_entities(&mut self, dt: f32) {
        for laser in &mut self.lasers {
            laser.position.y += INVADER_LASER_SPEED * dt;
        }
        self.lasers.retain(|l| l.position.y < INVADER_LASER_MAX_Y);

        for asteroid in &mut self.asteroids {
            asteroid.position.y -= INVADER_DRIFT_SPEED * dt;
        }
    }

    /// Ordered pass mirroring the surfer game: each laser damages at most
    /// the first asteroid (array order) within range, then is consumed.
    fn resolve_laser_hits(&mut self, audio: &mut impl AudioSink) {
        let mut consumed = vec![false; self.lasers.len()];
        for (laser_idx, laser) in self.lasers.iter().enumerate() {
            let target = self.asteroids.iter_mut().find(|a| {
                a.health > 0 && a.position.distance(laser.position) < INVADER_HIT_RANGE
            });
            if let Some(asteroid) = target {
                consumed[laser_idx] = true;
                asteroid.health -= 1;
                if asteroid.health == 0 {
                    self.session.add_score(INVADER_ASTEROID_POINTS);
                    audio.play(AudioCue::Explosion);
                }
            }
        }

        let mut idx = 0;
        self.lasers.retain(|_| {
            let keep = !consumed[idx];
            idx += 1;
            keep
        });
        self.asteroids.retain(|a| a.health > 0);
    }

    fn check_loss(&mut self, audio: &mut impl AudioSink) {
        if self.asteroids.iter().any(|a| a.position.y < INVADER_LOSS_Y) {
            self.session.end("Asteroids reached you!");
            audio.play(AudioCue::GameOver);
        }
    }

    /// The instant the grid empties: bonus points and a fresh wave.
    fn check_wave_clear(&mut self) {
        if self.session.is_playing() && self.asteroids.is_empty() {
            self.session.add_score(INVADER_WAVE_BONUS);
            self.spawn_wave();
            log::debug!("wave cleared, score {}", self.session.score);
        }
    }
}
