//! Cosmic Rings - free-flight ring collection
//!
//! The player flies a ship through a wall-bounded cube and threads all 40
//! golden rings to win. Continuous forward thrust, yaw/pitch steering with
//! a smoothed bank, and a boost gated by an energy/cooldown resource pair.

use glam::{EulerRot, Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioCue, AudioSink};
use crate::consts::*;
use crate::input::FrameInput;
use crate::{GameConfig, GameSession, lerp, wrap_turns};

/// A static collectible ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    pub id: u32,
    pub position: Vec3,
    /// One-shot: a collected ring never re-triggers and is not rendered
    pub collected: bool,
}

/// Player pose and boost resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingsPlayer {
    pub position: Vec3,
    /// Euler rotation, XYZ order: x = pitch, y = yaw, z = bank
    pub rotation: Vec3,
    pub boosting: bool,
    /// 0..=100
    pub boost_energy: f32,
    /// Seconds until boost may re-activate
    pub boost_cooldown: f32,
}

impl Default for RingsPlayer {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            boosting: false,
            boost_energy: BOOST_MAX,
            boost_cooldown: 0.0,
        }
    }
}

impl RingsPlayer {
    /// Forward axis in world space for the current rotation
    fn forward(&self) -> Vec3 {
        let orientation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        orientation * Vec3::Z
    }
}

/// One Cosmic Rings game instance
#[derive(Debug, Clone)]
pub struct RingsGame {
    pub session: GameSession,
    pub config: GameConfig,
    pub player: RingsPlayer,
    pub rings: Vec<Ring>,
    /// Seconds of active play this session (drives the victory message)
    pub elapsed: f32,
    rng: Pcg32,
    /// Sessions started so far; salts the restart RNG stream
    starts: u64,
}

impl RingsGame {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: GameSession::new(),
            config,
            player: RingsPlayer::default(),
            rings: Vec::new(),
            elapsed: 0.0,
            rng: Pcg32::seed_from_u64(config.seed),
            starts: 0,
        }
    }

    /// Begin a fresh session: reset the player, re-seed the RNG stream and
    /// place a new ring field.
    pub fn start(&mut self) {
        self.session.start();
        self.player = RingsPlayer::default();
        self.elapsed = 0.0;
        self.rng = Pcg32::seed_from_u64(self.config.seed.wrapping_add(self.starts));
        self.starts += 1;
        self.spawn_rings();
    }

    /// Place `NUM_RINGS` rings uniformly inside the play cube, keeping a
    /// clear zone around the spawn point. Rejection-samples up to 10 times
    /// per ring; if every attempt lands inside the safe zone the last
    /// sample is kept rather than failing the session.
    fn spawn_rings(&mut self) {
        let span = MAP_SIZE - SAFE_ZONE * 2.0;
        self.rings.clear();
        for id in 0..NUM_RINGS as u32 {
            let mut position = Vec3::ZERO;
            for _attempt in 0..10 {
                position = Vec3::new(
                    (self.rng.random::<f32>() - 0.5) * span,
                    (self.rng.random::<f32>() - 0.5) * span,
                    (self.rng.random::<f32>() - 0.5) * span,
                );
                if position.length() >= SAFE_ZONE {
                    break;
                }
            }
            self.rings.push(Ring {
                id,
                position,
                collected: false,
            });
        }
        log::debug!("placed {} rings", self.rings.len());
    }

    /// Advance one frame. No-op unless the session is playing.
    pub fn tick(&mut self, input: &FrameInput, dt: f32, audio: &mut impl AudioSink) {
        if !self.session.is_playing() {
            return;
        }
        self.elapsed += dt;

        self.update_boost(input, dt);
        self.integrate_movement(input, dt);
        self.collect_rings(audio);
    }

    fn update_boost(&mut self, input: &FrameInput, dt: f32) {
        let player = &mut self.player;
        if player.boost_energy < BOOST_MAX && !player.boosting {
            player.boost_energy = (player.boost_energy + BOOST_REGEN * dt).min(BOOST_MAX);
        }
        if player.boost_cooldown > 0.0 {
            player.boost_cooldown = (player.boost_cooldown - dt).max(0.0);
        }

        if input.boost_tap && player.boost_energy > BOOST_COST && player.boost_cooldown <= 0.0 {
            player.boosting = true;
            player.boost_energy -= BOOST_COST;
            player.boost_cooldown = BOOST_COOLDOWN;
            log::debug!("boost engaged, energy {:.0}", player.boost_energy);
        }
        // Boost holds only while the key does
        if !input.boost {
            player.boosting = false;
        }
    }

    fn integrate_movement(&mut self, input: &FrameInput, dt: f32) {
        let player = &mut self.player;
        let speed = if player.boosting { BOOST_SPEED } else { FORWARD_SPEED };
        player.position += player.forward() * speed * dt;

        let mut yaw_change = 0.0;
        let mut pitch_change = 0.0;
        let mut bank_target = 0.0;
        if input.left {
            yaw_change = -TURN_SPEED * dt;
            bank_target = -BANK_ANGLE;
        }
        if input.right {
            yaw_change = TURN_SPEED * dt;
            bank_target = BANK_ANGLE;
        }
        if input.up {
            pitch_change = TURN_SPEED * dt;
        }
        if input.down {
            pitch_change = -TURN_SPEED * dt;
        }

        player.rotation.x = wrap_turns(player.rotation.x + pitch_change);
        player.rotation.y = wrap_turns(player.rotation.y + yaw_change);
        player.rotation.z = lerp(player.rotation.z, bank_target, BANK_SMOOTHING);

        // The arena walls: clamping stands in for collision response
        let half = MAP_SIZE / 2.0;
        player.position = player.position.clamp(Vec3::splat(-half), Vec3::splat(half));
    }

    fn collect_rings(&mut self, audio: &mut impl AudioSink) {
        let reach = RING_RADIUS + PLAYER_RADIUS;
        for ring in &mut self.rings {
            if !ring.collected && self.player.position.distance(ring.position) < reach {
                ring.collected = true;
                self.session.add_score(1);
                audio.play(AudioCue::RingCollect);
                log::debug!("ring {} collected, score {}", ring.id, self.session.score);
            }
        }

        if !self.rings.is_empty() && self.rings.iter().all(|r| r.collected) {
            self.session
                .end(format!("Completed! Time: {:.2}s", self.elapsed));
            audio.play(AudioCue::Victory);
        }
    }

    /// Rings still worth rendering and testing
    pub fn remaining_rings(&self) -> usize {
        self.rings.iter().filter(|r| !r.collected).count()
    }
}
