//! Astro Arcade - a suite of three space arcade mini-games
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation for the three game variants
//! - `session`: Game state machine (menu/playing/paused/game over) and score
//! - `input`: Per-frame keyboard input snapshot
//! - `audio`: Fire-and-forget audio cue collaborator
//! - `config`: Ship selection and session configuration
//!
//! The crate is headless: rendering, asset loading and input capture all
//! live in the host. The host calls `tick` once per rendered frame with the
//! elapsed delta and a fresh [`input::FrameInput`] snapshot, then draws
//! whatever the state structs contain.

pub mod audio;
pub mod config;
pub mod input;
pub mod session;
pub mod sim;

pub use config::{GameConfig, ShipKind};
pub use session::{GamePhase, GameSession};

/// Game tuning constants
pub mod consts {
    /// Frame duration the per-tick factors below were tuned at (60 Hz).
    /// Continuous velocities are expressed in units/second and scale with
    /// the actual delta; interpolation factors and spawn probabilities are
    /// per-tick quantities.
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    // === Cosmic Rings (free-flight ring collection) ===

    /// Rings placed per session
    pub const NUM_RINGS: usize = 40;
    /// Edge length of the cubic play volume
    pub const MAP_SIZE: f32 = 200.0;
    /// Radius around the origin kept clear of rings
    pub const SAFE_ZONE: f32 = 20.0;
    /// Nominal ring radius for collection tests
    pub const RING_RADIUS: f32 = 4.0;
    /// Nominal player ship radius
    pub const PLAYER_RADIUS: f32 = 1.0;
    /// Cruise speed, units/second
    pub const FORWARD_SPEED: f32 = 48.0;
    /// Boosted speed, units/second
    pub const BOOST_SPEED: f32 = 96.0;
    /// Yaw/pitch rate, radians/second
    pub const TURN_SPEED: f32 = 1.2;
    /// Target bank angle while turning (60 degrees)
    pub const BANK_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Bank interpolation factor per tick
    pub const BANK_SMOOTHING: f32 = 0.15;
    /// Boost energy capacity
    pub const BOOST_MAX: f32 = 100.0;
    /// Energy consumed per boost activation
    pub const BOOST_COST: f32 = 20.0;
    /// Seconds before boost can re-activate
    pub const BOOST_COOLDOWN: f32 = 5.0;
    /// Energy regained per second while not boosting
    pub const BOOST_REGEN: f32 = 10.0;

    // === Galaxy Surfer (lane-based dodger/shooter) ===

    /// Per-tick probability of spawning one obstacle
    pub const SURFER_SPAWN_CHANCE: f32 = 0.03;
    /// Obstacle approach speed toward the player, units/second
    pub const SURFER_OBJECT_SPEED: f32 = 12.0;
    /// Laser travel speed away from the player, units/second
    pub const SURFER_LASER_SPEED: f32 = 18.0;
    /// Depth at which obstacles spawn
    pub const SURFER_SPAWN_Z: f32 = 12.0;
    /// Obstacles past this depth are discarded
    pub const SURFER_DESPAWN_Z: f32 = -3.0;
    /// Lasers past this depth are discarded
    pub const SURFER_LASER_MAX_Z: f32 = 10.0;
    /// Laser-vs-obstacle hit range along z within a lane
    pub const SURFER_HIT_RANGE: f32 = 0.5;
    /// Player collision depth band
    pub const SURFER_PLAYER_BAND: (f32, f32) = (-2.5, -1.5);
    /// Visual x interpolation factor per tick
    pub const LANE_SMOOTHING: f32 = 0.15;
    /// Visual tilt interpolation factor per tick
    pub const TILT_SMOOTHING: f32 = 0.10;
    /// Tilt per lane (30 degrees)
    pub const TILT_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
    /// Obstacle hit points
    pub const SURFER_OBJECT_HEALTH: u32 = 3;
    /// Points for destroying an asteroid
    pub const SURFER_ASTEROID_POINTS: u32 = 10;
    /// Points for destroying an enemy ship
    pub const SURFER_ENEMY_POINTS: u32 = 30;
    /// Seconds the laser weapon stays armed after a pickup
    pub const LASER_ITEM_DURATION: f32 = 10.0;
    /// Per-tick probability of auto-firing while armed
    pub const SURFER_FIRE_CHANCE: f32 = 0.1;

    // === Space Invader (fixed-shooter wave game) ===

    /// Asteroid grid rows
    pub const INVADER_ROWS: usize = 4;
    /// Asteroid grid columns
    pub const INVADER_COLS: usize = 8;
    /// Horizontal spacing between grid columns
    pub const INVADER_COL_SPACING: f32 = 1.2;
    /// Vertical spacing between grid rows
    pub const INVADER_ROW_SPACING: f32 = 0.8;
    /// Y of the top grid row
    pub const INVADER_GRID_TOP: f32 = 3.0;
    /// Player ship y position
    pub const INVADER_PLAYER_Y: f32 = -2.5;
    /// Player horizontal speed while input held, units/second
    pub const INVADER_MOVE_SPEED: f32 = 6.0;
    /// Player x clamp
    pub const INVADER_X_BOUND: f32 = 4.0;
    /// Per-tick probability of auto-firing
    pub const INVADER_FIRE_CHANCE: f32 = 0.04;
    /// Laser climb speed, units/second
    pub const INVADER_LASER_SPEED: f32 = 6.0;
    /// Lasers above this height are discarded
    pub const INVADER_LASER_MAX_Y: f32 = 5.0;
    /// Grid downward drift, units/second
    pub const INVADER_DRIFT_SPEED: f32 = 0.3;
    /// Laser-vs-asteroid hit distance
    pub const INVADER_HIT_RANGE: f32 = 0.5;
    /// Asteroids below this height end the session
    pub const INVADER_LOSS_Y: f32 = -2.0;
    /// Asteroid hit points
    pub const INVADER_ASTEROID_HEALTH: u32 = 3;
    /// Points for destroying an asteroid
    pub const INVADER_ASTEROID_POINTS: u32 = 10;
    /// Bonus for clearing the whole grid
    pub const INVADER_WAVE_BONUS: u32 = 100;
}

/// Linear interpolation by a per-tick factor
#[inline]
pub fn lerp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Wrap an accumulated rotation component back into (-2π, 2π)
#[inline]
pub fn wrap_turns(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    if angle.abs() > TAU { angle % TAU } else { angle }
}
