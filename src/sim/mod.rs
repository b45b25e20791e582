//! Deterministic simulation module
//!
//! All gameplay logic lives here, one submodule per game variant. The
//! module must stay pure and deterministic:
//! - Seeded RNG only (one `Pcg32` stream per session)
//! - Stable iteration order (entities in ascending-id array order)
//! - No rendering or platform dependencies
//!
//! Each game exposes the same three-call surface: a constructor taking a
//! [`crate::GameConfig`], `start()` to (re)enter a session, and
//! `tick(input, dt, audio)` invoked once per frame by the host. Ticks
//! outside of the `Playing` phase mutate nothing.

pub mod invader;
pub mod rings;
pub mod surfer;

pub use invader::InvaderGame;
pub use rings::{Ring, RingsGame};
pub use surfer::{Obstacle, ObstacleKind, SurferGame};
