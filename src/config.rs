//! Session configuration
//!
//! Ship selection is purely cosmetic - it decides which model the host
//! renders for the player and the opponent - but it is threaded through the
//! constructors explicitly so a session is fully described by its config
//! plus its input trace. No global reads.

use serde::{Deserialize, Serialize};

/// Selectable ship models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShipKind {
    #[default]
    Ship1,
    Ship2,
}

impl ShipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipKind::Ship1 => "ship1",
            ShipKind::Ship2 => "ship2",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ship1" => Some(ShipKind::Ship1),
            "ship2" => Some(ShipKind::Ship2),
            _ => None,
        }
    }

    /// The ship the opponent flies: always the one the player didn't pick.
    pub fn opponent(&self) -> Self {
        match self {
            ShipKind::Ship1 => ShipKind::Ship2,
            ShipKind::Ship2 => ShipKind::Ship1,
        }
    }
}

/// Everything needed to construct a game instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Model rendered for the player
    pub player_ship: ShipKind,
    /// Model rendered for enemy entities (surfer game)
    pub enemy_ship: ShipKind,
    /// Seed for the session RNG stream; a session replays exactly from
    /// (config, input trace)
    pub seed: u64,
}

impl GameConfig {
    /// Config for a chosen player ship, pairing the opponent automatically.
    pub fn for_ship(player_ship: ShipKind, seed: u64) -> Self {
        Self {
            player_ship,
            enemy_ship: player_ship.opponent(),
            seed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_ship(ShipKind::Ship1, 0)
    }
}
