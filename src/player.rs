//! Player-state snapshot consumed by the scorer and optimizer.
//!
//! Collaborators (command handlers, refresh jobs) build these from
//! already-parsed backup records; nothing here is fetched or persisted.

use crate::items::{Artifact, InventoryRecord};
use crate::thresholds::TruthEggThresholds;
use serde::{Deserialize, Serialize};

/// Account-wide permit level. Accounts below Pro have their total
/// multiplier halved and are limited to two equipped hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permit {
    Standard,
    Pro,
}

impl Permit {
    /// Number of host slots this permit allows.
    pub fn host_count(&self) -> u8 {
        match self {
            Permit::Standard => 2,
            Permit::Pro => 4,
        }
    }

    /// Penalty applied to the total multiplier.
    pub fn multiplier_penalty(&self) -> f64 {
        match self {
            Permit::Standard => 0.5,
            Permit::Pro => 1.0,
        }
    }
}

/// Account-level inputs the scorer needs beyond items and progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProfile {
    pub permit: Permit,
    /// Research price multiplier from epic research; 1.0 means no
    /// discount, 0.5 is the attainable maximum.
    pub epic_research_discount: f64,
}

/// Best farm size a player has reached for one colleggtible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColleggtibleProgress {
    pub id: String,
    pub farm_size: f64,
}

impl ColleggtibleProgress {
    pub fn new(id: &str, farm_size: f64) -> Self {
        Self {
            id: id.to_string(),
            farm_size,
        }
    }
}

/// A point-in-time snapshot of one player's state.
///
/// `delivered` and `credited` are parallel per-egg-stream arrays: eggs
/// delivered so far and Truth Eggs already credited for that stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub delivered: Vec<f64>,
    pub credited: Vec<u32>,
    pub colleggtibles: Vec<ColleggtibleProgress>,
    pub game: Option<GameProfile>,
    pub equipped: Vec<Artifact>,
    pub inventory: Vec<InventoryRecord>,
}

impl PlayerSnapshot {
    /// Truth Eggs actually earned: per stream, tiers passed capped by what
    /// the game has credited. Streams missing from either array count
    /// nothing.
    pub fn earned_units(&self, thresholds: &TruthEggThresholds) -> u32 {
        self.delivered
            .iter()
            .zip(&self.credited)
            .map(|(&delivered, &credited)| thresholds.tiers_passed(delivered).min(credited))
            .sum()
    }
}
