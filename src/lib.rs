//! Roost - Clothed Truth Egg Scoring Core
//!
//! Computes a player's clothed Truth Egg score (earned progression units
//! plus the Truth Egg equivalent of their multiplicative bonuses) and
//! searches their inventory for the loadout that maximizes it. Pure and
//! deterministic; collaborators handle parsing, rendering, and storage.

pub mod buffs;
pub mod catalog;
pub mod constants;
pub mod convert;
pub mod dimensions;
pub mod error;
pub mod items;
pub mod optimizer;
pub mod player;
pub mod scoring;
pub mod thresholds;

pub use catalog::{BuffCatalog, ColleggtibleRecord};
pub use dimensions::{DimensionBuffs, GameDimension};
pub use error::CteError;
pub use items::{
    Artifact, HostFamily, HostSpec, InventoryRecord, LoadoutResult, OwnedItem, Rarity, Stone,
    StoneFamily,
};
pub use player::{ColleggtibleProgress, GameProfile, Permit, PlayerSnapshot};
pub use scoring::{describe_loadout, CteEngine};
pub use thresholds::TruthEggThresholds;
