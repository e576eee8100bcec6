//! Buff magnitude catalog: host and stone multiplier tables, socket
//! counts, and colleggtible tier values.
//!
//! Lookups are total: unknown (tier, rarity) combinations resolve to no
//! buff, which aggregation treats as a neutral 1.0.

use crate::dimensions::{DimensionBuffs, GameDimension};
use crate::error::CteError;
use crate::items::{HostSpec, Rarity, Stone, StoneFamily};
use serde::{Deserialize, Serialize};

/// A seasonal colleggtible: the dimension it moves and its four tier
/// multipliers, selected by the max farm size a player has reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColleggtibleRecord {
    pub id: String,
    pub dimension: GameDimension,
    pub tier_values: [f64; 4],
}

impl ColleggtibleRecord {
    pub fn new(id: &str, dimension: GameDimension, tier_values: [f64; 4]) -> Self {
        Self {
            id: id.to_string(),
            dimension,
            tier_values,
        }
    }

    /// The strongest multiplier this record can ever contribute.
    pub fn best_value(&self) -> f64 {
        self.tier_values[3]
    }
}

/// Immutable buff catalog. Built once at startup and passed by reference
/// into every scoring call; nothing mutates it afterwards, so it can be
/// shared freely across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffCatalog {
    colleggtibles: Vec<ColleggtibleRecord>,
    max_collected: DimensionBuffs,
}

impl BuffCatalog {
    /// Builds the catalog from loader-supplied colleggtible records.
    ///
    /// An empty record set means the collaborator loader never ran, which
    /// is fatal to scoring. Non-positive tier values are unrepresentable
    /// in the game and are replaced with the neutral 1.0.
    pub fn from_records(records: Vec<ColleggtibleRecord>) -> Result<Self, CteError> {
        if records.is_empty() {
            return Err(CteError::CatalogUnavailable);
        }

        let mut colleggtibles = records;
        for record in &mut colleggtibles {
            for value in &mut record.tier_values {
                if *value <= 0.0 {
                    *value = 1.0;
                }
            }
        }

        let mut max_collected = DimensionBuffs::neutral();
        for record in &colleggtibles {
            max_collected.apply(record.dimension, record.best_value());
        }

        Ok(Self {
            colleggtibles,
            max_collected,
        })
    }

    /// The catalog with the known colleggtible set baked in.
    pub fn standard() -> Self {
        let records = vec![
            ColleggtibleRecord::new(
                "firework",
                GameDimension::Earnings,
                [1.01, 1.02, 1.03, 1.05],
            ),
            ColleggtibleRecord::new(
                "chocolate",
                GameDimension::AwayEarnings,
                [1.05, 1.10, 1.50, 3.00],
            ),
            ColleggtibleRecord::new(
                "waterballoon",
                GameDimension::ResearchDiscount,
                [0.99, 0.98, 0.97, 0.95],
            ),
            ColleggtibleRecord::new(
                "carbon-fiber",
                GameDimension::ShippingRate,
                [1.01, 1.02, 1.03, 1.05],
            ),
            ColleggtibleRecord::new(
                "pumpkin",
                GameDimension::ShippingRate,
                [1.01, 1.02, 1.03, 1.05],
            ),
            ColleggtibleRecord::new(
                "easter",
                GameDimension::InternalHatcheryRate,
                [1.01, 1.02, 1.03, 1.05],
            ),
            ColleggtibleRecord::new(
                "silicon",
                GameDimension::EggLayingRate,
                [1.01, 1.02, 1.03, 1.05],
            ),
            ColleggtibleRecord::new(
                "pegg",
                GameDimension::HabCapacity,
                [1.01, 1.02, 1.03, 1.05],
            ),
            ColleggtibleRecord::new(
                "lithium",
                GameDimension::VehicleCost,
                [0.97, 0.95, 0.93, 0.90],
            ),
        ];

        // The baked-in set is never empty, so this cannot fail.
        Self::from_records(records).unwrap_or(Self {
            colleggtibles: Vec::new(),
            max_collected: DimensionBuffs::neutral(),
        })
    }

    pub fn colleggtibles(&self) -> &[ColleggtibleRecord] {
        &self.colleggtibles
    }

    pub fn colleggtible(&self, id: &str) -> Option<&ColleggtibleRecord> {
        self.colleggtibles.iter().find(|record| record.id == id)
    }

    /// Product of the best tier of every colleggtible affecting a
    /// dimension; 1.0 when none do.
    pub fn max_collected_multiplier(&self, dimension: GameDimension) -> f64 {
        self.max_collected.get(dimension)
    }

    /// The dimension and multiplier a bare host contributes, or None for
    /// (tier, rarity) combinations without an effect.
    pub fn host_multiplier(&self, spec: &HostSpec) -> Option<(GameDimension, f64)> {
        host_table(spec).map(|value| (host_dimension(spec), value))
    }

    /// The dimension and multiplier a socketed stone contributes, or None
    /// for buff-neutral stone families and out-of-range levels.
    pub fn stone_multiplier(&self, stone: &Stone) -> Option<(GameDimension, f64)> {
        let level = stone.level as usize;
        if level > 2 {
            return None;
        }
        let (dimension, levels) = match stone.family {
            StoneFamily::Tachyon => (GameDimension::EggLayingRate, [1.02, 1.04, 1.05]),
            StoneFamily::Quantum => (GameDimension::ShippingRate, [1.02, 1.04, 1.05]),
            StoneFamily::Life => (GameDimension::InternalHatcheryRate, [1.02, 1.04, 1.05]),
            StoneFamily::Shell => (GameDimension::Earnings, [1.05, 1.08, 1.10]),
            StoneFamily::Lunar => (GameDimension::AwayEarnings, [1.2, 1.3, 1.4]),
            _ => return None,
        };
        Some((dimension, levels[level]))
    }

    /// Socket count for a host, or None for tiers the catalog does not
    /// know about (callers fall back to the stones actually present).
    /// Tier-1 hosts have no sockets; above that the rarity sets the count.
    pub fn slot_count(&self, spec: &HostSpec) -> Option<usize> {
        if spec.tier > 3 {
            return None;
        }
        if spec.tier == 0 {
            return Some(0);
        }
        Some(spec.rarity.ordinal() as usize)
    }
}

fn host_dimension(spec: &HostSpec) -> GameDimension {
    use crate::items::HostFamily::*;
    match spec.family {
        LunarTotem => GameDimension::AwayEarnings,
        DemetersNecklace | TungstenAnkh => GameDimension::Earnings,
        PuzzleCube => GameDimension::ResearchDiscount,
        QuantumMetronome => GameDimension::EggLayingRate,
        InterstellarCompass => GameDimension::ShippingRate,
        OrnateGusset => GameDimension::HabCapacity,
        Chalice => GameDimension::InternalHatcheryRate,
    }
}

fn host_table(spec: &HostSpec) -> Option<f64> {
    use crate::items::HostFamily::*;
    use Rarity::*;
    let value = match (spec.family, spec.tier, spec.rarity) {
        (Chalice, 0, Common) => 1.05,
        (Chalice, 1, Common) => 1.10,
        (Chalice, 1, Epic) => 1.15,
        (Chalice, 2, Common) => 1.20,
        (Chalice, 2, Rare) => 1.23,
        (Chalice, 2, Epic) => 1.25,
        (Chalice, 3, Common) => 1.30,
        (Chalice, 3, Epic) => 1.35,
        (Chalice, 3, Legendary) => 1.40,

        (QuantumMetronome, 0, Common) => 1.05,
        (QuantumMetronome, 1, Common) => 1.10,
        (QuantumMetronome, 1, Rare) => 1.12,
        (QuantumMetronome, 2, Common) => 1.15,
        (QuantumMetronome, 2, Rare) => 1.17,
        (QuantumMetronome, 2, Epic) => 1.20,
        (QuantumMetronome, 3, Common) => 1.25,
        (QuantumMetronome, 3, Rare) => 1.27,
        (QuantumMetronome, 3, Epic) => 1.30,
        (QuantumMetronome, 3, Legendary) => 1.35,

        (InterstellarCompass, 0, Common) => 1.05,
        (InterstellarCompass, 1, Common) => 1.10,
        (InterstellarCompass, 2, Common) => 1.20,
        (InterstellarCompass, 2, Rare) => 1.22,
        (InterstellarCompass, 3, Common) => 1.30,
        (InterstellarCompass, 3, Rare) => 1.35,
        (InterstellarCompass, 3, Epic) => 1.40,
        (InterstellarCompass, 3, Legendary) => 1.50,

        (OrnateGusset, 0, Common) => 1.05,
        (OrnateGusset, 1, Common) => 1.10,
        (OrnateGusset, 1, Epic) => 1.12,
        (OrnateGusset, 2, Common) => 1.15,
        (OrnateGusset, 2, Rare) => 1.16,
        (OrnateGusset, 3, Common) => 1.20,
        (OrnateGusset, 3, Epic) => 1.22,
        (OrnateGusset, 3, Legendary) => 1.25,

        (LunarTotem, 0, Common) => 2.0,
        (LunarTotem, 1, Common) => 3.0,
        (LunarTotem, 1, Rare) => 8.0,
        (LunarTotem, 2, Common) => 20.0,
        (LunarTotem, 2, Rare) => 40.0,
        (LunarTotem, 3, Common) => 50.0,
        (LunarTotem, 3, Rare) => 100.0,
        (LunarTotem, 3, Epic) => 150.0,
        (LunarTotem, 3, Legendary) => 200.0,

        (DemetersNecklace, 0, Common) => 1.1,
        (DemetersNecklace, 1, Common) => 1.25,
        (DemetersNecklace, 1, Rare) => 1.35,
        (DemetersNecklace, 2, Common) => 1.5,
        (DemetersNecklace, 2, Rare) => 1.6,
        (DemetersNecklace, 2, Epic) => 1.75,
        (DemetersNecklace, 3, Common) => 2.0,
        (DemetersNecklace, 3, Rare) => 2.25,
        (DemetersNecklace, 3, Epic) => 2.5,
        (DemetersNecklace, 3, Legendary) => 3.0,

        (TungstenAnkh, 0, Common) => 1.1,
        (TungstenAnkh, 1, Common) => 1.25,
        (TungstenAnkh, 1, Rare) => 1.28,
        (TungstenAnkh, 2, Common) => 1.5,
        (TungstenAnkh, 2, Rare) => 1.75,
        (TungstenAnkh, 2, Legendary) => 2.0,
        (TungstenAnkh, 3, Common) => 2.0,
        (TungstenAnkh, 3, Rare) => 2.25,
        (TungstenAnkh, 3, Legendary) => 2.5,

        (PuzzleCube, 0, Common) => 0.95,
        (PuzzleCube, 1, Common) => 0.90,
        (PuzzleCube, 1, Epic) => 0.85,
        (PuzzleCube, 2, Common) => 0.80,
        (PuzzleCube, 2, Rare) => 0.78,
        (PuzzleCube, 3, Common) => 0.50,
        (PuzzleCube, 3, Rare) => 0.47,
        (PuzzleCube, 3, Epic) => 0.45,
        (PuzzleCube, 3, Legendary) => 0.40,

        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::HostFamily;

    #[test]
    fn test_empty_records_is_catalog_unavailable() {
        assert_eq!(
            BuffCatalog::from_records(Vec::new()).unwrap_err(),
            CteError::CatalogUnavailable
        );
    }

    #[test]
    fn test_standard_catalog_max_collected() {
        let catalog = BuffCatalog::standard();
        // Firework is the only earnings colleggtible.
        assert!((catalog.max_collected_multiplier(GameDimension::Earnings) - 1.05).abs() < 1e-12);
        // Chocolate tops out at 3x away earnings.
        assert!(
            (catalog.max_collected_multiplier(GameDimension::AwayEarnings) - 3.0).abs() < 1e-12
        );
        // Waterballoon drives research cost down to 95%.
        assert!(
            (catalog.max_collected_multiplier(GameDimension::ResearchDiscount) - 0.95).abs()
                < 1e-12
        );
        // Carbon fiber and pumpkin stack on shipping.
        assert!(
            (catalog.max_collected_multiplier(GameDimension::ShippingRate) - 1.05 * 1.05).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_non_positive_tier_values_become_neutral() {
        let catalog = BuffCatalog::from_records(vec![ColleggtibleRecord::new(
            "broken",
            GameDimension::Earnings,
            [0.0, -1.0, 1.02, 1.03],
        )])
        .unwrap();
        let record = catalog.colleggtible("broken").unwrap();
        assert_eq!(record.tier_values[0], 1.0);
        assert_eq!(record.tier_values[1], 1.0);
        assert_eq!(record.tier_values[2], 1.02);
    }

    #[test]
    fn test_host_lookup_known_and_unknown() {
        let catalog = BuffCatalog::standard();

        let ankh = HostSpec::new(HostFamily::TungstenAnkh, 3, Rarity::Legendary);
        assert_eq!(
            catalog.host_multiplier(&ankh),
            Some((GameDimension::Earnings, 2.5))
        );

        // Ankh was never issued at T4 Epic.
        let missing = HostSpec::new(HostFamily::TungstenAnkh, 3, Rarity::Epic);
        assert_eq!(catalog.host_multiplier(&missing), None);
    }

    #[test]
    fn test_cube_discount_is_below_one() {
        let catalog = BuffCatalog::standard();
        let cube = HostSpec::new(HostFamily::PuzzleCube, 3, Rarity::Legendary);
        let (dimension, value) = catalog.host_multiplier(&cube).unwrap();
        assert_eq!(dimension, GameDimension::ResearchDiscount);
        assert!(value < 1.0);
    }

    #[test]
    fn test_stone_lookup() {
        let catalog = BuffCatalog::standard();
        assert_eq!(
            catalog.stone_multiplier(&Stone::new(StoneFamily::Lunar, 2)),
            Some((GameDimension::AwayEarnings, 1.4))
        );
        assert_eq!(
            catalog.stone_multiplier(&Stone::new(StoneFamily::Shell, 0)),
            Some((GameDimension::Earnings, 1.05))
        );
        // Soul stones don't move any scored dimension.
        assert_eq!(
            catalog.stone_multiplier(&Stone::new(StoneFamily::Soul, 1)),
            None
        );
        // Out-of-range level.
        assert_eq!(
            catalog.stone_multiplier(&Stone::new(StoneFamily::Lunar, 9)),
            None
        );
    }

    #[test]
    fn test_slot_counts() {
        let catalog = BuffCatalog::standard();
        let t1 = HostSpec::new(HostFamily::LunarTotem, 0, Rarity::Common);
        assert_eq!(catalog.slot_count(&t1), Some(0));

        let t4c = HostSpec::new(HostFamily::LunarTotem, 3, Rarity::Common);
        let t4r = HostSpec::new(HostFamily::LunarTotem, 3, Rarity::Rare);
        let t4l = HostSpec::new(HostFamily::LunarTotem, 3, Rarity::Legendary);
        assert_eq!(catalog.slot_count(&t4c), Some(0));
        assert_eq!(catalog.slot_count(&t4r), Some(1));
        assert_eq!(catalog.slot_count(&t4l), Some(3));

        // Unknown tier has no catalog entry.
        let t9 = HostSpec::new(HostFamily::LunarTotem, 8, Rarity::Common);
        assert_eq!(catalog.slot_count(&t9), None);
    }
}
