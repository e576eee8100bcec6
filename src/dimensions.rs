use serde::{Deserialize, Serialize};

/// The game dimensions a buff can affect.
///
/// `VehicleCost` exists in the colleggtible data but never feeds the score;
/// the aggregators route it through the neutral-default path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameDimension {
    Earnings,
    AwayEarnings,
    EggLayingRate,
    ShippingRate,
    InternalHatcheryRate,
    HabCapacity,
    ResearchDiscount,
    VehicleCost,
}

/// One multiplier per scored game dimension. Neutral is 1.0 everywhere;
/// every multiplier stays > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBuffs {
    pub earnings: f64,
    pub away_earnings: f64,
    pub egg_laying_rate: f64,
    pub shipping_rate: f64,
    pub internal_hatchery_rate: f64,
    pub hab_capacity: f64,
    pub research_discount: f64,
}

impl DimensionBuffs {
    pub fn neutral() -> Self {
        Self {
            earnings: 1.0,
            away_earnings: 1.0,
            egg_laying_rate: 1.0,
            shipping_rate: 1.0,
            internal_hatchery_rate: 1.0,
            hab_capacity: 1.0,
            research_discount: 1.0,
        }
    }

    /// Returns the multiplier for a dimension, 1.0 for untracked ones.
    pub fn get(&self, dimension: GameDimension) -> f64 {
        match dimension {
            GameDimension::Earnings => self.earnings,
            GameDimension::AwayEarnings => self.away_earnings,
            GameDimension::EggLayingRate => self.egg_laying_rate,
            GameDimension::ShippingRate => self.shipping_rate,
            GameDimension::InternalHatcheryRate => self.internal_hatchery_rate,
            GameDimension::HabCapacity => self.hab_capacity,
            GameDimension::ResearchDiscount => self.research_discount,
            GameDimension::VehicleCost => 1.0,
        }
    }

    /// Multiplies `value` into the dimension's running product. Untracked
    /// dimensions and non-positive values are skipped.
    pub fn apply(&mut self, dimension: GameDimension, value: f64) {
        if value <= 0.0 {
            return;
        }
        match dimension {
            GameDimension::Earnings => self.earnings *= value,
            GameDimension::AwayEarnings => self.away_earnings *= value,
            GameDimension::EggLayingRate => self.egg_laying_rate *= value,
            GameDimension::ShippingRate => self.shipping_rate *= value,
            GameDimension::InternalHatcheryRate => self.internal_hatchery_rate *= value,
            GameDimension::HabCapacity => self.hab_capacity *= value,
            GameDimension::ResearchDiscount => self.research_discount *= value,
            GameDimension::VehicleCost => {}
        }
    }
}

impl Default for DimensionBuffs {
    fn default() -> Self {
        Self::neutral()
    }
}
