//! Buff aggregation: equipped artifacts and colleggtible history each fold
//! down to one multiplier per game dimension.

use crate::catalog::BuffCatalog;
use crate::constants::COLLEGGTIBLE_TIER_THRESHOLDS;
use crate::dimensions::DimensionBuffs;
use crate::items::Artifact;
use crate::player::ColleggtibleProgress;
use std::collections::HashMap;

/// Folds a set of equipped artifacts into per-dimension multipliers.
///
/// Each host's own buff is applied first, then each of its stones, in a
/// stable left-to-right order. Unknown catalog keys contribute nothing.
pub fn artifact_buffs(catalog: &BuffCatalog, artifacts: &[Artifact]) -> DimensionBuffs {
    let mut buffs = DimensionBuffs::neutral();
    for artifact in artifacts {
        if let Some((dimension, value)) = catalog.host_multiplier(&artifact.spec) {
            buffs.apply(dimension, value);
        }
        for stone in &artifact.stones {
            if let Some((dimension, value)) = catalog.stone_multiplier(stone) {
                buffs.apply(dimension, value);
            }
        }
    }
    buffs
}

/// Folds colleggtible progress into per-dimension multipliers.
///
/// Progress may carry several entries per colleggtible; the best reached
/// farm size wins. Farms below the first tier threshold contribute
/// nothing, as do ids the catalog does not know.
pub fn colleggtible_buffs(
    catalog: &BuffCatalog,
    progress: &[ColleggtibleProgress],
) -> DimensionBuffs {
    let mut best_by_id: HashMap<&str, f64> = HashMap::new();
    for entry in progress {
        let best = best_by_id.entry(entry.id.as_str()).or_insert(0.0);
        if entry.farm_size > *best {
            *best = entry.farm_size;
        }
    }

    let mut buffs = DimensionBuffs::neutral();
    for record in catalog.colleggtibles() {
        let Some(&farm_size) = best_by_id.get(record.id.as_str()) else {
            continue;
        };
        let Some(tier) = progress_tier(farm_size) else {
            continue;
        };
        buffs.apply(record.dimension, record.tier_values[tier]);
    }
    buffs
}

/// Tier reached for a farm size, or None below the first threshold.
fn progress_tier(farm_size: f64) -> Option<usize> {
    let mut tier = None;
    for (index, &threshold) in COLLEGGTIBLE_TIER_THRESHOLDS.iter().enumerate() {
        if farm_size >= threshold {
            tier = Some(index);
        }
    }
    tier
}
