//! Clothed Truth Egg scoring: earned Truth Eggs plus the Truth Egg
//! equivalent of every multiplicative bonus the player carries.

use crate::buffs::{artifact_buffs, colleggtible_buffs};
use crate::catalog::BuffCatalog;
use crate::constants::{MAX_EPIC_RESEARCH_DISCOUNT, MAX_HOST_COUNT, MIN_HOST_COUNT};
use crate::convert::multiplier_to_units;
use crate::dimensions::GameDimension;
use crate::error::CteError;
use crate::items::{Artifact, LoadoutResult};
use crate::optimizer::optimize_loadout;
use crate::player::{Permit, PlayerSnapshot};
use crate::thresholds::TruthEggThresholds;
use tracing::warn;

/// Immutable scoring engine: the buff catalog plus the Truth Egg
/// threshold table, built once and shared by reference across any number
/// of concurrent scoring calls.
#[derive(Debug, Clone)]
pub struct CteEngine {
    catalog: BuffCatalog,
    thresholds: TruthEggThresholds,
}

impl CteEngine {
    pub fn new(catalog: BuffCatalog) -> Self {
        Self {
            catalog,
            thresholds: TruthEggThresholds::new(),
        }
    }

    /// Engine over the baked-in catalog.
    pub fn standard() -> Self {
        Self::new(BuffCatalog::standard())
    }

    pub fn catalog(&self) -> &BuffCatalog {
        &self.catalog
    }

    pub fn thresholds(&self) -> &TruthEggThresholds {
        &self.thresholds
    }

    /// Clothed score using the player's currently equipped artifacts.
    pub fn current_score(&self, snapshot: &PlayerSnapshot) -> f64 {
        self.score_with_artifacts(snapshot, &snapshot.equipped)
    }

    /// Clothed score with an explicit equipment set in place of whatever
    /// is equipped.
    ///
    /// A snapshot without a game profile scores its earned Truth Eggs
    /// only, so a fully empty snapshot scores zero.
    pub fn score_with_artifacts(&self, snapshot: &PlayerSnapshot, artifacts: &[Artifact]) -> f64 {
        let earned = f64::from(snapshot.earned_units(&self.thresholds));
        let Some(game) = &snapshot.game else {
            return earned;
        };

        let collected = colleggtible_buffs(&self.catalog, &snapshot.colleggtibles);
        let equipment = artifact_buffs(&self.catalog, artifacts);

        let max_earnings = self.catalog.max_collected_multiplier(GameDimension::Earnings);
        let max_away = self
            .catalog
            .max_collected_multiplier(GameDimension::AwayEarnings);
        let max_research = self
            .catalog
            .max_collected_multiplier(GameDimension::ResearchDiscount);

        let earnings_effect = equipment.earnings * equipment.away_earnings;

        let research_price =
            equipment.research_discount * game.epic_research_discount * collected.research_discount;
        let research_effect = 1.0 / research_price;
        let max_research_effect = 1.0 / (MAX_EPIC_RESEARCH_DISCOUNT * max_research);

        let earnings_penalty = collected.earnings / max_earnings;
        let away_penalty = collected.away_earnings / max_away;
        let research_penalty = research_effect / max_research_effect;

        let total = earnings_effect
            * game.permit.multiplier_penalty()
            * earnings_penalty
            * away_penalty
            * research_penalty;

        earned + multiplier_to_units(total)
    }

    /// Runs the optimizer over the snapshot's inventory and scores the
    /// winning loadout.
    ///
    /// `host_count_hint` overrides the permit-derived host count; hints
    /// outside [2, 4] are clamped (and logged), except 0, which is
    /// rejected as unusable.
    pub fn best_possible_score(
        &self,
        snapshot: &PlayerSnapshot,
        host_count_hint: Option<u8>,
    ) -> Result<LoadoutResult, CteError> {
        let max_hosts = self.resolve_host_count(snapshot, host_count_hint)?;
        let artifacts = optimize_loadout(&self.catalog, &snapshot.inventory, max_hosts as usize);
        let score = self.score_with_artifacts(snapshot, &artifacts);
        Ok(LoadoutResult { score, artifacts })
    }

    /// Truth Egg equivalent of an artifact set alone, ignoring the rest of
    /// the player's state.
    pub fn artifact_contribution(&self, artifacts: &[Artifact]) -> f64 {
        let buffs = artifact_buffs(&self.catalog, artifacts);
        multiplier_to_units(buffs.earnings * buffs.away_earnings / buffs.research_discount)
    }

    /// Truth Egg equivalent of colleggtible progress alone, relative to
    /// the theoretical maximum; complete collections contribute zero,
    /// partial ones a deficit.
    pub fn colleggtible_contribution(&self, snapshot: &PlayerSnapshot) -> f64 {
        let collected = colleggtible_buffs(&self.catalog, &snapshot.colleggtibles);
        let max_earnings = self.catalog.max_collected_multiplier(GameDimension::Earnings);
        let max_away = self
            .catalog
            .max_collected_multiplier(GameDimension::AwayEarnings);
        let max_research = self
            .catalog
            .max_collected_multiplier(GameDimension::ResearchDiscount);

        let earnings_penalty = collected.earnings / max_earnings;
        let away_penalty = collected.away_earnings / max_away;
        let research_penalty = max_research / collected.research_discount;

        multiplier_to_units(earnings_penalty * away_penalty * research_penalty)
    }

    fn resolve_host_count(
        &self,
        snapshot: &PlayerSnapshot,
        hint: Option<u8>,
    ) -> Result<u8, CteError> {
        match hint {
            Some(0) => Err(CteError::InvalidHostCountHint(0)),
            Some(hint) => {
                let clamped = hint.clamp(MIN_HOST_COUNT, MAX_HOST_COUNT);
                if clamped != hint {
                    warn!(hint, clamped, "host count hint outside supported range");
                }
                Ok(clamped)
            }
            None => {
                let permit = snapshot
                    .game
                    .as_ref()
                    .map(|game| game.permit)
                    .unwrap_or(Permit::Standard);
                Ok(permit.host_count())
            }
        }
    }
}

/// Human-readable labels for a chosen loadout, one per host, stones
/// bracketed after the host.
pub fn describe_loadout(artifacts: &[Artifact]) -> Vec<String> {
    artifacts
        .iter()
        .map(|artifact| {
            let host = artifact.spec.label();
            if artifact.stones.is_empty() {
                return host;
            }
            let stones: Vec<String> = artifact.stones.iter().map(|stone| stone.label()).collect();
            format!("{} [{}]", host, stones.join(", "))
        })
        .collect()
}
