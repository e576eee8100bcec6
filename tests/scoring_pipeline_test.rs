//! Integration test: Snapshot -> Buffs -> Clothed Score Pipeline
//!
//! Tests the full end-to-end flow: player snapshot → buff aggregation →
//! clothed score, plus the best-loadout path and catalog loading from
//! collaborator-shaped records.

use roost::{
    describe_loadout, Artifact, BuffCatalog, ColleggtibleProgress, ColleggtibleRecord, CteEngine,
    CteError, GameDimension, GameProfile, HostFamily, HostSpec, InventoryRecord, Permit,
    PlayerSnapshot, Rarity, Stone, StoneFamily,
};

fn units(multiplier: f64) -> f64 {
    multiplier.ln() / 1.1f64.ln()
}

/// A snapshot with every colleggtible maxed, a full epic discount, and a
/// Pro permit, so only equipment moves the score.
fn maxed_snapshot(engine: &CteEngine) -> PlayerSnapshot {
    PlayerSnapshot {
        colleggtibles: engine
            .catalog()
            .colleggtibles()
            .iter()
            .map(|record| ColleggtibleProgress::new(&record.id, 1e10))
            .collect(),
        game: Some(GameProfile {
            permit: Permit::Pro,
            epic_research_discount: 0.5,
        }),
        ..Default::default()
    }
}

// =========================================================================
// Empty and degenerate snapshots
// =========================================================================

#[test]
fn test_empty_snapshot_scores_zero_with_empty_loadout() {
    let engine = CteEngine::standard();
    let snapshot = PlayerSnapshot::default();

    assert_eq!(engine.current_score(&snapshot), 0.0);

    let result = engine.best_possible_score(&snapshot, None).unwrap();
    assert_eq!(result.score, 0.0, "no state at all should score zero");
    assert!(result.artifacts.is_empty());
    assert!(describe_loadout(&result.artifacts).is_empty());
}

#[test]
fn test_missing_inventory_falls_back_to_baseline() {
    let engine = CteEngine::standard();
    let snapshot = PlayerSnapshot {
        delivered: vec![1e10],
        credited: vec![3],
        game: Some(GameProfile {
            permit: Permit::Pro,
            epic_research_discount: 0.5,
        }),
        ..Default::default()
    };

    let result = engine.best_possible_score(&snapshot, None).unwrap();
    assert!(result.artifacts.is_empty());
    assert!(
        (result.score - engine.current_score(&snapshot)).abs() < 1e-9,
        "empty inventory must score the same as the unequipped baseline"
    );
}

// =========================================================================
// Earned units plus equipment contribution
// =========================================================================

#[test]
fn test_single_host_score_is_earned_plus_converted_multiplier() {
    let engine = CteEngine::standard();
    let mut snapshot = maxed_snapshot(&engine);
    // Three credited Truth Eggs.
    snapshot.delivered = vec![1e10];
    snapshot.credited = vec![3];
    // Necklace T3C: earnings x1.5, no sockets.
    snapshot.equipped = vec![Artifact::bare(HostSpec::new(
        HostFamily::DemetersNecklace,
        2,
        Rarity::Common,
    ))];

    let score = engine.current_score(&snapshot);
    let expected = 3.0 + units(1.5);
    assert!(
        (score - expected).abs() < 1e-9,
        "expected {expected}, got {score}"
    );
}

#[test]
fn test_partial_colleggtible_progress_penalizes_score() {
    let engine = CteEngine::standard();
    let full = maxed_snapshot(&engine);

    let mut partial = full.clone();
    // Drop chocolate (away earnings 3x at max) to tier 0.
    for progress in &mut partial.colleggtibles {
        if progress.id == "chocolate" {
            progress.farm_size = 1e7;
        }
    }

    let full_score = engine.current_score(&full);
    let partial_score = engine.current_score(&partial);
    let expected_gap = units(3.0) - units(1.05);
    assert!(
        (full_score - partial_score - expected_gap).abs() < 1e-9,
        "losing chocolate tiers should cost exactly the tier-value gap"
    );
}

// =========================================================================
// Best-loadout path
// =========================================================================

#[test]
fn test_best_loadout_beats_current_equipment() {
    let engine = CteEngine::standard();
    let mut snapshot = maxed_snapshot(&engine);

    let weak = Artifact::bare(HostSpec::new(HostFamily::TungstenAnkh, 0, Rarity::Common));
    let strong = Artifact::bare(HostSpec::new(
        HostFamily::TungstenAnkh,
        3,
        Rarity::Legendary,
    ));
    snapshot.equipped = vec![weak.clone()];
    snapshot.inventory = vec![
        InventoryRecord::host(weak),
        InventoryRecord::host(strong),
        InventoryRecord::host(Artifact::bare(HostSpec::new(
            HostFamily::LunarTotem,
            3,
            Rarity::Legendary,
        ))),
        InventoryRecord::stones(Stone::new(StoneFamily::Lunar, 2), 6),
    ];

    let current = engine.current_score(&snapshot);
    let best = engine.best_possible_score(&snapshot, None).unwrap();
    assert!(
        best.score >= current - 1e-9,
        "optimizer must never do worse than the equipped set: {} vs {current}",
        best.score
    );
    assert!(
        best.score > current + 1.0,
        "the legendary inventory should clearly beat the tier-1 ankh"
    );
}

#[test]
fn test_best_loadout_labels_are_renderable() {
    let engine = CteEngine::standard();
    let mut snapshot = maxed_snapshot(&engine);
    snapshot.inventory = vec![
        InventoryRecord::host(Artifact::bare(HostSpec::new(
            HostFamily::LunarTotem,
            3,
            Rarity::Legendary,
        ))),
        InventoryRecord::stones(Stone::new(StoneFamily::Lunar, 2), 3),
    ];

    let best = engine.best_possible_score(&snapshot, None).unwrap();
    let labels = describe_loadout(&best.artifacts);
    assert_eq!(labels, vec!["Totem-T4L [Lunar-T3, Lunar-T3, Lunar-T3]"]);
}

#[test]
fn test_host_count_hint_handling() {
    let engine = CteEngine::standard();
    let snapshot = PlayerSnapshot::default();

    assert_eq!(
        engine.best_possible_score(&snapshot, Some(0)).unwrap_err(),
        CteError::InvalidHostCountHint(0)
    );
    // Out-of-band hints are clamped, not rejected.
    assert!(engine.best_possible_score(&snapshot, Some(1)).is_ok());
    assert!(engine.best_possible_score(&snapshot, Some(200)).is_ok());
}

#[test]
fn test_standard_permit_limits_hosts() {
    let engine = CteEngine::standard();
    let mut snapshot = maxed_snapshot(&engine);
    snapshot.game.as_mut().unwrap().permit = Permit::Standard;
    snapshot.inventory = vec![
        InventoryRecord::host(Artifact::bare(HostSpec::new(
            HostFamily::TungstenAnkh,
            3,
            Rarity::Legendary,
        ))),
        InventoryRecord::host(Artifact::bare(HostSpec::new(
            HostFamily::DemetersNecklace,
            3,
            Rarity::Legendary,
        ))),
        InventoryRecord::host(Artifact::bare(HostSpec::new(
            HostFamily::LunarTotem,
            3,
            Rarity::Legendary,
        ))),
    ];

    let best = engine.best_possible_score(&snapshot, None).unwrap();
    assert!(
        best.artifacts.len() <= 2,
        "standard permit allows two hosts, got {}",
        best.artifacts.len()
    );
}

// =========================================================================
// Catalog loading from collaborator-shaped records
// =========================================================================

#[test]
fn test_catalog_from_json_records() {
    let records: Vec<ColleggtibleRecord> = serde_json::from_str(
        r#"[
            {"id": "firework", "dimension": "Earnings", "tier_values": [1.01, 1.02, 1.03, 1.05]},
            {"id": "chocolate", "dimension": "AwayEarnings", "tier_values": [1.05, 1.1, 1.5, 3.0]}
        ]"#,
    )
    .expect("records should deserialize");

    let catalog = BuffCatalog::from_records(records).expect("two records is a valid catalog");
    assert!((catalog.max_collected_multiplier(GameDimension::AwayEarnings) - 3.0).abs() < 1e-12);
    assert_eq!(
        catalog.max_collected_multiplier(GameDimension::ResearchDiscount),
        1.0
    );
}

#[test]
fn test_empty_record_set_is_catalog_unavailable() {
    assert_eq!(
        BuffCatalog::from_records(Vec::new()).unwrap_err(),
        CteError::CatalogUnavailable
    );
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let engine = CteEngine::standard();
    let mut snapshot = maxed_snapshot(&engine);
    snapshot.equipped = vec![Artifact::new(
        HostSpec::new(HostFamily::LunarTotem, 3, Rarity::Legendary),
        vec![Stone::new(StoneFamily::Lunar, 2)],
    )];

    let encoded = serde_json::to_string(&snapshot).expect("snapshot should serialize");
    let decoded: PlayerSnapshot = serde_json::from_str(&encoded).expect("snapshot should parse");
    assert_eq!(decoded, snapshot);
    assert!(
        (engine.current_score(&decoded) - engine.current_score(&snapshot)).abs() < 1e-12,
        "scoring must be stable across a serialization round trip"
    );
}
