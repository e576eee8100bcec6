//! Loadout optimizer: picks the host subset and stone fill that maximize
//! the equipment contribution to the clothed score.
//!
//! Hosts are deduplicated to the best candidate per family, stones are
//! ranked once, and a bounded skip/take search walks the host subsets.
//! Candidate counts stay in the low tens, so no pruning beyond the host
//! cap is needed.

use crate::buffs::artifact_buffs;
use crate::catalog::BuffCatalog;
use crate::constants::STONE_POTENTIAL_BASE;
use crate::convert::definitely_greater;
use crate::items::{Artifact, HostFamily, InventoryRecord, OwnedItem, Stone, StoneFamily};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct HostCandidate {
    artifact: Artifact,
    family: HostFamily,
    base_multiplier: f64,
    slots: usize,
}

#[derive(Debug, Clone, Copy)]
struct StoneCandidate {
    stone: Stone,
    multiplier: f64,
}

/// Chooses at most `max_hosts` hosts (one per family) plus the best stone
/// fill for their combined sockets. Returns the chosen artifacts with
/// stones assigned, or an empty list when nothing eligible is owned.
pub fn optimize_loadout(
    catalog: &BuffCatalog,
    inventory: &[InventoryRecord],
    max_hosts: usize,
) -> Vec<Artifact> {
    let (hosts, stones) = collect_candidates(catalog, inventory);
    if hosts.is_empty() {
        return Vec::new();
    }

    let products = stone_prefix_products(&stones);
    let best = best_host_combo(&hosts, max_hosts, &products);
    if best.is_empty() {
        return Vec::new();
    }

    let total_slots: usize = best.iter().map(|&i| hosts[i].slots).sum();
    let fill_count = total_slots.min(stones.len());
    let fill: Vec<Stone> = stones[..fill_count].iter().map(|c| c.stone).collect();

    reslot_hosts(&hosts, &best, &fill)
}

/// Only two stone families move the score: Lunar (away earnings) and
/// Shell (earnings).
fn is_score_relevant_stone(family: StoneFamily) -> bool {
    matches!(family, StoneFamily::Lunar | StoneFamily::Shell)
}

/// A bare host's contribution to the optimization target:
/// earnings x away earnings x inverse research discount.
fn host_base_multiplier(catalog: &BuffCatalog, artifact: &Artifact) -> f64 {
    let buffs = artifact_buffs(catalog, &[Artifact::bare(artifact.spec)]);
    buffs.earnings * buffs.away_earnings * (1.0 / buffs.research_discount)
}

/// Monotonic proxy for how good a host can get once its sockets are
/// filled; favors raw power and socket capacity without a full search.
fn host_potential(candidate: &HostCandidate) -> f64 {
    candidate.base_multiplier * STONE_POTENTIAL_BASE.powi(candidate.slots as i32)
}

fn stone_fill_multiplier(catalog: &BuffCatalog, stone: &Stone) -> f64 {
    catalog
        .stone_multiplier(stone)
        .map(|(_, value)| value)
        .unwrap_or(1.0)
}

/// One pass over the inventory: the single best host per family (by
/// potential) and every score-relevant stone, loose stacks expanded by
/// quantity and socketed stones harvested off the hosts that carry them.
fn collect_candidates(
    catalog: &BuffCatalog,
    inventory: &[InventoryRecord],
) -> (Vec<HostCandidate>, Vec<StoneCandidate>) {
    let mut best_by_family: HashMap<HostFamily, HostCandidate> = HashMap::new();
    let mut stones: Vec<StoneCandidate> = Vec::new();

    for record in inventory {
        match &record.item {
            OwnedItem::Stone(stone) => {
                if !is_score_relevant_stone(stone.family) {
                    continue;
                }
                let quantity = record.quantity.max(1);
                for _ in 0..quantity {
                    stones.push(StoneCandidate {
                        stone: *stone,
                        multiplier: stone_fill_multiplier(catalog, stone),
                    });
                }
            }
            OwnedItem::Host(artifact) => {
                for stone in &artifact.stones {
                    if is_score_relevant_stone(stone.family) {
                        stones.push(StoneCandidate {
                            stone: *stone,
                            multiplier: stone_fill_multiplier(catalog, stone),
                        });
                    }
                }

                let slots = catalog
                    .slot_count(&artifact.spec)
                    .unwrap_or(artifact.stones.len());
                let base = host_base_multiplier(catalog, artifact);
                if base <= 1.0 && slots == 0 {
                    continue;
                }

                let candidate = HostCandidate {
                    artifact: artifact.clone(),
                    family: artifact.spec.family,
                    base_multiplier: base,
                    slots,
                };
                match best_by_family.get(&candidate.family) {
                    Some(current) if host_potential(current) >= host_potential(&candidate) => {}
                    _ => {
                        best_by_family.insert(candidate.family, candidate);
                    }
                }
            }
        }
    }

    stones.sort_by(|a, b| {
        b.multiplier
            .partial_cmp(&a.multiplier)
            .unwrap_or(Ordering::Equal)
    });

    // Fixed candidate order keeps tie-breaking, and therefore the chosen
    // loadout, deterministic.
    let mut hosts: Vec<HostCandidate> = best_by_family.into_values().collect();
    hosts.sort_by_key(|candidate| candidate.family);

    (hosts, stones)
}

/// Prefix products over the ranked stones: `products[k]` is the best fill
/// value achievable with exactly `k` sockets.
fn stone_prefix_products(stones: &[StoneCandidate]) -> Vec<f64> {
    let mut products = Vec::with_capacity(stones.len() + 1);
    products.push(1.0);
    for (i, candidate) in stones.iter().enumerate() {
        products.push(products[i] * candidate.multiplier);
    }
    products
}

struct BestCombo {
    score: f64,
    selection: Vec<usize>,
}

/// Skip/take search over the family-deduplicated candidates. A selection
/// only replaces the incumbent when it beats it by more than the score
/// tolerance, so results are stable under accumulation order.
fn best_host_combo(
    hosts: &[HostCandidate],
    max_hosts: usize,
    stone_products: &[f64],
) -> Vec<usize> {
    let mut best = BestCombo {
        score: 1.0,
        selection: Vec::new(),
    };
    search(hosts, max_hosts, stone_products, 0, &[], &mut best);
    best.selection
}

fn search(
    hosts: &[HostCandidate],
    max_hosts: usize,
    stone_products: &[f64],
    index: usize,
    selected: &[usize],
    best: &mut BestCombo,
) {
    if !selected.is_empty() {
        let base: f64 = selected.iter().map(|&i| hosts[i].base_multiplier).product();
        let total_slots: usize = selected.iter().map(|&i| hosts[i].slots).sum();
        let fill_index = total_slots.min(stone_products.len() - 1);
        let score = base * stone_products[fill_index];
        if definitely_greater(score, best.score) {
            best.score = score;
            best.selection = selected.to_vec();
        }
    }

    if index >= hosts.len() || selected.len() == max_hosts {
        return;
    }

    search(hosts, max_hosts, stone_products, index + 1, selected, best);

    // Candidates are already one-per-family, so taking this host cannot
    // collide with an earlier pick.
    let mut taken = selected.to_vec();
    taken.push(index);
    search(hosts, max_hosts, stone_products, index + 1, &taken, best);
}

/// Builds the chosen artifacts, dealing ranked stones into each host's
/// sockets in order.
fn reslot_hosts(hosts: &[HostCandidate], selection: &[usize], fill: &[Stone]) -> Vec<Artifact> {
    let mut result = Vec::with_capacity(selection.len());
    let mut next_stone = 0;
    for &index in selection {
        let host = &hosts[index];
        let take = host.slots.min(fill.len() - next_stone);
        let assigned = fill[next_stone..next_stone + take].to_vec();
        next_stone += take;
        result.push(Artifact::new(host.artifact.spec, assigned));
    }
    result
}
