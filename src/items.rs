use serde::{Deserialize, Serialize};

/// Artifact families that can host stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HostFamily {
    LunarTotem,
    DemetersNecklace,
    TungstenAnkh,
    PuzzleCube,
    QuantumMetronome,
    InterstellarCompass,
    OrnateGusset,
    Chalice,
}

impl HostFamily {
    pub const ALL: [HostFamily; 8] = [
        HostFamily::LunarTotem,
        HostFamily::DemetersNecklace,
        HostFamily::TungstenAnkh,
        HostFamily::PuzzleCube,
        HostFamily::QuantumMetronome,
        HostFamily::InterstellarCompass,
        HostFamily::OrnateGusset,
        HostFamily::Chalice,
    ];

    /// Short name used in loadout labels.
    pub fn short_name(&self) -> &'static str {
        match self {
            HostFamily::LunarTotem => "Totem",
            HostFamily::DemetersNecklace => "Necklace",
            HostFamily::TungstenAnkh => "Ankh",
            HostFamily::PuzzleCube => "Cube",
            HostFamily::QuantumMetronome => "Metronome",
            HostFamily::InterstellarCompass => "Compass",
            HostFamily::OrnateGusset => "Gusset",
            HostFamily::Chalice => "Chalice",
        }
    }
}

/// Stone families that can occupy a socket. Only Lunar and Shell move the
/// score; the rest are socketable but buff-neutral here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneFamily {
    Tachyon,
    Quantum,
    Life,
    Lunar,
    Shell,
    Dilithium,
    Soul,
    Prophecy,
    Terra,
    Clarity,
}

impl StoneFamily {
    pub fn short_name(&self) -> &'static str {
        match self {
            StoneFamily::Tachyon => "Tachyon",
            StoneFamily::Quantum => "Quantum",
            StoneFamily::Life => "Life",
            StoneFamily::Lunar => "Lunar",
            StoneFamily::Shell => "Shell",
            StoneFamily::Dilithium => "Dilithium",
            StoneFamily::Soul => "Soul",
            StoneFamily::Prophecy => "Prophecy",
            StoneFamily::Terra => "Terra",
            StoneFamily::Clarity => "Clarity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// One-letter abbreviation used in loadout labels.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Rarity::Common => "C",
            Rarity::Rare => "R",
            Rarity::Epic => "E",
            Rarity::Legendary => "L",
        }
    }

    /// Ordinal position, increasing with power.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

/// Identity of a host item: family, 0-based tier, rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostSpec {
    pub family: HostFamily,
    pub tier: u8,
    pub rarity: Rarity,
}

impl HostSpec {
    pub fn new(family: HostFamily, tier: u8, rarity: Rarity) -> Self {
        Self {
            family,
            tier,
            rarity,
        }
    }

    /// Label like "Ankh-T4L".
    pub fn label(&self) -> String {
        format!(
            "{}-T{}{}",
            self.family.short_name(),
            self.tier + 1,
            self.rarity.abbrev()
        )
    }
}

/// A stone: socketable family plus 0-based level (no rarity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub family: StoneFamily,
    pub level: u8,
}

impl Stone {
    pub fn new(family: StoneFamily, level: u8) -> Self {
        Self { family, level }
    }

    /// Label like "Lunar-T3".
    pub fn label(&self) -> String {
        format!("{}-T{}", self.family.short_name(), self.level + 1)
    }
}

/// A host item together with the stones socketed into it. The stone list
/// never exceeds the host's socket count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub spec: HostSpec,
    pub stones: Vec<Stone>,
}

impl Artifact {
    pub fn new(spec: HostSpec, stones: Vec<Stone>) -> Self {
        Self { spec, stones }
    }

    pub fn bare(spec: HostSpec) -> Self {
        Self {
            spec,
            stones: Vec::new(),
        }
    }
}

/// Something a player can hold in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OwnedItem {
    Host(Artifact),
    Stone(Stone),
}

/// An inventory line: one owned item and how many of it the player holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item: OwnedItem,
    pub quantity: u32,
}

impl InventoryRecord {
    pub fn host(artifact: Artifact) -> Self {
        Self {
            item: OwnedItem::Host(artifact),
            quantity: 1,
        }
    }

    pub fn stones(stone: Stone, quantity: u32) -> Self {
        Self {
            item: OwnedItem::Stone(stone),
            quantity,
        }
    }
}

/// Result of a best-loadout search: the score and the artifacts (with
/// stones assigned) that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutResult {
    pub score: f64,
    pub artifacts: Vec<Artifact>,
}
