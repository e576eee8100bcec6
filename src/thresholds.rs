//! Truth Egg tier thresholds: how many eggs must be delivered to credit
//! each successive Truth Egg.

/// The strictly increasing threshold table. Built once; the first sixteen
/// entries are hand-set, the rest follow a closed-form quadratic.
#[derive(Debug, Clone)]
pub struct TruthEggThresholds {
    table: Vec<f64>,
}

impl TruthEggThresholds {
    pub fn new() -> Self {
        let mut table = vec![
            5e7, 1e9, 1e10, 7e10, 5e11, 2e12, 7e12, 2e13, 6e13, 1.5e14, 5e14, 1.5e15, 4e15, 1e16,
            2.5e16, 5e16,
        ];

        for m in 17u32..=98 {
            let k = (m - 17) as f64;
            table.push(1e17 + k * 5e16 + (k * (k - 1.0) / 2.0) * 1e16);
        }

        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of thresholds at or below `delivered`. Monotonic; saturates
    /// at the table length.
    pub fn tiers_passed(&self, delivered: f64) -> u32 {
        let mut count = 0usize;
        while count < self.table.len() && delivered >= self.table[count] {
            count += 1;
        }
        count as u32
    }

    /// Tiers passed beyond what has already been credited; never negative.
    pub fn pending_tiers(&self, delivered: f64, credited: u32) -> u32 {
        self.tiers_passed(delivered).saturating_sub(credited)
    }

    /// The next threshold strictly above the current passed count and
    /// `floor_index`, or +inf once the table is exhausted.
    pub fn next_threshold(&self, delivered: f64, floor_index: u32) -> f64 {
        let mut passed = self.tiers_passed(delivered);
        if passed != 0 && passed < floor_index {
            passed = floor_index;
        }
        match self.table.get(passed as usize) {
            Some(value) => *value,
            None => f64::INFINITY,
        }
    }

    /// Threshold for a 1-based target index, or +inf out of range.
    pub fn threshold_for_index(&self, target: u32) -> f64 {
        if target == 0 || target as usize > self.table.len() {
            return f64::INFINITY;
        }
        self.table[target as usize - 1]
    }
}

impl Default for TruthEggThresholds {
    fn default() -> Self {
        Self::new()
    }
}
