//! Regional profile table for the KPI generator.

use crate::error::{DatasmithError, Result};
use crate::rng::NoiseSource;

/// Multiplicative factors and sampling weight for one sales region.
#[derive(Debug, Clone)]
pub struct RegionProfile {
    pub name: String,
    /// Probability weight for the per-day region pick. Normalized by
    /// [`RegionTable::new`].
    pub weight: f64,
    /// Multiplier on marketing spend.
    pub spend_mult: f64,
    /// Multiplier on average order value.
    pub aov_mult: f64,
    /// Multiplier on conversion rate.
    pub conv_mult: f64,
}

impl RegionProfile {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        spend_mult: f64,
        aov_mult: f64,
        conv_mult: f64,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            spend_mult,
            aov_mult,
            conv_mult,
        }
    }
}

/// Weighted set of regions.
///
/// Weights are normalized at construction so they always form a
/// probability distribution, whatever scale the caller used.
#[derive(Debug, Clone)]
pub struct RegionTable {
    regions: Vec<RegionProfile>,
}

impl RegionTable {
    /// Build a table, validating and normalizing the weights.
    pub fn new(mut regions: Vec<RegionProfile>) -> Result<Self> {
        if regions.is_empty() {
            return Err(DatasmithError::EmptyTable(
                "region table needs at least one region".to_string(),
            ));
        }
        if regions.iter().any(|r| !r.weight.is_finite() || r.weight <= 0.0) {
            return Err(DatasmithError::InvalidWeights(
                "every region weight must be positive and finite".to_string(),
            ));
        }
        let total: f64 = regions.iter().map(|r| r.weight).sum();
        for region in &mut regions {
            region.weight /= total;
        }
        Ok(Self { regions })
    }

    /// The regions in declared order.
    pub fn regions(&self) -> &[RegionProfile] {
        &self.regions
    }

    /// Weighted pick of one region, consuming a single uniform draw.
    pub fn pick<'a>(&'a self, rng: &mut dyn NoiseSource) -> &'a RegionProfile {
        let u = rng.unit();
        let mut cumulative = 0.0;
        for region in &self.regions {
            cumulative += region.weight;
            if u < cumulative {
                return region;
            }
        }
        // Floating-point shortfall in the cumulative sum lands on the
        // last region.
        self.regions.last().expect("table is non-empty")
    }
}

/// Built-in four-region profile table.
pub fn default_regions() -> RegionTable {
    RegionTable::new(vec![
        RegionProfile::new("North", 0.28, 1.05, 1.02, 1.00),
        RegionProfile::new("South", 0.24, 0.95, 0.98, 0.97),
        RegionProfile::new("East", 0.26, 1.00, 1.03, 1.02),
        RegionProfile::new("West", 0.22, 1.08, 1.06, 1.03),
    ])
    .expect("built-in region weights are valid")
}
