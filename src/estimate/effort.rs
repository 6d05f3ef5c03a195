//! Effort-day estimation per complexity tier
//!
//! Formula: effort_days(tier) = count × multiplier(tier) + total_partners / 3

use crate::model::ComplexityTier;
use serde::{Deserialize, Serialize};

/// Every tier carries one third of a day per partner on top of its items
const PARTNER_DIVISOR: f64 = 3.0;

/// Effort-days per work item for a tier
pub fn tier_multiplier(tier: ComplexityTier) -> f64 {
    match tier {
        ComplexityTier::Low => 0.4,
        ComplexityTier::Medium => 2.5,
        ComplexityTier::High => 5.0,
    }
}

/// Effort-days for one tier
pub fn effort_days(tier: ComplexityTier, count: u32, total_partners: u32) -> f64 {
    f64::from(count) * tier_multiplier(tier) + f64::from(total_partners) / PARTNER_DIVISOR
}

/// Effort-days for all three tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierEfforts {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl TierEfforts {
    /// Estimate every tier from item counts and the partner count
    pub fn estimate(low: u32, medium: u32, high: u32, total_partners: u32) -> Self {
        Self {
            low: effort_days(ComplexityTier::Low, low, total_partners),
            medium: effort_days(ComplexityTier::Medium, medium, total_partners),
            high: effort_days(ComplexityTier::High, high, total_partners),
        }
    }

    pub fn get(&self, tier: ComplexityTier) -> f64 {
        match tier {
            ComplexityTier::Low => self.low,
            ComplexityTier::Medium => self.medium,
            ComplexityTier::High => self.high,
        }
    }

    pub fn total(&self) -> f64 {
        self.low + self.medium + self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_worked_example_efforts() {
        let efforts = TierEfforts::estimate(10, 5, 2, 30);
        assert!((efforts.low - 14.0).abs() < EPS);
        assert!((efforts.medium - 22.5).abs() < EPS);
        assert!((efforts.high - 20.0).abs() < EPS);
    }

    #[test]
    fn test_zero_inputs() {
        let efforts = TierEfforts::estimate(0, 0, 0, 0);
        assert_eq!(efforts.total(), 0.0);
    }

    #[test]
    fn test_partners_only() {
        // Partners contribute to every tier even with no items
        let efforts = TierEfforts::estimate(0, 0, 0, 9);
        for tier in ComplexityTier::ALL {
            assert!((efforts.get(tier) - 3.0).abs() < EPS);
        }
    }

    #[quickcheck]
    fn prop_effort_formula(count: u16, partners: u16) -> bool {
        let c = f64::from(count);
        let p = f64::from(partners);
        let low = effort_days(ComplexityTier::Low, count.into(), partners.into());
        let medium = effort_days(ComplexityTier::Medium, count.into(), partners.into());
        let high = effort_days(ComplexityTier::High, count.into(), partners.into());

        (low - (0.4 * c + p / 3.0)).abs() < EPS
            && (medium - (2.5 * c + p / 3.0)).abs() < EPS
            && (high - (5.0 * c + p / 3.0)).abs() < EPS
    }
}
