//! Role effort splitter
//!
//! Distributes each tier's effort-days across the three roles with a fixed
//! split. The split intentionally does not read `EffortDistribution`.
//!
//! Low and high tiers allocate all of their effort. The medium tier's
//! weights sum to 0.90, so 10% of medium effort is not priced.

use crate::estimate::effort::TierEfforts;
use crate::model::{ComplexityTier, Role, RoleMap};

/// Fixed role weights per tier (architect, lead developer, developer)
pub fn split_weights(tier: ComplexityTier) -> RoleMap<f64> {
    match tier {
        ComplexityTier::Low => RoleMap::new(0.10, 0.10, 0.80),
        ComplexityTier::Medium => RoleMap::new(0.15, 0.30, 0.45),
        ComplexityTier::High => RoleMap::new(0.20, 0.55, 0.25),
    }
}

/// Effort-days allocated to each role
pub fn split_effort(efforts: &TierEfforts) -> RoleMap<f64> {
    RoleMap::from_fn(|role: Role| {
        ComplexityTier::ALL
            .iter()
            .map(|&tier| efforts.get(tier) * split_weights(tier).get(role))
            .sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EffortDistribution;
    use quickcheck_macros::quickcheck;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_weight_sums() {
        assert!((split_weights(ComplexityTier::Low).sum() - 1.0).abs() < EPS);
        assert!((split_weights(ComplexityTier::Medium).sum() - 0.90).abs() < EPS);
        assert!((split_weights(ComplexityTier::High).sum() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_worked_example_split() {
        let efforts = TierEfforts::estimate(10, 5, 2, 30);
        let roles = split_effort(&efforts);
        assert!((roles.architect - 8.775).abs() < EPS);
        assert!((roles.lead_dev - 19.15).abs() < EPS);
        assert!((roles.dev - 26.325).abs() < EPS);
    }

    #[test]
    fn test_split_matches_distribution_table_today() {
        // The calculation does not read the table; flag if the two drift apart
        let table = EffortDistribution::default();
        for tier in ComplexityTier::ALL {
            assert_eq!(&split_weights(tier), table.weights(tier));
        }
    }

    // Allocated effort is each tier's effort scaled by its weight sum
    #[quickcheck]
    fn prop_split_allocates_weighted_effort(low: u16, medium: u16, high: u16, partners: u16) -> bool {
        let efforts = TierEfforts::estimate(low.into(), medium.into(), high.into(), partners.into());
        let roles = split_effort(&efforts);
        let expected: f64 = ComplexityTier::ALL
            .iter()
            .map(|&tier| efforts.get(tier) * split_weights(tier).sum())
            .sum();
        (roles.sum() - expected).abs() <= EPS * expected.max(1.0)
    }
}
