//! Static configuration tables
//!
//! Rates, effort weights, efficiency multipliers and baseline headcounts.
//! Built once (defaults or the config file) and only read afterwards.

use crate::errors::{EstimatorError, Result};
use crate::model::types::{ComplexityTier, DeploymentModel, Role, RoleMap};
use serde::{Deserialize, Serialize};

/// Tolerance used when checking weight sums
const WEIGHT_EPSILON: f64 = 1e-9;

/// Per-role rates for each deployment model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    pub onshore: RoleMap<f64>,
    pub hybrid: RoleMap<f64>,
    pub offshore: RoleMap<f64>,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            onshore: RoleMap::new(140.0, 105.0, 76.0),
            hybrid: RoleMap::new(140.0, 60.0, 30.0),
            offshore: RoleMap::new(75.0, 60.0, 30.0),
        }
    }
}

impl RateCard {
    /// Rate row for a deployment model
    pub fn rates_for(&self, deployment: DeploymentModel) -> &RoleMap<f64> {
        match deployment {
            DeploymentModel::Onshore => &self.onshore,
            DeploymentModel::Hybrid => &self.hybrid,
            DeploymentModel::Offshore => &self.offshore,
        }
    }

    pub fn rate(&self, deployment: DeploymentModel, role: Role) -> f64 {
        *self.rates_for(deployment).get(role)
    }

    /// Every rate must be a positive, finite number
    pub fn validate(&self) -> Result<()> {
        for deployment in DeploymentModel::ALL {
            for (role, rate) in self.rates_for(deployment).iter() {
                if !rate.is_finite() || *rate <= 0.0 {
                    return Err(EstimatorError::ConfigError(format!(
                        "rate for {} {} must be a positive number, got {}",
                        deployment, role, rate
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Intended share of each tier's effort per role.
///
/// Not consulted by the cost calculation, which uses a fixed split; kept as
/// its own table until product decides whether it should drive the split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffortDistribution {
    pub low: RoleMap<f64>,
    pub medium: RoleMap<f64>,
    pub high: RoleMap<f64>,
}

impl Default for EffortDistribution {
    fn default() -> Self {
        Self {
            low: RoleMap::new(0.10, 0.10, 0.80),
            medium: RoleMap::new(0.15, 0.30, 0.45),
            high: RoleMap::new(0.20, 0.55, 0.25),
        }
    }
}

impl EffortDistribution {
    pub fn weights(&self, tier: ComplexityTier) -> &RoleMap<f64> {
        match tier {
            ComplexityTier::Low => &self.low,
            ComplexityTier::Medium => &self.medium,
            ComplexityTier::High => &self.high,
        }
    }

    /// Weights must be non-negative and may not allocate more than the
    /// tier's effort (sum ≤ 1.0). The medium tier allocates 0.90.
    pub fn validate(&self) -> Result<()> {
        for tier in ComplexityTier::ALL {
            let weights = self.weights(tier);
            if weights.iter().any(|(_, w)| !w.is_finite() || *w < 0.0) {
                return Err(EstimatorError::ConfigError(format!(
                    "effort weights for {} tier must be non-negative",
                    tier
                )));
            }
            if weights.sum() > 1.0 + WEIGHT_EPSILON {
                return Err(EstimatorError::ConfigError(format!(
                    "effort weights for {} tier sum to {}, more than 1.0",
                    tier,
                    weights.sum()
                )));
            }
        }
        Ok(())
    }
}

/// Cost multipliers for under-, optimally and over-staffed roles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyFactor {
    pub min: f64,
    pub optimal: f64,
    pub max: f64,
}

/// Efficiency multipliers per role
pub type EfficiencyFactors = RoleMap<EfficiencyFactor>;

impl Default for EfficiencyFactors {
    fn default() -> Self {
        RoleMap::new(
            EfficiencyFactor {
                min: 1.5,
                optimal: 1.0,
                max: 1.2,
            },
            EfficiencyFactor {
                min: 1.4,
                optimal: 1.0,
                max: 1.15,
            },
            EfficiencyFactor {
                min: 1.3,
                optimal: 1.0,
                max: 1.1,
            },
        )
    }
}

/// Baseline headcount per role
pub type DefaultResources = RoleMap<u32>;

impl Default for DefaultResources {
    fn default() -> Self {
        RoleMap::new(3, 10, 20)
    }
}

/// Baselines are ratio denominators and must be non-zero
pub fn validate_resources(resources: &DefaultResources) -> Result<()> {
    for (role, count) in resources.iter() {
        if *count == 0 {
            return Err(EstimatorError::ConfigError(format!(
                "default headcount for {} must be greater than 0",
                role
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_card() {
        let card = RateCard::default();
        assert_eq!(card.rate(DeploymentModel::Onshore, Role::Architect), 140.0);
        assert_eq!(card.rate(DeploymentModel::Onshore, Role::LeadDev), 105.0);
        assert_eq!(card.rate(DeploymentModel::Onshore, Role::Dev), 76.0);
        assert_eq!(card.rate(DeploymentModel::Hybrid, Role::Architect), 140.0);
        assert_eq!(card.rate(DeploymentModel::Hybrid, Role::LeadDev), 60.0);
        assert_eq!(card.rate(DeploymentModel::Offshore, Role::Architect), 75.0);
        assert_eq!(card.rate(DeploymentModel::Offshore, Role::Dev), 30.0);
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_rate_card_rejects_non_positive() {
        let mut card = RateCard::default();
        card.hybrid.dev = 0.0;
        assert!(card.validate().is_err());

        let mut card = RateCard::default();
        card.offshore.architect = f64::NAN;
        assert!(card.validate().is_err());
    }

    #[test]
    fn test_effort_distribution_sums() {
        let dist = EffortDistribution::default();
        assert!((dist.low.sum() - 1.0).abs() < WEIGHT_EPSILON);
        assert!((dist.medium.sum() - 0.90).abs() < WEIGHT_EPSILON);
        assert!((dist.high.sum() - 1.0).abs() < WEIGHT_EPSILON);
        assert!(dist.validate().is_ok());
    }

    #[test]
    fn test_effort_distribution_rejects_over_allocation() {
        let mut dist = EffortDistribution::default();
        dist.medium.dev = 0.6;
        assert!(dist.validate().is_err());

        let mut dist = EffortDistribution::default();
        dist.low.architect = -0.1;
        assert!(dist.validate().is_err());
    }

    #[test]
    fn test_default_efficiency_factors() {
        let factors = EfficiencyFactors::default();
        assert_eq!(factors.architect.min, 1.5);
        assert_eq!(factors.lead_dev.max, 1.15);
        assert_eq!(factors.dev.optimal, 1.0);
    }

    #[test]
    fn test_default_resources() {
        let resources = DefaultResources::default();
        assert_eq!(*resources.get(Role::Architect), 3);
        assert_eq!(*resources.get(Role::LeadDev), 10);
        assert_eq!(*resources.get(Role::Dev), 20);
        assert!(validate_resources(&resources).is_ok());
        assert!(validate_resources(&RoleMap::new(3, 0, 20)).is_err());
    }
}
