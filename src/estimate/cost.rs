//! Cost aggregation: role effort-days × deployment rate

use crate::model::{DeploymentModel, RateCard, Role, RoleMap};
use serde::{Deserialize, Serialize};

/// Cost line for one role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleCost {
    pub effort_days: f64,
    pub rate: f64,
    pub cost: f64,
}

impl RoleCost {
    pub fn new(effort_days: f64, rate: f64) -> Self {
        Self {
            effort_days,
            rate,
            cost: effort_days * rate,
        }
    }
}

/// Price every role's effort with the rate row of `deployment`
pub fn role_costs(
    role_efforts: &RoleMap<f64>,
    rate_card: &RateCard,
    deployment: DeploymentModel,
) -> RoleMap<RoleCost> {
    RoleMap::from_fn(|role: Role| {
        RoleCost::new(*role_efforts.get(role), rate_card.rate(deployment, role))
    })
}

/// Sum of the role costs
pub fn total_cost(costs: &RoleMap<RoleCost>) -> f64 {
    costs.iter().map(|(_, line)| line.cost).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_worked_example_costs() {
        let efforts = RoleMap::new(8.775, 19.15, 26.325);
        let costs = role_costs(&efforts, &RateCard::default(), DeploymentModel::Onshore);

        assert!((costs.architect.cost - 1228.50).abs() < EPS);
        assert!((costs.lead_dev.cost - 2010.75).abs() < EPS);
        assert!((costs.dev.cost - 2000.70).abs() < EPS);
        assert!((total_cost(&costs) - 5239.95).abs() < EPS);
    }

    #[test]
    fn test_deployment_changes_rates_only() {
        let efforts = RoleMap::new(1.0, 2.0, 3.0);
        let card = RateCard::default();
        let offshore = role_costs(&efforts, &card, DeploymentModel::Offshore);

        assert_eq!(offshore.architect.effort_days, 1.0);
        assert_eq!(offshore.architect.rate, 75.0);
        assert!((total_cost(&offshore) - (75.0 + 120.0 + 90.0)).abs() < EPS);
    }
}
