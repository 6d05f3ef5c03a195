//! Budget estimator: ties the calculation steps to the static tables

use crate::estimate::cost::{role_costs, total_cost, RoleCost};
use crate::estimate::effort::TierEfforts;
use crate::estimate::efficiency::{assess_staffing, StaffingAssessment};
use crate::estimate::split::split_effort;
use crate::format::format_currency;
use crate::input::FormInput;
use crate::model::{
    DefaultResources, DeploymentModel, EfficiencyFactors, EffortDistribution, RateCard, RoleMap,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of one calculation. Recomputed on every change, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub deployment: DeploymentModel,
    pub tier_efforts: TierEfforts,
    pub roles: RoleMap<RoleCost>,
    pub total_cost: f64,
}

impl BudgetResult {
    /// Total formatted as US dollars
    pub fn formatted_total(&self) -> String {
        format_currency(self.total_cost)
    }

    /// Sum of effort-days across roles
    pub fn total_effort_days(&self) -> f64 {
        self.roles.iter().map(|(_, line)| line.effort_days).sum()
    }
}

/// Pure budget calculation for a validated input
pub fn calculate_budget(input: &FormInput, rate_card: &RateCard) -> BudgetResult {
    let tier_efforts = TierEfforts::estimate(
        input.low_complexity,
        input.medium_complexity,
        input.high_complexity,
        input.total_partners,
    );
    let role_efforts = split_effort(&tier_efforts);
    let roles = role_costs(&role_efforts, rate_card, input.deployment);
    let total_cost = total_cost(&roles);

    debug!(
        deployment = %input.deployment,
        effort_days = tier_efforts.total(),
        total_cost,
        "budget calculated"
    );

    BudgetResult {
        deployment: input.deployment,
        tier_efforts,
        roles,
        total_cost,
    }
}

/// Estimator bound to one set of tables
#[derive(Debug, Clone, Default)]
pub struct BudgetEstimator {
    rate_card: RateCard,
    effort_distribution: EffortDistribution,
    efficiency_factors: EfficiencyFactors,
    default_resources: DefaultResources,
}

impl BudgetEstimator {
    /// Create estimator with the built-in tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create estimator with custom tables
    pub fn with_tables(
        rate_card: RateCard,
        effort_distribution: EffortDistribution,
        efficiency_factors: EfficiencyFactors,
        default_resources: DefaultResources,
    ) -> Self {
        Self {
            rate_card,
            effort_distribution,
            efficiency_factors,
            default_resources,
        }
    }

    pub fn calculate(&self, input: &FormInput) -> BudgetResult {
        calculate_budget(input, &self.rate_card)
    }

    /// Efficiency report for the input's staffing sliders (informational)
    pub fn assess_staffing(&self, staffing: &RoleMap<u32>) -> RoleMap<StaffingAssessment> {
        assess_staffing(staffing, &self.default_resources, &self.efficiency_factors)
    }

    pub fn rate_card(&self) -> &RateCard {
        &self.rate_card
    }

    pub fn effort_distribution(&self) -> &EffortDistribution {
        &self.effort_distribution
    }

    pub fn efficiency_factors(&self) -> &EfficiencyFactors {
        &self.efficiency_factors
    }

    pub fn default_resources(&self) -> &DefaultResources {
        &self.default_resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use quickcheck_macros::quickcheck;

    const EPS: f64 = 1e-6;

    fn worked_example() -> FormInput {
        FormInput::new(30, 10, 5, 2, DeploymentModel::Onshore)
    }

    #[test]
    fn test_worked_example() {
        let result = BudgetEstimator::new().calculate(&worked_example());

        assert!((result.roles.architect.effort_days - 8.775).abs() < EPS);
        assert!((result.roles.architect.cost - 1228.50).abs() < EPS);
        assert!((result.roles.lead_dev.effort_days - 19.15).abs() < EPS);
        assert!((result.roles.lead_dev.cost - 2010.75).abs() < EPS);
        assert!((result.roles.dev.effort_days - 26.325).abs() < EPS);
        assert!((result.roles.dev.cost - 2000.70).abs() < EPS);
        assert!((result.total_cost - 5239.95).abs() < EPS);
        assert_eq!(result.formatted_total(), "$5,239.95");
    }

    #[test]
    fn test_sliders_do_not_change_total() {
        let estimator = BudgetEstimator::new();
        let base = estimator.calculate(&worked_example());
        let restaffed = estimator.calculate(&worked_example().with_staffing(RoleMap::new(1, 40, 90)));
        assert_eq!(base.total_cost, restaffed.total_cost);
    }

    #[test]
    fn test_deployment_changes_only_rates() {
        let estimator = BudgetEstimator::new();
        let onshore = estimator.calculate(&worked_example());

        for deployment in DeploymentModel::ALL {
            let mut input = worked_example();
            input.deployment = deployment;
            let result = estimator.calculate(&input);

            assert_eq!(result.tier_efforts, onshore.tier_efforts);
            for role in Role::ALL {
                assert_eq!(result.roles.get(role).effort_days, onshore.roles.get(role).effort_days);
                assert_eq!(
                    result.roles.get(role).rate,
                    estimator.rate_card().rate(deployment, role)
                );
            }
        }
    }

    #[test]
    fn test_allocated_effort_days() {
        // 14 + 22.5 × 0.90 + 20: the medium split leaves 10% unallocated
        let result = BudgetEstimator::new().calculate(&worked_example());
        assert!((result.tier_efforts.total() - 56.5).abs() < EPS);
        assert!((result.total_effort_days() - 54.25).abs() < EPS);
    }

    #[test]
    fn test_result_serializes() {
        let result = BudgetEstimator::new().calculate(&worked_example());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["deployment"], "onshore");
        assert!(json["roles"]["leadDev"]["cost"].is_number());
    }

    fn total_with(partners: u32, low: u32, medium: u32, high: u32) -> f64 {
        let input = FormInput::new(partners, low, medium, high, DeploymentModel::Hybrid);
        calculate_budget(&input, &RateCard::default()).total_cost
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
    }

    // total(x + 2) - total(x + 1) == total(x + 1) - total(x) for every count
    #[quickcheck]
    fn prop_total_is_linear(partners: u16, low: u16, medium: u16, high: u16) -> bool {
        let (p, l, m, h) = (partners as u32, low as u32, medium as u32, high as u32);
        let step = |f: &dyn Fn(u32) -> f64, x: u32| {
            close(f(x + 2) - f(x + 1), f(x + 1) - f(x))
        };

        step(&|x| total_with(x, l, m, h), p)
            && step(&|x| total_with(p, x, m, h), l)
            && step(&|x| total_with(p, l, x, h), m)
            && step(&|x| total_with(p, l, m, x), h)
    }

    #[quickcheck]
    fn prop_total_non_negative(partners: u16, low: u16, medium: u16, high: u16) -> bool {
        total_with(partners.into(), low.into(), medium.into(), high.into()) >= 0.0
    }
}
