//! Budget estimation core
//!
//! Pipeline: tier effort-days → fixed role split → rate lookup → total.
//! Efficiency factors are computed separately and never change the total.

pub mod cost;
pub mod effort;
pub mod efficiency;
pub mod estimator;
pub mod split;

pub use cost::{role_costs, total_cost, RoleCost};
pub use effort::{effort_days, tier_multiplier, TierEfforts};
pub use efficiency::{
    assess_staffing, calculate_efficiency_factor, StaffingAssessment, StaffingLevel,
};
pub use estimator::{calculate_budget, BudgetEstimator, BudgetResult};
pub use split::{split_effort, split_weights};
