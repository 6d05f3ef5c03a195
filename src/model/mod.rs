//! Domain model: deployment models, roles, complexity tiers and the
//! static tables the estimator reads from

pub mod tables;
pub mod types;

pub use tables::{
    validate_resources, DefaultResources, EfficiencyFactor, EfficiencyFactors,
    EffortDistribution, RateCard,
};
pub use types::{ComplexityTier, DeploymentModel, Role, RoleMap};
