//! BudgetBuddy - Project Budget Estimator
//!
//! Estimates a project budget from its scope (partners and complexity
//! counts), delivery model and staffing.
//!
//! # Architecture
//!
//! - **model**: deployment models, roles, rate card and baseline tables
//! - **estimate**: effort-days, role split, costing and staffing efficiency
//! - **input**: raw form values hardened into typed input
//! - **format**: currency text and the summary block
//! - **wizard**: three-page form state machine
//! - **repl** / **cli**: terminal front ends and configuration

pub mod errors;
pub mod model;
pub mod estimate;
pub mod input;
pub mod format;
pub mod wizard;

// Re-export commonly used types
pub use errors::{EstimatorError, Result};
pub use estimate::{calculate_budget, BudgetEstimator, BudgetResult};
pub use input::FormInput;
pub use model::DeploymentModel;

// Terminal interface
pub mod cli;
pub mod repl;
