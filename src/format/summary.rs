//! Budget summary block

use crate::estimate::BudgetResult;
use crate::format::currency::format_currency;
use crate::model::DeploymentModel;
use serde::Serialize;

pub const SUMMARY_TITLE: &str = "Estimated Project Budget";

pub const BUDGET_NOTE: &str =
    "This estimate is based on your specific requirements and includes all development resources.";

/// "Onshore Deployment Model"
pub fn deployment_heading(deployment: DeploymentModel) -> String {
    format!("{} Deployment Model", deployment.label())
}

/// Display-ready text for a calculation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub title: &'static str,
    pub total: String,
    pub deployment: String,
    pub note: &'static str,
}

impl BudgetSummary {
    pub fn from_result(result: &BudgetResult) -> Self {
        Self {
            title: SUMMARY_TITLE,
            total: format_currency(result.total_cost),
            deployment: deployment_heading(result.deployment),
            note: BUDGET_NOTE,
        }
    }
}
