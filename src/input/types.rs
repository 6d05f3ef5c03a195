//! Form input type definitions

use crate::model::{DefaultResources, DeploymentModel, RoleMap};
use serde::{Deserialize, Serialize};

/// Accepted ranges for numeric form fields (inclusive, lower bound 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Largest accepted partner count (default: 100000)
    pub max_partners: u32,

    /// Largest accepted item count per complexity tier (default: 100000)
    pub max_items: u32,

    /// Largest accepted headcount per role slider (default: 100)
    pub max_staff: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_partners: 100_000,
            max_items: 100_000,
            max_staff: 100,
        }
    }
}

/// Form values exactly as entered; an empty string means "not filled in"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForm {
    pub total_partners: String,
    pub low_complexity: String,
    pub medium_complexity: String,
    pub high_complexity: String,
    pub deployment: String,
    pub architect_count: String,
    pub lead_dev_count: String,
    pub dev_count: String,
}

impl RawForm {
    /// Empty form with the staffing sliders at their baseline positions
    pub fn with_staffing(resources: &DefaultResources) -> Self {
        Self {
            architect_count: resources.architect.to_string(),
            lead_dev_count: resources.lead_dev.to_string(),
            dev_count: resources.dev.to_string(),
            ..Default::default()
        }
    }
}

/// Validated calculation input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub total_partners: u32,
    pub low_complexity: u32,
    pub medium_complexity: u32,
    pub high_complexity: u32,
    pub deployment: DeploymentModel,

    /// Slider positions; they trigger recalculation but do not enter the
    /// cost formula
    pub staffing: RoleMap<u32>,
}

impl FormInput {
    pub fn new(
        total_partners: u32,
        low_complexity: u32,
        medium_complexity: u32,
        high_complexity: u32,
        deployment: DeploymentModel,
    ) -> Self {
        Self {
            total_partners,
            low_complexity,
            medium_complexity,
            high_complexity,
            deployment,
            staffing: DefaultResources::default(),
        }
    }

    /// Replace the staffing slider values
    pub fn with_staffing(mut self, staffing: RoleMap<u32>) -> Self {
        self.staffing = staffing;
        self
    }
}
