//! Parsing and range checks for raw form values

use crate::errors::{EstimatorError, Result};
use crate::input::types::{FormInput, InputLimits, RawForm};
use crate::model::{DeploymentModel, RoleMap};
use tracing::debug;

/// Parse a whole number and check it against `0..=max`.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// integer ("12abc", "1.5", "") is rejected rather than truncated.
pub fn parse_count(field: &str, value: &str, max: u32) -> Result<u32> {
    let trimmed = value.trim();
    let parsed: i64 = trimmed.parse().map_err(|_| EstimatorError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })?;

    if parsed < 0 || parsed > i64::from(max) {
        return Err(EstimatorError::OutOfRange {
            field: field.to_string(),
            value: parsed,
            min: 0,
            max,
        });
    }

    Ok(parsed as u32)
}

impl FormInput {
    /// Build a validated input from raw form strings
    pub fn from_raw(raw: &RawForm, limits: &InputLimits) -> Result<Self> {
        let input = FormInput {
            total_partners: parse_count("totalPartners", &raw.total_partners, limits.max_partners)?,
            low_complexity: parse_count("lowComplexity", &raw.low_complexity, limits.max_items)?,
            medium_complexity: parse_count(
                "mediumComplexity",
                &raw.medium_complexity,
                limits.max_items,
            )?,
            high_complexity: parse_count("highComplexity", &raw.high_complexity, limits.max_items)?,
            deployment: raw.deployment.trim().parse::<DeploymentModel>()?,
            staffing: RoleMap::new(
                parse_count("architectCount", &raw.architect_count, limits.max_staff)?,
                parse_count("leadDevCount", &raw.lead_dev_count, limits.max_staff)?,
                parse_count("devCount", &raw.dev_count, limits.max_staff)?,
            ),
        };

        debug!(?input, "form input validated");
        Ok(input)
    }

    /// Range-check an input that was built from typed values
    pub fn validate(&self, limits: &InputLimits) -> Result<()> {
        let checks = [
            ("totalPartners", self.total_partners, limits.max_partners),
            ("lowComplexity", self.low_complexity, limits.max_items),
            ("mediumComplexity", self.medium_complexity, limits.max_items),
            ("highComplexity", self.high_complexity, limits.max_items),
        ];

        for (field, value, max) in checks {
            check_max(field, value, max)?;
        }
        validate_staffing(&self.staffing, limits)
    }
}

/// Range-check the three staffing slider values
pub fn validate_staffing(staffing: &RoleMap<u32>, limits: &InputLimits) -> Result<()> {
    check_max("architectCount", staffing.architect, limits.max_staff)?;
    check_max("leadDevCount", staffing.lead_dev, limits.max_staff)?;
    check_max("devCount", staffing.dev, limits.max_staff)
}

fn check_max(field: &str, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(EstimatorError::OutOfRange {
            field: field.to_string(),
            value: i64::from(value),
            min: 0,
            max,
        });
    }
    Ok(())
}
