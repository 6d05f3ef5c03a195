//! Staffing efficiency factors
//!
//! Maps a role's staffing ratio (current / default headcount) to a cost
//! multiplier:
//! - ratio < 1.0      → `min` (understaffed)
//! - ratio > 1.5      → `max` (coordination overhead)
//! - otherwise        → `optimal`
//!
//! The multiplier is NOT applied to the budget total. It is reported
//! alongside the estimate until product decides whether it should be.

use crate::model::{DefaultResources, EfficiencyFactor, EfficiencyFactors, Role, RoleMap};
use serde::{Deserialize, Serialize};

/// Ratio above which a role counts as overstaffed (exclusive)
pub const OVERSTAFFED_RATIO: f64 = 1.5;

/// Ratio below which a role counts as understaffed (exclusive)
pub const UNDERSTAFFED_RATIO: f64 = 1.0;

/// Staffing band for a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffingLevel {
    Understaffed,
    Optimal,
    Overstaffed,
}

impl StaffingLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < UNDERSTAFFED_RATIO {
            StaffingLevel::Understaffed
        } else if ratio > OVERSTAFFED_RATIO {
            StaffingLevel::Overstaffed
        } else {
            StaffingLevel::Optimal
        }
    }

    /// Pick the matching multiplier
    pub fn factor(&self, factors: &EfficiencyFactor) -> f64 {
        match self {
            StaffingLevel::Understaffed => factors.min,
            StaffingLevel::Optimal => factors.optimal,
            StaffingLevel::Overstaffed => factors.max,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StaffingLevel::Understaffed => "understaffed",
            StaffingLevel::Optimal => "optimal",
            StaffingLevel::Overstaffed => "overstaffed",
        }
    }
}

/// Efficiency multiplier for one role.
///
/// `default_count` must be non-zero; configuration validation guarantees
/// that for the configured baselines.
pub fn calculate_efficiency_factor(
    current_count: u32,
    default_count: u32,
    role: Role,
    factors: &EfficiencyFactors,
) -> f64 {
    let ratio = f64::from(current_count) / f64::from(default_count);
    StaffingLevel::from_ratio(ratio).factor(factors.get(role))
}

/// Staffing report line for one role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingAssessment {
    pub current: u32,
    pub baseline: u32,
    pub ratio: f64,
    pub level: StaffingLevel,
    pub factor: f64,
}

/// Assess every role against its baseline
pub fn assess_staffing(
    staffing: &RoleMap<u32>,
    baseline: &DefaultResources,
    factors: &EfficiencyFactors,
) -> RoleMap<StaffingAssessment> {
    RoleMap::from_fn(|role| {
        let current = *staffing.get(role);
        let base = *baseline.get(role);
        let ratio = f64::from(current) / f64::from(base);
        let level = StaffingLevel::from_ratio(ratio);
        StaffingAssessment {
            current,
            baseline: base,
            ratio,
            level,
            factor: level.factor(factors.get(role)),
        }
    })
}
