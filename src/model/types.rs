//! Domain enums shared by the estimator, the wizard and the CLI

use crate::errors::{EstimatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staffing/location strategy that selects the rate card row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentModel {
    Onshore,
    Hybrid,
    Offshore,
}

impl DeploymentModel {
    pub const ALL: [DeploymentModel; 3] = [
        DeploymentModel::Onshore,
        DeploymentModel::Hybrid,
        DeploymentModel::Offshore,
    ];

    /// Selector value as submitted by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentModel::Onshore => "onshore",
            DeploymentModel::Hybrid => "hybrid",
            DeploymentModel::Offshore => "offshore",
        }
    }

    /// Selector value with the first letter capitalized
    pub fn label(&self) -> String {
        let value = self.as_str();
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for DeploymentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentModel {
    type Err = EstimatorError;

    /// Exact, case-sensitive match on the selector values
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "onshore" => Ok(DeploymentModel::Onshore),
            "hybrid" => Ok(DeploymentModel::Hybrid),
            "offshore" => Ok(DeploymentModel::Offshore),
            other => Err(EstimatorError::UnknownDeployment(other.to_string())),
        }
    }
}

/// Project role that effort is allocated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Architect,
    LeadDev,
    Dev,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Architect, Role::LeadDev, Role::Dev];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Architect => "architect",
            Role::LeadDev => "leadDev",
            Role::Dev => "dev",
        }
    }

    /// Human-readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Architect => "Architect",
            Role::LeadDev => "Lead Developer",
            Role::Dev => "Developer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of work items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 3] = [
        ComplexityTier::Low,
        ComplexityTier::Medium,
        ComplexityTier::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Medium => "medium",
            ComplexityTier::High => "high",
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMap<T> {
    pub architect: T,
    pub lead_dev: T,
    pub dev: T,
}

impl<T> RoleMap<T> {
    pub fn new(architect: T, lead_dev: T, dev: T) -> Self {
        Self {
            architect,
            lead_dev,
            dev,
        }
    }

    /// Build a map by evaluating `f` for every role
    pub fn from_fn(mut f: impl FnMut(Role) -> T) -> Self {
        Self {
            architect: f(Role::Architect),
            lead_dev: f(Role::LeadDev),
            dev: f(Role::Dev),
        }
    }

    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Architect => &self.architect,
            Role::LeadDev => &self.lead_dev,
            Role::Dev => &self.dev,
        }
    }

    /// Iterate in `Role::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl RoleMap<f64> {
    pub fn sum(&self) -> f64 {
        self.architect + self.lead_dev + self.dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_parse() {
        assert_eq!("onshore".parse::<DeploymentModel>().unwrap(), DeploymentModel::Onshore);
        assert_eq!("hybrid".parse::<DeploymentModel>().unwrap(), DeploymentModel::Hybrid);
        assert_eq!("offshore".parse::<DeploymentModel>().unwrap(), DeploymentModel::Offshore);
    }

    #[test]
    fn test_deployment_parse_rejects_unknown() {
        let err = "nearshore".parse::<DeploymentModel>().unwrap_err();
        assert!(matches!(err, EstimatorError::UnknownDeployment(ref v) if v == "nearshore"));

        // Selector values are case-sensitive
        assert!("Onshore".parse::<DeploymentModel>().is_err());
        assert!("".parse::<DeploymentModel>().is_err());
    }

    #[test]
    fn test_deployment_label() {
        assert_eq!(DeploymentModel::Onshore.label(), "Onshore");
        assert_eq!(DeploymentModel::Hybrid.label(), "Hybrid");
        assert_eq!(DeploymentModel::Offshore.label(), "Offshore");
    }

    #[test]
    fn test_role_map_order() {
        let map = RoleMap::new(1, 2, 3);
        let roles: Vec<Role> = map.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
        assert_eq!(*map.get(Role::LeadDev), 2);
    }

    #[test]
    fn test_role_map_serde_names() {
        let map = RoleMap::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"architect":1.0,"leadDev":2.0,"dev":3.0}"#);
    }
}
