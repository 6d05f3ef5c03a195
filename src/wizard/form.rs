//! Wizard form fields and their values

use crate::errors::{EstimatorError, Result};
use crate::input::{parse_count, RawForm};
use crate::model::DefaultResources;
use crate::wizard::state::WizardPage;
use std::fmt;
use std::str::FromStr;

/// Deployment selector options, in display order
pub const DEPLOYMENT_OPTIONS: [&str; 3] = ["onshore", "hybrid", "offshore"];

/// Form fields across all pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    TotalPartners,
    LowComplexity,
    MediumComplexity,
    HighComplexity,
    Deployment,
    Acknowledge,
    ArchitectCount,
    LeadDevCount,
    DevCount,
}

/// Input control type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select(&'static [&'static str]),
    Checkbox,
    Slider,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::TotalPartners,
        FieldId::LowComplexity,
        FieldId::MediumComplexity,
        FieldId::HighComplexity,
        FieldId::Deployment,
        FieldId::Acknowledge,
        FieldId::ArchitectCount,
        FieldId::LeadDevCount,
        FieldId::DevCount,
    ];

    /// Form field name
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::TotalPartners => "totalPartners",
            FieldId::LowComplexity => "lowComplexity",
            FieldId::MediumComplexity => "mediumComplexity",
            FieldId::HighComplexity => "highComplexity",
            FieldId::Deployment => "deployment",
            FieldId::Acknowledge => "acknowledge",
            FieldId::ArchitectCount => "architectCount",
            FieldId::LeadDevCount => "leadDevCount",
            FieldId::DevCount => "devCount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::TotalPartners => "Total partners",
            FieldId::LowComplexity => "Low complexity items",
            FieldId::MediumComplexity => "Medium complexity items",
            FieldId::HighComplexity => "High complexity items",
            FieldId::Deployment => "Deployment model",
            FieldId::Acknowledge => "I understand this is an estimate, not a quote",
            FieldId::ArchitectCount => "Architects",
            FieldId::LeadDevCount => "Lead developers",
            FieldId::DevCount => "Developers",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::Deployment => FieldKind::Select(&DEPLOYMENT_OPTIONS),
            FieldId::Acknowledge => FieldKind::Checkbox,
            FieldId::ArchitectCount | FieldId::LeadDevCount | FieldId::DevCount => {
                FieldKind::Slider
            }
            _ => FieldKind::Text,
        }
    }

    pub fn page(&self) -> WizardPage {
        match self {
            FieldId::TotalPartners
            | FieldId::LowComplexity
            | FieldId::MediumComplexity
            | FieldId::HighComplexity => WizardPage::Page1,
            FieldId::Deployment | FieldId::Acknowledge => WizardPage::Page2,
            FieldId::ArchitectCount | FieldId::LeadDevCount | FieldId::DevCount => {
                WizardPage::Page3
            }
        }
    }

    /// Sliders always hold a value and are not gated
    pub fn is_required(&self) -> bool {
        !matches!(self.kind(), FieldKind::Slider)
    }

    /// Fields shown on a page, in display order
    pub fn on_page(page: WizardPage) -> impl Iterator<Item = FieldId> {
        FieldId::ALL.into_iter().filter(move |field| field.page() == page)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| EstimatorError::UnknownField(s.to_string()))
    }
}

/// Current value of every field
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    raw: RawForm,
    acknowledged: bool,
    max_staff: u32,
}

impl FormState {
    /// Empty form with sliders at the baseline headcounts
    pub fn new(resources: &DefaultResources, max_staff: u32) -> Self {
        Self {
            raw: RawForm::with_staffing(resources),
            acknowledged: false,
            max_staff,
        }
    }

    /// Raw values as typed, for the calculation step
    pub fn raw(&self) -> &RawForm {
        &self.raw
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Set a text, select or slider value.
    ///
    /// Text fields keep whatever was typed; numbers are checked only when
    /// the estimate is calculated. Select and slider fields can only hold
    /// values their control offers.
    pub fn set(&mut self, field: FieldId, value: &str) -> Result<()> {
        let value = value.trim();
        match field.kind() {
            FieldKind::Checkbox => {
                let checked = match value.to_lowercase().as_str() {
                    "on" | "yes" | "true" | "1" | "checked" => true,
                    "off" | "no" | "false" | "0" | "" => false,
                    _ => {
                        return Err(EstimatorError::InputError(format!(
                            "{} expects on/off, got '{}'",
                            field, value
                        )))
                    }
                };
                self.acknowledged = checked;
                return Ok(());
            }
            FieldKind::Select(options) => {
                if !value.is_empty() && !options.iter().any(|option| *option == value) {
                    return Err(EstimatorError::UnknownDeployment(value.to_string()));
                }
            }
            FieldKind::Slider => {
                parse_count(field.name(), value, self.max_staff)?;
            }
            FieldKind::Text => {}
        }

        if let Some(slot) = self.slot_mut(field) {
            *slot = value.to_string();
        }
        Ok(())
    }

    pub fn set_checked(&mut self, field: FieldId, checked: bool) -> Result<()> {
        if field.kind() != FieldKind::Checkbox {
            return Err(EstimatorError::UnknownField(format!("{} is not a checkbox", field)));
        }
        self.acknowledged = checked;
        Ok(())
    }

    /// Display value of a field ("" when empty)
    pub fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::Acknowledge => {
                let state = if self.acknowledged { "checked" } else { "unchecked" };
                state.to_string()
            }
            _ => self.slot(field).to_string(),
        }
    }

    /// Required-field rule: non-empty text/select, checked checkbox
    pub fn is_filled(&self, field: FieldId) -> bool {
        match field.kind() {
            FieldKind::Checkbox => self.acknowledged,
            _ => !self.slot(field).is_empty(),
        }
    }

    fn slot(&self, field: FieldId) -> &str {
        match field {
            FieldId::TotalPartners => &self.raw.total_partners,
            FieldId::LowComplexity => &self.raw.low_complexity,
            FieldId::MediumComplexity => &self.raw.medium_complexity,
            FieldId::HighComplexity => &self.raw.high_complexity,
            FieldId::Deployment => &self.raw.deployment,
            FieldId::ArchitectCount => &self.raw.architect_count,
            FieldId::LeadDevCount => &self.raw.lead_dev_count,
            FieldId::DevCount => &self.raw.dev_count,
            FieldId::Acknowledge => "",
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::TotalPartners => Some(&mut self.raw.total_partners),
            FieldId::LowComplexity => Some(&mut self.raw.low_complexity),
            FieldId::MediumComplexity => Some(&mut self.raw.medium_complexity),
            FieldId::HighComplexity => Some(&mut self.raw.high_complexity),
            FieldId::Deployment => Some(&mut self.raw.deployment),
            FieldId::ArchitectCount => Some(&mut self.raw.architect_count),
            FieldId::LeadDevCount => Some(&mut self.raw.lead_dev_count),
            FieldId::DevCount => Some(&mut self.raw.dev_count),
            FieldId::Acknowledge => None,
        }
    }
}
