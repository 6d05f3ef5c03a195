//! Three-page estimate wizard
//!
//! Owns the page state, the form values and the latest estimate. Moving
//! forward requires every required field on the current page to be filled.
//! Reaching the last page recalculates the estimate, and so does any edit
//! made while it is shown.

pub mod form;
pub mod state;

use crate::errors::{EstimatorError, Result};
use crate::estimate::{BudgetEstimator, BudgetResult, StaffingAssessment};
use crate::input::{parse_count, FormInput, InputLimits};
use crate::model::RoleMap;
use std::collections::BTreeSet;
use tracing::{debug, info};

pub use form::{FieldId, FieldKind, FormState, DEPLOYMENT_OPTIONS};
pub use state::{WizardEvent, WizardPage, TOTAL_PAGES};

/// Notification shown when a page has empty required fields
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields.";

/// Wizard session state
#[derive(Debug)]
pub struct Wizard {
    page: WizardPage,
    form: FormState,
    limits: InputLimits,
    estimator: BudgetEstimator,
    field_errors: BTreeSet<FieldId>,
    outcome: Option<Result<BudgetResult>>,
}

impl Wizard {
    /// Create wizard with the built-in tables and limits
    pub fn new() -> Self {
        Self::with_estimator(BudgetEstimator::new(), InputLimits::default())
    }

    pub fn with_estimator(estimator: BudgetEstimator, limits: InputLimits) -> Self {
        let form = FormState::new(estimator.default_resources(), limits.max_staff);
        Self {
            page: WizardPage::Page1,
            form,
            limits,
            estimator,
            field_errors: BTreeSet::new(),
            outcome: None,
        }
    }

    pub fn current_page(&self) -> WizardPage {
        self.page
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn estimator(&self) -> &BudgetEstimator {
        &self.estimator
    }

    /// Fields flagged by the last page validation
    pub fn field_errors(&self) -> &BTreeSet<FieldId> {
        &self.field_errors
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.field_errors.contains(&field)
    }

    /// Latest successful estimate
    pub fn estimate(&self) -> Option<&BudgetResult> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    /// Why the latest calculation failed, if it did
    pub fn estimate_error(&self) -> Option<&EstimatorError> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().err())
    }

    /// Set a field value by name, returning the field that changed
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<FieldId> {
        let field: FieldId = name.parse()?;
        self.form.set(field, value)?;
        self.after_change(field);
        Ok(field)
    }

    /// Check or uncheck a checkbox by name
    pub fn set_checked(&mut self, name: &str, checked: bool) -> Result<FieldId> {
        let field: FieldId = name.parse()?;
        self.form.set_checked(field, checked)?;
        self.after_change(field);
        Ok(field)
    }

    /// Check the required fields of a page and refresh their error markers.
    /// Returns the fields that are missing.
    pub fn validate_page(&mut self, page: WizardPage) -> Vec<FieldId> {
        let mut missing = Vec::new();
        for field in FieldId::on_page(page).filter(|f| f.is_required()) {
            if self.form.is_filled(field) {
                self.field_errors.remove(&field);
            } else {
                self.field_errors.insert(field);
                missing.push(field);
            }
        }
        missing
    }

    /// Advance one page. Blocked, with no page change, while required
    /// fields on the current page are empty.
    pub fn next_page(&mut self) -> Result<WizardPage> {
        let missing = self.validate_page(self.page);
        if !missing.is_empty() {
            debug!(page = self.page.number(), ?missing, "page transition blocked");
            return Err(EstimatorError::MissingRequired {
                page: self.page.number(),
                fields: missing.iter().map(|f| f.name().to_string()).collect(),
            });
        }

        self.move_to(self.page.transition(WizardEvent::Next)?);
        if self.page.is_final() {
            self.recalculate();
        }
        Ok(self.page)
    }

    /// Go back one page. Never validates.
    pub fn previous_page(&mut self) -> Result<WizardPage> {
        self.move_to(self.page.transition(WizardEvent::Back)?);
        Ok(self.page)
    }

    /// Recompute the estimate from the current form values
    pub fn recalculate(&mut self) -> Option<&BudgetResult> {
        let outcome = FormInput::from_raw(self.form.raw(), &self.limits)
            .map(|input| self.estimator.calculate(&input));

        match &outcome {
            Ok(result) => info!(total = result.total_cost, "estimate updated"),
            Err(err) => info!(error = %err, "estimate rejected"),
        }

        self.outcome = Some(outcome);
        self.estimate()
    }

    /// Efficiency report for the current slider positions
    pub fn staffing_report(&self) -> Result<RoleMap<StaffingAssessment>> {
        let raw = self.form.raw();
        let max = self.limits.max_staff;
        let staffing = RoleMap::new(
            parse_count("architectCount", &raw.architect_count, max)?,
            parse_count("leadDevCount", &raw.lead_dev_count, max)?,
            parse_count("devCount", &raw.dev_count, max)?,
        );
        Ok(self.estimator.assess_staffing(&staffing))
    }

    fn move_to(&mut self, page: WizardPage) {
        debug!(from = self.page.number(), to = page.number(), "page transition");
        self.page = page;
    }

    fn after_change(&mut self, field: FieldId) {
        if self.form.is_filled(field) {
            self.field_errors.remove(&field);
        }
        if self.page.is_final() {
            debug!(field = field.name(), "input changed on the estimate page");
            self.recalculate();
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
