//! Wizard page state machine
//!
//! Linear three-page flow:
//! 1. Page1 → Page2 (on: Next)
//! 2. Page2 → Page3 (on: Next)
//! 3. Page2 → Page1 (on: Back)
//! 4. Page3 → Page2 (on: Back)
//!
//! Back from Page1 and Next from Page3 are invalid. There is no way to
//! jump to a page directly.

use crate::errors::{EstimatorError, Result};
use serde::{Deserialize, Serialize};

/// Number of wizard pages
pub const TOTAL_PAGES: u8 = 3;

/// Wizard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardPage {
    /// Project scope: partner and complexity counts
    Page1,

    /// Delivery model: deployment selector and acknowledgement
    Page2,

    /// Staffing sliders and the estimate
    Page3,
}

/// Navigation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Back,
}

impl WizardPage {
    pub const ALL: [WizardPage; 3] = [WizardPage::Page1, WizardPage::Page2, WizardPage::Page3];

    /// 1-based page number
    pub fn number(&self) -> u8 {
        match self {
            WizardPage::Page1 => 1,
            WizardPage::Page2 => 2,
            WizardPage::Page3 => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardPage::Page1 => "Project Scope",
            WizardPage::Page2 => "Delivery Model",
            WizardPage::Page3 => "Resources & Estimate",
        }
    }

    /// The estimate is shown on the last page
    pub fn is_final(&self) -> bool {
        matches!(self, WizardPage::Page3)
    }

    /// Attempt a transition
    pub fn transition(&self, event: WizardEvent) -> Result<WizardPage> {
        use WizardEvent::*;
        use WizardPage::*;

        let next = match (self, event) {
            (Page1, Next) => Page2,
            (Page2, Next) => Page3,
            (Page2, Back) => Page1,
            (Page3, Back) => Page2,
            (from, event) => {
                return Err(EstimatorError::InvalidTransition {
                    from: format!("page {}", from.number()),
                    to: format!("(via {:?})", event),
                    reason: match event {
                        Next => "already on the last page".to_string(),
                        Back => "already on the first page".to_string(),
                    },
                });
            }
        };

        Ok(next)
    }

    pub fn valid_events(&self) -> Vec<WizardEvent> {
        match self {
            WizardPage::Page1 => vec![WizardEvent::Next],
            WizardPage::Page2 => vec![WizardEvent::Next, WizardEvent::Back],
            WizardPage::Page3 => vec![WizardEvent::Back],
        }
    }

    /// Progress bar steps: steps up to and including this page are active
    pub fn active_steps(&self) -> [bool; TOTAL_PAGES as usize] {
        let current = self.number();
        [1, 2, 3].map(|step| step <= current)
    }

    /// Page indicator text, e.g. "2/3"
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.number(), TOTAL_PAGES)
    }
}

impl Default for WizardPage {
    fn default() -> Self {
        WizardPage::Page1
    }
}
