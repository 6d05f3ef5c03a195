//! Presentation helpers shared by the CLI and the interactive wizard

pub mod currency;
pub mod summary;

pub use currency::format_currency;
pub use summary::{deployment_heading, BudgetSummary, BUDGET_NOTE, SUMMARY_TITLE};
