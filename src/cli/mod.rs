//! CLI module for BudgetBuddy
//!
//! Handles command-line argument parsing and configuration management.

pub mod args;
pub mod config;

pub use args::{Args, Commands, EstimateArgs, StaffingArgs, Verbosity};
pub use config::Config;
