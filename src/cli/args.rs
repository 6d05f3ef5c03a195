//! Command-line argument parsing for BudgetBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::{DeploymentModel, RoleMap};

/// BudgetBuddy - Estimate project budgets from scope, delivery model and staffing
#[derive(Parser, Debug)]
#[command(name = "budgetbuddy")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Estimate a project budget from scope, delivery model and staffing", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Subcommand (interactive wizard when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive estimate wizard
    Start,

    /// Calculate an estimate in one shot
    Estimate(EstimateArgs),

    /// Compare staffing levels against the baseline headcounts
    Staffing(StaffingArgs),

    /// Print the active rate card
    Rates,

    /// Display current configuration
    Config,
}

/// Staffing slider values
#[derive(ClapArgs, Debug, Clone)]
pub struct StaffingArgs {
    /// Number of architects (baseline when omitted)
    #[arg(long)]
    pub architects: Option<u32>,

    /// Number of lead developers (baseline when omitted)
    #[arg(long)]
    pub lead_devs: Option<u32>,

    /// Number of developers (baseline when omitted)
    #[arg(long)]
    pub devs: Option<u32>,
}

impl StaffingArgs {
    /// Fill unset counts from the baseline
    pub fn resolve(&self, baseline: &RoleMap<u32>) -> RoleMap<u32> {
        RoleMap::new(
            self.architects.unwrap_or(baseline.architect),
            self.lead_devs.unwrap_or(baseline.lead_dev),
            self.devs.unwrap_or(baseline.dev),
        )
    }
}

/// One-shot estimate inputs
#[derive(ClapArgs, Debug, Clone)]
pub struct EstimateArgs {
    /// Total number of partners
    #[arg(long)]
    pub partners: u32,

    /// Number of low complexity items
    #[arg(long)]
    pub low: u32,

    /// Number of medium complexity items
    #[arg(long)]
    pub medium: u32,

    /// Number of high complexity items
    #[arg(long)]
    pub high: u32,

    /// Deployment model: onshore, hybrid or offshore
    #[arg(long, value_parser = parse_deployment)]
    pub deployment: DeploymentModel,

    #[command(flatten)]
    pub staffing: StaffingArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Include the per-role breakdown
    #[arg(long)]
    pub breakdown: bool,
}

fn parse_deployment(value: &str) -> Result<DeploymentModel, String> {
    value.parse::<DeploymentModel>().map_err(|e| e.to_string())
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Verbosity {
    /// Default log filter for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}
