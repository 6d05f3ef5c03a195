//! BudgetBuddy - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budgetbuddy::cli::{Args, Commands, Config, EstimateArgs, StaffingArgs, Verbosity};
use budgetbuddy::format::BudgetSummary;
use budgetbuddy::input::{validate_staffing, FormInput};
use budgetbuddy::repl::display::{render_rates, render_staffing, render_summary};
use budgetbuddy::repl::ReplSession;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log to stderr; RUST_LOG wins over the -q/-v flags
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity());

    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }
    debug!(?args, "starting");

    match &args.command {
        None | Some(Commands::Start) => run_wizard(&config)?,
        Some(Commands::Estimate(estimate)) => run_estimate(&config, estimate)?,
        Some(Commands::Staffing(staffing)) => run_staffing(&config, staffing)?,
        Some(Commands::Rates) => println!("{}", render_rates(&config.rates)),
        Some(Commands::Config) => show_config(&args, &config)?,
    }

    Ok(())
}

fn run_wizard(config: &Config) -> Result<()> {
    let mut session = ReplSession::from_config(config).context("Failed to start the wizard")?;
    session.run(VERSION)
}

fn run_estimate(config: &Config, args: &EstimateArgs) -> Result<()> {
    let estimator = config.estimator();
    let input = FormInput::new(args.partners, args.low, args.medium, args.high, args.deployment)
        .with_staffing(args.staffing.resolve(estimator.default_resources()));
    input.validate(&config.limits)?;

    let result = estimator.calculate(&input);

    if args.json {
        let output = serde_json::json!({
            "summary": BudgetSummary::from_result(&result),
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let breakdown = args.breakdown || config.display.show_breakdown;
        println!("{}", render_summary(&result, breakdown));
    }

    Ok(())
}

fn run_staffing(config: &Config, args: &StaffingArgs) -> Result<()> {
    let estimator = config.estimator();
    let staffing = args.resolve(estimator.default_resources());
    validate_staffing(&staffing, &config.limits)?;

    println!("{}", render_staffing(&estimator.assess_staffing(&staffing)));
    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    println!("{}", "BudgetBuddy Configuration".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    match args.config.clone().or_else(Config::default_path) {
        Some(path) if path.exists() => println!("# Source: {}", path.display()),
        _ => println!("# Source: built-in defaults"),
    }
    println!("# Verbosity: {:?}\n", args.verbosity());
    println!("{}", config.to_toml()?);

    Ok(())
}
