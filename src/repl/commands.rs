//! Command handler for wizard commands
//!
//! Parses `/set`, `/next`, `field=value` and friends and applies them to
//! the wizard.

use anyhow::Result;
use colored::*;
use tracing::debug;

use crate::errors::EstimatorError;
use crate::repl::display::DisplayManager;
use crate::wizard::{FieldId, Wizard};

/// Wizard command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: String, value: String },
    Check { field: String },
    Uncheck { field: String },
    Next,
    Back,
    Show,
    Estimate,
    Staffing,
    Breakdown { enable: bool },
    Rates,
    Help,
    Exit,
    Unknown { input: String },
}

/// Command handler for parsing and executing wizard commands
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return match trimmed.split_once('=') {
                Some((field, value)) if !field.trim().is_empty() => Command::Set {
                    field: field.trim().to_string(),
                    value: value.trim().to_string(),
                },
                _ => Command::Unknown { input: input.to_string() },
            };
        }

        let mut parts = trimmed[1..].splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let rest = parts.next().unwrap_or_default().trim();

        match name.as_str() {
            "set" => match rest.split_once(char::is_whitespace) {
                Some((field, value)) => Command::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                },
                None if !rest.is_empty() => Command::Set {
                    field: rest.to_string(),
                    value: String::new(),
                },
                None => Command::Unknown { input: input.to_string() },
            },
            "check" if !rest.is_empty() => Command::Check { field: rest.to_string() },
            "uncheck" if !rest.is_empty() => Command::Uncheck { field: rest.to_string() },
            "next" | "n" => Command::Next,
            "back" | "b" => Command::Back,
            "show" | "page" => Command::Show,
            "estimate" => Command::Estimate,
            "staffing" => Command::Staffing,
            "breakdown" => {
                let enable = !matches!(rest.to_lowercase().as_str(), "off" | "0" | "false");
                Command::Breakdown { enable }
            }
            "rates" => Command::Rates,
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the wizard should continue, false if it should exit.
    /// Input mistakes are reported on screen and never end the session.
    pub fn execute(
        &mut self,
        command: Command,
        wizard: &mut Wizard,
        display: &mut DisplayManager,
    ) -> Result<bool> {
        debug!(?command, page = wizard.current_page().number(), "executing command");

        match self.apply(command, wizard, display) {
            Ok(keep_going) => Ok(keep_going),
            Err(EstimatorError::MissingRequired { fields, .. }) => {
                display.show_page(wizard);
                display.show_required_notice(&fields);
                Ok(true)
            }
            Err(err) if err.is_user_input() => {
                display.show_error(&err.to_string());
                Ok(true)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn apply(
        &mut self,
        command: Command,
        wizard: &mut Wizard,
        display: &mut DisplayManager,
    ) -> crate::errors::Result<bool> {
        match command {
            Command::Set { field, value } => {
                let id = wizard.set_field(&field, &value)?;
                display.show_success(&format!("{} = {}", id, wizard.form().value(id)));
                if wizard.current_page().is_final() {
                    display.show_estimate(wizard);
                }
            }
            Command::Check { field } => {
                let id = wizard.set_checked(&field, true)?;
                display.show_success(&checkbox_message(id, true));
            }
            Command::Uncheck { field } => {
                let id = wizard.set_checked(&field, false)?;
                display.show_success(&checkbox_message(id, false));
            }
            Command::Next => {
                wizard.next_page()?;
                display.show_page(wizard);
            }
            Command::Back => {
                wizard.previous_page()?;
                display.show_page(wizard);
            }
            Command::Show => display.show_page(wizard),
            Command::Estimate => {
                if wizard.current_page().is_final() {
                    wizard.recalculate();
                    display.show_estimate(wizard);
                } else {
                    display.show_info("The estimate is shown on the last page. Use /next to get there.");
                }
            }
            Command::Staffing => display.show_staffing(&wizard.staffing_report()?),
            Command::Breakdown { enable } => {
                display.set_show_breakdown(enable);
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Cost breakdown {}", status).cyan());
            }
            Command::Rates => display.show_rates(wizard.estimator().rate_card()),
            Command::Help => self.show_help(),
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                return Ok(false);
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
        }
        Ok(true)
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/set <field> <value>", "Set a field (or type field=value)"),
            ("/check <field>", "Tick a checkbox"),
            ("/uncheck <field>", "Clear a checkbox"),
            ("/next, /n", "Go to the next page"),
            ("/back, /b", "Go to the previous page"),
            ("/show", "Show the current page"),
            ("/estimate", "Recalculate and show the estimate"),
            ("/staffing", "Compare sliders with baseline staffing"),
            ("/breakdown [on|off]", "Toggle the per-role cost breakdown"),
            ("/rates", "Show the rate card"),
            ("/help, /h", "Show this help message"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<22} {}", cmd.green(), desc);
        }

        println!("\n{}", "Fields:".bold());
        for field in FieldId::ALL {
            println!(
                "  {:<22} {} (page {})",
                field.name().cyan(),
                field.label(),
                field.page().number()
            );
        }
        println!();
    }
}

fn checkbox_message(field: FieldId, checked: bool) -> String {
    format!("{} {}", field, if checked { "checked" } else { "unchecked" })
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
