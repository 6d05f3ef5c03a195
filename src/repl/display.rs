//! Display manager for the wizard terminal UI
//!
//! Renders pages, the estimate summary and the staffing report. Rendering
//! builds strings so the layout can be tested without a terminal.

use colored::*;

use crate::estimate::{BudgetResult, StaffingAssessment, StaffingLevel};
use crate::format::{format_currency, BudgetSummary};
use crate::model::{DeploymentModel, RateCard, Role, RoleMap};
use crate::wizard::{FieldId, FieldKind, Wizard, WizardPage, REQUIRED_FIELDS_NOTICE};

const WIDTH: usize = 64;

/// Display manager for the wizard UI
pub struct DisplayManager {
    show_breakdown: bool,
}

impl DisplayManager {
    pub fn new(show_breakdown: bool) -> Self {
        DisplayManager { show_breakdown }
    }

    pub fn set_show_breakdown(&mut self, enable: bool) {
        self.show_breakdown = enable;
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        println!("\n{}", "=".repeat(WIDTH).cyan());
        println!("{}", format!("  BudgetBuddy {} - Project Budget Estimator", version).bold().cyan());
        println!("{}", "  Three steps: scope, delivery model, resources".dimmed());
        println!("{}\n", "=".repeat(WIDTH).cyan());
        println!(
            "Fill in each page with {} (or {}), then {} ({} for commands, {} to quit)\n",
            "/set <field> <value>".green(),
            "field=value".green(),
            "/next".green(),
            "/help".green(),
            "/exit".green()
        );
    }

    /// Show the current page with its fields and, on the last page, the estimate
    pub fn show_page(&self, wizard: &Wizard) {
        println!("{}", render_page(wizard));
        if wizard.current_page().is_final() {
            self.show_estimate(wizard);
        }
    }

    /// Show the latest estimate or the reason there is none
    pub fn show_estimate(&self, wizard: &Wizard) {
        if let Some(result) = wizard.estimate() {
            println!("{}", render_summary(result, self.show_breakdown));
        } else if let Some(err) = wizard.estimate_error() {
            self.show_error(&err.to_string());
        } else {
            self.show_info("No estimate yet. Complete the first two pages.");
        }
    }

    /// Blocking notification for a failed page transition
    pub fn show_required_notice(&self, fields: &[String]) {
        println!("{} {}", "!".yellow().bold(), REQUIRED_FIELDS_NOTICE.yellow().bold());
        for field in fields {
            println!("  {} {}", "•".yellow(), field);
        }
    }

    pub fn show_staffing(&self, report: &RoleMap<StaffingAssessment>) {
        println!("{}", render_staffing(report));
    }

    pub fn show_rates(&self, rate_card: &RateCard) {
        println!("{}", render_rates(rate_card));
    }

    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Progress steps, e.g. "● 1 ─ ● 2 ─ ○ 3"
pub fn render_progress(page: WizardPage) -> String {
    page.active_steps()
        .iter()
        .enumerate()
        .map(|(i, active)| {
            let step = format!("{} {}", if *active { "●" } else { "○" }, i + 1);
            if *active {
                step.cyan().bold().to_string()
            } else {
                step.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ─ ")
}

fn render_field(wizard: &Wizard, field: FieldId) -> String {
    let form = wizard.form();
    let value = form.value(field);
    let control = match field.kind() {
        FieldKind::Checkbox => {
            let mark = if form.is_acknowledged() { "[x]" } else { "[ ]" };
            format!("{} {}", mark, field.label())
        }
        FieldKind::Select(options) => {
            let shown = if value.is_empty() { "(choose)".to_string() } else { value };
            format!("{:<26} {}  [{}]", field.label(), shown.bold(), options.join(" | "))
        }
        FieldKind::Slider => format!("{:<26} {}", field.label(), value.bold()),
        FieldKind::Text => format!("{:<26} {}", field.label(), value.bold()),
    };

    let required = if field.is_required() { "*" } else { " " };
    let marker = if wizard.has_error(field) {
        format!("  {}", "← required".red())
    } else {
        String::new()
    };

    format!("  {}{:<18} {}{}", required.red(), field.name(), control, marker)
}

/// Page header, progress and field list
pub fn render_page(wizard: &Wizard) -> String {
    let page = wizard.current_page();
    let mut lines = vec![
        String::new(),
        format!(
            "{}   {}",
            render_progress(page),
            format!("Page {}: {}", page.indicator(), page.title()).bold()
        ),
        "-".repeat(WIDTH).cyan().to_string(),
    ];
    lines.extend(FieldId::on_page(page).map(|field| render_field(wizard, field)));
    lines.join("\n")
}

/// Summary block with the optional per-role breakdown
pub fn render_summary(result: &BudgetResult, show_breakdown: bool) -> String {
    let summary = BudgetSummary::from_result(result);
    let mut lines = vec![
        String::new(),
        summary.title.bold().cyan().to_string(),
        "=".repeat(WIDTH).cyan().to_string(),
        format!("  {}", summary.total.green().bold()),
        format!("  {}", summary.deployment),
        format!("  {}", summary.note.dimmed()),
    ];

    if show_breakdown {
        lines.push(String::new());
        lines.push(format!(
            "  {:<18} {:>12} {:>10} {:>14}",
            "Role", "Effort days", "Rate", "Cost"
        ));
        for (role, line) in result.roles.iter() {
            lines.push(format!(
                "  {:<18} {:>12.3} {:>10} {:>14}",
                role.display_name(),
                line.effort_days,
                format_currency(line.rate),
                format_currency(line.cost)
            ));
        }
    }

    lines.join("\n")
}

/// Staffing ratios against the baselines
pub fn render_staffing(report: &RoleMap<StaffingAssessment>) -> String {
    let mut lines = vec![
        String::new(),
        "Staffing Efficiency".bold().cyan().to_string(),
        "-".repeat(WIDTH).cyan().to_string(),
    ];
    for (role, line) in report.iter() {
        let level = match line.level {
            StaffingLevel::Optimal => line.level.display_name().green(),
            StaffingLevel::Understaffed | StaffingLevel::Overstaffed => {
                line.level.display_name().yellow()
            }
        };
        lines.push(format!(
            "  {:<18} {:>4} / {:<4} ratio {:>5.2}  {:<13} factor {:.2}",
            role.display_name(),
            line.current,
            line.baseline,
            line.ratio,
            level,
            line.factor
        ));
    }
    lines.push(format!("  {}", "Efficiency factors are informational and not applied to the estimate.".dimmed()));
    lines.join("\n")
}

/// Rate card table, one row per deployment model
pub fn render_rates(rate_card: &RateCard) -> String {
    let header = format!(
        "  {:<10} {:>12} {:>16} {:>12}",
        "",
        Role::Architect.display_name(),
        Role::LeadDev.display_name(),
        Role::Dev.display_name()
    );
    let mut lines = vec!["Rate Card (USD per effort day)".bold().cyan().to_string(), header];
    for deployment in DeploymentModel::ALL {
        let rates = rate_card.rates_for(deployment);
        lines.push(format!(
            "  {:<10} {:>12} {:>16} {:>12}",
            deployment.label(),
            format_currency(rates.architect),
            format_currency(rates.lead_dev),
            format_currency(rates.dev)
        ));
    }
    lines.join("\n")
}
