//! Interactive wizard front end
//!
//! Reads commands with rustyline, applies them to a `Wizard` and renders
//! the pages and the estimate with colored output.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::Config;
use crate::repl::commands::CommandHandler;
pub use crate::repl::display::DisplayManager;
use crate::repl::input::{page_prompt, InputHandler};
use crate::wizard::Wizard;

/// Wizard session coordinator
///
/// Owns the wizard state for the lifetime of the session. Nothing is
/// persisted except the command history.
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    display_manager: DisplayManager,
    wizard: Wizard,
}

impl ReplSession {
    /// Create a session with the built-in tables and no history file
    pub fn new() -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::new()?,
            command_handler: CommandHandler::new(),
            display_manager: DisplayManager::default(),
            wizard: Wizard::new(),
        })
    }

    /// Create a session from configuration, with persistent history
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::with_history(config.history_path())?,
            command_handler: CommandHandler::new(),
            display_manager: DisplayManager::new(config.display.show_breakdown),
            wizard: Wizard::with_estimator(config.estimator(), config.limits),
        })
    }

    pub fn show_welcome(&self, version: &str) {
        self.display_manager.show_banner(version);
        self.display_manager.show_page(&self.wizard);
    }

    /// Read one line, prompting with the current page
    pub fn read_input(&mut self) -> Result<Option<String>> {
        self.input_handler.set_prompt(page_prompt(self.wizard.current_page()));
        self.input_handler.read_line()
    }

    /// Handle one line of input
    ///
    /// Returns true if the session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        let command = self.command_handler.parse(input);
        self.command_handler
            .execute(command, &mut self.wizard, &mut self.display_manager)
    }

    /// Run until `/exit`, Ctrl-D or Ctrl-C
    pub fn run(&mut self, version: &str) -> Result<()> {
        self.show_welcome(version);
        info!("wizard started");

        loop {
            let line = match self.read_input() {
                Ok(Some(line)) => line,
                // EOF (Ctrl-D)
                Ok(None) => break,
                Err(err) if err.to_string().contains("Interrupted") => {
                    println!("\nUse /exit to quit");
                    continue;
                }
                Err(err) => return Err(err),
            };

            match self.handle_input(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    warn!(error = %err, "command failed");
                    self.display_manager.show_error(&err.to_string());
                }
            }
        }

        self.save()
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Save command history
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardPage;

    #[test]
    fn test_handle_empty_input() {
        let mut session = ReplSession::new().unwrap();
        assert!(session.handle_input("").unwrap());
        assert!(session.handle_input("   ").unwrap());
    }

    #[test]
    fn test_handle_exit_command() {
        let mut session = ReplSession::new().unwrap();
        assert!(!session.handle_input("/exit").unwrap());
    }

    #[test]
    fn test_session_drives_wizard() {
        let mut session = ReplSession::new().unwrap();
        for line in ["totalPartners=1", "lowComplexity=0", "mediumComplexity=0", "highComplexity=0", "/next"] {
            assert!(session.handle_input(line).unwrap());
        }
        assert_eq!(session.wizard().current_page(), WizardPage::Page2);

        assert!(session.handle_input("/back").unwrap());
        assert_eq!(session.wizard().current_page(), WizardPage::Page1);
    }

    #[test]
    fn test_from_config_uses_configured_rates() {
        let mut config = Config::default();
        config.rates.onshore.architect = 200.0;
        let temp_dir = tempfile::TempDir::new().unwrap();
        config.paths.history_file = temp_dir.path().join("history").display().to_string();

        let session = ReplSession::from_config(&config).unwrap();
        assert_eq!(session.wizard().estimator().rate_card().onshore.architect, 200.0);
    }
}
