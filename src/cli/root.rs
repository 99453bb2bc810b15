use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{debug, info};

use super::prompt::PromptCommand;
use crate::config::{Config, Locale};
use crate::dialog::{DialogKind, Directionality};
use crate::tui;

/// Confirm and alert dialogs for the workout log, in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "workout-dialog",
    version,
    about = "Confirm and alert dialogs for the workout log, in your terminal",
    long_about = r#"Shows modal confirm/alert dialogs in the terminal.

Examples:
  workout-dialog                                  # Day-log screen with dialogs
  workout-dialog confirm "Delete today's log?"    # Exit 0 on confirm, 1 on cancel
  workout-dialog alert --title Saved "All done"   # Exit 0 once acknowledged
  workout-dialog --rtl --locale pt-BR demo        # Right-to-left, Portuguese labels"#
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Lay the dialog out right-to-left
    #[arg(long = "rtl", global = true)]
    pub rtl: bool,

    /// Label locale (en, pt-BR)
    #[arg(short = 'l', long = "locale", global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Day-log screen that asks before removing entries (default)
    Demo,

    /// Ask a yes/no question; exits 0 when confirmed and 1 otherwise
    Confirm(PromptCommand),

    /// Show a notice; exits 0 once acknowledged
    Alert(PromptCommand),
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::parse(value).ok_or_else(|| format!("unknown locale '{}' (expected en or pt-BR)", value))
}

impl Cli {
    /// Command-line flags take precedence over file and environment settings
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.rtl {
            config.directionality = Directionality::Rtl;
        }

        if let Some(locale) = self.locale {
            config.locale = locale;
        }
    }

    pub async fn execute(self, config: &Config) -> Result<ExitCode> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        match self.command {
            Some(Commands::Confirm(prompt)) => {
                let verdict = prompt.execute(config, DialogKind::Confirm).await?;
                Ok(ExitCode::from(exit_status(verdict)))
            }
            Some(Commands::Alert(prompt)) => {
                let verdict = prompt.execute(config, DialogKind::Alert).await?;
                Ok(ExitCode::from(exit_status(verdict)))
            }
            Some(Commands::Demo) | None => {
                info!("Starting day-log screen");
                tui::run_demo(config).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// 0 when the dialog resolved true, 1 otherwise
fn exit_status(verdict: bool) -> u8 {
    if verdict {
        0
    } else {
        1
    }
}
