use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use crate::config::Config;
use crate::dialog::DialogKind;
use crate::tui;

/// Show a single dialog and report the answer through the exit code
#[derive(Args, Debug, Clone)]
pub struct PromptCommand {
    /// Message shown in the dialog body; the locale default is used when omitted
    pub message: Vec<String>,

    /// Dialog title; the locale default is used when omitted
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,
}

impl PromptCommand {
    pub async fn execute(&self, config: &Config, kind: DialogKind) -> Result<bool> {
        debug!("Executing {} prompt", kind);

        let message = self.message();
        let verdict = tui::run_prompt(config, kind, message, self.title.clone()).await?;

        info!("{} prompt answered with {}", kind, verdict);
        Ok(verdict)
    }

    /// Words joined into one message, or nothing when no words were given
    fn message(&self) -> Option<String> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.join(" "))
        }
    }
}
