use crate::dialog::{DialogOptions, Directionality, Labels};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{path::Path, path::PathBuf, time::Duration};
use tracing::debug;

/// Upper bound for the focus delay and close transition
const MAX_TRANSITION_MS: u64 = 10_000;

/// Language of the default dialog labels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt-BR")]
    Portuguese,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(Self::English),
            "pt" | "pt-br" | "portuguese" => Some(Self::Portuguese),
            _ => None,
        }
    }

    pub fn labels(self) -> Labels {
        match self {
            Self::English => Labels::default(),
            Self::Portuguese => Labels::portuguese(),
        }
    }
}

/// Per-label overrides on top of the locale defaults
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub confirm_title: Option<String>,
    pub alert_title: Option<String>,
    pub message: Option<String>,
    pub confirm: Option<String>,
    pub cancel: Option<String>,
    pub ok: Option<String>,
}

impl LabelOverrides {
    fn apply(&self, labels: &mut Labels) {
        let pairs = [
            (&self.confirm_title, &mut labels.confirm_title),
            (&self.alert_title, &mut labels.alert_title),
            (&self.message, &mut labels.message),
            (&self.confirm, &mut labels.confirm),
            (&self.cancel, &mut labels.cancel),
            (&self.ok, &mut labels.ok),
        ];

        for (value, label) in pairs {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                *label = value.to_string();
            }
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text direction used to lay out the button row
    pub directionality: Directionality,

    /// Language of the default labels
    pub locale: Locale,

    /// Label overrides
    pub labels: LabelOverrides,

    /// Delay before focus moves into a freshly shown dialog
    pub focus_delay_ms: u64,

    /// Close transition length
    pub close_transition_ms: u64,

    /// Directory for the log file
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directionality: Directionality::Ltr,
            locale: Locale::English,
            labels: LabelOverrides::default(),
            focus_delay_ms: 0,
            close_transition_ms: 0,
            data_dir: dirs::data_local_dir()
                .map(|dir| dir.join("workout-dialog"))
                .unwrap_or_else(|| PathBuf::from("./data")),
        }
    }
}

impl Config {
    /// Initialize configuration from the config file and environment
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = match Self::load_from_file().await? {
            Some(config) => config,
            None => Self::default(),
        };

        config.load_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Load the first configuration file that exists:
    /// `./.workout-dialog.json`, `./workout-dialog.json`,
    /// `$CONFIG_DIR/workout-dialog/config.json`
    pub async fn load_from_file() -> Result<Option<Self>> {
        let mut config_paths = vec![
            PathBuf::from("./.workout-dialog.json"),
            PathBuf::from("./workout-dialog.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("workout-dialog").join("config.json"));
        }

        for path in config_paths {
            if path.exists() {
                return Self::load_from_path(&path).await.map(Some);
            }
        }

        Ok(None)
    }

    pub async fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid configuration in {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(direction) = var("WORKOUT_DIALOG_DIRECTION") {
            match direction.trim().to_ascii_lowercase().as_str() {
                "rtl" => self.directionality = Directionality::Rtl,
                "ltr" => self.directionality = Directionality::Ltr,
                other => debug!("Ignoring unknown direction '{}'", other),
            }
        }

        if let Some(locale) = var("WORKOUT_DIALOG_LOCALE").as_deref().and_then(Locale::parse) {
            self.locale = locale;
        }

        if let Some(ms) = var("WORKOUT_DIALOG_FOCUS_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.focus_delay_ms = ms;
        }

        if let Some(ms) = var("WORKOUT_DIALOG_CLOSE_MS").and_then(|v| v.parse().ok()) {
            self.close_transition_ms = ms;
        }

        if let Some(data_dir) = var("WORKOUT_DIALOG_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.focus_delay_ms > MAX_TRANSITION_MS {
            return Err(anyhow::anyhow!(
                "focus_delay_ms must be at most {} (got {})",
                MAX_TRANSITION_MS,
                self.focus_delay_ms
            ));
        }

        if self.close_transition_ms > MAX_TRANSITION_MS {
            return Err(anyhow::anyhow!(
                "close_transition_ms must be at most {} (got {})",
                MAX_TRANSITION_MS,
                self.close_transition_ms
            ));
        }

        Ok(())
    }

    /// Locale labels with overrides applied
    pub fn labels(&self) -> Labels {
        let mut labels = self.locale.labels();
        self.labels.apply(&mut labels);
        labels
    }

    pub fn dialog_options(&self) -> DialogOptions {
        DialogOptions {
            labels: self.labels(),
            directionality: self.directionality,
            focus_delay: Duration::from_millis(self.focus_delay_ms),
            close_transition: Duration::from_millis(self.close_transition_ms),
        }
    }

    /// Path of the log file written while the terminal UI is running
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("workout-dialog.log")
    }
}
