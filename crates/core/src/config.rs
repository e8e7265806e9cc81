//! User configuration stored under the platform config directory.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use tracing::info;

/// Directory under the platform config root holding `config.toml`.
pub const CONFIG_DIR: &str = "bingo90";
const CONFIG_FILE: &str = "config.toml";
const MIN_AUTO_DRAW_INTERVAL_MS: u64 = 100;

const DEFAULT_CONFIG: &str = r#"# Bingo90 configuration

# Delay between automatic draws, in milliseconds.
auto_draw_interval_ms = 1500

[speech]
enabled = true
# Words per minute.
rate = 150
# 0.0 (silent) to 1.0 (full volume).
volume = 1.0
# Explicit synthesiser binary; detected automatically when unset.
# command = "espeak-ng"
"#;

/// Settings for the spoken announcement of drawn numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// Whether numbers are spoken at all.
    pub enabled: bool,
    /// Speaking rate in words per minute.
    pub rate: u32,
    /// Volume between 0.0 and 1.0.
    pub volume: f32,
    /// Synthesiser executable to run instead of the detected one.
    pub command: Option<String>,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 150,
            volume: 1.0,
            command: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay between automatic draws, in milliseconds.
    pub auto_draw_interval_ms: u64,
    /// Speech synthesis settings.
    pub speech: SpeechSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auto_draw_interval_ms: 1500,
            speech: SpeechSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load configuration from a specific file; a missing file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: AppConfig = settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Interval between auto-draw timer ticks.
    pub fn auto_draw_interval(&self) -> Duration {
        Duration::from_millis(self.auto_draw_interval_ms)
    }

    fn normalized(mut self) -> Self {
        self.auto_draw_interval_ms = self.auto_draw_interval_ms.max(MIN_AUTO_DRAW_INTERVAL_MS);
        self.speech.volume = if self.speech.volume.is_finite() {
            self.speech.volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.speech.command = self
            .speech
            .command
            .take()
            .map(|command| command.trim().to_string())
            .filter(|command| !command.is_empty());
        self
    }
}

/// Location of the configuration file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Write the default configuration if no config file exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    write_default_config(&path)?;
    Ok(path)
}

fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}
