//! Application configuration
//!
//! Loaded from `<config dir>/smart-agri/config.toml` when present. Every
//! field has a default so a partial file (or none at all) is fine.

use crate::{AgriError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "SMART_AGRI_CONFIG";

/// Fixed delays standing in for network round-trips
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DelayConfig {
    /// Simulated login delay in milliseconds
    pub login_ms: u64,
    /// Simulated account creation delay in milliseconds
    pub create_account_ms: u64,
    /// Simulated assistant reply delay in milliseconds
    pub assistant_ms: u64,
    /// Delay before the welcome page greets the farmer
    pub welcome_greeting_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            create_account_ms: 1500,
            assistant_ms: 1500,
            welcome_greeting_ms: 1000,
        }
    }
}

impl DelayConfig {
    /// All delays set to zero (useful for tests)
    pub fn instant() -> Self {
        Self {
            login_ms: 0,
            create_account_ms: 0,
            assistant_ms: 0,
            welcome_greeting_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn create_account(&self) -> Duration {
        Duration::from_millis(self.create_account_ms)
    }

    pub fn assistant(&self) -> Duration {
        Duration::from_millis(self.assistant_ms)
    }

    pub fn welcome_greeting(&self) -> Duration {
        Duration::from_millis(self.welcome_greeting_ms)
    }
}

/// External tools used by the voice backends
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VoiceToolConfig {
    /// Whether to try speech recognition at all
    pub enable_input: bool,
    /// Whether to try speech synthesis at all
    pub enable_output: bool,
    /// sox recorder binary
    pub recorder: String,
    /// whisper.cpp command line binary
    pub whisper: String,
    /// Whisper model file; defaults to `<data dir>/whisper-models/ggml-base.bin`
    pub whisper_model: Option<PathBuf>,
    /// espeak-ng binary
    pub synthesizer: String,
    /// Hard cap on a single utterance capture, in seconds
    pub max_utterance_secs: f32,
}

impl Default for VoiceToolConfig {
    fn default() -> Self {
        Self {
            enable_input: true,
            enable_output: true,
            recorder: "rec".to_string(),
            whisper: "whisper-cli".to_string(),
            whisper_model: None,
            synthesizer: "espeak-ng".to_string(),
            max_utterance_secs: 15.0,
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Override for the session store directory
    pub data_dir: Option<PathBuf>,
    /// Simulated backend delays
    pub delays: DelayConfig,
    /// Voice tool settings
    pub voice: VoiceToolConfig,
}

impl AppConfig {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("smart-agri").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AgriError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Directory holding the session store
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("smart-agri")
        })
    }

    /// Resolved whisper model path
    pub fn whisper_model_path(&self) -> PathBuf {
        self.voice
            .whisper_model
            .clone()
            .unwrap_or_else(|| self.data_dir().join("whisper-models").join("ggml-base.bin"))
    }

    /// Set the session store directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Replace the simulated delays
    pub fn with_delays(mut self, delays: DelayConfig) -> Self {
        self.delays = delays;
        self
    }

    /// Disable speech recognition
    pub fn without_voice_input(mut self) -> Self {
        self.voice.enable_input = false;
        self
    }

    /// Disable speech synthesis
    pub fn without_voice_output(mut self) -> Self {
        self.voice.enable_output = false;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.voice.max_utterance_secs <= 0.0 {
            return Err(AgriError::ConfigError(
                "voice.max_utterance_secs must be positive".to_string(),
            ));
        }
        if self.voice.enable_input
            && (self.voice.recorder.trim().is_empty() || self.voice.whisper.trim().is_empty())
        {
            return Err(AgriError::ConfigError(
                "voice.recorder and voice.whisper are required when input is enabled".to_string(),
            ));
        }
        if self.voice.enable_output && self.voice.synthesizer.trim().is_empty() {
            return Err(AgriError::ConfigError(
                "voice.synthesizer is required when output is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.voice.enable_input);
        assert!(config.voice.enable_output);
        assert_eq!(config.delays.login_ms, 1000);
        assert_eq!(config.delays.create_account_ms, 1500);
        assert_eq!(config.delays.assistant_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AppConfig::default()
            .without_voice_input()
            .without_voice_output()
            .with_delays(DelayConfig::instant())
            .with_data_dir("/tmp/agri");

        assert!(!config.voice.enable_input);
        assert!(!config.voice.enable_output);
        assert_eq!(config.delays.login(), Duration::ZERO);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/agri"));
    }

    #[test]
    fn test_partial_toml() {
        let toml_str = r#"
            [delays]
            login_ms = 10

            [voice]
            synthesizer = "espeak"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.delays.login_ms, 10);
        assert_eq!(config.delays.assistant_ms, 1500);
        assert_eq!(config.voice.synthesizer, "espeak");
        assert_eq!(config.voice.recorder, "rec");
    }

    #[test]
    fn test_validate_rejects_bad_utterance_cap() {
        let mut config = AppConfig::default();
        config.voice.max_utterance_secs = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[voice]\nenable_input = false\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.voice.enable_input);
    }

    #[test]
    fn test_whisper_model_default_under_data_dir() {
        let config = AppConfig::default().with_data_dir("/data");
        assert_eq!(
            config.whisper_model_path(),
            PathBuf::from("/data/whisper-models/ggml-base.bin")
        );
    }
}
