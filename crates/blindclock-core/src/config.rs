//! TOML-based simulator configuration.
//!
//! The physical device keeps its boot options in firmware storage; the
//! simulator keeps the equivalent knobs in
//! `~/.config/blindclock/config.toml`. Session state itself is never
//! persisted, only these power-on defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::editor::{INTERVAL_EDITOR, SMALL_BLIND_EDITOR};
use crate::error::ConfigError;

/// Power-on values for the two setup prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_small_blind")]
    pub small_blind: u32,
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
}

/// Speaker settings applied once at power-on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Volume fraction in 0.0..=1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default = "default_true")]
    pub startup_chime: bool,
}

/// Countdown behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// When false the countdown loses time while audio blocks the loop
    /// (each slow poll costs exactly one second); when true it subtracts
    /// every whole second the gap covered.
    #[serde(default)]
    pub catch_up_ticks: bool,
}

/// Application configuration, serialized to/from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

fn default_small_blind() -> u32 {
    25
}
fn default_interval_minutes() -> u32 {
    10
}
fn default_volume() -> f32 {
    0.5
}
fn default_true() -> bool {
    true
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            small_blind: default_small_blind(),
            interval_minutes: default_interval_minutes(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            startup_chime: true,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            catch_up_ticks: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            audio: AudioConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl Config {
    /// Returns `~/.config/blindclock[-dev]/config.toml` based on
    /// BLINDCLOCK_ENV.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let base = dirs::home_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(".config");
        let env = std::env::var("BLINDCLOCK_ENV").unwrap_or_else(|_| "production".to_string());
        let dir = if env == "dev" {
            base.join("blindclock-dev")
        } else {
            base.join("blindclock")
        };
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default path, writing defaults if no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(&path)?;
                Ok(cfg)
            }
        }
    }

    /// Load from an explicit path (used by `--config`).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from the default path, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.small_blind" => Some(self.defaults.small_blind.to_string()),
            "defaults.interval_minutes" => Some(self.defaults.interval_minutes.to_string()),
            "audio.volume" => Some(self.audio.volume.to_string()),
            "audio.startup_chime" => Some(self.audio.startup_chime.to_string()),
            "timing.catch_up_ticks" => Some(self.timing.catch_up_ticks.to_string()),
            _ => None,
        }
    }

    /// Set a value by dot-separated key, validating it against the same
    /// ranges the rotary editor enforces on the device.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        match key {
            "defaults.small_blind" => {
                let v: u32 = value.parse().map_err(|_| invalid("not a number".into()))?;
                let p = SMALL_BLIND_EDITOR;
                if v < p.min || v > p.max || v % p.step != 0 {
                    return Err(invalid(format!(
                        "must be a multiple of {} in {}..={}",
                        p.step, p.min, p.max
                    )));
                }
                self.defaults.small_blind = v;
            }
            "defaults.interval_minutes" => {
                let v: u32 = value.parse().map_err(|_| invalid("not a number".into()))?;
                let p = INTERVAL_EDITOR;
                if v < p.min || v > p.max || v % p.step != 0 {
                    return Err(invalid(format!(
                        "must be a multiple of {} in {}..={}",
                        p.step, p.min, p.max
                    )));
                }
                self.defaults.interval_minutes = v;
            }
            "audio.volume" => {
                let v: f32 = value.parse().map_err(|_| invalid("not a number".into()))?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid("must be in 0.0..=1.0".into()));
                }
                self.audio.volume = v;
            }
            "audio.startup_chime" => {
                self.audio.startup_chime =
                    value.parse().map_err(|_| invalid("not a boolean".into()))?;
            }
            "timing.catch_up_ticks" => {
                self.timing.catch_up_ticks =
                    value.parse().map_err(|_| invalid("not a boolean".into()))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// All known keys with their current values, for `config list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        const KEYS: [&str; 5] = [
            "defaults.small_blind",
            "defaults.interval_minutes",
            "audio.volume",
            "audio.startup_chime",
            "timing.catch_up_ticks",
        ];
        KEYS.iter()
            .map(|&k| (k, self.get(k).unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.defaults.small_blind, 25);
        assert_eq!(parsed.defaults.interval_minutes, 10);
        assert!(parsed.audio.startup_chime);
        assert!(!parsed.timing.catch_up_ticks);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[audio]\nvolume = 0.8\n").unwrap();
        assert_eq!(parsed.audio.volume, 0.8);
        assert_eq!(parsed.defaults.small_blind, 25);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("defaults.small_blind").as_deref(), Some("25"));
        assert_eq!(cfg.get("timing.catch_up_ticks").as_deref(), Some("false"));
        assert!(cfg.get("defaults.missing").is_none());
    }

    #[test]
    fn set_validates_editor_ranges() {
        let mut cfg = Config::default();
        cfg.set("defaults.small_blind", "100").unwrap();
        assert_eq!(cfg.defaults.small_blind, 100);
        assert!(cfg.set("defaults.small_blind", "30").is_err());
        assert!(cfg.set("defaults.small_blind", "225").is_err());
        assert!(cfg.set("defaults.interval_minutes", "7").is_err());
        assert!(cfg.set("audio.volume", "1.5").is_err());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("audio.bass_boost", "true"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("defaults.interval_minutes", "15").unwrap();
        cfg.set("timing.catch_up_ticks", "true").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.interval_minutes, 15);
        assert!(loaded.timing.catch_up_ticks);
    }

    #[test]
    fn entries_cover_every_key() {
        let cfg = Config::default();
        let entries = cfg.entries();
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|(_, v)| !v.is_empty()));
    }
}
