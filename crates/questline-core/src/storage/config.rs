//! TOML-based application configuration.
//!
//! Stores the tunables of the two algorithms:
//! - Streak lookback window, day boundary offset, rejected-submission policy
//! - Recommendation count, recency window, jitter span and term weights
//!
//! Configuration is stored at `~/.config/questline/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::recommend::RecommendConfig;
use crate::streak::StreakConfig;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/questline/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub streak: StreakConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let unknown = || ConfigError::UnknownKey(key.to_string());

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot replace a whole section".to_string()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Check every value the algorithms depend on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streak.lookback_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "streak.lookback_days".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.streak.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(ConfigError::InvalidValue {
                key: "streak.utc_offset_minutes".into(),
                message: format!(
                    "must be within one day, got {}",
                    self.streak.utc_offset_minutes
                ),
            });
        }
        self.recommend.validate()
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load and validate a config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
        let cfg: Config = toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Update a value in memory. The result must still validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value has the wrong
    /// type or fails validation; `self` is left unchanged in that case.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
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
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.streak.lookback_days, 30);
        assert_eq!(parsed.recommend.weights.type_affinity, 3.0);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [streak]
            lookback_days = 14

            [recommend.weights]
            recency = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(parsed.streak.lookback_days, 14);
        assert!(!parsed.streak.count_rejected);
        assert_eq!(parsed.recommend.weights.recency, 0.5);
        assert_eq!(parsed.recommend.weights.interest_match, 2.0);
        assert_eq!(parsed.recommend.count, 5);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("streak.lookback_days").as_deref(), Some("30"));
        assert_eq!(cfg.get("streak.count_rejected").as_deref(), Some("false"));
        assert_eq!(cfg.get("recommend.jitter_span").as_deref(), Some("2.0"));
        assert!(cfg.get("recommend.missing").is_none());
        assert!(cfg.get("recommend").is_none());
    }

    #[test]
    fn apply_updates_nested_values() {
        let mut cfg = Config::default();
        cfg.apply("streak.count_rejected", "true").unwrap();
        cfg.apply("recommend.weights.type_affinity", "4.5").unwrap();
        cfg.apply("recommend.jitter_span", "0").unwrap();
        assert!(cfg.streak.count_rejected);
        assert_eq!(cfg.recommend.weights.type_affinity, 4.5);
        assert_eq!(cfg.recommend.jitter_span, 0.0);
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("streak.nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.apply("", "1"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn apply_rejects_invalid_values_and_keeps_state() {
        let mut cfg = Config::default();
        assert!(cfg.apply("streak.lookback_days", "soon").is_err());
        assert!(cfg.apply("streak.lookback_days", "0").is_err());
        assert!(cfg.apply("recommend.count", "2.5").is_err());
        assert!(cfg.apply("recommend.weights.recency", "-1").is_err());
        assert!(cfg.apply("recommend.weights", "1").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn apply_rejects_extreme_utc_offsets() {
        let mut cfg = Config::default();
        for value in ["-2147483648", "2147483647", "1440", "-1440"] {
            assert!(matches!(
                cfg.apply("streak.utc_offset_minutes", value),
                Err(ConfigError::InvalidValue { ref key, .. }) if key == "streak.utc_offset_minutes"
            ));
        }
        cfg.apply("streak.utc_offset_minutes", "-1439").unwrap();
        assert_eq!(cfg.streak.utc_offset_minutes, -1439);
    }

    #[test]
    fn load_from_rejects_out_of_range_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[streak]\nutc_offset_minutes = -2147483648\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.apply("streak.utc_offset_minutes", "-300").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.streak.utc_offset_minutes, -300);
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "streak = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
