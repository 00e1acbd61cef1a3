//! User configuration loaded from `config.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Largest number of decimals `f64` can show meaningfully.
pub const MAX_DECIMALS_LIMIT: usize = 15;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shown for an empty expression and an empty result.
    pub placeholder: String,
    /// Shown on the result line when evaluation fails.
    pub error_text: String,
    /// Decimal places kept when formatting non-integral results.
    pub max_decimals: usize,
    /// Copy every successful result to the clipboard.
    pub copy_result: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: "0".to_string(),
            error_text: "Error".to_string(),
            max_decimals: 10,
            copy_result: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Otherwise the default location is read
    /// if present, and built-in defaults are used if not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse TOML")?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        if self.max_decimals > MAX_DECIMALS_LIMIT {
            warn!(
                max_decimals = self.max_decimals,
                "max_decimals too large, clamping to {MAX_DECIMALS_LIMIT}"
            );
            self.max_decimals = MAX_DECIMALS_LIMIT;
        }
        self
    }
}

/// `$XDG_CONFIG_HOME/zcalc/config.toml` or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            error_text = "Oops"
            copy_result = true
            "#,
        )
        .unwrap();
        assert_eq!(config.error_text, "Oops");
        assert!(config.copy_result);
        assert_eq!(config.placeholder, "0");
        assert_eq!(config.max_decimals, 10);
    }

    #[test]
    fn test_max_decimals_clamped() {
        let config = Config::from_toml_str("max_decimals = 40").unwrap();
        assert_eq!(config.max_decimals, MAX_DECIMALS_LIMIT);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml_str("precision = 3").is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(Config::from_toml_str("max_decimals = \"ten\"").is_err());
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let path = Path::new("/nonexistent/zcalc/config.toml");
        assert!(Config::load(Some(path)).is_err());
    }

    #[test]
    fn test_default_path_location() {
        if let Some(path) = default_path() {
            assert!(path.ends_with("zcalc/config.toml"));
        }
    }
}
