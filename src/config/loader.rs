//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading commission
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ExperienceTier;

use super::types::{CommissionConfig, LimitsConfig, TierConfig, TiersConfig};

/// Loads and provides access to commission configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── limits.yaml   # Maximum single sale amount
/// └── tiers.yaml    # Rates and thresholds per experience tier
/// ```
///
/// # Example
///
/// ```no_run
/// use commission_engine::config::ConfigLoader;
/// use commission_engine::models::ExperienceTier;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let threshold = loader.minimum_sales_for_commission(ExperienceTier::Probationary);
/// println!("Commission starts after ${}", threshold);
/// # Ok::<(), commission_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CommissionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a field (`ConfigParseError`)
    /// - Any value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let limits = Self::load_yaml::<LimitsConfig>(&path.join("limits.yaml"))?;
        let tiers = Self::load_yaml::<TiersConfig>(&path.join("tiers.yaml"))?;

        let config = CommissionConfig::new(limits, tiers)?;
        debug!(
            path = %path.display(),
            max_sale_amount = %config.max_sale_amount(),
            "Loaded commission configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying commission configuration.
    pub fn config(&self) -> &CommissionConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CommissionConfig {
        self.config
    }

    /// Gets the record for a tier.
    pub fn tier(&self, tier: ExperienceTier) -> &TierConfig {
        self.config.tier(tier)
    }

    /// Gets the base commission threshold for a tier.
    pub fn minimum_sales_for_commission(&self, tier: ExperienceTier) -> Decimal {
        self.config.minimum_sales_for_commission(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SaleCategory;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes the given files into a temporary directory removed on drop.
    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        for (file, content) in files {
            fs::write(dir.path().join(file), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &CommissionConfig::default());
    }

    #[test]
    fn test_tier_lookup() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let experienced = loader.tier(ExperienceTier::Experienced);
        assert_eq!(experienced.rates.rate_for(SaleCategory::Maintenance), dec("0.06"));
        assert_eq!(experienced.bonus_rate, dec("0.015"));
    }

    #[test]
    fn test_minimum_sales_per_tier() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(
            loader.minimum_sales_for_commission(ExperienceTier::Probationary),
            dec("2000.00")
        );
        assert_eq!(
            loader.minimum_sales_for_commission(ExperienceTier::Experienced),
            dec("5000.00")
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("limits.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_tiers_file_returns_error() {
        let dir = config_dir(&[("limits.yaml", "max_sale_amount: \"100\"\n")]);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("tiers.yaml")),
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let tiers = fs::read_to_string(Path::new(config_path()).join("tiers.yaml")).unwrap();
        let dir = config_dir(&[
            ("limits.yaml", "max_sale_amount: [unclosed\n"),
            ("tiers.yaml", tiers.as_str()),
        ]);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => assert!(path.contains("limits.yaml")),
            _ => panic!("Expected ConfigParseError error"),
        }
    }

    #[test]
    fn test_load_missing_tier_returns_parse_error() {
        let dir = config_dir(&[
            ("limits.yaml", "max_sale_amount: \"100\"\n"),
            (
                "tiers.yaml",
                "probationary:\n  rates: {basic: \"0.1\", maintenance: \"0.1\", replacement: \"0.1\", consulting: \"0.1\"}\n  minimum_sales_for_commission: \"10\"\n  minimum_sales_for_bonus: \"20\"\n  bonus_rate: \"0.01\"\n",
            ),
        ]);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("experienced"));
            }
            _ => panic!("Expected ConfigParseError error"),
        }
    }

    #[test]
    fn test_load_negative_max_sale_amount_returns_invalid_config() {
        let tiers = fs::read_to_string(Path::new(config_path()).join("tiers.yaml")).unwrap();
        let dir = config_dir(&[
            ("limits.yaml", "max_sale_amount: \"-5\"\n"),
            ("tiers.yaml", tiers.as_str()),
        ]);

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_load_oversized_max_sale_amount_returns_invalid_config() {
        let tiers = fs::read_to_string(Path::new(config_path()).join("tiers.yaml")).unwrap();
        let dir = config_dir(&[
            ("limits.yaml", "max_sale_amount: \"79228162514264337593543950335\"\n"),
            ("tiers.yaml", tiers.as_str()),
        ]);

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "max_sale_amount"),
            _ => panic!("Expected InvalidConfig error"),
        }
    }
}
