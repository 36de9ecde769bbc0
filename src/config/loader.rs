//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the HRMS
//! policy from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::WageConfiguration;

use super::types::{CompanyMetadata, PolicyConfig, SalaryDefaults};

/// Loads and provides access to the HRMS policy.
///
/// # Directory Structure
///
/// ```text
/// config/hrms/
/// └── policy.yaml   # Company metadata and salary defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use hrms_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/hrms").unwrap();
/// let template = loader.default_configuration(Decimal::new(50000, 0));
/// println!("{} basic: {}%", loader.company().name, template.basic_percent);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, is not valid YAML, lacks
    /// a required field, or holds a negative salary default.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Self::from_policy(policy)
    }

    /// Wraps an already-built policy after validating it.
    pub fn from_policy(policy: PolicyConfig) -> EngineResult<Self> {
        Self::validate(&policy)?;
        debug!(company = %policy.company.name, version = %policy.company.version, "Policy loaded");
        Ok(Self { policy })
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

    fn validate(policy: &PolicyConfig) -> EngineResult<()> {
        match policy
            .salary_defaults
            .fields()
            .into_iter()
            .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
        {
            Some((field, value)) => Err(EngineError::InvalidPolicy {
                field: field.to_string(),
                message: format!("must not be negative, got {}", value),
            }),
            None => Ok(()),
        }
    }

    /// Returns the full policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.policy.company
    }

    /// Returns the salary defaults.
    pub fn salary_defaults(&self) -> &SalaryDefaults {
        &self.policy.salary_defaults
    }

    /// Builds a wage configuration for `monthly_wage` from the policy defaults.
    pub fn default_configuration(&self, monthly_wage: Decimal) -> WageConfiguration {
        self.policy.salary_defaults.to_configuration(monthly_wage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/hrms"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy_with_basic(basic_percent: &str) -> PolicyConfig {
        PolicyConfig {
            company: CompanyMetadata {
                name: "Test Co".to_string(),
                currency: "INR".to_string(),
                version: "test".to_string(),
            },
            salary_defaults: SalaryDefaults {
                basic_percent: dec(basic_percent),
                hra_percent: dec("50"),
                standard_allowance_percent: Decimal::ZERO,
                performance_bonus_percent: Decimal::ZERO,
                lta_percent: Decimal::ZERO,
                pf_percent: dec("12"),
                professional_tax: dec("200"),
            },
        }
    }

    #[test]
    fn test_load_valid_config() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_company_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.company().currency, "INR");
        assert!(!loader.company().name.is_empty());
    }

    #[test]
    fn test_salary_defaults_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let defaults = loader.salary_defaults();

        assert_eq!(defaults.basic_percent, dec("50"));
        assert_eq!(defaults.hra_percent, dec("50"));
        assert_eq!(defaults.standard_allowance_percent, dec("8.334"));
        assert_eq!(defaults.performance_bonus_percent, dec("8.33"));
        assert_eq!(defaults.lta_percent, dec("8.333"));
        assert_eq!(defaults.pf_percent, dec("12"));
        assert_eq!(defaults.professional_tax, dec("200"));
    }

    #[test]
    fn test_default_configuration_for_wage() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let config = loader.default_configuration(dec("50000"));

        assert_eq!(config.monthly_wage, dec("50000"));
        assert_eq!(config.basic_percent, dec("50"));
        assert_eq!(config.professional_tax, dec("200"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_negative_default_is_rejected() {
        let result = ConfigLoader::from_policy(policy_with_basic("-5"));

        match result {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "salary_defaults.basic_percent");
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_zero_default_is_accepted() {
        assert!(ConfigLoader::from_policy(policy_with_basic("0")).is_ok());
    }
}
