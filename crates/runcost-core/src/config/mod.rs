use crate::cost::CostModel;
use crate::error::{ConfigError, Result};
use crate::rules::find_rule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Analyzer configuration, usually loaded from a TOML file.
///
/// ```toml
/// [cost]
/// runs_per_month = 250
///
/// [cost.pricing]
/// macos_per_min = 0.062
///
/// [rules]
/// disabled = ["RC005"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub cost: CostModel,

    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RuleConfig {
    /// Rule IDs that should not run.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl AnalyzerConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AnalyzerConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let pricing = &self.cost.pricing;
        for (name, value) in [
            ("cost.pricing.linux_per_min", pricing.linux_per_min),
            ("cost.pricing.windows_per_min", pricing.windows_per_min),
            ("cost.pricing.macos_per_min", pricing.macos_per_min),
            ("cost.billed_minutes_cap", self.cost.billed_minutes_cap),
            ("cost.default_timeout_minutes", self.cost.default_timeout_minutes),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if let Some(unknown) = self.rules.disabled.iter().find(|id| find_rule(id).is_none()) {
            return Err(ConfigError::Invalid(format!(
                "unknown rule '{}' in rules.disabled",
                unknown
            )));
        }

        Ok(())
    }
}
