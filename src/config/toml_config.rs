use crate::core::endpoints::resolve_url;
use crate::core::labels::LabelRegistry;
use crate::domain::model::LabelDomain;
use crate::utils::error::{PlanningError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    /// `[labels.<domain>]` tables: `code = "label"` overrides or additions.
    #[serde(default)]
    pub labels: BTreeMap<String, BTreeMap<String, String>>,
    pub logging: Option<LoggingConfig>,
}

/// `[api]` section. Only `base_url` is used here (for [`AppConfig::endpoint_url`]);
/// the timeout, retry and cache values are validated and passed through to
/// whichever HTTP client the embedding application uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_cache_duration_ms")]
    pub cache_duration_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            cache_duration_ms: default_cache_duration_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1_000
}

fn default_cache_duration_ms() -> u64 {
    300_000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlanningError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlanningError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            PlanningError::ConfigValidationError {
                field: "environment".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_positive_number("api.timeout_ms", self.api.timeout_ms, 1)?;
        validate_range("api.retry_attempts", self.api.retry_attempts, 0, 10)?;

        for (domain, entries) in self.label_overrides()? {
            for (code, label) in entries {
                validate_non_empty_string(&format!("labels.{}", domain), &code)?;
                validate_non_empty_string(&format!("labels.{}.{}", domain, code), &label)?;
            }
        }

        Ok(())
    }

    /// Label sections keyed by their parsed domain.
    pub fn label_overrides(&self) -> Result<BTreeMap<LabelDomain, BTreeMap<String, String>>> {
        self.labels
            .iter()
            .map(|(domain, entries)| {
                let domain = domain.parse::<LabelDomain>().map_err(|_| {
                    PlanningError::UnknownDomainError {
                        domain: domain.clone(),
                    }
                })?;
                Ok((domain, entries.clone()))
            })
            .collect()
    }

    pub fn label_registry(&self) -> Result<LabelRegistry> {
        let overrides = self.label_overrides()?;
        tracing::debug!("🏷️ Building label registry with {} override section(s)", overrides.len());
        Ok(LabelRegistry::french_with_overrides(&overrides))
    }

    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        resolve_url(&self.api.base_url, path)
    }

    pub fn verbose_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
