use crate::core::controller::DEFAULT_ANALYSIS_DELAY;
use crate::domain::model::MeasurementRecord;
use crate::domain::ports::{ConfigProvider, ScoringPolicy};
use crate::utils::error::{RiskError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub assessment: AssessmentSettings,
    pub measurements: Option<MeasurementRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentSettings {
    pub delay_ms: u64,
    pub scoring_policy: ScoringPolicy,
    pub seed: Option<u64>,
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_ANALYSIS_DELAY.as_millis() as u64,
            scoring_policy: ScoringPolicy::default(),
            seed: None,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RiskError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RiskError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables are left as written.
pub fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl ConfigProvider for TomlConfig {
    fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.assessment.delay_ms)
    }

    fn scoring_policy(&self) -> ScoringPolicy {
        self.assessment.scoring_policy
    }

    fn seed(&self) -> Option<u64> {
        self.assessment.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_range("assessment.delay_ms", self.assessment.delay_ms, 0, MAX_DELAY_MS)
    }
}
