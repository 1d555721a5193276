pub mod toml_config;

use crate::domain::model::MeasurementRecord;
use crate::domain::ports::{ConfigProvider, ScoringPolicy};
use crate::utils::error::{RiskError, Result};
use std::path::Path;
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::Field;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::MAX_DELAY_MS;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "diabetes-risk")]
#[command(about = "Rule-based diabetes risk assessment from eight clinical measurements")]
pub struct CliConfig {
    #[arg(long, help = "TOML settings file ([assessment] and optional [measurements])")]
    pub config: Option<String>,

    #[arg(long, help = "Measurement record file (.toml or .json)")]
    pub input: Option<String>,

    #[arg(long, help = Field::Pregnancies.description())]
    pub pregnancies: Option<String>,

    #[arg(long, help = Field::Glucose.description())]
    pub glucose: Option<String>,

    #[arg(long, help = Field::BloodPressure.description())]
    pub blood_pressure: Option<String>,

    #[arg(long, help = Field::SkinThickness.description())]
    pub skin_thickness: Option<String>,

    #[arg(long, help = Field::Insulin.description())]
    pub insulin: Option<String>,

    #[arg(long, help = Field::Bmi.description())]
    pub bmi: Option<String>,

    #[arg(long, help = Field::DiabetesPedigreeFunction.description())]
    pub pedigree: Option<String>,

    #[arg(long, help = Field::Age.description())]
    pub age: Option<String>,

    #[arg(long, help = "Seed for the confidence jitter")]
    pub seed: Option<u64>,

    #[arg(long, help = "Artificial analysis delay in milliseconds")]
    pub delay_ms: Option<u64>,

    #[arg(long, value_enum)]
    pub policy: Option<ScoringPolicy>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    fn overrides(&self) -> [(Field, Option<&String>); 8] {
        [
            (Field::Pregnancies, self.pregnancies.as_ref()),
            (Field::Glucose, self.glucose.as_ref()),
            (Field::BloodPressure, self.blood_pressure.as_ref()),
            (Field::SkinThickness, self.skin_thickness.as_ref()),
            (Field::Insulin, self.insulin.as_ref()),
            (Field::Bmi, self.bmi.as_ref()),
            (Field::DiabetesPedigreeFunction, self.pedigree.as_ref()),
            (Field::Age, self.age.as_ref()),
        ]
    }

    /// Applies flag values on top of `base`; flags win.
    pub fn apply_to(&self, mut base: MeasurementRecord) -> MeasurementRecord {
        for (field, value) in self.overrides() {
            if let Some(value) = value {
                base.set(field, value.clone());
            }
        }
        base
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.input {
            validate_path("input", path)?;
        }
        if let Some(delay_ms) = self.delay_ms {
            validate_range("delay_ms", delay_ms, 0, MAX_DELAY_MS)?;
        }
        Ok(())
    }
}

/// Effective settings after layering CLI flags over the TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub analysis_delay: Duration,
    pub scoring_policy: ScoringPolicy,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self {
            analysis_delay: provider.analysis_delay(),
            scoring_policy: provider.scoring_policy(),
            seed: provider.seed(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: &TomlConfig) -> Self {
        let mut settings = Self::from_provider(file);
        if let Some(delay_ms) = cli.delay_ms {
            settings.analysis_delay = Duration::from_millis(delay_ms);
        }
        if let Some(policy) = cli.policy {
            settings.scoring_policy = policy;
        }
        if cli.seed.is_some() {
            settings.seed = cli.seed;
        }
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_provider(&TomlConfig::default())
    }
}

impl ConfigProvider for Settings {
    fn analysis_delay(&self) -> Duration {
        self.analysis_delay
    }

    fn scoring_policy(&self) -> ScoringPolicy {
        self.scoring_policy
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Reads a measurement record; `.json` files are parsed as JSON, anything else as TOML.
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<MeasurementRecord> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        let content = toml_config::substitute_env_vars(&content);
        toml::from_str(&content).map_err(|e| RiskError::ConfigValidationError {
            field: path.display().to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}
