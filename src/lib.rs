pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    delay::{ImmediateDelay, TokioDelay},
    jitter::{FixedJitter, RandomJitter},
};
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    controller::{FormPhase, ViewController, ViewState},
    report::AssessmentReport,
    scorer::RiskScorer,
    validator::validate,
};
pub use crate::domain::model::{Field, MeasurementRecord, Measurements, Notice, RiskLevel, RiskVerdict};
pub use crate::domain::ports::ScoringPolicy;
pub use crate::utils::error::{RiskError, Result};
