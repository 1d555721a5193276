pub mod controller;
pub mod report;
pub mod scorer;
pub mod validator;

pub use crate::domain::model::{MeasurementRecord, Measurements, RiskLevel, RiskVerdict};
pub use crate::domain::ports::{ConfigProvider, Delay, JitterSource, ScoringPolicy};
pub use crate::utils::error::Result;
