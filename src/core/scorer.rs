use crate::domain::model::{Measurements, RiskLevel, RiskVerdict};
use crate::domain::ports::{JitterSource, ScoringPolicy};

pub const MAX_CONFIDENCE: f64 = 95.0;
pub const JITTER_SPAN: f64 = 20.0;

const DIAGNOSIS_THRESHOLD: u32 = 50;
const MODERATE_FLOOR: u32 = 30;
const HIGH_FLOOR: u32 = 60;

/// One row of the rule table. Rules are independent and additive.
pub struct RiskRule {
    pub name: &'static str,
    pub applies: fn(&Measurements) -> bool,
    pub weight: u32,
    pub factor: &'static str,
}

/// Evaluated top to bottom; triggered factors are reported in this order.
pub static RULES: [RiskRule; 5] = [
    RiskRule {
        name: "glucose",
        applies: |m: &Measurements| m.glucose > 140.0,
        weight: 30,
        factor: "Elevated glucose levels",
    },
    RiskRule {
        name: "bmi",
        applies: |m: &Measurements| m.bmi > 30.0,
        weight: 25,
        factor: "High BMI",
    },
    RiskRule {
        name: "age",
        applies: |m: &Measurements| m.age > 45.0,
        weight: 20,
        factor: "Advanced age",
    },
    RiskRule {
        name: "pregnancies",
        applies: |m: &Measurements| m.pregnancies > 3.0,
        weight: 15,
        factor: "Multiple pregnancies",
    },
    RiskRule {
        name: "blood_pressure",
        applies: |m: &Measurements| m.blood_pressure > 90.0,
        weight: 10,
        factor: "High blood pressure",
    },
];

pub fn triggered(measurements: &Measurements) -> impl Iterator<Item = &'static RiskRule> + '_ {
    RULES.iter().filter(move |rule| (rule.applies)(measurements))
}

pub fn score(measurements: &Measurements) -> u32 {
    triggered(measurements).map(|rule| rule.weight).sum()
}

/// Maps any sample into `[0, 1)`; non-finite samples count as zero.
pub fn unit_interval(sample: f64) -> f64 {
    if sample.is_finite() {
        sample.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    }
}

pub fn risk_level(score: u32) -> RiskLevel {
    if score < MODERATE_FLOOR {
        RiskLevel::Low
    } else if score < HIGH_FLOOR {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {
    policy: ScoringPolicy,
}

impl RiskScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn has_diabetes(&self, score: u32) -> bool {
        match self.policy {
            ScoringPolicy::Legacy => score > DIAGNOSIS_THRESHOLD,
            ScoringPolicy::Aligned => risk_level(score) == RiskLevel::High,
        }
    }

    pub fn assess(&self, measurements: &Measurements, jitter: &mut dyn JitterSource) -> RiskVerdict {
        let factors: Vec<String> = triggered(measurements)
            .map(|rule| {
                tracing::debug!("Rule {} triggered (+{})", rule.name, rule.weight);
                rule.factor.to_string()
            })
            .collect();
        let score = score(measurements);

        let unit = unit_interval(jitter.next_unit());
        let confidence = (f64::from(score) + unit * JITTER_SPAN).min(MAX_CONFIDENCE);

        RiskVerdict {
            has_diabetes: self.has_diabetes(score),
            confidence,
            risk_level: risk_level(score),
            factors,
            score,
        }
    }
}
