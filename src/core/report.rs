use crate::domain::model::{RiskLevel, RiskVerdict};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

pub const DISCLAIMER: &str = "This AI prediction is for informational purposes only and should not \
replace professional medical advice. Always consult with a qualified healthcare provider for proper \
diagnosis and treatment.";

pub fn recommendations(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => &[
            "Continue maintaining a healthy lifestyle",
            "Regular exercise and balanced diet",
            "Annual health checkups recommended",
        ],
        RiskLevel::Moderate => &[
            "Consider lifestyle modifications",
            "Increase physical activity",
            "Monitor blood sugar levels regularly",
            "Consult with healthcare provider",
        ],
        RiskLevel::High => &[
            "Immediate consultation with healthcare provider recommended",
            "Comprehensive diabetes screening advised",
            "Urgent lifestyle changes needed",
            "Consider preventive medications as advised by doctor",
        ],
    }
}

pub fn headline(verdict: &RiskVerdict) -> &'static str {
    if verdict.has_diabetes {
        "High Risk Detected"
    } else {
        "Low Risk Detected"
    }
}

/// Everything the result screen shows for one verdict.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub headline: &'static str,
    #[serde(flatten)]
    pub verdict: RiskVerdict,
    pub recommendations: &'static [&'static str],
    pub disclaimer: &'static str,
    pub assessed_at: DateTime<Utc>,
}

impl AssessmentReport {
    pub fn new(verdict: RiskVerdict) -> Self {
        Self::at(verdict, Utc::now())
    }

    pub fn at(verdict: RiskVerdict, assessed_at: DateTime<Utc>) -> Self {
        Self {
            headline: headline(&verdict),
            recommendations: recommendations(verdict.risk_level),
            disclaimer: DISCLAIMER,
            verdict,
            assessed_at,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssessmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = &self.verdict;

        writeln!(f, "Prediction Results")?;
        writeln!(f, "==================")?;
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "Risk level:       {}", verdict.risk_level)?;
        writeln!(f, "Confidence Level: {:.1}%", verdict.confidence)?;

        if !verdict.factors.is_empty() {
            writeln!(f)?;
            writeln!(f, "Key Risk Factors")?;
            for factor in &verdict.factors {
                writeln!(f, "  * {}", factor)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Health Recommendations")?;
        for recommendation in self.recommendations {
            writeln!(f, "  - {}", recommendation)?;
        }

        writeln!(f)?;
        writeln!(f, "Important Disclaimer: {}", self.disclaimer)?;
        writeln!(
            f,
            "Assessed at {}",
            self.assessed_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn verdict(score: u32, has_diabetes: bool, risk_level: RiskLevel, factors: &[&str]) -> RiskVerdict {
        RiskVerdict {
            has_diabetes,
            confidence: 57.26,
            risk_level,
            factors: factors.iter().map(|f| f.to_string()).collect(),
            score,
        }
    }

    #[test]
    fn test_headline_follows_flag_not_tier() {
        let v = verdict(55, true, RiskLevel::Moderate, &["Elevated glucose levels", "High BMI"]);
        let report = AssessmentReport::new(v);

        assert_eq!(report.headline, "High Risk Detected");
        assert_eq!(report.recommendations.len(), 4);
        assert_eq!(report.recommendations[0], "Consider lifestyle modifications");
    }

    #[test]
    fn test_render_text() {
        let v = verdict(55, true, RiskLevel::Moderate, &["Elevated glucose levels", "High BMI"]);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let text = AssessmentReport::at(v, at).render_text();

        assert!(text.contains("High Risk Detected"));
        assert!(text.contains("Confidence Level: 57.3%\n"));
        assert!(text.contains("  * High BMI"));
        assert!(text.contains("  - Monitor blood sugar levels regularly"));
        assert!(text.contains("Assessed at 2024-05-01 12:00:00 UTC"));
    }

    #[test]
    fn test_low_risk_without_factors() {
        let v = verdict(0, false, RiskLevel::Low, &[]);
        let text = AssessmentReport::new(v).render_text();

        assert!(text.contains("Low Risk Detected"));
        assert!(!text.contains("Key Risk Factors"));
        assert!(text.contains("Annual health checkups recommended"));
    }

    #[test]
    fn test_json_output() {
        let v = verdict(100, true, RiskLevel::High, &["High blood pressure"]);
        let json: serde_json::Value =
            serde_json::from_str(&AssessmentReport::new(v).to_json().unwrap()).unwrap();

        assert_eq!(json["hasDiabetes"], true);
        assert_eq!(json["riskLevel"], "high");
        assert_eq!(json["score"], 100);
        assert_eq!(json["factors"][0], "High blood pressure");
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 4);
        assert!(json["assessedAt"].is_string());
    }
}
