use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The eight inputs collected by the assessment form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Pregnancies,
        Field::Glucose,
        Field::BloodPressure,
        Field::SkinThickness,
        Field::Insulin,
        Field::Bmi,
        Field::DiabetesPedigreeFunction,
        Field::Age,
    ];

    /// Stable key used in input files and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Pregnancies => "pregnancies",
            Field::Glucose => "glucose",
            Field::BloodPressure => "bloodPressure",
            Field::SkinThickness => "skinThickness",
            Field::Insulin => "insulin",
            Field::Bmi => "bmi",
            Field::DiabetesPedigreeFunction => "diabetesPedigreeFunction",
            Field::Age => "age",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Pregnancies => "Number of Pregnancies",
            Field::Glucose => "Glucose Level (mg/dL)",
            Field::BloodPressure => "Blood Pressure (mmHg)",
            Field::SkinThickness => "Skin Thickness (mm)",
            Field::Insulin => "Insulin (μU/mL)",
            Field::Bmi => "BMI (kg/m²)",
            Field::DiabetesPedigreeFunction => "Diabetes Pedigree Function",
            Field::Age => "Age (years)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Field::Pregnancies => "Total number of pregnancies",
            Field::Glucose => "Plasma glucose concentration (2-hour oral glucose tolerance test)",
            Field::BloodPressure => "Diastolic blood pressure",
            Field::SkinThickness => "Triceps skin fold thickness",
            Field::Insulin => "2-hour serum insulin level",
            Field::Bmi => "Body Mass Index (weight in kg / height in m²)",
            Field::DiabetesPedigreeFunction => "Genetic predisposition score (0.0 - 2.5)",
            Field::Age => "Age in years",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Pregnancies => "e.g., 2",
            Field::Glucose => "e.g., 120",
            Field::BloodPressure => "e.g., 80",
            Field::SkinThickness => "e.g., 25",
            Field::Insulin => "e.g., 85",
            Field::Bmi => "e.g., 25.5",
            Field::DiabetesPedigreeFunction => "e.g., 0.35",
            Field::Age => "e.g., 30",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form input. Every value is text as typed; nothing is checked until
/// the record goes through the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeasurementRecord {
    #[serde(deserialize_with = "text_or_number")]
    pub pregnancies: String,
    #[serde(deserialize_with = "text_or_number")]
    pub glucose: String,
    #[serde(deserialize_with = "text_or_number")]
    pub blood_pressure: String,
    #[serde(deserialize_with = "text_or_number")]
    pub skin_thickness: String,
    #[serde(deserialize_with = "text_or_number")]
    pub insulin: String,
    #[serde(deserialize_with = "text_or_number")]
    pub bmi: String,
    #[serde(deserialize_with = "text_or_number")]
    pub diabetes_pedigree_function: String,
    #[serde(deserialize_with = "text_or_number")]
    pub age: String,
}

impl MeasurementRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Pregnancies => &self.pregnancies,
            Field::Glucose => &self.glucose,
            Field::BloodPressure => &self.blood_pressure,
            Field::SkinThickness => &self.skin_thickness,
            Field::Insulin => &self.insulin,
            Field::Bmi => &self.bmi,
            Field::DiabetesPedigreeFunction => &self.diabetes_pedigree_function,
            Field::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Pregnancies => &mut self.pregnancies,
            Field::Glucose => &mut self.glucose,
            Field::BloodPressure => &mut self.blood_pressure,
            Field::SkinThickness => &mut self.skin_thickness,
            Field::Insulin => &mut self.insulin,
            Field::Bmi => &mut self.bmi,
            Field::DiabetesPedigreeFunction => &mut self.diabetes_pedigree_function,
            Field::Age => &mut self.age,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(text) => text,
        RawValue::Integer(value) => value.to_string(),
        RawValue::Float(value) => value.to_string(),
    })
}

/// A record that passed validation: every value is finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: f64,
}

impl Measurements {
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Pregnancies => self.pregnancies,
            Field::Glucose => self.glucose,
            Field::BloodPressure => self.blood_pressure,
            Field::SkinThickness => self.skin_thickness,
            Field::Insulin => self.insulin,
            Field::Bmi => self.bmi,
            Field::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            Field::Age => self.age,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskVerdict {
    pub has_diabetes: bool,
    /// Percentage in `[0, 95]`.
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub factors: Vec<String>,
    pub score: u32,
}

/// User-facing message shown when a submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_numbers_and_text() {
        let record: MeasurementRecord = serde_json::from_value(serde_json::json!({
            "glucose": 150,
            "bmi": 32.5,
            "bloodPressure": "95",
        }))
        .unwrap();

        assert_eq!(record.glucose, "150");
        assert_eq!(record.bmi, "32.5");
        assert_eq!(record.get(Field::BloodPressure), "95");
        assert_eq!(record.age, "");
    }

    #[test]
    fn test_record_set_by_field() {
        let record = MeasurementRecord::default()
            .with(Field::DiabetesPedigreeFunction, "0.35")
            .with(Field::Age, "30");

        assert_eq!(record.diabetes_pedigree_function, "0.35");
        assert_eq!(record.get(Field::Age), "30");
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert_eq!(RiskLevel::Moderate.to_string(), "moderate");
    }
}
