use crate::domain::model::{Field, MeasurementRecord, Measurements};
use crate::utils::error::{RiskError, Result};

/// Checks a raw record and converts it into numeric measurements.
///
/// Blank fields are reported before any value is parsed, so a record that is
/// both incomplete and malformed always fails with `MissingField`.
pub fn validate(record: &MeasurementRecord) -> Result<Measurements> {
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|field| record.get(*field).trim().is_empty())
    {
        return Err(RiskError::MissingField { field });
    }

    let mut values = [0.0_f64; 8];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        *slot = parse_non_negative(field, record.get(field))?;
    }

    let [pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi, diabetes_pedigree_function, age] =
        values;

    Ok(Measurements {
        pregnancies,
        glucose,
        blood_pressure,
        skin_thickness,
        insulin,
        bmi,
        diabetes_pedigree_function,
        age,
    })
}

fn parse_non_negative(field: Field, raw: &str) -> Result<f64> {
    let invalid = || RiskError::InvalidNumber {
        field,
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(value: &str) -> MeasurementRecord {
        Field::ALL
            .into_iter()
            .fold(MeasurementRecord::default(), |record, field| {
                record.with(field, value)
            })
    }

    #[test]
    fn test_valid_record() {
        let record = MeasurementRecord {
            pregnancies: "1".into(),
            glucose: "100".into(),
            blood_pressure: "70".into(),
            skin_thickness: "20".into(),
            insulin: "80".into(),
            bmi: " 22.5 ".into(),
            diabetes_pedigree_function: "0.3".into(),
            age: "25".into(),
        };

        let measurements = validate(&record).unwrap();
        assert_eq!(measurements.glucose, 100.0);
        assert_eq!(measurements.bmi, 22.5);
        assert_eq!(measurements.diabetes_pedigree_function, 0.3);
    }

    #[test]
    fn test_no_upper_bound() {
        let record = filled("1").with(Field::Glucose, "10000");
        assert_eq!(validate(&record).unwrap().glucose, 10000.0);
    }

    #[test]
    fn test_missing_field_reported_first() {
        let record = filled("abc").with(Field::Age, "   ");
        match validate(&record) {
            Err(RiskError::MissingField { field }) => assert_eq!(field, Field::Age),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_first_blank_field_in_form_order() {
        let record = filled("").with(Field::Pregnancies, "2");
        match validate(&record) {
            Err(RiskError::MissingField { field }) => assert_eq!(field, Field::Glucose),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for bad in ["abc", "-1", "inf", "NaN", "12abc", "1,5"] {
            let record = filled("5").with(Field::Insulin, bad);
            match validate(&record) {
                Err(RiskError::InvalidNumber { field, value }) => {
                    assert_eq!(field, Field::Insulin);
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidNumber for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_negative_zero_accepted() {
        let record = filled("0").with(Field::Pregnancies, "-0");
        assert!(validate(&record).is_ok());
    }
}
