//! Property-based tests for validation and scoring.

use proptest::prelude::*;

use diabetes_risk::core::scorer::{risk_level, score, MAX_CONFIDENCE, RULES};
use diabetes_risk::{
    validate, Field, FixedJitter, MeasurementRecord, Measurements, RiskError, RiskScorer,
};

fn measurements_strategy() -> impl Strategy<Value = Measurements> {
    (
        (0.0f64..20.0, 0.0f64..300.0, 0.0f64..150.0, 0.0f64..100.0),
        (0.0f64..900.0, 0.0f64..70.0, 0.0f64..2.5, 0.0f64..100.0),
    )
        .prop_map(
            |(
                (pregnancies, glucose, blood_pressure, skin_thickness),
                (insulin, bmi, diabetes_pedigree_function, age),
            )| Measurements {
                pregnancies,
                glucose,
                blood_pressure,
                skin_thickness,
                insulin,
                bmi,
                diabetes_pedigree_function,
                age,
            },
        )
}

fn to_record(m: &Measurements) -> MeasurementRecord {
    Field::ALL
        .into_iter()
        .fold(MeasurementRecord::default(), |record, field| {
            record.with(field, m.value(field).to_string())
        })
}

/// Pushes the value a rule reads past its threshold.
fn trigger(m: &mut Measurements, rule: &str) {
    match rule {
        "glucose" => m.glucose = 141.0,
        "bmi" => m.bmi = 30.5,
        "age" => m.age = 46.0,
        "pregnancies" => m.pregnancies = 4.0,
        "blood_pressure" => m.blood_pressure = 91.0,
        other => panic!("unknown rule {}", other),
    }
}

proptest! {
    #[test]
    fn non_negative_records_validate(m in measurements_strategy()) {
        let parsed = validate(&to_record(&m)).unwrap();
        prop_assert_eq!(parsed, m);
    }

    #[test]
    fn blank_field_wins_over_bad_number(
        blank in 0usize..8,
        bad in 0usize..8,
        junk in "[a-z]{1,6}",
    ) {
        prop_assume!(blank != bad);
        let mut record = to_record(&Measurements {
            pregnancies: 1.0,
            glucose: 1.0,
            blood_pressure: 1.0,
            skin_thickness: 1.0,
            insulin: 1.0,
            bmi: 1.0,
            diabetes_pedigree_function: 1.0,
            age: 1.0,
        });
        record.set(Field::ALL[blank], " ");
        record.set(Field::ALL[bad], junk);

        let is_missing = matches!(
            validate(&record),
            Err(RiskError::MissingField { field }) if field == Field::ALL[blank]
        );
        prop_assert!(is_missing);
    }

    #[test]
    fn negative_values_are_invalid(index in 0usize..8, value in -1000.0f64..-0.001) {
        let mut record = to_record(&Measurements {
            pregnancies: 2.0,
            glucose: 120.0,
            blood_pressure: 80.0,
            skin_thickness: 25.0,
            insulin: 85.0,
            bmi: 25.5,
            diabetes_pedigree_function: 0.35,
            age: 30.0,
        });
        record.set(Field::ALL[index], value.to_string());

        let is_invalid = matches!(
            validate(&record),
            Err(RiskError::InvalidNumber { field, .. }) if field == Field::ALL[index]
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn adding_a_condition_never_lowers_risk(m in measurements_strategy(), rule in 0usize..5) {
        let before = score(&m);
        let mut raised = m;
        trigger(&mut raised, RULES[rule].name);
        let after = score(&raised);

        prop_assert!(after >= before);
        prop_assert!(risk_level(after) >= risk_level(before));
    }

    #[test]
    fn confidence_stays_within_jitter_bounds(m in measurements_strategy(), unit in 0.0f64..1.0) {
        let verdict = RiskScorer::default().assess(&m, &mut FixedJitter::new(unit));
        let score = f64::from(verdict.score);

        prop_assert!(verdict.confidence <= MAX_CONFIDENCE);
        prop_assert!(verdict.confidence >= score.min(MAX_CONFIDENCE));
        prop_assert!(verdict.confidence <= (score + 20.0).min(MAX_CONFIDENCE));
    }

    #[test]
    fn factors_follow_table_order(m in measurements_strategy()) {
        let verdict = RiskScorer::default().assess(&m, &mut FixedJitter::new(0.0));
        let expected: Vec<&str> = RULES
            .iter()
            .filter(|rule| (rule.applies)(&m))
            .map(|rule| rule.factor)
            .collect();

        prop_assert_eq!(verdict.factors, expected);
    }
}
