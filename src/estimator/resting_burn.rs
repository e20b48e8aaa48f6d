//! Resting burn (BMR)
//!
//! Mifflin-St Jeor, metric form:
//! `10 x weight_kg + 6.25 x height_cm - 5 x age + s`, s = +5 male, -161 female.

use super::height::resolve_height_cm;
use super::tables::{
    sex_constant, AGE_COEFFICIENT, HEIGHT_COEFFICIENT, MAX_RESTING_BURN_KCAL, MIN_AGE_YEARS,
    MIN_HEIGHT_CM, WEIGHT_COEFFICIENT,
};
use super::NotReady;
use crate::models::{BiometricInput, Sex};

/// Unrounded Mifflin-St Jeor value. No validation.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    WEIGHT_COEFFICIENT * weight_kg + HEIGHT_COEFFICIENT * height_cm
        - AGE_COEFFICIENT * f64::from(age)
        + sex_constant(sex)
}

/// Biometrics that passed the gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ValidBiometrics {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Check the biometric gate: age >= 15, weight > 0, height >= 100 cm
pub(crate) fn validate(bio: &BiometricInput) -> Result<ValidBiometrics, NotReady> {
    let age = bio.age.ok_or(NotReady::MissingAge)?;
    if age < MIN_AGE_YEARS {
        return Err(NotReady::AgeBelowMinimum(age));
    }

    let weight_kg = bio
        .weight_kg
        .filter(|w| w.is_finite())
        .ok_or(NotReady::MissingWeight)?;
    if weight_kg <= 0.0 {
        return Err(NotReady::NonPositiveWeight(weight_kg));
    }

    let height_cm = resolve_height_cm(&bio.height).ok_or(NotReady::UnresolvedHeight)?;
    if height_cm < MIN_HEIGHT_CM {
        return Err(NotReady::HeightBelowMinimum(height_cm));
    }

    Ok(ValidBiometrics {
        age,
        weight_kg,
        height_cm,
    })
}

/// Resting burn in kcal/day for biometrics that already passed the gate
pub(crate) fn resting_burn_for(valid: &ValidBiometrics, sex: Sex) -> Result<i64, NotReady> {
    let raw = mifflin_st_jeor(valid.weight_kg, valid.height_cm, valid.age, sex).round();
    if raw > MAX_RESTING_BURN_KCAL {
        return Err(NotReady::RestingBurnAboveMaximum(raw));
    }
    let burn = raw as i64;
    if burn <= 0 {
        return Err(NotReady::NonPositiveRestingBurn(burn));
    }

    tracing::debug!(
        "Resting burn {} kcal (sex={}, age={}, weight={}kg, height={}cm)",
        burn,
        sex.as_str(),
        valid.age,
        valid.weight_kg,
        valid.height_cm
    );
    Ok(burn)
}

/// Resting burn in kcal/day, rounded to the nearest integer
///
/// Never returns 0: a rounded result at or below zero is reported as
/// [`NotReady::NonPositiveRestingBurn`].
pub fn calculate_resting_burn(bio: &BiometricInput) -> Result<i64, NotReady> {
    let valid = validate(bio)?;
    resting_burn_for(&valid, bio.sex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeightInput;

    fn bio(sex: Sex, age: Option<u32>, weight: Option<f64>, height: HeightInput) -> BiometricInput {
        BiometricInput {
            sex,
            age,
            weight_kg: weight,
            height,
        }
    }

    #[test]
    fn test_male_reference() {
        let input = BiometricInput::new(Sex::Male, 30, 80.0, HeightInput::metric(180.0));
        // 800 + 1125 - 150 + 5
        assert_eq!(calculate_resting_burn(&input), Ok(1780));
    }

    #[test]
    fn test_female_rounds_to_nearest() {
        let input = BiometricInput::new(Sex::Female, 25, 60.0, HeightInput::metric(165.0));
        // 600 + 1031.25 - 125 - 161 = 1345.25
        assert_eq!(calculate_resting_burn(&input), Ok(1345));

        let input = BiometricInput::new(Sex::Female, 40, 70.5, HeightInput::metric(162.0));
        // 705 + 1012.5 - 200 - 161 = 1356.5
        assert_eq!(calculate_resting_burn(&input), Ok(1357));
    }

    #[test]
    fn test_matches_formula_for_imperial_height() {
        let input = BiometricInput::new(Sex::Male, 45, 90.0, HeightInput::imperial(5.0, 10.0));
        let expected = mifflin_st_jeor(90.0, 177.8, 45, Sex::Male).round() as i64;
        assert_eq!(calculate_resting_burn(&input), Ok(expected));
    }

    #[test]
    fn test_age_gate() {
        let h = HeightInput::metric(170.0);
        assert_eq!(
            calculate_resting_burn(&bio(Sex::Male, Some(14), Some(60.0), h)),
            Err(NotReady::AgeBelowMinimum(14))
        );
        assert!(calculate_resting_burn(&bio(Sex::Male, Some(15), Some(60.0), h)).is_ok());
        assert_eq!(
            calculate_resting_burn(&bio(Sex::Male, None, Some(60.0), h)),
            Err(NotReady::MissingAge)
        );
    }

    #[test]
    fn test_weight_gate() {
        let h = HeightInput::metric(170.0);
        assert_eq!(
            calculate_resting_burn(&bio(Sex::Female, Some(30), Some(0.0), h)),
            Err(NotReady::NonPositiveWeight(0.0))
        );
        assert_eq!(
            calculate_resting_burn(&bio(Sex::Female, Some(30), None, h)),
            Err(NotReady::MissingWeight)
        );
        assert_eq!(
            calculate_resting_burn(&bio(Sex::Female, Some(30), Some(f64::NAN), h)),
            Err(NotReady::MissingWeight)
        );
    }

    #[test]
    fn test_height_gate() {
        assert_eq!(
            calculate_resting_burn(&bio(Sex::Male, Some(30), Some(70.0), HeightInput::metric(99.0))),
            Err(NotReady::UnresolvedHeight)
        );
        assert_eq!(
            calculate_resting_burn(&bio(Sex::Male, Some(30), Some(70.0), HeightInput::default())),
            Err(NotReady::UnresolvedHeight)
        );
    }

    #[test]
    fn test_imperial_below_minimum_reports_height() {
        let input = bio(Sex::Male, Some(30), Some(70.0), HeightInput::imperial(3.0, 0.0));
        match calculate_resting_burn(&input) {
            Err(NotReady::HeightBelowMinimum(cm)) => assert!((cm - 91.44).abs() < 1e-9),
            other => panic!("expected HeightBelowMinimum, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_result_is_not_ready() {
        // 10 + 625 - 500 - 161 = -26
        let input = BiometricInput::new(Sex::Female, 100, 1.0, HeightInput::metric(100.0));
        assert_eq!(
            calculate_resting_burn(&input),
            Err(NotReady::NonPositiveRestingBurn(-26))
        );
    }

    #[test]
    fn test_resting_burn_ceiling() {
        let input = BiometricInput::new(Sex::Male, 30, 1e18, HeightInput::metric(180.0));
        assert!(matches!(
            calculate_resting_burn(&input),
            Err(NotReady::RestingBurnAboveMaximum(raw)) if raw > MAX_RESTING_BURN_KCAL
        ));

        // Non-finite products land above the ceiling too
        let input = BiometricInput::new(Sex::Male, 30, f64::MAX, HeightInput::metric(180.0));
        assert!(matches!(
            calculate_resting_burn(&input),
            Err(NotReady::RestingBurnAboveMaximum(_))
        ));

        // 9,000 kg still resolves
        let input = BiometricInput::new(Sex::Male, 30, 9_000.0, HeightInput::metric(180.0));
        assert_eq!(calculate_resting_burn(&input), Ok(90_980));
    }
}
