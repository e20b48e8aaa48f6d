//! Lifestyle adjustment
//!
//! Sleep, stress and water are single selections. Medical conditions are a
//! multi-select: every selected condition other than `none_apply` adds its
//! offset, with no cap.

use super::tables::{medical_offset, sleep_offset, stress_offset, water_offset};
use crate::models::{LifestyleBreakdown, LifestyleInput, MedicalCondition};

/// Sum of offsets for a set of medical conditions
pub fn medical_adjustment<'a, I>(conditions: I) -> i64
where
    I: IntoIterator<Item = &'a MedicalCondition>,
{
    conditions
        .into_iter()
        .filter(|c| **c != MedicalCondition::NoneApply)
        .map(|c| medical_offset(*c))
        .sum()
}

/// Resolve every lifestyle offset and their total
pub fn calculate_lifestyle_adjustment(lifestyle: &LifestyleInput) -> LifestyleBreakdown {
    let sleep = sleep_offset(lifestyle.sleep_quality);
    let stress = stress_offset(lifestyle.stress_level);
    let water = water_offset(lifestyle.water_intake);
    let medical = medical_adjustment(&lifestyle.medical_conditions);

    let breakdown = LifestyleBreakdown {
        sleep,
        stress,
        water,
        medical,
        total: sleep + stress + water + medical,
    };

    tracing::debug!(
        "Lifestyle adjustment {:+} kcal (sleep {}, stress {}, water {}, medical {})",
        breakdown.total,
        sleep,
        stress,
        water,
        medical
    );
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SleepQuality, StressLevel, WaterIntake};

    fn with_conditions(conditions: &[MedicalCondition]) -> LifestyleInput {
        LifestyleInput {
            medical_conditions: conditions.iter().copied().collect(),
            ..LifestyleInput::default()
        }
    }

    #[test]
    fn test_neutral_defaults_are_zero() {
        assert_eq!(
            calculate_lifestyle_adjustment(&LifestyleInput::default()),
            LifestyleBreakdown::default()
        );
    }

    #[test]
    fn test_medical_sum() {
        let input = with_conditions(&[MedicalCondition::Hypothyroid, MedicalCondition::Pcos]);
        assert_eq!(calculate_lifestyle_adjustment(&input).medical, 250);
    }

    #[test]
    fn test_medical_sum_is_order_independent() {
        let a = [MedicalCondition::Pcos, MedicalCondition::AppetiteMeds];
        let b = [MedicalCondition::AppetiteMeds, MedicalCondition::Pcos];
        assert_eq!(medical_adjustment(&a), medical_adjustment(&b));
        assert_eq!(medical_adjustment(&a), 220);
    }

    #[test]
    fn test_none_apply_and_empty_are_zero() {
        let empty: [MedicalCondition; 0] = [];
        assert_eq!(medical_adjustment(&empty), 0);
        assert_eq!(medical_adjustment(&[MedicalCondition::NoneApply]), 0);
        // none_apply alongside a real condition does not cancel it
        assert_eq!(
            medical_adjustment(&[MedicalCondition::NoneApply, MedicalCondition::InsulinResistance]),
            80
        );
    }

    #[test]
    fn test_all_conditions_are_uncapped() {
        let input = with_conditions(&[
            MedicalCondition::Hypothyroid,
            MedicalCondition::Pcos,
            MedicalCondition::InsulinResistance,
            MedicalCondition::AppetiteMeds,
        ]);
        assert_eq!(calculate_lifestyle_adjustment(&input).total, 450);
    }

    #[test]
    fn test_full_breakdown() {
        let input = LifestyleInput {
            sleep_quality: SleepQuality::LessThanSix,
            stress_level: StressLevel::High,
            water_intake: WaterIntake::Low,
            medical_conditions: [MedicalCondition::Hypothyroid].into_iter().collect(),
            ..LifestyleInput::default()
        };
        assert_eq!(
            calculate_lifestyle_adjustment(&input),
            LifestyleBreakdown {
                sleep: 100,
                stress: 150,
                water: 75,
                medical: 150,
                total: 475,
            }
        );
    }

    #[test]
    fn test_middle_options() {
        let input = LifestyleInput {
            sleep_quality: SleepQuality::SixToSeven,
            stress_level: StressLevel::Moderate,
            water_intake: WaterIntake::Adequate,
            ..LifestyleInput::default()
        };
        assert_eq!(calculate_lifestyle_adjustment(&input).total, 150);
    }

    #[test]
    fn test_unrecognized_keys_contribute_nothing() {
        let input = LifestyleInput {
            sleep_quality: SleepQuality::Other,
            stress_level: StressLevel::Other,
            water_intake: WaterIntake::Other,
            medical_conditions: [MedicalCondition::Other].into_iter().collect(),
            ..LifestyleInput::default()
        };
        assert_eq!(calculate_lifestyle_adjustment(&input).total, 0);
    }
}
