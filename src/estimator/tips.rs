//! Advisory tips
//!
//! Tips follow a fixed order: sleep, stress, water, food quality, medical,
//! then one closing tip chosen by the sign of the total adjustment.

use super::tables::food_multiplier;
use crate::models::{LifestyleBreakdown, LifestyleInput, Tip, TipKind};

fn tip(kind: TipKind, title: &str, text: impl Into<String>) -> Tip {
    Tip {
        kind,
        title: title.to_string(),
        text: text.into(),
    }
}

/// Build the ordered tip list for a lifestyle selection and its resolved offsets
pub fn generate_tips(lifestyle: &LifestyleInput, breakdown: &LifestyleBreakdown) -> Vec<Tip> {
    let mut tips = Vec::new();

    if breakdown.sleep > 0 {
        tips.push(tip(
            TipKind::Sleep,
            "Improve Sleep",
            "Poor sleep (less than 7 hours) makes you hungrier. Aim for 7-9 hours.",
        ));
    }
    if breakdown.stress > 0 {
        tips.push(tip(
            TipKind::Stress,
            "Manage Stress",
            "High stress can cause your body to hold onto weight. Find time to relax.",
        ));
    }
    if breakdown.water > 0 {
        tips.push(tip(
            TipKind::Water,
            "Drink Water",
            "Low water intake can cause your body to mistake thirst for hunger. Increase your fluid intake.",
        ));
    }
    if food_multiplier(lifestyle.food_quality) < 1.0 {
        tips.push(tip(
            TipKind::FoodQuality,
            "Eat Better",
            "Prioritize protein and whole foods to boost the calories your body burns during digestion.",
        ));
    }
    if lifestyle.has_medical_conditions() {
        tips.push(tip(
            TipKind::Medical,
            "Doctor Check",
            "Because of your Medical Conditions, weight change may be slower. Consult a doctor or dietitian.",
        ));
    }

    match breakdown.total {
        0 => tips.push(tip(
            TipKind::GreatStart,
            "Great Start!",
            "Your lifestyle factors are currently supporting your goal. Keep it up!",
        )),
        total if total > 0 => tips.push(tip(
            TipKind::MonitorClosely,
            "Monitor Closely",
            format!(
                "Your lifestyle factors added {} kcal to your target. Focus on fixing sleep, stress, and water intake.",
                total
            ),
        )),
        _ => {}
    }

    tips
}
