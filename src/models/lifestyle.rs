//! Lifestyle model
//!
//! Sleep, stress, hydration, diet quality and medical factors. Each key set has
//! an `Other` member so an unrecognized key survives parsing and resolves to a
//! neutral adjustment later.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Typical nightly sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    LessThanSix,
    SixToSeven,
    #[default]
    Optimal,
    #[serde(other)]
    Other,
}

impl SleepQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepQuality::LessThanSix => "less_than_six",
            SleepQuality::SixToSeven => "six_to_seven",
            SleepQuality::Optimal => "optimal",
            SleepQuality::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "less_than_six" => SleepQuality::LessThanSix,
            "six_to_seven" => SleepQuality::SixToSeven,
            "optimal" => SleepQuality::Optimal,
            _ => SleepQuality::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SleepQuality::LessThanSix => "Less than 6 hours",
            SleepQuality::SixToSeven => "6-7 hours",
            SleepQuality::Optimal => "7-9 hours",
            SleepQuality::Other => "Unspecified",
        }
    }
}

/// Perceived day-to-day stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    #[default]
    Low,
    Moderate,
    High,
    #[serde(other)]
    Other,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
            StressLevel::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => StressLevel::Low,
            "moderate" => StressLevel::Moderate,
            "high" => StressLevel::High,
            _ => StressLevel::Other,
        }
    }
}

/// Daily fluid intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterIntake {
    Low,
    Adequate,
    #[default]
    Ideal,
    #[serde(other)]
    Other,
}

impl WaterIntake {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterIntake::Low => "low",
            WaterIntake::Adequate => "adequate",
            WaterIntake::Ideal => "ideal",
            WaterIntake::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => WaterIntake::Low,
            "adequate" => WaterIntake::Adequate,
            "ideal" => WaterIntake::Ideal,
            _ => WaterIntake::Other,
        }
    }
}

/// Overall diet quality, which scales the thermic effect of food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodQuality {
    HighProtein,
    #[default]
    Balanced,
    HighProcessed,
    #[serde(other)]
    Other,
}

impl FoodQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodQuality::HighProtein => "high_protein",
            FoodQuality::Balanced => "balanced",
            FoodQuality::HighProcessed => "high_processed",
            FoodQuality::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "high_protein" => FoodQuality::HighProtein,
            "balanced" => FoodQuality::Balanced,
            "high_processed" | "processed" => FoodQuality::HighProcessed,
            _ => FoodQuality::Other,
        }
    }
}

/// Medical factors that make a deficit harder to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    /// Explicit "none of these" selection
    NoneApply,
    Hypothyroid,
    Pcos,
    InsulinResistance,
    AppetiteMeds,
    #[serde(other)]
    Other,
}

impl MedicalCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalCondition::NoneApply => "none_apply",
            MedicalCondition::Hypothyroid => "hypothyroid",
            MedicalCondition::Pcos => "pcos",
            MedicalCondition::InsulinResistance => "insulin_resistance",
            MedicalCondition::AppetiteMeds => "appetite_meds",
            MedicalCondition::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "none_apply" | "none" => MedicalCondition::NoneApply,
            "hypothyroid" | "hypothyroidism" => MedicalCondition::Hypothyroid,
            "pcos" => MedicalCondition::Pcos,
            "insulin_resistance" => MedicalCondition::InsulinResistance,
            "appetite_meds" => MedicalCondition::AppetiteMeds,
            _ => MedicalCondition::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MedicalCondition::NoneApply => "None apply",
            MedicalCondition::Hypothyroid => "Hypothyroidism",
            MedicalCondition::Pcos => "PCOS",
            MedicalCondition::InsulinResistance => "Insulin resistance",
            MedicalCondition::AppetiteMeds => "Appetite-affecting medication",
            MedicalCondition::Other => "Other",
        }
    }
}

/// Lifestyle factors for one estimate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LifestyleInput {
    #[serde(default)]
    pub sleep_quality: SleepQuality,
    #[serde(default)]
    pub stress_level: StressLevel,
    #[serde(default)]
    pub water_intake: WaterIntake,
    #[serde(default)]
    pub food_quality: FoodQuality,
    #[serde(default)]
    pub medical_conditions: BTreeSet<MedicalCondition>,
}

impl LifestyleInput {
    /// Parse a list of medical condition keys into a selection set
    pub fn parse_conditions<S: AsRef<str>>(keys: &[S]) -> BTreeSet<MedicalCondition> {
        keys.iter()
            .map(|k| k.as_ref())
            .filter(|k| !k.trim().is_empty())
            .map(MedicalCondition::from_str)
            .collect()
    }

    /// True when at least one real condition (anything but `none_apply`) is selected
    pub fn has_medical_conditions(&self) -> bool {
        self.medical_conditions
            .iter()
            .any(|c| *c != MedicalCondition::NoneApply)
    }
}
