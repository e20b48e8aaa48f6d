//! Biometric model
//!
//! Sex, age, weight and height as entered by the user. Numeric fields are
//! optional so a half-filled form can still be represented.

use serde::{Deserialize, Serialize};

/// Biological sex used by the resting burn formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Unit selector for height entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    #[default]
    Metric,
    /// Feet and inches
    Imperial,
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Metric => "metric",
            HeightUnit::Imperial => "imperial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "cm" => Some(HeightUnit::Metric),
            "imperial" | "ft" | "in" | "ft_in" | "feet" => Some(HeightUnit::Imperial),
            _ => None,
        }
    }
}

/// Raw height entry: centimeters, or a feet/inches pair, selected by `unit`
///
/// Only the fields belonging to the selected unit are read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeightInput {
    pub unit: HeightUnit,
    pub cm: Option<f64>,
    pub feet: Option<f64>,
    pub inches: Option<f64>,
}

impl HeightInput {
    /// Height entered directly in centimeters
    pub fn metric(cm: f64) -> Self {
        Self {
            unit: HeightUnit::Metric,
            cm: Some(cm),
            feet: None,
            inches: None,
        }
    }

    /// Height entered as feet and inches
    pub fn imperial(feet: f64, inches: f64) -> Self {
        Self {
            unit: HeightUnit::Imperial,
            cm: None,
            feet: Some(feet),
            inches: Some(inches),
        }
    }
}

/// Body measurements feeding the resting burn formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    pub sex: Sex,
    /// Age in whole years
    pub age: Option<u32>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    pub height: HeightInput,
}

impl BiometricInput {
    /// Fully entered biometrics with a metric height
    pub fn new(sex: Sex, age: u32, weight_kg: f64, height: HeightInput) -> Self {
        Self {
            sex,
            age: Some(age),
            weight_kg: Some(weight_kg),
            height,
        }
    }
}
