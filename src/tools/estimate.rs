//! Estimate MCP Tools
//!
//! Parameter parsing and response shaping for the estimator tools. Shared by
//! the MCP server and the `estimate` CLI.

use std::str::FromStr;

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ReportFormat;
use crate::estimator::{self, NotReady};
use crate::models::{
    ActivityLevel, BiometricInput, EstimateRequest, EstimationResult, FoodQuality, GoalInput,
    HeightInput, HeightUnit, LifestyleInput, Sex, SleepQuality, StressLevel, TargetGoal,
    WaterIntake,
};
use crate::tools::report;

/// Prompt returned alongside any not-ready response
pub const NOT_READY_PROMPT: &str = "Please enter your Age, Weight, and Height.";

/// Tool input errors. Distinct from `NotReady`: these reject the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid sex '{0}'. Valid options: male, female")]
    InvalidSex(String),

    #[error("Invalid height unit '{0}'. Valid options: metric, imperial")]
    InvalidHeightUnit(String),

    #[error("Invalid format '{0}'. Valid options: json, markdown")]
    InvalidFormat(String),

    #[error("Unknown argument '{0}'")]
    UnknownKey(String),
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct HeightParams {
    /// "metric" (centimeters) or "imperial" (feet + inches). Defaults to metric.
    pub height_unit: Option<String>,
    pub height_cm: Option<f64>,
    pub height_feet: Option<f64>,
    pub height_inches: Option<f64>,
}

impl HeightParams {
    pub fn to_input(&self) -> Result<HeightInput, InputError> {
        let unit = match self.height_unit.as_deref().map(str::trim) {
            None | Some("") => HeightUnit::default(),
            Some(s) => HeightUnit::from_str(s)
                .ok_or_else(|| InputError::InvalidHeightUnit(s.to_string()))?,
        };
        Ok(HeightInput {
            unit,
            cm: self.height_cm,
            feet: self.height_feet,
            inches: self.height_inches,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct BiometricParams {
    /// "male" or "female"
    pub sex: String,
    /// Age in years (15 or older). Fractions are truncated; negative values
    /// count as not entered.
    pub age: Option<f64>,
    pub weight_kg: Option<f64>,
    #[serde(flatten)]
    pub height: HeightParams,
}

impl BiometricParams {
    pub fn to_input(&self) -> Result<BiometricInput, InputError> {
        let sex = Sex::from_str(&self.sex).ok_or_else(|| InputError::InvalidSex(self.sex.clone()))?;
        Ok(BiometricInput {
            sex,
            age: self.age.and_then(whole_years),
            weight_kg: self.weight_kg,
            height: self.height.to_input()?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct EstimateParams {
    #[serde(flatten)]
    pub biometrics: BiometricParams,
    /// sedentary, light, moderate, active
    pub activity_level: Option<String>,
    /// high_protein, balanced, high_processed
    pub food_quality: Option<String>,
    /// maintenance, moderate_loss, aggressive_loss, moderate_gain
    pub target_goal: Option<String>,
    /// less_than_six, six_to_seven, optimal
    pub sleep_quality: Option<String>,
    /// low, moderate, high
    pub stress_level: Option<String>,
    /// low, adequate, ideal
    pub water_intake: Option<String>,
    /// Any of: none_apply, hypothyroid, pcos, insulin_resistance, appetite_meds
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// "json" or "markdown". Defaults to the server's configured format.
    pub format: Option<String>,
}

/// Lookup a key, falling back to the neutral default when omitted or blank
fn key_or_default<T: Default>(key: &Option<String>, parse: fn(&str) -> T) -> T {
    match key.as_deref().map(str::trim) {
        None | Some("") => T::default(),
        Some(s) => parse(s),
    }
}

impl EstimateParams {
    pub fn to_request(&self) -> Result<EstimateRequest, InputError> {
        let lifestyle = LifestyleInput {
            sleep_quality: key_or_default(&self.sleep_quality, SleepQuality::from_str),
            stress_level: key_or_default(&self.stress_level, StressLevel::from_str),
            water_intake: key_or_default(&self.water_intake, WaterIntake::from_str),
            food_quality: key_or_default(&self.food_quality, FoodQuality::from_str),
            medical_conditions: LifestyleInput::parse_conditions(&self.medical_conditions),
        };
        let goal = GoalInput {
            target_goal: key_or_default(&self.target_goal, TargetGoal::from_str),
            activity_level: key_or_default(&self.activity_level, ActivityLevel::from_str),
        };
        Ok(EstimateRequest {
            biometrics: self.biometrics.to_input()?,
            lifestyle,
            goal,
        })
    }

    /// Requested format, or `default` when none was given
    pub fn report_format(&self, default: ReportFormat) -> Result<ReportFormat, InputError> {
        match self.format.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(s) => ReportFormat::from_str(s).ok_or_else(|| InputError::InvalidFormat(s.to_string())),
        }
    }

    /// Apply one `key=value` CLI argument
    ///
    /// Numbers that fail to parse are left unset so the estimate reports
    /// not-ready instead of rejecting the call.
    pub fn apply_arg(&mut self, key: &str, value: &str) -> Result<(), InputError> {
        let value = value.trim();
        let text = || Some(value.to_string());
        match key.trim().to_lowercase().replace('-', "_").as_str() {
            "sex" | "gender" => self.biometrics.sex = value.to_string(),
            "age" => self.biometrics.age = parse_number(key, value),
            "weight" | "weight_kg" => self.biometrics.weight_kg = parse_number(key, value),
            "height_unit" | "unit" => self.biometrics.height.height_unit = text(),
            "height" | "height_cm" => self.biometrics.height.height_cm = parse_number(key, value),
            "feet" | "height_feet" => self.biometrics.height.height_feet = parse_number(key, value),
            "inches" | "height_inches" => {
                self.biometrics.height.height_inches = parse_number(key, value)
            }
            "activity" | "activity_level" => self.activity_level = text(),
            "food" | "food_quality" => self.food_quality = text(),
            "goal" | "target_goal" => self.target_goal = text(),
            "sleep" | "sleep_quality" => self.sleep_quality = text(),
            "stress" | "stress_level" => self.stress_level = text(),
            "water" | "water_intake" => self.water_intake = text(),
            "medical" | "medical_conditions" => {
                self.medical_conditions = value.split(',').map(|s| s.trim().to_string()).collect()
            }
            "format" => self.format = text(),
            _ => return Err(InputError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

/// Parse a numeric field, treating blank or malformed text as not entered
pub fn parse_number<T: FromStr>(key: &str, value: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("Ignoring non-numeric value '{}' for {}", value, key);
            None
        }
    }
}

/// Age in whole years; fractional input is truncated
fn whole_years(age: f64) -> Option<u32> {
    if age.is_finite() && age >= 0.0 && age <= u32::MAX as f64 {
        Some(age.trunc() as u32)
    } else {
        tracing::debug!("Ignoring out-of-range age {}", age);
        None
    }
}

// ============================================================================
// Response Structs
// ============================================================================

/// Response for estimate_calorie_target
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_ready: Option<NotReady>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EstimationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl EstimateResponse {
    fn not_ready(reason: NotReady) -> Self {
        Self {
            ready: false,
            message: Some(format!("{} ({})", NOT_READY_PROMPT, reason)),
            not_ready: Some(reason),
            result: None,
            markdown: None,
        }
    }
}

/// Response for resolve_height
#[derive(Debug, Serialize)]
pub struct ResolveHeightResponse {
    pub resolved: bool,
    pub height_cm: Option<f64>,
}

/// Response for calculate_resting_burn
#[derive(Debug, Serialize)]
pub struct RestingBurnResponse {
    pub ready: bool,
    pub resting_burn: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_ready: Option<NotReady>,
    pub summary: String,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Run a full estimate and shape the response
pub fn estimate_calorie_target(
    params: &EstimateParams,
    default_format: ReportFormat,
) -> Result<EstimateResponse, InputError> {
    let format = params.report_format(default_format)?;
    let request = params.to_request()?;

    let response = match estimator::estimate_request(&request) {
        Ok(result) => {
            tracing::debug!(
                "Estimate ready: final target {} kcal",
                result.final_target_calories
            );
            let markdown = match format {
                ReportFormat::Markdown => Some(report::render_estimate_markdown(&request, &result)),
                ReportFormat::Json => None,
            };
            EstimateResponse {
                ready: true,
                not_ready: None,
                message: None,
                result: Some(result),
                markdown,
            }
        }
        Err(reason) => EstimateResponse::not_ready(reason),
    };
    Ok(response)
}

pub fn resolve_height(params: &HeightParams) -> Result<ResolveHeightResponse, InputError> {
    let height_cm = estimator::resolve_height_cm(&params.to_input()?);
    Ok(ResolveHeightResponse {
        resolved: height_cm.is_some(),
        height_cm,
    })
}

pub fn calculate_resting_burn(params: &BiometricParams) -> Result<RestingBurnResponse, InputError> {
    let response = match estimator::calculate_resting_burn(&params.to_input()?) {
        Ok(resting_burn) => RestingBurnResponse {
            ready: true,
            resting_burn: Some(resting_burn),
            not_ready: None,
            summary: report::resting_burn_summary(resting_burn),
        },
        Err(reason) => RestingBurnResponse {
            ready: false,
            resting_burn: None,
            not_ready: Some(reason),
            summary: report::RESTING_BURN_PLACEHOLDER.to_string(),
        },
    };
    Ok(response)
}
