//! Goal model
//!
//! Target goal and activity level.

use serde::{Deserialize, Serialize};

/// Day-to-day activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    #[serde(other)]
    Other,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" | "lightly_active" => ActivityLevel::Light,
            "moderate" | "moderately_active" => ActivityLevel::Moderate,
            "active" | "very_active" => ActivityLevel::Active,
            _ => ActivityLevel::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (3-5 days/week)",
            ActivityLevel::Active => "Active (6-7 days/week)",
            ActivityLevel::Other => "Unspecified",
        }
    }
}

/// Broad direction of a goal, derived from its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Loss,
    Gain,
    Maintenance,
}

/// Target goal
///
/// Unrecognized keys are kept verbatim in `Other` so the category can still be
/// read off the key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetGoal {
    #[default]
    Maintenance,
    ModerateLoss,
    AggressiveLoss,
    ModerateGain,
    Other(String),
}

impl TargetGoal {
    pub fn as_str(&self) -> &str {
        match self {
            TargetGoal::Maintenance => "maintenance",
            TargetGoal::ModerateLoss => "moderate_loss",
            TargetGoal::AggressiveLoss => "aggressive_loss",
            TargetGoal::ModerateGain => "moderate_gain",
            TargetGoal::Other(key) => key,
        }
    }

    pub fn from_str(s: &str) -> Self {
        let key = s.trim().to_lowercase().replace('-', "_");
        match key.as_str() {
            "maintenance" | "maintain" => TargetGoal::Maintenance,
            "moderate_loss" => TargetGoal::ModerateLoss,
            "aggressive_loss" => TargetGoal::AggressiveLoss,
            "moderate_gain" => TargetGoal::ModerateGain,
            _ => TargetGoal::Other(key),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            TargetGoal::Maintenance => "Maintain weight",
            TargetGoal::ModerateLoss => "Moderate loss",
            TargetGoal::AggressiveLoss => "Aggressive loss",
            TargetGoal::ModerateGain => "Moderate gain",
            TargetGoal::Other(key) => key,
        }
    }

    /// Category by key name: anything containing "loss" is a loss goal,
    /// then anything containing "gain" is a gain goal.
    pub fn category(&self) -> GoalCategory {
        let key = self.as_str();
        if key.contains("loss") {
            GoalCategory::Loss
        } else if key.contains("gain") {
            GoalCategory::Gain
        } else {
            GoalCategory::Maintenance
        }
    }
}

impl From<String> for TargetGoal {
    fn from(s: String) -> Self {
        TargetGoal::from_str(&s)
    }
}

impl From<TargetGoal> for String {
    fn from(goal: TargetGoal) -> Self {
        goal.as_str().to_string()
    }
}

/// Goal selection for one estimate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalInput {
    #[serde(default)]
    pub target_goal: TargetGoal,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_category_from_key() {
        assert_eq!(TargetGoal::ModerateLoss.category(), GoalCategory::Loss);
        assert_eq!(TargetGoal::AggressiveLoss.category(), GoalCategory::Loss);
        assert_eq!(TargetGoal::ModerateGain.category(), GoalCategory::Gain);
        assert_eq!(TargetGoal::Maintenance.category(), GoalCategory::Maintenance);
    }

    #[test]
    fn test_unknown_goal_keeps_key_for_category() {
        let goal = TargetGoal::from_str("slow_loss");
        assert_eq!(goal, TargetGoal::Other("slow_loss".to_string()));
        assert_eq!(goal.category(), GoalCategory::Loss);

        let goal = TargetGoal::from_str("lean-gain");
        assert_eq!(goal.as_str(), "lean_gain");
        assert_eq!(goal.category(), GoalCategory::Gain);

        assert_eq!(TargetGoal::from_str("recomp").category(), GoalCategory::Maintenance);
    }

    #[test]
    fn test_goal_serde_uses_key() {
        let json = serde_json::to_string(&TargetGoal::AggressiveLoss).unwrap();
        assert_eq!(json, "\"aggressive_loss\"");

        let parsed: TargetGoal = serde_json::from_str("\"moderate_gain\"").unwrap();
        assert_eq!(parsed, TargetGoal::ModerateGain);
    }

    #[test]
    fn test_activity_level_from_str() {
        assert_eq!(ActivityLevel::from_str("Moderate"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_str("very_active"), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_str("athlete"), ActivityLevel::Other);
    }
}
