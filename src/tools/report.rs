//! Markdown report for an estimate
//!
//! All number formatting for display happens here; the estimator only
//! returns plain values.

use crate::models::{EstimateRequest, EstimationResult, MedicalCondition};

/// Format an integer with en-US thousands separators (1234567 -> "1,234,567")
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// "BMR = 1,780 Calories/day"
pub fn resting_burn_summary(resting_burn: i64) -> String {
    format!("BMR = {} Calories/day", format_thousands(resting_burn))
}

/// Shown in place of the resting burn summary until biometrics are complete
pub const RESTING_BURN_PLACEHOLDER: &str = "Enter metrics above to calculate BMR.";

/// "Burn - 500 kcal" for a deficit, "Burn + 250 kcal" for a surplus
pub fn base_target_label(goal_deficit: i64) -> String {
    if goal_deficit >= 0 {
        format!("Burn - {} kcal", goal_deficit)
    } else {
        format!("Burn + {} kcal", goal_deficit.abs())
    }
}

/// Signed adjustment, with an explicit "+" for zero and positive values
pub fn signed_adjustment(adjustment: i64) -> String {
    if adjustment >= 0 {
        format!("+{}", adjustment)
    } else {
        adjustment.to_string()
    }
}

/// Inputs section, echoing what the estimate was computed from
pub fn render_inputs(request: &EstimateRequest) -> String {
    let bio = &request.biometrics;
    let mut markdown = String::from("## Inputs\n\n");

    markdown.push_str(&format!("- **Sex**: {}\n", bio.sex.display_name()));
    if let Some(age) = bio.age {
        markdown.push_str(&format!("- **Age**: {} years\n", age));
    }
    if let Some(weight) = bio.weight_kg {
        markdown.push_str(&format!("- **Weight**: {} kg\n", weight));
    }
    markdown.push_str(&format!(
        "- **Activity**: {}\n",
        request.goal.activity_level.display_name()
    ));
    markdown.push_str(&format!("- **Goal**: {}\n", request.goal.target_goal.display_name()));
    markdown.push_str(&format!(
        "- **Sleep**: {}\n",
        request.lifestyle.sleep_quality.display_name()
    ));

    let conditions: Vec<&str> = request
        .lifestyle
        .medical_conditions
        .iter()
        .filter(|c| **c != MedicalCondition::NoneApply)
        .map(|c| c.display_name())
        .collect();
    if !conditions.is_empty() {
        markdown.push_str(&format!("- **Medical**: {}\n", conditions.join(", ")));
    }

    markdown.push('\n');
    markdown
}

/// Render the estimate without a header or footer
pub fn render_body(result: &EstimationResult) -> String {
    let mut markdown = String::new();

    markdown.push_str(&format!("**{}**\n\n", resting_burn_summary(result.resting_burn)));
    markdown.push_str(&format!(
        "Your **Total Daily Burn** is about: **{} kcal**\n\n",
        format_thousands(result.total_daily_burn)
    ));
    markdown.push_str(&format!(
        "Goal Target (Base: {}): **{} kcal**\n\n",
        base_target_label(result.goal_deficit),
        format_thousands(result.base_target_calories)
    ));
    markdown.push_str(&format!(
        "Lifestyle Adjustment: **{} kcal/day**\n\n",
        signed_adjustment(result.lifestyle_adjustment)
    ));

    let b = &result.lifestyle_breakdown;
    if b.total != 0 {
        markdown.push_str("| Factor | kcal/day |\n");
        markdown.push_str("|--------|---------:|\n");
        for (label, value) in [
            ("Sleep", b.sleep),
            ("Stress", b.stress),
            ("Water", b.water),
            ("Medical", b.medical),
        ] {
            if value != 0 {
                markdown.push_str(&format!("| {} | {} |\n", label, signed_adjustment(value)));
            }
        }
        markdown.push('\n');
    }

    markdown.push_str(&format!(
        "## Final Target: {} kcal/day\n\n",
        format_thousands(result.final_target_calories)
    ));
    markdown.push_str(&format!("{}\n\n", result.timeline_message));

    if !result.tips.is_empty() {
        markdown.push_str("## Tips\n\n");
        for tip in &result.tips {
            markdown.push_str(&format!("- **{}**: {}\n", tip.title, tip.text));
        }
        markdown.push('\n');
    }

    markdown
}

/// Full report: header, inputs, estimate and a generation timestamp footer
pub fn render_estimate_markdown(request: &EstimateRequest, result: &EstimationResult) -> String {
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let mut markdown = String::from("# Daily Calorie Target\n\n");
    markdown.push_str(&render_inputs(request));
    markdown.push_str(&render_body(result));
    markdown.push_str("---\n\n");
    markdown.push_str(&format!("*Generated: {}*\n", generated_at));
    markdown
}
