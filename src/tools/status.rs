//! Status Tool
//!
//! Runtime status of the caltarget service, plus the usage guide served by
//! `estimator_instructions`.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage guide for AI assistants calling the estimator tools
pub const ESTIMATOR_INSTRUCTIONS: &str = r#"
# Calorie Target Estimator Instructions

## Tools

- `estimate_calorie_target` - full estimate: resting burn, total daily burn, goal target, lifestyle adjustment, final target, timeline and tips
- `calculate_resting_burn` - resting burn (BMR) only, with a display summary line
- `resolve_height` - convert a metric or imperial height entry to centimeters
- `caltarget_status` - build and process information

## Required Inputs

| Field | Notes |
|-------|-------|
| sex | `male` or `female` |
| age | years, 15 or older (fractions are truncated) |
| weight_kg | kilograms, greater than zero |
| height_unit | `metric` (default) or `imperial` |
| height_cm | used when height_unit is metric, at least 100 |
| height_feet + height_inches | used when height_unit is imperial, both required |

If age, weight or height is missing or out of range the response has
`ready: false` and a `not_ready` reason. This is not an error: ask the user
for the missing value and call again.

## Optional Inputs (neutral default in brackets)

| Field | Keys |
|-------|------|
| activity_level | `sedentary` [default], `light`, `moderate`, `active` |
| food_quality | `high_protein`, `balanced` [default], `high_processed` |
| target_goal | `maintenance` [default], `moderate_loss`, `aggressive_loss`, `moderate_gain` |
| sleep_quality | `less_than_six`, `six_to_seven`, `optimal` [default] |
| stress_level | `low` [default], `moderate`, `high` |
| water_intake | `low`, `adequate`, `ideal` [default] |
| medical_conditions | list of `none_apply`, `hypothyroid`, `pcos`, `insulin_resistance`, `appetite_meds` |
| format | `json` or `markdown` |

Unrecognized optional keys are treated as neutral (no adjustment).

## How the Target Is Built

1. Resting burn (Mifflin-St Jeor): 10 x weight + 6.25 x height - 5 x age, +5 male / -161 female
2. Total daily burn = resting burn x activity multiplier x food multiplier
3. Goal target = total daily burn - goal deficit (moderate_loss 500, aggressive_loss 750, moderate_gain -250)
4. Final target = goal target + lifestyle adjustment (sleep, stress, water, medical)

Lifestyle adjustments raise the target because poor sleep, high stress,
dehydration and some medical conditions make aggressive deficits harder to
sustain. Present the tips in the order returned.

## Example

```json
{
  "sex": "male",
  "age": 30,
  "weight_kg": 80,
  "height_cm": 180,
  "activity_level": "moderate",
  "target_goal": "moderate_loss"
}
```

Final target: 2,259 kcal/day, about 5 weeks to lose 5 lb.
"#;

/// Runtime status of the caltarget service
#[derive(Debug, Clone, Serialize)]
pub struct CaltargetStatus {
    pub build: BuildInfo,
    pub build_summary: String,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Estimate counters since startup
    pub estimates_served: u64,
    pub estimates_not_ready: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    estimates_served: u64,
    estimates_not_ready: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            estimates_served: 0,
            estimates_not_ready: 0,
        }
    }

    /// Count one estimate response
    pub fn record_estimate(&mut self, ready: bool) {
        if ready {
            self.estimates_served += 1;
        } else {
            self.estimates_not_ready += 1;
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> CaltargetStatus {
        let build = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CaltargetStatus {
            build_summary: build.summary(),
            build,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            estimates_served: self.estimates_served,
            estimates_not_ready: self.estimates_not_ready,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
