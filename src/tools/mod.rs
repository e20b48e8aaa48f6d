//! Caltarget Tools module
//!
//! MCP tool implementations for the calorie target estimator.

pub mod estimate;
pub mod report;
pub mod status;
