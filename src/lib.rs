//! Calorie Target Estimator Library
//!
//! Personalized daily calorie targets from biometrics, activity, goal and
//! lifestyle factors.

pub mod build_info;
pub mod config;
pub mod estimator;
pub mod mcp;
pub mod models;
pub mod tools;
