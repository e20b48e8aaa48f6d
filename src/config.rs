//! Runtime configuration
//!
//! Read once from environment variables at startup.

use serde::Serialize;
use thiserror::Error;

/// Environment variable for the crate's log level
pub const LOG_LEVEL_VAR: &str = "CALTARGET_LOG_LEVEL";
/// Environment variable for the default report format
pub const REPORT_FORMAT_VAR: &str = "CALTARGET_REPORT_FORMAT";

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Invalid report format '{0}' (expected json or markdown)")]
    InvalidReportFormat(String),
}

/// How estimate results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "markdown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Level for the `caltarget` tracing directive
    pub log_level: String,
    /// Format used when a caller does not pick one
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_format: ReportFormat::Json,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            let level = level.trim().to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => config.log_level = level,
                _ => return Err(ConfigError::InvalidLogLevel(level)),
            }
        }

        if let Some(format) = lookup(REPORT_FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            config.report_format = ReportFormat::from_str(&format)
                .ok_or(ConfigError::InvalidReportFormat(format))?;
        }

        Ok(config)
    }

    /// Tracing directive for this crate, e.g. `caltarget=info`
    pub fn log_directive(&self) -> String {
        format!("caltarget={}", self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_directive(), "caltarget=info");
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, "DEBUG"),
            (REPORT_FORMAT_VAR, "md"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.report_format, ReportFormat::Markdown);
        assert_eq!(config.log_directive(), "caltarget=debug");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[(LOG_LEVEL_VAR, "  ")])).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")])),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(REPORT_FORMAT_VAR, "pdf")])),
            Err(ConfigError::InvalidReportFormat("pdf".to_string()))
        );
    }
}
