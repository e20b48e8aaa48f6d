//! Build information
//!
//! `build.rs` exports a build counter and a UTC timestamp; Cargo supplies the
//! package metadata. Both end up in the startup banner and the status tool.

use serde::Serialize;

use crate::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build counter, or 0 when built without `build.rs` output
pub const BUILD_NUMBER: u64 = match option_env!("CALTARGET_BUILD_NUMBER") {
    Some(s) => digits_to_u64(s.as_bytes()),
    None => 0,
};

/// ISO 8601 build timestamp
pub const BUILD_TIMESTAMP: &str = match option_env!("CALTARGET_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Folds ASCII digits into a number; anything malformed reads as 0.
/// Needed because `str::parse` is not usable in a const initializer.
const fn digits_to_u64(bytes: &[u8]) -> u64 {
    if bytes.is_empty() {
        return 0;
    }
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return 0;
        }
        value = value * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    value
}

/// Build metadata embedded in `caltarget_status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// One-line identification, e.g. `caltarget 1.0.0 (build 42, 2026-01-01T00:00:00Z)`
    pub fn summary(&self) -> String {
        format!(
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Startup banner on stderr; stdout carries the MCP transport
pub fn print_startup_banner(config: &Config) {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  {}", info.description);
    eprintln!("  {}", info.summary());
    eprintln!(
        "  Log level: {} | Report format: {}",
        config.log_level,
        config.report_format.as_str()
    );
    eprintln!("===============================================");
}
