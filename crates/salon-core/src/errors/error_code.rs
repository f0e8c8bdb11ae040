//! Stable error codes surfaced to callers outside the crate.

/// Maps an error to a stable, machine-readable code.
pub trait SalonErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const UNKNOWN_TIER: &str = "PLAN_UNKNOWN_TIER";
pub const UNKNOWN_FEATURE: &str = "PLAN_UNKNOWN_FEATURE";
pub const CONFIG_IO_ERROR: &str = "CONFIG_IO_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";
