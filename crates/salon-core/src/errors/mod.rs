//! Error types for the salon core.
//! One enum per concern, each mapped to a stable error code.

pub mod config_error;
pub mod error_code;
pub mod plan_error;

pub use config_error::ConfigError;
pub use error_code::SalonErrorCode;
pub use plan_error::PlanError;
