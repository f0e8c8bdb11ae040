//! Configuration for the salon core.

pub mod plan_config;

pub use plan_config::PlanConfig;
