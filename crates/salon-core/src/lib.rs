//! # salon-core
//!
//! Subscription tiers, the gated feature catalog, and plan permission
//! resolution for the salon platform. Pure computation over static data:
//! the current tier is always supplied by the caller.

pub mod config;
pub mod errors;
pub mod plans;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::PlanConfig;
pub use errors::{ConfigError, PlanError, SalonErrorCode};
pub use plans::{
    BusinessGate, FeatureAccess, FeatureCategory, PlanFeature, PlanPermissionResolver,
    SubscriptionTier, TierSource,
};
