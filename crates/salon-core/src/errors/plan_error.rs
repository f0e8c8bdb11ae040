//! Plan and feature lookup errors.

use super::error_code::{self, SalonErrorCode};

/// Errors from strict tier/feature lookups.
///
/// The permissive entry points (`SubscriptionTier::from_billing`,
/// `PlanPermissionResolver::has_access_by_name`) never return these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("Unknown subscription tier: '{value}'")]
    UnknownTier { value: String },

    #[error("Unknown feature: '{name}'")]
    UnknownFeature { name: String },
}

impl SalonErrorCode for PlanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTier { .. } => error_code::UNKNOWN_TIER,
            Self::UnknownFeature { .. } => error_code::UNKNOWN_FEATURE,
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
