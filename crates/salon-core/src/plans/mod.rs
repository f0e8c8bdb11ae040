//! Plan-based feature gating over a 4-tier subscription model.
//!
//! ## Tiers
//! - **Starter**: Booking, client profiles, email reminders, card payments, basic analytics
//! - **Pro**: + Unlimited clients, SMS, multi-staff, marketing automation, invoicing, advanced analytics
//! - **Gold**: + Custom branding, AI insights, loyalty, calendar sync, multi-location
//! - **Premium**: + WhatsApp, API access, white label, priority support, account manager
//!
//! ## Components
//! - **tier**: SubscriptionTier order and billing-value normalization
//! - **features**: 21 gated features mapped to 4 tiers
//! - **resolver**: PlanPermissionResolver: access, required tier, upgrade path, unlocked set
//! - **source**: TierSource trait and BusinessGate for per-business checks

pub mod features;
pub mod resolver;
pub mod source;
pub mod tier;

pub use features::{
    features_by_category, features_for_tier, tier_allows, FeatureCategory, PlanFeature,
};
pub use resolver::{FeatureAccess, PlanPermissionResolver};
pub use source::{BusinessGate, TierSource};
pub use tier::SubscriptionTier;
