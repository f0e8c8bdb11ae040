//! PlanPermissionResolver: access decisions and upgrade paths.
//! Stateless over tiers: the caller supplies the current tier on every call.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::PlanConfig;
use crate::errors::plan_error::{PlanError, PlanResult};

use super::features::{features_for_tier, tier_allows, PlanFeature};
use super::tier::SubscriptionTier;

/// Result of a feature gate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeatureAccess {
    Allowed,
    Locked {
        feature: PlanFeature,
        current_tier: SubscriptionTier,
        required_tier: SubscriptionTier,
        upgrade_url: String,
    },
}

impl FeatureAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// The cheapest plan that unlocks the feature, if it is locked.
    pub fn upgrade_to(&self) -> Option<SubscriptionTier> {
        match self {
            Self::Allowed => None,
            Self::Locked { required_tier, .. } => Some(*required_tier),
        }
    }

    pub fn denial_message(&self) -> Option<String> {
        match self {
            Self::Locked {
                feature,
                required_tier,
                upgrade_url,
                ..
            } => Some(format!(
                "Feature '{}' requires the {} plan. Upgrade at {}",
                feature.as_str(),
                required_tier.display_name(),
                upgrade_url
            )),
            Self::Allowed => None,
        }
    }
}

/// Resolves plan permissions over the static feature catalog.
///
/// Holds only configuration; every query takes the business's current tier
/// as an argument, so one resolver can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct PlanPermissionResolver {
    upgrade_url: String,
    log_denials: bool,
}

impl PlanPermissionResolver {
    pub fn new(config: &PlanConfig) -> Self {
        Self {
            upgrade_url: config.effective_upgrade_url().to_string(),
            log_denials: config.effective_log_denials(),
        }
    }

    pub fn upgrade_url(&self) -> &str {
        &self.upgrade_url
    }

    /// True iff `current_tier` ranks at or above the feature's required tier.
    pub fn has_access(&self, current_tier: SubscriptionTier, feature: PlanFeature) -> bool {
        tier_allows(current_tier, feature)
    }

    pub fn required_tier_for(&self, feature: PlanFeature) -> SubscriptionTier {
        feature.required_tier()
    }

    /// `None` when no upgrade is needed, otherwise the minimum sufficient tier.
    ///
    /// A Starter business missing a Premium feature is pointed straight at
    /// Premium, not at the next tier up.
    pub fn upgrade_path_for(
        &self,
        current_tier: SubscriptionTier,
        feature: PlanFeature,
    ) -> Option<SubscriptionTier> {
        if self.has_access(current_tier, feature) {
            None
        } else {
            Some(self.required_tier_for(feature))
        }
    }

    /// Every feature usable at `tier`. Order follows the catalog and carries no meaning.
    pub fn features_unlocked_by(&self, tier: SubscriptionTier) -> Vec<PlanFeature> {
        features_for_tier(tier)
    }

    /// Features gained by moving from `current` to `target`. Empty for downgrades.
    pub fn newly_unlocked(
        &self,
        current: SubscriptionTier,
        target: SubscriptionTier,
    ) -> Vec<PlanFeature> {
        PlanFeature::ALL
            .iter()
            .copied()
            .filter(|f| !tier_allows(current, *f) && tier_allows(target, *f))
            .collect()
    }

    /// Full gate decision for the presentation layer.
    pub fn check_feature(
        &self,
        current_tier: SubscriptionTier,
        feature: PlanFeature,
    ) -> FeatureAccess {
        match self.upgrade_path_for(current_tier, feature) {
            None => FeatureAccess::Allowed,
            Some(required_tier) => {
                if self.log_denials {
                    debug!(
                        feature = feature.as_str(),
                        current_tier = current_tier.as_str(),
                        required_tier = required_tier.as_str(),
                        "Feature locked"
                    );
                }
                FeatureAccess::Locked {
                    feature,
                    current_tier,
                    required_tier,
                    upgrade_url: self.upgrade_url.clone(),
                }
            }
        }
    }

    // ── String boundary ────────────────────────────────────────
    //
    // Tier strings come from billing records and feature ids may come from
    // untyped callers. Unknown tiers resolve to Starter; unknown features
    // are treated as requiring the highest tier.

    /// Strict lookup of a feature id's required tier.
    pub fn required_tier_for_name(&self, feature: &str) -> PlanResult<SubscriptionTier> {
        PlanFeature::parse(feature)
            .map(|f| f.required_tier())
            .ok_or_else(|| PlanError::UnknownFeature {
                name: feature.to_string(),
            })
    }

    /// `has_access` over raw billing and feature strings. Never panics.
    pub fn has_access_by_name(&self, current_tier: Option<&str>, feature: &str) -> bool {
        let tier = SubscriptionTier::from_billing(current_tier);
        tier.is_at_least(self.required_tier_or_highest(feature))
    }

    /// `upgrade_path_for` over raw billing and feature strings. Never panics.
    pub fn upgrade_path_by_name(
        &self,
        current_tier: Option<&str>,
        feature: &str,
    ) -> Option<SubscriptionTier> {
        let tier = SubscriptionTier::from_billing(current_tier);
        let required = self.required_tier_or_highest(feature);
        if tier.is_at_least(required) {
            None
        } else {
            Some(required)
        }
    }

    fn required_tier_or_highest(&self, feature: &str) -> SubscriptionTier {
        match self.required_tier_for_name(feature) {
            Ok(tier) => tier,
            Err(e) => {
                error!(error = %e, "Unknown feature id, gating at highest tier");
                SubscriptionTier::HIGHEST
            }
        }
    }
}

impl Default for PlanPermissionResolver {
    fn default() -> Self {
        Self::new(&PlanConfig::default())
    }
}
