//! Billing-side tier lookup and a gate that reads it on every check.

use std::collections::HashMap;

use super::features::PlanFeature;
use super::resolver::{FeatureAccess, PlanPermissionResolver};
use super::tier::SubscriptionTier;

/// Supplies a business's raw subscription value from the billing record.
///
/// `None` means the business has no subscription data; the gate treats that
/// the same as an unrecognized value.
pub trait TierSource {
    fn current_tier(&self, business_id: &str) -> Option<String>;
}

impl TierSource for HashMap<String, String> {
    fn current_tier(&self, business_id: &str) -> Option<String> {
        self.get(business_id).cloned()
    }
}

impl<F> TierSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn current_tier(&self, business_id: &str) -> Option<String> {
        self(business_id)
    }
}

/// Resolver bound to a billing source. Nothing is cached: each call
/// re-reads the tier so plan changes apply immediately.
pub struct BusinessGate<S> {
    resolver: PlanPermissionResolver,
    source: S,
}

impl<S: TierSource> BusinessGate<S> {
    pub fn new(resolver: PlanPermissionResolver, source: S) -> Self {
        Self { resolver, source }
    }

    pub fn resolver(&self) -> &PlanPermissionResolver {
        &self.resolver
    }

    /// Current tier of a business, normalized with the Starter fallback.
    pub fn tier_of(&self, business_id: &str) -> SubscriptionTier {
        let raw = self.source.current_tier(business_id);
        SubscriptionTier::from_billing(raw.as_deref())
    }

    pub fn has_access(&self, business_id: &str, feature: PlanFeature) -> bool {
        self.resolver.has_access(self.tier_of(business_id), feature)
    }

    pub fn check_feature(&self, business_id: &str, feature: PlanFeature) -> FeatureAccess {
        self.resolver.check_feature(self.tier_of(business_id), feature)
    }

    pub fn upgrade_path_for(
        &self,
        business_id: &str,
        feature: PlanFeature,
    ) -> Option<SubscriptionTier> {
        self.resolver
            .upgrade_path_for(self.tier_of(business_id), feature)
    }

    pub fn features_unlocked(&self, business_id: &str) -> Vec<PlanFeature> {
        self.resolver.features_unlocked_by(self.tier_of(business_id))
    }
}
