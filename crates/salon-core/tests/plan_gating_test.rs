//! Plan gating tests: tier catalog, access decisions, upgrade paths,
//! the raw-string boundary, and per-business gates over a billing source.

use std::cell::RefCell;
use std::collections::HashMap;

use salon_core::plans::{features_by_category, features_for_tier, tier_allows};
use salon_core::{
    BusinessGate, FeatureAccess, FeatureCategory, PlanConfig, PlanError, PlanFeature,
    PlanPermissionResolver, SalonErrorCode, SubscriptionTier,
};

fn resolver() -> PlanPermissionResolver {
    PlanPermissionResolver::default()
}

// ============================================================
// Catalog
// ============================================================

#[test]
fn catalog_has_21_features_split_across_tiers() {
    assert_eq!(PlanFeature::ALL.len(), 21);
    assert_eq!(
        PlanFeature::STARTER.len()
            + PlanFeature::PRO.len()
            + PlanFeature::GOLD.len()
            + PlanFeature::PREMIUM.len(),
        PlanFeature::ALL.len()
    );
}

#[test]
fn tier_arrays_match_required_tier() {
    let groups: [(&[PlanFeature], SubscriptionTier); 4] = [
        (&PlanFeature::STARTER, SubscriptionTier::Starter),
        (&PlanFeature::PRO, SubscriptionTier::Pro),
        (&PlanFeature::GOLD, SubscriptionTier::Gold),
        (&PlanFeature::PREMIUM, SubscriptionTier::Premium),
    ];
    for (features, tier) in groups {
        for feature in features {
            assert_eq!(feature.required_tier(), tier, "{:?}", feature);
        }
    }
}

#[test]
fn example_features_have_expected_tiers() {
    assert_eq!(PlanFeature::UnlimitedClients.required_tier(), SubscriptionTier::Pro);
    assert_eq!(PlanFeature::CustomBranding.required_tier(), SubscriptionTier::Gold);
    assert_eq!(
        PlanFeature::WhatsappIntegration.required_tier(),
        SubscriptionTier::Premium
    );
}

#[test]
fn feature_str_roundtrip() {
    for feature in &PlanFeature::ALL {
        assert_eq!(PlanFeature::parse(feature.as_str()), Some(*feature));
    }
    assert_eq!(PlanFeature::parse("teleportation"), None);
}

#[test]
fn feature_labels_nonempty() {
    for feature in &PlanFeature::ALL {
        assert!(!feature.name().is_empty(), "{:?} has empty name", feature);
        assert!(
            !feature.description().is_empty(),
            "{:?} has empty description",
            feature
        );
    }
}

#[test]
fn unlocked_counts_grow_per_tier() {
    let counts: Vec<usize> = SubscriptionTier::ALL
        .iter()
        .map(|t| features_for_tier(*t).len())
        .collect();
    assert_eq!(counts, vec![5, 11, 16, 21]);
}

#[test]
fn categories_group_unlocked_features() {
    let grouped = features_by_category(SubscriptionTier::Starter);
    assert_eq!(
        grouped.get(&FeatureCategory::Booking),
        Some(&vec![PlanFeature::OnlineBooking])
    );
    assert!(!grouped.contains_key(&FeatureCategory::Branding));
    assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), 5);

    let premium = features_by_category(SubscriptionTier::Premium);
    assert_eq!(
        premium.get(&FeatureCategory::Branding),
        Some(&vec![PlanFeature::CustomBranding, PlanFeature::WhiteLabel])
    );
}

// ============================================================
// Concrete access scenarios
// ============================================================

#[test]
fn starter_locked_out_of_unlimited_clients() {
    let r = resolver();
    assert!(!r.has_access(SubscriptionTier::Starter, PlanFeature::UnlimitedClients));
    assert_eq!(
        r.upgrade_path_for(SubscriptionTier::Starter, PlanFeature::UnlimitedClients),
        Some(SubscriptionTier::Pro)
    );
}

#[test]
fn gold_includes_pro_features() {
    let r = resolver();
    assert!(r.has_access(SubscriptionTier::Gold, PlanFeature::UnlimitedClients));
    assert_eq!(
        r.upgrade_path_for(SubscriptionTier::Gold, PlanFeature::UnlimitedClients),
        None
    );
}

#[test]
fn pro_upgrades_to_gold_for_branding() {
    let r = resolver();
    assert!(!r.has_access(SubscriptionTier::Pro, PlanFeature::CustomBranding));
    assert_eq!(
        r.upgrade_path_for(SubscriptionTier::Pro, PlanFeature::CustomBranding),
        Some(SubscriptionTier::Gold)
    );
}

#[test]
fn premium_gets_whatsapp() {
    assert!(resolver().has_access(SubscriptionTier::Premium, PlanFeature::WhatsappIntegration));
}

#[test]
fn pro_unlocked_set_excludes_gold_and_premium() {
    let unlocked = resolver().features_unlocked_by(SubscriptionTier::Pro);
    assert!(unlocked.contains(&PlanFeature::UnlimitedClients));
    assert!(!unlocked.contains(&PlanFeature::CustomBranding));
    assert!(!unlocked.contains(&PlanFeature::WhatsappIntegration));
}

#[test]
fn unrecognized_tier_treated_as_starter() {
    let r = resolver();
    assert!(!r.has_access_by_name(Some("bogus-tier"), "unlimited_clients"));
    assert!(!r.has_access_by_name(None, "unlimited_clients"));
    assert!(r.has_access_by_name(Some("bogus-tier"), "online_booking"));
    assert_eq!(
        r.upgrade_path_by_name(Some("bogus-tier"), "unlimited_clients"),
        Some(SubscriptionTier::Pro)
    );
}

#[test]
fn premium_covers_whole_catalog() {
    let r = resolver();
    for feature in &PlanFeature::ALL {
        assert!(
            tier_allows(SubscriptionTier::Premium, *feature),
            "Premium should allow {:?}",
            feature
        );
        assert_eq!(r.upgrade_path_for(SubscriptionTier::Premium, *feature), None);
    }
}

#[test]
fn newly_unlocked_lists_upgrade_gains() {
    let gained = resolver().newly_unlocked(SubscriptionTier::Starter, SubscriptionTier::Gold);
    assert_eq!(gained.len(), PlanFeature::PRO.len() + PlanFeature::GOLD.len());
    assert!(gained.contains(&PlanFeature::SmsMessaging));
    assert!(gained.contains(&PlanFeature::AiInsights));
    assert!(!gained.contains(&PlanFeature::OnlineBooking));
    assert!(!gained.contains(&PlanFeature::ApiAccess));
}

// ============================================================
// String boundary
// ============================================================

#[test]
fn billing_strings_are_case_insensitive() {
    let r = resolver();
    assert!(r.has_access_by_name(Some("GOLD"), "custom_branding"));
    assert!(r.has_access_by_name(Some(" premium "), "api_access"));
}

#[test]
fn unknown_feature_fails_closed() {
    let r = resolver();
    for tier in ["starter", "pro", "gold"] {
        assert!(!r.has_access_by_name(Some(tier), "hover_boards"));
        assert_eq!(
            r.upgrade_path_by_name(Some(tier), "hover_boards"),
            Some(SubscriptionTier::Premium)
        );
    }
    assert!(r.has_access_by_name(Some("premium"), "hover_boards"));
    assert_eq!(r.upgrade_path_by_name(Some("premium"), "hover_boards"), None);
}

#[test]
fn strict_lookup_reports_unknown_feature() {
    let r = resolver();
    assert_eq!(
        r.required_tier_for_name("custom_branding"),
        Ok(SubscriptionTier::Gold)
    );
    let err = r.required_tier_for_name("hover_boards").unwrap_err();
    assert_eq!(
        err,
        PlanError::UnknownFeature {
            name: "hover_boards".to_string()
        }
    );
    assert_eq!(err.error_code(), "PLAN_UNKNOWN_FEATURE");
}

// ============================================================
// Decisions for the presentation layer
// ============================================================

#[test]
fn every_check_returns_a_decision() {
    let r = resolver();
    for tier in SubscriptionTier::ALL {
        for feature in PlanFeature::ALL {
            match r.check_feature(tier, feature) {
                FeatureAccess::Allowed => assert!(r.has_access(tier, feature)),
                FeatureAccess::Locked { required_tier, current_tier, .. } => {
                    assert_eq!(current_tier, tier);
                    assert_eq!(required_tier, feature.required_tier());
                }
            }
        }
    }
}

#[test]
fn locked_decision_serializes_for_ui() {
    let access = resolver().check_feature(SubscriptionTier::Starter, PlanFeature::SmsMessaging);
    let json = serde_json::to_value(&access).unwrap();
    assert_eq!(json["status"], "locked");
    assert_eq!(json["feature"], "sms_messaging");
    assert_eq!(json["current_tier"], "starter");
    assert_eq!(json["required_tier"], "pro");

    let back: FeatureAccess = serde_json::from_value(json).unwrap();
    assert_eq!(back, access);
}

#[test]
fn config_file_sets_upgrade_link() {
    let config = PlanConfig::from_toml(r#"upgrade_url = "https://salon.test/billing""#).unwrap();
    let r = PlanPermissionResolver::new(&config);
    let msg = r
        .check_feature(SubscriptionTier::Starter, PlanFeature::WhatsappIntegration)
        .denial_message()
        .unwrap();
    assert_eq!(
        msg,
        "Feature 'whatsapp_integration' requires the Premium plan. Upgrade at https://salon.test/billing"
    );
}

// ============================================================
// BusinessGate over a billing source
// ============================================================

#[test]
fn gate_reads_tier_from_map() {
    let mut billing = HashMap::new();
    billing.insert("biz-gold".to_string(), "gold".to_string());
    billing.insert("biz-legacy".to_string(), "platinum-2019".to_string());

    let gate = BusinessGate::new(resolver(), billing);
    assert_eq!(gate.tier_of("biz-gold"), SubscriptionTier::Gold);
    assert_eq!(gate.tier_of("biz-legacy"), SubscriptionTier::Starter);
    assert_eq!(gate.tier_of("biz-missing"), SubscriptionTier::Starter);

    assert!(gate.has_access("biz-gold", PlanFeature::CustomBranding));
    assert!(!gate.has_access("biz-legacy", PlanFeature::UnlimitedClients));
    assert_eq!(
        gate.upgrade_path_for("biz-missing", PlanFeature::AiInsights),
        Some(SubscriptionTier::Gold)
    );
    assert_eq!(gate.features_unlocked("biz-gold").len(), 16);
}

#[test]
fn gate_rereads_tier_on_every_check() {
    let current = RefCell::new("starter".to_string());
    let gate = BusinessGate::new(resolver(), |_: &str| Some(current.borrow().clone()));

    assert!(!gate.check_feature("biz-1", PlanFeature::SmsMessaging).is_allowed());
    *current.borrow_mut() = "pro".to_string();
    assert!(gate.check_feature("biz-1", PlanFeature::SmsMessaging).is_allowed());
    assert_eq!(gate.resolver().upgrade_url(), PlanConfig::default().effective_upgrade_url());
}

#[test]
fn tracing_init_is_repeatable() {
    salon_core::tracing::init_tracing();
    salon_core::tracing::init_tracing();
    // Fallback and fail-closed paths log instead of panicking.
    assert!(!resolver().has_access_by_name(Some("legacy-gold"), "nonexistent_feature"));
}
