//! 21 gated salon features mapped to 4 subscription tiers.
//!
//! Starter: Online booking, client profiles, email reminders, card payments, basic analytics
//! Pro: Unlimited clients, SMS, multi-staff, marketing automation, invoicing, advanced analytics
//! Gold: Custom branding, AI insights, loyalty, calendar sync, multi-location
//! Premium: WhatsApp, API access, white label, priority support, dedicated account manager

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::tier::SubscriptionTier;

/// Informational grouping for plan comparison screens. Never used in access decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    Booking,
    Clients,
    Messaging,
    Payments,
    Analytics,
    Team,
    Branding,
    Integrations,
    Support,
}

impl FeatureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Clients => "clients",
            Self::Messaging => "messaging",
            Self::Payments => "payments",
            Self::Analytics => "analytics",
            Self::Team => "team",
            Self::Branding => "branding",
            Self::Integrations => "integrations",
            Self::Support => "support",
        }
    }
}

/// All 21 gated features in the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanFeature {
    // ── Starter (5) ────────────────────────────────────────────
    OnlineBooking,
    ClientProfiles,
    EmailReminders,
    CardPayments,
    BasicAnalytics,

    // ── Pro (6) ────────────────────────────────────────────────
    UnlimitedClients,
    SmsMessaging,
    MultiStaff,
    MarketingAutomation,
    Invoicing,
    AdvancedAnalytics,

    // ── Gold (5) ───────────────────────────────────────────────
    CustomBranding,
    AiInsights,
    LoyaltyProgram,
    CalendarSync,
    MultiLocation,

    // ── Premium (5) ────────────────────────────────────────────
    WhatsappIntegration,
    ApiAccess,
    WhiteLabel,
    PrioritySupport,
    DedicatedAccountManager,
}

impl PlanFeature {
    /// All 21 features, grouped by the tier that introduces them.
    pub const ALL: [PlanFeature; 21] = [
        Self::OnlineBooking,
        Self::ClientProfiles,
        Self::EmailReminders,
        Self::CardPayments,
        Self::BasicAnalytics,
        Self::UnlimitedClients,
        Self::SmsMessaging,
        Self::MultiStaff,
        Self::MarketingAutomation,
        Self::Invoicing,
        Self::AdvancedAnalytics,
        Self::CustomBranding,
        Self::AiInsights,
        Self::LoyaltyProgram,
        Self::CalendarSync,
        Self::MultiLocation,
        Self::WhatsappIntegration,
        Self::ApiAccess,
        Self::WhiteLabel,
        Self::PrioritySupport,
        Self::DedicatedAccountManager,
    ];

    /// Features included from the Starter plan up (5).
    pub const STARTER: [PlanFeature; 5] = [
        Self::OnlineBooking,
        Self::ClientProfiles,
        Self::EmailReminders,
        Self::CardPayments,
        Self::BasicAnalytics,
    ];

    /// Features introduced at Pro (starter + 6 = 11 total).
    pub const PRO: [PlanFeature; 6] = [
        Self::UnlimitedClients,
        Self::SmsMessaging,
        Self::MultiStaff,
        Self::MarketingAutomation,
        Self::Invoicing,
        Self::AdvancedAnalytics,
    ];

    /// Features introduced at Gold (pro + 5 = 16 total).
    pub const GOLD: [PlanFeature; 5] = [
        Self::CustomBranding,
        Self::AiInsights,
        Self::LoyaltyProgram,
        Self::CalendarSync,
        Self::MultiLocation,
    ];

    /// Features introduced at Premium (gold + 5 = 21 total).
    pub const PREMIUM: [PlanFeature; 5] = [
        Self::WhatsappIntegration,
        Self::ApiAccess,
        Self::WhiteLabel,
        Self::PrioritySupport,
        Self::DedicatedAccountManager,
    ];

    /// Minimum tier required for this feature.
    pub fn required_tier(&self) -> SubscriptionTier {
        match self {
            Self::OnlineBooking
            | Self::ClientProfiles
            | Self::EmailReminders
            | Self::CardPayments
            | Self::BasicAnalytics => SubscriptionTier::Starter,

            Self::UnlimitedClients
            | Self::SmsMessaging
            | Self::MultiStaff
            | Self::MarketingAutomation
            | Self::Invoicing
            | Self::AdvancedAnalytics => SubscriptionTier::Pro,

            Self::CustomBranding
            | Self::AiInsights
            | Self::LoyaltyProgram
            | Self::CalendarSync
            | Self::MultiLocation => SubscriptionTier::Gold,

            Self::WhatsappIntegration
            | Self::ApiAccess
            | Self::WhiteLabel
            | Self::PrioritySupport
            | Self::DedicatedAccountManager => SubscriptionTier::Premium,
        }
    }

    pub fn category(&self) -> FeatureCategory {
        match self {
            Self::OnlineBooking | Self::CalendarSync => FeatureCategory::Booking,
            Self::ClientProfiles | Self::UnlimitedClients | Self::LoyaltyProgram => {
                FeatureCategory::Clients
            }
            Self::EmailReminders
            | Self::SmsMessaging
            | Self::MarketingAutomation
            | Self::WhatsappIntegration => FeatureCategory::Messaging,
            Self::CardPayments | Self::Invoicing => FeatureCategory::Payments,
            Self::BasicAnalytics | Self::AdvancedAnalytics | Self::AiInsights => {
                FeatureCategory::Analytics
            }
            Self::MultiStaff | Self::MultiLocation => FeatureCategory::Team,
            Self::CustomBranding | Self::WhiteLabel => FeatureCategory::Branding,
            Self::ApiAccess => FeatureCategory::Integrations,
            Self::PrioritySupport | Self::DedicatedAccountManager => FeatureCategory::Support,
        }
    }

    /// Feature id as string (for config, logging, the presentation layer).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnlineBooking => "online_booking",
            Self::ClientProfiles => "client_profiles",
            Self::EmailReminders => "email_reminders",
            Self::CardPayments => "card_payments",
            Self::BasicAnalytics => "basic_analytics",
            Self::UnlimitedClients => "unlimited_clients",
            Self::SmsMessaging => "sms_messaging",
            Self::MultiStaff => "multi_staff",
            Self::MarketingAutomation => "marketing_automation",
            Self::Invoicing => "invoicing",
            Self::AdvancedAnalytics => "advanced_analytics",
            Self::CustomBranding => "custom_branding",
            Self::AiInsights => "ai_insights",
            Self::LoyaltyProgram => "loyalty_program",
            Self::CalendarSync => "calendar_sync",
            Self::MultiLocation => "multi_location",
            Self::WhatsappIntegration => "whatsapp_integration",
            Self::ApiAccess => "api_access",
            Self::WhiteLabel => "white_label",
            Self::PrioritySupport => "priority_support",
            Self::DedicatedAccountManager => "dedicated_account_manager",
        }
    }

    /// Parse feature from its id.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "online_booking" => Some(Self::OnlineBooking),
            "client_profiles" => Some(Self::ClientProfiles),
            "email_reminders" => Some(Self::EmailReminders),
            "card_payments" => Some(Self::CardPayments),
            "basic_analytics" => Some(Self::BasicAnalytics),
            "unlimited_clients" => Some(Self::UnlimitedClients),
            "sms_messaging" => Some(Self::SmsMessaging),
            "multi_staff" => Some(Self::MultiStaff),
            "marketing_automation" => Some(Self::MarketingAutomation),
            "invoicing" => Some(Self::Invoicing),
            "advanced_analytics" => Some(Self::AdvancedAnalytics),
            "custom_branding" => Some(Self::CustomBranding),
            "ai_insights" => Some(Self::AiInsights),
            "loyalty_program" => Some(Self::LoyaltyProgram),
            "calendar_sync" => Some(Self::CalendarSync),
            "multi_location" => Some(Self::MultiLocation),
            "whatsapp_integration" => Some(Self::WhatsappIntegration),
            "api_access" => Some(Self::ApiAccess),
            "white_label" => Some(Self::WhiteLabel),
            "priority_support" => Some(Self::PrioritySupport),
            "dedicated_account_manager" => Some(Self::DedicatedAccountManager),
            _ => None,
        }
    }

    /// Short label for plan cards.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnlineBooking => "Online booking",
            Self::ClientProfiles => "Client profiles",
            Self::EmailReminders => "Email reminders",
            Self::CardPayments => "Card payments",
            Self::BasicAnalytics => "Basic analytics",
            Self::UnlimitedClients => "Unlimited clients",
            Self::SmsMessaging => "SMS messaging",
            Self::MultiStaff => "Multi-staff management",
            Self::MarketingAutomation => "Marketing automation",
            Self::Invoicing => "Invoicing",
            Self::AdvancedAnalytics => "Advanced analytics",
            Self::CustomBranding => "Custom branding",
            Self::AiInsights => "AI insights",
            Self::LoyaltyProgram => "Loyalty program",
            Self::CalendarSync => "Calendar sync",
            Self::MultiLocation => "Multi-location",
            Self::WhatsappIntegration => "WhatsApp integration",
            Self::ApiAccess => "API access",
            Self::WhiteLabel => "White label",
            Self::PrioritySupport => "Priority support",
            Self::DedicatedAccountManager => "Dedicated account manager",
        }
    }

    /// Human-readable description for upgrade prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Self::OnlineBooking => "Let clients book appointments from your booking page",
            Self::ClientProfiles => "Client records with visit history and notes (up to 100 clients)",
            Self::EmailReminders => "Automatic appointment reminders by email",
            Self::CardPayments => "Take card payments at checkout",
            Self::BasicAnalytics => "Revenue and booking totals for the current month",
            Self::UnlimitedClients => "No limit on the size of your client roster",
            Self::SmsMessaging => "Text message reminders and two-way SMS",
            Self::MultiStaff => "Staff schedules, permissions and per-stylist calendars",
            Self::MarketingAutomation => "Rebooking nudges, birthday offers and win-back campaigns",
            Self::Invoicing => "Itemized invoices and receipts sent to clients",
            Self::AdvancedAnalytics => "Retention, utilization and service-mix dashboards",
            Self::CustomBranding => "Your logo, colors and domain on the booking page",
            Self::AiInsights => "AI-generated revenue and retention insights",
            Self::LoyaltyProgram => "Points, rewards and referral tracking",
            Self::CalendarSync => "Two-way sync with Google and Outlook calendars",
            Self::MultiLocation => "Manage several salon locations from one account",
            Self::WhatsappIntegration => "Reminders and client chat over WhatsApp",
            Self::ApiAccess => "REST API and webhooks for custom integrations",
            Self::WhiteLabel => "Remove platform branding from client-facing pages",
            Self::PrioritySupport => "Priority phone and chat support",
            Self::DedicatedAccountManager => "A named account manager for onboarding and growth",
        }
    }
}

/// Check if a tier grants access to a feature.
pub fn tier_allows(tier: SubscriptionTier, feature: PlanFeature) -> bool {
    tier.rank() >= feature.required_tier().rank()
}

/// Get all features available at a given tier, in catalog order.
pub fn features_for_tier(tier: SubscriptionTier) -> Vec<PlanFeature> {
    PlanFeature::ALL
        .iter()
        .copied()
        .filter(|f| tier_allows(tier, *f))
        .collect()
}

/// Features available at a tier, grouped by category for plan comparison screens.
pub fn features_by_category(
    tier: SubscriptionTier,
) -> FxHashMap<FeatureCategory, Vec<PlanFeature>> {
    let mut grouped: FxHashMap<FeatureCategory, Vec<PlanFeature>> = FxHashMap::default();
    for feature in features_for_tier(tier) {
        grouped.entry(feature.category()).or_default().push(feature);
    }
    grouped
}
