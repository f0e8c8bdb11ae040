//! Subscription tiers, ordered Starter < Pro < Gold < Premium.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::PlanError;

/// A business's paid plan. Comparison goes through [`rank`](Self::rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Starter,
    Pro,
    Gold,
    Premium,
}

impl SubscriptionTier {
    /// All tiers, lowest first.
    pub const ALL: [SubscriptionTier; 4] = [Self::Starter, Self::Pro, Self::Gold, Self::Premium];

    pub const LOWEST: SubscriptionTier = Self::Starter;
    pub const HIGHEST: SubscriptionTier = Self::Premium;

    /// Position in the tier order, starting at 1.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Starter => 1,
            Self::Pro => 2,
            Self::Gold => 3,
            Self::Premium => 4,
        }
    }

    /// True when this tier ranks at or above `other`.
    pub fn is_at_least(self, other: SubscriptionTier) -> bool {
        self.rank() >= other.rank()
    }

    /// The tier directly below this one, if any.
    pub fn previous(self) -> Option<SubscriptionTier> {
        match self {
            Self::Starter => None,
            Self::Pro => Some(Self::Starter),
            Self::Gold => Some(Self::Pro),
            Self::Premium => Some(Self::Gold),
        }
    }

    /// The tier directly above this one, if any.
    pub fn next(self) -> Option<SubscriptionTier> {
        match self {
            Self::Starter => Some(Self::Pro),
            Self::Pro => Some(Self::Gold),
            Self::Gold => Some(Self::Premium),
            Self::Premium => None,
        }
    }

    /// Identifier as stored by billing ("starter", "pro", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Gold => "gold",
            Self::Premium => "premium",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Pro => "Pro",
            Self::Gold => "Gold",
            Self::Premium => "Premium",
        }
    }

    /// Parse a tier id. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Some(Self::Starter),
            "pro" => Some(Self::Pro),
            "gold" => Some(Self::Gold),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    /// Normalize a value read from the billing record.
    ///
    /// Missing, empty, or unrecognized values resolve to [`Starter`](Self::Starter)
    /// so a business is never granted more than it provably pays for.
    pub fn from_billing(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::LOWEST;
        };
        match Self::parse(raw) {
            Some(tier) => tier,
            None => {
                if !raw.trim().is_empty() {
                    warn!(
                        raw_tier = raw,
                        fallback = Self::LOWEST.as_str(),
                        "Unrecognized subscription tier, falling back"
                    );
                }
                Self::LOWEST
            }
        }
    }
}

impl PartialOrd for SubscriptionTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SubscriptionTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl FromStr for SubscriptionTier {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PlanError::UnknownTier {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
