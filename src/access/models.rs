//! Profile and subscription data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Subscription lifecycle states reported by the billing provider.
///
/// Unrecognized strings in the store decode to `None` on the profile,
/// which every access rule treats the same as "no subscription".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(SubscriptionStatus::Active),
            "trialing" => Some(SubscriptionStatus::Trialing),
            "past_due" => Some(SubscriptionStatus::PastDue),
            "canceled" => Some(SubscriptionStatus::Canceled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
        }
    }
}

/// Billing/role state for one account, keyed by the auth provider's user id.
/// At most one row per user; this service only ever reads it.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub subscription_status: Option<SubscriptionStatus>,
    pub trial_end: Option<DateTime<Utc>>,
}

impl Profile {
    /// "admin" is the only recognized privileged role; anything else
    /// (including no role at all) is a regular account.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Raw database row shape, converted into `Profile` so the status string
/// is parsed in exactly one place.
#[derive(Debug, FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub subscription_status: Option<String>,
    pub trial_end: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            email: row.email,
            role: row.role,
            subscription_status: row
                .subscription_status
                .as_deref()
                .and_then(SubscriptionStatus::parse),
            trial_end: row.trial_end,
        }
    }
}

/// Whether the account currently holds pro access.
///
/// Rules, in order:
/// 1. no profile -> no access
/// 2. admin role -> access, unconditionally
/// 3. trial clause: status says trialing, or `trial_end` is still in the
///    future (independent of status - a canceled subscription with a live
///    trial window still passes)
/// 4. paying clause: status is active or past_due
///
/// `now` is passed in so the trial comparison is deterministic under test.
pub fn has_pro_access(profile: Option<&Profile>, now: DateTime<Utc>) -> bool {
    let Some(profile) = profile else {
        return false;
    };

    if profile.is_admin() {
        return true;
    }

    let is_trial_active = profile.subscription_status == Some(SubscriptionStatus::Trialing)
        || profile.trial_end.map_or(false, |end| end > now);

    let is_paying = matches!(
        profile.subscription_status,
        Some(SubscriptionStatus::Active) | Some(SubscriptionStatus::PastDue)
    );

    is_trial_active || is_paying
}
