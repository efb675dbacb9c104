//! Tests for the access module
//!
//! These tests pin down the pro-access rules:
//! - admin override
//! - paying states (active, past_due)
//! - trial window independent of subscription status
//! - fail-closed behavior for missing profiles

#[cfg(test)]
mod tests {
    use super::super::models::*;
    use chrono::{Duration, Utc};

    fn profile(
        role: Option<&str>,
        status: Option<SubscriptionStatus>,
        trial_end_offset_hours: Option<i64>,
    ) -> Profile {
        Profile {
            id: "user-123".to_string(),
            email: Some("test@example.com".to_string()),
            role: role.map(str::to_string),
            subscription_status: status,
            trial_end: trial_end_offset_hours.map(|h| Utc::now() + Duration::hours(h)),
        }
    }

    #[test]
    fn test_no_profile_has_no_access() {
        assert!(!has_pro_access(None, Utc::now()));
    }

    #[test]
    fn test_admin_always_has_access() {
        // Admin override holds regardless of billing state
        let cases = [
            profile(Some("admin"), None, None),
            profile(Some("admin"), Some(SubscriptionStatus::Canceled), None),
            profile(Some("admin"), Some(SubscriptionStatus::Active), Some(1)),
            profile(Some("admin"), Some(SubscriptionStatus::PastDue), Some(-1)),
        ];
        for p in &cases {
            assert!(has_pro_access(Some(p), Utc::now()));
        }
    }

    #[test]
    fn test_non_admin_roles_get_no_override() {
        let p = profile(Some("moderator"), None, None);
        assert!(!has_pro_access(Some(&p), Utc::now()));
    }

    #[test]
    fn test_paying_statuses_have_access() {
        let active = profile(None, Some(SubscriptionStatus::Active), None);
        let past_due = profile(None, Some(SubscriptionStatus::PastDue), None);
        assert!(has_pro_access(Some(&active), Utc::now()));
        assert!(has_pro_access(Some(&past_due), Utc::now()));
    }

    #[test]
    fn test_trialing_status_has_access() {
        let p = profile(None, Some(SubscriptionStatus::Trialing), None);
        assert!(has_pro_access(Some(&p), Utc::now()));
    }

    #[test]
    fn test_canceled_with_future_trial_end_keeps_access() {
        // The trial clause is independent of subscription_status
        let p = profile(None, Some(SubscriptionStatus::Canceled), Some(1));
        assert!(has_pro_access(Some(&p), Utc::now()));
    }

    #[test]
    fn test_canceled_without_trial_has_no_access() {
        let p = profile(None, Some(SubscriptionStatus::Canceled), None);
        assert!(!has_pro_access(Some(&p), Utc::now()));
    }

    #[test]
    fn test_expired_trial_has_no_access() {
        let p = profile(None, None, Some(-1));
        assert!(!has_pro_access(Some(&p), Utc::now()));
    }

    #[test]
    fn test_free_profile_has_no_access() {
        let p = profile(None, None, None);
        assert!(!has_pro_access(Some(&p), Utc::now()));
    }

    #[test]
    fn test_subscription_status_round_trip() {
        for status in [
            SubscriptionStatus::Active,
            SubscriptionStatus::Trialing,
            SubscriptionStatus::PastDue,
            SubscriptionStatus::Canceled,
        ] {
            assert_eq!(SubscriptionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_unrecognized_status_parses_to_none() {
        assert_eq!(SubscriptionStatus::parse("incomplete"), None);
        assert_eq!(SubscriptionStatus::parse(""), None);
    }

    #[test]
    fn test_unrecognized_status_means_no_subscription() {
        let row = ProfileRow {
            id: "user-123".to_string(),
            email: None,
            role: None,
            subscription_status: Some("unpaid".to_string()),
            trial_end: None,
        };
        let p = Profile::from(row);
        assert_eq!(p.subscription_status, None);
        assert!(!has_pro_access(Some(&p), Utc::now()));
    }
}
