//! Redirect-intent resolution for the post-login callback
//!
//! The intent is a UX hint only: it decides where an already-authenticated
//! user lands, never whether they are authenticated. It arrives either as a
//! `redirect_to` query parameter or as the short-lived
//! `redirect_after_login` cookie written client-side before sign-in starts.

use axum::http::{header, HeaderMap};

use crate::access::{Profile, SubscriptionStatus};

/// Cookie carrying the intent, written by the client before sign-in
pub const REDIRECT_COOKIE: &str = "redirect_after_login";

/// Where a signed-in user lands when no (or no usable) intent survives
pub const DEFAULT_LANDING: &str = "/saas";

/// Prefix marking an explicit "take me to checkout" intent
pub const CHECKOUT_PREFIX: &str = "/start-checkout";

/// Set-Cookie value that expires the intent cookie. Appended to every
/// callback response so the cookie never outlives one round-trip.
pub const CLEAR_REDIRECT_COOKIE: &str = "redirect_after_login=; Path=/; Max-Age=0; SameSite=Lax";

/// Raw value of a cookie from the request's Cookie header.
/// Values may themselves contain `=`, so only the first one splits.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in raw.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name).and_then(|v| v.strip_prefix('=')) {
            return Some(value.to_string());
        }
    }
    None
}

/// The `redirect_after_login` cookie, percent-decoded.
/// A value that fails to decode is used as-is.
pub fn redirect_cookie(headers: &HeaderMap) -> Option<String> {
    let value = cookie_value(headers, REDIRECT_COOKIE)?;
    match urlencoding::decode(&value) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(value),
    }
}

/// Initial intent: query parameter beats cookie beats the default landing.
pub fn resolve_intent(from_query: Option<&str>, from_cookie: Option<&str>) -> String {
    from_query
        .or(from_cookie)
        .unwrap_or(DEFAULT_LANDING)
        .to_string()
}

/// Final destination after the business override.
///
/// Admins and accounts with an active or trialing subscription never get
/// routed into checkout, whatever the intent said. Free users keep the
/// intent only when it explicitly targets the checkout-start path; a free
/// user who merely logged in lands on the dashboard.
///
/// Note this looks at `subscription_status` alone (not `trial_end`): a
/// free user inside a dangling trial window still gets sent to checkout
/// when they asked for it.
pub fn resolve_destination(profile: Option<&Profile>, initial: &str) -> String {
    let is_admin = profile.map_or(false, Profile::is_admin);
    let has_paid = matches!(
        profile.and_then(|p| p.subscription_status),
        Some(SubscriptionStatus::Active) | Some(SubscriptionStatus::Trialing)
    );

    if is_admin || has_paid {
        DEFAULT_LANDING.to_string()
    } else if !initial.starts_with(CHECKOUT_PREFIX) {
        DEFAULT_LANDING.to_string()
    } else {
        initial.to_string()
    }
}
