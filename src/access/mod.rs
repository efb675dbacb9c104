//! # Access Module
//!
//! Billing/role state for an account and the single predicate that decides
//! whether it may enter the protected area:
//! - Profile and SubscriptionStatus models
//! - has_pro_access predicate
//! - profile lookup against the relational store

pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use models::{has_pro_access, Profile, SubscriptionStatus};
pub use store::{fetch_profile, fetch_profile_or_none};
