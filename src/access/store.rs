//! Profile lookup against the relational store

use sqlx::SqlitePool;
use tracing::{debug, error};

use super::models::{Profile, ProfileRow};

/// Select the profile row for a user id. At most one row exists.
///
/// Lookup errors are logged and surfaced; callers in the access paths
/// must treat them identically to "no profile" so failures stay closed.
pub async fn fetch_profile(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<Profile>, sqlx::Error> {
    let row: Option<ProfileRow> = sqlx::query_as::<_, ProfileRow>(
        "SELECT id, email, role, subscription_status, trial_end FROM profiles WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "Database error during profile lookup");
        e
    })?;

    debug!(
        user_id = %user_id,
        found = row.is_some(),
        "Profile lookup completed"
    );

    Ok(row.map(Profile::from))
}

/// Profile lookup that folds any failure into "no profile".
/// This is the form the gate and the callback use.
pub async fn fetch_profile_or_none(pool: &SqlitePool, user_id: &str) -> Option<Profile> {
    fetch_profile(pool, user_id).await.ok().flatten()
}
