// src/common/migrations.rs
//! Database schema management for the profile store

use sqlx::SqlitePool;
use tracing::info;

/// Run all database migrations
///
/// The profile store mirrors the billing provider's view of each account:
/// one row per user, written by billing webhooks, read-only for this service.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_profile_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed");

    Ok(())
}

async fn create_profile_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY,
            email TEXT,
            role TEXT,
            subscription_status TEXT,
            trial_end TEXT,
            stripe_customer_id TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_profiles_stripe_customer ON profiles(stripe_customer_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
