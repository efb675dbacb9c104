// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::billing::PlanCatalog;
use crate::services::{AuthApi, FunctionsService, StripeService};

/// Application state containing database pool, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Auth provider used for code exchange and session validation.
    /// Behind a trait object so tests can substitute a stub provider.
    pub auth: Arc<dyn AuthApi>,
    pub functions: Arc<FunctionsService>,
    pub stripe: Arc<StripeService>,
    pub plans: PlanCatalog,
    /// Absolute origin the callback handler redirects back to,
    /// e.g. "https://app.ytscale.io"
    pub public_origin: String,
}
