//! Billing routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the billing router
///
/// # Routes
/// - `GET /start-checkout` - Begin hosted checkout for a price id
/// - `GET /api/plans` - Public plan catalog
pub fn billing_routes() -> Router {
    Router::new()
        .route("/start-checkout", get(handlers::start_checkout))
        .route("/api/plans", get(handlers::list_plans))
}
