//! Billing handlers

use axum::{
    extract::{Extension, Query},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::extractors::resolve_session;
use crate::common::AppState;

const CHECKOUT_FALLBACK: &str = "/pricing";

/// GET /start-checkout?priceId=...
///
/// Server-side start of the paid checkout flow. Requires a session and a
/// price from the catalog; asks the billing upstream for a hosted checkout
/// URL and sends the browser there. Every failure lands on /pricing - a
/// user who cannot check out right now can at least pick a plan again.
pub async fn start_checkout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let state = state_lock.read().await.clone();

    let Some(session) = resolve_session(&state, &headers).await else {
        info!("Checkout attempted without a session");
        return Redirect::to(CHECKOUT_FALLBACK).into_response();
    };

    let Some(price_id) = params.get("priceId") else {
        info!(user_id = %session.user.id, "Checkout attempted without priceId");
        return Redirect::to(CHECKOUT_FALLBACK).into_response();
    };

    let Some(plan) = state.plans.find_plan(price_id) else {
        warn!(user_id = %session.user.id, price_id = %price_id, "Unknown price id");
        return Redirect::to(CHECKOUT_FALLBACK).into_response();
    };

    match state
        .stripe
        .checkout_url(&session.access_token, price_id)
        .await
    {
        Ok(url) => {
            info!(
                user_id = %session.user.id,
                plan = %plan.name,
                "Redirecting to hosted checkout"
            );
            Redirect::to(&url).into_response()
        }
        Err(e) => {
            warn!(error = %e, user_id = %session.user.id, "Checkout start failed");
            Redirect::to(CHECKOUT_FALLBACK).into_response()
        }
    }
}

/// GET /api/plans
/// Public plan catalog for the pricing page.
pub async fn list_plans(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Json<serde_json::Value> {
    let state = state_lock.read().await.clone();
    Json(serde_json::json!({ "plans": state.plans.all() }))
}
