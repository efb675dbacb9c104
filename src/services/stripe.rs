// src/services/stripe.rs
//! Checkout flow against the payment upstream
//!
//! A single operation: "start checkout for a price id". The upstream is the
//! deployment's billing function, which owns the Stripe secret key and
//! returns the hosted checkout URL to send the browser to.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

const STRIPE_ACTIONS_FUNCTION: &str = "stripe-actions";

#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("billing endpoint unreachable: {0}")]
    RequestFailed(String),

    #[error("checkout rejected: {0}")]
    CheckoutRejected(String),

    #[error("no checkout URL in billing response")]
    MissingUrl,
}

#[derive(Deserialize)]
struct CheckoutResponse {
    url: Option<String>,
}

pub struct StripeService {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl StripeService {
    pub fn new(http: Client, base_url: String, anon_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    /// Start a checkout session for the given price and return the hosted
    /// checkout URL. The user's access token identifies the customer.
    pub async fn checkout_url(
        &self,
        access_token: &str,
        price_id: &str,
    ) -> Result<String, StripeError> {
        let url = format!(
            "{}/functions/v1/{}",
            self.base_url, STRIPE_ACTIONS_FUNCTION
        );

        debug!(price_id = %price_id, "Requesting checkout session");

        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .json(&json!({
                "action": "checkout",
                "priceId": price_id,
            }))
            .send()
            .await
            .map_err(|e| StripeError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(http_status = %status, price_id = %price_id, "Checkout request rejected");
            return Err(StripeError::CheckoutRejected(format!(
                "{}: {}",
                status, body
            )));
        }

        let parsed: CheckoutResponse = resp
            .json()
            .await
            .map_err(|e| StripeError::CheckoutRejected(e.to_string()))?;

        parsed.url.ok_or(StripeError::MissingUrl)
    }
}
