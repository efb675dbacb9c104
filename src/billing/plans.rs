//! Subscription plan catalog
//!
//! Price ids come from the environment so staging and production can point
//! at different Stripe prices; the placeholders keep local development
//! working without a Stripe account.

use serde::Serialize;
use std::env;

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub name: String,
    pub plan_id: u32,
    pub price_in_usd: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<u32>,
    pub price_id: String,
    pub has_trial: bool,
}

#[derive(Debug, Clone)]
pub struct PlanCatalog {
    pub pro_monthly: Plan,
    pub pro_yearly: Plan,
}

impl PlanCatalog {
    pub fn from_env() -> Self {
        let monthly_price_id = env::var("STRIPE_PRICE_MONTHLY")
            .unwrap_or_else(|_| "price_monthly_placeholder".to_string());
        let yearly_price_id = env::var("STRIPE_PRICE_YEARLY")
            .unwrap_or_else(|_| "price_yearly_placeholder".to_string());

        PlanCatalog {
            pro_monthly: Plan {
                name: "Pro".to_string(),
                plan_id: 1,
                price_in_usd: 29,
                compare_at_price: Some(39),
                price_id: monthly_price_id,
                has_trial: true,
            },
            pro_yearly: Plan {
                name: "Pro Yearly".to_string(),
                plan_id: 2,
                price_in_usd: 290,
                compare_at_price: Some(468),
                price_id: yearly_price_id,
                has_trial: true,
            },
        }
    }

    pub fn all(&self) -> Vec<&Plan> {
        vec![&self.pro_monthly, &self.pro_yearly]
    }

    pub fn find_plan(&self, price_id: &str) -> Option<&Plan> {
        self.all().into_iter().find(|p| p.price_id == price_id)
    }
}
