//! # Billing Module
//!
//! Plan catalog and the server-side start of the checkout flow. The actual
//! payment processing lives behind the billing upstream; this module only
//! knows "start checkout for a price id".

pub mod handlers;
pub mod plans;
pub mod routes;

#[cfg(test)]
mod tests;

pub use plans::{Plan, PlanCatalog};
pub use routes::billing_routes;
