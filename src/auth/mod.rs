//! # Auth Module
//!
//! Post-authentication plumbing:
//! - the /auth/callback handler (code exchange + redirect resolution)
//! - redirect-intent parsing (query param / short-lived cookie)
//! - session extraction and the pro-access gate for protected routes

pub mod extractors;
pub mod gate;
pub mod handlers;
pub mod redirect;
pub mod routes;


pub use extractors::SessionUser;
pub use gate::require_pro_access;
pub use routes::auth_routes;
