// src/services/mod.rs
//
// Clients for the external collaborators: the auth provider, the remote
// content-generation functions, and the billing upstream.

pub mod functions;
pub mod stripe;
pub mod supabase;

// Re-export commonly used types for convenience
pub use functions::{FunctionsService, FunctionsError};
pub use stripe::{StripeError, StripeService};
pub use supabase::{AuthApi, AuthError, AuthSession, AuthUser, SupabaseService};
