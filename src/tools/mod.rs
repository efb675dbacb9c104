//! # Tools Module
//!
//! The gated content tools: niche finder, thumbnail generator, and video
//! metadata extraction. All three are thin clients over remote functions;
//! no generation logic lives in this service.

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::saas_routes;
