//! Ambient service plumbing shared by Souk services.
//!
//! Tracing setup, health handlers, request-id middleware, and serde helpers.
//! Nothing in here knows about the catalog domain.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
