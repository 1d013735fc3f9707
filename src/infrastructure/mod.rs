//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Lookup: HTTP clients for the remote lookup services
//! - Adapters: Platform integrations
//! - Runtime: Tokio runtime startup and shutdown

pub mod adapters;
pub mod config;
pub mod lookup;
pub mod runtime;
