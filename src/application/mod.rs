//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Catalog: cached game catalog and its refresher
//! - Commands: built-in command handlers
//! - Errors: Domain-specific errors
//! - Messaging: address parsing and dispatching
//! - Services: the receive-and-reply loop

pub mod catalog;
pub mod commands;
pub mod errors;
pub mod messaging;
pub mod services;
