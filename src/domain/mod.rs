//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (CatalogEntry, IncomingMessage, Command)
//! - Traits: Abstractions for infrastructure (Bot, lookup collaborators)

pub mod entities;
pub mod traits;
