//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod lookup;

pub use bot::{Bot, BotInfo};
pub use lookup::{CatalogSource, Definition, DefinitionSource, MediaSearch};
