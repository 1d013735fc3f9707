//! Domain entities - Core business objects with no external dependencies

pub mod catalog;
pub mod command;
pub mod message;

pub use catalog::CatalogEntry;
pub use command::{Command, CommandHandler, CommandRegistry, StaticReply};
pub use message::IncomingMessage;
