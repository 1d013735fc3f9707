//! Message handling - Address parsing and command dispatch

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{Dispatcher, FALLBACK_REPLY, HELP_ALIASES};
pub use parser::AddressParser;
