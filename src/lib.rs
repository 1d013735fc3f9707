//! Discorgi - a chat bot that answers addressed commands with GIFs,
//! store links and slang definitions.

pub mod application;
pub mod domain;
pub mod infrastructure;
