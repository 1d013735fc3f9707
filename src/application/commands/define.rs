//! Urban Dictionary style definitions

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{bounded, LOOKUP_FAILED_REPLY};
use crate::domain::entities::CommandHandler;
use crate::domain::traits::{Definition, DefinitionSource};

pub const DEFINITION_NOT_FOUND_REPLY: &str = "Woof! Can't sniff it out on Urban Dictionary.";

pub struct DefineCommand {
    source: Arc<dyn DefinitionSource>,
    timeout: Duration,
}

impl DefineCommand {
    pub fn new(source: Arc<dyn DefinitionSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }
}

/// Render a definition as a block quote, one `> ` per line
pub fn format_definition(term: &str, found: &Definition) -> String {
    let definition = found.definition.replace('\n', "\n> ");
    let example = found.example.replace('\n', "\n> ");
    format!(
        "The Urban Dictionary defines {} as\n> {}\n_Example_:\n> {}",
        term, definition, example
    )
}

#[async_trait]
impl CommandHandler for DefineCommand {
    async fn handle(&self, term: &str) -> String {
        match bounded(self.timeout, self.source.search_definition(term)).await {
            Ok(Some(found)) => format_definition(term, &found),
            Ok(None) => DEFINITION_NOT_FOUND_REPLY.to_string(),
            Err(e) => {
                tracing::error!("Definition lookup for {:?} failed: {}", term, e);
                LOOKUP_FAILED_REPLY.to_string()
            }
        }
    }
}
