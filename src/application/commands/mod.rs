//! Built-in commands
//!
//! Each handler gets its collaborators through its constructor, so the
//! command table is plain data plus the behaviour it points at.

pub mod define;
pub mod gif;
pub mod good_boy;
pub mod steam;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::catalog::LookupCache;
use crate::application::errors::FetchError;
use crate::domain::entities::{Command, CommandRegistry};
use crate::domain::traits::{DefinitionSource, MediaSearch};

pub use define::{DefineCommand, DEFINITION_NOT_FOUND_REPLY};
pub use gif::{GifCommand, GIF_NOT_FOUND_REPLY};
pub use good_boy::GOOD_BOY_REPLY;
pub use steam::{SteamCommand, GAME_NOT_FOUND_REPLY};

/// Reply when a remote lookup fails
pub const LOOKUP_FAILED_REPLY: &str = "Woof! Something went wrong!";

/// Collaborators needed by the built-in commands
#[derive(Clone)]
pub struct CommandDeps {
    pub catalog: Arc<LookupCache>,
    pub media: Arc<dyn MediaSearch>,
    pub definitions: Arc<dyn DefinitionSource>,
    pub timeout: Duration,
}

/// Registry with every built-in command in help order
pub fn builtin_registry(deps: CommandDeps) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(
        Command::new("gif")
            .with_usage("gif [search terms]")
            .requires_argument()
            .with_handler(GifCommand::new(deps.media, deps.timeout)),
    );

    registry.register(
        Command::new("steam")
            .with_usage("steam [game name]")
            .requires_argument()
            .with_handler(SteamCommand::new(deps.catalog)),
    );

    registry.register(
        Command::new("define")
            .with_usage("define [search terms]")
            .requires_argument()
            .with_handler(DefineCommand::new(deps.definitions, deps.timeout)),
    );

    registry.register(good_boy::command());

    registry
}

/// Run a lookup with an upper bound on its duration
pub(crate) async fn bounded<T, F>(timeout: Duration, lookup: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| FetchError::Timeout(timeout))?
}

#[cfg(test)]
pub(crate) mod fakes {
    use async_trait::async_trait;

    use crate::application::errors::FetchError;
    use crate::domain::traits::{Definition, DefinitionSource, MediaSearch};

    pub struct FakeMedia(pub Result<Option<String>, FetchError>);

    #[async_trait]
    impl MediaSearch for FakeMedia {
        async fn search_media(&self, _query: &str) -> Result<Option<String>, FetchError> {
            self.0.clone()
        }
    }

    pub struct FakeDefinitions(pub Result<Option<Definition>, FetchError>);

    #[async_trait]
    impl DefinitionSource for FakeDefinitions {
        async fn search_definition(&self, _term: &str) -> Result<Option<Definition>, FetchError> {
            self.0.clone()
        }
    }

    /// Lookup that never completes
    pub struct Stalled;

    #[async_trait]
    impl MediaSearch for Stalled {
        async fn search_media(&self, _query: &str) -> Result<Option<String>, FetchError> {
            std::future::pending().await
        }
    }

    #[async_trait]
    impl DefinitionSource for Stalled {
        async fn search_definition(&self, _term: &str) -> Result<Option<Definition>, FetchError> {
            std::future::pending().await
        }
    }
}
