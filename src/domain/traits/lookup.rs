//! Remote lookup collaborators used by the refresher and command handlers.
//!
//! Credentials belong to the implementation and are passed to its constructor.

use async_trait::async_trait;

use crate::application::errors::FetchError;
use crate::domain::entities::CatalogEntry;

/// Source of the full game catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, FetchError>;
}

/// Media search returning the URL of the best hit
#[async_trait]
pub trait MediaSearch: Send + Sync {
    async fn search_media(&self, query: &str) -> Result<Option<String>, FetchError>;
}

/// A dictionary definition with a usage example
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub example: String,
}

/// Dictionary lookup returning the top definition
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn search_definition(&self, term: &str) -> Result<Option<Definition>, FetchError>;
}
