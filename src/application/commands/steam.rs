//! Store page lookup against the cached game catalog

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::LookupCache;
use crate::domain::entities::CommandHandler;

pub const GAME_NOT_FOUND_REPLY: &str = "Sorry, couldn't sniff that one out 🔍";

const STORE_URL: &str = "https://store.steampowered.com/app";

pub struct SteamCommand {
    cache: Arc<LookupCache>,
}

impl SteamCommand {
    pub fn new(cache: Arc<LookupCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CommandHandler for SteamCommand {
    async fn handle(&self, name: &str) -> String {
        let snapshot = self.cache.snapshot();
        match snapshot.find_by_name(name) {
            Some(id) => format!("{}/{}", STORE_URL, id),
            None => {
                tracing::debug!("No game named {:?} in {} cached entries", name, snapshot.len());
                GAME_NOT_FOUND_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CatalogEntry;

    #[tokio::test]
    async fn test_known_game_links_store_page() {
        let cache = Arc::new(LookupCache::with_entries(vec![CatalogEntry::new(10, "Portal")]));
        let cmd = SteamCommand::new(cache);

        assert_eq!(cmd.handle("portal").await, "https://store.steampowered.com/app/10");
    }

    #[tokio::test]
    async fn test_unknown_game_is_not_found() {
        let cache = Arc::new(LookupCache::with_entries(vec![CatalogEntry::new(10, "Portal")]));
        let cmd = SteamCommand::new(cache);

        assert_eq!(cmd.handle("nosuchgame").await, GAME_NOT_FOUND_REPLY);
    }

    #[tokio::test]
    async fn test_sees_replaced_catalog() {
        let cache = Arc::new(LookupCache::new());
        let cmd = SteamCommand::new(Arc::clone(&cache));
        assert_eq!(cmd.handle("portal").await, GAME_NOT_FOUND_REPLY);

        cache.replace(vec![CatalogEntry::new(10, "Portal")]);
        assert_eq!(cmd.handle("portal").await, "https://store.steampowered.com/app/10");
    }
}
