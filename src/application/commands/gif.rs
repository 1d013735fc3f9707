//! GIF search

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{bounded, LOOKUP_FAILED_REPLY};
use crate::domain::entities::CommandHandler;
use crate::domain::traits::MediaSearch;

pub const GIF_NOT_FOUND_REPLY: &str = "Woof! Can't sniff out the perfect gif.";

pub struct GifCommand {
    media: Arc<dyn MediaSearch>,
    timeout: Duration,
}

impl GifCommand {
    pub fn new(media: Arc<dyn MediaSearch>, timeout: Duration) -> Self {
        Self { media, timeout }
    }
}

#[async_trait]
impl CommandHandler for GifCommand {
    async fn handle(&self, query: &str) -> String {
        match bounded(self.timeout, self.media.search_media(query)).await {
            Ok(Some(url)) => url,
            Ok(None) => GIF_NOT_FOUND_REPLY.to_string(),
            Err(e) => {
                tracing::error!("GIF search for {:?} failed: {}", query, e);
                LOOKUP_FAILED_REPLY.to_string()
            }
        }
    }
}
