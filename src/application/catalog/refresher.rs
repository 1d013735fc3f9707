//! Background task that keeps the catalog cache fresh

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::cache::LookupCache;
use crate::application::errors::FetchError;
use crate::domain::traits::CatalogSource;

/// Default refresh period (24 hours)
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Periodically re-populates a [`LookupCache`] from a [`CatalogSource`]
#[derive(Clone)]
pub struct Refresher {
    source: Arc<dyn CatalogSource>,
    cache: Arc<LookupCache>,
    interval: Duration,
    timeout: Duration,
}

impl Refresher {
    pub fn new(source: Arc<dyn CatalogSource>, cache: Arc<LookupCache>) -> Self {
        Self {
            source,
            cache,
            interval: DEFAULT_REFRESH_INTERVAL,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch the catalog once and publish it.
    ///
    /// On failure the cache keeps its previous snapshot.
    pub async fn refresh_once(&self) -> Result<usize, FetchError> {
        let entries = tokio::time::timeout(self.timeout, self.source.fetch_catalog())
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        let count = entries.len();
        self.cache.replace(entries);
        Ok(count)
    }

    /// Run the refresh loop until `cancel` fires.
    ///
    /// The first refresh happens one interval after spawning; the startup
    /// load is the caller's job. An in-flight fetch is abandoned on
    /// cancellation.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                tracing::info!("Refreshing game catalog...");
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    result = self.refresh_once() => match result {
                        Ok(count) => tracing::info!("Game catalog refreshed: {} entries", count),
                        Err(e) => tracing::warn!(
                            "Game catalog refresh failed, keeping {} cached entries: {}",
                            self.cache.len(),
                            e
                        ),
                    },
                }
            }

            tracing::debug!("Catalog refresher stopped");
        })
    }
}
