//! In-memory catalog cache with atomic snapshot replacement

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};

use crate::domain::entities::CatalogEntry;

/// Immutable point-in-time view of the catalog
#[derive(Debug)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, u64>,
    generation: u64,
    refreshed_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    fn build(entries: Vec<CatalogEntry>, generation: u64, refreshed_at: Option<DateTime<Utc>>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for entry in &entries {
            // first entry with a given name wins
            by_name.entry(entry.name.to_lowercase()).or_insert(entry.id);
        }
        Self {
            entries,
            by_name,
            generation,
            refreshed_at,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Case-insensitive exact match on the entry name
    pub fn find_by_name(&self, name: &str) -> Option<u64> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Number of successful replacements that produced this snapshot
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog cache shared between the refresher (single writer) and
/// command handlers (many readers).
///
/// Readers load the current snapshot pointer once and keep working on it;
/// a concurrent [`LookupCache::replace`] never changes a snapshot already
/// handed out. Writers are serialized, so generations are published in
/// increasing order.
pub struct LookupCache {
    current: ArcSwap<CatalogSnapshot>,
    writer: Mutex<()>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(CatalogSnapshot::build(Vec::new(), 0, None)),
            writer: Mutex::new(()),
        }
    }

    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        let cache = Self::new();
        cache.replace(entries);
        cache
    }

    /// Publish a new snapshot
    pub fn replace(&self, entries: Vec<CatalogEntry>) {
        // the guard only protects the generation sequence
        let _writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let generation = self.current.load().generation() + 1;
        let snapshot = CatalogSnapshot::build(entries, generation, Some(Utc::now()));
        self.current.store(Arc::new(snapshot));
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.load_full()
    }

    pub fn find_by_name(&self, name: &str) -> Option<u64> {
        self.current.load().find_by_name(name)
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new()
    }
}
