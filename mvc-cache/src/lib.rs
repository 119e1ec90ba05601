//! In-process cache of loaded collision datasets.
//!
//! Loading is the slow part of every interaction: the CSV has to be fetched
//! and normalized before anything can be filtered. [`DatasetCache`] memoizes
//! that step keyed by the requested row count, so reruns triggered by the UI
//! only pay for it once per distinct row count.
//!
//! # Usage
//!
//! ```rust
//! use mvc_cache::DatasetCache;
//! use mvc_source::StaticSource;
//!
//! # async fn demo() -> mvc_source::Result<()> {
//! let cache = DatasetCache::new(StaticSource::new(
//!     "CRASH DATE,CRASH TIME,LATITUDE,LONGITUDE,ON STREET NAME,NUMBER OF PERSONS INJURED,\
//!      NUMBER OF PEDESTRIANS INJURED,NUMBER OF CYCLIST INJURED,NUMBER OF MOTORIST INJURED\n\
//!      07/04/2022,14:10,40.71,-73.99,CANAL STREET,1,1,0,0\n",
//! ));
//! let first = cache.load(100).await?;
//! let second = cache.load(100).await?;
//! assert!(std::rc::Rc::ptr_eq(&first, &second));
//! assert_eq!(cache.stats().hits, 1);
//! # Ok(())
//! # }
//! ```
//!
//! Entries are never evicted; the cache lives as long as the host process
//! (or browser tab) that owns it.

use log::info;
use mvc_source::{load_dataset, CollisionSource, Dataset, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Hit and miss counters since creation (or the last [`DatasetCache::clear`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Memoized load + normalize, keyed by row count.
///
/// This struct is cheaply cloneable (via `Rc`); clones share the same
/// entries, which suits single-threaded hosts such as a Dioxus app or a
/// CLI loop.
pub struct DatasetCache<S> {
    source: Rc<S>,
    entries: Rc<RefCell<HashMap<usize, Rc<Dataset>>>>,
    stats: Rc<Cell<CacheStats>>,
}

impl<S> Clone for DatasetCache<S> {
    fn clone(&self) -> Self {
        DatasetCache {
            source: Rc::clone(&self.source),
            entries: Rc::clone(&self.entries),
            stats: Rc::clone(&self.stats),
        }
    }
}

impl<S: CollisionSource> DatasetCache<S> {
    /// Create an empty cache in front of `source`.
    pub fn new(source: S) -> Self {
        DatasetCache {
            source: Rc::new(source),
            entries: Rc::new(RefCell::new(HashMap::new())),
            stats: Rc::new(Cell::new(CacheStats::default())),
        }
    }

    /// Return the dataset for `n_rows`, loading it on first request.
    ///
    /// A failed load caches nothing, so the next call tries again.
    pub async fn load(&self, n_rows: usize) -> Result<Rc<Dataset>> {
        let cached = self.entries.borrow().get(&n_rows).cloned();
        if let Some(dataset) = cached {
            self.bump(|s| s.hits += 1);
            info!("cache: hit for {} rows ({} records)", n_rows, dataset.len());
            return Ok(dataset);
        }

        self.bump(|s| s.misses += 1);
        info!("cache: miss for {} rows, loading", n_rows);
        let loaded = Rc::new(load_dataset(self.source.as_ref(), n_rows).await?);
        // first writer wins if two loads for the same key interleaved
        let stored = Rc::clone(
            self.entries
                .borrow_mut()
                .entry(n_rows)
                .or_insert(loaded),
        );
        Ok(stored)
    }

    /// The cached dataset for `n_rows`, without loading.
    pub fn get(&self, n_rows: usize) -> Option<Rc<Dataset>> {
        self.entries.borrow().get(&n_rows).cloned()
    }

    pub fn contains(&self, n_rows: usize) -> bool {
        self.entries.borrow().contains_key(&n_rows)
    }

    /// Number of distinct row counts loaded.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.get()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.stats.set(CacheStats::default());
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn bump(&self, f: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}
