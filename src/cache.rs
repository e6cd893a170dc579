// src/cache.rs
//
// Per-widget index cache. Built at most once: the build runs while holding the
// slot lock, so concurrent first lookups wait for it and reuse the result
// instead of fetching again. A failed build, or one marked transient, leaves
// the slot empty so the next lookup builds again.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::LookupError;
use crate::index::Index;

/// A freshly built index and whether later lookups may reuse it.
pub struct Built {
    pub index: Index,
    pub keep: bool,
}

impl Built {
    pub fn keep(index: Index) -> Self {
        Self { index, keep: true }
    }

    /// Serve this lookup only; nothing is stored.
    pub fn transient(index: Index) -> Self {
        Self { index, keep: false }
    }
}

#[derive(Default)]
pub struct IndexCache {
    slot: Mutex<Option<Arc<Index>>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<Index>>> {
        // A panicked build never stored anything; the slot is still valid.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_built(&self) -> bool {
        self.lock().is_some()
    }

    pub fn get_or_build<F>(&self, build: F) -> Result<Arc<Index>, LookupError>
    where
        F: FnOnce() -> Result<Built, LookupError>,
    {
        let mut slot = self.lock();
        if let Some(ix) = slot.as_ref() {
            return Ok(Arc::clone(ix));
        }
        let built = build()?;
        let ix = Arc::new(built.index);
        if built.keep {
            *slot = Some(Arc::clone(&ix));
        }
        Ok(ix)
    }

    /// Drop the index; the next lookup refetches every source.
    pub fn reset(&self) {
        *self.lock() = None;
    }
}
