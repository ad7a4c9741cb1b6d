//! Process-lifetime holder of the catalog snapshot.

use crate::loader::load_catalog;
use outfitx_core::{Catalog, Result};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Shared, read-only catalog snapshot with atomic whole-snapshot
/// replacement.
///
/// Items and embeddings are index-aligned, so a hot reload must never
/// replace one without the other; [`CatalogStore::swap`] installs a new
/// [`Catalog`] (which bundles both) in one step. Readers hold the `Arc`
/// they obtained from [`CatalogStore::load`] and are unaffected by a
/// concurrent swap.
pub struct CatalogStore {
    snapshot: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Load the snapshot from the interchange files and wrap it.
    pub fn open(metadata_path: &Path, embeddings_path: &Path) -> Result<Self> {
        Ok(Self::new(load_catalog(metadata_path, embeddings_path)?))
    }

    /// The current snapshot. Cheap; clones an `Arc`.
    #[must_use]
    pub fn load(&self) -> Arc<Catalog> {
        self.snapshot.read().clone()
    }

    /// Replace the snapshot atomically.
    pub fn swap(&self, catalog: Catalog) {
        info!(items = catalog.len(), dim = catalog.dim(), "catalog swapped");
        *self.snapshot.write() = Arc::new(catalog);
    }

    /// Re-read the interchange files and swap in the result. The old
    /// snapshot stays in place if loading fails.
    pub fn reload(&self, metadata_path: &Path, embeddings_path: &Path) -> Result<()> {
        let catalog = load_catalog(metadata_path, embeddings_path)?;
        self.swap(catalog);
        Ok(())
    }
}
