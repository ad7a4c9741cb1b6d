//! # outfitx Catalog
//!
//! Catalog layer for the outfitx outfit recommender: deriving item
//! attributes from image filenames, loading the pre-tagged metadata and
//! embedding interchange files, and holding the resulting read-only
//! snapshot for the lifetime of the process.

pub mod loader;
pub mod store;
pub mod tagging;

pub use loader::{load_catalog, load_embeddings, load_metadata};
pub use store::CatalogStore;
pub use tagging::{tag_image, tag_images};
