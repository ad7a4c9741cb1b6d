//! # outfitx
//!
//! An embedding-based outfit recommender. Given a catalog of garment images
//! (each a visual embedding vector plus a few categorical attributes) and a
//! request context (gender, season, occasion, optional style), outfitx
//! assembles a coherent outfit one slot at a time and can rank replacements
//! for a single slot without disturbing the rest.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! outfitx --metadata processed/metadata.json --embeddings processed/embeddings.json
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use outfitx::prelude::*;
//! use std::path::Path;
//!
//! let catalog = load_catalog(
//!     Path::new("processed/metadata.json"),
//!     Path::new("processed/embeddings.json"),
//! ).unwrap();
//!
//! let rules = RuleBook::default();
//! let ctx = Context {
//!     gender: Gender::Men,
//!     season: Season::Winter,
//!     occasion: Occasion::Party,
//!     style: None,
//! };
//!
//! if let Some(outfit) = assemble_outfit(&catalog, &rules, &ctx).unwrap() {
//!     let alternatives = recommend_alternatives(
//!         &catalog, &rules, &outfit, Slot::Top, &ctx, DEFAULT_TOP_K,
//!     ).unwrap();
//!     println!("{} alternatives for the top", alternatives.len());
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `outfitx-core` - slot classification, eligibility rules, similarity
//!   scoring, outfit assembly, alternative ranking
//! - `outfitx-catalog` - filename tagging, interchange-file loading, and the
//!   hot-swappable catalog snapshot
//! - `outfitx-api` - REST endpoints

// Re-export core types
pub use outfitx_core::{
    assemble_outfit, candidate_pool, centroid, classify, recommend_alternatives,
    AlternativeCandidate, Catalog, CatalogItem, Category, Context, Coverage, EmbeddingMatrix,
    Error, Gender, Layer, Occasion, Outfit, OutfitItem, Result, RuleBook, Season, Slot, SlotPolicy,
    Structure, Style, Usage, Vector, DEFAULT_TOP_K,
};

// Re-export catalog layer
pub use outfitx_catalog::{load_catalog, tag_image, tag_images, CatalogStore};

// Re-export API
pub use outfitx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        assemble_outfit, classify, load_catalog, recommend_alternatives, tag_image, tag_images,
        AlternativeCandidate,
        Catalog, CatalogItem, Category, CatalogStore, Context, Coverage, EmbeddingMatrix, Error,
        Gender, Occasion, Outfit, OutfitItem, RestApi, Result, RuleBook, Season, Slot, Style,
        Usage, Vector, DEFAULT_TOP_K,
    };
}
