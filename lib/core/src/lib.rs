//! # outfitx Core
//!
//! Core library for the outfitx outfit recommender.
//!
//! This crate provides the decision logic: mapping catalog items to outfit
//! slots, evaluating season/occasion/style rules, scoring visual
//! compatibility over embedding vectors, and assembling coherent outfits.
//!
//! - [`Vector`] / [`EmbeddingMatrix`] - cosine similarity and centroids over
//!   the row-aligned embedding store
//! - [`Catalog`] - read-only snapshot of items plus embeddings
//! - [`classify`] / [`Slot`] - item-to-slot mapping
//! - [`RuleBook`] - season/occasion/style eligibility rules
//! - [`assemble_outfit`] - anchor-and-greedy-fill outfit assembly
//! - [`recommend_alternatives`] - single-slot replacement ranking
//!
//! ## Example
//!
//! ```rust
//! use outfitx_core::{
//!     assemble_outfit, Catalog, CatalogItem, Category, Context, Coverage,
//!     EmbeddingMatrix, Gender, Layer, Occasion, RuleBook, Season, Structure,
//!     Usage, Vector,
//! };
//!
//! let items = vec![
//!     CatalogItem {
//!         id: 0,
//!         image: "MEN-Tees-01.jpg".to_string(),
//!         gender: Gender::Men,
//!         category: Category::Top,
//!         subcategory: "tees".to_string(),
//!         layer: Layer::Inner,
//!         coverage: Some(Coverage::Long),
//!         structure: Structure::Unstructured,
//!         fit: "regular".to_string(),
//!         usage: vec![Usage::Casual],
//!     },
//! ];
//! let embeddings = EmbeddingMatrix::from_rows(vec![Vector::new(vec![1.0, 0.0])]).unwrap();
//! let catalog = Catalog::new(items, embeddings).unwrap();
//!
//! let ctx = Context {
//!     gender: Gender::Men,
//!     season: Season::Summer,
//!     occasion: Occasion::Casual,
//!     style: None,
//! };
//! let outfit = assemble_outfit(&catalog, &RuleBook::default(), &ctx).unwrap();
//! assert!(outfit.is_some());
//! ```

pub mod alternatives;
pub mod assemble;
pub mod error;
pub mod item;
pub mod rules;
pub mod slots;
pub mod vector;

pub use alternatives::{recommend_alternatives, AlternativeCandidate, DEFAULT_TOP_K};
pub use assemble::{assemble_outfit, candidate_pool, Outfit, OutfitItem};
pub use error::{Error, Result};
pub use item::{
    Catalog, CatalogItem, Category, Context, Coverage, Gender, Layer, Occasion, Season, Structure,
    Style, Usage,
};
pub use rules::{OccasionRule, RuleBook, SeasonRule, SlotPolicy, StylePreference, STYLE_BONUS};
pub use slots::{classify, Slot};
pub use vector::{centroid, EmbeddingMatrix, Vector};
