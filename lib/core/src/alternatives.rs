//! Single-slot alternative recommendations.
//!
//! Re-scores the eligible candidates for one slot of an existing outfit
//! against the mean embedding of the other chosen items. The outfit itself
//! is read-only input; repeated calls with the same arguments return the
//! same list.

use crate::assemble::{candidate_pool, Outfit};
use crate::item::{Catalog, Category, Context, Gender};
use crate::rules::RuleBook;
use crate::slots::Slot;
use crate::vector::{centroid, Vector};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Default number of alternatives returned.
pub const DEFAULT_TOP_K: usize = 5;

/// One ranked alternative, annotated with its raw similarity score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeCandidate {
    pub image: String,
    pub category: Category,
    pub gender: Gender,
    pub score: f32,
}

/// Top-k compatible replacements for `slot`, scored against the rest of
/// `outfit` and sorted by descending similarity (ties by catalog index).
///
/// The current occupant is never suggested. An outfit with no other filled
/// slots has nothing to be compatible with and yields an empty list, as
/// does a slot the season disables. Asking for more alternatives than
/// exist returns all of them.
pub fn recommend_alternatives(
    catalog: &Catalog,
    rules: &RuleBook,
    outfit: &Outfit,
    slot: Slot,
    ctx: &Context,
    top_k: usize,
) -> Result<Vec<AlternativeCandidate>> {
    if !rules.slot_enabled(slot, ctx.season) {
        debug!(%slot, season = ?ctx.season, "slot disabled for season, no alternatives");
        return Ok(Vec::new());
    }

    let mut references: Vec<&Vector> = Vec::new();
    for (other, chosen) in outfit {
        if *other == slot {
            continue;
        }
        let id = catalog
            .index_of_image(&chosen.image)
            .ok_or_else(|| Error::UnknownImage(chosen.image.clone()))?;
        references.push(catalog.embedding(id));
    }
    if references.is_empty() {
        return Ok(Vec::new());
    }
    let reference = centroid(references)?;

    let occupant = outfit.get(&slot).map(|chosen| chosen.image.as_str());
    let mut scored: Vec<(usize, f32)> = candidate_pool(catalog, rules, slot, ctx)
        .into_iter()
        .filter(|&id| occupant != Some(catalog.items()[id].image.as_str()))
        .map(|id| (id, reference.cosine_similarity(catalog.embedding(id))))
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(top_k);

    Ok(scored
        .into_iter()
        .map(|(id, score)| {
            let item = &catalog.items()[id];
            AlternativeCandidate {
                image: item.image.clone(),
                category: item.category,
                gender: item.gender,
                score,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::OutfitItem;
    use crate::item::{CatalogItem, Coverage, Layer, Occasion, Season, Structure, Usage};
    use crate::vector::EmbeddingMatrix;

    fn item(
        id: usize,
        image: &str,
        category: Category,
        subcategory: &str,
    ) -> CatalogItem {
        CatalogItem {
            id,
            image: image.to_string(),
            gender: Gender::Men,
            category,
            subcategory: subcategory.to_string(),
            layer: Layer::Inner,
            coverage: Some(Coverage::Long),
            structure: Structure::Unstructured,
            fit: "regular".to_string(),
            usage: vec![Usage::Casual],
        }
    }

    /// Four tops and one bottom; top embeddings fan out from the bottom's.
    fn fixture() -> Catalog {
        let items = vec![
            item(0, "top-0.jpg", Category::Top, "tees"),
            item(1, "top-1.jpg", Category::Top, "tees"),
            item(2, "top-2.jpg", Category::Top, "tees"),
            item(3, "top-3.jpg", Category::Top, "tees"),
            item(4, "bottom-0.jpg", Category::Bottom, "jeans"),
        ];
        let rows = vec![
            Vector::new(vec![1.0, 0.0]),
            Vector::new(vec![0.9, 0.1]),
            Vector::new(vec![0.5, 0.5]),
            Vector::new(vec![0.0, 1.0]),
            Vector::new(vec![1.0, 0.05]),
        ];
        Catalog::new(items, EmbeddingMatrix::from_rows(rows).unwrap()).unwrap()
    }

    fn outfit_with(top: &str, bottom: &str) -> Outfit {
        let mut outfit = Outfit::new();
        outfit.insert(
            Slot::Top,
            OutfitItem {
                image: top.to_string(),
                category: Category::Top,
                gender: Gender::Men,
            },
        );
        outfit.insert(
            Slot::Bottom,
            OutfitItem {
                image: bottom.to_string(),
                category: Category::Bottom,
                gender: Gender::Men,
            },
        );
        outfit
    }

    fn ctx() -> Context {
        Context {
            gender: Gender::Men,
            season: Season::Winter,
            occasion: Occasion::Casual,
            style: None,
        }
    }

    #[test]
    fn test_occupant_never_suggested() {
        let catalog = fixture();
        let rules = RuleBook::default();
        let outfit = outfit_with("top-0.jpg", "bottom-0.jpg");

        let alts =
            recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 10).unwrap();
        assert_eq!(alts.len(), 3);
        assert!(alts.iter().all(|a| a.image != "top-0.jpg"));
    }

    #[test]
    fn test_scores_sorted_non_increasing() {
        let catalog = fixture();
        let rules = RuleBook::default();
        let outfit = outfit_with("top-0.jpg", "bottom-0.jpg");

        let alts =
            recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 10).unwrap();
        for pair in alts.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // The reference is the bottom's vector, so the nearest top wins.
        assert_eq!(alts[0].image, "top-1.jpg");
    }

    #[test]
    fn test_top_k_truncation() {
        let catalog = fixture();
        let rules = RuleBook::default();
        let outfit = outfit_with("top-0.jpg", "bottom-0.jpg");

        let two = recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 2).unwrap();
        assert_eq!(two.len(), 2);
        // Asking for more than exist returns everything.
        let all =
            recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 100).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_no_other_slots_yields_empty() {
        let catalog = fixture();
        let rules = RuleBook::default();
        let mut outfit = Outfit::new();
        outfit.insert(
            Slot::Top,
            OutfitItem {
                image: "top-0.jpg".to_string(),
                category: Category::Top,
                gender: Gender::Men,
            },
        );

        let alts =
            recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 5).unwrap();
        assert!(alts.is_empty());
    }

    #[test]
    fn test_unknown_image_is_fatal() {
        let catalog = fixture();
        let rules = RuleBook::default();
        let outfit = outfit_with("top-0.jpg", "nonexistent.jpg");

        let result = recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 5);
        assert!(matches!(result, Err(Error::UnknownImage(_))));
    }

    #[test]
    fn test_season_disabled_slot_yields_empty() {
        let catalog = fixture();
        let rules = RuleBook::default();
        let outfit = outfit_with("top-0.jpg", "bottom-0.jpg");
        let summer = Context {
            season: Season::Summer,
            ..ctx()
        };

        let alts =
            recommend_alternatives(&catalog, &rules, &outfit, Slot::Outerwear, &summer, 5)
                .unwrap();
        assert!(alts.is_empty());
    }

    #[test]
    fn test_repeated_calls_identical() {
        let catalog = fixture();
        let rules = RuleBook::default();
        let outfit = outfit_with("top-0.jpg", "bottom-0.jpg");

        let first =
            recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 5).unwrap();
        let second =
            recommend_alternatives(&catalog, &rules, &outfit, Slot::Top, &ctx(), 5).unwrap();
        assert_eq!(first, second);
    }
}
