//! Anchor-and-greedy-fill outfit assembly.
//!
//! TOP is chosen first as the anchor: the candidate nearest the centroid of
//! its own pool, i.e. the most representative top rather than an arbitrary
//! one. Each remaining slot then scores against the running mean of every
//! vector chosen so far, so items end up mutually coherent instead of merely
//! each similar to the anchor. The result is order-dependent by
//! construction; swapping the fill order can change the outfit.

use crate::item::{Catalog, CatalogItem, Category, Context, Gender};
use crate::rules::{RuleBook, SlotPolicy};
use crate::slots::{classify, Slot};
use crate::vector::{centroid, Vector};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Summary of one chosen item, keyed by slot inside an [`Outfit`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitItem {
    pub image: String,
    pub category: Category,
    pub gender: Gender,
}

impl OutfitItem {
    fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            image: item.image.clone(),
            category: item.category,
            gender: item.gender,
        }
    }
}

/// A complete outfit: one chosen item per filled slot.
pub type Outfit = BTreeMap<Slot, OutfitItem>;

/// Catalog indices eligible for a slot under the given context: gender must
/// match, the classifier must place the item in the slot, and every hard
/// rule must pass. Failing items are silently excluded.
#[must_use]
pub fn candidate_pool(
    catalog: &Catalog,
    rules: &RuleBook,
    slot: Slot,
    ctx: &Context,
) -> Vec<usize> {
    catalog
        .items()
        .iter()
        .filter(|item| {
            item.gender == ctx.gender
                && classify(item) == Some(slot)
                && rules.item_allowed(item, slot, ctx.season, ctx.occasion)
        })
        .map(|item| item.id)
        .collect()
}

/// Highest-scoring candidate against a reference vector, ties broken by
/// lowest catalog index. Scores add the style bonus when the context
/// carries a style. Returns `None` only for an empty pool.
fn best_candidate(
    catalog: &Catalog,
    rules: &RuleBook,
    pool: &[usize],
    reference: &Vector,
    ctx: &Context,
) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for &id in pool {
        let item = &catalog.items()[id];
        let score =
            reference.cosine_similarity(catalog.embedding(id)) + rules.style_bonus(item, ctx.style);
        // Strict comparison keeps the first-seen candidate on ties.
        if best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((id, score));
        }
    }
    best
}

/// Assemble a complete outfit for the context, or `None` when no feasible
/// outfit exists.
///
/// Active slots are always TOP and BOTTOM, plus OUTERWEAR when the season
/// requires it (winter). Footwear is never assembled. An empty TOP pool
/// yields `None` — TOP is the mandatory anchor. An empty non-anchor pool
/// just leaves that slot out of the result.
pub fn assemble_outfit(
    catalog: &Catalog,
    rules: &RuleBook,
    ctx: &Context,
) -> Result<Option<Outfit>> {
    let mut slots = vec![Slot::Top, Slot::Bottom];
    if rules.outerwear_policy(ctx.season) == SlotPolicy::Required {
        slots.push(Slot::Outerwear);
    }

    let pools: Vec<(Slot, Vec<usize>)> = slots
        .iter()
        .map(|&slot| (slot, candidate_pool(catalog, rules, slot, ctx)))
        .collect();

    let anchor_pool = &pools[0].1;
    if anchor_pool.is_empty() {
        debug!(
            gender = ?ctx.gender,
            season = ?ctx.season,
            occasion = ?ctx.occasion,
            "no TOP candidates, outfit infeasible"
        );
        return Ok(None);
    }

    // Anchor: the TOP nearest the centroid of its own pool.
    let anchor_centroid = centroid(anchor_pool.iter().map(|&id| catalog.embedding(id)))?;
    let Some((anchor_id, anchor_score)) =
        best_candidate(catalog, rules, anchor_pool, &anchor_centroid, ctx)
    else {
        return Ok(None);
    };
    debug!(anchor_id, anchor_score, "anchor selected");

    let mut outfit = Outfit::new();
    outfit.insert(Slot::Top, OutfitItem::from_catalog(&catalog.items()[anchor_id]));
    let mut chosen: Vec<&Vector> = vec![catalog.embedding(anchor_id)];

    // Greedy fill against the running mean of everything chosen so far.
    for (slot, pool) in pools.iter().skip(1) {
        if pool.is_empty() {
            debug!(%slot, "empty candidate pool, slot skipped");
            continue;
        }

        let reference = centroid(chosen.iter().copied())?;
        let Some((id, score)) = best_candidate(catalog, rules, pool, &reference, ctx) else {
            continue;
        };
        debug!(%slot, id, score, "slot filled");

        outfit.insert(*slot, OutfitItem::from_catalog(&catalog.items()[id]));
        chosen.push(catalog.embedding(id));
    }

    Ok(Some(outfit))
}
