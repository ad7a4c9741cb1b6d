//! Outfit slot identifiers and the item-to-slot classifier.

use crate::item::{CatalogItem, Category};
use serde::{Deserialize, Serialize};

/// A functional outfit position that one catalog item occupies.
///
/// Declaration order is the assembly fill order: TOP anchors the outfit,
/// later slots score against earlier choices.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Slot {
    Top,
    Bottom,
    Outerwear,
    Dress,
}

impl Slot {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Top => "TOP",
            Slot::Bottom => "BOTTOM",
            Slot::Outerwear => "OUTERWEAR",
            Slot::Dress => "DRESS",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an item to the slot it can occupy, or `None` if it fits nowhere.
///
/// Primary dispatch is the tagged category. Items with a noisy category
/// label fall back to a subcategory scan for outerwear markers; everything
/// else (footwear included) is unassignable and enters no candidate pool.
#[must_use]
pub fn classify(item: &CatalogItem) -> Option<Slot> {
    match item.category {
        Category::Dress => Some(Slot::Dress),
        Category::Top => Some(Slot::Top),
        Category::Bottom => Some(Slot::Bottom),
        Category::Outerwear => Some(Slot::Outerwear),
        Category::Footwear | Category::Other => {
            let sub = item.subcategory.to_lowercase();
            if sub.contains("jacket") || sub.contains("coat") || sub.contains("blazer") {
                Some(Slot::Outerwear)
            } else {
                None
            }
        }
    }
}
