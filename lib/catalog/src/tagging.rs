//! Attribute derivation from catalog image filenames.
//!
//! The dataset encodes everything the recommender needs in the filename,
//! e.g. `MEN-Jackets_Coats-id_00001.jpg`: a gender prefix, then a `-`
//! separated segment whose `_` tokens name the garment family. This module
//! turns one filename into a fully tagged [`CatalogItem`]. The derivations
//! are heuristic where the filenames are ambiguous; ambiguity resolves to
//! explicit defaults (category "top", usage "casual") rather than silent
//! fallthroughs.

use outfitx_core::{CatalogItem, Category, Coverage, Gender, Layer, Structure, Usage};

const OUTERWEAR: &[&str] = &["jacket", "jackets", "coat", "coats", "blazer", "blazers"];
const TOPS: &[&str] = &["tshirt", "tshirts", "tee", "shirt", "shirts", "top", "tops"];
const BOTTOMS: &[&str] = &["jeans", "pants", "trousers", "shorts", "skirt", "skirts"];
const DRESSES: &[&str] = &["dress", "dresses"];
const FOOTWEAR: &[&str] = &["shoes", "shoe", "sneakers", "heels", "boots"];

const FORMAL_SUBCATEGORIES: &[&str] = &["blazers", "suiting", "shirts"];
const CASUAL_SUBCATEGORIES: &[&str] = &[
    "denim",
    "tees",
    "tanks",
    "sweatshirts",
    "hoodies",
    "shorts",
    "polos",
];

/// Derive a tagged catalog item from an image filename.
///
/// `id` must be the item's position in the catalog sequence, which is also
/// its row index in the embedding matrix.
#[must_use]
pub fn tag_image(image: &str, id: usize) -> CatalogItem {
    let gender = if image.starts_with("WOMEN") {
        Gender::Women
    } else if image.starts_with("MEN") {
        Gender::Men
    } else {
        Gender::Unknown
    };

    // Second `-` segment carries the garment family, e.g. "Jackets_Coats".
    let family = image.split('-').nth(1).unwrap_or("").to_lowercase();
    let tokens: Vec<&str> = family.split('_').collect();

    let mut category = Category::Top;
    let mut subcategory = tokens
        .first()
        .filter(|t| !t.is_empty())
        .unwrap_or(&"unknown")
        .to_string();

    'scan: for token in &tokens {
        for (vocab, cat) in [
            (OUTERWEAR, Category::Outerwear),
            (DRESSES, Category::Dress),
            (BOTTOMS, Category::Bottom),
            (FOOTWEAR, Category::Footwear),
            (TOPS, Category::Top),
        ] {
            if vocab.contains(token) {
                category = cat;
                subcategory = token.to_string();
                break 'scan;
            }
        }
    }

    let layer = if category == Category::Outerwear {
        Layer::Outer
    } else {
        Layer::Inner
    };

    let coverage = if category == Category::Outerwear {
        Coverage::Long
    } else if category == Category::Dress {
        Coverage::Full
    } else if tokens.contains(&"shorts") {
        Coverage::Short
    } else {
        Coverage::Long
    };

    let structure = if matches!(category, Category::Outerwear | Category::Dress) {
        Structure::Structured
    } else {
        Structure::Unstructured
    };

    let mut usage = Vec::new();
    if category == Category::Outerwear {
        usage.push(Usage::Cold);
    }

    let mut is_formal = structure == Structure::Structured;
    let mut is_casual = false;

    if FORMAL_SUBCATEGORIES.contains(&subcategory.as_str()) {
        is_formal = true;
        // Shirts dress up or down.
        if subcategory == "shirts" {
            is_casual = true;
        }
    }
    if category == Category::Bottom && subcategory == "pants" {
        is_formal = true;
        is_casual = true;
    }
    if CASUAL_SUBCATEGORIES.contains(&subcategory.as_str()) {
        is_casual = true;
    }
    // Usage defaults to casual when nothing marks the item either way.
    if !is_formal && !is_casual {
        is_casual = true;
    }

    if is_formal {
        usage.push(Usage::Formal);
    }
    if is_casual {
        usage.push(Usage::Casual);
    }

    CatalogItem {
        id,
        image: image.to_string(),
        gender,
        category,
        subcategory,
        layer,
        coverage: Some(coverage),
        structure,
        fit: "regular".to_string(),
        usage,
    }
}

/// Tag a full image list in order, assigning sequential ids.
#[must_use]
pub fn tag_images<S: AsRef<str>>(images: &[S]) -> Vec<CatalogItem> {
    images
        .iter()
        .enumerate()
        .map(|(id, image)| tag_image(image.as_ref(), id))
        .collect()
}
