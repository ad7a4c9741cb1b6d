//! Catalog data model and the request-scoped context.
//!
//! A [`Catalog`] bundles the pre-tagged item records with their row-aligned
//! [`EmbeddingMatrix`]. Alignment (one row per item, `id` == position in
//! both) is checked once at construction, so the recommenders never observe
//! a misaligned pair. Both structures are read-only for the process
//! lifetime; a hot reload must swap the whole `Catalog` at once.

use crate::vector::{EmbeddingMatrix, Vector};
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Outerwear,
    Dress,
    Footwear,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Inner,
    Outer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    Short,
    Long,
    Full,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Structure {
    Structured,
    Unstructured,
}

/// Usage tags derived by the offline tagging step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    Cold,
    Formal,
    Casual,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Office,
    Party,
    Formal,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Minimal,
    Street,
    Formal,
    #[serde(other)]
    Other,
}

/// One catalog entry, produced by the offline tagging step and read-only
/// afterwards. `id` doubles as the row index into the embedding matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: usize,
    pub image: String,
    pub gender: Gender,
    pub category: Category,
    pub subcategory: String,
    pub layer: Layer,
    #[serde(default)]
    pub coverage: Option<Coverage>,
    pub structure: Structure,
    pub fit: String,
    #[serde(default)]
    pub usage: Vec<Usage>,
}

/// Immutable request context. Created fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Context {
    pub gender: Gender,
    pub season: Season,
    pub occasion: Occasion,
    #[serde(default)]
    pub style: Option<Style>,
}

/// The read-only catalog snapshot: items, their embeddings, and an
/// image-name lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    embeddings: EmbeddingMatrix,
    image_index: AHashMap<String, usize>,
}

impl Catalog {
    /// Bundle items with their embedding rows, validating alignment.
    pub fn new(items: Vec<CatalogItem>, embeddings: EmbeddingMatrix) -> Result<Self> {
        if items.len() != embeddings.len() {
            return Err(Error::CatalogMisaligned {
                items: items.len(),
                rows: embeddings.len(),
            });
        }

        let mut image_index = AHashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id != position {
                return Err(Error::MisnumberedItem {
                    position,
                    id: item.id,
                });
            }
            image_index.insert(item.image.clone(), position);
        }

        Ok(Self {
            items,
            embeddings,
            image_index,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Embedding dimension shared by every row.
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.embeddings.dim()
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: usize) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    /// Embedding row for a catalog id. Panics if `id` is out of bounds;
    /// ids taken from this catalog's items are always valid.
    #[inline]
    #[must_use]
    pub fn embedding(&self, id: usize) -> &Vector {
        self.embeddings.row(id)
    }

    #[must_use]
    pub fn index_of_image(&self, image: &str) -> Option<usize> {
        self.image_index.get(image).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: usize, image: &str) -> CatalogItem {
        CatalogItem {
            id,
            image: image.to_string(),
            gender: Gender::Men,
            category: Category::Top,
            subcategory: "tees".to_string(),
            layer: Layer::Inner,
            coverage: Some(Coverage::Long),
            structure: Structure::Unstructured,
            fit: "regular".to_string(),
            usage: vec![Usage::Casual],
        }
    }

    fn matrix(rows: usize) -> EmbeddingMatrix {
        EmbeddingMatrix::from_rows((0..rows).map(|i| Vector::new(vec![i as f32, 1.0])).collect())
            .unwrap()
    }

    #[test]
    fn test_catalog_alignment_checked() {
        let items = vec![item(0, "a.jpg"), item(1, "b.jpg")];
        let result = Catalog::new(items, matrix(3));
        assert!(matches!(
            result,
            Err(Error::CatalogMisaligned { items: 2, rows: 3 })
        ));
    }

    #[test]
    fn test_catalog_rejects_misnumbered_item() {
        let items = vec![item(0, "a.jpg"), item(5, "b.jpg")];
        let result = Catalog::new(items, matrix(2));
        assert!(matches!(
            result,
            Err(Error::MisnumberedItem { position: 1, id: 5 })
        ));
    }

    #[test]
    fn test_image_lookup() {
        let items = vec![item(0, "a.jpg"), item(1, "b.jpg")];
        let catalog = Catalog::new(items, matrix(2)).unwrap();
        assert_eq!(catalog.index_of_image("b.jpg"), Some(1));
        assert_eq!(catalog.index_of_image("missing.jpg"), None);
        assert_eq!(catalog.dim(), 2);
    }

    #[test]
    fn test_unknown_attribute_values_deserialize() {
        let json = r#"{
            "id": 0,
            "image": "x.jpg",
            "gender": "nonbinary",
            "category": "top",
            "subcategory": "tees",
            "layer": "inner",
            "coverage": "long",
            "structure": "unstructured",
            "fit": "regular",
            "usage": ["casual"]
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.gender, Gender::Unknown);
    }

    #[test]
    fn test_context_style_defaults_to_none() {
        let ctx: Context = serde_json::from_str(
            r#"{"gender": "men", "season": "winter", "occasion": "party"}"#,
        )
        .unwrap();
        assert_eq!(ctx.style, None);
    }
}
