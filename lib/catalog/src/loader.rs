//! Loading the pre-tagged catalog and its embedding matrix from disk.
//!
//! The offline pipeline leaves two interchange files behind: a metadata
//! JSON (array of tagged item records) and an embeddings JSON (array of
//! equal-length float rows, one per item, in the same order). Alignment
//! and uniform dimension are validated here once; everything downstream
//! treats the loaded [`Catalog`] as a read-only snapshot.

use outfitx_core::{Catalog, CatalogItem, EmbeddingMatrix, Error, Result, Vector};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Read the tagged item records.
pub fn load_metadata(path: &Path) -> Result<Vec<CatalogItem>> {
    let file = File::open(path)?;
    let items: Vec<CatalogItem> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::CatalogLoad(format!("{}: {}", path.display(), e)))?;
    Ok(items)
}

/// Read the embedding rows and validate their shared dimension.
pub fn load_embeddings(path: &Path) -> Result<EmbeddingMatrix> {
    let file = File::open(path)?;
    let rows: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::CatalogLoad(format!("{}: {}", path.display(), e)))?;
    EmbeddingMatrix::from_rows(rows.into_iter().map(Vector::new).collect())
}

/// Load and align the full catalog snapshot.
pub fn load_catalog(metadata_path: &Path, embeddings_path: &Path) -> Result<Catalog> {
    let items = load_metadata(metadata_path)?;
    let embeddings = load_embeddings(embeddings_path)?;
    let catalog = Catalog::new(items, embeddings)?;
    info!(
        items = catalog.len(),
        dim = catalog.dim(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const METADATA: &str = r#"[
        {
            "id": 0,
            "image": "MEN-Tees-01.jpg",
            "gender": "men",
            "category": "top",
            "subcategory": "tees",
            "layer": "inner",
            "coverage": "long",
            "structure": "unstructured",
            "fit": "regular",
            "usage": ["casual"]
        },
        {
            "id": 1,
            "image": "MEN-Jeans-01.jpg",
            "gender": "men",
            "category": "bottom",
            "subcategory": "jeans",
            "layer": "inner",
            "coverage": "long",
            "structure": "unstructured",
            "fit": "regular",
            "usage": ["casual"]
        }
    ]"#;

    #[test]
    fn test_load_valid_catalog() {
        let dir = TempDir::new().unwrap();
        let metadata = write_file(&dir, "metadata.json", METADATA);
        let embeddings = write_file(&dir, "embeddings.json", "[[1.0, 0.0], [0.0, 1.0]]");

        let catalog = load_catalog(&metadata, &embeddings).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.dim(), 2);
        assert_eq!(catalog.index_of_image("MEN-Jeans-01.jpg"), Some(1));
    }

    #[test]
    fn test_row_count_mismatch_fails() {
        let dir = TempDir::new().unwrap();
        let metadata = write_file(&dir, "metadata.json", METADATA);
        let embeddings = write_file(&dir, "embeddings.json", "[[1.0, 0.0]]");

        let result = load_catalog(&metadata, &embeddings);
        assert!(matches!(
            result,
            Err(Error::CatalogMisaligned { items: 2, rows: 1 })
        ));
    }

    #[test]
    fn test_ragged_rows_fail() {
        let dir = TempDir::new().unwrap();
        let metadata = write_file(&dir, "metadata.json", METADATA);
        let embeddings = write_file(&dir, "embeddings.json", "[[1.0, 0.0], [0.0]]");

        let result = load_catalog(&metadata, &embeddings);
        assert!(matches!(result, Err(Error::InvalidDimension { .. })));
    }

    #[test]
    fn test_malformed_json_fails() {
        let dir = TempDir::new().unwrap();
        let metadata = write_file(&dir, "metadata.json", "not json");
        let embeddings = write_file(&dir, "embeddings.json", "[]");

        let result = load_catalog(&metadata, &embeddings);
        assert!(matches!(result, Err(Error::CatalogLoad(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let embeddings = write_file(&dir, "embeddings.json", "[]");

        let result = load_catalog(&dir.path().join("absent.json"), &embeddings);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
