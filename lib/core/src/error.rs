use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Catalog/embedding row count mismatch: {items} items, {rows} rows")]
    CatalogMisaligned { items: usize, rows: usize },

    #[error("Catalog item at position {position} carries id {id}")]
    MisnumberedItem { position: usize, id: usize },

    #[error("Reference set is empty")]
    EmptyReference,

    #[error("Outfit references unknown image: {0}")]
    UnknownImage(String),

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
