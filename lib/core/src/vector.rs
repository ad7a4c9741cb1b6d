use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A vector of floating point numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Rows are stored unnormalized, so normalization happens here at
    /// comparison time. Mismatched dimensions or a zero-norm operand
    /// score 0.0.
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let mut dot = 0.0f32;
        let mut norm_a = 0.0f32;
        let mut norm_b = 0.0f32;
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }

        let norm_a = norm_a.sqrt();
        let norm_b = norm_b.sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        assert_eq!(self.dim(), other.dim());
        Vector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

/// Arithmetic mean of one or more equal-dimension vectors.
///
/// An empty input is a contract violation and fails with
/// [`Error::EmptyReference`]; callers must guard candidate pools before
/// calling this.
pub fn centroid<'a, I>(vectors: I) -> Result<Vector>
where
    I: IntoIterator<Item = &'a Vector>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next().ok_or(Error::EmptyReference)?;

    let mut sum = first.as_slice().to_vec();
    let mut count = 1usize;
    for v in iter {
        if v.dim() != sum.len() {
            return Err(Error::InvalidDimension {
                expected: sum.len(),
                actual: v.dim(),
            });
        }
        for (s, x) in sum.iter_mut().zip(v.as_slice()) {
            *s += x;
        }
        count += 1;
    }

    let inv = 1.0 / count as f32;
    for s in &mut sum {
        *s *= inv;
    }
    Ok(Vector::new(sum))
}

/// Fixed-width matrix of embedding rows, one per catalog item.
///
/// Rows are validated to share a single dimension at construction and are
/// read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingMatrix {
    rows: Vec<Vector>,
    dim: usize,
}

impl EmbeddingMatrix {
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self> {
        let dim = rows.first().map(Vector::dim).unwrap_or(0);
        for row in &rows {
            if row.dim() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: row.dim(),
                });
            }
        }
        Ok(Self { rows, dim })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row for the given catalog index. Panics if `index` is out of bounds;
    /// indices obtained from an aligned catalog are always valid.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> &Vector {
        &self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let v1 = Vector::new(vec![1.0, 0.0]);
        let v2 = Vector::new(vec![1.0, 0.0]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);

        let v3 = Vector::new(vec![1.0, 0.0]);
        let v4 = Vector::new(vec![0.0, 1.0]);
        assert!((v3.cosine_similarity(&v4) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_dimension_mismatch() {
        let v1 = Vector::new(vec![1.0, 0.0]);
        let v2 = Vector::new(vec![1.0, 0.0, 0.0]);
        assert_eq!(v1.cosine_similarity(&v2), 0.0);
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        let v1 = Vector::new(vec![0.0, 0.0]);
        let v2 = Vector::new(vec![1.0, 1.0]);
        assert_eq!(v1.cosine_similarity(&v2), 0.0);
    }

    #[test]
    fn test_centroid_mean() {
        let v1 = Vector::new(vec![1.0, 0.0]);
        let v2 = Vector::new(vec![0.0, 1.0]);
        let c = centroid([&v1, &v2]).unwrap();
        assert_eq!(c.as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn test_centroid_single_vector() {
        let v = Vector::new(vec![2.0, 4.0]);
        let c = centroid([&v]).unwrap();
        assert_eq!(c.as_slice(), &[2.0, 4.0]);
    }

    #[test]
    fn test_centroid_empty_fails() {
        let empty: Vec<&Vector> = Vec::new();
        assert!(matches!(centroid(empty), Err(Error::EmptyReference)));
    }

    #[test]
    fn test_matrix_uniform_dimension() {
        let rows = vec![Vector::new(vec![1.0, 2.0]), Vector::new(vec![3.0])];
        assert!(matches!(
            EmbeddingMatrix::from_rows(rows),
            Err(Error::InvalidDimension {
                expected: 2,
                actual: 1
            })
        ));
    }
}
