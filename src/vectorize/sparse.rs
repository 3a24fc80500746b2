// Sparse term-weight vectors and cosine similarity.
//
// Entries are kept sorted by dimension with no duplicates, so a dot product
// is a single merge walk and always sums in the same order.

use std::cmp::Ordering;

/// A sparse vector in the fitted term space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// An all-zero vector of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    /// Build from (dimension, weight) pairs.
    ///
    /// Pairs are sorted, repeated dimensions are summed, and zero weights
    /// and dimensions outside `dim` are dropped.
    pub fn from_pairs(dim: usize, mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        let mut entries: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (index, weight) in pairs {
            if index >= dim {
                continue;
            }
            match entries.last_mut() {
                Some(last) if last.0 == index => last.1 += weight,
                _ => entries.push((index, weight)),
            }
        }
        entries.retain(|&(_, w)| w != 0.0);
        Self { dim, entries }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Non-zero (dimension, weight) entries in dimension order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at a dimension (0.0 when absent).
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by(|probe| probe.0.cmp(&index))
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 norm. A zero vector stays zero.
    pub fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for entry in &mut self.entries {
                entry.1 /= norm;
            }
        }
        self
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine similarity between two sparse vectors.
///
/// Undefined similarity (either side all-zero) is reported as 0.0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < f64::EPSILON {
        0.0
    } else {
        a.dot(b) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_sorts_and_merges() {
        let v = SparseVector::from_pairs(5, vec![(3, 1.0), (1, 2.0), (3, 0.5), (9, 4.0)]);
        assert_eq!(v.entries(), &[(1, 2.0), (3, 1.5)]);
        assert_eq!(v.get(3), 1.5);
        assert_eq!(v.get(0), 0.0);
    }

    #[test]
    fn test_cosine_identical() {
        let v = SparseVector::from_pairs(3, vec![(0, 1.0), (2, 3.0)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = SparseVector::from_pairs(3, vec![(0, 1.0)]);
        let b = SparseVector::from_pairs(3, vec![(1, 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let a = SparseVector::zeros(3);
        let b = SparseVector::from_pairs(3, vec![(1, 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_l2_normalized() {
        let v = SparseVector::from_pairs(2, vec![(0, 3.0), (1, 4.0)]).l2_normalized();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0) - 0.6).abs() < 1e-12);
        assert!(SparseVector::zeros(2).l2_normalized().is_zero());
    }
}
