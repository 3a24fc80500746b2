// Nearest-reference lookup by cosine similarity.
//
// A brute-force scan over every reference row. Catalog-sized reference sets
// are a few thousand rows at most, so no index structure is involved.

use serde::Serialize;

use crate::vectorize::sparse::{cosine_similarity, SparseVector};

/// One scored reference row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    /// Row index into the reference set
    pub index: usize,
    /// Cosine similarity in [0, 1]
    pub score: f64,
}

/// Reference vectors for one reference set (categories or product types).
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    rows: Vec<SparseVector>,
}

impl ReferenceIndex {
    pub fn new(rows: Vec<SparseVector>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Similarity of `vector` against every row, in row order.
    pub fn scores(&self, vector: &SparseVector) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| cosine_similarity(vector, row))
            .collect()
    }

    /// The most similar row. The lowest index wins ties, so a zero vector
    /// resolves to row 0. Returns `None` only for an empty reference set.
    pub fn nearest(&self, vector: &SparseVector) -> Option<Match> {
        let mut best: Option<Match> = None;
        for (index, row) in self.rows.iter().enumerate() {
            let score = cosine_similarity(vector, row);
            match best {
                Some(current) if score <= current.score => {}
                _ => best = Some(Match { index, score }),
            }
        }
        best
    }

    /// The `n` most similar rows, best first; equal scores keep row order.
    pub fn top_n(&self, vector: &SparseVector, n: usize) -> Vec<Match> {
        let mut ranked: Vec<Match> = self
            .scores(vector)
            .into_iter()
            .enumerate()
            .map(|(index, score)| Match { index, score })
            .collect();
        // Stable sort keeps the index order among ties
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }
}
