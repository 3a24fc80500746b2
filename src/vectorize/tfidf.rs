// TF-IDF term space fitted over the combined item and reference corpora.
//
// Fitting is a pure function of the corpus and returns an owned model value.
// Items, categories, and product types are all projected through the same
// model, which is what makes their cosine similarities comparable.
//
// Weights follow the usual smoothed definition:
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
// with raw term counts as TF and L2 normalization of every row.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use super::sparse::SparseVector;
use crate::text::tokenize::tokenize;

/// A fitted, closed-vocabulary TF-IDF model.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfModel {
    /// Term -> dimension. Dimensions follow lexicographic term order.
    vocabulary: HashMap<String, usize>,
    /// Dimension -> term
    terms: Vec<String>,
    /// Dimension -> IDF weight
    idf: Vec<f64>,
    /// Number of documents the model was fitted on
    n_documents: usize,
}

impl TfIdfModel {
    /// Fit over the concatenation of several corpora.
    ///
    /// Each corpus contributes its rows as documents in order; the result
    /// is the same as fitting one corpus holding all rows back to back.
    pub fn fit<S: AsRef<str>>(corpora: &[&[S]]) -> Self {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        let mut n_documents = 0;

        for corpus in corpora {
            for doc in corpus.iter() {
                n_documents += 1;
                let unique: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
                for term in unique {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        let n = n_documents as f64;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut terms = Vec::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());

        // BTreeMap iteration gives the lexicographic dimension order
        for (index, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term.clone(), index);
            terms.push(term);
        }

        debug!(
            documents = n_documents,
            vocabulary = terms.len(),
            "Fitted TF-IDF model"
        );

        Self {
            vocabulary,
            terms,
            idf,
            n_documents,
        }
    }

    /// Number of dimensions in the term space.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Dimension assigned to a term, if it was seen at fit time.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Term at a dimension.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// IDF weight of a term, if it was seen at fit time.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|i| self.idf[i])
    }

    /// Project one text into the fitted space.
    ///
    /// Unknown terms are ignored; text with no known terms gives a zero vector.
    pub fn transform_one(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(text) {
            if let Some(index) = self.index_of(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        let pairs = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        SparseVector::from_pairs(self.vocabulary_size(), pairs).l2_normalized()
    }

    /// Project a sequence of texts, one vector per row, in order.
    pub fn transform<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SparseVector> {
        texts
            .iter()
            .map(|text| self.transform_one(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> TfIdfModel {
        let items = ["диван серый", "стол"];
        let categories = ["Мебель диван"];
        let types = ["стол обеденный"];
        TfIdfModel::fit(&[&items[..], &categories[..], &types[..]])
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let model = fitted();
        let terms: Vec<&str> = (0..model.vocabulary_size())
            .filter_map(|i| model.term(i))
            .collect();
        let mut sorted = terms.clone();
        sorted.sort();
        assert_eq!(terms, sorted);
        assert_eq!(model.vocabulary_size(), 5);
        assert_eq!(model.n_documents(), 4);
    }

    #[test]
    fn test_smoothed_idf() {
        let model = fitted();
        // "диван" appears in 2 of 4 documents
        let expected = (5.0f64 / 3.0).ln() + 1.0;
        assert!((model.idf("диван").unwrap() - expected).abs() < 1e-12);
        // "серый" appears in 1 of 4 documents
        let expected = (5.0f64 / 2.0).ln() + 1.0;
        assert!((model.idf("серый").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_terms_ignored() {
        let model = fitted();
        assert!(model.transform_one("кресло табурет").is_zero());
        let v = model.transform_one("стол кресло");
        assert_eq!(v.entries().len(), 1);
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_or_zero() {
        let model = fitted();
        for v in model.transform(&["диван серый стол", "", "серый серый"]) {
            assert!(v.is_zero() || (v.norm() - 1.0).abs() < 1e-12);
            assert_eq!(v.dim(), model.vocabulary_size());
        }
    }

    #[test]
    fn test_empty_corpus_has_empty_vocabulary() {
        let empty: [&str; 0] = [];
        let model = TfIdfModel::fit(&[&empty[..], &["!!"][..]]);
        assert_eq!(model.vocabulary_size(), 0);
        assert!(model.transform_one("диван").is_zero());
    }
}
