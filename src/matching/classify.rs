// Item classification against both reference sets.
//
// Wraps a fitted TfIdfModel together with the projected category and
// product-type vectors. The same nearest-row routine runs against each set.

use serde::Serialize;

use super::nearest::{Match, ReferenceIndex};
use crate::vectorize::sparse::SparseVector;
use crate::vectorize::tfidf::TfIdfModel;

/// The resolved category and product type for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub category: Match,
    pub product_type: Match,
}

/// Ranked candidates for one text, used by `catmatch explain`.
#[derive(Debug, Clone, Serialize)]
pub struct Candidates {
    pub categories: Vec<Match>,
    pub product_types: Vec<Match>,
}

pub struct Classifier {
    model: TfIdfModel,
    categories: ReferenceIndex,
    product_types: ReferenceIndex,
}

impl Classifier {
    /// Fit one term space over all three corpora and project both
    /// reference sets into it.
    ///
    /// All inputs are expected to be normalized already.
    pub fn fit<S: AsRef<str>>(items: &[S], categories: &[S], product_types: &[S]) -> Self {
        let model = TfIdfModel::fit(&[items, categories, product_types]);
        let categories = ReferenceIndex::new(model.transform(categories));
        let product_types = ReferenceIndex::new(model.transform(product_types));
        Self {
            model,
            categories,
            product_types,
        }
    }

    pub fn model(&self) -> &TfIdfModel {
        &self.model
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn product_type_count(&self) -> usize {
        self.product_types.len()
    }

    /// Project one item text into the fitted space.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        self.model.transform_one(text)
    }

    /// Resolve an already-projected item vector.
    ///
    /// Returns `None` when either reference set is empty.
    pub fn classify(&self, vector: &SparseVector) -> Option<Classification> {
        Some(Classification {
            category: self.categories.nearest(vector)?,
            product_type: self.product_types.nearest(vector)?,
        })
    }

    /// The `n` best candidates from each reference set for a text.
    pub fn candidates(&self, text: &str, n: usize) -> Candidates {
        let vector = self.vectorize(text);
        Candidates {
            categories: self.categories.top_n(&vector, n),
            product_types: self.product_types.top_n(&vector, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_matches_both_sets() {
        let items = ["угловой диван серый", "стол обеденный дуб"];
        let categories = ["Мебель/Столы столы стол", "Мебель/Диваны диван диваны"];
        let types = ["Стул", "Диван", "Стол"];
        let classifier = Classifier::fit(&items, &categories, &types);

        let sofa = classifier
            .classify(&classifier.vectorize(items[0]))
            .unwrap();
        assert_eq!(sofa.category.index, 1);
        assert_eq!(sofa.product_type.index, 1);

        let table = classifier
            .classify(&classifier.vectorize(items[1]))
            .unwrap();
        assert_eq!(table.category.index, 0);
        assert_eq!(table.product_type.index, 2);
    }

    #[test]
    fn test_unknown_text_falls_back_to_first_rows() {
        let items = ["диван"];
        let categories = ["Кухня", "Диваны диван"];
        let types = ["Кресло", "Диван"];
        let classifier = Classifier::fit(&items, &categories, &types);

        let result = classifier
            .classify(&classifier.vectorize("ничего общего"))
            .unwrap();
        assert_eq!(result.category.index, 0);
        assert_eq!(result.product_type.index, 0);
        assert_eq!(result.category.score, 0.0);
    }

    #[test]
    fn test_candidates_bounded() {
        let items = ["диван"];
        let categories = ["Диваны диван", "Кухня", "Спальня"];
        let types = ["Диван"];
        let classifier = Classifier::fit(&items, &categories, &types);
        let c = classifier.candidates("диван", 2);
        assert_eq!(c.categories.len(), 2);
        assert_eq!(c.categories[0].index, 0);
        assert_eq!(c.product_types.len(), 1);
    }
}
