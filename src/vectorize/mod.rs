// Vector space — TF-IDF fitting, projection, and sparse cosine similarity.

pub mod sparse;
pub mod tfidf;
