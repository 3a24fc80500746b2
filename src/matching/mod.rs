// Matching — nearest-reference resolution for categories and product types.

pub mod classify;
pub mod nearest;

pub use classify::{Candidates, Classification, Classifier};
pub use nearest::{Match, ReferenceIndex};
