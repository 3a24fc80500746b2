// Text preparation — normalization of raw descriptions and term tokenizing.

pub mod normalize;
pub mod tokenize;
