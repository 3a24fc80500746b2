// catmatch: catalog enrichment by text similarity
//
// This is the library root. Each module corresponds to one stage of the
// enrichment pipeline, from raw catalog files to the augmented output.

pub mod catalog;
pub mod config;
pub mod matching;
pub mod output;
pub mod pipeline;
pub mod text;
pub mod vectorize;
