//! Text normalization
//!
//! - Cleaning (lowercase, punctuation strip)
//! - Stop word and exclusion filtering
//! - Whitespace tokenization into a single token stream

mod normalizer;
mod stopwords;

pub use normalizer::{clean_text, ExclusionList, Normalizer, PUNCTUATION};
pub use stopwords::StopWords;
