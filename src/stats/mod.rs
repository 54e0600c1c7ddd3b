//! Read-only aggregates over the token stream and the classified table

mod frequency;
mod ngrams;
mod top_words;

pub use frequency::{frequency_table, sentiment_counts, word_cloud_input, FrequencyCounter};
pub use ngrams::ngram_frequency;
pub use top_words::top_words;
