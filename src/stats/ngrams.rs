//! N-gram frequency over the ordered token stream

use super::frequency::FrequencyCounter;
use crate::models::NGramCount;

/// Top `limit` overlapping n-grams by count, ties in first-seen order
pub fn ngram_frequency(tokens: &[String], n: usize, limit: usize) -> Vec<NGramCount> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    let counter: FrequencyCounter<&[String]> = tokens.windows(n).collect();
    counter
        .most_common(Some(limit))
        .into_iter()
        .map(|(gram, count)| NGramCount {
            ngram: gram.to_vec(),
            count,
        })
        .collect()
}
