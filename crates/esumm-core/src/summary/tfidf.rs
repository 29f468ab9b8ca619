//! TF-IDF vectors over processed sentences.
//!
//! Vectors are sparse maps from term to weight; terms absent from a sentence
//! are implicitly zero. IDF uses ln(n / (df + 1)), so terms appearing in
//! every sentence get a slightly negative weight and contribute nothing
//! useful to similarity, which is the intent.

use std::collections::{HashMap, HashSet};

pub type TfIdfVector = HashMap<String, f64>;

/// Compute one sparse TF-IDF vector per sentence (index-aligned with input)
pub fn tfidf_vectors(sentences: &[Vec<String>]) -> Vec<TfIdfVector> {
    let idf = inverse_document_frequency(sentences);

    sentences
        .iter()
        .map(|tokens| {
            let mut tf: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *tf.entry(token.as_str()).or_insert(0) += 1;
            }

            tf.into_iter()
                .map(|(term, count)| {
                    let weight = count as f64 * idf.get(term).copied().unwrap_or(0.0);
                    (term.to_string(), weight)
                })
                .collect()
        })
        .collect()
}

/// IDF per vocabulary term: ln(sentence_count / (document_frequency + 1)).
///
/// Document frequency counts sentences containing the term as a token.
fn inverse_document_frequency(sentences: &[Vec<String>]) -> HashMap<String, f64> {
    let n = sentences.len() as f64;
    let mut df: HashMap<&str, usize> = HashMap::new();

    for tokens in sentences {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    df.into_iter()
        .map(|(term, count)| (term.to_string(), (n / (count as f64 + 1.0)).ln()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_vector_per_sentence() {
        let sentences = vec![
            sentence(&["cat", "sat"]),
            sentence(&["dog", "sat"]),
            sentence(&["cat", "dog"]),
        ];
        let vectors = tfidf_vectors(&sentences);
        assert_eq!(vectors.len(), 3);
        assert!(vectors[0].contains_key("cat"));
        assert!(!vectors[0].contains_key("dog"));
    }

    #[test]
    fn test_rare_term_outweighs_common_term() {
        let sentences = vec![
            sentence(&["shared", "rare"]),
            sentence(&["shared", "other"]),
            sentence(&["shared", "another"]),
            sentence(&["shared", "more"]),
        ];
        let vectors = tfidf_vectors(&sentences);
        // "rare" appears once (df=1), "shared" everywhere (df=4)
        assert!(vectors[0]["rare"] > vectors[0]["shared"]);
    }

    #[test]
    fn test_term_frequency_scales_weight() {
        let sentences = vec![
            sentence(&["cat", "cat", "cat", "dog"]),
            sentence(&["bird"]),
            sentence(&["fish"]),
        ];
        let vectors = tfidf_vectors(&sentences);
        assert!((vectors[0]["cat"] - 3.0 * vectors[0]["dog"]).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        assert!(tfidf_vectors(&[]).is_empty());
    }
}
