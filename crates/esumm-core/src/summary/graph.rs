//! Sentence similarity graph construction.
//!
//! Sentences become nodes; an undirected edge connects two sentences whose
//! TF-IDF cosine similarity exceeds a dynamic threshold (the median of all
//! pairwise similarities).

use std::collections::BTreeSet;

use super::tfidf::TfIdfVector;

/// Cosine similarity between two sparse vectors
pub fn cosine_similarity(a: &TfIdfVector, b: &TfIdfVector) -> f64 {
    let mut dot = 0.0;
    let mut magnitude_a = 0.0;

    for (term, &weight) in a {
        dot += weight * b.get(term).copied().unwrap_or(0.0);
        magnitude_a += weight * weight;
    }

    let magnitude_b: f64 = b.values().map(|w| w * w).sum();

    let magnitude_a = magnitude_a.sqrt();
    let magnitude_b = magnitude_b.sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    dot / (magnitude_a * magnitude_b)
}

/// Similarity threshold at the 50th percentile of all pairwise similarities.
///
/// Fewer than two sentences means no pairs; the threshold is 0.
pub fn dynamic_threshold(vectors: &[TfIdfVector]) -> f64 {
    let mut similarities = all_pairwise_similarities(vectors);
    if similarities.is_empty() {
        return 0.0;
    }

    similarities.sort_by(f64::total_cmp);
    let index = (similarities.len() as f64 * 0.50) as usize;
    similarities[index.min(similarities.len() - 1)]
}

/// Build the undirected adjacency over sentence indices
pub fn build_graph(vectors: &[TfIdfVector], threshold: f64) -> Vec<BTreeSet<usize>> {
    let mut graph: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); vectors.len()];

    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            let similarity = cosine_similarity(&vectors[i], &vectors[j]);
            if similarity > threshold {
                graph[i].insert(j);
                graph[j].insert(i);
            }
        }
    }
    graph
}

fn all_pairwise_similarities(vectors: &[TfIdfVector]) -> Vec<f64> {
    let mut similarities = Vec::new();
    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            similarities.push(cosine_similarity(&vectors[i], &vectors[j]));
        }
    }
    similarities
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vector(entries: &[(&str, f64)]) -> TfIdfVector {
        entries
            .iter()
            .map(|(term, weight)| (term.to_string(), *weight))
            .collect()
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vector(&[("cat", 1.0), ("dog", 2.0)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vector(&[("cat", 1.0)]);
        let b = vector(&[("dog", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_magnitude() {
        let empty: TfIdfVector = HashMap::new();
        let v = vector(&[("cat", 1.0)]);
        assert_eq!(cosine_similarity(&empty, &v), 0.0);
    }

    #[test]
    fn test_threshold_no_pairs() {
        assert_eq!(dynamic_threshold(&[]), 0.0);
        assert_eq!(dynamic_threshold(&[vector(&[("a", 1.0)])]), 0.0);
    }

    #[test]
    fn test_graph_is_symmetric() {
        let vectors = vec![
            vector(&[("cat", 1.0), ("dog", 1.0)]),
            vector(&[("cat", 1.0), ("dog", 0.5)]),
            vector(&[("bird", 1.0)]),
        ];
        let graph = build_graph(&vectors, 0.1);

        for (i, neighbors) in graph.iter().enumerate() {
            for &j in neighbors {
                assert!(graph[j].contains(&i), "edge {}-{} not symmetric", i, j);
            }
        }
        // the dissimilar sentence stays isolated
        assert!(graph[2].is_empty());
    }
}
