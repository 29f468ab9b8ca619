//! Graph-based sentence ranking via power iteration.

use std::collections::BTreeSet;

const DAMPING_FACTOR: f64 = 0.85;
const MAX_ITERATIONS: usize = 100;
const MIN_DIFF: f64 = 0.001;

/// Rank sentences over the similarity graph.
///
/// Standard PageRank-style iteration: every score starts at 1.0 and each
/// round redistributes neighbor scores weighted by neighbor degree, until
/// the largest per-sentence change drops below `MIN_DIFF` or the iteration
/// budget runs out. Isolated sentences settle at `1 - DAMPING_FACTOR`.
pub fn rank_sentences(graph: &[BTreeSet<usize>]) -> Vec<f64> {
    let n = graph.len();
    let mut scores = vec![1.0; n];

    for _ in 0..MAX_ITERATIONS {
        let mut new_scores = vec![0.0; n];
        for (i, neighbors) in graph.iter().enumerate() {
            let mut score = 1.0 - DAMPING_FACTOR;
            for &j in neighbors {
                // j has at least one neighbor (i), so the degree is never zero
                score += DAMPING_FACTOR * scores[j] / graph[j].len() as f64;
            }
            new_scores[i] = score;
        }

        let max_diff = scores
            .iter()
            .zip(&new_scores)
            .map(|(old, new)| (new - old).abs())
            .fold(0.0, f64::max);
        scores = new_scores;

        if max_diff < MIN_DIFF {
            break;
        }
    }
    scores
}
