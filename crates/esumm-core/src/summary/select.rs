//! Summary sentence selection.

/// Number of sentences to keep for a text of `sentence_count` sentences
pub fn summary_length(sentence_count: usize, ratio: f64) -> usize {
    let ratio = ratio.clamp(0.0, 1.0);
    ((sentence_count as f64 * ratio).ceil() as usize).max(1)
}

/// Indices of the top `count` sentences, ordered by descending score.
///
/// Ties keep input order so repeated runs are deterministic.
pub fn select_top_sentences(scores: &[f64], count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    indices.truncate(count);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_length_rounds_up() {
        assert_eq!(summary_length(10, 0.6), 6);
        assert_eq!(summary_length(5, 0.6), 3);
        assert_eq!(summary_length(1, 0.6), 1);
    }

    #[test]
    fn test_summary_length_at_least_one() {
        assert_eq!(summary_length(0, 0.6), 1);
        assert_eq!(summary_length(3, 0.0), 1);
    }

    #[test]
    fn test_select_top_by_score() {
        let scores = vec![0.1, 0.9, 0.5];
        assert_eq!(select_top_sentences(&scores, 2), vec![1, 2]);
    }

    #[test]
    fn test_select_more_than_available() {
        let scores = vec![0.2, 0.1];
        assert_eq!(select_top_sentences(&scores, 10), vec![0, 1]);
    }

    #[test]
    fn test_select_ties_keep_input_order() {
        let scores = vec![0.5, 0.5, 0.5];
        assert_eq!(select_top_sentences(&scores, 3), vec![0, 1, 2]);
    }
}
