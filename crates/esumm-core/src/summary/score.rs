//! Score adjustments applied after graph ranking: position bias, sentence
//! length bias, part-of-speech bias, and normalization.

const POSITION_BIAS_STRENGTH: f64 = 0.3;
const OPTIMAL_SENTENCE_LENGTH: usize = 20;
const MAX_SENTENCE_LENGTH: usize = 40;
const POS_BOOST_FACTOR: f64 = 0.4;
const MAX_SCORE_MULTIPLIER: f64 = 2.0;

/// Weight of a Universal Dependencies POS tag for sentence importance
fn pos_weight(tag: &str) -> f64 {
    match tag {
        "PROPN" => 1.6,
        "NOUN" => 1.3,
        "NUM" => 1.2,
        "VERB" => 1.1,
        "ADJ" => 0.9,
        "AUX" | "INTJ" => 0.8,
        "ADV" => 0.7,
        "SYM" => 0.5,
        "ADP" | "PRON" => 0.4,
        "DET" | "CCONJ" | "SCONJ" | "PART" => 0.3,
        "X" => 0.2,
        "PUNCT" => 0.0,
        _ => 0.6,
    }
}

/// Favor earlier sentences with a quadratic decay towards the end of the text
pub fn incorporate_position_bias(scores: &mut [f64]) {
    let n = scores.len() as f64;
    for (i, score) in scores.iter_mut().enumerate() {
        let position_bias = 1.0 - POSITION_BIAS_STRENGTH * (i as f64 / n).powi(2);
        *score *= position_bias;
    }
}

/// Penalize overly long sentences; short and medium ones keep their score
pub fn adjust_for_sentence_length(scores: &mut [f64], token_counts: &[usize]) {
    for (score, &count) in scores.iter_mut().zip(token_counts) {
        *score *= length_bias(count);
    }
}

fn length_bias(word_count: usize) -> f64 {
    if word_count <= OPTIMAL_SENTENCE_LENGTH {
        1.0
    } else if word_count <= MAX_SENTENCE_LENGTH {
        1.0 - 0.5 * (word_count - OPTIMAL_SENTENCE_LENGTH) as f64
            / (MAX_SENTENCE_LENGTH - OPTIMAL_SENTENCE_LENGTH) as f64
    } else {
        0.5
    }
}

/// Boost sentences rich in content-bearing parts of speech
pub fn incorporate_pos_bias(scores: &mut [f64], tagged_sentences: &[Vec<&'static str>]) {
    for (score, tags) in scores.iter_mut().zip(tagged_sentences) {
        *score *= pos_score(tags);
    }
}

fn pos_score(tags: &[&str]) -> f64 {
    if tags.is_empty() {
        return 1.0;
    }

    let mut total_weight = 0.0;
    let mut important_count = 0usize;
    for tag in tags {
        let weight = pos_weight(tag);
        total_weight += weight;
        if weight > 1.0 {
            important_count += 1;
        }
    }

    let average_weight = total_weight / tags.len() as f64;
    let important_ratio = important_count as f64 / tags.len() as f64;
    let combined_boost = 1.0 + important_ratio * POS_BOOST_FACTOR + diversity_boost(tags);

    (average_weight * combined_boost).min(MAX_SCORE_MULTIPLIER)
}

fn diversity_boost(tags: &[&str]) -> f64 {
    let mut unique_important: Vec<&str> = Vec::new();
    for &tag in tags {
        if pos_weight(tag) > 1.0 && !unique_important.contains(&tag) {
            unique_important.push(tag);
        }
    }
    (unique_important.len() as f64 * 0.05).min(0.2)
}

/// Normalize scores to sum to 1.0 (left untouched when the sum is zero)
pub fn normalize_scores(scores: &mut [f64]) {
    let total: f64 = scores.iter().sum();
    if total == 0.0 {
        return;
    }
    for score in scores.iter_mut() {
        *score /= total;
    }
}
