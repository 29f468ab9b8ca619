//! Extractive summarization pipeline.
//!
//! Preprocess -> TF-IDF -> similarity graph -> graph ranking -> score
//! adjustments -> selection, producing a [`SummaryInfo`] with statistics,
//! per-sentence ranks, and the similarity graph for display.

use std::sync::OnceLock;

use regex::Regex;

use super::models::{SentenceRank, SummaryInfo};
use super::{graph, graph_data, preprocess, rank, score, select, tfidf};
use crate::{Error, Result};

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn double_period_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\s*\.").unwrap())
}

/// Extractive summarizer over a sentence similarity graph
#[derive(Debug, Clone)]
pub struct TextRankSummarizer {
    summary_ratio: f64,
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self { summary_ratio: 0.6 }
    }
}

impl TextRankSummarizer {
    /// Create a summarizer keeping roughly `summary_ratio` of the sentences
    pub fn new(summary_ratio: f64) -> Self {
        Self {
            summary_ratio: summary_ratio.clamp(0.0, 1.0),
        }
    }

    pub fn summarize(&self, text: &str) -> Result<SummaryInfo> {
        tracing::info!("Starting summarization for text of length {}", text.len());

        let original_sentences = preprocess::split_sentences(text);
        if original_sentences.is_empty() {
            return Err(Error::EmptyInput);
        }
        tracing::debug!("Tokenized {} sentences", original_sentences.len());

        let processed_sentences = preprocess::remove_stopwords_and_lemmatize(&original_sentences);
        let tagged_sentences = preprocess::tag_parts_of_speech(&processed_sentences);

        let original_sentence_count = original_sentences.len();
        let original_word_count = preprocess::count_words(text);

        let num_sentences = select::summary_length(original_sentence_count, self.summary_ratio);

        let vectors = tfidf::tfidf_vectors(&processed_sentences);
        let similarity_threshold = graph::dynamic_threshold(&vectors);
        let similarity_graph = graph::build_graph(&vectors, similarity_threshold);

        let mut scores = rank::rank_sentences(&similarity_graph);

        score::incorporate_position_bias(&mut scores);
        let token_counts: Vec<usize> = processed_sentences.iter().map(Vec::len).collect();
        score::adjust_for_sentence_length(&mut scores, &token_counts);
        score::incorporate_pos_bias(&mut scores, &tagged_sentences);
        score::normalize_scores(&mut scores);

        let selected = select::select_top_sentences(&scores, num_sentences);
        let summarized_sentences: Vec<&str> = selected
            .iter()
            .map(|&i| original_sentences[i].as_str())
            .collect();

        let summarized_text = cleanup_text(&summarized_sentences.join(" "));

        let summarized_word_count = preprocess::count_words(&summarized_text);
        let reduction_rate = if original_word_count > 0 {
            1.0 - summarized_word_count as f64 / original_word_count as f64
        } else {
            0.0
        };

        let mut sentence_ranks: Vec<SentenceRank> = original_sentences
            .iter()
            .zip(&scores)
            .map(|(sentence, &rank)| SentenceRank {
                sentence: sentence.clone(),
                rank,
            })
            .collect();
        sentence_ranks.sort_by(|a, b| b.rank.total_cmp(&a.rank));

        let graph_nodes = graph_data::create_graph_nodes(&scores);
        let graph_links = graph_data::create_graph_links(&similarity_graph);

        tracing::info!(
            "Summarization complete: {} of {} sentences kept",
            summarized_sentences.len(),
            original_sentence_count
        );

        Ok(SummaryInfo {
            summarized_text,
            original_sentence_count,
            summarized_sentence_count: summarized_sentences.len(),
            original_word_count,
            summarized_word_count,
            reduction_rate,
            sentence_ranks,
            graph_nodes,
            graph_links,
        })
    }
}

/// Collapse whitespace runs and stray double periods left by joining sentences
fn cleanup_text(text: &str) -> String {
    let collapsed = whitespace_re().replace_all(text, " ");
    let fixed = double_period_re().replace_all(&collapsed, ".");
    fixed.trim().to_string()
}
