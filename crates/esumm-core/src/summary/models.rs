use serde::{Deserialize, Serialize};

/// Full result of a summarization run.
///
/// Field names follow the wire format of the summarization service, so this
/// type serializes to and from the `/summarize` response body unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInfo {
    pub summarized_text: String,
    pub original_sentence_count: usize,
    pub summarized_sentence_count: usize,
    pub original_word_count: usize,
    pub summarized_word_count: usize,
    /// Fraction of words removed, in [0, 1]
    pub reduction_rate: f64,
    /// All input sentences with their final scores, highest first
    #[serde(default)]
    pub sentence_ranks: Vec<SentenceRank>,
    #[serde(default)]
    pub graph_nodes: Vec<GraphNode>,
    #[serde(default)]
    pub graph_links: Vec<GraphLink>,
}

/// One input sentence and its normalized rank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceRank {
    pub sentence: String,
    pub rank: f64,
}

/// A sentence node in the similarity graph (ids are 1-based)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub rank: f64,
}

/// An edge between two similar sentences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let info = SummaryInfo {
            summarized_text: "A summary.".to_string(),
            original_sentence_count: 3,
            summarized_sentence_count: 1,
            original_word_count: 30,
            summarized_word_count: 10,
            reduction_rate: 0.666,
            sentence_ranks: vec![SentenceRank {
                sentence: "A summary.".to_string(),
                rank: 0.5,
            }],
            graph_nodes: vec![GraphNode { id: 1, rank: 0.5 }],
            graph_links: vec![GraphLink {
                source: 1,
                target: 2,
            }],
        };

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("summarizedText").is_some());
        assert!(json.get("originalSentenceCount").is_some());
        assert!(json.get("reductionRate").is_some());
        assert!(json.get("sentenceRanks").is_some());
        assert!(json.get("graphNodes").is_some());
        assert!(json.get("graphLinks").is_some());
    }

    #[test]
    fn test_deserialize_without_optional_lists() {
        let json = r#"{
            "summarizedText": "Short.",
            "originalSentenceCount": 2,
            "summarizedSentenceCount": 1,
            "originalWordCount": 12,
            "summarizedWordCount": 4,
            "reductionRate": 0.6667
        }"#;

        let info: SummaryInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.summarized_text, "Short.");
        assert!(info.sentence_ranks.is_empty());
        assert!(info.graph_nodes.is_empty());
    }
}
