//! Text preprocessing: sentence splitting, tokenization, stopword removal,
//! lemmatization, and part-of-speech tagging.
//!
//! The tokenizers are rule-based. Lemmatization uses a small irregular-form
//! table plus suffix stripping, and the POS tagger combines closed-class word
//! lists with suffix heuristics over Universal Dependencies tags. This trades
//! accuracy for a self-contained pipeline with no model files.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Tokens that end with a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
    "no", "fig", "al", "approx", "dept", "est", "min", "max", "vol",
];

static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn stopwords() -> &'static HashSet<&'static str> {
    STOPWORDS.get_or_init(|| {
        include_str!("stopwords.txt")
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect()
    })
}

/// Check whether a lowercase token is a stopword
pub fn is_stopword(word: &str) -> bool {
    stopwords().contains(word)
}

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` (plus any trailing closing quotes or
/// brackets) followed by whitespace or end of input. Periods after known
/// abbreviations or single initials do not end a sentence, and decimal
/// points never match because they are not followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            while let Some(&q) = chars.peek() {
                if matches!(q, '"' | '\'' | ')' | ']') {
                    current.push(q);
                    chars.next();
                } else {
                    break;
                }
            }

            let at_boundary = match chars.peek() {
                None => true,
                Some(next) => next.is_whitespace(),
            };

            if at_boundary && !(c == '.' && ends_with_abbreviation(&current)) {
                push_sentence(&mut sentences, &mut current);
            }
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

fn ends_with_abbreviation(s: &str) -> bool {
    let last_word = s
        .trim_end_matches(|c: char| c == '.' || c == '"' || c == '\'' || c == ')' || c == ']')
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("");
    let token: String = last_word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    if token.is_empty() {
        return false;
    }
    // Single initials ("J. Smith") never end a sentence
    if token.chars().count() == 1 && token.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&token.as_str())
}

/// Tokenize a sentence into lowercase words, stripping punctuation
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
        .map(|w| w.trim_matches(|c| c == '\'' || c == '-').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Reduce a lowercase word to a base form.
///
/// Handles a table of common irregular forms, then plural and verbal suffix
/// stripping with consonant undoubling and final-e restoration.
pub fn lemmatize(word: &str) -> String {
    const IRREGULAR: &[(&str, &str)] = &[
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("people", "person"),
        ("geese", "goose"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("said", "say"),
        ("made", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("gave", "give"),
        ("given", "give"),
        ("found", "find"),
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
    ];

    if let Some(&(_, lemma)) = IRREGULAR.iter().find(|&&(form, _)| form == word) {
        return lemma.to_string();
    }

    let n = word.len();
    if n > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..n - 3]);
    }
    if n > 4 && word.ends_with("sses") {
        return word[..n - 2].to_string();
    }
    if n > 3
        && (word.ends_with("shes")
            || word.ends_with("ches")
            || word.ends_with("xes")
            || word.ends_with("zes"))
    {
        return word[..n - 2].to_string();
    }
    if n > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..n - 1].to_string();
    }
    if n > 5 && word.ends_with("ing") {
        return restore_stem(&word[..n - 3]);
    }
    if n > 4 && word.ends_with("ed") {
        return restore_stem(&word[..n - 2]);
    }

    word.to_string()
}

/// Undo the spelling changes introduced by "-ing"/"-ed" suffixation
fn restore_stem(stem: &str) -> String {
    // Byte-indexed rules only make sense for ASCII stems
    if !stem.is_ascii() {
        return stem.to_string();
    }
    let bytes = stem.as_bytes();
    let n = bytes.len();

    // running -> run, stopped -> stop
    if n >= 3 && bytes[n - 1] == bytes[n - 2] && !matches!(bytes[n - 1], b'l' | b's' | b'z') {
        return stem[..n - 1].to_string();
    }
    // making -> make, used -> use (consonant-vowel-consonant stems dropped an e)
    if n >= 3
        && !is_vowel(bytes[n - 1])
        && is_vowel(bytes[n - 2])
        && !is_vowel(bytes[n - 3])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
    {
        return format!("{}e", stem);
    }

    stem.to_string()
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Remove stopwords and lemmatize each sentence, returning the processed
/// token lists (one per input sentence, possibly empty).
pub fn remove_stopwords_and_lemmatize(sentences: &[String]) -> Vec<Vec<String>> {
    let mut stopword_count = 0usize;

    let processed: Vec<Vec<String>> = sentences
        .iter()
        .map(|sentence| {
            tokenize_words(sentence)
                .into_iter()
                .filter(|word| {
                    let stop = is_stopword(word);
                    if stop {
                        stopword_count += 1;
                    }
                    !stop
                })
                .map(|word| lemmatize(&word))
                .collect()
        })
        .collect();

    tracing::debug!(
        "Processed {} sentences, removed {} stopwords",
        sentences.len(),
        stopword_count
    );

    processed
}

/// Universal Dependencies POS tag for a lowercase token.
///
/// Closed classes are matched exactly; open classes fall back to suffix
/// heuristics with NOUN as the default.
pub fn tag_part_of_speech(word: &str) -> &'static str {
    const DETERMINERS: &[&str] = &[
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
        "some", "any", "no", "both", "all", "another",
    ];
    const ADPOSITIONS: &[&str] = &[
        "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "from", "up", "down", "under",
        "over", "onto", "upon", "within", "without",
    ];
    const PRONOUNS: &[&str] = &[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "who",
        "whom", "which", "what", "mine", "yours", "his", "hers", "ours", "theirs", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "something",
        "anything", "nothing", "everything", "someone", "anyone", "everyone",
    ];
    const AUXILIARIES: &[&str] = &[
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can", "could",
    ];
    const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet"];
    const SUBORDINATORS: &[&str] = &[
        "because", "although", "though", "while", "if", "unless", "since", "whereas", "whether",
        "until",
    ];
    const PARTICLES: &[&str] = &["to", "not"];
    const INTERJECTIONS: &[&str] = &["oh", "ah", "wow", "hey", "hello", "yes", "please"];
    const NUMBER_WORDS: &[&str] = &[
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "hundred", "thousand", "million", "billion",
    ];

    if word.chars().all(|c| !c.is_alphanumeric()) {
        return "PUNCT";
    }
    if word.chars().any(|c| c.is_ascii_digit()) {
        return "NUM";
    }
    if DETERMINERS.contains(&word) {
        return "DET";
    }
    if ADPOSITIONS.contains(&word) {
        return "ADP";
    }
    if PRONOUNS.contains(&word) {
        return "PRON";
    }
    if AUXILIARIES.contains(&word) {
        return "AUX";
    }
    if COORDINATORS.contains(&word) {
        return "CCONJ";
    }
    if SUBORDINATORS.contains(&word) {
        return "SCONJ";
    }
    if PARTICLES.contains(&word) {
        return "PART";
    }
    if INTERJECTIONS.contains(&word) {
        return "INTJ";
    }
    if NUMBER_WORDS.contains(&word) {
        return "NUM";
    }

    if word.ends_with("ly") {
        return "ADV";
    }
    if word.ends_with("tion")
        || word.ends_with("sion")
        || word.ends_with("ment")
        || word.ends_with("ness")
        || word.ends_with("ity")
        || word.ends_with("ance")
        || word.ends_with("ence")
        || word.ends_with("ship")
        || word.ends_with("hood")
        || word.ends_with("ism")
        || word.ends_with("er")
        || word.ends_with("or")
    {
        return "NOUN";
    }
    if word.ends_with("ous")
        || word.ends_with("ful")
        || word.ends_with("ive")
        || word.ends_with("able")
        || word.ends_with("ible")
        || word.ends_with("ical")
        || word.ends_with("ish")
        || word.ends_with("less")
    {
        return "ADJ";
    }
    if word.ends_with("ize")
        || word.ends_with("ise")
        || word.ends_with("ify")
        || word.ends_with("ing")
        || word.ends_with("ed")
    {
        return "VERB";
    }

    "NOUN"
}

/// Tag every token of every processed sentence
pub fn tag_parts_of_speech(sentences: &[Vec<String>]) -> Vec<Vec<&'static str>> {
    sentences
        .iter()
        .map(|tokens| tokens.iter().map(|w| tag_part_of_speech(w)).collect())
        .collect()
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_sentences() {
        let sentences = split_sentences("First sentence. Second one! Third? Done.");
        assert_eq!(
            sentences,
            vec!["First sentence.", "Second one!", "Third?", "Done."]
        );
    }

    #[test]
    fn test_split_keeps_abbreviations() {
        let sentences = split_sentences("Dr. Smith arrived. He was late.");
        assert_eq!(sentences, vec!["Dr. Smith arrived.", "He was late."]);
    }

    #[test]
    fn test_split_keeps_initials_and_decimals() {
        let sentences = split_sentences("J. Doe paid 3.50 dollars. It was cheap.");
        assert_eq!(
            sentences,
            vec!["J. Doe paid 3.50 dollars.", "It was cheap."]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_words() {
        let words = tokenize_words("The Quick, brown fox -- it jumped!");
        assert_eq!(words, vec!["the", "quick", "brown", "fox", "it", "jumped"]);
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        let words = tokenize_words("Don't stop the well-known test.");
        assert_eq!(words, vec!["don't", "stop", "the", "well-known", "test"]);
    }

    #[test]
    fn test_lemmatize_plurals() {
        assert_eq!(lemmatize("cats"), "cat");
        assert_eq!(lemmatize("cities"), "city");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("glass"), "glass");
    }

    #[test]
    fn test_lemmatize_verbal_suffixes() {
        assert_eq!(lemmatize("running"), "run");
        assert_eq!(lemmatize("making"), "make");
        assert_eq!(lemmatize("asked"), "ask");
        assert_eq!(lemmatize("stopped"), "stop");
    }

    #[test]
    fn test_lemmatize_irregulars() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("went"), "go");
        assert_eq!(lemmatize("best"), "good");
    }

    #[test]
    fn test_stopword_removal() {
        let sentences = vec!["The cats are running in the garden".to_string()];
        let processed = remove_stopwords_and_lemmatize(&sentences);
        assert_eq!(processed, vec![vec!["cat", "run", "garden"]]);
    }

    #[test]
    fn test_pos_closed_classes() {
        assert_eq!(tag_part_of_speech("the"), "DET");
        assert_eq!(tag_part_of_speech("of"), "ADP");
        assert_eq!(tag_part_of_speech("they"), "PRON");
        assert_eq!(tag_part_of_speech("could"), "AUX");
        assert_eq!(tag_part_of_speech("and"), "CCONJ");
        assert_eq!(tag_part_of_speech("42"), "NUM");
    }

    #[test]
    fn test_pos_suffix_heuristics() {
        assert_eq!(tag_part_of_speech("quickly"), "ADV");
        assert_eq!(tag_part_of_speech("information"), "NOUN");
        assert_eq!(tag_part_of_speech("beautiful"), "ADJ");
        assert_eq!(tag_part_of_speech("analyzing"), "VERB");
        // open-class default
        assert_eq!(tag_part_of_speech("fox"), "NOUN");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("one two  three\nfour"), 4);
        assert_eq!(count_words(""), 0);
    }
}
