//! Local text statistics computed without any external service.
//!
//! Pure functions over the flattened document text: word counts, sentence
//! lengths, and repeated-word detection. Readability formulas are out of
//! scope here; these helpers only cover the statistics with logic of their
//! own.

use std::collections::HashMap;

/// Everyday stopwords plus filler words that tend to show up as "frequent"
/// without meaning much.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "has", "have",
    "her", "him", "his", "its", "our", "out", "she", "was", "were", "will", "with", "this",
    "that", "these", "those", "they", "them", "then", "than", "there", "their", "what", "when",
    "where", "which", "while", "who", "whom", "why", "how", "from", "into", "onto", "over",
    "under", "about", "after", "before", "between", "because", "being", "been", "both", "each",
    "few", "more", "most", "other", "some", "such", "only", "own", "same", "very", "just",
    "your", "yours", "itself", "himself", "herself", "themselves", "does", "did", "doing",
    // filler words beyond the everyday list
    "said", "also", "would", "could", "should", "may", "might", "one", "two", "three", "like",
    "get", "got", "use",
];

/// Number of words, counting only tokens that contain at least one letter.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().any(|c| c.is_alphabetic()))
        .count()
}

/// Word counts per sentence, splitting on `.`, `!` and `?`.
///
/// Useful for spotting writing that is overly uniform or choppy. Empty
/// sentences (consecutive terminators, trailing punctuation) are dropped.
pub fn sentence_lengths(text: &str) -> Vec<usize> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| sentence.split_whitespace().count())
        .collect()
}

/// Average words per sentence, `0.0` for text without sentences.
pub fn average_sentence_length(text: &str) -> f64 {
    let lengths = sentence_lengths(text);
    if lengths.is_empty() {
        return 0.0;
    }
    lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
}

/// Most repeated meaningful words, most frequent first.
///
/// Only lowercase alphabetic tokens of three or more letters count, with
/// stopwords removed. Ties break alphabetically so the ordering is stable
/// across calls.
pub fn overused_words(text: &str, top_n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| token.len() >= 3)
        .map(str::to_lowercase)
    {
        if !STOPWORDS.contains(&token.as_str()) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_bare_punctuation() {
        assert_eq!(word_count("Hello, world - again!"), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("... --- ..."), 0);
    }

    #[test]
    fn test_sentence_lengths() {
        let text = "One two three. Four five! Six?";
        assert_eq!(sentence_lengths(text), vec![3, 2, 1]);
    }

    #[test]
    fn test_sentence_lengths_drops_empty_segments() {
        assert_eq!(sentence_lengths("Wait... what?"), vec![1, 1]);
        assert!(sentence_lengths("").is_empty());
    }

    #[test]
    fn test_average_sentence_length() {
        assert!((average_sentence_length("One two. Three four.") - 2.0).abs() < 1e-9);
        assert_eq!(average_sentence_length(""), 0.0);
    }

    #[test]
    fn test_overused_words_filters_stopwords_and_short_tokens() {
        let text = "The report covers the budget. The budget report is a budget report.";
        let top = overused_words(text, 2);
        assert_eq!(
            top,
            vec![("budget".to_string(), 3), ("report".to_string(), 3)]
        );
    }

    #[test]
    fn test_overused_words_is_case_insensitive() {
        let top = overused_words("Process process PROCESS", 1);
        assert_eq!(top, vec![("process".to_string(), 3)]);
    }

    #[test]
    fn test_overused_words_ties_break_alphabetically() {
        let top = overused_words("zebra apple zebra apple", 2);
        assert_eq!(
            top,
            vec![("apple".to_string(), 2), ("zebra".to_string(), 2)]
        );
    }
}
