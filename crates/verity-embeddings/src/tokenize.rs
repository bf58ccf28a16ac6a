//! Word-level tokenization and n-gram construction.

use std::sync::LazyLock;

use regex::Regex;

use crate::stopwords;

/// Token pattern: numbers (with an optional decimal part), letter runs, and
/// arithmetic symbols. Single digits are kept so statements like
/// "2 + 2 = 4" survive tokenization.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?|\p{L}+|[+\-×÷=√²³%°]").expect("token pattern is valid")
});

/// Lowercase, extract tokens, and drop stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|t| !stopwords::is_stop_word(t))
        .collect()
}

/// All contiguous n-grams of lengths `min..=max`, joined with single spaces.
pub fn ngrams(tokens: &[String], min: usize, max: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for n in min..=max {
        if n == 0 || n > tokens.len() {
            continue;
        }
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn arithmetic_symbols_are_tokens() {
        assert_eq!(toks("2 + 2 = 4"), vec!["2", "+", "2", "=", "4"]);
    }

    #[test]
    fn words_are_lowercased_and_stopped() {
        assert_eq!(
            toks("Madrid is the capital of Spain"),
            vec!["madrid", "capital", "spain"]
        );
    }

    #[test]
    fn negation_survives() {
        assert_eq!(
            toks("Madrid is not the capital of Spain"),
            vec!["madrid", "not", "capital", "spain"]
        );
    }

    #[test]
    fn decimals_stay_single_tokens() {
        assert_eq!(toks("gravity equals 9.81"), vec!["gravity", "equals", "9.81"]);
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(toks("Water boils, at 100!"), vec!["water", "boils", "100"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(toks("").is_empty());
        assert!(toks("   .,;!?").is_empty());
    }

    #[test]
    fn ngram_windows() {
        let tokens: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            ngrams(&tokens, 1, 2),
            vec!["a", "b", "c", "a b", "b c"]
        );
        assert_eq!(ngrams(&tokens, 1, 3).last().unwrap(), "a b c");
    }

    #[test]
    fn ngram_longer_than_input_is_skipped() {
        let tokens: Vec<String> = ["solo"].iter().map(|s| s.to_string()).collect();
        assert_eq!(ngrams(&tokens, 1, 3), vec!["solo"]);
    }
}
