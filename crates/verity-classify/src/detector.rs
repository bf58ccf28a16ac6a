//! Keyword-based category detection.

use verity_core::config::CategoryConfig;
use verity_core::models::Category;

/// Detect the category of a statement by counting keyword matches.
///
/// Pure function over the injected keyword table: lowercases the statement,
/// counts substring hits per category, and returns the category with the
/// highest count. Ties resolve to the first category reaching the maximum
/// in detection order; zero hits everywhere falls back to `General`.
///
/// This is a heuristic — false positives are expected and accepted. It only
/// selects a weighting multiplier, it never gates a prediction.
pub fn detect_category(config: &CategoryConfig, statement: &str) -> Category {
    let lower = statement.to_lowercase();
    let mut best = Category::General;
    let mut best_count = 0usize;
    for category in Category::DETECTION_ORDER {
        let count = config
            .keywords_for(category)
            .iter()
            .filter(|keyword| lower.contains(keyword.as_str()))
            .count();
        if count > best_count {
            best = category;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(statement: &str) -> Category {
        detect_category(&CategoryConfig::default(), statement)
    }

    #[test]
    fn arithmetic_is_mathematics() {
        assert_eq!(detect("2 + 2 = 4"), Category::Mathematics);
    }

    #[test]
    fn capitals_are_geography() {
        assert_eq!(detect("Madrid is the capital of Spain"), Category::Geography);
    }

    #[test]
    fn boiling_points_are_science() {
        assert_eq!(
            detect("Water boils at 100 degrees Celsius under one atmosphere of pressure"),
            Category::Science
        );
    }

    #[test]
    fn programming_is_technology() {
        assert_eq!(
            detect("Python is a programming language with a large library ecosystem"),
            Category::Technology
        );
    }

    #[test]
    fn planets_are_astronomy() {
        assert_eq!(
            detect("Jupiter is the largest planet and its orbit lies beyond Mars"),
            Category::Astronomy
        );
    }

    #[test]
    fn no_keywords_is_general() {
        assert_eq!(detect("This sentence mentions nothing domain specific"), Category::General);
        assert_eq!(detect(""), Category::General);
    }

    #[test]
    fn ties_resolve_to_detection_order() {
        // "degrees" counts for both mathematics and science; the single
        // shared hit goes to mathematics, which enumerates first.
        assert_eq!(detect("about ninety degrees"), Category::Mathematics);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(detect("MADRID IS THE CAPITAL OF SPAIN"), Category::Geography);
    }

    #[test]
    fn custom_keyword_table_is_respected() {
        let mut config = CategoryConfig::default();
        config
            .keywords
            .insert(Category::History, vec!["volcano scrolls".to_string()]);
        assert_eq!(
            detect_category(&config, "the volcano scrolls were found"),
            Category::History
        );
    }
}
