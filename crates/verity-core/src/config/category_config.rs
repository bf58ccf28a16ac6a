use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Category weighting and keyword tables, injected into the detector and
/// scorer instead of living in global mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Similarity multiplier per category. Unlisted categories weigh 1.0.
    pub weights: BTreeMap<Category, f64>,
    /// Keyword/symbol lists used for category detection, matched as
    /// substrings of the lowercased statement.
    pub keywords: BTreeMap<Category, Vec<String>>,
}

impl CategoryConfig {
    /// Multiplier for a category, defaulting to 1.0.
    pub fn weight_for(&self, category: Category) -> f64 {
        self.weights.get(&category).copied().unwrap_or(1.0)
    }

    /// Keyword list for a category, empty if unconfigured.
    pub fn keywords_for(&self, category: Category) -> &[String] {
        self.keywords
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(Category::Mathematics, 1.2);
        weights.insert(Category::Science, 1.1);
        weights.insert(Category::Geography, 1.0);
        weights.insert(Category::History, 1.0);
        weights.insert(Category::Technology, 1.1);
        weights.insert(Category::Astronomy, 1.15);

        let mut keywords = BTreeMap::new();
        keywords.insert(Category::Mathematics, to_strings(&[
            "+", "-", "×", "÷", "=", "²", "³", "√", "sum", "subtract", "multipl",
            "divide", "square", "root", "angle", "degrees", "percent",
        ]));
        keywords.insert(Category::Science, to_strings(&[
            "temperature", "degrees", "celsius", "fahrenheit", "weight", "kg",
            "grams", "liters", "milliliters", "pressure", "atmosphere", "gravity",
            "velocity", "km/s", "m/s", "energy", "calories", "proteins",
            "vitamins", "cells", "organs", "system", "respiration",
            "photosynthesis",
        ]));
        keywords.insert(Category::Geography, to_strings(&[
            "country", "countries", "capital", "city", "population",
            "inhabitants", "continent", "ocean", "sea", "river", "mountain",
            "range", "desert", "forest", "climate", "rainfall", "dry", "humid",
        ]));
        keywords.insert(Category::History, to_strings(&[
            "year", "century", "decade", "date", "war", "battle", "king",
            "queen", "emperor", "president", "revolution", "independence",
            "colonization", "empire", "dynasty",
        ]));
        keywords.insert(Category::Technology, to_strings(&[
            "javascript", "python", "java", "html", "css", "sql", "api", "http",
            "https", "ssl", "tls", "protocol", "framework", "library",
            "operating system", "linux", "windows", "mac", "open source",
            "software",
        ]));
        keywords.insert(Category::Astronomy, to_strings(&[
            "planet", "sun", "moon", "star", "galaxy", "asteroid", "comet",
            "orbit", "diameter", "km", "light years", "constellation", "nebula",
            "black hole", "nasa", "space",
        ]));

        Self { weights, keywords }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
