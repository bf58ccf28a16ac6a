//! Synthetic corpus generator.
//!
//! Deterministic template expansion: every family emits true/false statement
//! pairs, the false twin either negated or numerically perturbed. No
//! randomness — the same arguments always produce the same corpus, which
//! keeps generated datasets reproducible and testable.

use tracing::info;

use verity_core::models::{Category, StatementRecord, TruthLabel};

/// Substance melting/boiling points in °C.
const TEMPERATURES: &[(&str, i32, i32)] = &[
    ("water", 100, 0),
    ("nitrogen", -196, -210),
    ("oxygen", -183, -218),
    ("iron", 2862, 1538),
    ("mercury", 357, -39),
];

const CONSTANTS: &[(&str, &str)] = &[
    ("The speed of light is 299792458 m/s", "The speed of light is 150000000 m/s"),
    ("Earth's gravity is 9.81 m/s²", "Earth's gravity is 14.7 m/s²"),
    ("The speed of sound in air is 343 m/s", "The speed of sound in air is 620 m/s"),
    ("The human body has 206 bones", "The human body has 312 bones"),
    ("Normal body temperature is 37 degrees Celsius", "Normal body temperature is 42 degrees Celsius"),
];

/// (country, capital, continent, population in millions).
const COUNTRIES: &[(&str, &str, &str, u32)] = &[
    ("Spain", "Madrid", "Europe", 47),
    ("France", "Paris", "Europe", 67),
    ("Germany", "Berlin", "Europe", 83),
    ("Italy", "Rome", "Europe", 60),
    ("Japan", "Tokyo", "Asia", 125),
    ("China", "Beijing", "Asia", 1412),
    ("Brazil", "Brasilia", "South America", 213),
    ("Canada", "Ottawa", "North America", 38),
    ("Australia", "Canberra", "Oceania", 26),
    ("Egypt", "Cairo", "Africa", 102),
];

const HISTORY_EVENTS: &[(&str, u32)] = &[
    ("World War II ended", 1945),
    ("The French Revolution began", 1789),
    ("The Berlin Wall fell", 1989),
    ("Christopher Columbus reached the Americas", 1492),
    ("The first Moon landing happened", 1969),
    ("The printing press was invented around", 1440),
];

const TECHNOLOGY_FACTS: &[&str] = &[
    "React is a JavaScript library",
    "Vue is a progressive JavaScript framework",
    "Node runs JavaScript on the server",
    "MongoDB is a NoSQL database",
    "PostgreSQL is a relational database",
    "Redis is an in-memory database",
    "Elasticsearch is a search engine",
    "Kafka is a streaming platform",
    "Linux is an open source operating system",
    "Git is a version control system",
];

const ASTRONOMY_FACTS: &[&str] = &[
    "The Earth orbits the Sun",
    "The Moon orbits the Earth",
    "Mars is the fourth planet from the Sun",
    "The Sun is a star",
    "The Milky Way is a galaxy",
    "Jupiter is the largest planet in the solar system",
];

const CHEMISTRY_FACTS: &[(&str, &str)] = &[
    ("Water consists of hydrogen and oxygen", "Water consists of helium and carbon"),
    ("The chemical symbol for gold is Au", "The chemical symbol for gold is Go"),
    ("The chemical symbol for iron is Fe", "The chemical symbol for iron is Ir"),
    ("Table salt is sodium chloride", "Table salt is potassium nitrate"),
    ("The density of gold is 19.32 g/cm³", "The density of gold is 7.18 g/cm³"),
];

/// Accumulates generated records across template families.
#[derive(Debug, Default)]
pub struct CorpusGenerator {
    records: Vec<StatementRecord>,
}

impl CorpusGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[StatementRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StatementRecord> {
        self.records
    }

    fn push_pair(&mut self, true_stmt: String, false_stmt: String, category: Category, source: &str) {
        self.records.push(StatementRecord {
            statement: true_stmt,
            truth_value: TruthLabel::True,
            category,
            source: source.to_string(),
        });
        self.records.push(StatementRecord {
            statement: false_stmt,
            truth_value: TruthLabel::False,
            category,
            source: source.to_string(),
        });
    }

    /// Arithmetic fact pairs over a deterministic value grid.
    pub fn math_facts(&mut self, pairs: usize) -> usize {
        let before = self.records.len();
        for i in 0..pairs {
            let a = 3 + (i * 7) % 97;
            let b = 1 + (i * 5) % 43;
            let (statement, result) = match i % 4 {
                0 => (format!("{a} + {b}"), (a + b) as i64),
                1 => (format!("{a} - {b}"), a as i64 - b as i64),
                2 => (format!("{a} × {b}"), (a * b) as i64),
                _ => (format!("{a} ÷ {b}"), (a / b) as i64),
            };
            let wrong = result + 1 + ((a + b + i) % 9) as i64;
            self.push_pair(
                format!("{statement} = {result}"),
                format!("{statement} = {wrong}"),
                Category::Mathematics,
                "generator:math",
            );
        }
        self.records.len() - before
    }

    /// Temperature and physical-constant pairs.
    pub fn science_facts(&mut self) -> usize {
        let before = self.records.len();
        for &(substance, boiling, freezing) in TEMPERATURES {
            self.push_pair(
                format!("{substance} boils at {boiling}°C"),
                format!("{substance} boils at {}°C", boiling + 17),
                Category::Science,
                "generator:science",
            );
            self.push_pair(
                format!("{substance} freezes at {freezing}°C"),
                format!("{substance} freezes at {}°C", freezing + 23),
                Category::Science,
                "generator:science",
            );
        }
        for &(true_stmt, false_stmt) in CONSTANTS {
            self.push_pair(
                true_stmt.to_string(),
                false_stmt.to_string(),
                Category::Science,
                "generator:science",
            );
        }
        self.records.len() - before
    }

    /// Capital, continent, and population pairs per country.
    pub fn geography_facts(&mut self) -> usize {
        let before = self.records.len();
        for &(country, capital, continent, population) in COUNTRIES {
            self.push_pair(
                format!("{capital} is the capital of {country}"),
                format!("{capital} is not the capital of {country}"),
                Category::Geography,
                "generator:geography",
            );
            self.push_pair(
                format!("{country} is in {continent}"),
                format!("{country} is not in {continent}"),
                Category::Geography,
                "generator:geography",
            );
            self.push_pair(
                format!("{country} has a population of about {population} million inhabitants"),
                format!(
                    "{country} has a population of about {} million inhabitants",
                    population * 3 + 11
                ),
                Category::Geography,
                "generator:geography",
            );
        }
        self.records.len() - before
    }

    /// Event-year pairs.
    pub fn history_facts(&mut self) -> usize {
        let before = self.records.len();
        for &(event, year) in HISTORY_EVENTS {
            self.push_pair(
                format!("{event} in {year}"),
                format!("{event} in {}", year + 44),
                Category::History,
                "generator:history",
            );
        }
        self.records.len() - before
    }

    /// Negated technology pairs.
    pub fn technology_facts(&mut self) -> usize {
        let before = self.records.len();
        for &fact in TECHNOLOGY_FACTS {
            self.push_pair(
                fact.to_string(),
                fact.replacen(" is ", " is not ", 1).replacen(" runs ", " does not run ", 1),
                Category::Technology,
                "generator:technology",
            );
        }
        self.records.len() - before
    }

    /// Negated astronomy pairs.
    pub fn astronomy_facts(&mut self) -> usize {
        let before = self.records.len();
        for &fact in ASTRONOMY_FACTS {
            self.push_pair(
                fact.to_string(),
                fact.replacen(" is ", " is not ", 1).replacen(" orbits ", " does not orbit ", 1),
                Category::Astronomy,
                "generator:astronomy",
            );
        }
        self.records.len() - before
    }

    /// Chemistry pairs.
    pub fn chemistry_facts(&mut self) -> usize {
        let before = self.records.len();
        for &(true_stmt, false_stmt) in CHEMISTRY_FACTS {
            self.push_pair(
                true_stmt.to_string(),
                false_stmt.to_string(),
                Category::Chemistry,
                "generator:chemistry",
            );
        }
        self.records.len() - before
    }

    /// Run every family. `math_pairs` bounds the arithmetic grid; the fact
    /// tables contribute a fixed count each.
    pub fn generate_all(&mut self, math_pairs: usize) -> usize {
        let added = self.math_facts(math_pairs)
            + self.science_facts()
            + self.geography_facts()
            + self.history_facts()
            + self.technology_facts()
            + self.astronomy_facts()
            + self.chemistry_facts();
        info!(records = self.records.len(), added, "synthetic corpus generated");
        added
    }
}
