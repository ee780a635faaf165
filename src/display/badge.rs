use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub const UNMAPPED_BADGE: &str = "N/A";

const DEFAULT_BADGES: &[(&str, &str)] = &[
    ("Chicago", "IL"),
    ("Miami", "FL"),
    ("Miami Beach", "FL"),
    ("Fort Lauderdale", "FL"),
    ("Orlando", "FL"),
    ("Tampa", "FL"),
];

#[derive(Debug, Error)]
pub enum BadgeFileError {
    #[error("I/O error reading badge file: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error in badge file: {0}")]
    Toml(#[from] toml::de::Error),
}

// badges.toml
// [badges]
// "Chicago" = "IL"
// "Austin" = "TX"
#[derive(Debug, Deserialize)]
struct BadgeFile {
    #[serde(default)]
    badges: HashMap<String, String>,
}

/// City name to short location code, e.g. "Chicago" -> "IL".
/// Lookups ignore case and surrounding whitespace.
#[derive(Debug, Clone)]
pub struct BadgeMap {
    codes: HashMap<String, String>,
    fallback: String,
}

impl Default for BadgeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (city, code) in DEFAULT_BADGES {
            map.insert(city, code);
        }
        map
    }
}

impl BadgeMap {
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
            fallback: UNMAPPED_BADGE.to_string(),
        }
    }

    pub fn insert(&mut self, city: &str, code: &str) {
        self.codes.insert(normalize(city), code.trim().to_string());
    }

    pub fn code_for(&self, city: &str) -> &str {
        self.codes
            .get(&normalize(city))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Built-in table with the entries of a TOML file laid over it.
    pub fn with_overrides_from_str(toml_text: &str) -> Result<Self, BadgeFileError> {
        let file: BadgeFile = toml::from_str(toml_text)?;
        let mut map = Self::default();
        for (city, code) in &file.badges {
            map.insert(city, code);
        }
        Ok(map)
    }

    pub fn with_overrides_from_file(path: &Path) -> Result<Self, BadgeFileError> {
        let text = std::fs::read_to_string(path)?;
        Self::with_overrides_from_str(&text)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

fn normalize(city: &str) -> String {
    city.trim().to_lowercase()
}
