use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{DEFAULT_CATALOG, DEFAULT_KEYWORDS};
use crate::error::{FinanzasError, Result};

/// Label returned when neither the catalog nor the keyword table matches.
pub const FALLBACK_CATEGORY: &str = "Otros";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub aliases: Vec<String>,
}

/// On-disk shape of a catalog file. Arrays rather than maps so that the
/// category order survives a round trip through JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<CategoryEntry>,
    #[serde(default)]
    pub keywords: Vec<CategoryEntry>,
}

/// Ordered category table. Patterns are stored uppercased.
#[derive(Debug, Clone)]
struct PatternTable {
    entries: Vec<(String, Vec<String>)>,
}

impl PatternTable {
    fn from_static(data: &[(&str, &[&str])]) -> Self {
        let entries = data
            .iter()
            .map(|(name, patterns)| {
                (
                    name.to_string(),
                    patterns.iter().map(|p| p.to_uppercase()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    fn from_entries(entries: Vec<CategoryEntry>, what: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(FinanzasError::Catalog(format!("{what}: empty category label")));
            }
            if !seen.insert(entry.name.clone()) {
                return Err(FinanzasError::Catalog(format!(
                    "{what}: duplicate category label '{}'",
                    entry.name
                )));
            }
            // A blank pattern would be contained in every input.
            if entry.aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(FinanzasError::Catalog(format!(
                    "{what}: blank pattern under '{}'",
                    entry.name
                )));
            }
            let patterns = entry.aliases.iter().map(|a| a.to_uppercase()).collect();
            out.push((entry.name, patterns));
        }
        Ok(Self { entries: out })
    }

    fn pattern_count(&self) -> usize {
        self.entries.iter().map(|(_, p)| p.len()).sum()
    }
}

/// Merchant-name classifier: an ordered catalog pass followed by an ordered
/// keyword pass. Immutable once built.
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: PatternTable,
    keywords: PatternTable,
}

impl Classifier {
    pub fn builtin() -> Self {
        Self {
            catalog: PatternTable::from_static(DEFAULT_CATALOG),
            keywords: PatternTable::from_static(DEFAULT_KEYWORDS),
        }
    }

    pub fn from_entries(categories: Vec<CategoryEntry>, keywords: Vec<CategoryEntry>) -> Result<Self> {
        Ok(Self {
            catalog: PatternTable::from_entries(categories, "catalog")?,
            keywords: PatternTable::from_entries(keywords, "keywords")?,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        Self::from_entries(file.categories, file.keywords)
    }

    /// Use the catalog file when one is configured, otherwise the built-in table.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn classify(&self, merchant_text: &str) -> String {
        self.lookup(merchant_text).to_string()
    }

    fn lookup(&self, merchant_text: &str) -> &str {
        let trimmed = merchant_text.trim();
        if trimmed.is_empty() {
            return FALLBACK_CATEGORY;
        }
        let work = trimmed.to_uppercase();

        for (category, aliases) in &self.catalog.entries {
            for alias in aliases {
                if work.contains(alias.as_str()) || alias.contains(work.as_str()) {
                    return category;
                }
            }
        }

        for (category, keywords) in &self.keywords.entries {
            if keywords.iter().any(|kw| work.contains(kw.as_str())) {
                return category;
            }
        }

        FALLBACK_CATEGORY
    }

    /// `(category, alias count)` in catalog order.
    pub fn catalog_summary(&self) -> Vec<(&str, usize)> {
        self.catalog
            .entries
            .iter()
            .map(|(name, aliases)| (name.as_str(), aliases.len()))
            .collect()
    }

    pub fn alias_count(&self) -> usize {
        self.catalog.pattern_count()
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.pattern_count()
    }
}
