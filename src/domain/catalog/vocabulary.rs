use super::entries::Entries;
use super::error::ConfigurationError;
use super::language::LanguageCode;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Item ids become file stems, so they are restricted to a path-safe alphabet
static ITEM_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]{0,63}$").expect("valid item id regex"));

/// One board entry: a stable id and its spoken text per language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyItem {
    id: String,
    labels: BTreeMap<LanguageCode, String>,
}

impl VocabularyItem {
    pub fn new(
        id: impl Into<String>,
        labels: BTreeMap<LanguageCode, String>,
    ) -> Result<Self, ConfigurationError> {
        let id = id.into();
        if !ITEM_ID_PATTERN.is_match(&id) {
            return Err(ConfigurationError::InvalidItemId(id));
        }
        if labels.is_empty() {
            return Err(ConfigurationError::NoLabels(id));
        }

        for (language, text) in &labels {
            if text.trim().is_empty() {
                return Err(ConfigurationError::BlankLabel {
                    item_id: id,
                    language: language.clone(),
                });
            }
        }

        Ok(Self { id, labels })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn labels(&self) -> &BTreeMap<LanguageCode, String> {
        &self.labels
    }

    pub fn label(&self, language: &LanguageCode) -> Option<&str> {
        self.labels.get(language).map(String::as_str)
    }
}

/// The full, validated vocabulary table
///
/// Every item covers every language used anywhere in the table, so the set of
/// (item, language) pairs is the full Cartesian product of items and languages.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    items: Vec<VocabularyItem>,
    languages: BTreeSet<LanguageCode>,
}

impl Vocabulary {
    pub fn new(items: Vec<VocabularyItem>) -> Result<Self, ConfigurationError> {
        if items.is_empty() {
            return Err(ConfigurationError::EmptyVocabulary);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(ConfigurationError::DuplicateItem(item.id().to_string()));
            }
        }

        let languages: BTreeSet<LanguageCode> = items
            .iter()
            .flat_map(|item| item.labels().keys().cloned())
            .collect();

        for item in &items {
            if let Some(missing) = languages.iter().find(|l| !item.labels().contains_key(*l)) {
                return Err(ConfigurationError::MissingLabel {
                    item_id: item.id().to_string(),
                    language: missing.clone(),
                });
            }
        }

        Ok(Self { items, languages })
    }

    /// Build from `(id, [(language, text), ...])` rows
    pub fn from_rows<'a, I, L>(rows: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (&'a str, L)>,
        L: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let items = rows
            .into_iter()
            .map(|(id, labels)| {
                let labels = labels
                    .into_iter()
                    .map(|(language, text)| {
                        LanguageCode::new(language).map(|code| (code, text.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                VocabularyItem::new(id, unique_labels(id, labels)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(items)
    }

    /// Parse the `{ "itemId": { "en": "text", ... } }` JSON layout
    ///
    /// Items keep their file order. A repeated item id or a language listed
    /// twice for one item is an error.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let raw: Entries<String, Entries<LanguageCode, String>> = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::Source {
                path: "vocabulary".to_string(),
                message: e.to_string(),
            })?;

        let items = raw
            .0
            .into_iter()
            .map(|(id, labels)| {
                let labels = unique_labels(&id, labels.0)?;
                VocabularyItem::new(id, labels)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(items)
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn languages(&self) -> &BTreeSet<LanguageCode> {
        &self.languages
    }

    /// Number of (item, language) pairs a full run produces
    pub fn pair_count(&self) -> usize {
        self.items.iter().map(|item| item.labels().len()).sum()
    }
}

fn unique_labels(
    item_id: &str,
    pairs: Vec<(LanguageCode, String)>,
) -> Result<BTreeMap<LanguageCode, String>, ConfigurationError> {
    let mut labels = BTreeMap::new();
    for (language, text) in pairs {
        if labels.contains_key(&language) {
            return Err(ConfigurationError::DuplicateLabel {
                item_id: item_id.to_string(),
                language,
            });
        }
        labels.insert(language, text);
    }
    Ok(labels)
}
