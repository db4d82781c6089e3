//! Unified Result Model
//!
//! Every command (lookup, trending, wod, history) maps its output to this
//! model before rendering.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Meaning,
    Sentence,
    Synonym,
    Antonym,
    Suggestion,
    Trending,
    Wod,
    History,
    Info,
    Error,
}

impl Kind {
    /// Heading used for this kind in text output
    pub fn heading(&self) -> &'static str {
        match self {
            Kind::Meaning => "MEANING",
            Kind::Sentence => "SENTENCE",
            Kind::Synonym => "SYNONYM",
            Kind::Antonym => "ANTONYM",
            Kind::Suggestion => "SUGGESTION",
            Kind::Trending => "TRENDING",
            Kind::Wod => "WORD OF THE DAY",
            Kind::History => "HISTORY",
            Kind::Info => "INFO",
            Kind::Error => "ERROR",
        }
    }
}

/// Where a result item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Live,
    History,
}

/// Metadata for a result item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// HTTP status of the fetch that produced this item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Fetch time in milliseconds since epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at_ms: Option<i64>,
}

/// Structured error attached to a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiError {
    pub code: String,
    pub message: String,
}

impl LexiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified result item all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// The word this item belongs to (absent for info/error items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    /// Extracted text (a definition, a sentence, a suggested spelling, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// How this item was obtained
    pub origin: Origin,

    /// Metadata
    pub meta: Meta,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<LexiError>,
}

impl ResultItem {
    /// Create a field item (meaning/sentence/synonym/antonym/...) for a word
    pub fn field(kind: Kind, word: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            word: Some(word.into()),
            text: Some(text.into()),
            origin: Origin::Live,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create an info item (expected no-result conditions)
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Info,
            word: None,
            text: Some(message.into()),
            origin: Origin::Live,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create an error item
    pub fn error(error: LexiError) -> Self {
        Self {
            kind: Kind::Error,
            word: None,
            text: None,
            origin: Origin::Live,
            meta: Meta::default(),
            errors: vec![error],
        }
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Set origin
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Texts of all items with the given kind, in insertion order
    pub fn texts_of(&self, kind: Kind) -> Vec<&str> {
        self.items
            .iter()
            .filter(|i| i.kind == kind)
            .filter_map(|i| i.text.as_deref())
            .collect()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
