//! Spelling suggestions from the "word not found" page

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extract::element_text;

static SUGGESTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ul.spell-suggestions li a").unwrap());

/// Suggested spellings offered for a misspelled word, document order
pub fn find_suggestions(doc: &Html) -> Vec<String> {
    doc.select(&SUGGESTION)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .collect()
}
