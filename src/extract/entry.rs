//! Definitions and example sentences from a word's entry page

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extract::element_text;

static MEANING: Lazy<Selector> = Lazy::new(|| Selector::parse("div.def-content").unwrap());
static SENTENCE: Lazy<Selector> = Lazy::new(|| Selector::parse("p.partner-example-text").unwrap());

/// All definitions on the page, in document order
pub fn find_meaning(doc: &Html) -> Vec<String> {
    doc.select(&MEANING)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Example sentences that actually contain the looked-up word
pub fn find_sentences(doc: &Html, word: &str) -> Vec<String> {
    let needle = word.to_lowercase();
    doc.select(&SENTENCE)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .filter(|s| s.to_lowercase().contains(&needle))
        .collect()
}
