//! Synonyms and antonyms from a word's entry page

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::util::dedup_capped;
use crate::extract::element_text;

static SYNONYM: Lazy<Selector> = Lazy::new(|| Selector::parse("section.synonyms a").unwrap());
static ANTONYM: Lazy<Selector> = Lazy::new(|| Selector::parse("section.antonyms a").unwrap());

/// At most 5 entries, deduplicated, document order
const THESAURUS_CAP: usize = 5;

pub fn find_synonyms(doc: &Html) -> Vec<String> {
    collect(doc, &SYNONYM)
}

pub fn find_antonyms(doc: &Html) -> Vec<String> {
    collect(doc, &ANTONYM)
}

fn collect(doc: &Html, selector: &Selector) -> Vec<String> {
    dedup_capped(doc.select(selector).map(element_text).collect(), THESAURUS_CAP)
}
