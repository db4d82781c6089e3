//! Trending words and word of the day from the dictionary home page

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extract::element_text;

static TRENDING: Lazy<Selector> = Lazy::new(|| Selector::parse("ul.trending-words li a").unwrap());
static WOD: Lazy<Selector> = Lazy::new(|| Selector::parse("div.wotd a.wotd-link").unwrap());

/// The home page lists more; only the top entries are interesting
const TRENDING_CAP: usize = 5;

pub fn find_trending_words(doc: &Html) -> Vec<String> {
    doc.select(&TRENDING)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .take(TRENDING_CAP)
        .collect()
}

pub fn find_word_of_the_day(doc: &Html) -> Option<String> {
    doc.select(&WOD)
        .map(element_text)
        .find(|s| !s.is_empty())
}
