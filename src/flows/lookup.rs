//! Word lookup flow: fetch entry page, extract requested fields, record
//! history, render.

use anyhow::{Context, Result};
use scraper::Html;
use std::path::Path;

use crate::core::model::{Kind, LexiError, Meta, ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::now_ms;
use crate::extract::{entry, suggest, thesaurus};
use crate::fetch::client::{page_from_file, read_page, Page};
use crate::fetch::urls::lookup_url;
use crate::history::store::{History, Record};

/// Which fields of an entry page to extract
#[derive(Debug, Clone, Copy)]
pub struct FieldSelection {
    pub meaning: bool,
    pub sentence: bool,
    pub synonym: bool,
    pub antonym: bool,
}

impl FieldSelection {
    /// Resolve CLI flags; no flags means meaning only
    pub fn resolve(meaning: bool, sentence: bool, synonym: bool, antonym: bool, all: bool) -> Self {
        if all {
            return Self {
                meaning: true,
                sentence: true,
                synonym: true,
                antonym: true,
            };
        }
        if !(meaning || sentence || synonym || antonym) {
            return Self {
                meaning: true,
                sentence: false,
                synonym: false,
                antonym: false,
            };
        }
        Self {
            meaning,
            sentence,
            synonym,
            antonym,
        }
    }
}

/// Run the lookup command
#[allow(clippy::too_many_arguments)]
pub fn run_lookup(
    word: &str,
    fields: FieldSelection,
    page_file: Option<&Path>,
    history_path: &Path,
    store: bool,
    verbose: bool,
    render_config: RenderConfig,
) -> Result<()> {
    let page = match page_file {
        Some(path) => page_from_file(path)?,
        None => {
            let url = lookup_url(word)?;
            if verbose {
                eprintln!("fetching {}", url);
            }
            read_page(&url)?
        }
    };

    let result_set = lookup_result_set(word, fields, &page);

    if store {
        store_lookup(word, &result_set, history_path, verbose)?;
    }

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

/// Turn a fetched entry page into a result set (pure, for tests)
pub fn lookup_result_set(word: &str, fields: FieldSelection, page: &Page) -> ResultSet {
    let meta = Meta {
        status: Some(page.status),
        fetched_at_ms: Some(now_ms()),
    };

    if !page.ok() && !page.not_found() {
        let mut set = ResultSet::new();
        set.push(
            ResultItem::error(LexiError::new(
                "HTTP_STATUS",
                format!("lookup for '{}' returned HTTP {}", word, page.status),
            ))
            .with_meta(meta),
        );
        return set;
    }

    let doc = Html::parse_document(&page.body);

    let mut set = ResultSet::new();
    if page.ok() {
        if fields.meaning {
            for text in entry::find_meaning(&doc) {
                set.push(ResultItem::field(Kind::Meaning, word, text).with_meta(meta));
            }
        }
        if fields.sentence {
            for text in entry::find_sentences(&doc, word) {
                set.push(ResultItem::field(Kind::Sentence, word, text).with_meta(meta));
            }
        }
        if fields.synonym {
            for text in thesaurus::find_synonyms(&doc) {
                set.push(ResultItem::field(Kind::Synonym, word, text).with_meta(meta));
            }
        }
        if fields.antonym {
            for text in thesaurus::find_antonyms(&doc) {
                set.push(ResultItem::field(Kind::Antonym, word, text).with_meta(meta));
            }
        }
    }

    // Not-found pages and entry pages with nothing extracted both fall back
    // to spelling suggestions.
    if set.is_empty() {
        let suggestions = suggest::find_suggestions(&doc);
        if suggestions.is_empty() {
            set.push(
                ResultItem::info(format!(
                    "No results found for '{}', and no spelling suggestions either",
                    word
                ))
                .with_meta(meta),
            );
        } else {
            for text in suggestions {
                set.push(ResultItem::field(Kind::Suggestion, word, text).with_meta(meta));
            }
        }
    }

    set
}

/// Append extracted fields to the history file
fn store_lookup(
    word: &str,
    result_set: &ResultSet,
    history_path: &Path,
    verbose: bool,
) -> Result<()> {
    let record = record_from(result_set);
    if record.is_empty() {
        return Ok(());
    }

    let mut history = History::load(history_path)
        .with_context(|| format!("Failed to load history from {}", history_path.display()))?;
    history.record(word, record);
    history
        .save(history_path)
        .with_context(|| format!("Failed to save history to {}", history_path.display()))?;

    if verbose {
        eprintln!("recorded '{}' in {}", word, history_path.display());
    }
    Ok(())
}

fn record_from(result_set: &ResultSet) -> Record {
    let texts = |kind| {
        result_set
            .texts_of(kind)
            .into_iter()
            .map(String::from)
            .collect()
    };
    Record {
        meaning: texts(Kind::Meaning),
        sentence: texts(Kind::Sentence),
        synonym: texts(Kind::Synonym),
        antonym: texts(Kind::Antonym),
        looked_up_at_ms: now_ms(),
    }
}
