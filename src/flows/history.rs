//! History flow: display previously recorded lookups

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::model::{Kind, Meta, Origin, ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::history::store::{History, Record};

/// Run the history command
pub fn run_history(
    word: Option<&str>,
    history_path: &Path,
    render_config: RenderConfig,
) -> Result<()> {
    let history = History::load(history_path)
        .with_context(|| format!("Failed to load history from {}", history_path.display()))?;

    let result_set = history_result_set(&history, word);

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));
    Ok(())
}

/// Build the result set for a history query (pure, for tests)
pub fn history_result_set(history: &History, word: Option<&str>) -> ResultSet {
    let mut set = ResultSet::new();

    match word {
        Some(word) => match history.get(word) {
            Some(record) => set.extend(record_items(word, record)),
            None => set.push(ResultItem::info(format!(
                "'{}' not found in history",
                word
            ))),
        },
        None => {
            if history.is_empty() {
                set.push(ResultItem::info("History is empty"));
            } else {
                for (word, record) in history.iter() {
                    set.extend(record_items(word, record));
                }
            }
        }
    }

    set
}

fn record_items(word: &str, record: &Record) -> Vec<ResultItem> {
    let meta = Meta {
        status: None,
        fetched_at_ms: Some(record.looked_up_at_ms),
    };

    let fields: [(&str, &Vec<String>); 4] = [
        ("meaning", &record.meaning),
        ("sentence", &record.sentence),
        ("synonym", &record.synonym),
        ("antonym", &record.antonym),
    ];

    let mut items = Vec::new();
    for (name, values) in fields {
        for value in values {
            items.push(
                ResultItem::field(Kind::History, word, format!("{}: {}", name, value))
                    .with_origin(Origin::History)
                    .with_meta(meta),
            );
        }
    }
    items
}
