//! Home-page flows: trending words and word of the day

use anyhow::Result;
use scraper::Html;
use std::path::Path;

use crate::core::model::{Kind, LexiError, Meta, ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::now_ms;
use crate::extract::home;
use crate::fetch::client::{page_from_file, read_page, Page};
use crate::fetch::urls::home_url;

/// Run the trending command
pub fn run_trending(
    page_file: Option<&Path>,
    verbose: bool,
    render_config: RenderConfig,
) -> Result<()> {
    let page = fetch_home(page_file, verbose)?;
    let result_set = trending_result_set(&page);

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));
    Ok(())
}

/// Run the wod command
pub fn run_word_of_day(
    page_file: Option<&Path>,
    verbose: bool,
    render_config: RenderConfig,
) -> Result<()> {
    let page = fetch_home(page_file, verbose)?;
    let result_set = word_of_day_result_set(&page);

    let renderer = Renderer::with_config(render_config);
    println!("{}", renderer.render(&result_set));
    Ok(())
}

fn fetch_home(page_file: Option<&Path>, verbose: bool) -> Result<Page> {
    match page_file {
        Some(path) => page_from_file(path),
        None => {
            let url = home_url()?;
            if verbose {
                eprintln!("fetching {}", url);
            }
            read_page(&url)
        }
    }
}

/// Trending words from a fetched home page (pure, for tests)
pub fn trending_result_set(page: &Page) -> ResultSet {
    let meta = Meta {
        status: Some(page.status),
        fetched_at_ms: Some(now_ms()),
    };

    if !page.ok() {
        return home_error(page, meta);
    }

    let doc = Html::parse_document(&page.body);
    let words = home::find_trending_words(&doc);

    if words.is_empty() {
        let mut set = ResultSet::new();
        set.push(ResultItem::info("No trending words found").with_meta(meta));
        return set;
    }

    words
        .into_iter()
        .map(|word| ResultItem::field(Kind::Trending, word.clone(), word).with_meta(meta))
        .collect()
}

/// Word of the day from a fetched home page (pure, for tests)
pub fn word_of_day_result_set(page: &Page) -> ResultSet {
    let meta = Meta {
        status: Some(page.status),
        fetched_at_ms: Some(now_ms()),
    };

    if !page.ok() {
        return home_error(page, meta);
    }

    let doc = Html::parse_document(&page.body);

    let mut set = ResultSet::new();
    match home::find_word_of_the_day(&doc) {
        Some(word) => set.push(ResultItem::field(Kind::Wod, word.clone(), word).with_meta(meta)),
        None => set.push(ResultItem::info("No word of the day found").with_meta(meta)),
    }
    set
}

fn home_error(page: &Page, meta: Meta) -> ResultSet {
    let mut set = ResultSet::new();
    set.push(
        ResultItem::error(LexiError::new(
            "HTTP_STATUS",
            format!("home page returned HTTP {}", page.status),
        ))
        .with_meta(meta),
    );
    set
}
