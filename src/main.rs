//! lexi - a CLI dictionary
//!
//! lexi provides:
//! - Word lookup (meaning, sentences, synonyms, antonyms)
//! - Spelling suggestions for misspelled words
//! - Trending words and word of the day
//! - A local JSON lookup history

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod extract;
mod fetch;
mod flows;
mod history;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
