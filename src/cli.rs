//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::paths;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::lookup::FieldSelection;

/// lexi - look up words in an online dictionary from the command line.
#[derive(Parser, Debug)]
#[command(name = "lexi")]
#[command(
    author,
    version,
    about,
    long_about = r#"lexi fetches a word's page from an online dictionary, extracts the
requested fields out of the HTML, and prints them. Successful lookups are
recorded in a local JSON history file.

Output formats:
- text: colored, human-friendly (default)
- json: a single JSON array of result items
- jsonl: one JSON object per line (best for piping into tools)

Examples:
    lexi lookup awesome
    lexi lookup awesome --all
    lexi lookup big --synonym --antonym --format jsonl
    lexi trending
    lexi wod
    lexi history
    lexi history awesome
"#
)]
pub struct Cli {
    /// Output format (text/json/jsonl).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): colored, human-friendly\n\
- json: a single JSON array\n\
- jsonl: one JSON object per line\n\n\
Tip: Prefer jsonl when you want stable, line-oriented output for piping."
    )]
    pub format: String,

    /// Disable colored output (text format only).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. Useful when piping to files or when your\n\
terminal does not support ANSI colors. NO_COLOR in the environment has the\n\
same effect."
    )]
    pub no_color: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human\n\
readability. Has no effect on the text format."
    )]
    pub pretty: bool,

    /// History file location.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "LEXI_HISTORY_FILE",
        long_help = "Where lookups are recorded.\n\n\
Defaults to LEXI_HISTORY_FILE from the environment, then ~/.lexi_history.json."
    )]
    pub history_file: Option<PathBuf>,

    /// Verbose mode (more diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print diagnostics (fetched URLs, history writes) to stderr."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a word and print the requested fields.
    #[command(
        long_about = "Fetch the entry page for WORD and extract the requested fields.\n\n\
With no field flags, the meaning is printed. When the word is not found,\n\
spelling suggestions from the not-found page are printed instead.\n\n\
Successful lookups are merged into the history file.\n\n\
Examples:\n\
  lexi lookup awesome\n\
  lexi lookup awesome --sentence --synonym\n\
  lexi lookup awesome --all --no-store\n"
    )]
    Lookup {
        /// Word to look up.
        #[arg(value_name = "WORD")]
        word: String,

        /// Extract definitions.
        #[arg(short, long)]
        meaning: bool,

        /// Extract example sentences containing the word.
        #[arg(short = 'e', long)]
        sentence: bool,

        /// Extract synonyms (up to 5).
        #[arg(short = 'y', long)]
        synonym: bool,

        /// Extract antonyms (up to 5).
        #[arg(short = 'n', long)]
        antonym: bool,

        /// Extract every field.
        #[arg(short = 'l', long)]
        all: bool,

        /// Do not record this lookup in the history file.
        #[arg(long)]
        no_store: bool,

        /// Read the page HTML from a local file instead of fetching.
        #[arg(
            long,
            value_name = "FILE",
            long_help = "Read the entry page HTML from a local file instead of issuing an\n\
HTTP GET. The body is treated as a 200 response. Intended for debugging\n\
selector behavior against saved pages."
        )]
        page_file: Option<PathBuf>,
    },

    /// Print trending words from the dictionary home page.
    #[command(
        long_about = "Fetch the dictionary home page and print the top trending words\n\
(at most 5).\n\n\
Example:\n\
  lexi trending\n"
    )]
    Trending {
        /// Read the page HTML from a local file instead of fetching.
        #[arg(long, value_name = "FILE")]
        page_file: Option<PathBuf>,
    },

    /// Print the word of the day.
    #[command(
        long_about = "Fetch the dictionary home page and print the word of the day.\n\n\
Example:\n\
  lexi wod\n"
    )]
    Wod {
        /// Read the page HTML from a local file instead of fetching.
        #[arg(long, value_name = "FILE")]
        page_file: Option<PathBuf>,
    },

    /// Show previously looked-up words from the history file.
    #[command(
        long_about = "Print recorded lookups. With WORD, print only that word's record.\n\
Never touches the network.\n\n\
Examples:\n\
  lexi history\n\
  lexi history awesome\n"
    )]
    History {
        /// Only show this word's record.
        #[arg(value_name = "WORD")]
        word: Option<String>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let history_path = paths::history_file(cli.history_file.as_deref());

    match cli.command {
        Commands::Lookup {
            word,
            meaning,
            sentence,
            synonym,
            antonym,
            all,
            no_store,
            page_file,
        } => {
            let fields = FieldSelection::resolve(meaning, sentence, synonym, antonym, all);
            crate::flows::lookup::run_lookup(
                &word,
                fields,
                page_file.as_deref(),
                &history_path,
                !no_store,
                cli.verbose,
                render_config,
            )
        }

        Commands::Trending { page_file } => {
            crate::flows::home::run_trending(page_file.as_deref(), cli.verbose, render_config)
        }

        Commands::Wod { page_file } => {
            crate::flows::home::run_word_of_day(page_file.as_deref(), cli.verbose, render_config)
        }

        Commands::History { word } => {
            crate::flows::history::run_history(word.as_deref(), &history_path, render_config)
        }
    }
}
