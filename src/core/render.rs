//! Renderer module
//!
//! Renders ResultSet to different output formats: text, json, jsonl

use crate::core::model::{Kind, ResultItem, ResultSet};
use colored::Colorize;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
        }
    }

    /// Render to a writer
    #[allow(dead_code)]
    pub fn render_to<W: Write>(
        &self,
        result_set: &ResultSet,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        writer.write_all(output.as_bytes())
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as human-oriented text, grouped by kind with a heading per group
    fn render_text(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let groups = [
            Kind::Wod,
            Kind::Trending,
            Kind::Meaning,
            Kind::Sentence,
            Kind::Synonym,
            Kind::Antonym,
            Kind::Suggestion,
            Kind::History,
            Kind::Info,
            Kind::Error,
        ];

        for kind in groups {
            let items: Vec<&ResultItem> =
                result_set.items.iter().filter(|i| i.kind == kind).collect();
            if items.is_empty() {
                continue;
            }

            match kind {
                Kind::Error => {
                    for item in items {
                        for error in &item.errors {
                            output.push_str(&format!(
                                "{} {}\n",
                                format!("[{}]", error.code).red().bold(),
                                error.message.red()
                            ));
                        }
                    }
                }
                Kind::Info => {
                    for item in items {
                        if let Some(text) = &item.text {
                            output.push_str(&format!("{}\n", text.yellow()));
                        }
                    }
                }
                _ => {
                    output.push_str(&format!("{}\n", kind.heading().cyan().bold()));
                    for item in items {
                        let line = match (kind, &item.word, &item.text) {
                            // History groups by word: "word: field text"
                            (Kind::History, Some(word), Some(text)) => {
                                format!("  {} {}", format!("{}:", word).green().bold(), text)
                            }
                            (Kind::Wod | Kind::Trending | Kind::Suggestion, _, Some(text)) => {
                                format!("  {}", text.green().bold())
                            }
                            (_, _, Some(text)) => format!("  {}", text),
                            _ => continue,
                        };
                        output.push_str(&line);
                        output.push('\n');
                    }
                    output.push('\n');
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{LexiError, ResultItem};

    fn uncolored() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "jsonl".parse::<OutputFormat>().unwrap(),
            OutputFormat::Jsonl
        );
    }

    #[test]
    fn test_output_format_parse_case_insensitive() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JsonL".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "xml".parse::<OutputFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_output_format_default() {
        let format: OutputFormat = Default::default();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_render_jsonl() {
        let mut set = ResultSet::new();
        set.push(ResultItem::field(Kind::Meaning, "big", "of great size"));
        set.push(ResultItem::field(Kind::Synonym, "big", "large"));

        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&set);

        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("of great size"));
        assert!(output.contains("large"));
    }

    #[test]
    fn test_render_json() {
        let mut set = ResultSet::new();
        set.push(ResultItem::field(Kind::Meaning, "big", "of great size"));

        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&set);

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_render_json_pretty() {
        let mut set = ResultSet::new();
        set.push(ResultItem::field(Kind::Meaning, "big", "of great size"));

        let config = RenderConfig::with_pretty(OutputFormat::Json, true);
        let renderer = Renderer::with_config(config);
        let output = renderer.render(&set);

        assert!(output.contains("  "));
    }

    #[test]
    fn test_render_text_headings() {
        uncolored();
        let mut set = ResultSet::new();
        set.push(ResultItem::field(Kind::Meaning, "big", "of great size"));
        set.push(ResultItem::field(Kind::Synonym, "big", "large"));

        let renderer = Renderer::new(OutputFormat::Text);
        let output = renderer.render(&set);

        assert!(output.contains("MEANING\n  of great size"));
        assert!(output.contains("SYNONYM\n  large"));
    }

    #[test]
    fn test_render_text_groups_out_of_order_items() {
        uncolored();
        let mut set = ResultSet::new();
        set.push(ResultItem::field(Kind::Synonym, "big", "large"));
        set.push(ResultItem::field(Kind::Meaning, "big", "of great size"));
        set.push(ResultItem::field(Kind::Synonym, "big", "huge"));

        let renderer = Renderer::new(OutputFormat::Text);
        let output = renderer.render(&set);

        // One SYNONYM heading, both synonyms under it, meaning first
        assert_eq!(output.matches("SYNONYM").count(), 1);
        let meaning_at = output.find("MEANING").unwrap();
        let synonym_at = output.find("SYNONYM").unwrap();
        assert!(meaning_at < synonym_at);
    }

    #[test]
    fn test_render_text_error() {
        uncolored();
        let mut set = ResultSet::new();
        set.push(ResultItem::error(LexiError::new(
            "HTTP_STATUS",
            "server returned 503",
        )));

        let renderer = Renderer::new(OutputFormat::Text);
        let output = renderer.render(&set);

        assert!(output.contains("[HTTP_STATUS]"));
        assert!(output.contains("server returned 503"));
    }

    #[test]
    fn test_render_text_info_has_no_heading() {
        uncolored();
        let mut set = ResultSet::new();
        set.push(ResultItem::info("no suggestions found"));

        let renderer = Renderer::new(OutputFormat::Text);
        let output = renderer.render(&set);

        assert!(output.contains("no suggestions found"));
        assert!(!output.contains("INFO"));
    }

    #[test]
    fn test_render_text_history_prefixes_word() {
        uncolored();
        let mut set = ResultSet::new();
        set.push(ResultItem::field(
            Kind::History,
            "awesome",
            "meaning: inspiring awe",
        ));

        let renderer = Renderer::new(OutputFormat::Text);
        let output = renderer.render(&set);

        assert!(output.contains("awesome:"));
        assert!(output.contains("meaning: inspiring awe"));
    }

    #[test]
    fn test_render_to_writer() {
        let mut set = ResultSet::new();
        set.push(ResultItem::field(Kind::Meaning, "big", "of great size"));

        let renderer = Renderer::new(OutputFormat::Json);
        let mut buffer = Vec::new();
        renderer.render_to(&set, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("of great size"));
    }

    #[test]
    fn test_render_empty_set() {
        let set = ResultSet::new();
        let renderer = Renderer::new(OutputFormat::Text);
        assert!(renderer.render(&set).is_empty());
    }
}
