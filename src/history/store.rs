//! Lookup history persistence
//!
//! The history is one flat JSON object mapping each looked-up word to its
//! recorded fields. Whole-file read-modify-write, single user, no locking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to access history file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("History file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything recorded for one word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meaning: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sentence: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonym: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonym: Vec<String>,

    #[serde(default)]
    pub looked_up_at_ms: i64,
}

impl Record {
    pub fn is_empty(&self) -> bool {
        self.meaning.is_empty()
            && self.sentence.is_empty()
            && self.synonym.is_empty()
            && self.antonym.is_empty()
    }
}

/// The whole history file. BTreeMap keeps word order stable on disk.
#[derive(Debug, Clone, Default)]
pub struct History {
    words: BTreeMap<String, Record>,
}

impl History {
    /// Load history from disk. A missing file is an empty history.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(HistoryError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let words = serde_json::from_str(&content).map_err(|e| HistoryError::Corrupt {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self { words })
    }

    /// Write history back to disk
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(&self.words).map_err(|e| HistoryError::Corrupt {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, json).map_err(|e| HistoryError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Merge a lookup into the history. Field lists are unioned
    /// (order-preserving, no duplicates) and the timestamp is refreshed.
    pub fn record(&mut self, word: &str, update: Record) {
        let entry = self.words.entry(word.to_lowercase()).or_default();
        union_into(&mut entry.meaning, update.meaning);
        union_into(&mut entry.sentence, update.sentence);
        union_into(&mut entry.synonym, update.synonym);
        union_into(&mut entry.antonym, update.antonym);
        entry.looked_up_at_ms = update.looked_up_at_ms;
    }

    pub fn get(&self, word: &str) -> Option<&Record> {
        self.words.get(&word.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Record)> {
        self.words.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

fn union_into(existing: &mut Vec<String>, incoming: Vec<String>) {
    for item in incoming {
        if !existing.contains(&item) {
            existing.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(meanings: &[&str], synonyms: &[&str], ts: i64) -> Record {
        Record {
            meaning: meanings.iter().map(|s| s.to_string()).collect(),
            synonym: synonyms.iter().map(|s| s.to_string()).collect(),
            looked_up_at_ms: ts,
            ..Record::default()
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let history = History::load(&temp.path().join("none.json")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = History::load(&path).unwrap_err();
        assert!(matches!(err, HistoryError::Corrupt { .. }));
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("history.json");

        let mut history = History::default();
        history.record("Awesome", record(&["inspiring awe"], &["breathtaking"], 100));
        history.save(&path).unwrap();

        let loaded = History::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        let rec = loaded.get("awesome").unwrap();
        assert_eq!(rec.meaning, vec!["inspiring awe"]);
        assert_eq!(rec.synonym, vec!["breathtaking"]);
        assert_eq!(rec.looked_up_at_ms, 100);
    }

    #[test]
    fn test_record_merges_without_duplicates() {
        let mut history = History::default();
        history.record("big", record(&["of great size"], &["large"], 100));
        history.record("big", record(&["of great size", "grown up"], &["huge"], 200));

        let rec = history.get("big").unwrap();
        assert_eq!(rec.meaning, vec!["of great size", "grown up"]);
        assert_eq!(rec.synonym, vec!["large", "huge"]);
        assert_eq!(rec.looked_up_at_ms, 200);
    }

    #[test]
    fn test_record_is_case_insensitive_on_word() {
        let mut history = History::default();
        history.record("Big", record(&["of great size"], &[], 100));
        history.record("BIG", record(&[], &["large"], 200));

        assert_eq!(history.len(), 1);
        assert!(history.get("big").is_some());
    }

    #[test]
    fn test_get_missing_word() {
        let history = History::default();
        assert!(history.get("nothing").is_none());
    }

    #[test]
    fn test_record_is_empty() {
        assert!(Record::default().is_empty());
        assert!(!record(&["x"], &[], 0).is_empty());
    }

    #[test]
    fn test_on_disk_shape_is_flat_object() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("history.json");

        let mut history = History::default();
        history.record("big", record(&["of great size"], &[], 100));
        history.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.is_object());
        assert!(raw.get("big").is_some());
        assert_eq!(raw["big"]["meaning"][0], "of great size");
        // empty lists are skipped on disk
        assert!(raw["big"].get("antonym").is_none());
    }

    #[test]
    fn test_iter_is_sorted_by_word() {
        let mut history = History::default();
        history.record("zebra", record(&["animal"], &[], 1));
        history.record("apple", record(&["fruit"], &[], 2));

        let words: Vec<_> = history.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["apple", "zebra"]);
    }
}
