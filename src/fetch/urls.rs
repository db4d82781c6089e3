//! Dictionary URL building
//!
//! Endpoints are fixed but overridable through env vars so tests and mirrors
//! can point the tool elsewhere without touching the extraction code.

use anyhow::{anyhow, Context, Result};
use std::env;
use url::Url;

/// Env var overriding the entry-page base URL
pub const BASE_URL_ENV: &str = "LEXI_BASE_URL";

/// Env var overriding the home-page URL
pub const HOME_URL_ENV: &str = "LEXI_HOME_URL";

const DEFAULT_BASE_URL: &str = "https://www.dictionary.com/browse";
const DEFAULT_HOME_URL: &str = "https://www.dictionary.com/";

/// URL of the entry page for a word (word appended as a path segment)
pub fn lookup_url(word: &str) -> Result<Url> {
    let base = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut url =
        Url::parse(&base).with_context(|| format!("Invalid dictionary base URL: {}", base))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Dictionary base URL cannot carry path segments: {}", base))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

/// URL of the dictionary home page (trending words, word of the day)
pub fn home_url() -> Result<Url> {
    let home = env::var(HOME_URL_ENV).unwrap_or_else(|_| DEFAULT_HOME_URL.to_string());
    Url::parse(&home).with_context(|| format!("Invalid dictionary home URL: {}", home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_appends_word() {
        // Guard against an env override leaking in from the test environment
        if env::var(BASE_URL_ENV).is_err() {
            let url = lookup_url("awesome").unwrap();
            assert_eq!(url.as_str(), "https://www.dictionary.com/browse/awesome");
        }
    }

    #[test]
    fn test_lookup_url_percent_encodes() {
        if env::var(BASE_URL_ENV).is_err() {
            let url = lookup_url("bric-a-brac ").unwrap();
            assert!(url.path().starts_with("/browse/"));
            assert!(!url.path().contains(' '));
        }
    }

    #[test]
    fn test_home_url_default() {
        if env::var(HOME_URL_ENV).is_err() {
            let url = home_url().unwrap();
            assert_eq!(url.as_str(), "https://www.dictionary.com/");
        }
    }
}
