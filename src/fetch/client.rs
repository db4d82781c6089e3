//! Page fetching
//!
//! Non-success HTTP statuses are data (the 404 page carries spelling
//! suggestions); only transport failures are errors.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Some dictionary sites refuse requests with a default library UA.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) lexi/0.1";

/// A fetched page: raw body plus the HTTP status it came with
#[derive(Debug, Clone)]
pub struct Page {
    pub body: String,
    pub status: u16,
}

impl Page {
    pub fn ok(&self) -> bool {
        self.status == 200
    }

    pub fn not_found(&self) -> bool {
        self.status == 404
    }
}

/// Issue a blocking GET and return the body with its status
pub fn read_page(url: &Url) -> Result<Page> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url.clone())
        .send()
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .with_context(|| format!("Failed to read body from {}", url))?;

    Ok(Page { body, status })
}

/// Read a saved page from disk, treated as a 200 response
pub fn page_from_file(path: &Path) -> Result<Page> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page file: {}", path.display()))?;
    Ok(Page { body, status: 200 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_status_helpers() {
        let ok = Page {
            body: String::new(),
            status: 200,
        };
        let missing = Page {
            body: String::new(),
            status: 404,
        };
        assert!(ok.ok() && !ok.not_found());
        assert!(missing.not_found() && !missing.ok());
    }

    #[test]
    fn test_page_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("page.html");
        fs::write(&path, "<html><body>hi</body></html>").unwrap();

        let page = page_from_file(&path).unwrap();
        assert_eq!(page.status, 200);
        assert!(page.body.contains("hi"));
    }

    #[test]
    fn test_page_from_missing_file_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let result = page_from_file(&temp.path().join("nope.html"));
        assert!(result.is_err());
    }
}
