//! HTML extraction
//!
//! All extraction is fixed CSS selectors against a parsed document. Functions
//! are pure (document in, strings out) so they run against fixture HTML in
//! tests without a network.

pub mod entry;
pub mod home;
pub mod suggest;
pub mod thesaurus;

use crate::core::util::clean_text;
use scraper::ElementRef;

/// Whitespace-normalized inner text of an element
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_element_text_joins_nested_nodes() {
        let doc = Html::parse_fragment("<p>an  <b>awesome</b>\n sight</p>");
        let selector = Selector::parse("p").unwrap();
        let p = doc.select(&selector).next().unwrap();
        assert_eq!(element_text(p), "an awesome sight");
    }
}
