use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Parsed page with the handful of read operations the extractors need.
///
/// Every read is a single query that yields `None` (or an empty default)
/// when nothing matches, so callers never check and then re-query.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(e) => {
                warn!("Invalid selector '{}': {:?}", css, e);
                Vec::new()
            }
        }
    }

    fn first(&self, css: &str) -> Option<ElementRef<'_>> {
        self.select(css).into_iter().next()
    }

    /// Whitespace-normalized text of the first match
    pub fn find_text(&self, css: &str) -> Option<String> {
        self.first(css).map(normalize_text)
    }

    /// Like [`Document::find_text`] but yields an empty string when absent
    pub fn text(&self, css: &str) -> String {
        self.find_text(css).unwrap_or_default()
    }

    /// Inner HTML of the first match
    pub fn inner_html(&self, css: &str) -> Option<String> {
        self.first(css).map(|el| el.inner_html())
    }

    /// Attribute of the first match, if both the element and attribute exist
    pub fn attr(&self, css: &str, name: &str) -> Option<String> {
        self.first(css)
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    /// Attribute of every match that carries it, in document order
    pub fn attrs(&self, css: &str, name: &str) -> Vec<String> {
        self.select(css)
            .into_iter()
            .filter_map(|el| el.value().attr(name))
            .map(str::to_string)
            .collect()
    }

    pub fn count(&self, css: &str) -> usize {
        self.select(css).len()
    }
}

fn normalize_text(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h1 class="title">  Deniz   manzaralı
             daire </h1>
          <div class="gallery">
            <img src="/a.jpg"><img><img src="/b.jpg">
          </div>
          <div class="content"><p>Merhaba</p></div>
        </body></html>
    "#;

    #[test]
    fn test_text_is_whitespace_normalized() {
        let doc = Document::parse(PAGE);
        assert_eq!(
            doc.find_text("h1.title"),
            Some("Deniz manzaralı daire".to_string())
        );
        assert_eq!(doc.find_text("h2"), None);
        assert_eq!(doc.text("h2"), "");
    }

    #[test]
    fn test_attrs_skip_elements_without_attribute() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.attrs(".gallery img", "src"), vec!["/a.jpg", "/b.jpg"]);
        assert_eq!(doc.count(".gallery img"), 3);
        assert_eq!(doc.attr(".gallery img", "alt"), None);
    }

    #[test]
    fn test_inner_html() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.inner_html(".content"), Some("<p>Merhaba</p>".to_string()));
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.count("div[["), 0);
        assert_eq!(doc.find_text("div[["), None);
    }
}
