use crate::scrapers::Document;
use url::Url;

const LISTING_LINK: &str = ".slisttable h4 a";
const NEXT_PAGE_LINK: &str = ".pagination li:not(.active):last-child a";

/// What one paginated index page contributes to a harvest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexPage {
    pub links: Vec<String>,
    pub next: Option<String>,
}

/// Pull listing links and the next-page pointer out of an index page.
/// `page_url` is the address the markup came from.
pub fn parse_index_page(markup: &str, page_url: &str) -> IndexPage {
    let doc = Document::parse(markup);

    let links = doc
        .attrs(LISTING_LINK, "href")
        .iter()
        .map(|href| resolve_href(page_url, href))
        .collect();

    let next = doc
        .attr(NEXT_PAGE_LINK, "href")
        .map(|href| resolve_href(page_url, &href));

    IndexPage { links, next }
}

/// Absolute hrefs are returned untouched, relative ones are joined onto `base`
pub fn resolve_href(base: &str, href: &str) -> String {
    match Url::parse(href) {
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(base)
            .and_then(|base| base.join(href))
            .map(String::from)
            .unwrap_or_else(|_| href.to_string()),
        _ => href.to_string(),
    }
}
