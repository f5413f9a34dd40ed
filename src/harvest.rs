use crate::error::ScoutResult;
use crate::parsing::parse_index_page;
use crate::scrapers::PageSource;
use indexmap::IndexSet;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

/// Walk the paginated index starting at `seed` and collect detail links.
///
/// Pagination is followed until a page has no next-page link. With
/// `max_pages` set the walk also stops after that many pages. The result is
/// deduplicated (first occurrence kept) and then reversed, so the last link
/// seen on the last page comes first.
pub async fn harvest<S>(source: &S, seed: &str, max_pages: Option<NonZeroUsize>) -> ScoutResult<Vec<String>>
where
    S: PageSource + ?Sized,
{
    let mut links = Vec::new();
    let mut next = Some(seed.to_string());
    let mut pages = 0usize;

    while let Some(url) = next.take() {
        if max_pages.is_some_and(|max| pages >= max.get()) {
            warn!("Stopping at page limit {} before {}", pages, url);
            break;
        }

        info!("Fetching index page {}: {}", pages + 1, url);
        let markup = source.fetch(&url).await?;
        let page = parse_index_page(&markup, &url);
        pages += 1;

        debug!("Found {} listing links on {}", page.links.len(), url);
        links.extend(page.links);

        match &page.next {
            Some(next_url) => debug!("Next page: {}", next_url),
            None => debug!("No next page after {}", url),
        }
        next = page.next;
    }

    let total = links.len();
    let mut unique: Vec<String> = links.into_iter().collect::<IndexSet<_>>().into_iter().collect();
    unique.reverse();

    info!(
        "Harvested {} unique links ({} duplicates) from {} pages",
        unique.len(),
        total - unique.len(),
        pages
    );
    Ok(unique)
}
