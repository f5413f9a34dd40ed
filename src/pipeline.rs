use crate::error::{ScoutError, ScoutResult};
use crate::harvest::harvest;
use crate::models::{ListingRecord, RunReport};
use crate::parsing::build_record;
use crate::scrapers::PageSource;
use crate::store::JsonStore;
use std::num::NonZeroUsize;
use tracing::info;

/// Runs harvests and extractions against one page source and one store.
///
/// Nothing is carried between runs: each call builds its own link or record
/// list and hands it to the store only once the whole batch succeeded.
pub struct Pipeline<'a, S: PageSource + ?Sized> {
    source: &'a S,
    store: &'a JsonStore,
    max_pages: Option<NonZeroUsize>,
}

impl<'a, S: PageSource + ?Sized> Pipeline<'a, S> {
    pub fn new(source: &'a S, store: &'a JsonStore) -> Self {
        Self {
            source,
            store,
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<NonZeroUsize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Harvest every listing link reachable from `seed` and save the list
    pub async fn collect_links(&self, seed: Option<&str>) -> ScoutResult<RunReport> {
        let seed = seed.filter(|s| !s.is_empty()).ok_or(ScoutError::NotFound)?;

        info!("Harvesting links from {} via {}", seed, self.source.source_name());
        let links = harvest(self.source, seed, self.max_pages).await?;
        let path = self.store.save_links(&links).await?;

        Ok(RunReport::success(links.len(), path.display().to_string()))
    }

    /// Extract records for `link`, or for the saved link list when no link is given
    pub async fn collect_items(&self, link: Option<&str>) -> ScoutResult<RunReport> {
        let links = match link.filter(|l| !l.is_empty()) {
            Some(link) => vec![link.to_string()],
            None => self.store.load_links().await?.unwrap_or_default(),
        };
        if links.is_empty() {
            return Err(ScoutError::NotFound);
        }

        let records = self.extract_all(&links).await?;
        let path = self.store.save_records(&records).await?;

        Ok(RunReport::success(records.len(), path.display().to_string()))
    }

    /// Fetch and build one record per link, in input order.
    /// The first failed fetch aborts the batch.
    pub async fn extract_all(&self, links: &[String]) -> ScoutResult<Vec<ListingRecord>> {
        let mut records = Vec::with_capacity(links.len());

        for (i, link) in links.iter().enumerate() {
            info!("[{}/{}] Extracting {}", i + 1, links.len(), link);
            let markup = self.source.fetch(link).await?;
            records.push(build_record(&markup, link));
        }

        info!("Extracted {} records", records.len());
        Ok(records)
    }
}
