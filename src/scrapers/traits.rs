use crate::error::ScoutResult;
use async_trait::async_trait;

/// Something that can turn a URL into page markup.
/// Lets the pipeline run against a real browser, plain HTTP, or canned pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `url` and return its rendered HTML
    async fn fetch(&self, url: &str) -> ScoutResult<String>;

    /// Get the name of the page source
    fn source_name(&self) -> &'static str;
}
