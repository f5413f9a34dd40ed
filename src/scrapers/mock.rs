//! Canned page source for tests.

use crate::error::{ScoutError, ScoutResult};
use crate::scrapers::traits::PageSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves fixed HTML by URL and records every fetch.
/// Unknown URLs fail like a transport error would.
#[derive(Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// URLs requested so far, in order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for StaticSource {
    async fn fetch(&self, url: &str) -> ScoutResult<String> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScoutError::transport(url, "no such page"))
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
