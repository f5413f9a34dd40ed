use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};
use crate::scrapers::traits::PageSource;
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Page source backed by headless Chrome.
///
/// The Chrome process lives as long as this value. Dropping it closes the
/// browser, so the owner decides the lifetime of the whole run.
pub struct ChromeSource {
    // Kept alive for the tab; dropping it kills the process.
    _browser: Browser,
    tab: Arc<Tab>,
    settle: Duration,
}

impl ChromeSource {
    /// Launch headless Chrome and open the tab used for every fetch
    pub fn new(config: &ScoutConfig) -> ScoutResult<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| ScoutError::Browser(e.to_string().into()))?;

        let browser = Browser::new(options).map_err(|e| ScoutError::Browser(e.into()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScoutError::Browser(e.into()))?;
        tab.set_default_timeout(Duration::from_secs(config.timeout_secs));

        Ok(Self {
            _browser: browser,
            tab,
            settle: Duration::from_secs(config.settle_secs),
        })
    }
}

#[async_trait]
impl PageSource for ChromeSource {
    async fn fetch(&self, url: &str) -> ScoutResult<String> {
        debug!("Navigating to {}", url);

        blocking(|| {
            self.tab
                .navigate_to(url)
                .and_then(|tab| tab.wait_until_navigated())
        })
        .map_err(|e| ScoutError::transport(url, e))?;

        // Let client-side scripts finish rendering
        tokio::time::sleep(self.settle).await;

        let html_result = blocking(|| {
            self.tab
                .evaluate("document.documentElement.outerHTML", false)
        })
        .map_err(|e| ScoutError::transport(url, e))?;

        let html = html_result
            .value
            .and_then(|value| value.as_str().map(str::to_string))
            .ok_or_else(|| ScoutError::transport(url, "page returned no HTML"))?;

        debug!("Captured {} bytes from {}", html.len(), url);
        Ok(html)
    }

    fn source_name(&self) -> &'static str {
        "chrome"
    }
}

/// headless_chrome talks to the browser synchronously. Run those calls
/// where the runtime knows the worker thread is blocked.
/// Requires the multi-threaded runtime.
fn blocking<T>(f: impl FnOnce() -> T) -> T {
    tokio::task::block_in_place(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blocking_call_returns_value_inside_runtime() {
        let other_task = tokio::spawn(async { 7 });
        let len = blocking(|| {
            std::thread::sleep(Duration::from_millis(10));
            "<html></html>".len()
        });
        assert_eq!(len, 13);
        assert_eq!(other_task.await.unwrap(), 7);
    }
}
