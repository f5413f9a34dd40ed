use clap::{Args, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_SETTLE_SECS: u64 = 2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// How pages are fetched and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Headless Chrome, for pages that need JavaScript
    Chrome,
    /// Plain HTTP GET
    Http,
}

/// Runtime settings shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct ScoutConfig {
    /// Directory holding items.json and data.json
    #[arg(long, env = "SCOUT_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Page source used to fetch listing pages
    #[arg(long, env = "SCOUT_SOURCE", value_enum, default_value_t = SourceKind::Chrome)]
    pub source: SourceKind,

    /// Seconds to wait after navigation before reading the rendered page
    #[arg(long, env = "SCOUT_SETTLE_SECS", default_value_t = DEFAULT_SETTLE_SECS)]
    pub settle_secs: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "SCOUT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, env = "SCOUT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Stop following pagination after this many index pages (at least 1).
    /// Unbounded when not set.
    #[arg(long, env = "SCOUT_MAX_PAGES")]
    pub max_pages: Option<NonZeroUsize>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            source: SourceKind::Chrome,
            settle_secs: DEFAULT_SETTLE_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pages: None,
        }
    }
}
