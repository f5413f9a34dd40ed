pub mod browser;
pub mod document;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod traits;

pub use browser::ChromeSource;
pub use document::Document;
pub use http::HttpSource;
pub use traits::PageSource;
