use crate::error::ScoutResult;
use crate::models::ListingRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const LINKS_FILE: &str = "items.json";
pub const RECORDS_FILE: &str = "data.json";

/// JSON files in one data directory. Every save replaces the whole file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn links_path(&self) -> PathBuf {
        self.dir.join(LINKS_FILE)
    }

    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILE)
    }

    pub async fn save_links(&self, links: &[String]) -> ScoutResult<PathBuf> {
        let path = self.links_path();
        self.write_json(&path, &links).await?;
        info!("💾 Saved {} links to {}", links.len(), path.display());
        Ok(path)
    }

    /// Previously harvested links, or `None` if nothing was saved yet
    pub async fn load_links(&self) -> ScoutResult<Option<Vec<String>>> {
        let path = self.links_path();
        if !tokio::fs::try_exists(&path).await? {
            debug!("No link file at {}", path.display());
            return Ok(None);
        }

        let json = tokio::fs::read_to_string(&path).await?;
        let links: Vec<String> = serde_json::from_str(&json)?;
        debug!("Loaded {} links from {}", links.len(), path.display());
        Ok(Some(links))
    }

    pub async fn save_records(&self, records: &[ListingRecord]) -> ScoutResult<PathBuf> {
        let path = self.records_path();
        self.write_json(&path, &records).await?;
        info!("💾 Saved {} records to {}", records.len(), path.display());
        Ok(path)
    }

    async fn write_json<T: serde::Serialize + ?Sized>(&self, path: &Path, value: &T) -> ScoutResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingKind, PropertyType};
    use chrono::Utc;

    fn record(title: &str) -> ListingRecord {
        ListingRecord {
            url: "https://emlak.test/ilan/1".to_string(),
            title: title.to_string(),
            body: String::new(),
            images: vec![],
            map: None,
            price: "750000".to_string(),
            currency: "TRY".to_string(),
            address: "Çankaya".to_string(),
            category: ListingKind::Sale,
            property_type: PropertyType::Apartment,
            country: "TR".to_string(),
            location: vec!["Ankara".to_string(), "Çankaya".to_string()],
            property: Default::default(),
            scraped_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_links_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("data"));

        assert_eq!(store.load_links().await.unwrap(), None);

        let links = vec!["https://emlak.test/ilan/2".to_string(), "https://emlak.test/ilan/1".to_string()];
        let path = store.save_links(&links).await.unwrap();
        assert_eq!(path, dir.path().join("data").join(LINKS_FILE));
        assert_eq!(store.load_links().await.unwrap(), Some(links));
    }

    #[tokio::test]
    async fn test_output_is_pretty_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let path = store.save_records(&[record("Kiralık Daire Çankaya")]).await.unwrap();
        let json = std::fs::read_to_string(path).unwrap();

        assert!(json.contains("Kiralık Daire Çankaya"));
        assert!(json.contains("https://emlak.test/ilan/1"));
        assert!(json.starts_with("[\n  {"));
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        store.save_links(&["a".to_string(), "b".to_string()]).await.unwrap();
        store.save_links(&["c".to_string()]).await.unwrap();

        assert_eq!(store.load_links().await.unwrap(), Some(vec!["c".to_string()]));
    }
}
