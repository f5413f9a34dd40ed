use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sparse, insertion-ordered map of type-specific listing attributes
pub type AttributeMap = IndexMap<String, String>;

/// Whether the listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Rent,
    #[default]
    Sale,
}

/// Canonical property type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Land,
    House,
    Office,
    Store,
    Villa,
    Summery,
    Factory,
    #[default]
    Apartment,
}

/// Map coordinates exactly as they appear in the page script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoPoint {
    pub lat: String,
    pub lng: String,
}

/// One extracted listing detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub url: String,
    pub title: String,
    pub body: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<GeoPoint>,
    pub price: String,
    pub currency: String,
    pub address: String,
    pub category: ListingKind,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub country: String,
    pub location: Vec<String>,
    pub property: AttributeMap,
    pub scraped_at: DateTime<Utc>,
}

/// Summary returned to whoever triggered a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunReport {
    pub count: usize,
    pub message: String,
    pub file_path: String,
}

impl RunReport {
    pub fn success(count: usize, file_path: impl Into<String>) -> Self {
        Self {
            count,
            message: "Success".to_string(),
            file_path: file_path.into(),
        }
    }
}
