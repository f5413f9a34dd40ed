use crate::models::{GeoPoint, ListingRecord};
use crate::parsing::attributes;
use crate::parsing::category::CategoryLabel;
use crate::scrapers::Document;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub const CURRENCY: &str = "TRY";
pub const COUNTRY: &str = "TR";

/// Marker in the URL of the theme's stand-in photo
const PLACEHOLDER_PHOTO: &str = "default-photo";

const TITLE: &str = "h1.single-title";
const BODY: &str = ".context-content";
const IMAGES: &str = "img.rsMainSlideImage[src]";
const MAP_SCRIPT: &str = ".single-map script:not([src])";
const PRICE: &str = ".single-price";
const ADDRESS: &str = ".single_prop_adress .sptext";
const LOCATION: &str = ".single_prop_country .sptext";
const CATEGORY: &str = ".single_prop_type .sptext";

// Only whitespace may sit between `latLng:` and its bracket, so a later
// array on the same line is never picked up instead.
static LAT_LNG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"latLng:\s*\[([^\]]+)\]").expect("latLng pattern is valid"));

/// Build a listing record from a detail page.
///
/// Pages are assumed to follow the site template: missing required parts
/// come back as empty strings, missing optional parts are left out.
pub fn build_record(markup: &str, url: &str) -> ListingRecord {
    let doc = Document::parse(markup);

    let label = CategoryLabel::parse(&doc.text(CATEGORY));
    let type_token = label.type_token.as_deref().unwrap_or_default();

    let record = ListingRecord {
        url: url.to_string(),
        title: doc.text(TITLE),
        body: doc
            .inner_html(BODY)
            .map(|html| html.trim().to_string())
            .unwrap_or_default(),
        images: images(&doc),
        map: doc.inner_html(MAP_SCRIPT).and_then(|script| parse_lat_lng(&script)),
        price: normalize_price(&doc.text(PRICE)),
        currency: CURRENCY.to_string(),
        address: doc.text(ADDRESS),
        category: label.kind(),
        property_type: label.property_type(),
        country: COUNTRY.to_string(),
        location: split_location(&doc.text(LOCATION)),
        property: attributes::extract(type_token, &doc),
        scraped_at: Utc::now(),
    };

    debug!(
        "Built record '{}' ({:?}/{:?}, {} of {} images, {} attributes)",
        record.title,
        record.category,
        record.property_type,
        record.images.len(),
        doc.count(IMAGES),
        record.property.len()
    );
    record
}

fn images(doc: &Document) -> Vec<String> {
    doc.attrs(IMAGES, "src")
        .into_iter()
        .filter(|src| !src.is_empty() && !src.contains(PLACEHOLDER_PHOTO))
        .collect()
}

/// Coordinates from a map script's `latLng:[lat, lng]` literal.
/// Anything other than exactly two components means no point.
pub fn parse_lat_lng(script: &str) -> Option<GeoPoint> {
    let inner = LAT_LNG.captures(script)?.get(1)?.as_str();
    match inner.split(", ").collect::<Vec<_>>().as_slice() {
        [lat, lng] => Some(GeoPoint {
            lat: lat.to_string(),
            lng: lng.to_string(),
        }),
        _ => None,
    }
}

/// Strip `.` thousands separators: `"1.250.000"` becomes `"1250000"`
pub fn normalize_price(raw: &str) -> String {
    raw.replace('.', "")
}

/// `"İzmir / Karşıyaka"` becomes region and sub-region; later parts stay joined
pub fn split_location(raw: &str) -> Vec<String> {
    raw.splitn(2, " / ").map(str::to_string).collect()
}
