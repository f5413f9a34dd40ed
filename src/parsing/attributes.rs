//! Type-specific listing attributes.
//!
//! Each family lists the raw type tokens it handles and the fields it reads.
//! A field lands in the output only when its selector matches the page.

use crate::models::AttributeMap;
use crate::parsing::vocabulary::{self, Vocabulary, HEATING, TITLE_DEED, USE_STATUS, ZONING};
use crate::scrapers::Document;
use tracing::debug;

use self::Normalize::{FirstOfRange, Lookup, Verbatim, YesNo};

/// How a raw field value is turned into its stored form
#[derive(Debug, Clone, Copy)]
pub enum Normalize {
    Verbatim,
    YesNo,
    FirstOfRange,
    Lookup(Vocabulary),
}

impl Normalize {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Normalize::Verbatim => raw.to_string(),
            Normalize::YesNo => vocabulary::yes_no(raw),
            Normalize::FirstOfRange => vocabulary::first_of_range(raw),
            Normalize::Lookup(table) => vocabulary::translate(table, raw),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    /// Class fragment of the wrapping `div`, matched with `class*=`
    pub class: &'static str,
    pub normalize: Normalize,
}

const fn field(key: &'static str, class: &'static str, normalize: Normalize) -> Field {
    Field {
        key,
        class,
        normalize,
    }
}

impl Field {
    fn selector(&self) -> String {
        format!("div[class*='{}'] .sptext", self.class)
    }
}

#[derive(Debug)]
pub struct Family {
    pub name: &'static str,
    pub tokens: &'static [&'static str],
    pub fields: &'static [Field],
}

pub const LAND: Family = Family {
    name: "land",
    tokens: &["Arsa", "Bahçe", "Arazi", "Tarla", "Çiftlik"],
    fields: &[
        // Both area fields feed square_feet; Metre_Kare wins when both exist
        field("square_feet", "Acik_Alan_m2", Verbatim),
        field("square_feet", "Metre_Kare", Verbatim),
        field("ada_no", "Ada_No", Verbatim),
        field("parsel_no", "Parsel_No", Verbatim),
        field("pafta_no", "Pafta_No", Verbatim),
        field("gabari", "Gabari", Verbatim),
        field("credit_available", "Krediye_Uygunluk", YesNo),
        field("imar_durumu", "Imar_Durumu", Lookup(ZONING)),
        field("tapu_durumu", "Tapu_Durumu", Lookup(TITLE_DEED)),
    ],
};

pub const RESIDENTIAL: Family = Family {
    name: "residential",
    tokens: &["Konut", "Apart", "Müstakil Ev", "Yayla Evi", "Deniz Evi"],
    fields: &[
        field("square_feet", "Metre_Kare", Verbatim),
        field("room_count", "Oda_Sayisi", Verbatim),
        field("bathroom_count", "Banyo_Sayisi", Verbatim),
        field("building_age", "Bina_Yasi", FirstOfRange),
        field("building_floors", "Kat_Sayisi", Verbatim),
        field("floor_location", "Bulundugu_Kat", Verbatim),
        field("heating", "Isitma", Lookup(HEATING)),
        field("furnished", "Esyali", YesNo),
        field("use_status", "Kullanim_Durumu", Lookup(USE_STATUS)),
        field("credit_available", "Krediye_Uygun", YesNo),
    ],
};

pub const COMMERCIAL: Family = Family {
    name: "commercial",
    tokens: &["İş Yeri", "Dükkan"],
    fields: &[
        field("square_feet", "Metre_Kare", Verbatim),
        field("room_count", "Bolum_Oda_Sayisi", Verbatim),
        field("heating", "Isitma", Lookup(HEATING)),
        field("building_age", "Bina_Yasi", FirstOfRange),
    ],
};

pub const INDUSTRIAL: Family = Family {
    name: "industrial",
    tokens: &["Fabrika", "Petrol"],
    fields: &[
        field("square_feet_open", "Acik_Alan_m2", Verbatim),
        field("square_feet_close", "Kapali_Alan_m2", Verbatim),
        field("building_count", "Bina_Adedi", Verbatim),
        field("room_count", "Bolum_Oda_Sayisi", Verbatim),
        field("number_floors", "Kat_Sayisi_", Verbatim),
        field("building_age", "Binanin_Yasi_", FirstOfRange),
        field("heating", "Isinma_Tipi", Lookup(HEATING)),
    ],
};

pub const FAMILIES: &[&Family] = &[&LAND, &RESIDENTIAL, &COMMERCIAL, &INDUSTRIAL];

/// Family handling a raw type token, if any
pub fn family_for(type_token: &str) -> Option<&'static Family> {
    FAMILIES
        .iter()
        .copied()
        .find(|family| family.tokens.iter().any(|token| *token == type_token))
}

/// Read the attributes for a raw type token. Unknown tokens yield an empty map.
pub fn extract(type_token: &str, doc: &Document) -> AttributeMap {
    let mut attributes = AttributeMap::new();

    let Some(family) = family_for(type_token) else {
        debug!("No attribute family for type '{}'", type_token);
        return attributes;
    };

    for field in family.fields {
        if let Some(raw) = doc.find_text(&field.selector()) {
            attributes.insert(field.key.to_string(), field.normalize.apply(&raw));
        }
    }

    debug!(
        "Extracted {} {} attributes for '{}'",
        attributes.len(),
        family.name,
        type_token
    );
    attributes
}
