use crate::models::{ListingKind, PropertyType};

/// Kind token used for rentals. Everything else is a sale.
pub const RENT_TOKEN: &str = "Kiralık";

/// Raw type tokens and the canonical type they map to
pub const TYPE_TABLE: &[(&str, PropertyType)] = &[
    ("Arsa", PropertyType::Land),
    ("Bahçe", PropertyType::Land),
    ("Arazi", PropertyType::Land),
    ("Tarla", PropertyType::Land),
    ("Çiftlik", PropertyType::Land),
    ("Müstakil Ev", PropertyType::House),
    ("İş Yeri", PropertyType::Office),
    ("Dükkan", PropertyType::Store),
    ("Villa", PropertyType::Villa),
    ("Yayla Evi", PropertyType::Summery),
    ("Deniz Evi", PropertyType::Summery),
    ("Apart", PropertyType::Apartment),
    ("Konut", PropertyType::Apartment),
    ("Petrol", PropertyType::Factory),
    ("Fabrika", PropertyType::Factory),
];

/// Category label as printed on the page, e.g. `"Kiralık Müstakil Ev"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub kind_token: String,
    pub type_token: Option<String>,
}

impl CategoryLabel {
    /// Split on the first space; the type token keeps everything after it
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.splitn(2, ' ');
        Self {
            kind_token: parts.next().unwrap_or_default().to_string(),
            type_token: parts.next().map(str::to_string),
        }
    }

    pub fn kind(&self) -> ListingKind {
        classify_kind(&self.kind_token)
    }

    pub fn property_type(&self) -> PropertyType {
        self.type_token
            .as_deref()
            .map(classify_type)
            .unwrap_or_default()
    }
}

pub fn classify_kind(token: &str) -> ListingKind {
    if token == RENT_TOKEN {
        ListingKind::Rent
    } else {
        ListingKind::Sale
    }
}

/// Unknown tokens fall back to apartment
pub fn classify_type(token: &str) -> PropertyType {
    TYPE_TABLE
        .iter()
        .find(|(raw, _)| *raw == token)
        .map(|(_, property_type)| *property_type)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_label() {
        let label = CategoryLabel::parse("Kiralık Villa");
        assert_eq!(label.kind(), ListingKind::Rent);
        assert_eq!(label.property_type(), PropertyType::Villa);
    }

    #[test]
    fn test_type_token_keeps_rest_of_label() {
        let label = CategoryLabel::parse("Satılık Müstakil Ev");
        assert_eq!(label.kind_token, "Satılık");
        assert_eq!(label.type_token.as_deref(), Some("Müstakil Ev"));
        assert_eq!(label.kind(), ListingKind::Sale);
        assert_eq!(label.property_type(), PropertyType::House);
    }

    #[test]
    fn test_label_without_type_token() {
        let label = CategoryLabel::parse("");
        assert_eq!(label.kind_token, "");
        assert_eq!(label.type_token, None);
        assert_eq!(label.kind(), ListingKind::Sale);
        assert_eq!(label.property_type(), PropertyType::Apartment);
    }

    #[test]
    fn test_kind_defaults_to_sale() {
        for token in ["Satılık", "kiralık", "Kiralık ", "", "Devren"] {
            assert_eq!(classify_kind(token), ListingKind::Sale, "token {:?}", token);
        }
        assert_eq!(classify_kind("Kiralık"), ListingKind::Rent);
    }

    #[test]
    fn test_type_table() {
        let cases = [
            ("Arsa", PropertyType::Land),
            ("Çiftlik", PropertyType::Land),
            ("Müstakil Ev", PropertyType::House),
            ("İş Yeri", PropertyType::Office),
            ("Dükkan", PropertyType::Store),
            ("Yayla Evi", PropertyType::Summery),
            ("Deniz Evi", PropertyType::Summery),
            ("Konut", PropertyType::Apartment),
            ("Fabrika", PropertyType::Factory),
            ("Petrol", PropertyType::Factory),
        ];
        for (token, expected) in cases {
            assert_eq!(classify_type(token), expected, "token {:?}", token);
        }
    }

    #[test]
    fn test_unknown_type_is_apartment_every_time() {
        for token in ["Residence", "arsa", "Depo", ""] {
            assert_eq!(classify_type(token), PropertyType::Apartment);
            assert_eq!(classify_type(token), classify_type(token));
        }
    }
}
