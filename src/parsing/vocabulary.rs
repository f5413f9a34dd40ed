//! Translation tables from the site's Turkish labels to canonical codes.
//!
//! Lookups are exact and case-sensitive. A label missing from a table is
//! kept as-is so new values show up in the output instead of vanishing.

pub type Vocabulary = &'static [(&'static str, &'static str)];

/// Zoning status (İmar Durumu)
pub const ZONING: Vocabulary = &[
    ("Ada", "hisseli"),
    ("Bağ & Bahçe", "bagbahce"),
    ("Depo & Antrepo", "depoantrepo"),
    ("Eğitim", "egitim"),
    ("Enerji Depolama", "enerjidepo"),
    ("Konut", "konut"),
    ("Muhtelif", "muhtelif"),
    ("Özel Kullanım", "ozel"),
    ("Sağlık", "saglik"),
    ("Sanayi", "sanayi"),
    ("Sit Alanı", "sitalani"),
    ("Spor Alanı", "sporalani"),
    ("Tarla", "tarla"),
    ("Ticari", "ticari"),
    ("Ticari Konut", "ticarikonut"),
    ("Toplu Konut", "toplukonut"),
    ("Villa", "villa"),
    ("Zeytinlik", "zeytinlik"),
];

/// Title deed status (Tapu Durumu)
pub const TITLE_DEED: Vocabulary = &[
    ("Hisseli Tapu", "hisseli"),
    ("Müstakil Parsel", "mustakil"),
    ("Tahsis", "tahsis"),
    ("Zilliyet", "zilliyet"),
];

pub const HEATING: Vocabulary = &[
    ("Belirtilmemiş", "no-heat"),
    ("Soba", "stove"),
    ("Doğalgaz Sobası", "gas-stove"),
    ("Kat Kalöriferi", "kk-coal"),
    ("Merkezi Sistemi", "cc-coal"),
    ("Merkezi Sistem (Isı Pay Ölçer)", "cc-meter"),
    ("Doğalgaz (Kombi)", "gas-combi"),
    ("Yerden Isıtma", "uf-heat"),
    ("Klima", "air-cond"),
    ("Güneş Enerjisi", "solar-energy"),
    ("Jeotermal", "jeotermal"),
];

/// Who currently occupies the property
pub const USE_STATUS: Vocabulary = &[
    ("Boş", "empty"),
    ("Kiracılı", "tenant"),
    ("Ev Sahibi", "landlord"),
];

const YES: &str = "Evet";

pub fn translate(table: Vocabulary, raw: &str) -> String {
    table
        .iter()
        .find(|(label, _)| *label == raw)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `"Evet"` is yes, anything else is no
pub fn yes_no(raw: &str) -> String {
    let answer = if raw == YES { "yes" } else { "no" };
    answer.to_string()
}

/// Keep the lower bound of a range such as `"5-10"`
pub fn first_of_range(raw: &str) -> String {
    match raw.split_once('-') {
        Some((first, _)) => first.to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(ZONING.len(), 18);
        assert_eq!(TITLE_DEED.len(), 4);
        assert_eq!(HEATING.len(), 11);
        assert_eq!(USE_STATUS.len(), 3);
    }

    #[test]
    fn test_translate_exact_match() {
        assert_eq!(translate(HEATING, "Doğalgaz (Kombi)"), "gas-combi");
        assert_eq!(translate(ZONING, "Ada"), "hisseli");
        assert_eq!(translate(TITLE_DEED, "Müstakil Parsel"), "mustakil");
        assert_eq!(translate(USE_STATUS, "Kiracılı"), "tenant");
    }

    #[test]
    fn test_translate_passes_unknown_through() {
        assert_eq!(translate(HEATING, "Şömine"), "Şömine");
        assert_eq!(translate(HEATING, "soba"), "soba");
        assert_eq!(translate(USE_STATUS, ""), "");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no("Evet"), "yes");
        assert_eq!(yes_no("Hayır"), "no");
        assert_eq!(yes_no("evet"), "no");
    }

    #[test]
    fn test_first_of_range() {
        assert_eq!(first_of_range("5-10"), "5");
        assert_eq!(first_of_range("21-25-30"), "21");
        assert_eq!(first_of_range("0"), "0");
    }

    #[test]
    fn test_first_of_range_is_idempotent() {
        for raw in ["5-10", "11-15", "30", "", "Sıfır Bina"] {
            let once = first_of_range(raw);
            assert_eq!(first_of_range(&once), once);
        }
    }
}
