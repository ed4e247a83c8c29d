//! Document record data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::text;

/// The official gazettes covered by the search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gazette {
    /// Boletín Oficial del Estado (national, RSS feed)
    Boe,

    /// Boletín Oficial de Canarias (regional, issue-numbered PDF)
    Boc,

    /// Boletín Oficial de la Provincia de Las Palmas (PDF)
    BopLasPalmas,

    /// Boletín Oficial de la Provincia de Santa Cruz de Tenerife (PDF)
    BopSantaCruz,
}

impl Gazette {
    /// Short display name used in output and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gazette::Boe => "BOE",
            Gazette::Boc => "BOC",
            Gazette::BopLasPalmas => "BOP LP",
            Gazette::BopSantaCruz => "BOP SCTF",
        }
    }
}

impl fmt::Display for Gazette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A publication found in one gazette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Originating gazette
    pub gazette: Gazette,

    /// Display title (feed title, or extracted block text for PDF sources)
    pub title: String,

    /// Resolved document location
    pub url: String,

    /// Publication date attributed to the entry, ISO `YYYY-MM-DD`
    pub published_date: String,

    /// Feed-provided description, or a fixed extraction-method note for
    /// PDF-derived entries
    pub summary: String,
}

impl DocumentRecord {
    /// Whether any of the normalized needles occurs in the normalized
    /// title+summary text.
    pub fn matches_any(&self, normalized_needles: &[String]) -> bool {
        let haystack = format!("{} {}", self.title, self.summary);
        text::contains_any(&haystack, normalized_needles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DocumentRecord {
        DocumentRecord {
            gazette: Gazette::Boe,
            title: "Plan General de Urbanización".to_string(),
            url: "https://example.com/doc/1".to_string(),
            published_date: "2025-03-10".to_string(),
            summary: "Aprobación definitiva".to_string(),
        }
    }

    #[test]
    fn test_matches_any_accent_insensitive() {
        let record = sample_record();
        assert!(record.matches_any(&["urbaniza".to_string()]));
        assert!(record.matches_any(&["aprobacion".to_string()]));
        assert!(!record.matches_any(&["licitacion".to_string()]));
    }

    #[test]
    fn test_gazette_display_names() {
        assert_eq!(Gazette::Boe.as_str(), "BOE");
        assert_eq!(Gazette::BopLasPalmas.as_str(), "BOP LP");
        assert_eq!(Gazette::BopSantaCruz.to_string(), "BOP SCTF");
    }
}
