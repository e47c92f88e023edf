//! Record kinds accepted by the declaration workflow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRecordKindError;
use crate::slug::slugify;

/// Inventory category of a spreadsheet. Each kind has its own template.
///
/// # Example
///
/// ```
/// use acervo_model::RecordKind;
///
/// let kind: RecordKind = "Museológico".parse().unwrap();
/// assert_eq!(kind, RecordKind::Museological);
/// assert_eq!(kind.as_str(), "museological");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Museum objects.
    Museological,
    /// Library holdings.
    Bibliographic,
    /// Archival fonds and documents.
    Archival,
}

impl RecordKind {
    /// All kinds in submission order.
    pub const ALL: [RecordKind; 3] = [Self::Museological, Self::Bibliographic, Self::Archival];

    /// Stable machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Museological => "museological",
            Self::Bibliographic => "bibliographic",
            Self::Archival => "archival",
        }
    }

    /// Name shown on the declaration form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Museological => "Museológico",
            Self::Bibliographic => "Bibliográfico",
            Self::Archival => "Arquivístico",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ParseRecordKindError;

    /// Accepts English and Portuguese names, ignoring case and accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match slugify(s).as_str() {
            "museological" | "museologico" => Ok(Self::Museological),
            "bibliographic" | "bibliografico" => Ok(Self::Bibliographic),
            "archival" | "arquivistico" => Ok(Self::Archival),
            _ => Err(ParseRecordKindError {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_and_portuguese() {
        assert_eq!("museological".parse::<RecordKind>().unwrap(), RecordKind::Museological);
        assert_eq!("Bibliográfico".parse::<RecordKind>().unwrap(), RecordKind::Bibliographic);
        assert_eq!("ARQUIVÍSTICO".parse::<RecordKind>().unwrap(), RecordKind::Archival);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "photographic".parse::<RecordKind>().unwrap_err();
        assert_eq!(err.value, "photographic");
    }

    #[test]
    fn test_display_round_trips() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.to_string().parse::<RecordKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RecordKind::Archival).unwrap();
        assert_eq!(json, "\"archival\"");
    }
}
