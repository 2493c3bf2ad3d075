//! Line code and line types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::station::Station;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line code: {code}")]
pub struct InvalidLineCode {
    code: String,
}

/// One of the six Klang Valley rail lines.
///
/// The code set is fixed: `AG`, `SP`, `KJ`, `MR`, `KG`, `PY`. Station ids
/// on a line carry the line's code as a prefix (e.g. `KJ14`, `PY01`).
///
/// # Examples
///
/// ```
/// use commute_server::network::LineCode;
///
/// let kj = LineCode::parse("KJ").unwrap();
/// assert_eq!(kj.as_str(), "KJ");
/// assert_eq!(kj.display_name(), "LRT Kelana Jaya");
///
/// // Unknown codes are rejected
/// assert!(LineCode::parse("XX").is_err());
/// assert!(LineCode::parse("kj").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LineCode {
    /// LRT Ampang Line
    Ampang,
    /// LRT Sri Petaling Line
    SriPetaling,
    /// LRT Kelana Jaya Line
    KelanaJaya,
    /// KL Monorail
    Monorail,
    /// MRT Kajang Line
    Kajang,
    /// MRT Putrajaya Line
    Putrajaya,
}

impl LineCode {
    /// All line codes, in declared order.
    ///
    /// This order is load-bearing: the route-name classifier tests codes
    /// in exactly this order and returns the first hit.
    pub const ALL: [LineCode; 6] = [
        LineCode::Ampang,
        LineCode::SriPetaling,
        LineCode::KelanaJaya,
        LineCode::Monorail,
        LineCode::Kajang,
        LineCode::Putrajaya,
    ];

    /// Parse a line code from its two-letter form.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        match s {
            "AG" => Ok(LineCode::Ampang),
            "SP" => Ok(LineCode::SriPetaling),
            "KJ" => Ok(LineCode::KelanaJaya),
            "MR" => Ok(LineCode::Monorail),
            "KG" => Ok(LineCode::Kajang),
            "PY" => Ok(LineCode::Putrajaya),
            other => Err(InvalidLineCode {
                code: other.to_string(),
            }),
        }
    }

    /// Returns the two-letter code.
    pub fn as_str(self) -> &'static str {
        match self {
            LineCode::Ampang => "AG",
            LineCode::SriPetaling => "SP",
            LineCode::KelanaJaya => "KJ",
            LineCode::Monorail => "MR",
            LineCode::Kajang => "KG",
            LineCode::Putrajaya => "PY",
        }
    }

    /// Returns the rider-facing line name, e.g. "MRT Kajang".
    pub fn display_name(self) -> &'static str {
        match self {
            LineCode::Ampang => "LRT Ampang",
            LineCode::SriPetaling => "LRT Sri Petaling",
            LineCode::KelanaJaya => "LRT Kelana Jaya",
            LineCode::Monorail => "KL Monorail",
            LineCode::Kajang => "MRT Kajang",
            LineCode::Putrajaya => "MRT Putrajaya",
        }
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_str())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for LineCode {
    type Error = InvalidLineCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        LineCode::parse(&s)
    }
}

impl From<LineCode> for String {
    fn from(code: LineCode) -> String {
        code.as_str().to_string()
    }
}

/// A rail line: identity plus its ordered station list.
///
/// A station is owned by exactly one line's `stations` list. Other lines
/// reference it only by id, through `interchange_stations` or
/// `connecting_stations` on their own stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Line code (also the station-id prefix for this line).
    pub id: LineCode,

    /// Short name, e.g. "Kelana Jaya".
    pub name: String,

    /// Network kind, e.g. "LRT", "MRT", "Monorail".
    #[serde(rename = "type")]
    pub kind: String,

    /// Stations in line order.
    pub stations: Vec<Station>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_known_codes() {
        for code in LineCode::ALL {
            assert_eq!(LineCode::parse(code.as_str()).unwrap(), code);
        }
    }

    #[test]
    fn reject_unknown_codes() {
        assert!(LineCode::parse("XX").is_err());
        assert!(LineCode::parse("").is_err());
        assert!(LineCode::parse("KJL").is_err());
        assert!(LineCode::parse("kj").is_err());
    }

    #[test]
    fn declared_order() {
        let codes: Vec<&str> = LineCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["AG", "SP", "KJ", "MR", "KG", "PY"]);
    }

    #[test]
    fn display_names() {
        assert_eq!(LineCode::Kajang.display_name(), "MRT Kajang");
        assert_eq!(LineCode::Monorail.display_name(), "KL Monorail");
        assert_eq!(LineCode::SriPetaling.display_name(), "LRT Sri Petaling");
    }

    #[test]
    fn debug_and_display() {
        assert_eq!(format!("{}", LineCode::KelanaJaya), "KJ");
        assert_eq!(format!("{:?}", LineCode::KelanaJaya), "LineCode(KJ)");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&LineCode::Putrajaya).unwrap();
        assert_eq!(json, "\"PY\"");
        let back: LineCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LineCode::Putrajaya);
    }

    #[test]
    fn serde_rejects_unknown() {
        assert!(serde_json::from_str::<LineCode>("\"ZZ\"").is_err());
    }

    #[test]
    fn line_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "KJ",
            "name": "Kelana Jaya",
            "type": "LRT",
            "stations": [
                {"id": "KJ13", "name": "Masjid Jamek", "lat": 3.14966, "lng": 101.69624}
            ]
        }"#;

        let line: Line = serde_json::from_str(json).unwrap();
        assert_eq!(line.id, LineCode::KelanaJaya);
        assert_eq!(line.kind, "LRT");
        assert_eq!(line.stations.len(), 1);
        assert_eq!(line.stations[0].name, "Masjid Jamek");
    }
}
