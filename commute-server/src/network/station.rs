//! Station id and station types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station code, e.g. `KJ14` or `PY01`.
///
/// Station ids are globally unique across the network. They start with the
/// owning line's letter prefix followed by a position; connecting stations
/// on other networks follow the same shape (e.g. `KA01`).
///
/// # Examples
///
/// ```
/// use commute_server::network::StationId;
///
/// let id = StationId::parse("KJ14").unwrap();
/// assert_eq!(id.as_str(), "KJ14");
/// assert_eq!(id.line_prefix(), Some("KJ"));
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("kj14").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id.
    ///
    /// The input must be non-empty ASCII alphanumeric, with letters
    /// uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        for c in s.chars() {
            if !c.is_ascii_alphanumeric() {
                return Err(InvalidStationId {
                    reason: "must be ASCII letters and digits",
                });
            }
            if c.is_ascii_lowercase() {
                return Err(InvalidStationId {
                    reason: "letters must be uppercase",
                });
            }
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading run of uppercase letters, if any.
    ///
    /// For `KJ14` this is `KJ`; for an all-digit id it is `None`.
    pub fn line_prefix(&self) -> Option<&str> {
        let end = self
            .0
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(self.0.len());
        if end > 0 { Some(&self.0[..end]) } else { None }
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StationId::parse(&s)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> String {
        id.0
    }
}

/// A mosque near a station, shown on the line-browse page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mosque {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Human-readable distance, e.g. "350 m".
    pub distance: String,
    /// Human-readable walking time, e.g. "5 min".
    pub walking_time: String,
}

/// A station on one line.
///
/// `interchange_stations` and `connecting_stations` are back-references to
/// sibling station ids that represent the *same physical place* on other
/// lines or networks. They are plain id associations resolved through the
/// catalog, never direct links, so the network model stays acyclic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Globally unique station code.
    pub id: StationId,

    /// Rider-facing name, e.g. "Masjid Jamek".
    pub name: String,

    pub lat: f64,
    pub lng: f64,

    /// Same physical station on other rail lines (paid-area interchange).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interchange_stations: Vec<StationId>,

    /// Linked stations on other networks (out-of-system connection).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connecting_stations: Vec<StationId>,

    /// Nearby highlights, e.g. malls and parks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nearby: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mosques: Vec<Mosque>,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_id_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{1,3}[0-9]{0,3}")
            .unwrap()
            .prop_filter("non-empty", |s| !s.is_empty())
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original.
        #[test]
        fn roundtrip(s in valid_id_string()) {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// The line prefix is always a prefix of the id.
        #[test]
        fn prefix_is_prefix(s in valid_id_string()) {
            let id = StationId::parse(&s).unwrap();
            if let Some(prefix) = id.line_prefix() {
                prop_assert!(s.starts_with(prefix));
                prop_assert!(prefix.chars().all(|c| c.is_ascii_uppercase()));
            }
        }

        /// Lowercase ids are always rejected.
        #[test]
        fn lowercase_rejected(s in "[a-z]{2}[0-9]{1,2}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
