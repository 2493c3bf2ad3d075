//! MOTIS API response DTOs.
//!
//! These types map directly to the MOTIS plan and geocode JSON responses.
//! They use `Option` liberally because the engine omits fields that do not
//! apply to a leg (a street corner has no `stopId`, a walk has no
//! `routeShortName`).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::network::StationId;

/// Response from the `plan` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Computed itineraries, best first.
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,

    /// Direct (single-mode) alternatives, when the engine offers any.
    pub direct: Option<Vec<Itinerary>>,
}

/// One computed journey: an ordered sequence of legs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Departure time of the first leg.
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Arrival time of the last leg.
    pub end_time: Option<DateTime<FixedOffset>>,

    /// Total duration in seconds.
    #[serde(default)]
    pub duration: u64,

    /// Number of transfers.
    pub transfers: Option<u32>,

    /// Legs in chronological order. Consecutive legs' `to`/`from` are
    /// expected to coincide, but only within coordinate tolerance.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One continuous mode-of-travel segment of an itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Travel mode.
    pub mode: Mode,

    /// Where the leg starts.
    pub from: Option<Place>,

    /// Where the leg ends.
    pub to: Option<Place>,

    /// Leg duration in seconds.
    #[serde(default)]
    pub duration: u64,

    pub start_time: Option<DateTime<FixedOffset>>,

    pub end_time: Option<DateTime<FixedOffset>>,

    /// Route identifier as the operator publishes it, e.g.
    /// "KJ LRT Kelana Jaya Line". Absent on walks.
    pub route_short_name: Option<String>,

    /// Vehicle headsign (terminus shown on the train).
    pub headsign: Option<String>,

    /// Stops passed without alighting.
    pub intermediate_stops: Option<Vec<Place>>,
}

impl Leg {
    /// True if this is a walking leg.
    pub fn is_walk(&self) -> bool {
        self.mode == Mode::Walk
    }

    /// True if this is a bus leg.
    pub fn is_bus(&self) -> bool {
        self.mode == Mode::Bus
    }

    /// The stop id most likely to name the ridden line: the alighting
    /// stop's, falling back to the boarding stop's.
    pub fn stop_id(&self) -> Option<&str> {
        self.to
            .as_ref()
            .and_then(|p| p.stop_id.as_deref())
            .or_else(|| self.from.as_ref().and_then(|p| p.stop_id.as_deref()))
    }
}

/// Travel mode of a leg. Only `WALK` gets special treatment downstream;
/// unrecognized modes collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Walk,
    Bus,
    Rail,
    #[serde(other)]
    Other,
}

/// An itinerary leg endpoint as reported by the engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Display name, when the engine knows one.
    pub name: Option<String>,

    /// Provider-qualified stop id (e.g. `my-rail-kl_KJ14`), when the
    /// endpoint is a known stop.
    pub stop_id: Option<String>,

    pub lat: Option<f64>,

    pub lon: Option<f64>,
}

impl Place {
    /// Latitude, with the engine's missing-field convention of zero.
    pub fn lat_or_zero(&self) -> f64 {
        self.lat.unwrap_or(0.0)
    }

    /// Longitude, with the engine's missing-field convention of zero.
    pub fn lon_or_zero(&self) -> f64 {
        self.lon.unwrap_or(0.0)
    }
}

/// A geocoding candidate from the `geocode` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeMatch {
    /// Candidate kind, e.g. "STOP", "ADDRESS", "PLACE".
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub name: String,

    /// Provider-qualified id, when the candidate is a stop.
    pub id: Option<String>,

    pub lat: f64,

    pub lon: f64,
}

/// A plan request endpoint: either a free coordinate or a known station.
///
/// Known stations are sent to the engine by id so it snaps the journey to
/// the actual platform rather than matching by distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub name: Option<String>,
    /// Station id, when the rider picked a station rather than a point.
    pub station: Option<StationId>,
}

impl Location {
    /// A free-coordinate location.
    pub fn point(lat: f64, lng: f64, name: impl Into<Option<String>>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
            station: None,
        }
    }

    /// A location anchored to a catalog station.
    pub fn station(id: StationId, lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: Some(name.into()),
            station: Some(id),
        }
    }
}
