//! Leg-endpoint to station matching.
//!
//! The routing engine describes leg endpoints three ways at once:
//! coordinates, a display name, and (for known stops) a provider-qualified
//! stop id. Resolution tries them in order of reliability.

use tracing::trace;

use crate::motis::Place;
use crate::network::{COORD_EPSILON, NetworkCatalog, Station};

/// Extract the local station code from a provider-qualified stop id.
///
/// MOTIS stop ids qualify the local code with an underscore-separated
/// provider prefix; the token after the last `_` is the code. An id with
/// no underscore carries no local code.
///
/// # Examples
///
/// ```
/// use commute_server::display::extract_station_code;
///
/// assert_eq!(extract_station_code("my-rail-kl_KJ14"), Some("KJ14"));
/// assert_eq!(extract_station_code("a_b_PY01"), Some("PY01"));
/// assert_eq!(extract_station_code("KJ14"), None);
/// ```
pub fn extract_station_code(stop_id: &str) -> Option<&str> {
    stop_id.rsplit_once('_').map(|(_, code)| code)
}

/// True when two coordinate components sit strictly within tolerance.
pub(crate) fn coords_close(a: f64, b: f64) -> bool {
    (a - b).abs() < COORD_EPSILON
}

/// True when two places sit strictly within tolerance on both axes.
///
/// Missing coordinates follow the engine's convention and compare as zero.
pub(crate) fn places_close(a: &Place, b: &Place) -> bool {
    coords_close(a.lat_or_zero(), b.lat_or_zero())
        && coords_close(a.lon_or_zero(), b.lon_or_zero())
}

/// Resolves leg endpoints to catalog stations.
///
/// A borrowing view over the catalog; construction is free and the matcher
/// has no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct StationMatcher<'a> {
    catalog: &'a NetworkCatalog,
}

impl<'a> StationMatcher<'a> {
    /// Create a matcher over a catalog.
    pub fn new(catalog: &'a NetworkCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve an endpoint descriptor to a station, or `None`.
    ///
    /// Priority, first success wins:
    /// 1. the stop id's local code, looked up by station id;
    /// 2. coordinates, first station strictly within tolerance on both axes;
    /// 3. the name, case-insensitive exact equality.
    ///
    /// `None` is a normal outcome: a bus stop or a street address has no
    /// rail station.
    pub fn resolve(
        &self,
        lat: Option<f64>,
        lon: Option<f64>,
        name: Option<&str>,
        stop_id: Option<&str>,
    ) -> Option<&'a Station> {
        if let Some(stop_id) = stop_id {
            if let Some(code) = extract_station_code(stop_id) {
                if let Some(station) = self.catalog.station(code) {
                    return Some(station);
                }
            }
        }

        if let (Some(lat), Some(lon)) = (lat, lon) {
            if let Some(station) = self.catalog.find_by_coords(lat, lon) {
                return Some(station);
            }
        }

        if let Some(name) = name {
            if let Some(station) = self.catalog.find_by_name(name) {
                return Some(station);
            }
        }

        trace!(?stop_id, ?name, "endpoint did not resolve to a station");
        None
    }

    /// Resolve a leg endpoint to a station.
    pub fn resolve_place(&self, place: &Place) -> Option<&'a Station> {
        self.resolve(
            place.lat,
            place.lon,
            place.name.as_deref(),
            place.stop_id.as_deref(),
        )
    }
}
