//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::display::{DisplaySegment, EndpointLabel, Interchange};
use crate::motis::Itinerary;
use crate::network::{
    CONNECTING_STATION_ICON, INTERCHANGE_STATION_ICON, Line, Mosque, NetworkCatalog, Station,
};

/// Query parameters for planning, as the client sends them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanQuery {
    pub from_lat: f64,

    pub from_lng: f64,

    pub from_name: Option<String>,

    /// Station id when the origin is a picked station.
    pub from_id: Option<String>,

    pub to_lat: f64,

    pub to_lng: f64,

    pub to_name: Option<String>,

    /// Station id when the destination is a picked station.
    pub to_id: Option<String>,
}

/// Query parameters for geocoding.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub text: String,
}

/// Response for the itinerary list.
#[derive(Debug, Serialize)]
pub struct PlanSummaryResponse {
    /// Itineraries in engine order; the list index addresses the detail
    /// endpoint.
    pub itineraries: Vec<ItinerarySummary>,
}

/// One itinerary, summarized for the results list.
#[derive(Debug, Serialize)]
pub struct ItinerarySummary {
    /// Departure time (RFC 3339).
    pub start_time: Option<String>,

    /// Arrival time (RFC 3339).
    pub end_time: Option<String>,

    /// Total duration in seconds.
    pub duration_secs: u64,

    /// Number of transfers.
    pub transfers: Option<u32>,

    /// Number of rider-facing legs (transit rides).
    pub ride_count: usize,
}

impl ItinerarySummary {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            start_time: itinerary.start_time.map(|t| t.to_rfc3339()),
            end_time: itinerary.end_time.map(|t| t.to_rfc3339()),
            duration_secs: itinerary.duration,
            transfers: itinerary.transfers,
            ride_count: itinerary.legs.iter().filter(|l| !l.is_walk()).count(),
        }
    }
}

/// Response for one itinerary's display segments.
#[derive(Debug, Serialize)]
pub struct RouteDetailResponse {
    pub start_time: Option<String>,

    pub end_time: Option<String>,

    pub duration_secs: u64,

    pub transfers: Option<u32>,

    /// Rider-facing instruction steps, in order.
    pub segments: Vec<SegmentResult>,
}

/// One display segment.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// "ride", "walk", "interchange" or "arrival".
    pub kind: &'static str,

    /// Icon background color (hex).
    pub color: String,

    /// Line icon asset path, when the segment has an identified line.
    pub icon: Option<String>,

    /// Identified line code.
    pub line: Option<String>,

    /// Interchange card label, e.g. "Interchange to MRT Kajang".
    pub interchange_label: Option<String>,

    /// The "from" header, absent when a neighboring segment shows it.
    pub from: Option<EndpointResult>,

    /// The "to" header, absent when a neighboring segment shows it.
    pub to: Option<EndpointResult>,

    /// Walk duration in seconds, for plain walking segments.
    pub walk_duration_secs: Option<u64>,

    /// Ride duration in seconds, for transit segments.
    pub ride_duration_secs: Option<u64>,

    /// Vehicle headsign, for transit segments.
    pub headsign: Option<String>,

    /// Names of stops passed without alighting.
    pub intermediate_stops: Vec<String>,

    /// True on the segment that carries the journey's end.
    pub is_final: bool,
}

impl SegmentResult {
    pub fn from_segment(segment: &DisplaySegment<'_>) -> Self {
        let kind = match (segment.leg, segment.is_walking, &segment.interchange) {
            (None, _, _) => "arrival",
            (_, true, Interchange::Walking { .. }) => "interchange",
            (_, true, _) => "walk",
            _ => "ride",
        };

        let is_plain_walk = kind == "walk";
        let is_ride = kind == "ride";

        let intermediate_stops = segment
            .leg
            .and_then(|l| l.intermediate_stops.as_ref())
            .map(|stops| stops.iter().filter_map(|p| p.name.clone()).collect())
            .unwrap_or_default();

        Self {
            kind,
            color: segment.style.color().to_string(),
            icon: segment.style.icon_path().map(str::to_string),
            line: segment.line.map(|c| c.as_str().to_string()),
            interchange_label: segment.interchange.label(),
            from: segment.from.as_ref().map(EndpointResult::from_label),
            to: segment.to.as_ref().map(EndpointResult::from_label),
            walk_duration_secs: is_plain_walk.then(|| segment.leg.map(|l| l.duration)).flatten(),
            ride_duration_secs: is_ride.then(|| segment.leg.map(|l| l.duration)).flatten(),
            headsign: if is_ride {
                segment.leg.and_then(|l| l.headsign.clone())
            } else {
                None
            },
            intermediate_stops,
            is_final: segment.is_final,
        }
    }
}

/// One endpoint header.
#[derive(Debug, Serialize)]
pub struct EndpointResult {
    /// Place name.
    pub name: String,

    /// Station badge beside the name.
    pub badge: Option<BadgeResult>,

    /// Time shown beside the header (RFC 3339).
    pub time: Option<String>,
}

impl EndpointResult {
    fn from_label(label: &EndpointLabel) -> Self {
        Self {
            name: label.text.clone(),
            badge: label.badge.as_ref().map(|b| BadgeResult {
                station_id: b.station_id.as_str().to_string(),
                line: b.line.as_str().to_string(),
                color: b.line.color().to_string(),
            }),
            time: label.time.map(|t| t.to_rfc3339()),
        }
    }
}

/// A station badge: the station code on the line being ridden.
#[derive(Debug, Serialize)]
pub struct BadgeResult {
    pub station_id: String,

    pub line: String,

    /// Badge background color (the owning line's color).
    pub color: String,
}

/// Response listing all lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineSummary>,
}

/// One line, summarized.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    pub id: String,

    pub name: String,

    /// Network kind, e.g. "LRT", "MRT".
    pub kind: String,

    pub color: String,

    pub icon: String,

    pub station_count: usize,
}

impl LineSummary {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.as_str().to_string(),
            name: line.name.clone(),
            kind: line.kind.clone(),
            color: line.id.color().to_string(),
            icon: line.id.icon_path().to_string(),
            station_count: line.stations.len(),
        }
    }
}

/// Response for one line's stations.
#[derive(Debug, Serialize)]
pub struct LineDetailResponse {
    pub id: String,

    pub name: String,

    pub kind: String,

    pub color: String,

    pub icon: String,

    /// Marker asset for interchange station sections.
    pub interchange_icon: String,

    /// Marker asset for connecting station sections.
    pub connecting_icon: String,

    pub stations: Vec<StationResult>,
}

impl LineDetailResponse {
    pub fn from_line(line: &Line, catalog: &NetworkCatalog) -> Self {
        Self {
            id: line.id.as_str().to_string(),
            name: line.name.clone(),
            kind: line.kind.clone(),
            color: line.id.color().to_string(),
            icon: line.id.icon_path().to_string(),
            interchange_icon: INTERCHANGE_STATION_ICON.to_string(),
            connecting_icon: CONNECTING_STATION_ICON.to_string(),
            stations: line
                .stations
                .iter()
                .map(|s| StationResult::from_station(s, catalog))
                .collect(),
        }
    }
}

/// One station on a line, with its cross-line relations resolved.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,

    pub name: String,

    pub lat: f64,

    pub lng: f64,

    /// Same physical station on other rail lines.
    pub interchanges: Vec<StationRef>,

    /// Linked stations on other networks.
    pub connections: Vec<StationRef>,

    /// Nearby highlights.
    pub nearby: Vec<String>,

    /// Nearby mosques, passed through as reference data.
    pub mosques: Vec<Mosque>,
}

impl StationResult {
    fn from_station(station: &Station, catalog: &NetworkCatalog) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            lat: station.lat,
            lng: station.lng,
            interchanges: resolve_refs(&station.interchange_stations, catalog),
            connections: resolve_refs(&station.connecting_stations, catalog),
            nearby: station.nearby.clone(),
            mosques: station.mosques.clone(),
        }
    }
}

/// A resolved reference to a station on another line.
#[derive(Debug, Serialize)]
pub struct StationRef {
    pub station_id: String,

    pub name: String,

    pub line: String,

    /// Line kind and name, e.g. "MRT Putrajaya".
    pub line_name: String,

    pub color: String,
}

/// Resolve id references through the catalog, skipping ids the catalog
/// does not know (references into networks we do not model).
fn resolve_refs(ids: &[crate::network::StationId], catalog: &NetworkCatalog) -> Vec<StationRef> {
    ids.iter()
        .filter_map(|id| {
            let station = catalog.station(id.as_str())?;
            let line = catalog.line_of(id.as_str())?;
            Some(StationRef {
                station_id: station.id.as_str().to_string(),
                name: station.name.clone(),
                line: line.id.as_str().to_string(),
                line_name: line.id.display_name().to_string(),
                color: line.id.color().to_string(),
            })
        })
        .collect()
}
