//! Static rail-network reference model.
//!
//! This module contains the hand-curated description of the Klang Valley
//! rail network: the six lines, their ordered station lists, and the
//! cross-line relationships that tie one physical interchange together.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod branding;
mod catalog;
mod line;
mod station;

pub use branding::{
    BUS_COLOR, CONNECTING_STATION_ICON, DESTINATION_FALLBACK_COLOR, INTERCHANGE_STATION_ICON,
    RAIL_FALLBACK_COLOR, WALK_COLOR,
};
pub use catalog::{CatalogError, NetworkCatalog};
pub use line::{InvalidLineCode, Line, LineCode};
pub use station::{InvalidStationId, Mosque, Station, StationId};

/// Coordinate proximity threshold, in degrees, for "same place" comparisons.
///
/// Roughly 111 m at the equator. The comparison is strict: a difference of
/// exactly `COORD_EPSILON` on either axis does not count as a match.
pub const COORD_EPSILON: f64 = 0.001;
