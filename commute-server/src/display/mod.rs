//! Itinerary normalization and annotation.
//!
//! This module is the core of the application. The external routing engine
//! returns itineraries full of artifacts a rider should never see:
//! sub-100-meter "walks" inside a station, duplicated connector legs, and
//! route identifiers that don't name a line. The pipeline here turns a raw
//! itinerary into a clean sequence of display segments:
//!
//! raw legs → [`filter_legs`] → kept legs → [`build_display`] →
//! `Vec<DisplaySegment>`
//!
//! The whole pipeline is a pure, synchronous transform over the itinerary
//! and the static [`NetworkCatalog`](crate::network::NetworkCatalog): no
//! I/O, no shared state, safe and cheap to re-run on the same inputs.
//! Matching failures are never errors — an endpoint that is not a rail
//! station simply renders without a station badge.

mod builder;
mod filter;
mod identify;
mod matcher;
mod segment;

#[cfg(test)]
mod display_tests;

pub use builder::build_display;
pub use filter::{FilteredLegs, filter_legs};
pub use identify::{identify_line, match_route_name};
pub use matcher::{StationMatcher, extract_station_code};
pub use segment::{DisplaySegment, EndpointLabel, Interchange, SegmentStyle, StationBadge};
