//! Leg filtering.
//!
//! The routing engine's leg sequences contain steps that are real to the
//! router but meaningless to a rider: a 40-second "walk" from a station to
//! itself, or a zero-distance hop out of the origin station that the next
//! leg re-covers. This pass drops them while keeping every walk that
//! carries information — in particular the connector between two rides at
//! an interchange, which downstream rendering turns into the interchange
//! card.
//!
//! Filtering is a function of the whole original sequence, not a
//! leg-at-a-time decision: the first-leg and interchange rules look ahead
//! to the next leg.

use tracing::debug;

use crate::motis::Leg;
use crate::network::NetworkCatalog;

use super::matcher::{StationMatcher, coords_close, places_close};

/// A walk shorter than this is a candidate for dropping.
const MIN_WALK_SECS: u64 = 180;

/// Result of filtering an itinerary's legs.
#[derive(Debug)]
pub struct FilteredLegs<'a> {
    /// Kept legs, an order-preserving subsequence of the input.
    pub legs: Vec<&'a Leg>,

    /// True iff the original final leg was a walk that was dropped.
    ///
    /// The display builder uses this to know the itinerary's real endpoint
    /// is no longer represented by any kept leg.
    pub last_leg_was_filtered: bool,
}

/// Filter a raw leg sequence down to rider-facing steps.
///
/// Non-walk legs are always kept. A walk leg is kept unless it is one of
/// the engine artifacts described in [`keep_leg`].
pub fn filter_legs<'a>(catalog: &NetworkCatalog, legs: &'a [Leg]) -> FilteredLegs<'a> {
    let matcher = StationMatcher::new(catalog);

    let mut kept: Vec<&Leg> = Vec::with_capacity(legs.len());
    let mut last_kept = false;

    for (idx, leg) in legs.iter().enumerate() {
        if keep_leg(&matcher, legs, idx) {
            kept.push(leg);
            last_kept = idx == legs.len() - 1;
        } else {
            debug!(idx, duration = leg.duration, "dropping walk leg");
        }
    }

    let last_leg_was_filtered = legs
        .last()
        .map(|leg| leg.is_walk() && !last_kept)
        .unwrap_or(false);

    FilteredLegs {
        legs: kept,
        last_leg_was_filtered,
    }
}

/// Decide whether the leg at `idx` survives filtering.
///
/// Walks with a missing endpoint are kept unconditionally (there is
/// nothing to evaluate). For the rest, in order:
///
/// - the very first leg is checked for station-door artifacts: a walk
///   that starts at the resolved origin station and goes nowhere (same
///   station, or both points within tolerance), and a walk whose endpoint
///   the next leg's start re-covers, are dropped;
/// - a walk immediately followed by a non-walk leg with a route name is
///   kept — it is the connector between two rides at an interchange;
/// - any remaining walk shorter than three minutes is dropped when its
///   endpoints resolve to the same station or sit within coordinate
///   tolerance of each other.
fn keep_leg(matcher: &StationMatcher<'_>, legs: &[Leg], idx: usize) -> bool {
    let leg = &legs[idx];
    if !leg.is_walk() {
        return true;
    }
    let (Some(from), Some(to)) = (leg.from.as_ref(), leg.to.as_ref()) else {
        return true;
    };

    let next = legs.get(idx + 1);
    let from_station = matcher.resolve_place(from);
    let to_station = matcher.resolve_place(to);

    if idx == 0 {
        // Walk out of the origin station that goes nowhere.
        if let Some(origin) = from_station {
            let at_origin_station = coords_close(from.lat_or_zero(), origin.lat)
                && coords_close(from.lon_or_zero(), origin.lng);
            if at_origin_station {
                if to_station.map(|s| s.id == origin.id).unwrap_or(false) {
                    return false;
                }
                if places_close(from, to) {
                    return false;
                }
            }
        }

        // Hop whose endpoint the next leg's start re-covers.
        if let Some(next_from) = next.and_then(|n| n.from.as_ref()) {
            if places_close(to, next_from) {
                return false;
            }
        }
    }

    // Connector into a ride: kept so the interchange card can render.
    let before_named_ride = next
        .map(|n| !n.is_walk() && n.route_short_name.is_some())
        .unwrap_or(false);
    if before_named_ride {
        return true;
    }

    let same_station = match (from_station, to_station) {
        (Some(a), Some(b)) => a.id == b.id,
        _ => false,
    };
    let very_close = places_close(from, to);
    let very_short = leg.duration < MIN_WALK_SECS;

    !(very_short && (same_station || very_close))
}
