//! Display segment construction.
//!
//! Walks the filtered leg sequence once, with one-leg lookback and
//! lookahead, and decides for every leg what a rider should see: which
//! headers to render, which interchange card to show, and which line's
//! color and icon to use. Resolution misses never abort the build; they
//! degrade to a generic style or a missing badge.

use tracing::debug;

use crate::motis::{Itinerary, Leg, Location, Place};
use crate::network::{LineCode, NetworkCatalog, Station};

use super::filter::filter_legs;
use super::identify::identify_line;
use super::matcher::{StationMatcher, coords_close, places_close};
use super::segment::{DisplaySegment, EndpointLabel, Interchange, SegmentStyle, StationBadge};

/// Build the display sequence for one itinerary.
///
/// Produces one segment per kept leg, plus a synthetic arrival segment
/// when the destination is not already represented by the last kept leg's
/// endpoint (or when nothing survived filtering at all). The transform is
/// pure: same inputs, same output, no side effects.
pub fn build_display<'a>(
    catalog: &NetworkCatalog,
    itinerary: &'a Itinerary,
    destination: &Location,
) -> Vec<DisplaySegment<'a>> {
    let matcher = StationMatcher::new(catalog);
    let filtered = filter_legs(catalog, &itinerary.legs);
    let legs = &filtered.legs;

    let last_to: Option<&Place> = legs.last().and_then(|l| l.to.as_ref());
    let dest_matches_last = last_to
        .map(|to| place_matches_destination(to, destination))
        .unwrap_or(false);

    // The arrival segment renders the destination whenever no kept leg
    // already ends there.
    let show_arrival = legs.is_empty() || filtered.last_leg_was_filtered || !dest_matches_last;

    debug!(
        kept = legs.len(),
        show_arrival,
        last_leg_was_filtered = filtered.last_leg_was_filtered,
        "building display segments"
    );

    let mut segments: Vec<DisplaySegment<'a>> = Vec::with_capacity(legs.len() + 1);

    for (idx, &leg) in legs.iter().enumerate() {
        let prev: Option<&Leg> = if idx > 0 { Some(legs[idx - 1]) } else { None };
        let next: Option<&Leg> = legs.get(idx + 1).copied();
        let is_last = idx == legs.len() - 1;
        let is_walking = leg.is_walk();

        // Adjacency, all within coordinate tolerance.
        let same_as_next = both_close(leg.to.as_ref(), next.and_then(|n| n.from.as_ref()));
        let prev_to = prev.and_then(|p| p.to.as_ref());
        let prev_to_matches = both_close(leg.from.as_ref(), prev_to);
        let prev_to_was_hidden =
            prev_to_matches && both_close(prev_to, next.and_then(|n| n.from.as_ref()));
        let same_as_prev = prev_to_matches && !prev_to_was_hidden;

        let walking_interchange = is_walking
            && matches!((prev, next), (Some(p), Some(n))
                if !p.is_walk()
                    && !n.is_walk()
                    && p.route_short_name.is_some()
                    && n.route_short_name.is_some()
                    && p.route_short_name != n.route_short_name);

        let transit_interchange = !is_walking
            && matches!(prev, Some(p)
                if !p.is_walk()
                    && p.route_short_name.is_some()
                    && leg.route_short_name.is_some()
                    && p.route_short_name != leg.route_short_name);

        // Line identity: a ride is identified from its own leg; a walking
        // interchange borrows the identity of the ride being transferred
        // onto; a plain walk has none.
        let line = if is_walking {
            if walking_interchange {
                next.and_then(|n| identify_line(n.route_short_name.as_deref(), n.stop_id()))
            } else {
                None
            }
        } else {
            identify_line(leg.route_short_name.as_deref(), leg.stop_id())
        };

        let style = match line {
            Some(code) => SegmentStyle::Line(code),
            None if is_walking => SegmentStyle::Walk,
            None if leg.is_bus() => SegmentStyle::Bus,
            None => SegmentStyle::Rail,
        };

        let interchange = if walking_interchange {
            Interchange::Walking {
                line,
                destination_name: next
                    .and_then(|n| n.to.as_ref())
                    .and_then(|p| p.name.clone()),
            }
        } else if transit_interchange {
            Interchange::Transit
        } else {
            Interchange::None
        };

        // From header: shown at the start of the journey, whenever the
        // previous leg handed its endpoint over to us, and on interchange
        // cards (which label the station the interchange happens at).
        let show_from = idx == 0 || same_as_prev || prev_to_was_hidden || walking_interchange;
        let from = show_from.then(|| {
            let (place, route_for_badge) = if walking_interchange {
                (
                    prev.and_then(|p| p.to.as_ref()),
                    prev.and_then(|p| p.route_short_name.as_deref()),
                )
            } else {
                (leg.from.as_ref(), leg.route_short_name.as_deref())
            };

            let text = if walking_interchange {
                prev.and_then(|p| p.to.as_ref())
                    .and_then(|p| p.name.clone())
                    .or_else(|| leg.from.as_ref().and_then(|p| p.name.clone()))
            } else {
                leg.from.as_ref().and_then(|p| p.name.clone())
            }
            .unwrap_or_else(|| "Unknown".to_string());

            let badge = endpoint_badge(
                &matcher,
                catalog,
                place,
                route_for_badge,
                is_walking && !walking_interchange,
            );

            let time = if walking_interchange {
                prev.and_then(|p| p.end_time).or(leg.start_time)
            } else {
                leg.start_time
            };

            EndpointLabel { text, badge, time }
        });

        // To header: suppressed when the next leg renders the same place,
        // and on the last leg when the arrival segment shows the
        // destination instead.
        let ends_at_destination = is_last
            && leg
                .to
                .as_ref()
                .map(|to| place_matches_destination(to, destination))
                .unwrap_or(false);
        let show_to = !same_as_next && !(ends_at_destination && show_arrival);
        let to = show_to.then(|| {
            let text = leg
                .to
                .as_ref()
                .and_then(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            let badge = endpoint_badge(
                &matcher,
                catalog,
                leg.to.as_ref(),
                leg.route_short_name.as_deref(),
                false,
            );
            EndpointLabel {
                text,
                badge,
                time: leg.end_time,
            }
        });

        segments.push(DisplaySegment {
            leg: Some(leg),
            is_walking,
            interchange,
            line,
            style,
            from,
            to,
            is_final: is_last && !show_arrival,
        });
    }

    if show_arrival {
        segments.push(arrival_segment(
            &matcher,
            catalog,
            itinerary,
            destination,
            last_to,
            filtered.last_leg_was_filtered,
        ));
    }

    segments
}

/// The synthetic trailing segment that renders the journey's destination.
fn arrival_segment<'a>(
    matcher: &StationMatcher<'_>,
    catalog: &NetworkCatalog,
    itinerary: &Itinerary,
    destination: &Location,
    last_kept_to: Option<&Place>,
    last_leg_was_filtered: bool,
) -> DisplaySegment<'a> {
    let original_last_to = itinerary.legs.last().and_then(|l| l.to.as_ref());

    let text = destination
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| {
            if last_leg_was_filtered {
                original_last_to.and_then(|p| p.name.clone())
            } else {
                None
            }
        })
        .or_else(|| last_kept_to.and_then(|p| p.name.clone()))
        .unwrap_or_else(|| "Unknown".to_string());

    let station = matcher.resolve(
        Some(destination.lat),
        Some(destination.lng),
        Some(&text),
        None,
    );

    // The arrival badge uses the station's own line; there is no ridden
    // line to disambiguate siblings against.
    let (line, badge) = match station.and_then(|s| owning_line(catalog, s)) {
        Some((station, line)) => (
            Some(line),
            Some(StationBadge {
                station_id: station.id.clone(),
                line,
            }),
        ),
        None => (None, None),
    };

    let style = match line {
        Some(code) => SegmentStyle::Line(code),
        None => SegmentStyle::Destination,
    };

    DisplaySegment {
        leg: None,
        is_walking: false,
        interchange: Interchange::None,
        line,
        style,
        from: Some(EndpointLabel {
            text,
            badge,
            time: itinerary.end_time,
        }),
        to: None,
        is_final: true,
    }
}

/// Resolve the badge for an endpoint: the station, then the sibling id on
/// the line actually being ridden.
///
/// Plain walking legs only get a badge when the endpoint carries a stop id
/// (`require_stop_id`); a street address resolving to a station by fuzzy
/// proximity would pin a wrong badge on it.
fn endpoint_badge(
    matcher: &StationMatcher<'_>,
    catalog: &NetworkCatalog,
    place: Option<&Place>,
    route_short_name: Option<&str>,
    require_stop_id: bool,
) -> Option<StationBadge> {
    let place = place?;
    if require_stop_id && place.stop_id.is_none() {
        return None;
    }

    let station = matcher.resolve_place(place)?;
    let line = identify_line(route_short_name, place.stop_id.as_deref());
    badge_for(catalog, station, line)
}

/// Pick the badge id for a station given the line being ridden.
///
/// Among the station's own id and its interchange siblings, the first id
/// owned by the ridden line wins; the station's own id is the fallback.
/// Pure in the catalog and its arguments, so callers may memoize it.
fn badge_for(
    catalog: &NetworkCatalog,
    station: &Station,
    line: Option<LineCode>,
) -> Option<StationBadge> {
    let chosen = line
        .and_then(|code| {
            std::iter::once(&station.id)
                .chain(station.interchange_stations.iter())
                .find(|id| catalog.line_of(id.as_str()).is_some_and(|l| l.id == code))
        })
        .unwrap_or(&station.id);

    let owning = catalog.line_of(chosen.as_str())?;
    Some(StationBadge {
        station_id: chosen.clone(),
        line: owning.id,
    })
}

/// A station paired with the line that owns it.
fn owning_line<'a>(
    catalog: &'a NetworkCatalog,
    station: &'a Station,
) -> Option<(&'a Station, LineCode)> {
    catalog.line_of(station.id.as_str()).map(|l| (station, l.id))
}

/// True when both places are present and within tolerance.
fn both_close(a: Option<&Place>, b: Option<&Place>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => places_close(a, b),
        _ => false,
    }
}

/// True when a leg endpoint sits within tolerance of the requested
/// destination.
fn place_matches_destination(place: &Place, destination: &Location) -> bool {
    coords_close(place.lat_or_zero(), destination.lat)
        && coords_close(place.lon_or_zero(), destination.lng)
}
