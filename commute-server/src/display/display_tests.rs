//! End-to-end tests for the normalization pipeline, plus the shared
//! network fixture the sibling test modules build their legs against.

use crate::motis::{Itinerary, Leg, Location, Mode, Place};
use crate::network::{Line, LineCode, NetworkCatalog, Station, StationId};

use super::segment::{Interchange, SegmentStyle};
use super::{build_display, filter_legs};

fn s(
    id: &str,
    name: &str,
    lat: f64,
    lng: f64,
    interchange: &[&str],
    connecting: &[&str],
) -> Station {
    Station {
        id: StationId::parse(id).unwrap(),
        name: name.to_string(),
        lat,
        lng,
        interchange_stations: interchange
            .iter()
            .map(|i| StationId::parse(i).unwrap())
            .collect(),
        connecting_stations: connecting
            .iter()
            .map(|i| StationId::parse(i).unwrap())
            .collect(),
        nearby: Vec::new(),
        mosques: Vec::new(),
    }
}

fn line(id: LineCode, name: &str, kind: &str, stations: Vec<Station>) -> Line {
    Line {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        stations,
    }
}

/// A representative slice of the network: all six lines, the major
/// cross-line interchanges (Masjid Jamek, Pasar Seni, Kwasa Damansara,
/// Tun Razak Exchange) and a few plain stations.
pub(crate) fn sample_catalog() -> NetworkCatalog {
    NetworkCatalog::new(vec![
        line(
            LineCode::Ampang,
            "Ampang",
            "LRT",
            vec![
                s("AG7", "Masjid Jamek", 3.14980, 101.69690, &["KJ13", "SP7"], &[]),
                s("AG18", "Ampang", 3.15030, 101.76000, &[], &[]),
            ],
        ),
        line(
            LineCode::SriPetaling,
            "Sri Petaling",
            "LRT",
            vec![
                s("SP7", "Masjid Jamek", 3.14975, 101.69685, &["KJ13", "AG7"], &[]),
                s("SP17", "Sri Petaling", 3.06130, 101.68720, &[], &[]),
            ],
        ),
        line(
            LineCode::KelanaJaya,
            "Kelana Jaya",
            "LRT",
            vec![
                s("KJ12", "Dang Wangi", 3.15680, 101.70190, &[], &[]),
                s("KJ13", "Masjid Jamek", 3.14966, 101.69624, &["AG7", "SP7"], &[]),
                s("KJ14", "Pasar Seni", 3.14222, 101.69533, &["KG16"], &["KA01"]),
                s("KJ15", "KL Sentral", 3.13390, 101.68640, &[], &["MR1", "KG15"]),
            ],
        ),
        line(
            LineCode::Monorail,
            "KL Monorail",
            "Monorail",
            vec![
                s("MR1", "KL Sentral", 3.13290, 101.68760, &[], &["KJ15"]),
                s("MR6", "Bukit Bintang", 3.14611, 101.71133, &[], &["KG18A"]),
            ],
        ),
        line(
            LineCode::Kajang,
            "Kajang",
            "MRT",
            vec![
                s("KG04", "Kwasa Damansara", 3.17650, 101.57200, &["PY01"], &[]),
                s("KG15", "Muzium Negara", 3.13740, 101.68750, &[], &["KJ15"]),
                s("KG16", "Pasar Seni", 3.14240, 101.69522, &["KJ14"], &[]),
                s("KG18A", "Bukit Bintang", 3.14680, 101.71060, &[], &["MR6"]),
                s("KG20", "Tun Razak Exchange", 3.14260, 101.72010, &["PY23"], &[]),
            ],
        ),
        line(
            LineCode::Putrajaya,
            "Putrajaya",
            "MRT",
            vec![
                s("PY01", "Kwasa Damansara", 3.17660, 101.57210, &["KG04"], &[]),
                s("PY05", "Kampung Selamat", 3.20600, 101.58000, &[], &[]),
                s("PY23", "Tun Razak Exchange", 3.14250, 101.72000, &["KG20"], &[]),
            ],
        ),
    ])
    .unwrap()
}

/// A bare coordinate place.
pub(crate) fn place(lat: f64, lng: f64) -> Place {
    Place {
        name: None,
        stop_id: None,
        lat: Some(lat),
        lon: Some(lng),
    }
}

/// A coordinate place with an optional name.
pub(crate) fn place_at(lat: f64, lng: f64, name: Option<&str>) -> Place {
    Place {
        name: name.map(str::to_string),
        stop_id: None,
        lat: Some(lat),
        lon: Some(lng),
    }
}

/// A place at a catalog station, with the provider-qualified stop id the
/// engine would send.
pub(crate) fn station_place(id: &str, catalog: &NetworkCatalog) -> Place {
    let station = catalog.station(id).expect("fixture station");
    Place {
        name: Some(station.name.clone()),
        stop_id: Some(format!("my-rail-kl_{id}")),
        lat: Some(station.lat),
        lon: Some(station.lng),
    }
}

/// A walking leg.
pub(crate) fn walk(from: Place, to: Place, duration: u64) -> Leg {
    Leg {
        mode: Mode::Walk,
        from: Some(from),
        to: Some(to),
        duration,
        start_time: None,
        end_time: None,
        route_short_name: None,
        headsign: None,
        intermediate_stops: None,
    }
}

/// A rail leg between two catalog stations.
pub(crate) fn ride(route: &str, from_id: &str, to_id: &str, catalog: &NetworkCatalog) -> Leg {
    Leg {
        mode: Mode::Rail,
        from: Some(station_place(from_id, catalog)),
        to: Some(station_place(to_id, catalog)),
        duration: 600,
        start_time: None,
        end_time: None,
        route_short_name: Some(route.to_string()),
        headsign: None,
        intermediate_stops: None,
    }
}

fn itinerary(legs: Vec<Leg>) -> Itinerary {
    Itinerary {
        start_time: None,
        end_time: None,
        duration: legs.iter().map(|l| l.duration).sum(),
        transfers: None,
        legs,
    }
}

#[test]
fn interchange_journey_renders_three_segments() {
    let catalog = sample_catalog();
    let kg15 = catalog.station("KG15").unwrap();

    // Door walk, Putrajaya-line ride, in-station transfer at Kwasa
    // Damansara, Kajang-line ride to the destination.
    let trip = itinerary(vec![
        walk(
            place(3.20570, 101.57960),
            station_place("PY05", &catalog),
            60,
        ),
        ride("PY MRT Putrajaya Line", "PY05", "PY01", &catalog),
        walk(
            station_place("PY01", &catalog),
            station_place("KG04", &catalog),
            30,
        ),
        ride("KG MRT Kajang Line", "KG04", "KG15", &catalog),
    ]);
    let destination = Location::point(kg15.lat, kg15.lng, Some("Muzium Negara".to_string()));

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 3, "door walk dropped, no arrival segment");

    // Putrajaya ride: identified line, to-header handed to the next card.
    let py = &segments[0];
    assert_eq!(py.line, Some(LineCode::Putrajaya));
    assert_eq!(py.style, SegmentStyle::Line(LineCode::Putrajaya));
    assert_eq!(py.from.as_ref().unwrap().text, "Kampung Selamat");
    assert!(py.to.is_none(), "endpoint shown once, by the interchange card");
    assert_eq!(py.interchange, Interchange::None);

    // Interchange card: labeled with the station, styled as the line
    // being transferred onto.
    let card = &segments[1];
    assert!(card.is_walking);
    assert_eq!(card.interchange.label().unwrap(), "Interchange to MRT Kajang");
    assert_eq!(card.line, Some(LineCode::Kajang));
    assert_eq!(card.style, SegmentStyle::Line(LineCode::Kajang));
    let card_from = card.from.as_ref().unwrap();
    assert_eq!(card_from.text, "Kwasa Damansara");
    // Arriving on the Putrajaya line: the badge is the PY id.
    assert_eq!(card_from.badge.as_ref().unwrap().station_id.as_str(), "PY01");
    assert!(card.to.is_none());

    // Kajang ride: badge flips to the KG id at the same physical station,
    // and the destination header renders here (no trailing segment).
    let kg = &segments[2];
    assert_eq!(kg.line, Some(LineCode::Kajang));
    assert_eq!(
        kg.from.as_ref().unwrap().badge.as_ref().unwrap().station_id.as_str(),
        "KG04"
    );
    assert_eq!(kg.to.as_ref().unwrap().text, "Muzium Negara");
    assert!(kg.is_final);
}

#[test]
fn destination_beyond_tolerance_appends_arrival() {
    let catalog = sample_catalog();
    let kj14 = catalog.station("KJ14").unwrap();

    let trip = itinerary(vec![ride(
        "KJ LRT Kelana Jaya Line",
        "KJ12",
        "KJ14",
        &catalog,
    )]);
    let destination = Location::point(
        kj14.lat + 0.005,
        kj14.lng + 0.005,
        Some("Central Market".to_string()),
    );

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 2);

    // The ride still shows where it ends; the journey continues past it.
    let ride_seg = &segments[0];
    assert_eq!(ride_seg.to.as_ref().unwrap().text, "Pasar Seni");
    assert!(!ride_seg.is_final);

    let arrival = &segments[1];
    assert!(arrival.leg.is_none());
    assert!(arrival.is_final);
    assert_eq!(arrival.from.as_ref().unwrap().text, "Central Market");
    assert_eq!(arrival.style, SegmentStyle::Destination);
    assert!(arrival.from.as_ref().unwrap().badge.is_none());
}

#[test]
fn destination_at_last_stop_needs_no_arrival() {
    let catalog = sample_catalog();
    let kj14 = catalog.station("KJ14").unwrap();

    let trip = itinerary(vec![ride(
        "KJ LRT Kelana Jaya Line",
        "KJ12",
        "KJ14",
        &catalog,
    )]);
    let destination = Location::point(kj14.lat, kj14.lng, Some("Pasar Seni".to_string()));

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 1);

    let ride_seg = &segments[0];
    assert!(ride_seg.is_final);
    // The arrival is shown exactly once, by the leg's own to-header.
    assert_eq!(ride_seg.to.as_ref().unwrap().text, "Pasar Seni");
}

#[test]
fn filtered_last_walk_feeds_the_arrival_label() {
    let catalog = sample_catalog();
    let kj15 = catalog.station("KJ15").unwrap();

    let trip = itinerary(vec![
        ride("KJ LRT Kelana Jaya Line", "KJ12", "KJ15", &catalog),
        walk(
            station_place("KJ15", &catalog),
            place_at(kj15.lat + 0.0001, kj15.lng, Some("Stesen Sentral exit")),
            45,
        ),
    ]);
    // The rider never named the destination.
    let destination = Location::point(kj15.lat, kj15.lng, None);

    let filtered = filter_legs(&catalog, &trip.legs);
    assert!(filtered.last_leg_was_filtered);

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 2);

    // The dropped walk still names the arrival.
    let arrival = &segments[1];
    assert_eq!(arrival.from.as_ref().unwrap().text, "Stesen Sentral exit");
    assert_eq!(arrival.line, Some(LineCode::KelanaJaya));
    assert_eq!(
        arrival.from.as_ref().unwrap().badge.as_ref().unwrap().station_id.as_str(),
        "KJ15"
    );

    // And the ride does not duplicate it.
    assert!(segments[0].to.is_none());
}

#[test]
fn same_route_rides_are_not_an_interchange() {
    let catalog = sample_catalog();
    let kj14 = catalog.station("KJ14").unwrap();

    let trip = itinerary(vec![
        ride("KJ LRT Kelana Jaya Line", "KJ12", "KJ13", &catalog),
        ride("KJ LRT Kelana Jaya Line", "KJ13", "KJ14", &catalog),
    ]);
    let destination = Location::point(kj14.lat, kj14.lng, None);

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].interchange, Interchange::None);

    // The shared stop renders once: first ride hands it to the second.
    assert!(segments[0].to.is_none());
    assert_eq!(segments[1].from.as_ref().unwrap().text, "Masjid Jamek");
}

#[test]
fn route_change_without_walk_is_a_transit_interchange() {
    let catalog = sample_catalog();
    let ag18 = catalog.station("AG18").unwrap();

    // Kelana Jaya ride to Masjid Jamek, cross-platform onto the Ampang
    // line (the two stations are the same physical place).
    let trip = itinerary(vec![
        ride("KJ LRT Kelana Jaya Line", "KJ12", "KJ13", &catalog),
        ride("AG LRT Ampang Line", "AG7", "AG18", &catalog),
    ]);
    let destination = Location::point(ag18.lat, ag18.lng, None);

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 2);

    let second = &segments[1];
    assert_eq!(second.interchange, Interchange::Transit);
    assert_eq!(second.line, Some(LineCode::Ampang));

    // Masjid Jamek renders once, badged for the line being boarded.
    assert!(segments[0].to.is_none());
    let from = second.from.as_ref().unwrap();
    assert_eq!(from.text, "Masjid Jamek");
    assert_eq!(from.badge.as_ref().unwrap().station_id.as_str(), "AG7");
    assert_eq!(from.badge.as_ref().unwrap().line, LineCode::Ampang);
}

#[test]
fn walk_between_same_route_rides_is_a_plain_walk() {
    let catalog = sample_catalog();
    let kj14 = catalog.station("KJ14").unwrap();

    let trip = itinerary(vec![
        ride("KJ LRT Kelana Jaya Line", "KJ12", "KJ13", &catalog),
        walk(
            station_place("KJ13", &catalog),
            station_place("KJ13", &catalog),
            240,
        ),
        ride("KJ LRT Kelana Jaya Line", "KJ13", "KJ14", &catalog),
    ]);
    let destination = Location::point(kj14.lat, kj14.lng, None);

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 3);

    let middle = &segments[1];
    assert!(middle.is_walking);
    assert_eq!(middle.interchange, Interchange::None);
    assert_eq!(middle.style, SegmentStyle::Walk);
    assert!(middle.line.is_none());
}

#[test]
fn empty_itinerary_degrades_to_lone_arrival() {
    let catalog = sample_catalog();
    let trip = itinerary(Vec::new());
    let destination = Location::point(3.15000, 101.71500, Some("Somewhere".to_string()));

    let segments = build_display(&catalog, &trip, &destination);
    assert_eq!(segments.len(), 1);

    let arrival = &segments[0];
    assert!(arrival.leg.is_none());
    assert!(arrival.is_final);
    assert_eq!(arrival.from.as_ref().unwrap().text, "Somewhere");
    assert_eq!(arrival.style, SegmentStyle::Destination);
}

#[test]
fn bus_leg_gets_bus_style() {
    let catalog = sample_catalog();

    let mut bus = ride("T410", "KJ14", "KJ15", &catalog);
    bus.mode = Mode::Bus;
    // Bus stops are not rail stations; strip the rail stop ids.
    if let Some(from) = bus.from.as_mut() {
        from.stop_id = Some("my-bus_1001234".to_string());
    }
    if let Some(to) = bus.to.as_mut() {
        to.stop_id = Some("my-bus_1005678".to_string());
    }

    let trip = itinerary(vec![bus]);
    let destination = Location::point(3.0, 101.0, None);

    let segments = build_display(&catalog, &trip, &destination);
    let bus_seg = &segments[0];
    assert!(bus_seg.line.is_none());
    assert_eq!(bus_seg.style, SegmentStyle::Bus);
}

#[test]
fn build_is_deterministic() {
    let catalog = sample_catalog();
    let kg15 = catalog.station("KG15").unwrap();
    let trip = itinerary(vec![
        ride("PY MRT Putrajaya Line", "PY05", "PY01", &catalog),
        walk(
            station_place("PY01", &catalog),
            station_place("KG04", &catalog),
            30,
        ),
        ride("KG MRT Kajang Line", "KG04", "KG15", &catalog),
    ]);
    let destination = Location::point(kg15.lat, kg15.lng, None);

    let first = build_display(&catalog, &trip, &destination);
    let second = build_display(&catalog, &trip, &destination);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.line, b.line);
        assert_eq!(a.interchange, b.interchange);
        assert_eq!(a.from, b.from);
        assert_eq!(a.to, b.to);
        assert_eq!(a.is_final, b.is_final);
    }
}
