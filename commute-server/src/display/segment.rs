//! Display segment types.
//!
//! One `DisplaySegment` is one rider-facing instruction step, ready for a
//! rendering layer to turn into a card: icon and color, optional from/to
//! headers with station badges, and the interchange relationship to its
//! neighbors.

use chrono::{DateTime, FixedOffset};

use crate::motis::Leg;
use crate::network::{
    BUS_COLOR, DESTINATION_FALLBACK_COLOR, LineCode, RAIL_FALLBACK_COLOR, StationId, WALK_COLOR,
};

/// How a segment relates to the legs around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interchange {
    /// Not an interchange.
    None,

    /// A walk connecting two different rides; rendered as an interchange
    /// card ("Interchange to MRT Kajang") instead of a walking step.
    Walking {
        /// The line being transferred onto, when identified.
        line: Option<LineCode>,
        /// Fallback label when the line is unknown: where the next ride
        /// is headed.
        destination_name: Option<String>,
    },

    /// A ride directly following a ride on a different route, with no walk
    /// between (cross-platform transfer).
    Transit,
}

impl Interchange {
    /// True for either interchange flavor.
    pub fn is_interchange(&self) -> bool {
        !matches!(self, Interchange::None)
    }

    /// Rider-facing label for the interchange card, when applicable.
    pub fn label(&self) -> Option<String> {
        match self {
            Interchange::Walking {
                line: Some(line), ..
            } => Some(format!("Interchange to {}", line.display_name())),
            Interchange::Walking {
                line: None,
                destination_name: Some(name),
            } => Some(format!("Interchange to {name}")),
            Interchange::Walking {
                line: None,
                destination_name: None,
            } => Some("Interchange".to_string()),
            _ => None,
        }
    }
}

/// The station badge shown beside a station name: the station code on the
/// line actually being ridden, e.g. `PY01` rather than `KG04` at a shared
/// physical station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationBadge {
    /// Sibling-resolved station id.
    pub station_id: StationId,

    /// The line owning that id; supplies the badge color.
    pub line: LineCode,
}

/// One rendered endpoint header: place name, optional badge, timestamp.
///
/// A hidden header is simply absent from the segment — there is no
/// "present but not shown" state.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointLabel {
    pub text: String,

    pub badge: Option<StationBadge>,

    pub time: Option<DateTime<FixedOffset>>,
}

/// Visual identity of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    /// An identified line: brand color and line icon.
    Line(LineCode),

    /// A plain walk: neutral gray, on-foot glyph.
    Walk,

    /// A bus ride: accent color, bus glyph.
    Bus,

    /// A rail ride on no identifiable line: default blue, generic glyph.
    Rail,

    /// The synthetic arrival marker when the destination is not a known
    /// station.
    Destination,
}

impl SegmentStyle {
    /// Background color for the segment's icon.
    pub fn color(self) -> &'static str {
        match self {
            SegmentStyle::Line(code) => code.color(),
            SegmentStyle::Walk => WALK_COLOR,
            SegmentStyle::Bus => BUS_COLOR,
            SegmentStyle::Rail => RAIL_FALLBACK_COLOR,
            SegmentStyle::Destination => DESTINATION_FALLBACK_COLOR,
        }
    }

    /// Line icon asset, when the segment has one. Mode-based glyphs
    /// (footprints, bus) are the renderer's concern.
    pub fn icon_path(self) -> Option<&'static str> {
        match self {
            SegmentStyle::Line(code) => Some(code.icon_path()),
            _ => None,
        }
    }
}

/// One rider-facing instruction step.
#[derive(Debug, Clone)]
pub struct DisplaySegment<'a> {
    /// The leg this segment renders; `None` for the synthetic arrival
    /// appended after the last leg.
    pub leg: Option<&'a Leg>,

    /// True for walking legs (plain walks and walking interchanges).
    pub is_walking: bool,

    /// Relationship to neighboring segments.
    pub interchange: Interchange,

    /// The line this segment rides, when identified.
    pub line: Option<LineCode>,

    /// Icon and color resolution.
    pub style: SegmentStyle,

    /// The "from" header; absent when the previous segment already showed
    /// this place.
    pub from: Option<EndpointLabel>,

    /// The "to" header; absent when the next segment (or the arrival)
    /// shows this place instead.
    pub to: Option<EndpointLabel>,

    /// True on the segment that carries the journey's end.
    pub is_final: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interchange_labels() {
        let ix = Interchange::Walking {
            line: Some(LineCode::Kajang),
            destination_name: Some("Kajang".to_string()),
        };
        assert_eq!(ix.label().unwrap(), "Interchange to MRT Kajang");

        let ix = Interchange::Walking {
            line: None,
            destination_name: Some("Ampang".to_string()),
        };
        assert_eq!(ix.label().unwrap(), "Interchange to Ampang");

        let ix = Interchange::Walking {
            line: None,
            destination_name: None,
        };
        assert_eq!(ix.label().unwrap(), "Interchange");

        assert!(Interchange::None.label().is_none());
        assert!(Interchange::Transit.label().is_none());
    }

    #[test]
    fn interchange_predicate() {
        assert!(!Interchange::None.is_interchange());
        assert!(Interchange::Transit.is_interchange());
        assert!(
            Interchange::Walking {
                line: None,
                destination_name: None
            }
            .is_interchange()
        );
    }

    #[test]
    fn style_colors() {
        assert_eq!(SegmentStyle::Line(LineCode::Kajang).color(), "#008640");
        assert_eq!(SegmentStyle::Walk.color(), "#6B7280");
        assert_eq!(SegmentStyle::Bus.color(), "#10b981");
        assert_eq!(SegmentStyle::Rail.color(), "#5995d8");
        assert_eq!(SegmentStyle::Destination.color(), "#60A5FA");
    }

    #[test]
    fn only_lines_have_icons() {
        assert!(SegmentStyle::Line(LineCode::Monorail).icon_path().is_some());
        assert!(SegmentStyle::Walk.icon_path().is_none());
        assert!(SegmentStyle::Bus.icon_path().is_none());
        assert!(SegmentStyle::Rail.icon_path().is_none());
    }
}
