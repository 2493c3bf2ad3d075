//! Line brand colors and icon assets.
//!
//! Colors are the operator's published line colors; icon paths point at the
//! static assets served under `/icons`.

use super::line::LineCode;

/// Neutral gray used for plain walking segments.
pub const WALK_COLOR: &str = "#6B7280";

/// Accent color for bus segments.
pub const BUS_COLOR: &str = "#10b981";

/// Default blue for rail segments whose line could not be identified.
pub const RAIL_FALLBACK_COLOR: &str = "#5995d8";

/// Color for a final destination that is not a known station.
pub const DESTINATION_FALLBACK_COLOR: &str = "#60A5FA";

/// Marker icon for interchange stations.
pub const INTERCHANGE_STATION_ICON: &str = "/icons/rapidkl/icon_interchange-station.png";

/// Marker icon for connecting stations.
pub const CONNECTING_STATION_ICON: &str = "/icons/rapidkl/icon_connecting-station.png";

impl LineCode {
    /// The line's brand color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            LineCode::Ampang => "#FF8E10",
            LineCode::SriPetaling => "#8D0C06",
            LineCode::KelanaJaya => "#ED0F4C",
            LineCode::Monorail => "#81BC00",
            LineCode::Kajang => "#008640",
            LineCode::Putrajaya => "#FBCD20",
        }
    }

    /// Path to the line's icon asset.
    pub fn icon_path(self) -> &'static str {
        match self {
            LineCode::Ampang => "/icons/rapidkl/icon_line_ampang.png",
            LineCode::SriPetaling => "/icons/rapidkl/icon_line_sri-petaling.png",
            LineCode::KelanaJaya => "/icons/rapidkl/icon_line_kelana-jaya.png",
            LineCode::Monorail => "/icons/rapidkl/icon_line_kl-monorail.png",
            LineCode::Kajang => "/icons/rapidkl/icon_line_kajang-01.png",
            LineCode::Putrajaya => "/icons/rapidkl/icon_line_putrajaya-01.png",
        }
    }
}
