//! The network catalog: every line and station, with lookups.

use std::collections::HashMap;
use std::path::Path;

use super::COORD_EPSILON;
use super::line::{Line, LineCode};
use super::station::Station;

/// Error while building or loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read network data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse network data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate line code: {0}")]
    DuplicateLine(LineCode),

    #[error("duplicate station id: {0}")]
    DuplicateStation(String),
}

/// Immutable collection of lines and their stations.
///
/// The catalog owns every `Station` exactly once (through its line) and
/// indexes them by id for O(1) lookup. Iteration order over stations is
/// line declaration order, then station order within the line; coordinate
/// and name scans return the first match in that order.
#[derive(Debug, Clone)]
pub struct NetworkCatalog {
    lines: Vec<Line>,
    /// Station id → (line index, station index within the line).
    station_index: HashMap<super::StationId, (usize, usize)>,
}

impl NetworkCatalog {
    /// Build a catalog from lines, indexing every station.
    ///
    /// # Errors
    ///
    /// Returns `Err` on a repeated line code or a station id that appears
    /// in more than one line's station list.
    pub fn new(lines: Vec<Line>) -> Result<Self, CatalogError> {
        let mut station_index = HashMap::new();
        let mut seen_lines = Vec::with_capacity(lines.len());

        for (line_idx, line) in lines.iter().enumerate() {
            if seen_lines.contains(&line.id) {
                return Err(CatalogError::DuplicateLine(line.id));
            }
            seen_lines.push(line.id);

            for (station_idx, station) in line.stations.iter().enumerate() {
                if station_index
                    .insert(station.id.clone(), (line_idx, station_idx))
                    .is_some()
                {
                    return Err(CatalogError::DuplicateStation(
                        station.id.as_str().to_string(),
                    ));
                }
            }
        }

        Ok(NetworkCatalog {
            lines,
            station_index,
        })
    }

    /// Parse a catalog from its JSON form (an array of lines).
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let lines: Vec<Line> = serde_json::from_str(json)?;
        Self::new(lines)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All lines, in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a line by code.
    pub fn line(&self, code: LineCode) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == code)
    }

    /// Look up a station by id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        let &(line_idx, station_idx) = self.station_index.get(id)?;
        Some(&self.lines[line_idx].stations[station_idx])
    }

    /// The line that owns a station id.
    pub fn line_of(&self, id: &str) -> Option<&Line> {
        let &(line_idx, _) = self.station_index.get(id)?;
        Some(&self.lines[line_idx])
    }

    /// All stations in catalog iteration order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.lines.iter().flat_map(|l| l.stations.iter())
    }

    /// Total number of stations.
    pub fn station_count(&self) -> usize {
        self.station_index.len()
    }

    /// First station within coordinate tolerance of the given point.
    ///
    /// The tolerance is strict on both axes: a difference of exactly
    /// [`COORD_EPSILON`] does not match.
    pub fn find_by_coords(&self, lat: f64, lng: f64) -> Option<&Station> {
        self.stations().find(|s| {
            (s.lat - lat).abs() < COORD_EPSILON && (s.lng - lng).abs() < COORD_EPSILON
        })
    }

    /// First station whose name equals `name` case-insensitively.
    ///
    /// Exact equality only, never a substring match.
    pub fn find_by_name(&self, name: &str) -> Option<&Station> {
        self.stations().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}
