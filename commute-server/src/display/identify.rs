//! Line identification.
//!
//! Resolves the line a leg is riding from what the engine gives us: a stop
//! id (reliable, names the line in its prefix) or a published route name
//! (free text, classified heuristically).

use crate::network::LineCode;

use super::matcher::extract_station_code;

/// Route-name keywords per line, tested in [`LineCode::ALL`] order.
const ROUTE_KEYWORDS: [(LineCode, &str); 6] = [
    (LineCode::Ampang, "AMPANG"),
    (LineCode::SriPetaling, "SRI PETALING"),
    (LineCode::KelanaJaya, "KELANA"),
    (LineCode::Monorail, "MONORAIL"),
    (LineCode::Kajang, "KAJANG"),
    (LineCode::Putrajaya, "PUTRAJAYA"),
];

/// Resolve a leg's line from its route name and/or a stop id.
///
/// The stop id wins when its local code carries a known line prefix — it
/// names the line explicitly. Otherwise the route name is classified with
/// [`match_route_name`]. `None` means "not one of our six lines"; callers
/// fall back to a generic style keyed by transport mode.
///
/// # Examples
///
/// ```
/// use commute_server::display::identify_line;
/// use commute_server::network::LineCode;
///
/// assert_eq!(
///     identify_line(None, Some("my-rail-kl_PY01")),
///     Some(LineCode::Putrajaya)
/// );
/// assert_eq!(
///     identify_line(Some("KJ LRT Kelana Jaya Line"), None),
///     Some(LineCode::KelanaJaya)
/// );
/// assert_eq!(identify_line(Some("T410"), None), None);
/// ```
pub fn identify_line(route_short_name: Option<&str>, stop_id: Option<&str>) -> Option<LineCode> {
    if let Some(code) = stop_id
        .and_then(extract_station_code)
        .and_then(alpha_prefix)
        .and_then(|prefix| LineCode::parse(prefix).ok())
    {
        return Some(code);
    }

    route_short_name.and_then(match_route_name)
}

/// Classify a route name to a line by substring.
///
/// The name is uppercased and tested against each line's two-letter code
/// and long-form keyword, in declared order; the first hit wins. This is a
/// best-effort classifier, not a parser: a route name that happens to
/// contain a two-letter code matches it. Callers that need stricter
/// matching should swap this function out rather than change its behavior.
pub fn match_route_name(route_short_name: &str) -> Option<LineCode> {
    let upper = route_short_name.to_uppercase();
    ROUTE_KEYWORDS
        .iter()
        .find(|(code, keyword)| upper.contains(code.as_str()) || upper.contains(keyword))
        .map(|(code, _)| *code)
}

/// Leading run of uppercase ASCII letters, or `None` if the string does
/// not start with one.
fn alpha_prefix(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(s.len());
    if end > 0 { Some(&s[..end]) } else { None }
}
