//! MOTIS HTTP client.
//!
//! Provides async methods for planning journeys and geocoding free text
//! against a MOTIS instance.

use chrono::{DateTime, FixedOffset};

use super::error::MotisError;
use super::types::{GeocodeMatch, Location, PlanResponse};

/// Default MOTIS instance.
const DEFAULT_BASE_URL: &str = "https://api.transitous.org";

/// Provider prefix qualifying our station ids in MOTIS stop ids.
///
/// A catalog station `KJ14` appears on the wire as `my-rail-kl_KJ14`.
pub const STOP_ID_PREFIX: &str = "my-rail-kl";

/// Transit modes requested from the engine.
const TRANSIT_MODES: &str = "WALK,BUS,RAIL";

/// Configuration for the MOTIS client.
#[derive(Debug, Clone)]
pub struct MotisConfig {
    /// Base URL of the MOTIS instance.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl MotisConfig {
    /// Create a config pointing at the default public instance.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or self-hosted instances).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MotisConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// MOTIS API client.
#[derive(Debug, Clone)]
pub struct MotisClient {
    http: reqwest::Client,
    base_url: String,
}

impl MotisClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MotisConfig) -> Result<Self, MotisError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Plan journeys between two locations.
    ///
    /// Station-anchored locations are sent by stop id so the engine snaps
    /// to the platform; free locations are sent as `lat,lng`. The query
    /// parameters are fixed to what the product needs: walking, bus and
    /// rail only, no interlined-leg joining, and a 250 m matching radius.
    pub async fn plan(
        &self,
        from: &Location,
        to: &Location,
        depart_at: Option<DateTime<FixedOffset>>,
    ) -> Result<PlanResponse, MotisError> {
        let url = format!("{}/api/v3/plan", self.base_url);

        let mut query = vec![
            ("fromPlace", place_param(from)),
            ("toPlace", place_param(to)),
            ("arriveBy", "false".to_string()),
            ("detailedTransfers", "false".to_string()),
            ("transitModes", TRANSIT_MODES.to_string()),
            ("fastestDirectFactor", "1.5".to_string()),
            ("joinInterlinedLegs", "false".to_string()),
            ("maxMatchingDistance", "250".to_string()),
        ];
        if let Some(time) = depart_at {
            query.push(("time", time.to_rfc3339()));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MotisError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MotisError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MotisError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Geocode a free-text query to candidate locations.
    ///
    /// Queries shorter than two characters return an empty list without
    /// touching the network.
    pub async fn geocode(&self, text: &str) -> Result<Vec<GeocodeMatch>, MotisError> {
        let text = text.trim();
        if text.len() < 2 {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/v1/geocode", self.base_url);

        let response = self.http.get(&url).query(&[("text", text)]).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MotisError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MotisError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MotisError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

/// Encode a location as a MOTIS place parameter.
fn place_param(location: &Location) -> String {
    match &location.station {
        Some(id) => format!("{STOP_ID_PREFIX}_{id}"),
        None => format!("{},{}", location.lat, location.lng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::StationId;

    #[test]
    fn config_defaults() {
        let config = MotisConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = MotisConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        assert!(MotisClient::new(MotisConfig::new()).is_ok());
    }

    #[test]
    fn station_place_param_is_prefixed() {
        let location = Location::station(
            StationId::parse("KJ14").unwrap(),
            3.14966,
            101.69624,
            "Masjid Jamek",
        );
        assert_eq!(place_param(&location), "my-rail-kl_KJ14");
    }

    #[test]
    fn point_place_param_is_coordinates() {
        let location = Location::point(3.139, 101.686, None);
        assert_eq!(place_param(&location), "3.139,101.686");
    }

    #[tokio::test]
    async fn short_geocode_query_short_circuits() {
        let client = MotisClient::new(MotisConfig::new()).unwrap();
        assert!(client.geocode("").await.unwrap().is_empty());
        assert!(client.geocode(" k ").await.unwrap().is_empty());
    }

    // Integration tests against a live MOTIS instance would make real HTTP
    // requests; the canned-response path is covered by the mock client.
}
