//! Mock MOTIS client for testing without API access.
//!
//! Serves a canned plan response loaded from a JSON file as if it were a
//! live engine answer.

use std::path::Path;

use chrono::{DateTime, FixedOffset};

use super::error::MotisError;
use super::types::{GeocodeMatch, Location, PlanResponse};

/// Mock MOTIS client that serves a pre-loaded plan response.
///
/// Useful for development and tests without network access. Every `plan`
/// call returns the same canned response regardless of the endpoints.
#[derive(Debug, Clone)]
pub struct MockMotisClient {
    plan: PlanResponse,
}

impl MockMotisClient {
    /// Create a mock client from a plan response JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MotisError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| MotisError::ApiError {
            status: 0,
            message: format!("Failed to read mock plan {:?}: {}", path, e),
        })?;

        let plan: PlanResponse = serde_json::from_str(&json).map_err(|e| MotisError::Json {
            message: format!("Failed to parse mock plan {:?}: {}", path, e),
            body: None,
        })?;

        Ok(Self { plan })
    }

    /// Create a mock client from an already-parsed response.
    pub fn from_response(plan: PlanResponse) -> Self {
        Self { plan }
    }

    /// Plan journeys. Mimics `MotisClient::plan`; endpoints and departure
    /// time are ignored, the canned response is returned as-is.
    pub async fn plan(
        &self,
        _from: &Location,
        _to: &Location,
        _depart_at: Option<DateTime<FixedOffset>>,
    ) -> Result<PlanResponse, MotisError> {
        Ok(self.plan.clone())
    }

    /// Geocode free text. The mock has no geocoder; it returns no matches.
    pub async fn geocode(&self, _text: &str) -> Result<Vec<GeocodeMatch>, MotisError> {
        Ok(Vec::new())
    }
}
