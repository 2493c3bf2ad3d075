//! Caching layer for MOTIS plan responses.
//!
//! Riders flip between the itinerary list and individual route details for
//! the same origin/destination pair, and each view needs the same plan
//! response. Caching by the encoded place pair keeps that to one upstream
//! request per pair per TTL window.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::motis::{Location, MotisClient, MotisError, PlanResponse};

/// Cache key: the encoded from/to place parameters.
type PlanKey = (String, String);

/// Cached plan entry.
type PlanEntry = Arc<PlanResponse>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 256,
        }
    }
}

/// MOTIS client with plan-response caching.
///
/// Wraps a [`MotisClient`]; a cache miss fetches from the engine,
/// retrying once when the failure looks transient.
pub struct CachedMotisClient {
    client: MotisClient,
    plans: MokaCache<PlanKey, PlanEntry>,
}

impl CachedMotisClient {
    /// Create a new cached client.
    pub fn new(client: MotisClient, config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, plans }
    }

    /// Plan journeys, using the cache if possible.
    ///
    /// Departure time is "now" for every request this service makes, so
    /// the key is just the place pair; the TTL bounds staleness.
    pub async fn plan(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Arc<PlanResponse>, MotisError> {
        let key = (plan_key_part(from), plan_key_part(to));

        if let Some(cached) = self.plans.get(&key).await {
            return Ok(cached);
        }

        let plan = self.plan_with_retry(from, to).await?;
        let entry = Arc::new(plan);
        self.plans.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// One fetch, with at most one retry on a transient failure.
    async fn plan_with_retry(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<PlanResponse, MotisError> {
        match self.client.plan(from, to, None).await {
            Ok(plan) => Ok(plan),
            Err(e) if e.is_transient() => {
                tracing::warn!(error = %e, "plan request failed, retrying once");
                self.client.plan(from, to, None).await
            }
            Err(e) => Err(e),
        }
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &MotisClient {
        &self.client
    }

    /// Number of cached plan responses.
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.plans.invalidate_all();
    }
}

/// One half of the cache key, matching the wire encoding of the endpoint.
fn plan_key_part(location: &Location) -> String {
    match &location.station {
        Some(id) => id.as_str().to_string(),
        None => format!("{},{}", location.lat, location.lng),
    }
}
