//! MOTIS routing engine client.
//!
//! This module provides an HTTP client for the MOTIS journey planning API
//! (as hosted by transitous.org), which computes raw itineraries and
//! geocodes free-text queries.
//!
//! Key characteristics of MOTIS:
//! - Itineraries arrive as ordered legs with ISO-8601 timestamps and
//!   durations in whole seconds
//! - Leg endpoints carry a provider-qualified `stopId`
//!   (`my-rail-kl_<station id>`) when they are known stops
//! - The raw leg sequence contains artifacts a rider should never see
//!   (zero-length station walks, duplicated connectors); normalization is
//!   the [`crate::display`] module's job, not this client's

mod client;
mod error;
mod mock;
mod types;

pub use client::{MotisClient, MotisConfig, STOP_ID_PREFIX};
pub use error::MotisError;
pub use mock::MockMotisClient;
pub use types::{GeocodeMatch, Itinerary, Leg, Location, Mode, Place, PlanResponse};
