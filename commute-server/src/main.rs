use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use commute_server::cache::{CacheConfig, CachedMotisClient};
use commute_server::motis::{MotisClient, MotisConfig};
use commute_server::network::NetworkCatalog;
use commute_server::web::{AppState, create_router};

/// Default location of the network reference data.
const DEFAULT_NETWORK_DATA: &str = "data/network.json";

/// Default location of the static line icon assets.
const DEFAULT_ICONS_DIR: &str = "static/icons";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the network model (fail fast if unavailable)
    let network_path =
        std::env::var("NETWORK_DATA").unwrap_or_else(|_| DEFAULT_NETWORK_DATA.to_string());
    let catalog =
        NetworkCatalog::from_json_file(&network_path).expect("Failed to load network data");
    println!(
        "Loaded {} lines, {} stations from {}",
        catalog.lines().len(),
        catalog.station_count(),
        network_path
    );

    // Create the MOTIS client
    let mut motis_config = MotisConfig::new();
    if let Ok(base_url) = std::env::var("MOTIS_BASE_URL") {
        motis_config = motis_config.with_base_url(base_url);
    }
    let motis_client = MotisClient::new(motis_config).expect("Failed to create MOTIS client");
    let cached_motis = CachedMotisClient::new(motis_client, &CacheConfig::default());

    // Build app state and router
    let state = AppState::new(cached_motis, catalog);
    let icons_dir = std::env::var("ICONS_DIR").unwrap_or_else(|_| DEFAULT_ICONS_DIR.to_string());
    let app = create_router(state, &icons_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Commute server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health             - Health check");
    println!("  GET /api/geocode        - Geocode free text");
    println!("  GET /api/lines          - List lines");
    println!("  GET /api/lines/:id      - Line stations and interchanges");
    println!("  GET /api/plan           - Itinerary summaries");
    println!("  GET /api/plan/:index    - Display segments for one itinerary");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
