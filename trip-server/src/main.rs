use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trip_server::maps::{MapsClient, MapsConfig};
use trip_server::trip::TripOrchestrator;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("MAPS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: MAPS_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create the maps client; it backs all three capability contracts.
    let maps_config = MapsConfig::new(&api_key);
    let maps_client = Arc::new(MapsClient::new(maps_config).expect("Failed to create maps client"));

    // Build the orchestrator and app state
    let orchestrator = TripOrchestrator::new(
        maps_client.clone(),
        maps_client.clone(),
        maps_client,
    );
    let state = AppState::new(orchestrator);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trip Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health       - Health check");
    println!("  POST /trip/plan    - Submit a trip");
    println!("  GET  /trip/status  - Poll pipeline status");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
