//! Antipode Service - HTTP microservice for antipodal point lookups.
//!
//! Computes the diametrically opposite point on Earth for a coordinate and
//! describes notable places near both points, sourced from the Wikipedia
//! geosearch API.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ANTIPODE_PORT` | HTTP server port | 5000 |
//! | `ANTIPODE_API_ENDPOINT` | Knowledge-source API endpoint | en.wikipedia.org/w/api.php |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /api/antipode?lat=X&lon=Y` - Antipode with nearby places for both points
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use antipode::PlaceLookupClient;
use antipode_service::{handlers, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the antipode service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Antipode Service",
        version = "0.1.0",
        description = "Computes the antipodal point for a coordinate and describes notable places near both points.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(handlers::get_antipode, handlers::health_check),
    components(
        schemas(
            handlers::AntipodeResponse,
            handlers::SidePayload,
            handlers::ErrorResponse,
            handlers::HealthResponse,
            antipode::PlaceSummary,
            antipode::Coordinate,
        )
    ),
    tags(
        (name = "antipode", description = "Antipode query endpoint"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "antipode_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("ANTIPODE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    // Optional endpoint override, mainly for staging against a MediaWiki
    // mirror; the default is the English Wikipedia API.
    let lookup = match std::env::var("ANTIPODE_API_ENDPOINT") {
        Ok(endpoint) => {
            tracing::info!(endpoint = %endpoint, "Using custom knowledge-source endpoint");
            PlaceLookupClient::with_endpoint(endpoint)
        }
        Err(_) => PlaceLookupClient::new(),
    };

    tracing::info!(port = port, "Starting antipode service");

    let state = Arc::new(AppState { lookup });

    // Build router: shared routes plus docs and middleware
    let app = antipode_service::router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
