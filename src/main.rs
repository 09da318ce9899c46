use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;

use crate::database::AccountStore;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: AccountStore,
}

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    info!("Starting Gramin Bank API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        error!("JWT_SECRET is not set; refusing to start without a signing secret");
        std::process::exit(1);
    }
    if std::env::var("JWT_SECRET").is_err() {
        warn!("JWT_SECRET not set; using the development-only fallback secret");
    }

    // Lazy pool: the server serves its public surface even while the
    // database is unreachable, and store endpoints fail per-request.
    let pool = match database::manager::connect() {
        Ok(pool) => pool,
        Err(err) => {
            error!("Failed to set up database pool: {}", err);
            std::process::exit(1);
        }
    };

    let store = AccountStore::new(pool);
    // Bounded attempt; an unreachable database must not hold up the listener
    match tokio::time::timeout(std::time::Duration::from_secs(2), store.ensure_schema()).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!(
            "Could not prepare accounts table ({}); store requests will fail until the database is reachable",
            err
        ),
        Err(_) => warn!("Database not reachable yet; store requests will fail until it is"),
    }

    let app = app(AppState { store });

    let port = config.server.port;
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Gramin Bank API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    // Protected tier: everything behind the JWT middleware
    let protected = Router::new()
        .route("/api/dashboard", get(handlers::dashboard_get))
        .layer(axum::middleware::from_fn(middleware::jwt_auth_middleware));

    Router::new()
        // Public
        .route("/", get(handlers::welcome_get))
        .route("/api/register", post(handlers::register_post))
        .route("/api/login", post(handlers::login_post))
        .merge(protected)
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentialed CORS bound to the configured allow-list; the browser
/// frontend sends both Content-Type and Authorization headers.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::config()
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
