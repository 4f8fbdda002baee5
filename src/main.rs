use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod state;
mod upload;

use db::Stores;
use state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up MONGO_URL, ADMIN_API_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("starting invest-admin-api in {:?} mode", config.environment);

    // Connection is lazy; an unreachable store shows up per-request, not here
    let stores = Stores::connect(&config.store)
        .await
        .unwrap_or_else(|e| panic!("invalid store configuration: {}", e));

    let app = app(AppState::new(stores));

    let bind_addr = format!("0.0.0.0:{}", config.http.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("invest-admin-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/health", get(health))
        .merge(api_routes())
        .merge(page_routes())
        // Uploaded news images and other public assets
        .nest_service("/public", ServeDir::new(&config::config().http.public_dir))
        // News images can exceed axum's default 2MB body cap
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(session_layer())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    use handlers::{auth, links, news, payments, users};

    Router::new()
        // Session lifecycle
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/fetchUser", get(auth::fetch_user))
        // Subscriptions
        .route("/allusers", get(users::allusers))
        // Community links
        .route("/fetchLinks", get(links::fetch_links))
        .route("/editLinks", post(links::edit_links))
        // News
        .route("/addNews", post(news::add_news))
        .route("/getNews", get(news::get_news))
        .route("/deleteNews/:news_id", delete(news::delete_news))
        // Payments
        .route("/payments/status", get(payments::payments_by_status))
        .route("/investments/:invest_id", get(payments::investment_show))
        .route("/investmentControl/:invest_id", put(payments::investment_control))
}

fn page_routes() -> Router<AppState> {
    use handlers::pages;

    Router::new()
        .route("/dashboard", get(pages::dashboard))
        .route("/add-news", get(pages::add_news))
        .route("/delete-news", get(pages::delete_news))
        .route("/edit-links", get(pages::edit_links))
        .route("/users", get(pages::users))
        .route("/pending-payment", get(pages::pending_payment))
        // The misspelled path is part of the public contract
        .route("/ressolved-payment", get(pages::resolved_payment))
}

fn session_layer() -> SessionManagerLayer<MemoryStore> {
    let config = config::config();

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.session.cookie_name.clone())
        // One browser session, gone on close
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(config.environment == config::Environment::Production)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.stores.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::Json(json!({
                "status": true,
                "timestamp": now,
                "store": "ok",
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::Json(json!({
                "status": false,
                "timestamp": now,
                "store": "unreachable",
                "detail": e.to_string(),
            })),
        ),
    }
}
