//! HabitFlow REST API
//!
//! HTTP API layer for HabitFlow, built with Axum.
//!
//! # Endpoints
//!
//! ## Habits
//! - `GET /api/v1/habits` - List habits with current streaks
//! - `POST /api/v1/habits` - Create a habit
//! - `PUT /api/v1/habits/:id` - Update habit metadata
//! - `DELETE /api/v1/habits/:id` - Delete a habit
//! - `POST /api/v1/habits/:id/toggle` - Toggle one completion date
//!
//! ## Sleep
//! - `GET /api/v1/sleep` - Full sleep log
//! - `PUT /api/v1/sleep/:date` - Save one night
//! - `GET /api/v1/sleep/series` - Per-day hours for a month
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - Summary cards
//! - `GET /api/v1/dashboard/monthly-rates` - Six-month rate series
//! - `GET /api/v1/dashboard/categories` - Category distribution
//! - `GET /api/v1/dashboard/comparison` - Rolling 30-vs-30 ranking
//! - `GET /api/v1/dashboard/achievements` - Milestones in fixed order
//!
//! ## Month view
//! - `GET /api/v1/months/:year/:month` - Grid, progress, comparison, sleep
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Habit routes
        .route("/habits", get(routes::habits::list_habits))
        .route("/habits", post(routes::habits::create_habit))
        .route("/habits/:id", put(routes::habits::update_habit))
        .route("/habits/:id", delete(routes::habits::delete_habit))
        .route("/habits/:id/toggle", post(routes::habits::toggle_completion))
        // Sleep routes
        .route("/sleep", get(routes::sleep::get_sleep_log))
        .route("/sleep/series", get(routes::sleep::sleep_series))
        .route("/sleep/:date", put(routes::sleep::save_sleep_entry))
        // Dashboard routes
        .route("/dashboard", get(routes::stats::dashboard_summary))
        .route("/dashboard/monthly-rates", get(routes::stats::monthly_rates))
        .route("/dashboard/categories", get(routes::stats::categories))
        .route("/dashboard/comparison", get(routes::stats::rolling_comparison))
        .route("/dashboard/achievements", get(routes::stats::achievement_list))
        // Month view
        .route("/months/:year/:month", get(routes::stats::month_view));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Serve the API until a shutdown signal arrives
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HabitFlow API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("HabitFlow API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
