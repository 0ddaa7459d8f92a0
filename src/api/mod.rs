//! EcoNeighbor REST API
//!
//! HTTP delivery layer for the dashboard, built with Axum. Every endpoint
//! either reads a panel snapshot or applies one intent event and returns the
//! refreshed snapshot.
//!
//! # Endpoints
//!
//! ## Shell
//! - `GET /api/v1/session` - Current shell state
//! - `PUT /api/v1/session/tab` - Switch the visible panel
//!
//! ## Air quality
//! - `GET /api/v1/air` - Panel snapshot
//! - `PUT /api/v1/air/selection` - Select a neighborhood
//!
//! ## Resources
//! - `GET /api/v1/resources` - Panel snapshot
//! - `POST /api/v1/resources/habits/:id/toggle` - Flip a habit
//!
//! ## Waste guide
//! - `GET /api/v1/waste` - Panel snapshot under the active filters
//! - `PUT /api/v1/waste/search` - Replace the search query
//! - `PUT /api/v1/waste/filter` - Set or clear the category filter
//! - `POST /api/v1/waste/items/:id/inspect` - Open an item's detail view
//! - `DELETE /api/v1/waste/selection` - Close the detail view
//! - `POST /api/v1/waste/rewards/:id/claim` - Attempt a reward claim
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /api/v1/ws` - Change-notification connection
//!
//! # Example
//!
//! ```rust,ignore
//! use econeighbor::api::{serve, ApiConfig, AppState};
//! use econeighbor::dashboard::DashboardEngine;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = Arc::new(DashboardEngine::new());
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(engine, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

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

use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Shell routes
        .route("/session", get(routes::session::get_session))
        .route("/session/tab", put(routes::session::set_tab))
        // Air quality routes
        .route("/air", get(routes::air::get_air))
        .route("/air/selection", put(routes::air::select_neighborhood))
        // Resource routes
        .route("/resources", get(routes::resources::get_resources))
        .route(
            "/resources/habits/:id/toggle",
            post(routes::resources::toggle_habit),
        )
        // Waste guide routes
        .route("/waste", get(routes::waste::get_waste))
        .route("/waste/search", put(routes::waste::set_search))
        .route("/waste/filter", put(routes::waste::set_filter))
        .route("/waste/items/:id/inspect", post(routes::waste::inspect_item))
        .route("/waste/selection", delete(routes::waste::clear_selection))
        .route("/waste/rewards/:id/claim", post(routes::waste::claim_reward))
        // WebSocket route
        .route("/ws", get(websocket_handler));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("EcoNeighbor API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("EcoNeighbor API shut down gracefully");
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardEngine;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<DashboardEngine>) {
        let engine = Arc::new(DashboardEngine::new());
        let state = AppState::new(Arc::clone(&engine), ApiConfig::default());
        (build_router(state), engine)
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_panel_snapshots() {
        let (app, _) = create_test_app();

        for uri in ["/api/v1/session", "/api/v1/air", "/api/v1/resources", "/api/v1/waste"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {} failed", uri);
        }
    }

    #[tokio::test]
    async fn test_set_tab() {
        let (app, engine) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/session/tab")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"tab": "waste"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            engine.session_snapshot().await.active_tab,
            crate::dashboard::Tab::Waste
        );
    }

    #[tokio::test]
    async fn test_set_invalid_tab() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/session/tab")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"tab": "news"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_select_neighborhood() {
        let (app, engine) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/air/selection")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"id": 4}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let snapshot = engine.air_snapshot().await;
        assert_eq!(snapshot.selected.unwrap().name, "Green Park");
    }

    #[tokio::test]
    async fn test_select_unknown_neighborhood() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/air/selection")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"id": 99}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_toggle_habit() {
        let (app, engine) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/resources/habits/7/toggle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(engine.resources_snapshot().await.completed_count, 1);
    }

    #[tokio::test]
    async fn test_toggle_unknown_habit() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/resources/habits/42/toggle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_waste_search_and_filter() {
        let (app, engine) = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/waste/search")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"query": "cans"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/waste/filter")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"category": "recyclable"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let snapshot = engine.waste_snapshot().await;
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].name, "Aluminum Cans");
    }

    #[tokio::test]
    async fn test_waste_invalid_category() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/waste/filter")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"category": "nuclear"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_inspect_and_clear() {
        let (app, engine) = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/waste/items/10/inspect")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(engine.waste_snapshot().await.points, 177);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/waste/selection")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(engine.waste_snapshot().await.selected.is_none());
    }

    #[tokio::test]
    async fn test_claim_reward() {
        let (app, engine) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/waste/rewards/2/claim")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(engine.waste_snapshot().await.rewards_claimed, 2);
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/session/tab")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
