pub mod admin_routes;
pub mod auth_routes;
pub mod factura_routes;
pub mod mesa_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Router completo de la API
pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config);

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/menu", mesa_routes::create_menu_router())
        .nest("/api/mesas", mesa_routes::create_mesa_router())
        .nest("/api/pedidos", factura_routes::create_factura_router())
        .nest("/api/admin", admin_routes::create_admin_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "sifood-pos",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
