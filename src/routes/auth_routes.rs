use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::controllers::login_controller::LoginController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::bearer_token;
use crate::services::SesionUsuario;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/sesion", get(sesion_actual))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = LoginController::new(&state);
    let response = controller.attempt_login(request).await?;
    Ok(Json(response))
}

/// Cerrar sesión y descartar los carritos que abrió
async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let token = bearer_token(&headers)?;
    let sesion = state
        .sesiones
        .end(&token)
        .await
        .ok_or_else(|| AppError::Unauthorized("Sesión expirada o inexistente".to_string()))?;

    let descartados = state.carritos.descartar_de(&token).await;
    info!(
        "👋 Sesión de '{}' cerrada ({} carritos descartados)",
        sesion.nombre_usuario, descartados
    );

    Ok(Json(ApiResponse::success_with_message((), "Sesión cerrada")))
}

async fn sesion_actual(sesion: SesionUsuario) -> Json<SesionUsuario> {
    Json(sesion)
}
