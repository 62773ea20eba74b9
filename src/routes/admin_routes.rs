use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{
    ActualizarStockRequest, EmpleadosResponse, IngredientesResponse, MeseroDelPeriodoResponse,
    PlatosMasVendidosResponse, RegistrarEmpleadoRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::AdminSession;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/empleados", get(listar_empleados).post(registrar_empleado))
        .route("/ingredientes", get(listar_ingredientes))
        .route("/ingredientes/stock", put(actualizar_stock))
        .route("/reportes/platos-mas-vendidos", get(platos_mas_vendidos))
        .route("/reportes/mesero-del-periodo", get(mesero_del_periodo))
}

async fn listar_empleados(
    State(state): State<AppState>,
    _sesion: AdminSession,
) -> Result<Json<EmpleadosResponse>, AppError> {
    let response = AdminController::new(&state).empleados().await?;
    Ok(Json(response))
}

async fn registrar_empleado(
    State(state): State<AppState>,
    _sesion: AdminSession,
    Json(request): Json<RegistrarEmpleadoRequest>,
) -> Result<Json<ApiResponse<EmpleadosResponse>>, AppError> {
    let response = AdminController::new(&state).registrar_empleado(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "¡Empleado registrado con éxito!",
    )))
}

async fn listar_ingredientes(
    State(state): State<AppState>,
    _sesion: AdminSession,
) -> Result<Json<IngredientesResponse>, AppError> {
    let response = AdminController::new(&state).ingredientes().await?;
    Ok(Json(response))
}

async fn actualizar_stock(
    State(state): State<AppState>,
    _sesion: AdminSession,
    Json(request): Json<ActualizarStockRequest>,
) -> Result<Json<ApiResponse<IngredientesResponse>>, AppError> {
    let response = AdminController::new(&state).actualizar_stock(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "¡Stock actualizado con éxito!",
    )))
}

async fn platos_mas_vendidos(
    State(state): State<AppState>,
    _sesion: AdminSession,
) -> Result<Json<PlatosMasVendidosResponse>, AppError> {
    let response = AdminController::new(&state).platos_mas_vendidos().await?;
    Ok(Json(response))
}

async fn mesero_del_periodo(
    State(state): State<AppState>,
    _sesion: AdminSession,
) -> Result<Json<MeseroDelPeriodoResponse>, AppError> {
    let response = AdminController::new(&state).mesero_del_periodo().await?;
    Ok(Json(response))
}
