use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::mesa_controller::MesaController;
use crate::controllers::pedido_controller::PedidoController;
use crate::dto::mesa_dto::{
    AbrirMesaResponse, AccionMesaResponse, FacturarRequest, FacturarResponse, TableroResponse,
};
use crate::dto::pedido_dto::{AgregarItemRequest, CarritoResponse, MenuResponse, PedidoConfirmadoResponse};
use crate::middleware::MeseroSession;
use crate::services::SesionUsuario;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mesa_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tablero))
        .route("/:id", get(accion_mesa))
        .route("/:id/abrir", post(abrir_mesa))
        .route("/:id/factura", post(facturar_mesa))
        .route(
            "/:id/carrito",
            get(ver_carrito).post(agregar_item).delete(vaciar_carrito),
        )
        .route("/:id/pedido", post(enviar_pedido))
}

pub fn create_menu_router() -> Router<AppState> {
    Router::new().route("/", get(menu))
}

async fn tablero(
    State(state): State<AppState>,
    _sesion: MeseroSession,
) -> Result<Json<TableroResponse>, AppError> {
    let tablero = MesaController::new(&state).refresh().await?;
    Ok(Json(TableroResponse { mesas: tablero.vistas() }))
}

async fn accion_mesa(
    State(state): State<AppState>,
    _sesion: MeseroSession,
    Path(mesa_id): Path<i32>,
) -> Result<Json<AccionMesaResponse>, AppError> {
    let response = MesaController::new(&state).accion(mesa_id).await?;
    Ok(Json(response))
}

async fn abrir_mesa(
    State(state): State<AppState>,
    MeseroSession(sesion): MeseroSession,
    Path(mesa_id): Path<i32>,
) -> Result<Json<AbrirMesaResponse>, AppError> {
    let response = MesaController::new(&state).abrir(mesa_id, &sesion).await?;
    Ok(Json(response))
}

async fn facturar_mesa(
    State(state): State<AppState>,
    _sesion: MeseroSession,
    Path(mesa_id): Path<i32>,
    Json(request): Json<FacturarRequest>,
) -> Result<Json<FacturarResponse>, AppError> {
    let response = MesaController::new(&state).facturar(mesa_id, request).await?;
    Ok(Json(response))
}

async fn menu(
    State(state): State<AppState>,
    _sesion: SesionUsuario,
) -> Result<Json<MenuResponse>, AppError> {
    let platos = PedidoController::new(&state).menu().await?;
    Ok(Json(MenuResponse { platos }))
}

async fn ver_carrito(
    State(state): State<AppState>,
    _sesion: MeseroSession,
    Path(mesa_id): Path<i32>,
) -> Result<Json<CarritoResponse>, AppError> {
    let response = PedidoController::new(&state).carrito(mesa_id).await?;
    Ok(Json(response))
}

async fn agregar_item(
    State(state): State<AppState>,
    _sesion: MeseroSession,
    Path(mesa_id): Path<i32>,
    Json(request): Json<AgregarItemRequest>,
) -> Result<Json<CarritoResponse>, AppError> {
    let response = PedidoController::new(&state).agregar(mesa_id, request).await?;
    Ok(Json(response))
}

async fn vaciar_carrito(
    State(state): State<AppState>,
    _sesion: MeseroSession,
    Path(mesa_id): Path<i32>,
) -> Result<Json<CarritoResponse>, AppError> {
    let response = PedidoController::new(&state).vaciar(mesa_id).await?;
    Ok(Json(response))
}

async fn enviar_pedido(
    State(state): State<AppState>,
    MeseroSession(sesion): MeseroSession,
    Path(mesa_id): Path<i32>,
) -> Result<Json<PedidoConfirmadoResponse>, AppError> {
    let response = PedidoController::new(&state).enviar(mesa_id, &sesion).await?;
    Ok(Json(response))
}
