use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::factura_controller::FacturaController;
use crate::middleware::MeseroSession;
use crate::models::pedido::Factura;
use crate::services::factura_export::nombre_archivo;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_factura_router() -> Router<AppState> {
    Router::new()
        .route("/:id/factura", get(obtener_factura))
        .route("/:id/factura.csv", get(descargar_factura))
}

async fn obtener_factura(
    State(state): State<AppState>,
    _sesion: MeseroSession,
    Path(pedido_id): Path<i32>,
) -> Result<Json<Factura>, AppError> {
    let factura = FacturaController::new(&state).obtener(pedido_id).await?;
    Ok(Json(factura))
}

async fn descargar_factura(
    State(state): State<AppState>,
    _sesion: MeseroSession,
    Path(pedido_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let csv = FacturaController::new(&state).csv(pedido_id).await?;
    let disposition = format!("attachment; filename=\"{}\"", nombre_archivo(pedido_id));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
