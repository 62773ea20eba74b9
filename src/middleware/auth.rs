//! Extracción de la sesión en cada request
//!
//! El token llega en `Authorization: Bearer <token>` y se busca en el
//! `SessionStore`. Los extractores por rol cierran el paso a las pantallas
//! que no corresponden.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::models::usuario::RolApp;
use crate::services::SesionUsuario;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Leer el token del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> Result<Uuid, AppError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de sesión requerido".to_string()))?;

    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Unauthorized("Token de sesión inválido".to_string()))
}

#[async_trait]
impl FromRequestParts<AppState> for SesionUsuario {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(sesion) = parts.extensions.get::<SesionUsuario>() {
            return Ok(sesion.clone());
        }

        let token = bearer_token(&parts.headers)?;
        let sesion = state
            .sesiones
            .current(&token)
            .await
            .ok_or_else(|| AppError::Unauthorized("Sesión expirada o inexistente".to_string()))?;

        parts.extensions.insert(sesion.clone());
        Ok(sesion)
    }
}

/// Sesión de un mesero (tablero de mesas, pedidos y facturación)
#[derive(Debug, Clone)]
pub struct MeseroSession(pub SesionUsuario);

/// Sesión de un administrador
#[derive(Debug, Clone)]
pub struct AdminSession(pub SesionUsuario);

async fn sesion_con_rol(
    parts: &mut Parts,
    state: &AppState,
    rol: RolApp,
) -> Result<SesionUsuario, AppError> {
    let sesion = SesionUsuario::from_request_parts(parts, state).await?;
    if sesion.rol != rol {
        return Err(AppError::Forbidden(format!(
            "Se requiere el rol {} para esta operación",
            rol.as_str()
        )));
    }
    Ok(sesion)
}

#[async_trait]
impl FromRequestParts<AppState> for MeseroSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        sesion_con_rol(parts, state, RolApp::Mesero).await.map(Self)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        sesion_con_rol(parts, state, RolApp::Administrador).await.map(Self)
    }
}
