//! Modelo de Plato (menú)
//!
//! Solo lectura para la aplicación; se filtra por `disponible = true`.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Plato {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Decimal,
    pub imagen_url: Option<String>,
}
