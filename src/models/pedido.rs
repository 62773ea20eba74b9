//! Modelo de Pedido y Detalle_pedido

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::carrito::{Carrito, LineaCarrito};

// Valores fijos mientras no exista selección de turno ni de comensales
pub const TURNO_PREDETERMINADO: i32 = 1;
pub const ESTADO_SOLICITADO: i32 = 1;
pub const COMENSALES_PREDETERMINADOS: i32 = 1;

/// Cabecera y líneas de un pedido por insertar
#[derive(Debug, Clone)]
pub struct NuevoPedido {
    pub mesa_id: i32,
    pub usuario_id_mesero: i32,
    pub turno_id: i32,
    pub estado_id: i32,
    pub numero_comensales: i32,
    pub lineas: Vec<LineaCarrito>,
}

impl NuevoPedido {
    pub fn desde_carrito(carrito: &Carrito, usuario_id_mesero: i32) -> Self {
        Self {
            mesa_id: carrito.mesa_id,
            usuario_id_mesero,
            turno_id: TURNO_PREDETERMINADO,
            estado_id: ESTADO_SOLICITADO,
            numero_comensales: COMENSALES_PREDETERMINADOS,
            lineas: carrito.lineas().to_vec(),
        }
    }
}

/// Cabecera de un pedido cerrado
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FacturaCabecera {
    pub mesa_id: i32,
    pub mesero: String,
    pub fecha_cierre: Option<NaiveDateTime>,
    pub subtotal: Decimal,
    pub propina: Decimal,
    pub total: Decimal,
}

/// Línea de un pedido cerrado, con el precio congelado
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FacturaDetalle {
    pub cantidad: i32,
    pub plato: String,
    pub precio_unitario: Decimal,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Factura {
    pub pedido_id: i32,
    pub cabecera: FacturaCabecera,
    pub detalles: Vec<FacturaDetalle>,
}
