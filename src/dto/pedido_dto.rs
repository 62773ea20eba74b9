use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::carrito::{Carrito, LineaCarrito};
use crate::models::plato::Plato;

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub platos: Vec<Plato>,
}

#[derive(Debug, Deserialize)]
pub struct AgregarItemRequest {
    pub nombre: String,
    /// Cantidad tal como se escribió
    #[serde(default)]
    pub cantidad: String,
}

#[derive(Debug, Serialize)]
pub struct CarritoResponse {
    pub mesa_id: i32,
    pub lineas: Vec<LineaCarrito>,
    pub vista: Vec<String>,
    pub total: Decimal,
}

impl From<&Carrito> for CarritoResponse {
    fn from(carrito: &Carrito) -> Self {
        Self {
            mesa_id: carrito.mesa_id,
            lineas: carrito.lineas().to_vec(),
            vista: carrito.render(),
            total: carrito.total(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PedidoConfirmadoResponse {
    pub pedido_id: i32,
    pub mesa_id: i32,
    pub recibo: String,
}
