//! Modelos del sistema
//!
//! Filas de PostgreSQL y valores de dominio (carrito, tablero de mesas, roles).

pub mod carrito;
pub mod ingrediente;
pub mod mesa;
pub mod pedido;
pub mod plato;
pub mod reporte;
pub mod usuario;
