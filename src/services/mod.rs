//! Services module
//!
//! Estado en memoria que sobrevive entre requests (sesiones, carritos) y la
//! exportación de facturas.

pub mod carrito_service;
pub mod factura_export;
pub mod sesion_service;

pub use carrito_service::CartStore;
pub use sesion_service::{SesionUsuario, SessionStore};
