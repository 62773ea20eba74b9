//! Controladores
//!
//! Uno por pantalla. Reciben datos ya deserializados, validan antes de tocar
//! la base y devuelven DTOs listos para serializar.

pub mod admin_controller;
pub mod factura_controller;
pub mod login_controller;
pub mod mesa_controller;
pub mod pedido_controller;
