//! Middleware del sistema
//!
//! Sesión por request y CORS.

pub mod auth;
pub mod cors;

pub use auth::{AdminSession, MeseroSession};
pub use cors::cors_middleware;
