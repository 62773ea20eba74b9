//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de entrada y formato de importes.

pub mod errors;
pub mod money;
pub mod validation;
