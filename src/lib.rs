//! SIFood: punto de venta para restaurante
//!
//! Backend HTTP del sistema: login por rol, tablero de mesas, pedidos,
//! facturación con exportación CSV y panel de administración.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
