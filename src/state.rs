//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::Repositorios;
use crate::services::{CartStore, SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub repos: Repositorios,
    pub sesiones: SessionStore,
    pub carritos: CartStore,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repos: Repositorios) -> Self {
        Self {
            config,
            repos,
            sesiones: SessionStore::new(),
            carritos: CartStore::new(),
        }
    }
}
