//! Sesiones de usuario
//!
//! La sesión es un valor explícito creado en el login e identificado por un
//! token opaco. El almacén es compartido por el router; cada request recupera
//! su sesión a partir del header `Authorization`.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::usuario::RolApp;

/// Usuario que está actuando
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SesionUsuario {
    pub id: i32,
    pub nombre_completo: String,
    pub nombre_usuario: String,
    pub rol: RolApp,
    #[serde(skip)]
    pub token: Uuid,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sesiones: Arc<RwLock<HashMap<Uuid, SesionUsuario>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iniciar sesión y devolverla con su token
    pub async fn start(
        &self,
        id: i32,
        nombre_completo: String,
        nombre_usuario: String,
        rol: RolApp,
    ) -> SesionUsuario {
        let sesion = SesionUsuario {
            id,
            nombre_completo,
            nombre_usuario,
            rol,
            token: Uuid::new_v4(),
        };
        self.sesiones.write().await.insert(sesion.token, sesion.clone());
        info!("🔑 Sesión iniciada para '{}' ({})", sesion.nombre_usuario, rol.as_str());
        sesion
    }

    /// Cerrar sesión; devuelve la sesión cerrada si existía
    pub async fn end(&self, token: &Uuid) -> Option<SesionUsuario> {
        let sesion = self.sesiones.write().await.remove(token);
        if let Some(s) = &sesion {
            info!("👋 Sesión cerrada para '{}'", s.nombre_usuario);
        }
        sesion
    }

    pub async fn current(&self, token: &Uuid) -> Option<SesionUsuario> {
        self.sesiones.read().await.get(token).cloned()
    }

    pub async fn activas(&self) -> usize {
        self.sesiones.read().await.len()
    }
}
