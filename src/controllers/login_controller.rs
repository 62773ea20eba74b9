use std::sync::Arc;
use tracing::{info, warn};

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::usuario::RolApp;
use crate::repositories::UsuarioRepository;
use crate::services::SessionStore;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub struct LoginController {
    usuarios: Arc<dyn UsuarioRepository>,
    sesiones: SessionStore,
}

impl LoginController {
    pub fn new(state: &AppState) -> Self {
        Self {
            usuarios: state.repos.usuarios.clone(),
            sesiones: state.sesiones.clone(),
        }
    }

    /// Verificar credenciales, iniciar la sesión y decidir el panel a abrir
    pub async fn attempt_login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        if request.nombre_usuario.is_empty() || request.clave.is_empty() {
            return Err(AppError::BadRequest(
                "Por favor, ingrese usuario y contraseña".to_string(),
            ));
        }

        let usuario = self
            .usuarios
            .verificar_credenciales(&request.nombre_usuario, &request.clave)
            .await?
            .ok_or_else(|| {
                info!("🚫 Login fallido para '{}'", request.nombre_usuario);
                AppError::Unauthorized("Usuario o contraseña incorrectos.".to_string())
            })?;

        // Sin panel no hay sesión: el rol se revisa antes de iniciarla
        let Some((rol, panel)) = RolApp::parse(&usuario.rol_app)
            .and_then(|rol| rol.panel().map(|panel| (rol, panel)))
        else {
            warn!(
                "⚠️ Usuario '{}' con rol '{}' sin panel disponible",
                request.nombre_usuario, usuario.rol_app
            );
            return Err(AppError::Forbidden("Rol no reconocido.".to_string()));
        };

        let sesion = self
            .sesiones
            .start(usuario.id, usuario.nombre_completo, request.nombre_usuario, rol)
            .await;

        Ok(LoginResponse {
            token: sesion.token.to_string(),
            mensaje: format!("¡Bienvenido(a), {}!", sesion.nombre_completo),
            panel,
            usuario: sesion,
        })
    }
}
