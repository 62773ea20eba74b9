use serde::{Deserialize, Serialize};

use crate::models::usuario::Panel;
use crate::services::SesionUsuario;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub nombre_usuario: String,
    #[serde(default)]
    pub clave: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub mensaje: String,
    pub panel: Panel,
    pub usuario: SesionUsuario,
}
