use serde::{Deserialize, Serialize};

use crate::models::mesa::{AccionMesa, MesaVista};

#[derive(Debug, Serialize)]
pub struct TableroResponse {
    pub mesas: Vec<MesaVista>,
}

// Lo que ofrece una mesa al seleccionarla
#[derive(Debug, Serialize)]
pub struct AccionMesaResponse {
    pub mesa_id: i32,
    pub estado: String,
    pub accion: AccionMesa,
}

#[derive(Debug, Serialize)]
pub struct AbrirMesaResponse {
    pub mesa_id: i32,
    pub mensaje: String,
    pub mesas: Vec<MesaVista>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FacturarRequest {
    /// Porcentaje de propina tal como se escribió; ausente cancela
    pub propina: Option<String>,
    #[serde(default)]
    pub exportar_csv: bool,
}

#[derive(Debug, Serialize)]
pub struct FacturarResponse {
    pub success: bool,
    pub cancelado: bool,
    pub pedido_id: Option<i32>,
    pub archivo: Option<String>,
    pub mensaje: Option<String>,
    pub mesas: Vec<MesaVista>,
}
