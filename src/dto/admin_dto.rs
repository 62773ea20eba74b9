use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ingrediente::Ingrediente;
use crate::models::reporte::{PlatoMasVendido, VentasMesero};
use crate::models::usuario::Empleado;

#[derive(Debug, Deserialize, Validate)]
pub struct RegistrarEmpleadoRequest {
    #[validate(length(min = 1))]
    pub nombre_completo: String,

    #[validate(length(min = 1))]
    pub nombre_usuario: String,

    #[validate(length(min = 1))]
    pub clave: String,

    #[validate(length(min = 1))]
    pub rol_app: String,

    #[serde(default)]
    pub activo: bool,
}

#[derive(Debug, Serialize)]
pub struct EmpleadosResponse {
    pub empleados: Vec<Empleado>,
    pub texto: String,
}

// Ambos campos llegan como texto libre del formulario
#[derive(Debug, Deserialize)]
pub struct ActualizarStockRequest {
    #[serde(default)]
    pub ingrediente_id: String,
    #[serde(default)]
    pub nuevo_stock: String,
}

#[derive(Debug, Serialize)]
pub struct IngredientesResponse {
    pub ingredientes: Vec<Ingrediente>,
    pub texto: String,
}

#[derive(Debug, Serialize)]
pub struct PlatosMasVendidosResponse {
    pub platos: Vec<PlatoMasVendido>,
    pub texto: String,
}

#[derive(Debug, Serialize)]
pub struct MeseroDelPeriodoResponse {
    pub mesero: Option<VentasMesero>,
    pub texto: String,
}
