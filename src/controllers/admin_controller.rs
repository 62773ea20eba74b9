use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use crate::dto::admin_dto::{
    ActualizarStockRequest, EmpleadosResponse, IngredientesResponse, MeseroDelPeriodoResponse,
    PlatosMasVendidosResponse, RegistrarEmpleadoRequest,
};
use crate::models::ingrediente::render_ingredientes;
use crate::models::reporte::{render_mesero_del_periodo, render_platos_mas_vendidos};
use crate::models::usuario::{render_empleados, NuevoEmpleado, RolApp};
use crate::repositories::{IngredienteRepository, ReporteRepository, UsuarioRepository};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::parse_stock_update;

const TOP_PLATOS: i64 = 10;

pub struct AdminController {
    usuarios: Arc<dyn UsuarioRepository>,
    ingredientes: Arc<dyn IngredienteRepository>,
    reportes: Arc<dyn ReporteRepository>,
}

impl AdminController {
    pub fn new(state: &AppState) -> Self {
        Self {
            usuarios: state.repos.usuarios.clone(),
            ingredientes: state.repos.ingredientes.clone(),
            reportes: state.repos.reportes.clone(),
        }
    }

    pub async fn empleados(&self) -> AppResult<EmpleadosResponse> {
        let empleados = self.usuarios.listar().await?;
        let texto = render_empleados(&empleados);
        Ok(EmpleadosResponse { empleados, texto })
    }

    pub async fn registrar_empleado(
        &self,
        request: RegistrarEmpleadoRequest,
    ) -> AppResult<EmpleadosResponse> {
        request.validate()?;
        let rol = RolApp::parse(&request.rol_app).ok_or_else(|| {
            AppError::BadRequest(format!("Rol no reconocido: '{}'", request.rol_app))
        })?;

        let empleado = NuevoEmpleado {
            nombre_completo: request.nombre_completo,
            nombre_usuario: request.nombre_usuario,
            clave: request.clave,
            rol,
            activo: request.activo,
        };

        // El error real queda en el log; al usuario se le da la causa más probable
        self.usuarios.registrar(&empleado).await.map_err(|e| {
            error!("❌ Registro de '{}' fallido: {}", empleado.nombre_usuario, e);
            AppError::Conflict(
                "Error al registrar el empleado. Causa probable: El nombre de usuario ya existe."
                    .to_string(),
            )
        })?;
        info!("👤 Empleado '{}' registrado", empleado.nombre_usuario);

        self.empleados().await
    }

    pub async fn ingredientes(&self) -> AppResult<IngredientesResponse> {
        let ingredientes = self.ingredientes.listar().await?;
        let texto = render_ingredientes(&ingredientes);
        Ok(IngredientesResponse { ingredientes, texto })
    }

    pub async fn actualizar_stock(
        &self,
        request: ActualizarStockRequest,
    ) -> AppResult<IngredientesResponse> {
        let (ingrediente_id, nuevo_stock) =
            parse_stock_update(&request.ingrediente_id, &request.nuevo_stock)?;

        self.ingredientes
            .actualizar_stock(ingrediente_id, nuevo_stock)
            .await?;
        info!("📦 Stock del ingrediente {} actualizado a {}", ingrediente_id, nuevo_stock);

        self.ingredientes().await
    }

    pub async fn platos_mas_vendidos(&self) -> AppResult<PlatosMasVendidosResponse> {
        let platos = self.reportes.platos_mas_vendidos(TOP_PLATOS).await?;
        let texto = render_platos_mas_vendidos(&platos);
        Ok(PlatosMasVendidosResponse { platos, texto })
    }

    pub async fn mesero_del_periodo(&self) -> AppResult<MeseroDelPeriodoResponse> {
        let mesero = self.reportes.mesero_del_periodo().await?;
        let texto = render_mesero_del_periodo(mesero.as_ref());
        Ok(MeseroDelPeriodoResponse { mesero, texto })
    }
}
