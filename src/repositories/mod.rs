//! Repositorios
//!
//! Cada pantalla habla con la base solo a través de estos traits. Las
//! implementaciones `Pg*` usan SQLx sobre el pool con el schema fijado; los
//! tests de integración usan implementaciones en memoria.

pub mod ingrediente_repository;
pub mod mesa_repository;
pub mod pedido_repository;
pub mod plato_repository;
pub mod reporte_repository;
pub mod usuario_repository;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::ingrediente::Ingrediente;
use crate::models::mesa::MesaRow;
use crate::models::pedido::{FacturaCabecera, FacturaDetalle, NuevoPedido};
use crate::models::plato::Plato;
use crate::models::reporte::{PlatoMasVendido, VentasMesero};
use crate::models::usuario::{Empleado, NuevoEmpleado, UsuarioAutenticado};
use crate::utils::errors::AppError;

pub use ingrediente_repository::PgIngredienteRepository;
pub use mesa_repository::PgMesaRepository;
pub use pedido_repository::PgPedidoRepository;
pub use plato_repository::PgPlatoRepository;
pub use reporte_repository::PgReporteRepository;
pub use usuario_repository::PgUsuarioRepository;

#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Usuario activo cuya clave coincide; `None` no distingue la causa
    async fn verificar_credenciales(
        &self,
        nombre_usuario: &str,
        clave: &str,
    ) -> Result<Option<UsuarioAutenticado>, AppError>;

    async fn listar(&self) -> Result<Vec<Empleado>, AppError>;

    async fn registrar(&self, empleado: &NuevoEmpleado) -> Result<(), AppError>;
}

#[async_trait]
pub trait MesaRepository: Send + Sync {
    async fn listar_estados(&self) -> Result<Vec<MesaRow>, AppError>;

    /// disponible -> ocupada. Devuelve `false` si la mesa ya no estaba disponible.
    async fn ocupar(&self, mesa_id: i32) -> Result<bool, AppError>;

    /// `sp_facturar_mesa`: cierra el pedido de la mesa y la libera
    async fn facturar(&self, mesa_id: i32, propina: Decimal) -> Result<Option<i32>, AppError>;
}

#[async_trait]
pub trait PlatoRepository: Send + Sync {
    async fn listar_disponibles(&self) -> Result<Vec<Plato>, AppError>;

    /// Plato del menú por nombre, solo si está disponible
    async fn buscar_disponible(&self, nombre: &str) -> Result<Option<Plato>, AppError>;
}

#[async_trait]
pub trait PedidoRepository: Send + Sync {
    /// Inserta cabecera y detalle en una sola transacción; devuelve el id del pedido
    async fn crear(&self, pedido: &NuevoPedido) -> Result<i32, AppError>;

    async fn cabecera_factura(&self, pedido_id: i32) -> Result<Option<FacturaCabecera>, AppError>;

    async fn detalles_factura(&self, pedido_id: i32) -> Result<Vec<FacturaDetalle>, AppError>;
}

#[async_trait]
pub trait IngredienteRepository: Send + Sync {
    async fn listar(&self) -> Result<Vec<Ingrediente>, AppError>;

    /// `sp_actualizar_stock_ingrediente`
    async fn actualizar_stock(&self, ingrediente_id: i32, nuevo_stock: f64) -> Result<(), AppError>;
}

#[async_trait]
pub trait ReporteRepository: Send + Sync {
    async fn platos_mas_vendidos(&self, limite: i64) -> Result<Vec<PlatoMasVendido>, AppError>;

    async fn mesero_del_periodo(&self) -> Result<Option<VentasMesero>, AppError>;
}

/// Conjunto de repositorios que comparten los controladores
#[derive(Clone)]
pub struct Repositorios {
    pub usuarios: Arc<dyn UsuarioRepository>,
    pub mesas: Arc<dyn MesaRepository>,
    pub platos: Arc<dyn PlatoRepository>,
    pub pedidos: Arc<dyn PedidoRepository>,
    pub ingredientes: Arc<dyn IngredienteRepository>,
    pub reportes: Arc<dyn ReporteRepository>,
}

impl Repositorios {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            usuarios: Arc::new(PgUsuarioRepository::new(pool.clone())),
            mesas: Arc::new(PgMesaRepository::new(pool.clone())),
            platos: Arc::new(PgPlatoRepository::new(pool.clone())),
            pedidos: Arc::new(PgPedidoRepository::new(pool.clone())),
            ingredientes: Arc::new(PgIngredienteRepository::new(pool.clone())),
            reportes: Arc::new(PgReporteRepository::new(pool)),
        }
    }
}

/// Registrar el error de SQLx con contexto y convertirlo
pub(crate) fn db_error(contexto: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        tracing::error!("❌ {}: {}", contexto, e);
        AppError::Database(e)
    }
}
