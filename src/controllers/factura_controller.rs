use std::path::PathBuf;
use std::sync::Arc;

use crate::models::pedido::Factura;
use crate::repositories::PedidoRepository;
use crate::services::factura_export;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub struct FacturaController {
    pedidos: Arc<dyn PedidoRepository>,
    directorio: PathBuf,
}

impl FacturaController {
    pub fn new(state: &AppState) -> Self {
        Self {
            pedidos: state.repos.pedidos.clone(),
            directorio: state.config.facturas_dir.clone(),
        }
    }

    /// Cabecera y detalle de un pedido cerrado
    pub async fn obtener(&self, pedido_id: i32) -> AppResult<Factura> {
        let cabecera = self
            .pedidos
            .cabecera_factura(pedido_id)
            .await?
            .ok_or_else(|| not_found_error("Pedido", pedido_id))?;
        let detalles = self.pedidos.detalles_factura(pedido_id).await?;

        Ok(Factura { pedido_id, cabecera, detalles })
    }

    pub async fn csv(&self, pedido_id: i32) -> AppResult<String> {
        let factura = self.obtener(pedido_id).await?;
        Ok(factura_export::render_csv(&factura))
    }

    /// Exportar al directorio configurado como `factura_pedido_<id>.csv`
    pub async fn exportar_a_directorio(&self, pedido_id: i32) -> AppResult<PathBuf> {
        let factura = self.obtener(pedido_id).await?;
        let destino = factura_export::ruta_destino(&self.directorio, pedido_id);
        factura_export::exportar(&factura, &destino).await?;
        Ok(destino)
    }
}
