use std::sync::Arc;
use tracing::error;

use crate::dto::pedido_dto::{AgregarItemRequest, CarritoResponse, PedidoConfirmadoResponse};
use crate::models::carrito::Carrito;
use crate::models::pedido::NuevoPedido;
use crate::models::plato::Plato;
use crate::repositories::{PedidoRepository, PlatoRepository};
use crate::services::{CartStore, SesionUsuario};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult};
use crate::utils::validation::parse_cantidad;

fn sin_pedido_abierto(mesa_id: i32) -> AppError {
    AppError::NotFound(format!("No hay un pedido abierto para la mesa {}", mesa_id))
}

pub struct PedidoController {
    platos: Arc<dyn PlatoRepository>,
    pedidos: Arc<dyn PedidoRepository>,
    carritos: CartStore,
}

impl PedidoController {
    pub fn new(state: &AppState) -> Self {
        Self {
            platos: state.repos.platos.clone(),
            pedidos: state.repos.pedidos.clone(),
            carritos: state.carritos.clone(),
        }
    }

    pub async fn menu(&self) -> AppResult<Vec<Plato>> {
        self.platos.listar_disponibles().await
    }

    async fn carrito_abierto(&self, mesa_id: i32) -> AppResult<Carrito> {
        self.carritos.obtener(mesa_id).await.ok_or_else(|| sin_pedido_abierto(mesa_id))
    }

    pub async fn carrito(&self, mesa_id: i32) -> AppResult<CarritoResponse> {
        let carrito = self.carrito_abierto(mesa_id).await?;
        Ok(CarritoResponse::from(&carrito))
    }

    /// Añadir un plato disponible; el precio se congela con el del menú en este momento
    pub async fn agregar(
        &self,
        mesa_id: i32,
        request: AgregarItemRequest,
    ) -> AppResult<CarritoResponse> {
        if request.nombre.trim().is_empty() {
            return Err(bad_request_error("El plato es obligatorio."));
        }

        let Some(cantidad) = parse_cantidad(&request.cantidad)? else {
            return self.carrito(mesa_id).await;
        };

        let plato = self
            .platos
            .buscar_disponible(&request.nombre)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "El plato '{}' no está disponible en el menú.",
                    request.nombre
                ))
            })?;

        let carrito = self
            .carritos
            .modificar(mesa_id, |c| {
                c.agregar(plato.nombre, cantidad, plato.precio)
                    .map(|_| c.clone())
            })
            .await
            .ok_or_else(|| sin_pedido_abierto(mesa_id))??;

        Ok(CarritoResponse::from(&carrito))
    }

    pub async fn vaciar(&self, mesa_id: i32) -> AppResult<CarritoResponse> {
        let carrito = self
            .carritos
            .modificar(mesa_id, |c| {
                c.vaciar();
                c.clone()
            })
            .await
            .ok_or_else(|| sin_pedido_abierto(mesa_id))?;
        Ok(CarritoResponse::from(&carrito))
    }

    /// Guardar el carrito como pedido. Si falla, el carrito queda intacto.
    pub async fn enviar(
        &self,
        mesa_id: i32,
        sesion: &SesionUsuario,
    ) -> AppResult<PedidoConfirmadoResponse> {
        let carrito = self.carrito_abierto(mesa_id).await?;
        if carrito.is_empty() {
            return Err(bad_request_error("El carrito está vacío."));
        }

        let pedido = NuevoPedido::desde_carrito(&carrito, sesion.id);
        let pedido_id = self.pedidos.crear(&pedido).await.map_err(|e| {
            error!("❌ Error al guardar el pedido de la mesa {}: {}", mesa_id, e);
            AppError::Internal("Error al guardar el pedido.".to_string())
        })?;

        self.carritos.cerrar(mesa_id).await;

        Ok(PedidoConfirmadoResponse {
            pedido_id,
            mesa_id,
            recibo: carrito.recibo(),
        })
    }
}
