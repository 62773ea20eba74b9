use std::sync::Arc;
use tracing::{error, info, warn};

use crate::controllers::factura_controller::FacturaController;
use crate::dto::mesa_dto::{AbrirMesaResponse, AccionMesaResponse, FacturarRequest, FacturarResponse};
use crate::models::mesa::{EstadoMesa, MesaVista, TableroMesas};
use crate::repositories::MesaRepository;
use crate::services::{CartStore, SesionUsuario};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::parse_propina;

pub struct MesaController {
    mesas: Arc<dyn MesaRepository>,
    carritos: CartStore,
    facturas: FacturaController,
}

impl MesaController {
    pub fn new(state: &AppState) -> Self {
        Self {
            mesas: state.repos.mesas.clone(),
            carritos: state.carritos.clone(),
            facturas: FacturaController::new(state),
        }
    }

    /// Consultar el estado de todas las mesas
    pub async fn refresh(&self) -> AppResult<TableroMesas> {
        let rows = self.mesas.listar_estados().await?;
        Ok(TableroMesas::from_rows(rows))
    }

    /// Refrescar sin cortar la operación en curso si la consulta falla
    async fn vistas_actualizadas(&self) -> Vec<MesaVista> {
        match self.refresh().await {
            Ok(tablero) => tablero.vistas(),
            Err(e) => {
                warn!("⚠️ No se pudo refrescar el tablero: {}", e);
                Vec::new()
            }
        }
    }

    fn validar_id(mesa_id: i32) -> AppResult<()> {
        if TableroMesas::contiene(mesa_id) {
            Ok(())
        } else {
            Err(not_found_error("Mesa", mesa_id))
        }
    }

    pub async fn accion(&self, mesa_id: i32) -> AppResult<AccionMesaResponse> {
        Self::validar_id(mesa_id)?;
        let tablero = self.refresh().await?;
        Ok(AccionMesaResponse {
            mesa_id,
            estado: tablero.estado_texto(mesa_id).to_string(),
            accion: tablero.accion(mesa_id),
        })
    }

    /// disponible -> ocupada, y abre el carrito de la mesa
    pub async fn abrir(
        &self,
        mesa_id: i32,
        sesion: &SesionUsuario,
    ) -> AppResult<AbrirMesaResponse> {
        Self::validar_id(mesa_id)?;

        let tablero = self.refresh().await?;
        if tablero.estado(mesa_id) != EstadoMesa::Disponible {
            return Err(AppError::Conflict(format!(
                "La mesa {} no está disponible (estado: {})",
                mesa_id,
                tablero.estado_texto(mesa_id)
            )));
        }

        if !self.mesas.ocupar(mesa_id).await? {
            return Err(AppError::Conflict(format!(
                "La mesa {} acaba de ser ocupada por otro usuario",
                mesa_id
            )));
        }

        self.carritos.abrir(mesa_id, sesion.token).await;
        info!("🍽️ Mesa {} abierta por '{}'", mesa_id, sesion.nombre_usuario);

        Ok(AbrirMesaResponse {
            mesa_id,
            mensaje: format!("Pedido abierto para la mesa {}", mesa_id),
            mesas: self.vistas_actualizadas().await,
        })
    }

    /// Facturar una mesa ocupada con `sp_facturar_mesa` y, si se pide, exportar el CSV
    pub async fn facturar(
        &self,
        mesa_id: i32,
        request: FacturarRequest,
    ) -> AppResult<FacturarResponse> {
        Self::validar_id(mesa_id)?;

        let tablero = self.refresh().await?;
        if tablero.estado(mesa_id) != EstadoMesa::Ocupada {
            return Err(AppError::Conflict(format!(
                "La mesa {} no está ocupada (estado: {})",
                mesa_id,
                tablero.estado_texto(mesa_id)
            )));
        }

        let Some(propina) = parse_propina(request.propina.as_deref())? else {
            return Ok(FacturarResponse {
                success: false,
                cancelado: true,
                pedido_id: None,
                archivo: None,
                mensaje: None,
                mesas: tablero.vistas(),
            });
        };

        let mut respuesta = FacturarResponse {
            success: false,
            cancelado: false,
            pedido_id: None,
            archivo: None,
            mensaje: None,
            mesas: Vec::new(),
        };

        match self.mesas.facturar(mesa_id, propina).await {
            Ok(pedido_id) => {
                info!("💵 Mesa {} facturada (pedido {:?})", mesa_id, pedido_id);
                self.carritos.cerrar(mesa_id).await;
                respuesta.success = true;
                respuesta.pedido_id = pedido_id;
                respuesta.mensaje = Some(format!("¡Mesa {} facturada con éxito!", mesa_id));

                if request.exportar_csv {
                    match pedido_id {
                        Some(id) => match self.facturas.exportar_a_directorio(id).await {
                            Ok(ruta) => respuesta.archivo = Some(ruta.display().to_string()),
                            Err(e) => {
                                error!("❌ Exportación de la factura {} fallida: {}", id, e);
                                respuesta.mensaje = Some(format!(
                                    "¡Mesa {} facturada con éxito! No se pudo exportar la factura.",
                                    mesa_id
                                ));
                            }
                        },
                        None => warn!("⚠️ sp_facturar_mesa no devolvió pedido; no se exporta"),
                    }
                }
            }
            Err(e) => {
                error!("❌ Error al facturar la mesa {}: {}", mesa_id, e);
                respuesta.mensaje = Some("Error al facturar la mesa.".to_string());
            }
        }

        respuesta.mesas = self.vistas_actualizadas().await;
        Ok(respuesta)
    }
}
