use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{info, warn};

use super::{db_error, PedidoRepository};
use crate::models::pedido::{FacturaCabecera, FacturaDetalle, NuevoPedido};
use crate::utils::errors::AppError;

pub struct PgPedidoRepository {
    pool: PgPool,
}

impl PgPedidoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PedidoRepository for PgPedidoRepository {
    async fn crear(&self, pedido: &NuevoPedido) -> Result<i32, AppError> {
        if pedido.lineas.is_empty() {
            return Err(AppError::BadRequest("El carrito está vacío.".to_string()));
        }

        // Si algo falla antes del commit, el drop de `tx` hace rollback
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Error iniciando la transacción del pedido"))?;

        let (pedido_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO pedidos (mesa_id, usuario_id_mesero, turno_id, estado_id, numero_comensales)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id::integer
            "#,
        )
        .bind(pedido.mesa_id)
        .bind(pedido.usuario_id_mesero)
        .bind(pedido.turno_id)
        .bind(pedido.estado_id)
        .bind(pedido.numero_comensales)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Error insertando la cabecera del pedido"))?;

        // Un solo INSERT para todas las líneas; el plato se resuelve por nombre
        // y el precio es el congelado en el carrito, no el del menú actual.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO detalle_pedidos (pedido_id, plato_id, cantidad, precio_unitario_congelado) SELECT ",
        );
        builder.push_bind(pedido_id);
        builder.push(", p.id, v.cantidad, v.precio FROM (");
        builder.push_values(pedido.lineas.iter(), |mut b, linea| {
            b.push_bind(linea.nombre.clone())
                .push_bind(linea.cantidad)
                .push_bind(linea.precio_unitario);
        });
        builder.push(") AS v(nombre, cantidad, precio) JOIN platos p ON p.nombre = v.nombre AND p.disponible = true");

        let resultado = builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(db_error("Error insertando el detalle del pedido"))?;

        if resultado.rows_affected() != pedido.lineas.len() as u64 {
            warn!(
                "⚠️ Pedido de mesa {}: {} líneas en el carrito, {} insertadas; rollback",
                pedido.mesa_id,
                pedido.lineas.len(),
                resultado.rows_affected()
            );
            return Err(AppError::Internal(
                "Algún plato del carrito ya no está disponible en el menú.".to_string(),
            ));
        }

        tx.commit()
            .await
            .map_err(db_error("Error confirmando el pedido"))?;

        info!("🧾 Pedido {} creado para la mesa {}", pedido_id, pedido.mesa_id);
        Ok(pedido_id)
    }

    async fn cabecera_factura(&self, pedido_id: i32) -> Result<Option<FacturaCabecera>, AppError> {
        let cabecera = sqlx::query_as::<_, FacturaCabecera>(
            r#"
            SELECT p.mesa_id,
                   u.nombre_completo AS mesero,
                   p.fecha_cierre::timestamp AS fecha_cierre,
                   COALESCE(p.subtotal, 0)::numeric AS subtotal,
                   COALESCE(p.propina, 0)::numeric AS propina,
                   COALESCE(p.total, 0)::numeric AS total
            FROM pedidos p
            JOIN usuarios u ON u.id = p.usuario_id_mesero
            WHERE p.id = $1
            "#,
        )
        .bind(pedido_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Error obteniendo la cabecera de la factura"))?;

        Ok(cabecera)
    }

    async fn detalles_factura(&self, pedido_id: i32) -> Result<Vec<FacturaDetalle>, AppError> {
        let detalles = sqlx::query_as::<_, FacturaDetalle>(
            r#"
            SELECT d.cantidad,
                   pl.nombre AS plato,
                   d.precio_unitario_congelado::numeric AS precio_unitario,
                   (d.cantidad * d.precio_unitario_congelado)::numeric AS subtotal
            FROM detalle_pedidos d
            JOIN platos pl ON pl.id = d.plato_id
            WHERE d.pedido_id = $1
            ORDER BY d.id
            "#,
        )
        .bind(pedido_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Error obteniendo el detalle de la factura"))?;

        Ok(detalles)
    }
}
