use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use super::{db_error, MesaRepository};
use crate::models::mesa::MesaRow;
use crate::utils::errors::AppError;

pub struct PgMesaRepository {
    pool: PgPool,
}

impl PgMesaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Los pedidos se consultan como `int4`
fn pedido_id_int4(id: i64) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| {
        tracing::error!("❌ pedido_id {} fuera de rango int4", id);
        AppError::Internal(format!("Pedido {} fuera de rango", id))
    })
}

#[async_trait]
impl MesaRepository for PgMesaRepository {
    async fn listar_estados(&self) -> Result<Vec<MesaRow>, AppError> {
        let mesas = sqlx::query_as::<_, MesaRow>(
            "SELECT id, estado::text AS estado FROM mesas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Error cargando el estado de las mesas"))?;

        Ok(mesas)
    }

    async fn ocupar(&self, mesa_id: i32) -> Result<bool, AppError> {
        // La condición sobre el estado evita abrir dos pedidos sobre la misma mesa
        let resultado = sqlx::query(
            r#"
            UPDATE mesas
            SET estado = 'ocupada'
            WHERE id = $1 AND lower(estado::text) = 'disponible'
            "#,
        )
        .bind(mesa_id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Error al actualizar el estado de la mesa"))?;

        Ok(resultado.rows_affected() == 1)
    }

    async fn facturar(&self, mesa_id: i32, propina: Decimal) -> Result<Option<i32>, AppError> {
        let fila = sqlx::query("CALL sp_facturar_mesa($1, $2, NULL)")
            .bind(mesa_id)
            .bind(propina)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Error al facturar la mesa"))?;

        let Some(fila) = fila else {
            return Ok(None);
        };

        // El OUT pedido_id puede declararse integer o bigint
        let pedido_id: Option<i64> = fila
            .try_get::<Option<i64>, _>(0)
            .or_else(|_| fila.try_get::<Option<i32>, _>(0).map(|id| id.map(i64::from)))
            .map_err(db_error("Error al leer el pedido facturado"))?;

        pedido_id.map(pedido_id_int4).transpose()
    }
}
