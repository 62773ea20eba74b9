use async_trait::async_trait;
use sqlx::PgPool;

use super::{db_error, ReporteRepository};
use crate::models::reporte::{PlatoMasVendido, VentasMesero};
use crate::utils::errors::AppError;

pub struct PgReporteRepository {
    pool: PgPool,
}

impl PgReporteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReporteRepository for PgReporteRepository {
    async fn platos_mas_vendidos(&self, limite: i64) -> Result<Vec<PlatoMasVendido>, AppError> {
        let platos = sqlx::query_as::<_, PlatoMasVendido>(
            r#"
            SELECT nombre_plato, total_vendido::bigint AS total_vendido
            FROM vista_gerente_platos_mas_pedidos
            ORDER BY total_vendido DESC
            LIMIT $1
            "#,
        )
        .bind(limite)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Error cargando platos más vendidos"))?;

        Ok(platos)
    }

    async fn mesero_del_periodo(&self) -> Result<Option<VentasMesero>, AppError> {
        let mesero = sqlx::query_as::<_, VentasMesero>(
            r#"
            SELECT nombre_mesero,
                   total_pedidos::bigint AS total_pedidos,
                   total_ventas::numeric AS total_ventas
            FROM vista_gerente_ventas_por_mesero
            ORDER BY total_ventas DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Error cargando ventas por mesero"))?;

        Ok(mesero)
    }
}
