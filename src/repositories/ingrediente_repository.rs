use async_trait::async_trait;
use sqlx::PgPool;

use super::{db_error, IngredienteRepository};
use crate::models::ingrediente::Ingrediente;
use crate::utils::errors::AppError;

pub struct PgIngredienteRepository {
    pool: PgPool,
}

impl PgIngredienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredienteRepository for PgIngredienteRepository {
    async fn listar(&self) -> Result<Vec<Ingrediente>, AppError> {
        let ingredientes = sqlx::query_as::<_, Ingrediente>(
            r#"
            SELECT id, nombre, stock_disponible::float8 AS stock_disponible, unidad_medida
            FROM ingredientes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Error listando ingredientes"))?;

        Ok(ingredientes)
    }

    async fn actualizar_stock(&self, ingrediente_id: i32, nuevo_stock: f64) -> Result<(), AppError> {
        sqlx::query("CALL sp_actualizar_stock_ingrediente($1, $2::numeric)")
            .bind(ingrediente_id)
            .bind(nuevo_stock)
            .execute(&self.pool)
            .await
            .map_err(db_error("Error actualizando stock"))?;

        Ok(())
    }
}
