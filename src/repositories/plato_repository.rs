use async_trait::async_trait;
use sqlx::PgPool;

use super::{db_error, PlatoRepository};
use crate::models::plato::Plato;
use crate::utils::errors::AppError;

pub struct PgPlatoRepository {
    pool: PgPool,
}

impl PgPlatoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlatoRepository for PgPlatoRepository {
    async fn listar_disponibles(&self) -> Result<Vec<Plato>, AppError> {
        let platos = sqlx::query_as::<_, Plato>(
            r#"
            SELECT nombre, descripcion, precio::numeric AS precio, imagen_url
            FROM platos
            WHERE disponible = true
            ORDER BY nombre
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Error al cargar el menú"))?;

        Ok(platos)
    }

    async fn buscar_disponible(&self, nombre: &str) -> Result<Option<Plato>, AppError> {
        let plato = sqlx::query_as::<_, Plato>(
            r#"
            SELECT nombre, descripcion, precio::numeric AS precio, imagen_url
            FROM platos
            WHERE nombre = $1 AND disponible = true
            LIMIT 1
            "#,
        )
        .bind(nombre)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Error al buscar el plato en el menú"))?;

        Ok(plato)
    }
}
