use async_trait::async_trait;
use sqlx::PgPool;

use super::{db_error, UsuarioRepository};
use crate::models::usuario::{Empleado, NuevoEmpleado, UsuarioAutenticado};
use crate::utils::errors::AppError;

pub struct PgUsuarioRepository {
    pool: PgPool,
}

impl PgUsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn verificar_credenciales(
        &self,
        nombre_usuario: &str,
        clave: &str,
    ) -> Result<Option<UsuarioAutenticado>, AppError> {
        // La comparación de la clave ocurre en la base con pgcrypto
        let usuario = sqlx::query_as::<_, UsuarioAutenticado>(
            r#"
            SELECT id, nombre_completo, rol_app::text AS rol_app
            FROM usuarios
            WHERE nombre_usuario = $1
              AND clave_hash = crypt($2, clave_hash)
              AND activo = true
            "#,
        )
        .bind(nombre_usuario)
        .bind(clave)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Error verificando credenciales"))?;

        Ok(usuario)
    }

    async fn listar(&self) -> Result<Vec<Empleado>, AppError> {
        let empleados = sqlx::query_as::<_, Empleado>(
            r#"
            SELECT id, nombre_completo, nombre_usuario, rol_app::text AS rol_app, activo
            FROM usuarios
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Error listando empleados"))?;

        Ok(empleados)
    }

    async fn registrar(&self, empleado: &NuevoEmpleado) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO usuarios (nombre_completo, nombre_usuario, clave_hash, rol_app, activo)
            VALUES ($1, $2, crypt($3, gen_salt('bf')), $4, $5)
            "#,
        )
        .bind(&empleado.nombre_completo)
        .bind(&empleado.nombre_usuario)
        .bind(&empleado.clave)
        .bind(empleado.rol.as_str())
        .bind(empleado.activo)
        .execute(&self.pool)
        .await
        .map_err(db_error("Error registrando empleado"))?;

        Ok(())
    }
}
