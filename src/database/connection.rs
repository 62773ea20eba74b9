//! Conexión a PostgreSQL
//!
//! Único canal hacia los datos persistidos. Un pool de SQLx reemplaza a la
//! conexión compartida: cada conexión física nueva fija el schema activo con
//! `SET search_path` antes de entregarse, y el pool reconecta solo.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor;
use tracing::{info, warn};

use crate::config::database::{mask_database_url, DatabaseConfig};
use crate::models::usuario::RolApp;

/// Pool de conexiones con el schema fijado
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar con la configuración dada
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let search_path = config.search_path_statement();
        info!("🔌 Conectando a {}", mask_database_url(&config.url));

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .after_connect(move |conn, _meta| {
                let statement = search_path.clone();
                Box::pin(async move {
                    conn.execute(statement.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&config.url)
            .await?;

        info!("✅ Conexión y schema '{}' configurados", config.schema);
        Ok(Self { pool })
    }

    /// Obtener el pool (equivalente a adquirir la conexión)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Cerrar todas las conexiones
    pub async fn close(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
            info!("🔒 Conexiones cerradas");
        }
    }

    /// Revisar que todo rol activo en `usuarios` tenga un panel.
    ///
    /// Un fallo aquí solo se registra; no impide el arranque.
    pub async fn check_roles(&self) {
        let roles: Result<Vec<String>, sqlx::Error> = sqlx::query_scalar(
            "SELECT DISTINCT rol_app::text FROM usuarios WHERE activo = true ORDER BY 1",
        )
        .fetch_all(&self.pool)
        .await;

        match roles {
            Ok(roles) => {
                for rol in unsupported_roles(&roles) {
                    warn!(
                        "⚠️ Hay usuarios activos con rol '{}' sin panel disponible; no podrán iniciar sesión",
                        rol
                    );
                }
            }
            Err(e) => warn!("⚠️ No se pudo revisar la tabla de roles: {}", e),
        }
    }
}

/// Roles presentes en la base que no abren ningún panel
pub fn unsupported_roles(roles: &[String]) -> Vec<&str> {
    roles
        .iter()
        .map(String::as_str)
        .filter(|rol| !RolApp::parse(rol).map(RolApp::has_panel).unwrap_or(false))
        .collect()
}
