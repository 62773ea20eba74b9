//! Configuración de base de datos
//!
//! Este módulo maneja la configuración de PostgreSQL con SQLx.

use std::env;
use std::time::Duration;

use crate::utils::errors::AppError;
use crate::utils::validation::is_plain_identifier;

pub const DEFAULT_SCHEMA: &str = "sifood_schema";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub schema: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            schema: DEFAULT_SCHEMA.to_string(),
            max_connections: 5,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
        }
    }

    /// Leer `DATABASE_URL`, `DB_SCHEMA`, `DB_MAX_CONNECTIONS` y `DB_CONNECT_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, AppError> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL debe estar definida".to_string()))?;
        let mut config = Self::new(url);

        if let Ok(schema) = env::var("DB_SCHEMA") {
            config.schema = schema;
        }
        if let Ok(value) = env::var("DB_MAX_CONNECTIONS") {
            config.max_connections = value
                .parse()
                .map_err(|_| AppError::Config(format!("DB_MAX_CONNECTIONS inválido: '{}'", value)))?;
        }
        if let Ok(value) = env::var("DB_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = value.parse().map_err(|_| {
                AppError::Config(format!("DB_CONNECT_TIMEOUT_SECS inválido: '{}'", value))
            })?;
            config.connect_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !is_plain_identifier(&self.schema) {
            return Err(AppError::Config(format!(
                "DB_SCHEMA debe ser un identificador simple, recibido '{}'",
                self.schema
            )));
        }
        if self.max_connections == 0 {
            return Err(AppError::Config("DB_MAX_CONNECTIONS debe ser mayor que 0".to_string()));
        }
        Ok(())
    }

    /// Sentencia que fija el schema activo en cada conexión nueva
    pub fn search_path_statement(&self) -> String {
        format!("SET search_path TO {}", self.schema)
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.find('@') else {
        return url.to_string();
    };
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
}
