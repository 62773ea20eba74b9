//! Modelo de Usuario/Empleado
//!
//! Mapea la tabla `usuarios`. La clave nunca sale de la base: se compara y
//! se genera con `crypt()` del lado del servidor.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rol de aplicación - mapea la columna `rol_app`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RolApp {
    Administrador,
    Mesero,
    Cocinero,
}

impl RolApp {
    /// Interpretar el texto guardado en la base (coincidencia exacta)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Administrador" => Some(Self::Administrador),
            "Mesero" => Some(Self::Mesero),
            "Cocinero" => Some(Self::Cocinero),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrador => "Administrador",
            Self::Mesero => "Mesero",
            Self::Cocinero => "Cocinero",
        }
    }

    /// Panel que abre el rol tras el login; la cocina aún no tiene interfaz
    pub fn panel(&self) -> Option<Panel> {
        match self {
            Self::Administrador => Some(Panel::Administrador),
            Self::Mesero => Some(Panel::Mesas),
            Self::Cocinero => None,
        }
    }

    pub fn has_panel(self) -> bool {
        self.panel().is_some()
    }
}

/// Pantalla a la que se redirige tras iniciar sesión
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Administrador,
    Mesas,
}

/// Fila devuelta por la verificación de credenciales
#[derive(Debug, Clone, FromRow)]
pub struct UsuarioAutenticado {
    pub id: i32,
    pub nombre_completo: String,
    pub rol_app: String,
}

/// Empleado tal como se lista en el panel de administración
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Empleado {
    pub id: i32,
    pub nombre_completo: String,
    pub nombre_usuario: String,
    pub rol_app: String,
    pub activo: bool,
}

/// Datos para registrar un empleado nuevo
#[derive(Debug, Clone)]
pub struct NuevoEmpleado {
    pub nombre_completo: String,
    pub nombre_usuario: String,
    pub clave: String,
    pub rol: RolApp,
    pub activo: bool,
}

/// Bloque de texto con la lista de empleados
pub fn render_empleados(empleados: &[Empleado]) -> String {
    let mut texto = String::from("--- Lista de Empleados ---\n\n");
    for e in empleados {
        texto.push_str(&format!(
            "ID: {} | Nombre: {} | Usuario: {} | Rol: {} | Activo: {}\n",
            e.id, e.nombre_completo, e.nombre_usuario, e.rol_app, e.activo
        ));
    }
    texto
}
