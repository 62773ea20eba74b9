//! Modelo de Mesa y tablero de estados
//!
//! Seis mesas fijas (1-6). El ciclo de vida es disponible -> ocupada ->
//! disponible; la segunda transición solo la hace `sp_facturar_mesa`.

use serde::Serialize;
use sqlx::FromRow;
use std::collections::HashMap;

/// Ids de las mesas del salón
pub const MESAS: [i32; 6] = [1, 2, 3, 4, 5, 6];

pub const ESTADO_DISPONIBLE: &str = "disponible";
pub const ESTADO_OCUPADA: &str = "ocupada";
pub const ESTADO_DESCONOCIDO: &str = "desconocido";

/// Fila de la tabla `mesas`
#[derive(Debug, Clone, FromRow)]
pub struct MesaRow {
    pub id: i32,
    pub estado: String,
}

/// Estado interpretado de una mesa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoMesa {
    Disponible,
    Ocupada,
    Desconocido,
}

impl EstadoMesa {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ESTADO_DISPONIBLE) {
            Self::Disponible
        } else if value.eq_ignore_ascii_case(ESTADO_OCUPADA) {
            Self::Ocupada
        } else {
            Self::Desconocido
        }
    }

    /// Colores (fondo, texto) del botón de la mesa
    pub fn colores(&self) -> (&'static str, &'static str) {
        match self {
            Self::Disponible => ("#009933", "#FFFFFF"),
            Self::Ocupada => ("#CC0000", "#FFFFFF"),
            Self::Desconocido => ("#C0C0C0", "#000000"),
        }
    }

    /// Acción que ofrece la mesa al seleccionarla
    pub fn accion(&self) -> AccionMesa {
        match self {
            Self::Disponible => AccionMesa::AbrirPedido,
            Self::Ocupada => AccionMesa::Facturar,
            Self::Desconocido => AccionMesa::Ninguna,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccionMesa {
    AbrirPedido,
    Facturar,
    Ninguna,
}

/// Vista de una mesa en el tablero
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MesaVista {
    pub id: i32,
    pub estado: String,
    pub color_fondo: &'static str,
    pub color_texto: &'static str,
}

/// Estados de las mesas del salón, tal como los devolvió la última consulta
#[derive(Debug, Clone, Default)]
pub struct TableroMesas {
    estados: HashMap<i32, String>,
}

impl TableroMesas {
    pub fn from_rows(rows: Vec<MesaRow>) -> Self {
        Self {
            estados: rows.into_iter().map(|r| (r.id, r.estado)).collect(),
        }
    }

    pub fn contiene(id: i32) -> bool {
        MESAS.contains(&id)
    }

    /// Texto del estado; "desconocido" si la mesa no vino en la consulta
    pub fn estado_texto(&self, id: i32) -> &str {
        self.estados.get(&id).map(String::as_str).unwrap_or(ESTADO_DESCONOCIDO)
    }

    pub fn estado(&self, id: i32) -> EstadoMesa {
        EstadoMesa::parse(self.estado_texto(id))
    }

    pub fn accion(&self, id: i32) -> AccionMesa {
        self.estado(id).accion()
    }

    pub fn vistas(&self) -> Vec<MesaVista> {
        MESAS
            .iter()
            .map(|&id| {
                let (color_fondo, color_texto) = self.estado(id).colores();
                MesaVista {
                    id,
                    estado: self.estado_texto(id).to_string(),
                    color_fondo,
                    color_texto,
                }
            })
            .collect()
    }
}
