//! Modelo de Ingrediente
//!
//! El stock solo cambia vía `sp_actualizar_stock_ingrediente`.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ingrediente {
    pub id: i32,
    pub nombre: String,
    pub stock_disponible: f64,
    pub unidad_medida: String,
}

pub fn render_ingredientes(ingredientes: &[Ingrediente]) -> String {
    let mut texto = String::from("--- Inventario de Ingredientes ---\n\n");
    for i in ingredientes {
        texto.push_str(&format!(
            "ID: {} | {} | Stock: {:.2} {}\n",
            i.id, i.nombre, i.stock_disponible, i.unidad_medida
        ));
    }
    texto
}
