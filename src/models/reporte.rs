//! Reportes de gerencia
//!
//! Se leen de las vistas `vista_gerente_platos_mas_pedidos` y
//! `vista_gerente_ventas_por_mesero`, ya agregadas en la base.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::money::format_moneda;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlatoMasVendido {
    pub nombre_plato: String,
    pub total_vendido: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VentasMesero {
    pub nombre_mesero: String,
    pub total_pedidos: i64,
    pub total_ventas: Decimal,
}

pub fn render_platos_mas_vendidos(platos: &[PlatoMasVendido]) -> String {
    let mut texto = String::from("--- Platos Más Vendidos ---\n\n");
    if platos.is_empty() {
        texto.push_str("Aún no hay datos de ventas.\n");
        return texto;
    }
    for (posicion, plato) in platos.iter().enumerate() {
        texto.push_str(&format!(
            "{}. {} - {} unidades\n",
            posicion + 1,
            plato.nombre_plato,
            plato.total_vendido
        ));
    }
    texto
}

pub fn render_mesero_del_periodo(mesero: Option<&VentasMesero>) -> String {
    let mut texto = String::from("--- Empleado del Periodo ---\n\n");
    match mesero {
        Some(m) => texto.push_str(&format!(
            "Mesero: {}\nPedidos atendidos: {}\nTotal vendido: {}\n",
            m.nombre_mesero,
            m.total_pedidos,
            format_moneda(m.total_ventas)
        )),
        None => texto.push_str("Aún no hay datos de ventas.\n"),
    }
    texto
}
