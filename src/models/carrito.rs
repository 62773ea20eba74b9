//! Carrito de un pedido en curso
//!
//! Vive solo entre "añadir al carrito" y "realizar pedido". El precio de cada
//! línea se congela al añadirla y es el que se guarda en `detalle_pedidos`,
//! aunque el menú cambie después.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::money::format_moneda;

pub const SEPARADOR: &str = "--------------------------------";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineaCarrito {
    pub nombre: String,
    pub cantidad: i32,
    pub precio_unitario: Decimal,
}

impl LineaCarrito {
    /// Satura en vez de desbordar; `Carrito::agregar` ya rechaza esos importes
    pub fn subtotal(&self) -> Decimal {
        self.precio_unitario.saturating_mul(Decimal::from(self.cantidad))
    }

    /// `2 x Ceviche - $25.00`
    pub fn render(&self) -> String {
        format!("{} x {} - {}", self.cantidad, self.nombre, format_moneda(self.subtotal()))
    }
}

#[derive(Debug, Clone)]
pub struct Carrito {
    pub mesa_id: i32,
    /// Sesión que abrió la mesa
    pub abierto_por: Uuid,
    lineas: Vec<LineaCarrito>,
}

impl Carrito {
    pub fn new(mesa_id: i32, abierto_por: Uuid) -> Self {
        Self { mesa_id, abierto_por, lineas: Vec::new() }
    }

    /// Añadir una línea. Si el importe de la línea o el total no caben en un
    /// `Decimal`, el carrito no cambia.
    pub fn agregar(
        &mut self,
        nombre: impl Into<String>,
        cantidad: i32,
        precio_unitario: Decimal,
    ) -> Result<(), AppError> {
        let cabe = precio_unitario
            .checked_mul(Decimal::from(cantidad))
            .and_then(|subtotal| self.total().checked_add(subtotal))
            .is_some();
        if !cabe {
            return Err(AppError::BadRequest(
                "El importe del pedido excede el máximo permitido.".to_string(),
            ));
        }

        self.lineas.push(LineaCarrito {
            nombre: nombre.into(),
            cantidad,
            precio_unitario,
        });
        Ok(())
    }

    pub fn lineas(&self) -> &[LineaCarrito] {
        &self.lineas
    }

    pub fn is_empty(&self) -> bool {
        self.lineas.is_empty()
    }

    pub fn vaciar(&mut self) {
        self.lineas.clear();
    }

    pub fn total(&self) -> Decimal {
        self.lineas
            .iter()
            .fold(Decimal::ZERO, |total, linea| total.saturating_add(linea.subtotal()))
    }

    /// Vista del carrito: una línea por item y, si hay items, el total
    pub fn render(&self) -> Vec<String> {
        let mut vista: Vec<String> = self.lineas.iter().map(LineaCarrito::render).collect();
        if !self.lineas.is_empty() {
            vista.push(SEPARADOR.to_string());
            vista.push(format!("TOTAL: {}", format_moneda(self.total())));
        }
        vista
    }

    /// Resumen que se muestra al confirmar el pedido
    pub fn recibo(&self) -> String {
        let mut recibo = String::from("--- PEDIDO REALIZADO CON ÉXITO ---\n\n");
        for linea in &self.lineas {
            recibo.push_str(&linea.render());
            recibo.push('\n');
        }
        recibo.push_str(SEPARADOR);
        recibo.push('\n');
        recibo.push_str(&format!("TOTAL A PAGAR: {}", format_moneda(self.total())));
        recibo
    }
}
