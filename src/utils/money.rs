//! Formato de importes

use rust_decimal::{Decimal, RoundingStrategy};

/// Importe con signo de moneda y dos decimales, p. ej. `$25.00`.
pub fn format_moneda(valor: Decimal) -> String {
    let redondeado = valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", redondeado)
}
