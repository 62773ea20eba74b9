//! Utilidades de validación
//!
//! Conversión de la entrada libre de los formularios (propina, cantidad,
//! stock) a valores tipados. Todo se valida antes de tocar la base de datos.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::utils::errors::AppError;

/// Interpretar el porcentaje de propina.
///
/// Solo la ausencia del campo equivale a cancelar el diálogo (`Ok(None)`).
/// Texto vacío o en blanco es un error de formato. No se acota el rango:
/// negativos y valores grandes se pasan tal cual.
pub fn parse_propina(input: Option<&str>) -> Result<Option<Decimal>, AppError> {
    let Some(raw) = input else {
        return Ok(None);
    };

    let format_error = || {
        AppError::BadRequest("Por favor, ingrese un número válido para la propina.".to_string())
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format_error());
    }

    Decimal::from_str(raw).map(Some).map_err(|_| format_error())
}

/// Interpretar la cantidad pedida para un plato.
///
/// Texto vacío o cantidades no positivas no añaden nada (`Ok(None)`). El
/// texto se toma tal cual: espacios alrededor son un error de formato.
pub fn parse_cantidad(input: &str) -> Result<Option<i32>, AppError> {
    if input.is_empty() {
        return Ok(None);
    }

    let cantidad: i32 = input
        .parse()
        .map_err(|_| AppError::BadRequest("Por favor, ingrese un número válido.".to_string()))?;

    Ok((cantidad > 0).then_some(cantidad))
}

/// Interpretar el par (id de ingrediente, nuevo stock).
pub fn parse_stock_update(ingrediente_id: &str, nuevo_stock: &str) -> Result<(i32, f64), AppError> {
    let format_error =
        || AppError::BadRequest("Por favor, ingrese valores numéricos válidos.".to_string());

    let id: i32 = ingrediente_id.trim().parse().map_err(|_| format_error())?;
    let stock: f64 = nuevo_stock.trim().parse().map_err(|_| format_error())?;
    if !stock.is_finite() {
        return Err(format_error());
    }

    Ok((id, stock))
}

/// Un identificador SQL simple (schema), apto para interpolar en `SET search_path`.
pub fn is_plain_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_propina_cancelada() {
        assert!(parse_propina(None).unwrap().is_none());
    }

    #[test]
    fn test_propina_en_blanco_es_error_de_formato() {
        assert!(matches!(parse_propina(Some("")), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_propina(Some("   ")), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_propina_valida_y_sin_rango() {
        assert_eq!(parse_propina(Some("10")).unwrap(), Decimal::from_i32(10));
        assert_eq!(parse_propina(Some(" 12.5 ")).unwrap(), Decimal::from_str("12.5").ok());
        assert_eq!(parse_propina(Some("-5")).unwrap(), Decimal::from_i32(-5));
    }

    #[test]
    fn test_propina_invalida() {
        assert!(matches!(parse_propina(Some("diez")), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_cantidad() {
        assert_eq!(parse_cantidad("3").unwrap(), Some(3));
        assert_eq!(parse_cantidad("").unwrap(), None);
        assert_eq!(parse_cantidad("0").unwrap(), None);
        assert_eq!(parse_cantidad("-2").unwrap(), None);
        assert!(parse_cantidad("dos").is_err());
        assert!(parse_cantidad("1.5").is_err());
        assert!(parse_cantidad("  ").is_err());
        assert!(parse_cantidad(" 3 ").is_err());
    }

    #[test]
    fn test_stock_update() {
        assert_eq!(parse_stock_update("4", "12.75").unwrap(), (4, 12.75));
        assert!(parse_stock_update("cuatro", "1").is_err());
        assert!(parse_stock_update("4", "mucho").is_err());
        assert!(parse_stock_update("4", "NaN").is_err());
    }

    #[test]
    fn test_identificador() {
        assert!(is_plain_identifier("sifood_schema"));
        assert!(!is_plain_identifier("public; DROP TABLE mesas"));
        assert!(!is_plain_identifier("1schema"));
        assert!(!is_plain_identifier(""));
    }
}
