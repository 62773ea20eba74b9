//! Exportación de facturas a CSV
//!
//! El documento se arma completo en memoria y se escribe de una vez, así que
//! un fallo en las consultas nunca deja un archivo a medias.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::pedido::Factura;
use crate::utils::errors::AppError;
use crate::utils::money::format_moneda;

/// Nombre por defecto del archivo de una factura
pub fn nombre_archivo(pedido_id: i32) -> String {
    format!("factura_pedido_{}.csv", pedido_id)
}

pub fn ruta_destino(directorio: &Path, pedido_id: i32) -> PathBuf {
    directorio.join(nombre_archivo(pedido_id))
}

/// Comillas solo para el nombre del plato; las internas se duplican
fn entre_comillas(texto: &str) -> String {
    format!("\"{}\"", texto.replace('"', "\"\""))
}

/// Texto CSV de la factura: cabecera, detalle y totales separados por líneas en blanco
pub fn render_csv(factura: &Factura) -> String {
    let cabecera = &factura.cabecera;
    let fecha = cabecera
        .fecha_cierre
        .map(|f| f.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();

    let mut csv = String::new();
    csv.push_str(&format!("Factura,Pedido {}\n", factura.pedido_id));
    csv.push_str(&format!("Mesa,{}\n", cabecera.mesa_id));
    csv.push_str(&format!("Mesero,{}\n", cabecera.mesero));
    csv.push_str(&format!("Fecha,{}\n", fecha));
    csv.push('\n');

    csv.push_str("Detalle\n");
    csv.push_str("Cantidad,Plato,Precio Unitario,Subtotal\n");
    for detalle in &factura.detalles {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            detalle.cantidad,
            entre_comillas(&detalle.plato),
            format_moneda(detalle.precio_unitario),
            format_moneda(detalle.subtotal)
        ));
    }
    csv.push('\n');

    csv.push_str(&format!("Subtotal,{}\n", format_moneda(cabecera.subtotal)));
    csv.push_str(&format!("Propina,{}\n", format_moneda(cabecera.propina)));
    csv.push_str(&format!("Total,{}\n", format_moneda(cabecera.total)));
    csv
}

/// Escribir la factura en `destino`
pub async fn exportar(factura: &Factura, destino: &Path) -> Result<(), AppError> {
    let contenido = render_csv(factura);
    tokio::fs::write(destino, contenido).await.map_err(|e| {
        tracing::error!("❌ Error escribiendo {}: {}", destino.display(), e);
        AppError::Io(e)
    })?;
    info!("📄 Factura del pedido {} exportada a {}", factura.pedido_id, destino.display());
    Ok(())
}
