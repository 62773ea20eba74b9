//! Carritos abiertos, uno por mesa ocupada

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::carrito::Carrito;

#[derive(Clone, Default)]
pub struct CartStore {
    carritos: Arc<RwLock<HashMap<i32, Carrito>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abrir un carrito vacío para la mesa; reemplaza uno previo
    pub async fn abrir(&self, mesa_id: i32, token: Uuid) {
        self.carritos
            .write()
            .await
            .insert(mesa_id, Carrito::new(mesa_id, token));
    }

    pub async fn obtener(&self, mesa_id: i32) -> Option<Carrito> {
        self.carritos.read().await.get(&mesa_id).cloned()
    }

    /// Aplicar un cambio al carrito de la mesa, si existe, y devolver su resultado
    pub async fn modificar<F, T>(&self, mesa_id: i32, cambio: F) -> Option<T>
    where
        F: FnOnce(&mut Carrito) -> T,
    {
        let mut carritos = self.carritos.write().await;
        let carrito = carritos.get_mut(&mesa_id)?;
        Some(cambio(carrito))
    }

    /// Cerrar el carrito de la mesa (pedido confirmado)
    pub async fn cerrar(&self, mesa_id: i32) -> Option<Carrito> {
        self.carritos.write().await.remove(&mesa_id)
    }

    /// Descartar los carritos abiertos por una sesión
    pub async fn descartar_de(&self, token: &Uuid) -> usize {
        let mut carritos = self.carritos.write().await;
        let antes = carritos.len();
        carritos.retain(|_, c| &c.abierto_por != token);
        antes - carritos.len()
    }
}
