//! Base de datos en memoria para los tests de integración
//!
//! `FakeDb` implementa todos los repositorios y cuenta las llamadas que los
//! tests necesitan observar.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use sifood_pos::config::EnvironmentConfig;
use sifood_pos::models::ingrediente::Ingrediente;
use sifood_pos::models::mesa::MesaRow;
use sifood_pos::models::pedido::{FacturaCabecera, FacturaDetalle, NuevoPedido};
use sifood_pos::models::plato::Plato;
use sifood_pos::models::reporte::{PlatoMasVendido, VentasMesero};
use sifood_pos::models::usuario::{Empleado, NuevoEmpleado, UsuarioAutenticado};
use sifood_pos::repositories::{
    IngredienteRepository, MesaRepository, PedidoRepository, PlatoRepository, ReporteRepository,
    Repositorios, UsuarioRepository,
};
use sifood_pos::routes::create_router;
use sifood_pos::state::AppState;
use sifood_pos::utils::errors::AppError;

#[derive(Debug, Clone)]
pub struct FakeUsuario {
    pub id: i32,
    pub nombre_completo: String,
    pub nombre_usuario: String,
    pub clave: String,
    pub rol_app: String,
    pub activo: bool,
}

#[derive(Debug, Clone)]
pub struct FakePlato {
    pub plato: Plato,
    pub disponible: bool,
}

/// Pedido guardado: id, cabecera y líneas con el plato ya resuelto
#[derive(Debug, Clone)]
pub struct PedidoGuardado {
    pub id: i32,
    pub pedido: NuevoPedido,
    pub cerrado: Option<(Decimal, Decimal, Decimal)>,
}

pub struct FakeDb {
    pub usuarios: Mutex<Vec<FakeUsuario>>,
    pub mesas: Mutex<HashMap<i32, String>>,
    pub platos: Mutex<Vec<FakePlato>>,
    pub pedidos: Mutex<Vec<PedidoGuardado>>,
    pub ingredientes: Mutex<Vec<Ingrediente>>,
    pub platos_vendidos: Vec<PlatoMasVendido>,
    pub ventas_meseros: Vec<VentasMesero>,
    pub caida: AtomicBool,
    pub falla_facturar: AtomicBool,
    pub llamadas_stock: AtomicUsize,
    pub llamadas_listar_ingredientes: AtomicUsize,
    pub llamadas_facturar: AtomicUsize,
    pub llamadas_login: AtomicUsize,
}

fn usuario(id: i32, nombre: &str, usuario: &str, clave: &str, rol: &str, activo: bool) -> FakeUsuario {
    FakeUsuario {
        id,
        nombre_completo: nombre.to_string(),
        nombre_usuario: usuario.to_string(),
        clave: clave.to_string(),
        rol_app: rol.to_string(),
        activo,
    }
}

fn plato(nombre: &str, precio: i64, disponible: bool) -> FakePlato {
    FakePlato {
        plato: Plato {
            nombre: nombre.to_string(),
            descripcion: None,
            precio: Decimal::new(precio, 2),
            imagen_url: None,
        },
        disponible,
    }
}

impl FakeDb {
    /// Salón de seis mesas libres, tres empleados y un menú corto
    pub fn sembrado() -> Arc<Self> {
        let mesas = (1..=6).map(|id| (id, "disponible".to_string())).collect();
        Arc::new(Self {
            usuarios: Mutex::new(vec![
                usuario(1, "Carlos Ruiz", "cruiz_admin", "admin123", "Administrador", true),
                usuario(2, "Ana Gómez", "agomez_mesera", "mesa123", "Mesero", true),
                usuario(3, "Luis Paredes", "lparedes_cocina", "cocina123", "Cocinero", true),
                usuario(4, "Rosa Díaz", "rdiaz_mesera", "mesa456", "Mesero", false),
            ]),
            mesas: Mutex::new(mesas),
            platos: Mutex::new(vec![
                plato("Ceviche", 1250, true),
                plato("Lomo Saltado", 1800, true),
                plato("Chicha", 300, true),
                plato("Causa Limeña", 900, false),
            ]),
            pedidos: Mutex::new(Vec::new()),
            ingredientes: Mutex::new(vec![Ingrediente {
                id: 7,
                nombre: "Limón".to_string(),
                stock_disponible: 12.5,
                unidad_medida: "kg".to_string(),
            }]),
            platos_vendidos: Vec::new(),
            ventas_meseros: Vec::new(),
            caida: AtomicBool::new(false),
            falla_facturar: AtomicBool::new(false),
            llamadas_stock: AtomicUsize::new(0),
            llamadas_listar_ingredientes: AtomicUsize::new(0),
            llamadas_facturar: AtomicUsize::new(0),
            llamadas_login: AtomicUsize::new(0),
        })
    }

    pub fn estado_mesa(&self, mesa_id: i32) -> String {
        self.mesas.lock().unwrap().get(&mesa_id).cloned().unwrap_or_default()
    }

    pub fn fijar_estado(&self, mesa_id: i32, estado: &str) {
        self.mesas.lock().unwrap().insert(mesa_id, estado.to_string());
    }

    pub fn fijar_precio(&self, nombre: &str, precio: Decimal) {
        let mut platos = self.platos.lock().unwrap();
        if let Some(p) = platos.iter_mut().find(|p| p.plato.nombre == nombre) {
            p.plato.precio = precio;
        }
    }

    pub fn fijar_disponible(&self, nombre: &str, disponible: bool) {
        let mut platos = self.platos.lock().unwrap();
        if let Some(p) = platos.iter_mut().find(|p| p.plato.nombre == nombre) {
            p.disponible = disponible;
        }
    }

    pub fn pedidos(&self) -> Vec<PedidoGuardado> {
        self.pedidos.lock().unwrap().clone()
    }

    fn revisar_conexion(&self) -> Result<(), AppError> {
        if self.caida.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UsuarioRepository for FakeDb {
    async fn verificar_credenciales(
        &self,
        nombre_usuario: &str,
        clave: &str,
    ) -> Result<Option<UsuarioAutenticado>, AppError> {
        self.llamadas_login.fetch_add(1, Ordering::SeqCst);
        self.revisar_conexion()?;
        let usuarios = self.usuarios.lock().unwrap();
        Ok(usuarios
            .iter()
            .find(|u| u.nombre_usuario == nombre_usuario && u.clave == clave && u.activo)
            .map(|u| UsuarioAutenticado {
                id: u.id,
                nombre_completo: u.nombre_completo.clone(),
                rol_app: u.rol_app.clone(),
            }))
    }

    async fn listar(&self) -> Result<Vec<Empleado>, AppError> {
        self.revisar_conexion()?;
        let usuarios = self.usuarios.lock().unwrap();
        Ok(usuarios
            .iter()
            .map(|u| Empleado {
                id: u.id,
                nombre_completo: u.nombre_completo.clone(),
                nombre_usuario: u.nombre_usuario.clone(),
                rol_app: u.rol_app.clone(),
                activo: u.activo,
            })
            .collect())
    }

    async fn registrar(&self, empleado: &NuevoEmpleado) -> Result<(), AppError> {
        self.revisar_conexion()?;
        let mut usuarios = self.usuarios.lock().unwrap();
        if usuarios.iter().any(|u| u.nombre_usuario == empleado.nombre_usuario) {
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        }
        let id = usuarios.len() as i32 + 1;
        usuarios.push(usuario(
            id,
            &empleado.nombre_completo,
            &empleado.nombre_usuario,
            &empleado.clave,
            empleado.rol.as_str(),
            empleado.activo,
        ));
        Ok(())
    }
}

#[async_trait]
impl MesaRepository for FakeDb {
    async fn listar_estados(&self) -> Result<Vec<MesaRow>, AppError> {
        self.revisar_conexion()?;
        let mesas = self.mesas.lock().unwrap();
        Ok(mesas
            .iter()
            .map(|(id, estado)| MesaRow { id: *id, estado: estado.clone() })
            .collect())
    }

    async fn ocupar(&self, mesa_id: i32) -> Result<bool, AppError> {
        self.revisar_conexion()?;
        let mut mesas = self.mesas.lock().unwrap();
        match mesas.get_mut(&mesa_id) {
            Some(estado) if estado.eq_ignore_ascii_case("disponible") => {
                *estado = "ocupada".to_string();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn facturar(&self, mesa_id: i32, propina: Decimal) -> Result<Option<i32>, AppError> {
        self.llamadas_facturar.fetch_add(1, Ordering::SeqCst);
        self.revisar_conexion()?;
        if self.falla_facturar.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        }

        let mut pedidos = self.pedidos.lock().unwrap();
        let pedido = pedidos
            .iter_mut()
            .rev()
            .find(|p| p.pedido.mesa_id == mesa_id && p.cerrado.is_none());

        let pedido_id = pedido.map(|p| {
            let subtotal: Decimal = p.pedido.lineas.iter().map(|l| l.subtotal()).sum();
            let monto_propina = (subtotal * propina / Decimal::from(100)).round_dp(2);
            p.cerrado = Some((subtotal, monto_propina, subtotal + monto_propina));
            p.id
        });

        self.mesas.lock().unwrap().insert(mesa_id, "disponible".to_string());
        Ok(pedido_id)
    }
}

#[async_trait]
impl PlatoRepository for FakeDb {
    async fn listar_disponibles(&self) -> Result<Vec<Plato>, AppError> {
        self.revisar_conexion()?;
        let mut platos: Vec<Plato> = self
            .platos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.disponible)
            .map(|p| p.plato.clone())
            .collect();
        platos.sort_by(|a, b| a.nombre.cmp(&b.nombre));
        Ok(platos)
    }

    async fn buscar_disponible(&self, nombre: &str) -> Result<Option<Plato>, AppError> {
        self.revisar_conexion()?;
        Ok(self
            .platos
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.disponible && p.plato.nombre == nombre)
            .map(|p| p.plato.clone()))
    }
}

#[async_trait]
impl PedidoRepository for FakeDb {
    /// Todo o nada: un plato que ya no está disponible no deja nada guardado
    async fn crear(&self, pedido: &NuevoPedido) -> Result<i32, AppError> {
        self.revisar_conexion()?;
        let disponibles = self.platos.lock().unwrap().clone();
        if pedido
            .lineas
            .iter()
            .any(|l| !disponibles.iter().any(|p| p.disponible && p.plato.nombre == l.nombre))
        {
            return Err(AppError::Internal("plato inexistente".to_string()));
        }

        let mut pedidos = self.pedidos.lock().unwrap();
        let id = pedidos.len() as i32 + 100;
        pedidos.push(PedidoGuardado { id, pedido: pedido.clone(), cerrado: None });
        Ok(id)
    }

    async fn cabecera_factura(&self, pedido_id: i32) -> Result<Option<FacturaCabecera>, AppError> {
        self.revisar_conexion()?;
        let pedidos = self.pedidos.lock().unwrap();
        let usuarios = self.usuarios.lock().unwrap();
        Ok(pedidos.iter().find(|p| p.id == pedido_id).map(|p| {
            let (subtotal, propina, total) = p.cerrado.unwrap_or_default();
            let mesero = usuarios
                .iter()
                .find(|u| u.id == p.pedido.usuario_id_mesero)
                .map(|u| u.nombre_completo.clone())
                .unwrap_or_default();
            FacturaCabecera {
                mesa_id: p.pedido.mesa_id,
                mesero,
                fecha_cierre: None,
                subtotal,
                propina,
                total,
            }
        }))
    }

    async fn detalles_factura(&self, pedido_id: i32) -> Result<Vec<FacturaDetalle>, AppError> {
        self.revisar_conexion()?;
        let pedidos = self.pedidos.lock().unwrap();
        Ok(pedidos
            .iter()
            .find(|p| p.id == pedido_id)
            .map(|p| {
                p.pedido
                    .lineas
                    .iter()
                    .map(|l| FacturaDetalle {
                        cantidad: l.cantidad,
                        plato: l.nombre.clone(),
                        precio_unitario: l.precio_unitario,
                        subtotal: l.subtotal(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl IngredienteRepository for FakeDb {
    async fn listar(&self) -> Result<Vec<Ingrediente>, AppError> {
        self.llamadas_listar_ingredientes.fetch_add(1, Ordering::SeqCst);
        self.revisar_conexion()?;
        Ok(self.ingredientes.lock().unwrap().clone())
    }

    async fn actualizar_stock(&self, ingrediente_id: i32, nuevo_stock: f64) -> Result<(), AppError> {
        self.llamadas_stock.fetch_add(1, Ordering::SeqCst);
        self.revisar_conexion()?;
        let mut ingredientes = self.ingredientes.lock().unwrap();
        if let Some(ingrediente) = ingredientes.iter_mut().find(|i| i.id == ingrediente_id) {
            ingrediente.stock_disponible = nuevo_stock;
        }
        Ok(())
    }
}

#[async_trait]
impl ReporteRepository for FakeDb {
    async fn platos_mas_vendidos(&self, limite: i64) -> Result<Vec<PlatoMasVendido>, AppError> {
        self.revisar_conexion()?;
        Ok(self.platos_vendidos.iter().take(limite as usize).cloned().collect())
    }

    async fn mesero_del_periodo(&self) -> Result<Option<VentasMesero>, AppError> {
        self.revisar_conexion()?;
        Ok(self.ventas_meseros.first().cloned())
    }
}

/// App de prueba: router real sobre `FakeDb`
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: Arc<FakeDb>,
    pub facturas_dir: PathBuf,
}

impl TestApp {
    pub fn new(db: Arc<FakeDb>) -> Self {
        let facturas_dir =
            std::env::temp_dir().join(format!("sifood-facturas-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&facturas_dir).unwrap();

        let config = EnvironmentConfig {
            facturas_dir: facturas_dir.clone(),
            ..EnvironmentConfig::default()
        };
        let repos = Repositorios {
            usuarios: db.clone(),
            mesas: db.clone(),
            platos: db.clone(),
            pedidos: db.clone(),
            ingredientes: db.clone(),
            reportes: db.clone(),
        };
        let state = AppState::new(config, repos);
        let router = create_router(state.clone());

        Self { router, state, db, facturas_dir }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, text) = self.request(method, uri, token, body).await;
        let value = serde_json::from_str(&text).unwrap_or(Value::Null);
        (status, value)
    }

    /// Iniciar sesión y devolver el token
    pub async fn login(&self, nombre_usuario: &str, clave: &str) -> String {
        let (status, body) = self
            .json(
                Method::POST,
                "/api/auth/login",
                None,
                Some(serde_json::json!({ "nombre_usuario": nombre_usuario, "clave": clave })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login fallido: {}", body);
        body["token"].as_str().unwrap().to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.facturas_dir);
    }
}
