mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use std::sync::atomic::Ordering;

use common::{FakeDb, TestApp};

#[tokio::test]
async fn test_abrir_mesa_3() {
    let app = TestApp::new(FakeDb::sembrado());
    let token = app.login("agomez_mesera", "mesa123").await;

    let (status, body) = app.json(Method::GET, "/api/mesas", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let mesa = &body["mesas"][2];
    assert_eq!(mesa["id"], 3);
    assert_eq!(mesa["estado"], "disponible");
    assert_eq!(mesa["color_fondo"], "#009933");

    let (status, body) = app.json(Method::GET, "/api/mesas/3", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accion"], "abrir_pedido");

    let (status, body) = app
        .json(Method::POST, "/api/mesas/3/abrir", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mesa_id"], 3);
    assert_eq!(body["mesas"][2]["estado"], "ocupada");
    assert_eq!(body["mesas"][2]["color_fondo"], "#CC0000");
    assert_eq!(app.db.estado_mesa(3), "ocupada");

    let (status, body) = app
        .json(Method::GET, "/api/mesas/3/carrito", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mesa_id"], 3);
    assert_eq!(body["lineas"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_estado_desconocido_en_gris() {
    let db = FakeDb::sembrado();
    db.fijar_estado(5, "reservada");
    db.mesas.lock().unwrap().remove(&6);
    let app = TestApp::new(db);
    let token = app.login("agomez_mesera", "mesa123").await;

    let (_, body) = app.json(Method::GET, "/api/mesas", Some(&token), None).await;
    assert_eq!(body["mesas"][4]["estado"], "reservada");
    assert_eq!(body["mesas"][4]["color_fondo"], "#C0C0C0");
    assert_eq!(body["mesas"][5]["estado"], "desconocido");
    assert_eq!(body["mesas"][5]["color_texto"], "#000000");

    let (_, body) = app.json(Method::GET, "/api/mesas/5", Some(&token), None).await;
    assert_eq!(body["accion"], "ninguna");
}

#[tokio::test]
async fn test_transiciones_rechazadas() {
    let db = FakeDb::sembrado();
    db.fijar_estado(1, "OCUPADA");
    db.fijar_estado(4, "limpieza");
    let app = TestApp::new(db);
    let token = app.login("agomez_mesera", "mesa123").await;

    // ocupada (sin importar mayúsculas) no se vuelve a abrir
    let (status, _) = app.json(Method::POST, "/api/mesas/1/abrir", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // disponible no se factura
    let (status, _) = app
        .json(Method::POST, "/api/mesas/2/factura", Some(&token), Some(json!({ "propina": "10" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(app.db.estado_mesa(2), "disponible");

    // estado desconocido no ofrece ninguna transición
    let (status, _) = app.json(Method::POST, "/api/mesas/4/abrir", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(app.db.estado_mesa(4), "limpieza");

    let (status, _) = app.json(Method::POST, "/api/mesas/9/abrir", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(app.db.llamadas_facturar.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_facturar_cancelado_o_propina_invalida() {
    let db = FakeDb::sembrado();
    db.fijar_estado(3, "ocupada");
    let app = TestApp::new(db);
    let token = app.login("agomez_mesera", "mesa123").await;

    // Sin campo de propina: se canceló el diálogo
    let (status, body) = app
        .json(Method::POST, "/api/mesas/3/factura", Some(&token), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cancelado"], true);
    assert_eq!(body["success"], false);

    for invalida in ["", "  ", "diez"] {
        let (status, body) = app
            .json(Method::POST, "/api/mesas/3/factura", Some(&token), Some(json!({ "propina": invalida })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Por favor, ingrese un número válido para la propina.");
    }

    assert_eq!(app.db.llamadas_facturar.load(Ordering::SeqCst), 0);
    assert_eq!(app.db.estado_mesa(3), "ocupada");
}

#[tokio::test]
async fn test_facturar_libera_la_mesa() {
    let app = TestApp::new(FakeDb::sembrado());
    let token = app.login("agomez_mesera", "mesa123").await;

    app.json(Method::POST, "/api/mesas/3/abrir", Some(&token), None).await;
    app.json(
        Method::POST,
        "/api/mesas/3/carrito",
        Some(&token),
        Some(json!({ "nombre": "Ceviche", "cantidad": "2" })),
    )
    .await;
    let (status, _) = app.json(Method::POST, "/api/mesas/3/pedido", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .json(Method::POST, "/api/mesas/3/factura", Some(&token), Some(json!({ "propina": "10" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["mensaje"], "¡Mesa 3 facturada con éxito!");
    assert_eq!(body["pedido_id"], 100);
    assert!(body["archivo"].is_null());
    assert_eq!(body["mesas"][2]["estado"], "disponible");
    assert_eq!(app.db.estado_mesa(3), "disponible");
    assert_eq!(app.db.llamadas_facturar.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_facturar_fallido_refresca_igual() {
    let db = FakeDb::sembrado();
    db.fijar_estado(3, "ocupada");
    db.falla_facturar.store(true, Ordering::SeqCst);
    let app = TestApp::new(db);
    let token = app.login("agomez_mesera", "mesa123").await;

    let (status, body) = app
        .json(Method::POST, "/api/mesas/3/factura", Some(&token), Some(json!({ "propina": "10" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["cancelado"], false);
    assert_eq!(body["mensaje"], "Error al facturar la mesa.");
    assert_eq!(body["mesas"][2]["estado"], "ocupada");
    assert_eq!(app.db.estado_mesa(3), "ocupada");
}

#[tokio::test]
async fn test_base_caida_en_tablero() {
    let db = FakeDb::sembrado();
    let app = TestApp::new(db);
    let token = app.login("agomez_mesera", "mesa123").await;

    app.db.caida.store(true, Ordering::SeqCst);
    let (status, body) = app.json(Method::GET, "/api/mesas", Some(&token), None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Error de conexión con la base de datos.");
}
