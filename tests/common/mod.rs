#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use gestion_academica::{db, state::AppState, web::routes::create_router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Router real sobre una base en memoria con las migraciones aplicadas.
/// Una sola conexión: todas las consultas ven la misma base.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = db::connect("sqlite::memory:", 1).await.expect("connect");
    db::run_migrations(&pool).await.expect("migrations");
    let state = AppState {
        db_pool: pool.clone(),
        bcrypt_cost: 4, // mínimo permitido, para que los tests sean rápidos
    };
    (create_router(state), pool)
}

/// Igual que `test_app`, pero sobre un archivo y con varias conexiones,
/// para ejercitar escrituras concurrentes. El directorio vive lo que el `TempDir`.
pub async fn test_app_en_archivo(conexiones: u32) -> (Router, SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("concurrencia.db").display());
    let pool = db::connect(&url, conexiones).await.expect("connect");
    db::run_migrations(&pool).await.expect("migrations");
    let state = AppState {
        db_pool: pool.clone(),
        bcrypt_cost: 4,
    };
    (create_router(state), pool, dir)
}

/// Lanza todas las solicitudes a la vez y devuelve los códigos en orden.
pub async fn en_paralelo(app: &Router, solicitudes: Vec<(Method, String, Option<Value>)>) -> Vec<StatusCode> {
    let tareas: Vec<_> = solicitudes
        .into_iter()
        .map(|(method, uri, body)| {
            let app = app.clone();
            tokio::spawn(async move { send(&app, method, &uri, body).await.0 })
        })
        .collect();

    let mut codigos = Vec::with_capacity(tareas.len());
    for tarea in tareas {
        codigos.push(tarea.await.expect("tarea"));
    }
    codigos
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

// --- Fixtures ---

pub async fn crear_carrera(app: &Router, codigo: &str) -> Value {
    let (status, body) = post(
        app,
        "/carreras",
        json!({ "codigo": codigo, "nombre": format!("Carrera {codigo}"), "titulo": "Bachiller" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn crear_curso(app: &Router, codigo: &str, creditos: i64) -> Value {
    let (status, body) = post(
        app,
        "/cursos",
        json!({
            "codigo": codigo,
            "nombre": format!("Curso {codigo}"),
            "creditos": creditos,
            "horasSemanales": 4
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn crear_profesor(app: &Router, cedula: &str) -> Value {
    let (status, body) = post(
        app,
        "/profesores",
        json!({ "cedula": cedula, "nombre": "Ada Lovelace", "email": "ada@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn crear_alumno(app: &Router, cedula: &str) -> Value {
    let (status, body) = post(
        app,
        "/alumnos",
        json!({
            "cedula": cedula,
            "nombre": "Alice Wonderland",
            "telefono": "88887777",
            "email": "alice@example.com",
            "fechaNacimiento": "2002-05-10",
            "codigoCarrera": "C001"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn crear_ciclo(app: &Router, anio: i64, numero: &str, activo: bool) -> Value {
    let (status, body) = post(
        app,
        "/ciclos",
        json!({
            "anio": anio,
            "numero": numero,
            "fechaInicio": format!("{anio}-03-01"),
            "fechaFin": format!("{anio}-07-15"),
            "activo": activo
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn crear_grupo(
    app: &Router,
    anio: i64,
    numero_ciclo: &str,
    codigo_curso: &str,
    numero_grupo: i64,
    cedula_profesor: Option<&str>,
) -> Value {
    let (status, body) = post(
        app,
        "/grupos",
        json!({
            "anio": anio,
            "numeroCiclo": numero_ciclo,
            "codigoCurso": codigo_curso,
            "numeroGrupo": numero_grupo,
            "horario": "L/W 08:00-10:00",
            "cedulaProfesor": cedula_profesor
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn matricular(app: &Router, alumno_id: i64, grupo_id: i64, nota: Option<i64>) -> Value {
    let (status, body) = post(
        app,
        "/matriculas",
        json!({ "alumnoId": alumno_id, "grupoId": grupo_id, "nota": nota }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub fn id(value: &Value) -> i64 {
    value["id"].as_i64().expect("id")
}
