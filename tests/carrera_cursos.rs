mod common;
use common::*;

use axum::{http::StatusCode, Router};
use serde_json::{json, Value};

async fn agregar(app: &Router, carrera: &str, curso: &str, orden: i64) -> Value {
    let (status, body) = post(
        app,
        "/carreras-cursos",
        json!({ "codigoCarrera": carrera, "codigoCurso": curso, "orden": orden }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

/// (código de curso, orden) del plan, en orden.
async fn plan(app: &Router, carrera_id: i64) -> Vec<(String, i64)> {
    let (status, cursos) = get(app, &format!("/carreras/{carrera_id}/cursos")).await;
    assert_eq!(status, StatusCode::OK);
    cursos
        .as_array()
        .expect("lista")
        .iter()
        .map(|c| {
            (
                c["curso"]["codigo"].as_str().expect("codigo").to_string(),
                c["orden"].as_i64().expect("orden"),
            )
        })
        .collect()
}

fn esperado(pares: &[(&str, i64)]) -> Vec<(String, i64)> {
    pares.iter().map(|(c, o)| (c.to_string(), *o)).collect()
}

/// Carrera C001 con los cursos A, B y C en ese orden.
async fn carrera_abc(app: &Router) -> (i64, Value, Value, Value) {
    let carrera = crear_carrera(app, "C001").await;
    for codigo in ["A", "B", "C"] {
        crear_curso(app, codigo, 3).await;
    }
    let a = agregar(app, "C001", "A", 0).await;
    let b = agregar(app, "C001", "B", 1).await;
    let c = agregar(app, "C001", "C", 2).await;
    (id(&carrera), a, b, c)
}

#[tokio::test]
async fn mover_al_inicio_corre_a_los_demas() {
    let (app, _pool) = test_app().await;
    let (carrera, _a, _b, c) = carrera_abc(&app).await;
    assert_eq!(plan(&app, carrera).await, esperado(&[("A", 0), ("B", 1), ("C", 2)]));

    let (status, movida) = put(
        &app,
        &format!("/carreras-cursos/{}", id(&c)),
        json!({ "orden": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movida["orden"], 0);
    assert_eq!(movida["codigoCurso"], "C");

    assert_eq!(plan(&app, carrera).await, esperado(&[("C", 0), ("A", 1), ("B", 2)]));
}

#[tokio::test]
async fn posicion_mas_alla_del_final_queda_al_final() {
    let (app, _pool) = test_app().await;
    let (carrera, a, _b, _c) = carrera_abc(&app).await;

    let (status, _) = put(
        &app,
        &format!("/carreras-cursos/{}", id(&a)),
        json!({ "orden": 50 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan(&app, carrera).await, esperado(&[("B", 0), ("C", 1), ("A", 2)]));

    let (status, body) = put(
        &app,
        &format!("/carreras-cursos/{}", id(&a)),
        json!({ "orden": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn insertar_en_medio_del_plan() {
    let (app, _pool) = test_app().await;
    let (carrera, ..) = carrera_abc(&app).await;
    crear_curso(&app, "D", 2).await;

    agregar(&app, "C001", "D", 1).await;
    assert_eq!(
        plan(&app, carrera).await,
        esperado(&[("A", 0), ("D", 1), ("B", 2), ("C", 3)])
    );
}

#[tokio::test]
async fn quitar_compacta_el_orden() {
    let (app, _pool) = test_app().await;
    let (carrera, _a, b, _c) = carrera_abc(&app).await;

    let (status, body) = delete(&app, &format!("/carreras-cursos/{}", id(&b))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["mensaje"].as_str().is_some());
    assert_eq!(plan(&app, carrera).await, esperado(&[("A", 0), ("C", 1)]));

    let (status, _) = delete(&app, &format!("/carreras-cursos/{}", id(&b))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn agregar_por_ids_es_idempotente() {
    let (app, _pool) = test_app().await;
    let carrera = id(&crear_carrera(&app, "C001").await);
    let x = id(&crear_curso(&app, "X", 3).await);
    let y = id(&crear_curso(&app, "Y", 3).await);

    let uri_x = format!("/carreras/{carrera}/cursos/{x}");
    let (status, primera) = post(&app, &uri_x, json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, segunda) = post(&app, &uri_x, json!({})).await;
    assert_eq!(id(&primera), id(&segunda));

    post(&app, &format!("/carreras/{carrera}/cursos/{y}"), json!({})).await;
    assert_eq!(plan(&app, carrera).await, esperado(&[("X", 0), ("Y", 1)]));

    let (status, _) = delete(&app, &uri_x).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan(&app, carrera).await, esperado(&[("Y", 0)]));

    let (status, _) = delete(&app, &uri_x).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(&app, &format!("/carreras/{carrera}/cursos/999"), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = post(&app, &format!("/carreras/999/cursos/{x}"), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn codigos_desconocidos_son_invalidos() {
    let (app, _pool) = test_app().await;
    crear_carrera(&app, "C001").await;
    crear_curso(&app, "A", 3).await;

    let (status, body) = post(
        &app,
        "/carreras-cursos",
        json!({ "codigoCarrera": "C404", "codigoCurso": "A" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");

    let (status, _) = post(
        &app,
        "/carreras-cursos",
        json!({ "codigoCarrera": "C001", "codigoCurso": "NOPE" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vistas_del_plan_por_carrera_y_por_curso() {
    let (app, _pool) = test_app().await;
    let (carrera, a, ..) = carrera_abc(&app).await;
    let otra = crear_carrera(&app, "C002").await;
    agregar(&app, "C002", "A", 0).await;

    let (status, detalle) = get(&app, &format!("/carreras/{carrera}/detalle")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detalle["carrera"]["codigo"], "C001");
    let codigos: Vec<&str> = detalle["cursos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["curso"]["codigo"].as_str().unwrap())
        .collect();
    assert_eq!(codigos, vec!["A", "B", "C"]);

    let (status, por_codigo) = get(&app, "/carreras-cursos/carrera/C001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(por_codigo.as_array().unwrap().len(), 3);
    assert_eq!(por_codigo[0], a);

    let (status, _) = get(&app, "/carreras-cursos/carrera/C404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, carreras) = get(&app, &format!("/cursos/{}/carreras", a["cursoId"])).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = carreras.as_array().unwrap().iter().map(id).collect();
    assert_eq!(ids, vec![carrera, id(&otra)]);

    let (_, todas) = get(&app, "/carreras-cursos").await;
    assert_eq!(todas.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn borrar_la_carrera_borra_su_plan_pero_no_los_cursos() {
    let (app, _pool) = test_app().await;
    let (carrera, a, ..) = carrera_abc(&app).await;

    let (status, body) = delete(&app, &format!("/cursos/{}", a["cursoId"])).await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (status, _) = delete(&app, &format!("/carreras/{carrera}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, asociaciones) = get(&app, "/carreras-cursos").await;
    assert_eq!(asociaciones, json!([]));
    let (_, cursos) = get(&app, "/cursos").await;
    assert_eq!(cursos.as_array().unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ubicaciones_concurrentes_no_fallan_y_el_orden_queda_contiguo() {
    let (app, _pool, _dir) = test_app_en_archivo(5).await;
    let carrera = id(&crear_carrera(&app, "C001").await);
    let codigos_curso = ["A", "B", "C", "D"];
    for codigo in codigos_curso {
        crear_curso(&app, codigo, 3).await;
    }

    let solicitudes = (0..40)
        .map(|i| {
            let cuerpo = json!({
                "codigoCarrera": "C001",
                "codigoCurso": codigos_curso[i % codigos_curso.len()],
                "orden": i % 5
            });
            (axum::http::Method::POST, "/carreras-cursos".to_string(), Some(cuerpo))
        })
        .collect();
    let codigos = en_paralelo(&app, solicitudes).await;

    assert!(codigos.iter().all(|c| *c == StatusCode::CREATED), "{codigos:?}");
    let ordenes: Vec<i64> = plan(&app, carrera).await.into_iter().map(|(_, o)| o).collect();
    assert_eq!(ordenes, vec![0, 1, 2, 3]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mover_una_asociacion_borrada_no_la_vuelve_a_crear() {
    let (app, _pool, _dir) = test_app_en_archivo(5).await;
    let carrera = id(&crear_carrera(&app, "C001").await);
    let mut asociaciones = Vec::new();
    for (orden, codigo) in ["A", "B", "C", "D"].into_iter().enumerate() {
        crear_curso(&app, codigo, 3).await;
        asociaciones.push(id(&agregar(&app, "C001", codigo, orden as i64).await));
    }

    // Cada asociación recibe a la vez un borrado y varios movimientos
    let mut solicitudes = Vec::new();
    for asociacion in &asociaciones {
        let uri = format!("/carreras-cursos/{asociacion}");
        solicitudes.push((axum::http::Method::DELETE, uri.clone(), None));
        for orden in 0..3 {
            solicitudes.push((axum::http::Method::PUT, uri.clone(), Some(json!({ "orden": orden }))));
        }
    }
    let codigos = en_paralelo(&app, solicitudes).await;

    assert!(
        codigos
            .iter()
            .all(|c| *c == StatusCode::OK || *c == StatusCode::NOT_FOUND),
        "{codigos:?}"
    );
    assert!(plan(&app, carrera).await.is_empty());
    let (_, todas) = get(&app, "/carreras-cursos").await;
    assert_eq!(todas, json!([]));

    let (status, _) = put(
        &app,
        &format!("/carreras-cursos/{}", asociaciones[0]),
        json!({ "orden": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
