mod common;
use common::*;

use axum::{http::StatusCode, Router};
use serde_json::json;

/// Ciclo 2024-1, tres cursos (4, 3 y 2 créditos), un profesor y un grupo
/// por curso. Devuelve los IDs de los grupos.
async fn oferta(app: &Router) -> (i64, i64, i64) {
    crear_ciclo(app, 2024, "1", true).await;
    crear_curso(app, "CS101", 4).await;
    crear_curso(app, "CS202", 3).await;
    crear_curso(app, "BA101", 2).await;
    crear_profesor(app, "P001").await;
    let g1 = crear_grupo(app, 2024, "1", "CS101", 1, Some("P001")).await;
    let g2 = crear_grupo(app, 2024, "1", "CS202", 1, Some("P001")).await;
    let g3 = crear_grupo(app, 2024, "1", "BA101", 1, None).await;
    (id(&g1), id(&g2), id(&g3))
}

// --- Grupos ---

#[tokio::test]
async fn grupo_con_referencias_inexistentes_es_invalido() {
    let (app, _pool) = test_app().await;
    crear_ciclo(&app, 2024, "1", false).await;
    crear_curso(&app, "CS101", 4).await;

    let base = json!({ "anio": 2024, "numeroCiclo": "1", "codigoCurso": "CS101", "numeroGrupo": 1 });

    let mut sin_curso = base.clone();
    sin_curso["codigoCurso"] = json!("NOPE");
    let (status, body) = post(&app, "/grupos", sin_curso).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");

    let mut sin_ciclo = base.clone();
    sin_ciclo["anio"] = json!(1999);
    let (status, _) = post(&app, "/grupos", sin_ciclo).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut sin_profesor = base.clone();
    sin_profesor["cedulaProfesor"] = json!("P404");
    let (status, _) = post(&app, "/grupos", sin_profesor).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut numero_cero = base;
    numero_cero["numeroGrupo"] = json!(0);
    let (status, _) = post(&app, "/grupos", numero_cero).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn llave_compuesta_del_grupo_es_unica() {
    let (app, _pool) = test_app().await;
    crear_ciclo(&app, 2024, "1", false).await;
    crear_curso(&app, "CS101", 4).await;
    let grupo = crear_grupo(&app, 2024, "1", "CS101", 1, None).await;

    let (status, body) = post(
        &app,
        "/grupos",
        json!({ "anio": 2024, "numeroCiclo": "1", "codigoCurso": "CS101", "numeroGrupo": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");

    let (status, encontrado) = get(&app, "/grupos/byCompositeKey/2024/1/CS101/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(encontrado, grupo);

    let (status, _) = get(&app, "/grupos/byCompositeKey/2024/1/CS101/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn consultas_de_grupos_por_curso_profesor_y_ciclo() {
    let (app, _pool) = test_app().await;
    let (g1, g2, g3) = oferta(&app).await;

    let (_, cs101) = get(&app, "/cursos/codigo/CS101").await;
    let (status, por_curso) = get(&app, &format!("/grupos/curso/{}", id(&cs101))).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = por_curso.as_array().unwrap().iter().map(id).collect();
    assert_eq!(ids, vec![g1]);

    // Curso desconocido: lista vacía
    let (status, vacio) = get(&app, "/grupos/curso/999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vacio, json!([]));

    let (_, del_profesor) = get(&app, "/grupos/profesor/P001").await;
    let ids: Vec<i64> = del_profesor.as_array().unwrap().iter().map(id).collect();
    assert_eq!(ids, vec![g1, g2]);

    let (_, del_ciclo) = get(&app, "/grupos/ciclo/2024/1").await;
    let ids: Vec<i64> = del_ciclo.as_array().unwrap().iter().map(id).collect();
    assert_eq!(ids, vec![g1, g2, g3]);
}

// --- Matrículas ---

#[tokio::test]
async fn matricula_duplicada_es_conflicto() {
    let (app, _pool) = test_app().await;
    let (g1, _, _) = oferta(&app).await;
    let alumno = id(&crear_alumno(&app, "A001").await);

    matricular(&app, alumno, g1, None).await;
    let (status, body) = post(
        &app,
        "/matriculas",
        json!({ "alumnoId": alumno, "grupoId": g1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");
}

#[tokio::test]
async fn matricula_con_referencias_o_nota_invalidas() {
    let (app, _pool) = test_app().await;
    let (g1, _, _) = oferta(&app).await;
    let alumno = id(&crear_alumno(&app, "A001").await);

    let (status, _) = post(&app, "/matriculas", json!({ "alumnoId": 999, "grupoId": g1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/matriculas", json!({ "alumnoId": alumno, "grupoId": 999 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(
        &app,
        "/matriculas",
        json!({ "alumnoId": alumno, "grupoId": g1, "nota": 101 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn matricula_calificada_no_se_puede_retirar() {
    let (app, _pool) = test_app().await;
    let (g1, g2, _) = oferta(&app).await;
    let alumno = id(&crear_alumno(&app, "A001").await);
    let calificada = matricular(&app, alumno, g1, Some(95)).await;
    let pendiente = matricular(&app, alumno, g2, None).await;

    let (status, body) = delete(&app, &format!("/matriculas/{}", id(&calificada))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");

    let (status, _) = delete(&app, &format!("/matriculas/{}", id(&pendiente))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = delete(&app, &format!("/matriculas/{}", id(&pendiente))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn registrar_nota_con_put() {
    let (app, _pool) = test_app().await;
    let (g1, _, _) = oferta(&app).await;
    let alumno = id(&crear_alumno(&app, "A001").await);
    let matricula = matricular(&app, alumno, g1, None).await;

    let (status, body) = put(
        &app,
        &format!("/matriculas/{}", id(&matricula)),
        json!({ "alumnoId": alumno, "grupoId": g1, "nota": 77 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nota"], 77);
}

#[tokio::test]
async fn historial_del_alumno_trae_grupo_curso_y_ciclo() {
    let (app, _pool) = test_app().await;
    let (g1, g2, _) = oferta(&app).await;
    let alumno = id(&crear_alumno(&app, "A001").await);
    matricular(&app, alumno, g1, Some(90)).await;
    matricular(&app, alumno, g2, None).await;

    let (status, historial) = get(&app, &format!("/matriculas/alumno/{alumno}")).await;
    assert_eq!(status, StatusCode::OK);
    let historial = historial.as_array().unwrap();
    assert_eq!(historial.len(), 2);

    let primera = &historial[0];
    assert_eq!(primera["matricula"]["nota"], 90);
    assert_eq!(id(&primera["grupo"]), g1);
    assert_eq!(primera["curso"]["codigo"], "CS101");
    assert_eq!(primera["curso"]["creditos"], 4);
    assert_eq!(primera["ciclo"]["anio"], 2024);
    assert_eq!(primera["ciclo"]["activo"], true);
    assert!(historial[1]["matricula"]["nota"].is_null());

    let (status, _) = get(&app, "/matriculas/alumno/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resumen_academico_pondera_por_creditos() {
    let (app, _pool) = test_app().await;
    let (g1, g2, g3) = oferta(&app).await;
    let alumno = id(&crear_alumno(&app, "A001").await);
    matricular(&app, alumno, g1, Some(90)).await;
    matricular(&app, alumno, g2, Some(70)).await;
    matricular(&app, alumno, g3, None).await;

    let (status, resumen) = get(&app, &format!("/alumnos/{alumno}/resumen")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resumen["matriculados"], 3);
    assert_eq!(resumen["completados"], 2);
    assert_eq!(resumen["creditosAprobados"], 7);
    assert_eq!(resumen["promedio"], 81.43);
}

#[tokio::test]
async fn resumen_sin_notas_es_cero() {
    let (app, _pool) = test_app().await;
    let alumno = id(&crear_alumno(&app, "A001").await);

    let (status, resumen) = get(&app, &format!("/alumnos/{alumno}/resumen")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resumen["matriculados"], 0);
    assert_eq!(resumen["promedio"], 0.0);

    let (status, _) = get(&app, "/alumnos/999/resumen").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lista_de_clase_del_grupo() {
    let (app, _pool) = test_app().await;
    let (g1, _, _) = oferta(&app).await;
    let ana = crear_alumno(&app, "A001").await;
    let beto = crear_alumno(&app, "A002").await;
    matricular(&app, id(&ana), g1, Some(88)).await;
    matricular(&app, id(&beto), g1, None).await;

    let (status, matriculas) = get(&app, &format!("/matriculas/grupo/{g1}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(matriculas.as_array().unwrap().len(), 2);

    let (status, alumnos) = get(&app, &format!("/matriculas/grupo/{g1}/alumnos")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alumnos, json!([ana, beto]));

    let (status, detalle) = get(&app, &format!("/grupos/{g1}/detalle")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detalle["curso"]["codigo"], "CS101");
    assert_eq!(detalle["profesor"]["cedula"], "P001");
    let lista = detalle["alumnos"].as_array().unwrap();
    assert_eq!(lista.len(), 2);
    assert_eq!(lista[0]["alumno"]["cedula"], "A001");
    assert_eq!(lista[0]["matricula"]["nota"], 88);

    let (status, _) = get(&app, "/matriculas/grupo/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/grupos/999/detalle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn grupo_y_alumno_con_matriculas_no_se_borran() {
    let (app, _pool) = test_app().await;
    let (g1, _, _) = oferta(&app).await;
    let alumno = id(&crear_alumno(&app, "A001").await);
    matricular(&app, alumno, g1, None).await;

    let (status, _) = delete(&app, &format!("/grupos/{g1}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = delete(&app, &format!("/alumnos/{alumno}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
