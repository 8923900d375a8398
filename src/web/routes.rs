// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        alumno_handlers, auth_handlers, carrera_curso_handlers, carrera_handlers, ciclo_handlers,
        curso_handlers, grupo_handlers, matricula_handlers, profesor_handlers, usuario_handlers,
    },
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Autenticación ---
    let auth_routes = Router::new().route("/login", post(auth_handlers::handle_login));

    // --- Catálogos ---
    let alumno_routes = Router::new()
        .route("/", get(alumno_handlers::list).post(alumno_handlers::create))
        .route("/cedula/{cedula}", get(alumno_handlers::get_by_cedula))
        .route(
            "/{id}",
            get(alumno_handlers::get)
                .put(alumno_handlers::update)
                .delete(alumno_handlers::delete),
        )
        .route("/{id}/resumen", get(alumno_handlers::summary));

    let carrera_routes = Router::new()
        .route("/", get(carrera_handlers::list).post(carrera_handlers::create))
        .route("/codigo/{codigo}", get(carrera_handlers::get_by_codigo))
        .route(
            "/{id}",
            get(carrera_handlers::get)
                .put(carrera_handlers::update)
                .delete(carrera_handlers::delete),
        )
        .route("/{id}/cursos", get(carrera_handlers::courses))
        .route("/{id}/detalle", get(carrera_handlers::details))
        .route(
            "/{id}/cursos/{curso_id}",
            post(carrera_handlers::append_course).delete(carrera_handlers::remove_course),
        );

    let curso_routes = Router::new()
        .route("/", get(curso_handlers::list).post(curso_handlers::create))
        .route("/codigo/{codigo}", get(curso_handlers::get_by_codigo))
        .route(
            "/{id}",
            get(curso_handlers::get)
                .put(curso_handlers::update)
                .delete(curso_handlers::delete),
        )
        .route("/{id}/carreras", get(curso_handlers::programs));

    let profesor_routes = Router::new()
        .route("/", get(profesor_handlers::list).post(profesor_handlers::create))
        .route("/cedula/{cedula}", get(profesor_handlers::get_by_cedula))
        .route(
            "/{id}",
            get(profesor_handlers::get)
                .put(profesor_handlers::update)
                .delete(profesor_handlers::delete),
        );

    let usuario_routes = Router::new()
        .route("/", get(usuario_handlers::list).post(usuario_handlers::create))
        .route("/cedula/{cedula}", get(usuario_handlers::get_by_cedula))
        .route(
            "/{id}",
            get(usuario_handlers::get)
                .put(usuario_handlers::update)
                .delete(usuario_handlers::delete),
        );

    // --- Oferta académica ---
    let ciclo_routes = Router::new()
        .route("/", get(ciclo_handlers::list).post(ciclo_handlers::create))
        .route("/activo", get(ciclo_handlers::get_active))
        .route("/anio/{anio}", get(ciclo_handlers::list_by_year))
        .route(
            "/byAnioNumero/{anio}/{numero}",
            get(ciclo_handlers::get_by_anio_numero),
        )
        .route(
            "/{id}",
            get(ciclo_handlers::get)
                .put(ciclo_handlers::update)
                .delete(ciclo_handlers::delete),
        )
        // Activar es una escritura: POST o PUT, nunca GET
        .route(
            "/{id}/activo",
            post(ciclo_handlers::set_active).put(ciclo_handlers::set_active),
        );

    let grupo_routes = Router::new()
        .route("/", get(grupo_handlers::list).post(grupo_handlers::create))
        .route("/curso/{curso_id}", get(grupo_handlers::list_by_course))
        .route("/profesor/{cedula}", get(grupo_handlers::list_by_instructor))
        .route("/ciclo/{anio}/{numero}", get(grupo_handlers::list_by_term))
        .route(
            "/byCompositeKey/{anio}/{numero_ciclo}/{codigo_curso}/{numero_grupo}",
            get(grupo_handlers::get_by_composite_key),
        )
        .route(
            "/{id}",
            get(grupo_handlers::get)
                .put(grupo_handlers::update)
                .delete(grupo_handlers::delete),
        )
        .route("/{id}/detalle", get(grupo_handlers::details));

    let matricula_routes = Router::new()
        .route("/", get(matricula_handlers::list).post(matricula_handlers::create))
        .route("/alumno/{alumno_id}", get(matricula_handlers::list_by_student))
        .route("/grupo/{grupo_id}", get(matricula_handlers::list_by_group))
        .route(
            "/grupo/{grupo_id}/alumnos",
            get(matricula_handlers::students_of_group),
        )
        .route(
            "/{id}",
            get(matricula_handlers::get)
                .put(matricula_handlers::update)
                .delete(matricula_handlers::delete),
        );

    let carrera_curso_routes = Router::new()
        .route(
            "/",
            get(carrera_curso_handlers::list).post(carrera_curso_handlers::add),
        )
        .route(
            "/carrera/{codigo}",
            get(carrera_curso_handlers::list_by_program),
        )
        .route(
            "/{id}",
            axum::routing::put(carrera_curso_handlers::reorder)
                .delete(carrera_curso_handlers::remove),
        );

    // --- Router final ---
    Router::new()
        .merge(auth_routes)
        .nest("/alumnos", alumno_routes)
        .nest("/carreras", carrera_routes)
        .nest("/cursos", curso_routes)
        .nest("/profesores", profesor_routes)
        .nest("/usuarios", usuario_routes)
        .nest("/ciclos", ciclo_routes)
        .nest("/grupos", grupo_routes)
        .nest("/matriculas", matricula_routes)
        .nest("/carreras-cursos", carrera_curso_routes)
        .with_state(app_state)
}
