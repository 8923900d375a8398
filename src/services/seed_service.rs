// src/services/seed_service.rs
//! Datos de ejemplo para ambientes de desarrollo. Cada registro se crea sólo
//! si su llave natural todavía no existe, así que correrlo dos veces no duplica nada.
use crate::{
    error::AppResult,
    models::{
        alumno::AlumnoPayload,
        carrera::CarreraPayload,
        ciclo::CicloPayload,
        curso::CursoPayload,
        grupo::GrupoPayload,
        matricula::MatriculaPayload,
        profesor::ProfesorPayload,
        usuario::{Rol, UsuarioPayload},
    },
    services::{
        alumno_service, carrera_curso_service, carrera_service, ciclo_service, curso_service,
        grupo_service, matricula_service, profesor_service, usuario_service,
    },
};
use sqlx::SqlitePool;

pub async fn populate_initial_data(db_pool: &SqlitePool, bcrypt_cost: u32) -> AppResult {
    tracing::info!("🌱 Cargando datos de ejemplo...");

    // --- Carreras ---
    let carreras = [
        ("C001", "Ingeniería de Software", "Bachiller en Ingeniería de Software"),
        ("C002", "Administración de Empresas", "Licenciatura en Administración de Empresas"),
        ("C003", "Diseño Gráfico", "Técnico en Diseño Gráfico"),
    ];
    for (codigo, nombre, titulo) in carreras {
        if carrera_service::find_by_codigo(db_pool, codigo).await?.is_none() {
            carrera_service::create(
                db_pool,
                CarreraPayload {
                    codigo: codigo.into(),
                    nombre: nombre.into(),
                    titulo: titulo.into(),
                },
            )
            .await?;
        }
    }

    // --- Cursos ---
    let cursos = [
        ("CS101", "Programación Orientada a Objetos", 4, 6),
        ("CS202", "Estructuras de Datos", 4, 6),
        ("BA101", "Contabilidad General", 3, 5),
        ("DG101", "Diseño Digital I", 3, 4),
        ("CS303", "Arquitectura de Software", 4, 5),
    ];
    for (codigo, nombre, creditos, horas_semanales) in cursos {
        if curso_service::find_by_codigo(db_pool, codigo).await?.is_none() {
            curso_service::create(
                db_pool,
                CursoPayload {
                    codigo: codigo.into(),
                    nombre: nombre.into(),
                    creditos,
                    horas_semanales,
                },
            )
            .await?;
        }
    }

    // --- Profesores ---
    let profesores = [
        ("P001", "Dr. Alan Turing", "11112222", "alan.turing@example.com"),
        ("P002", "Dra. Ada Lovelace", "33334444", "ada.lovelace@example.com"),
    ];
    for (cedula, nombre, telefono, email) in profesores {
        if profesor_service::find_by_cedula(db_pool, cedula).await?.is_none() {
            profesor_service::create(
                db_pool,
                ProfesorPayload {
                    cedula: cedula.into(),
                    nombre: nombre.into(),
                    telefono: Some(telefono.into()),
                    email: email.into(),
                },
            )
            .await?;
        }
    }

    // --- Ciclos (sólo uno activo) ---
    let ciclos = [
        (2024, "1", "2024-03-01", "2024-07-15", true),
        (2024, "2", "2024-08-01", "2024-12-15", false),
    ];
    for (anio, numero, inicio, fin, activo) in ciclos {
        if ciclo_service::find_by_anio_numero(db_pool, anio, numero).await?.is_none() {
            ciclo_service::create(
                db_pool,
                CicloPayload {
                    anio,
                    numero: numero.into(),
                    fecha_inicio: Some(inicio.into()),
                    fecha_fin: Some(fin.into()),
                    activo,
                },
            )
            .await?;
        }
    }

    // --- Usuarios ---
    let usuarios = [
        ("user001", "password123", Rol::Alumno),
        ("user002", "password456", Rol::Alumno),
        ("user003", "profpass", Rol::Profesor),
        ("reg01", "regpass", Rol::Registrador),
        ("admin01", "adminpass", Rol::Admin),
    ];
    for (cedula, clave, rol) in usuarios {
        if usuario_service::find_by_cedula(db_pool, cedula).await?.is_none() {
            usuario_service::create(
                db_pool,
                UsuarioPayload {
                    cedula: cedula.into(),
                    clave: Some(clave.into()),
                    rol,
                },
                bcrypt_cost,
            )
            .await?;
        }
    }

    // --- Alumnos ---
    let alumnos = [
        ("A001", "Alice Wonderland", "88887777", "alice@example.com", "2002-05-10", "C001"),
        ("A002", "Bob The Builder", "66665555", "bob@example.com", "2001-09-20", "C002"),
    ];
    for (cedula, nombre, telefono, email, nacimiento, carrera) in alumnos {
        if alumno_service::find_by_cedula(db_pool, cedula).await?.is_none() {
            alumno_service::create(
                db_pool,
                AlumnoPayload {
                    cedula: cedula.into(),
                    nombre: nombre.into(),
                    telefono: Some(telefono.into()),
                    email: email.into(),
                    fecha_nacimiento: nacimiento.into(),
                    codigo_carrera: Some(carrera.into()),
                },
            )
            .await?;
        }
    }

    // --- Planes de estudio ---
    let planes = [
        ("C001", "CS101"),
        ("C001", "CS202"),
        ("C001", "CS303"),
        ("C002", "BA101"),
        ("C002", "CS101"),
        ("C003", "DG101"),
    ];
    for (codigo_carrera, codigo_curso) in planes {
        let carrera = carrera_service::find_by_codigo(db_pool, codigo_carrera).await?;
        let curso = curso_service::find_by_codigo(db_pool, codigo_curso).await?;
        if let (Some(carrera), Some(curso)) = (carrera, curso) {
            carrera_curso_service::append_course(db_pool, carrera.id, curso.id).await?;
        }
    }

    // --- Grupos ---
    let grupos = [
        ("CS101", 1, "L/W 08:00-10:00", "P001"),
        ("BA101", 2, "M/J 10:00-12:00", "P002"),
    ];
    for (codigo_curso, numero_grupo, horario, profesor) in grupos {
        let existente =
            grupo_service::find_by_composite_key(db_pool, 2024, "1", codigo_curso, numero_grupo)
                .await?;
        if existente.is_none() {
            grupo_service::create(
                db_pool,
                GrupoPayload {
                    anio: 2024,
                    numero_ciclo: "1".into(),
                    codigo_curso: codigo_curso.into(),
                    numero_grupo,
                    horario: Some(horario.into()),
                    cedula_profesor: Some(profesor.into()),
                },
            )
            .await?;
        }
    }

    // --- Matrículas con nota ---
    let matriculas = [("A001", "CS101", 1, 95), ("A002", "BA101", 2, 88)];
    for (cedula, codigo_curso, numero_grupo, nota) in matriculas {
        let alumno = alumno_service::find_by_cedula(db_pool, cedula).await?;
        let grupo =
            grupo_service::find_by_composite_key(db_pool, 2024, "1", codigo_curso, numero_grupo)
                .await?;
        let (Some(alumno), Some(grupo)) = (alumno, grupo) else {
            tracing::warn!("No se pudo matricular {} en {}: faltan datos.", cedula, codigo_curso);
            continue;
        };
        let ya_matriculado = matricula_service::find_by_group(db_pool, grupo.id)
            .await?
            .iter()
            .any(|m| m.alumno_id == alumno.id);
        if !ya_matriculado {
            matricula_service::create(
                db_pool,
                MatriculaPayload {
                    alumno_id: alumno.id,
                    grupo_id: grupo.id,
                    nota: Some(nota),
                },
            )
            .await?;
        }
    }

    tracing::info!("✅ Datos de ejemplo listos.");
    Ok(())
}
