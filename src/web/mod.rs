// src/web/mod.rs
pub mod alumno_handlers;
pub mod auth_handlers;
pub mod carrera_curso_handlers;
pub mod carrera_handlers;
pub mod ciclo_handlers;
pub mod curso_handlers;
pub mod extract;
pub mod grupo_handlers;
pub mod matricula_handlers;
pub mod profesor_handlers;
pub mod routes;
pub mod usuario_handlers;
