// src/services/mod.rs
pub mod alumno_service;
pub mod auth_service;
pub mod carrera_curso_service;
pub mod carrera_service;
pub mod ciclo_service;
pub mod curso_service;
pub mod grupo_service;
pub mod matricula_service;
pub mod profesor_service;
pub mod seed_service;
pub mod usuario_service;
