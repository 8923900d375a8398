// src/web/extract.rs
//! `Path` y `Json` propios: sus rechazos se convierten en `AppError`
//! y salen con el mismo sobre de error que el resto de la API.
use crate::error::AppError;
use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Cuerpo de las respuestas DELETE.
pub fn mensaje(texto: impl Into<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "mensaje": texto.into() }))
}
