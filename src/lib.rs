// src/lib.rs

// --- Declaración de los módulos ---
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod presentacion;
pub mod services;
pub mod state;
pub mod web;
