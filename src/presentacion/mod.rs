// src/presentacion/mod.rs
//! Estado de presentación para un cliente de la API: recursos con tres
//! estados, listas filtrables en memoria y el menú según el rol.
pub mod filtro;
pub mod lista;
pub mod menu;
pub mod recurso;

pub use filtro::{filtrar, CampoFiltro, Filtrable};
pub use lista::EstadoLista;
pub use menu::{secciones_para, Seccion};
pub use recurso::{ErrorCliente, Recurso, TipoError};
