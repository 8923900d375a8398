// src/presentacion/lista.rs
use super::{filtrar, CampoFiltro, ErrorCliente, Filtrable, Recurso};

/// Estado de una pantalla de listado: la última lista completa recibida y
/// la vista filtrada derivada de ella. Tras cualquier alta, cambio o baja
/// la pantalla llama a `invalidar` y vuelve a pedir la lista completa.
#[derive(Debug, Clone)]
pub struct EstadoLista<T> {
    recurso: Recurso<Vec<T>>,
    consulta: String,
    campo: CampoFiltro,
    visibles: Vec<T>,
}

impl<T: Filtrable + Clone> EstadoLista<T> {
    pub fn new(campo: CampoFiltro) -> Self {
        Self {
            recurso: Recurso::Cargando,
            consulta: String::new(),
            campo,
            visibles: Vec::new(),
        }
    }

    pub fn cargando(&mut self) {
        self.recurso = Recurso::Cargando;
        self.visibles.clear();
    }

    pub fn recibir(&mut self, resultado: Result<Vec<T>, ErrorCliente>) {
        self.recurso = Recurso::desde_resultado(resultado);
        self.recalcular();
    }

    pub fn aplicar_filtro(&mut self, consulta: &str, campo: CampoFiltro) {
        self.consulta = consulta.to_string();
        self.campo = campo;
        self.recalcular();
    }

    /// Descarta la lista; el filtro activo se conserva para la recarga.
    pub fn invalidar(&mut self) {
        self.cargando();
    }

    pub fn recurso(&self) -> &Recurso<Vec<T>> {
        &self.recurso
    }

    pub fn visibles(&self) -> &[T] {
        &self.visibles
    }

    pub fn consulta(&self) -> &str {
        &self.consulta
    }

    fn recalcular(&mut self) {
        self.visibles = match &self.recurso {
            Recurso::Exito(todos) => filtrar(todos, &self.consulta, self.campo),
            _ => Vec::new(),
        };
    }
}
