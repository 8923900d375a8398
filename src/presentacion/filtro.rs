// src/presentacion/filtro.rs
use crate::models::{
    alumno::Alumno, carrera::Carrera, curso::Curso, profesor::Profesor, usuario::Usuario,
};

/// Campo por el que se busca en una lista ya descargada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoFiltro {
    Nombre,
    /// Código o cédula, según la entidad.
    Codigo,
    Carrera,
    Rol,
}

pub trait Filtrable {
    /// Valor del campo, o `None` si la entidad no lo tiene.
    fn valor(&self, campo: CampoFiltro) -> Option<&str>;
}

/// Subconjunto cuyo campo contiene `consulta` sin distinguir mayúsculas.
/// Conserva el orden original; una consulta en blanco devuelve todo.
pub fn filtrar<T: Filtrable + Clone>(lista: &[T], consulta: &str, campo: CampoFiltro) -> Vec<T> {
    let consulta = consulta.trim().to_lowercase();
    if consulta.is_empty() {
        return lista.to_vec();
    }
    lista
        .iter()
        .filter(|item| {
            item.valor(campo)
                .is_some_and(|v| v.to_lowercase().contains(&consulta))
        })
        .cloned()
        .collect()
}

impl Filtrable for Alumno {
    fn valor(&self, campo: CampoFiltro) -> Option<&str> {
        match campo {
            CampoFiltro::Nombre => Some(&self.nombre),
            CampoFiltro::Codigo => Some(&self.cedula),
            CampoFiltro::Carrera => self.codigo_carrera.as_deref(),
            CampoFiltro::Rol => None,
        }
    }
}

impl Filtrable for Carrera {
    fn valor(&self, campo: CampoFiltro) -> Option<&str> {
        match campo {
            CampoFiltro::Nombre => Some(&self.nombre),
            CampoFiltro::Codigo | CampoFiltro::Carrera => Some(&self.codigo),
            CampoFiltro::Rol => None,
        }
    }
}

impl Filtrable for Curso {
    fn valor(&self, campo: CampoFiltro) -> Option<&str> {
        match campo {
            CampoFiltro::Nombre => Some(&self.nombre),
            CampoFiltro::Codigo => Some(&self.codigo),
            CampoFiltro::Carrera | CampoFiltro::Rol => None,
        }
    }
}

impl Filtrable for Profesor {
    fn valor(&self, campo: CampoFiltro) -> Option<&str> {
        match campo {
            CampoFiltro::Nombre => Some(&self.nombre),
            CampoFiltro::Codigo => Some(&self.cedula),
            CampoFiltro::Carrera | CampoFiltro::Rol => None,
        }
    }
}

// La cédula hace las veces de nombre de usuario
impl Filtrable for Usuario {
    fn valor(&self, campo: CampoFiltro) -> Option<&str> {
        match campo {
            CampoFiltro::Nombre | CampoFiltro::Codigo => Some(&self.cedula),
            CampoFiltro::Rol => Some(self.rol.as_str()),
            CampoFiltro::Carrera => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::usuario::Rol;

    fn curso(id: i64, codigo: &str, nombre: &str) -> Curso {
        Curso {
            id,
            codigo: codigo.into(),
            nombre: nombre.into(),
            creditos: 4,
            horas_semanales: 4,
        }
    }

    #[test]
    fn filtra_por_nombre_sin_distinguir_mayusculas() {
        let cursos = vec![
            curso(1, "CS101", "Programación ABC"),
            curso(2, "CS202", "Estructuras"),
            curso(3, "CS303", "abecedario abc"),
        ];
        let resultado = filtrar(&cursos, "aBc", CampoFiltro::Nombre);
        let ids: Vec<i64> = resultado.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn consulta_en_blanco_devuelve_todo() {
        let cursos = vec![curso(1, "CS101", "A"), curso(2, "CS202", "B")];
        assert_eq!(filtrar(&cursos, "  ", CampoFiltro::Codigo), cursos);
    }

    #[test]
    fn alumnos_sin_carrera_no_coinciden() {
        let alumno = |id: i64, carrera: Option<&str>| Alumno {
            id,
            cedula: format!("A{:03}", id),
            nombre: "Alumno".into(),
            telefono: None,
            email: "a@b.c".into(),
            fecha_nacimiento: chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            codigo_carrera: carrera.map(str::to_string),
        };
        let lista = vec![alumno(1, Some("C001")), alumno(2, None), alumno(3, Some("C002"))];
        let ids: Vec<i64> = filtrar(&lista, "c00", CampoFiltro::Carrera)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn usuarios_por_rol() {
        let usuario = |id: i64, rol: Rol| Usuario {
            id,
            cedula: format!("u{}", id),
            clave_hash: String::new(),
            rol,
        };
        let lista = vec![usuario(1, Rol::Admin), usuario(2, Rol::Alumno), usuario(3, Rol::Alumno)];
        assert_eq!(filtrar(&lista, "alumno", CampoFiltro::Rol).len(), 2);
    }
}
