// src/presentacion/menu.rs
use crate::models::usuario::Rol;

/// Secciones del menú lateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seccion {
    Cursos,
    Programas,
    Profesores,
    Estudiantes,
    Periodos,
    Administracion,
    MiHistorial,
    MisCursos,
}

impl Seccion {
    pub const TODAS: [Seccion; 8] = [
        Seccion::Cursos,
        Seccion::Programas,
        Seccion::Profesores,
        Seccion::Estudiantes,
        Seccion::Periodos,
        Seccion::Administracion,
        Seccion::MiHistorial,
        Seccion::MisCursos,
    ];

    pub fn titulo(&self) -> &'static str {
        match self {
            Seccion::Cursos => "Cursos",
            Seccion::Programas => "Programas",
            Seccion::Profesores => "Profesores",
            Seccion::Estudiantes => "Estudiantes",
            Seccion::Periodos => "Períodos",
            Seccion::Administracion => "Administración",
            Seccion::MiHistorial => "Mi Historial",
            Seccion::MisCursos => "Mis Cursos",
        }
    }

    pub fn ruta(&self) -> &'static str {
        match self {
            Seccion::Cursos => "courses",
            Seccion::Programas => "programs",
            Seccion::Profesores => "instructors",
            Seccion::Estudiantes => "students",
            Seccion::Periodos => "terms",
            Seccion::Administracion => "admin",
            Seccion::MiHistorial => "student/history",
            Seccion::MisCursos => "instructor/courses",
        }
    }

    pub fn visible_para(&self, rol: Rol) -> bool {
        use Rol::*;
        match self {
            Seccion::Cursos => true,
            Seccion::Programas | Seccion::Profesores | Seccion::Periodos => {
                matches!(rol, Admin | Registrador | Alumno)
            }
            Seccion::Estudiantes => matches!(rol, Admin | Profesor | Registrador),
            Seccion::Administracion => rol == Admin,
            Seccion::MiHistorial => rol == Alumno,
            Seccion::MisCursos => rol == Profesor,
        }
    }
}

/// Secciones que el menú muestra a un rol, en orden fijo.
/// Es sólo filtrado visual: el backend no restringe por rol.
pub fn secciones_para(rol: Rol) -> Vec<Seccion> {
    Seccion::TODAS
        .into_iter()
        .filter(|s| s.visible_para(rol))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_ve_administracion_pero_no_secciones_personales() {
        let secciones = secciones_para(Rol::Admin);
        assert!(secciones.contains(&Seccion::Administracion));
        assert!(!secciones.contains(&Seccion::MiHistorial));
        assert!(!secciones.contains(&Seccion::MisCursos));
    }

    #[test]
    fn profesor_ve_sus_cursos_y_estudiantes() {
        assert_eq!(
            secciones_para(Rol::Profesor),
            vec![Seccion::Cursos, Seccion::Estudiantes, Seccion::MisCursos]
        );
    }

    #[test]
    fn alumno_ve_su_historial() {
        let secciones = secciones_para(Rol::Alumno);
        assert!(secciones.contains(&Seccion::MiHistorial));
        assert!(!secciones.contains(&Seccion::Estudiantes));
        assert!(!secciones.contains(&Seccion::Administracion));
    }
}
