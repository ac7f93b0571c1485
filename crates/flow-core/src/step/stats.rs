use serde::Serialize;

use crate::constants::ERROR_SCREENS;

/// Punto de interacción dentro de un step; cada uno lleva su propio contador
/// de errores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// Elección ejecutar/omitir y otras opciones de menú.
    Choice,
    /// Números ilegibles e índices fuera de rango.
    Input,
    /// Selección de operación del cálculo.
    Operation,
}

impl Screen {
    pub const fn index(self) -> usize {
        match self {
            Screen::Choice => 0,
            Screen::Input => 1,
            Screen::Operation => 2,
        }
    }
}

/// Contadores de errores (uno por pantalla) y omisiones de un step.
///
/// Sólo crecen. Los mutadores son internos al crate: únicamente el `execute`
/// del propio step los invoca.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepStats {
    errors: [u32; ERROR_SCREENS],
    skips: u32,
}

impl StepStats {
    pub fn errors_on(&self, screen: Screen) -> u32 {
        self.errors[screen.index()]
    }

    pub fn errors(&self) -> &[u32; ERROR_SCREENS] {
        &self.errors
    }

    pub fn total_errors(&self) -> u32 {
        self.errors.iter().sum()
    }

    pub fn skips(&self) -> u32 {
        self.skips
    }

    pub(crate) fn add_error(&mut self, screen: Screen) {
        self.errors[screen.index()] += 1;
    }

    pub(crate) fn add_skip(&mut self) {
        self.skips += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_screens() {
        let mut stats = StepStats::default();
        stats.add_error(Screen::Choice);
        stats.add_error(Screen::Input);
        stats.add_error(Screen::Input);
        stats.add_error(Screen::Operation);
        assert_eq!(stats.errors(), &[1, 2, 1]);
        assert_eq!(stats.total_errors(), 4);
        assert_eq!(stats.skips(), 0);
    }

    #[test]
    fn skips_are_independent_of_errors() {
        let mut stats = StepStats::default();
        stats.add_skip();
        stats.add_skip();
        assert_eq!(stats.skips(), 2);
        assert_eq!(stats.total_errors(), 0);
    }
}
