//! Registro de la corrida: índices por categoría de los steps ya ejecutados.
//!
//! Vive dentro del `Flow` y se vacía al inicio y al final de cada
//! `Flow::execute`, así que nada de una corrida es visible en la siguiente.
//! Guarda posiciones dentro de la lista de steps del flujo, no copias.

mod context;
mod view;

pub use context::RunContext;
pub use view::{CatalogEntry, CatalogView};

use log::debug;

use crate::step::{RegistryCategory, StepKind};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunRegistry {
    number_inputs: Vec<usize>,
    text_files: Vec<usize>,
    csv_files: Vec<usize>,
    calculus: Vec<usize>,
}

impl RunRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clasifica el step en `index` según su tipo. Devuelve la categoría en
    /// la que quedó, o `None` si su tipo no se indexa.
    pub fn register(&mut self, index: usize, kind: StepKind) -> Option<RegistryCategory> {
        let category = kind.category()?;
        debug!("registro: step #{index} ({kind}) -> {category:?}");
        self.list_mut(category).push(index);
        Some(category)
    }

    /// Posiciones registradas para `category`, en orden de registro.
    pub fn indices(&self, category: RegistryCategory) -> &[usize] {
        match category {
            RegistryCategory::NumberInput => &self.number_inputs,
            RegistryCategory::TextFile => &self.text_files,
            RegistryCategory::CsvFile => &self.csv_files,
            RegistryCategory::Calculus => &self.calculus,
        }
    }

    pub fn count(&self, category: RegistryCategory) -> usize {
        self.indices(category).len()
    }

    pub fn len(&self) -> usize {
        self.number_inputs.len() + self.text_files.len() + self.csv_files.len() + self.calculus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.number_inputs.clear();
        self.text_files.clear();
        self.csv_files.clear();
        self.calculus.clear();
    }

    fn list_mut(&mut self, category: RegistryCategory) -> &mut Vec<usize> {
        match category {
            RegistryCategory::NumberInput => &mut self.number_inputs,
            RegistryCategory::TextFile => &mut self.text_files,
            RegistryCategory::CsvFile => &mut self.csv_files,
            RegistryCategory::Calculus => &mut self.calculus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_classifies_by_kind() {
        let mut reg = RunRegistry::new();
        assert_eq!(reg.register(0, StepKind::Title), None);
        assert_eq!(reg.register(1, StepKind::NumberInput), Some(RegistryCategory::NumberInput));
        assert_eq!(reg.register(2, StepKind::CsvFile), Some(RegistryCategory::CsvFile));
        assert_eq!(reg.register(3, StepKind::NumberInput), Some(RegistryCategory::NumberInput));
        assert_eq!(reg.register(4, StepKind::Output), None);
        assert_eq!(reg.indices(RegistryCategory::NumberInput), &[1, 3]);
        assert_eq!(reg.count(RegistryCategory::CsvFile), 1);
        assert_eq!(reg.count(RegistryCategory::TextFile), 0);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn clear_empties_every_category() {
        let mut reg = RunRegistry::new();
        reg.register(0, StepKind::TextFile);
        reg.register(1, StepKind::Calculus);
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg, RunRegistry::default());
    }
}
