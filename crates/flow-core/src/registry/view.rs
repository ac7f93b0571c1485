//! Enumeración plana y 1-based de varias categorías del registro.
//!
//! Las categorías se concatenan en el orden recibido; cada una ocupa un rango
//! contiguo a continuación de la anterior. La vista se construye a partir
//! del tamaño actual del registro cada vez que se va a preguntar.

use super::RunContext;
use crate::interaction::Interaction;
use crate::step::{RegistryCategory, Step};

pub struct CatalogEntry<'a> {
    pub position: usize,
    pub category: RegistryCategory,
    pub step: &'a dyn Step,
}

pub struct CatalogView<'a> {
    entries: Vec<CatalogEntry<'a>>,
}

impl<'a> CatalogView<'a> {
    pub fn new(ctx: &RunContext<'a>, categories: &[RegistryCategory]) -> Self {
        let entries = categories.iter()
                                .flat_map(|&category| ctx.steps_in(category).map(move |step| (category, step)))
                                .enumerate()
                                .map(|(i, (category, step))| CatalogEntry { position: i + 1,
                                                                            category,
                                                                            step })
                                .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entrada en la posición 1-based `position`.
    pub fn get(&self, position: usize) -> Option<&CatalogEntry<'a>> {
        position.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn entries(&self) -> &[CatalogEntry<'a>] {
        &self.entries
    }

    /// Lista numerada hacia la superficie.
    pub fn show(&self, io: &mut dyn Interaction) {
        for entry in &self.entries {
            io.say(&format!("{}. {}", entry.position, entry.step.label()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RunRegistry;
    use crate::step::{FileContentStep, FileFlavor, NumberInputStep, TitleStep};
    use crate::workspace::Workspace;
    use uuid::Uuid;

    #[test]
    fn ranges_are_contiguous_in_requested_order() {
        let ws = Workspace::default();
        let steps: Vec<Box<dyn Step>> = vec![Box::new(FileContentStep::new(FileFlavor::Csv, "c1")),
                                             Box::new(NumberInputStep::new("n1")),
                                             Box::new(FileContentStep::new(FileFlavor::Text, "t1")),
                                             Box::new(TitleStep::new()),
                                             Box::new(FileContentStep::new(FileFlavor::Text, "t2"))];
        let mut reg = RunRegistry::new();
        for (i, s) in steps.iter().enumerate() {
            reg.register(i, s.kind());
        }
        let ctx = RunContext::new(Uuid::new_v4(), &reg, &steps, &ws);

        let files = CatalogView::new(&ctx, &RegistryCategory::FILES);
        let positions: Vec<(usize, RegistryCategory)> = files.entries().iter().map(|e| (e.position, e.category)).collect();
        assert_eq!(positions,
                   vec![(1, RegistryCategory::TextFile), (2, RegistryCategory::TextFile), (3, RegistryCategory::CsvFile)]);
        assert!(files.get(0).is_none());
        assert!(files.get(4).is_none());
        assert!(files.get(3).unwrap().step.label().contains("c1"));

        let all = CatalogView::new(&ctx, &RegistryCategory::REPORTABLE);
        assert_eq!(all.len(), 4);
        assert_eq!(all.get(4).unwrap().category, RegistryCategory::NumberInput);
    }
}
