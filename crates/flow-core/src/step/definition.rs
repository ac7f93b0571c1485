use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FileSource, StepOutcome, StepStats, StepStatus};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::RunContext;

/// Conjunto cerrado de tipos de step. Es el discriminante que usa el flujo
/// para clasificar cada step en el registro de la corrida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Title,
    Text,
    TextInput,
    NumberInput,
    Calculus,
    TextFile,
    CsvFile,
    Display,
    Output,
}

impl StepKind {
    /// Orden en el que el menú ofrece los tipos de step.
    pub const ALL: [StepKind; 9] = [StepKind::Title,
                                    StepKind::Text,
                                    StepKind::TextInput,
                                    StepKind::NumberInput,
                                    StepKind::Calculus,
                                    StepKind::TextFile,
                                    StepKind::CsvFile,
                                    StepKind::Display,
                                    StepKind::Output];

    /// Nombre estable para mostrar.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Title => "Title Step",
            StepKind::Text => "Text Step",
            StepKind::TextInput => "Text Input Step",
            StepKind::NumberInput => "Number Input Step",
            StepKind::Calculus => "Calculus Step",
            StepKind::TextFile => "Text File Step",
            StepKind::CsvFile => "CSV File Step",
            StepKind::Display => "Display Step",
            StepKind::Output => "Output Step",
        }
    }

    /// Categoría del registro a la que pertenece el tipo, si alguna.
    pub fn category(self) -> Option<RegistryCategory> {
        match self {
            StepKind::NumberInput => Some(RegistryCategory::NumberInput),
            StepKind::TextFile => Some(RegistryCategory::TextFile),
            StepKind::CsvFile => Some(RegistryCategory::CsvFile),
            StepKind::Calculus => Some(RegistryCategory::Calculus),
            _ => None,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorías que el registro de la corrida indexa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryCategory {
    NumberInput,
    TextFile,
    CsvFile,
    Calculus,
}

impl RegistryCategory {
    /// Archivos de texto y luego CSV, como los enumera `DisplayStep`.
    pub const FILES: [RegistryCategory; 2] = [RegistryCategory::TextFile, RegistryCategory::CsvFile];

    /// Orden fijo en el que `OutputStep` enumera lo registrado.
    pub const REPORTABLE: [RegistryCategory; 4] = [RegistryCategory::TextFile,
                                                   RegistryCategory::CsvFile,
                                                   RegistryCategory::NumberInput,
                                                   RegistryCategory::Calculus];
}

/// Contrato común de todos los steps.
///
/// `execute` recorre el protocolo ejecutar/omitir del step contra la
/// superficie `io`. Puede consultar `ctx` para ver los steps que ya corrieron
/// en la corrida actual. Los contadores sólo cambian dentro de `execute`.
pub trait Step: fmt::Debug {
    fn kind(&self) -> StepKind;

    fn step_name(&self) -> &'static str {
        self.kind().label()
    }

    fn status(&self) -> StepStatus;

    fn stats(&self) -> &StepStats;

    fn total_errors(&self) -> u32 {
        self.stats().total_errors()
    }

    fn skips(&self) -> u32 {
        self.stats().skips()
    }

    fn execute(&mut self, ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError>;

    /// Línea corta usada al listar el step en una selección.
    fn label(&self) -> String;

    /// Bloque que se copia a un reporte.
    fn report(&self) -> String;

    /// Valor numérico, sólo para entradas numéricas.
    fn number(&self) -> Option<f64> {
        None
    }

    /// Archivo asociado, sólo para steps de archivo.
    fn file_source(&self) -> Option<&FileSource> {
        None
    }
}
