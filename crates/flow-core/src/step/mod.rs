//! Steps de un flujo.
//!
//! Un Step es una unidad interactiva con su propio protocolo ejecutar/omitir.
//! Este módulo define:
//! - `Step`: contrato común usado por el flujo (dispatch dinámico).
//! - `StepKind` / `RegistryCategory`: discriminante cerrado y categorías del
//!   registro de la corrida.
//! - `StepStats` y `Screen`: contadores de errores por pantalla y omisiones.
//! - Las variantes concretas: título, texto, entradas, cálculo, archivos,
//!   visualización y salida.

mod calculus;
pub mod definition;
mod display;
mod file_content;
mod number_input;
mod output;
pub(crate) mod protocol;
mod stats;
mod status;
mod text;
mod text_input;
mod title;

pub use calculus::{Calculation, CalculusStep, Operation};
pub use definition::{RegistryCategory, Step, StepKind};
pub use display::DisplayStep;
pub use file_content::{FileContentStep, FileFlavor, FileSource};
pub use number_input::NumberInputStep;
pub use output::OutputStep;
pub use protocol::parse_number;
pub use stats::{Screen, StepStats};
pub use status::{StepOutcome, StepStatus};
pub use text::TextStep;
pub use text_input::TextInputStep;
pub use title::TitleStep;

/// Construye un step nuevo (con valores por defecto) de la clase `kind`.
///
/// Los steps de archivo se crean sin nombre literal: el archivo se pide al
/// ejecutar. Para fijarlo de antemano usar `FileContentStep::with_file`.
pub fn blank(kind: StepKind) -> Box<dyn Step> {
    match kind {
        StepKind::Title => Box::new(TitleStep::new()),
        StepKind::Text => Box::new(TextStep::new()),
        StepKind::TextInput => Box::new(TextInputStep::new("")),
        StepKind::NumberInput => Box::new(NumberInputStep::new("")),
        StepKind::Calculus => Box::new(CalculusStep::new()),
        StepKind::TextFile => Box::new(FileContentStep::new(FileFlavor::Text, "")),
        StepKind::CsvFile => Box::new(FileContentStep::new(FileFlavor::Csv, "")),
        StepKind::Display => Box::new(DisplayStep::new()),
        StepKind::Output => Box::new(OutputStep::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_steps_report_their_kind_and_start_pending() {
        for kind in StepKind::ALL {
            let step = blank(kind);
            assert_eq!(step.kind(), kind);
            assert_eq!(step.status(), StepStatus::Pending);
            assert_eq!(step.total_errors(), 0);
            assert_eq!(step.skips(), 0);
        }
    }
}
