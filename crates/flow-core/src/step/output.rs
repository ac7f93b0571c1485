//! Step de salida: genera un reporte `<title>.txt` y copia en él la
//! información de steps previos de la corrida.

use std::path::Path;

use log::{error, info};

use super::protocol::{await_choice, confirm, read_non_empty, read_position, read_text, RunChoice};
use super::{RegistryCategory, Screen, Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::{CatalogView, RunContext};
use crate::workspace::append_block;

#[derive(Debug, Default)]
pub struct OutputStep {
    title: String,
    description: String,
    /// Bloques escritos en la última ejecución (descripción incluida).
    blocks_written: usize,
    status: StepStatus,
    stats: StepStats,
}

impl OutputStep {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&mut self, path: &Path, block: &str, io: &mut dyn Interaction) {
        match append_block(path, block) {
            Ok(()) => self.blocks_written += 1,
            Err(e) => {
                error!("no se pudo escribir el reporte {}: {e}", path.display());
                io.say(&format!("Error escribiendo {}: {e}", path.display()));
            }
        }
    }

    fn copy_loop(&mut self, path: &Path, ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<(), FlowError> {
        while confirm("¿Agregar información de otro paso al reporte?", &mut self.stats, io)? {
            let view = CatalogView::new(ctx, &RegistryCategory::REPORTABLE);
            if view.is_empty() {
                io.say("No hay pasos registrados para copiar.");
                continue;
            }
            view.show(io);
            let pos = read_position("Paso: ", view.len(), Screen::Input, &mut self.stats, io)?;
            if let Some(entry) = view.get(pos) {
                let block = entry.step.report();
                self.write(path, &block, io);
            }
        }
        Ok(())
    }
}

impl Step for OutputStep {
    fn kind(&self) -> StepKind {
        StepKind::Output
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn stats(&self) -> &StepStats {
        &self.stats
    }

    fn execute(&mut self, ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
        if await_choice(self.step_name(), &mut self.stats, io)? == RunChoice::Skip {
            self.status = StepStatus::Skipped;
            return Ok(StepOutcome::Skipped);
        }

        self.title = read_non_empty("Título del reporte: ", Screen::Input, &mut self.stats, io)?;
        self.description = read_text("Descripción: ", io)?;
        self.blocks_written = 0;
        let path = ctx.workspace().report_path(&self.title);
        let description = self.description.clone();
        self.write(&path, &description, io);
        self.copy_loop(&path, ctx, io)?;

        info!("reporte {} con {} bloques (corrida {})", path.display(), self.blocks_written, ctx.run_id());
        io.say(&format!("Reporte: {}", path.display()));
        self.status = StepStatus::Configured;
        Ok(StepOutcome::Completed)
    }

    fn label(&self) -> String {
        format!("{}: {}", self.step_name(), self.title)
    }

    fn report(&self) -> String {
        format!("Title: {}\nDescription: {}", self.title, self.description)
    }
}
