use log::debug;

use super::protocol::{await_choice, read_position, RunChoice};
use super::{RegistryCategory, Screen, Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::{CatalogView, RunContext};

/// Muestra el contenido de un archivo registrado en la corrida actual.
///
/// La lista combina archivos de texto (1..T) y luego CSV (T+1..T+C).
#[derive(Debug, Default)]
pub struct DisplayStep {
    last_shown: Option<String>,
    status: StepStatus,
    stats: StepStats,
}

impl DisplayStep {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Step for DisplayStep {
    fn kind(&self) -> StepKind {
        StepKind::Display
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn stats(&self) -> &StepStats {
        &self.stats
    }

    fn execute(&mut self, ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
        self.last_shown = None;
        if CatalogView::new(ctx, &RegistryCategory::FILES).is_empty() {
            io.say(&format!("== {} ==", self.step_name()));
            io.say("No hay archivos registrados en esta corrida.");
            self.stats.add_skip();
            self.status = StepStatus::Skipped;
            return Ok(StepOutcome::Skipped);
        }
        if await_choice(self.step_name(), &mut self.stats, io)? == RunChoice::Skip {
            self.status = StepStatus::Skipped;
            return Ok(StepOutcome::Skipped);
        }

        io.say("Mostrar el contenido de:");
        let view = CatalogView::new(ctx, &RegistryCategory::FILES);
        view.show(io);
        let pos = read_position("Archivo: ", view.len(), Screen::Input, &mut self.stats, io)?;
        let source = view.get(pos).and_then(|entry| entry.step.file_source());
        let lines = source.map(|s| s.read_lines()).unwrap_or_default();
        debug!("display: {} líneas", lines.len());
        for line in &lines {
            io.say(line);
        }
        self.last_shown = source.map(|s| s.name().to_string());
        self.status = StepStatus::Configured;
        Ok(StepOutcome::Completed)
    }

    fn label(&self) -> String {
        self.step_name().to_string()
    }

    fn report(&self) -> String {
        format!("Displayed: {}", self.last_shown.as_deref().unwrap_or("NONE"))
    }
}
