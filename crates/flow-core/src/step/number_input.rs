use super::protocol::{await_choice, read_number, read_text, RunChoice};
use super::{Screen, Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::RunContext;

/// Entrada numérica. El número vuelve a 0 al inicio de cada ejecución y sólo
/// se sobrescribe con un valor leído correctamente; los intentos ilegibles
/// cuentan en la pantalla 1.
#[derive(Debug)]
pub struct NumberInputStep {
    description: String,
    number: f64,
    status: StepStatus,
    stats: StepStats,
}

impl NumberInputStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(),
               number: 0.0,
               status: StepStatus::Pending,
               stats: StepStats::default() }
    }
}

impl Step for NumberInputStep {
    fn kind(&self) -> StepKind {
        StepKind::NumberInput
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn stats(&self) -> &StepStats {
        &self.stats
    }

    fn execute(&mut self, _ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
        self.number = 0.0;
        let outcome = match await_choice(self.step_name(), &mut self.stats, io)? {
            RunChoice::Skip => StepOutcome::Skipped,
            RunChoice::Run => {
                if self.description.is_empty() {
                    self.description = read_text("Descripción: ", io)?;
                }
                self.number = read_number(&format!("{}: ", self.description), Screen::Input, &mut self.stats, io)?;
                io.say(&format!("Process Description: {}", self.description));
                io.say(&format!("Process Number: {}", self.number));
                StepOutcome::Completed
            }
        };
        self.status = outcome.status();
        Ok(outcome)
    }

    fn label(&self) -> String {
        format!("{}: {} = {}", self.step_name(), self.description, self.number)
    }

    fn report(&self) -> String {
        format!("Description: {}\nNumber: {}", self.description, self.number)
    }

    fn number(&self) -> Option<f64> {
        Some(self.number)
    }
}
