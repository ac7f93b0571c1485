use super::protocol::{await_choice, read_text, RunChoice};
use super::{Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::constants::DEFAULT_TEXT;
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::RunContext;

/// Entrada de texto libre. `text` vuelve a `NO TEXT` al inicio de cada
/// ejecución; la descripción se pide sólo si se creó vacía.
#[derive(Debug)]
pub struct TextInputStep {
    description: String,
    text: String,
    status: StepStatus,
    stats: StepStats,
}

impl TextInputStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(),
               text: DEFAULT_TEXT.to_string(),
               status: StepStatus::Pending,
               stats: StepStats::default() }
    }
}

impl Step for TextInputStep {
    fn kind(&self) -> StepKind {
        StepKind::TextInput
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn stats(&self) -> &StepStats {
        &self.stats
    }

    fn execute(&mut self, _ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
        self.text = DEFAULT_TEXT.to_string();
        let outcome = match await_choice(self.step_name(), &mut self.stats, io)? {
            RunChoice::Skip => StepOutcome::Skipped,
            RunChoice::Run => {
                if self.description.is_empty() {
                    self.description = read_text("Descripción: ", io)?;
                }
                self.text = read_text(&format!("{}: ", self.description), io)?;
                io.say(&format!("Process Description: {}", self.description));
                io.say(&format!("Process Text: {}", self.text));
                StepOutcome::Completed
            }
        };
        self.status = outcome.status();
        Ok(outcome)
    }

    fn label(&self) -> String {
        format!("{}: {}", self.step_name(), self.description)
    }

    fn report(&self) -> String {
        format!("Description: {}\nText: {}", self.description, self.text)
    }
}
