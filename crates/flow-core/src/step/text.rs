use super::protocol::{await_choice, read_text, RunChoice};
use super::{Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::constants::{DEFAULT_COPY, DEFAULT_TITLE};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::RunContext;

/// Bloque de texto con título y copy.
#[derive(Debug)]
pub struct TextStep {
    title: String,
    copy: String,
    status: StepStatus,
    stats: StepStats,
}

impl TextStep {
    pub fn new() -> Self {
        Self { title: DEFAULT_TITLE.to_string(),
               copy: DEFAULT_COPY.to_string(),
               status: StepStatus::Pending,
               stats: StepStats::default() }
    }
}

impl Default for TextStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for TextStep {
    fn kind(&self) -> StepKind {
        StepKind::Text
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn stats(&self) -> &StepStats {
        &self.stats
    }

    fn execute(&mut self, _ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
        let outcome = match await_choice(self.step_name(), &mut self.stats, io)? {
            RunChoice::Skip => StepOutcome::Skipped,
            RunChoice::Run => {
                let title = read_text("Título: ", io)?;
                let copy = read_text("Texto: ", io)?;
                self.title = title;
                self.copy = copy;
                io.say(&format!("Process Text: {}", self.title));
                io.say(&format!("Process Copy: {}", self.copy));
                StepOutcome::Completed
            }
        };
        self.status = outcome.status();
        Ok(outcome)
    }

    fn label(&self) -> String {
        format!("{}: {}", self.step_name(), self.title)
    }

    fn report(&self) -> String {
        format!("Title: {}\nCopy: {}", self.title, self.copy)
    }
}
