use super::protocol::{await_choice, read_text, RunChoice};
use super::{Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::constants::{DEFAULT_SUBTITLE, DEFAULT_TITLE};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::RunContext;

/// Pantalla de título. Título y subtítulo se capturan al ejecutar; una
/// omisión deja los valores anteriores.
#[derive(Debug)]
pub struct TitleStep {
    title: String,
    subtitle: String,
    status: StepStatus,
    stats: StepStats,
}

impl TitleStep {
    pub fn new() -> Self {
        Self { title: DEFAULT_TITLE.to_string(),
               subtitle: DEFAULT_SUBTITLE.to_string(),
               status: StepStatus::Pending,
               stats: StepStats::default() }
    }
}

impl Default for TitleStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for TitleStep {
    fn kind(&self) -> StepKind {
        StepKind::Title
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
                let subtitle = read_text("Subtítulo: ", io)?;
                self.title = title;
                self.subtitle = subtitle;
                io.say(&format!("Process Title: {}", self.title));
                io.say(&format!("Process Subtitle: {}", self.subtitle));
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
        format!("Title: {}\nSubtitle: {}", self.title, self.subtitle)
    }
}
