//! Implementación de `Flow`.
//!
//! Un flujo posee sus steps en exclusiva y sólo admite agregarlos al final.
//! `execute` hace una pasada completa:
//! 1. vacía el registro y cuenta un inicio (aunque luego todo se omita);
//! 2. ejecuta cada step en orden con un `RunContext` que ve los anteriores;
//! 3. clasifica el step en el registro según su `StepKind`;
//! 4. vacía el registro otra vez, también si la corrida se cortó.

use chrono::{DateTime, Utc};
use log::{info, warn};
use uuid::Uuid;

use super::summary::{FlowSummary, RunSummary, StepTally};
use crate::errors::FlowError;
use crate::event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
use crate::interaction::Interaction;
use crate::registry::{RunContext, RunRegistry};
use crate::step::{Screen, Step, StepOutcome};
use crate::workspace::Workspace;

#[derive(Debug)]
pub struct Flow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    started: u32,
    steps: Vec<Box<dyn Step>>,
    registry: RunRegistry,
    workspace: Workspace,
    events: Box<dyn EventStore>,
}

impl Flow {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(),
               name: name.into(),
               created_at: Utc::now(),
               started: 0,
               steps: Vec::new(),
               registry: RunRegistry::new(),
               workspace: Workspace::default(),
               events: Box::new(InMemoryEventStore::default()) }
    }

    pub fn with_workspace(mut self, workspace: Workspace) -> Self {
        self.workspace = workspace;
        self
    }

    pub fn with_event_store(mut self, events: Box<dyn EventStore>) -> Self {
        self.events = events;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Veces que se llamó a `execute`.
    pub fn started(&self) -> u32 {
        self.started
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Box<dyn Step>] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&dyn Step> {
        self.steps.get(index).map(|s| &**s)
    }

    /// Registro de la corrida; fuera de `execute` siempre está vacío.
    pub fn registry(&self) -> &RunRegistry {
        &self.registry
    }

    /// Agrega un step al final y devuelve su índice.
    pub fn add_step(&mut self, step: Box<dyn Step>) -> usize {
        self.steps.push(step);
        self.steps.len() - 1
    }

    /// Variante encadenable de `add_step`.
    pub fn push<S: Step + 'static>(&mut self, step: S) -> &mut Self {
        self.add_step(Box::new(step));
        self
    }

    /// Ejecuta una pasada completa del flujo.
    pub fn execute(&mut self, io: &mut dyn Interaction) -> Result<RunSummary, FlowError> {
        self.registry.clear();
        self.started += 1;
        let run_id = Uuid::new_v4();
        info!("flujo '{}': inicio #{} ({run_id}), {} steps", self.name, self.started, self.steps.len());
        self.events.append_kind(run_id, FlowEventKind::RunStarted { step_count: self.steps.len() });

        let result = self.run_steps(run_id, io);
        self.registry.clear();

        match result {
            Ok(summary) => {
                info!("flujo '{}': fin ({} completados, {} omitidos)", self.name, summary.completed, summary.skipped);
                self.events.append_kind(run_id,
                                        FlowEventKind::RunFinished { completed: summary.completed,
                                                                     skipped: summary.skipped });
                Ok(summary)
            }
            Err((step_index, e)) => {
                warn!("flujo '{}': corrida cortada en step #{step_index}: {e}", self.name);
                self.events.append_kind(run_id,
                                        FlowEventKind::RunAborted { step_index,
                                                                    reason: e.to_string() });
                Err(e)
            }
        }
    }

    fn run_steps(&mut self, run_id: Uuid, io: &mut dyn Interaction) -> Result<RunSummary, (usize, FlowError)> {
        let mut summary = RunSummary { run_id,
                                       completed: 0,
                                       skipped: 0 };
        for index in 0..self.steps.len() {
            let (executed, rest) = self.steps.split_at_mut(index);
            let Some((step, _)) = rest.split_first_mut() else {
                break;
            };
            let ctx = RunContext::new(run_id, &self.registry, executed, &self.workspace);
            let outcome = step.execute(&ctx, io).map_err(|e| (index, e))?;
            let kind = step.kind();
            match outcome {
                StepOutcome::Completed => {
                    summary.completed += 1;
                    self.events.append_kind(run_id, FlowEventKind::StepCompleted { step_index: index, kind });
                }
                StepOutcome::Skipped => {
                    summary.skipped += 1;
                    self.events.append_kind(run_id, FlowEventKind::StepSkipped { step_index: index, kind });
                }
            }
            self.registry.register(index, kind);
        }
        Ok(summary)
    }

    // ---- Analíticas (sólo lectura) ----

    pub fn total_skips(&self) -> u32 {
        self.steps.iter().map(|s| s.skips()).sum()
    }

    pub fn total_errors(&self) -> u32 {
        self.steps.iter().map(|s| s.total_errors()).sum()
    }

    /// Errores totales / cantidad de steps / cantidad de inicios.
    pub fn average_errors(&self) -> Result<f64, FlowError> {
        if self.steps.is_empty() || self.started == 0 {
            return Err(FlowError::NoData);
        }
        Ok(self.total_errors() as f64 / self.steps.len() as f64 / self.started as f64)
    }

    pub fn tallies(&self) -> Vec<StepTally> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, s)| StepTally { position: i + 1,
                                      kind: s.kind(),
                                      name: s.step_name().to_string(),
                                      errors: *s.stats().errors(),
                                      total_errors: s.total_errors(),
                                      skips: s.skips() })
            .collect()
    }

    pub fn display_skips(&self, io: &mut dyn Interaction) {
        io.say(&format!("Omisiones en '{}':", self.name));
        for t in self.tallies() {
            io.say(&format!("{}. {}: {}", t.position, t.name, t.skips));
        }
        io.say(&format!("Total de omisiones: {}", self.total_skips()));
    }

    pub fn display_errors(&self, io: &mut dyn Interaction) {
        io.say(&format!("Errores en '{}':", self.name));
        for t in self.tallies() {
            io.say(&format!("{}. {}: {} (elección {}, entrada {}, operación {})",
                            t.position,
                            t.name,
                            t.total_errors,
                            t.errors[Screen::Choice.index()],
                            t.errors[Screen::Input.index()],
                            t.errors[Screen::Operation.index()]));
        }
        io.say(&format!("Total de errores: {}", self.total_errors()));
    }

    pub fn display_average_errors(&self, io: &mut dyn Interaction) {
        match self.average_errors() {
            Ok(avg) => io.say(&format!("Promedio de errores: {avg:.2}")),
            Err(e) => io.say(&format!("Promedio de errores: {e}")),
        }
    }

    // ---- Historial ----

    pub fn events(&self) -> Vec<FlowEvent> {
        self.events.all()
    }

    pub fn run_events(&self, run_id: Uuid) -> Vec<FlowEvent> {
        self.events.list(run_id)
    }

    pub fn events_json(&self) -> Result<String, FlowError> {
        Ok(serde_json::to_string_pretty(&self.events.all())?)
    }

    pub fn summary(&self) -> FlowSummary {
        FlowSummary { id: self.id,
                      name: self.name.clone(),
                      created_at: self.created_at,
                      started: self.started,
                      steps: self.tallies(),
                      total_errors: self.total_errors(),
                      total_skips: self.total_skips() }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::interaction::ScriptedInteraction;
    use crate::step::{NumberInputStep, StepKind, StepStats, StepStatus, TitleStep};

    // Step de prueba que anota el tamaño del registro cuando se ejecuta.
    #[derive(Debug)]
    struct Probe {
        seen: Rc<RefCell<Vec<usize>>>,
        stats: StepStats,
    }

    impl Probe {
        fn new(seen: Rc<RefCell<Vec<usize>>>) -> Self {
            Self { seen,
                   stats: StepStats::default() }
        }
    }

    impl Step for Probe {
        fn kind(&self) -> StepKind {
            StepKind::Text
        }
        fn status(&self) -> StepStatus {
            StepStatus::Configured
        }
        fn stats(&self) -> &StepStats {
            &self.stats
        }
        fn execute(&mut self, ctx: &RunContext<'_>, _io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
            self.seen.borrow_mut().push(ctx.registry().len());
            Ok(StepOutcome::Completed)
        }
        fn label(&self) -> String {
            "probe".into()
        }
        fn report(&self) -> String {
            "probe".into()
        }
    }

    #[test]
    fn registry_is_empty_before_first_and_after_last_step() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut flow = Flow::new("probe");
        flow.push(Probe::new(seen.clone()))
            .push(NumberInputStep::new("a"))
            .push(Probe::new(seen.clone()))
            .push(NumberInputStep::new("b"))
            .push(Probe::new(seen.clone()));

        let mut io = ScriptedInteraction::new(["1", "5", "1", "6"]);
        flow.execute(&mut io).unwrap();
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
        assert!(flow.registry().is_empty());

        // Segunda corrida: el registro arranca de cero otra vez.
        let mut io = ScriptedInteraction::new(["2", "2"]);
        flow.execute(&mut io).unwrap();
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 0, 1, 2]);
        assert!(flow.registry().is_empty());
    }

    #[test]
    fn started_counts_every_execute_even_when_all_skipped() {
        let mut flow = Flow::new("skips");
        flow.push(TitleStep::new());
        let mut io = ScriptedInteraction::new(["2", "2"]);
        let first = flow.execute(&mut io).unwrap();
        let second = flow.execute(&mut io).unwrap();
        assert_eq!(flow.started(), 2);
        assert_eq!((first.completed, first.skipped), (0, 1));
        assert_ne!(first.run_id, second.run_id);
        assert_eq!(flow.total_skips(), 2);
    }

    #[test]
    fn aborted_run_still_counts_and_clears_registry() {
        let mut flow = Flow::new("corte");
        flow.push(NumberInputStep::new("a")).push(NumberInputStep::new("b"));
        let mut io = ScriptedInteraction::new(["1", "3", "1"]);
        let res = flow.execute(&mut io);
        assert!(matches!(res, Err(FlowError::InputClosed)));
        assert_eq!(flow.started(), 1);
        assert!(flow.registry().is_empty());
        let last = flow.events().pop().unwrap();
        assert!(matches!(last.kind, FlowEventKind::RunAborted { step_index: 1, .. }));
    }

    #[test]
    fn average_errors_without_data_is_defined() {
        let mut flow = Flow::new("vacío");
        assert!(matches!(flow.average_errors(), Err(FlowError::NoData)));
        flow.push(TitleStep::new());
        assert!(matches!(flow.average_errors(), Err(FlowError::NoData)));

        let mut io = ScriptedInteraction::default();
        flow.display_average_errors(&mut io);
        assert!(io.said("sin datos"));
    }

    #[test]
    fn average_errors_divides_by_steps_and_starts() {
        let mut flow = Flow::new("promedio");
        flow.push(TitleStep::new()).push(NumberInputStep::new("n"));
        // Corrida 1: 2 errores de elección en el título y 2 números inválidos.
        let mut io = ScriptedInteraction::new(["x", "y", "2", "1", "a", "b", "4"]);
        flow.execute(&mut io).unwrap();
        // Corrida 2: sin errores.
        let mut io = ScriptedInteraction::new(["2", "2"]);
        flow.execute(&mut io).unwrap();
        assert_eq!(flow.total_errors(), 4);
        assert_eq!(flow.average_errors().unwrap(), 1.0);

        let mut io = ScriptedInteraction::default();
        flow.display_errors(&mut io);
        assert!(io.said("Title Step: 2 (elección 2, entrada 0, operación 0)"));
        assert!(io.said("Number Input Step: 2 (elección 0, entrada 2, operación 0)"));
        flow.display_average_errors(&mut io);
        assert!(io.said("Promedio de errores: 1.00"));
    }

    #[test]
    fn events_record_each_step_outcome() {
        let mut flow = Flow::new("historial");
        flow.push(TitleStep::new()).push(NumberInputStep::new("n"));
        let mut io = ScriptedInteraction::new(["1", "T", "S", "2"]);
        let run = flow.execute(&mut io).unwrap();
        let kinds: Vec<FlowEventKind> = flow.run_events(run.run_id).into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds,
                   vec![FlowEventKind::RunStarted { step_count: 2 },
                        FlowEventKind::StepCompleted { step_index: 0, kind: StepKind::Title },
                        FlowEventKind::StepSkipped { step_index: 1, kind: StepKind::NumberInput },
                        FlowEventKind::RunFinished { completed: 1, skipped: 1 }]);
        let json = flow.events_json().unwrap();
        assert!(json.contains("RunFinished"));
    }
}
