//! flow-core: flujos interactivos de pasos con registro por corrida.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod interaction;
pub mod registry;
pub mod step;
pub mod workspace;

pub use engine::{Flow, FlowSummary, RunSummary, StepTally};
pub use errors::FlowError;
pub use event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
pub use interaction::{ConsoleInteraction, Interaction, LineInteraction, ScriptedInteraction};
pub use registry::{CatalogEntry, CatalogView, RunContext, RunRegistry};
pub use step::{blank, Operation, RegistryCategory, Screen, Step, StepKind, StepOutcome, StepStatus};
pub use workspace::Workspace;
