//! Flujo: secuencia ordenada de steps, su ejecución y sus analíticas.

pub mod flow;
pub mod summary;

pub use flow::Flow;
pub use summary::{FlowSummary, RunSummary, StepTally};
