//! Historial de corridas (eventos append-only por flujo).

pub mod store;
pub mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{FlowEvent, FlowEventKind};
