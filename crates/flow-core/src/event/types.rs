//! Tipos de evento del flujo y estructura `FlowEvent`.
//!
//! Rol en el flujo:
//! - Cada `Flow::execute` emite eventos a un `EventStore` append-only.
//! - Los eventos no alimentan las analíticas (esas viven en los contadores de
//!   cada step); sirven como historial inspeccionable de las corridas.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::step::StepKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowEventKind {
    /// Inicio de una corrida. Invariante: primer evento de cada `run_id`.
    RunStarted { step_count: usize },
    /// Un step terminó su ejecución.
    StepCompleted { step_index: usize, kind: StepKind },
    /// Un step fue omitido (por elección o por falta de datos).
    StepSkipped { step_index: usize, kind: StepKind },
    /// Cierre normal de la corrida.
    RunFinished { completed: usize, skipped: usize },
    /// La corrida se cortó (p.ej. la superficie interactiva se cerró).
    RunAborted { step_index: usize, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub run_id: Uuid,
    pub kind: FlowEventKind,
    pub ts: DateTime<Utc>,
}
