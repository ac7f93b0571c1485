use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::step::StepKind;

/// Resultado de una llamada a `Flow::execute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub completed: usize,
    pub skipped: usize,
}

/// Contadores de un step dentro del flujo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTally {
    pub position: usize,
    pub kind: StepKind,
    pub name: String,
    pub errors: [u32; crate::constants::ERROR_SCREENS],
    pub total_errors: u32,
    pub skips: u32,
}

/// Foto serializable de un flujo.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSummary {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub started: u32,
    pub steps: Vec<StepTally>,
    pub total_errors: u32,
    pub total_skips: u32,
}
