use std::collections::VecDeque;
use std::fmt::Debug;

use chrono::Utc;
use uuid::Uuid;

use super::{FlowEvent, FlowEventKind};
use crate::constants::DEFAULT_HISTORY_LIMIT;

/// Almacenamiento de eventos append-only.
pub trait EventStore: Debug {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: FlowEventKind) -> FlowEvent;
    /// Lista los eventos de una corrida (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<FlowEvent>;
    /// Todos los eventos retenidos, en orden.
    fn all(&self) -> Vec<FlowEvent>;
}

/// Store en memoria con capacidad acotada: al superar `limit` descarta los
/// eventos más viejos. `seq` sigue creciendo aunque se descarten.
#[derive(Debug)]
pub struct InMemoryEventStore {
    inner: VecDeque<FlowEvent>,
    next_seq: u64,
    limit: usize,
}

impl InMemoryEventStore {
    pub fn with_limit(limit: usize) -> Self {
        Self { inner: VecDeque::new(),
               next_seq: 0,
               limit: limit.max(1) }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: FlowEventKind) -> FlowEvent {
        let ev = FlowEvent { seq: self.next_seq,
                             run_id,
                             kind,
                             ts: Utc::now() };
        self.next_seq += 1;
        self.inner.push_back(ev.clone());
        while self.inner.len() > self.limit {
            self.inner.pop_front();
        }
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<FlowEvent> {
        self.inner.iter().filter(|e| e.run_id == run_id).cloned().collect()
    }

    fn all(&self) -> Vec<FlowEvent> {
        self.inner.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_monotonic_and_lists_by_run() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.append_kind(a, FlowEventKind::RunStarted { step_count: 1 });
        store.append_kind(b, FlowEventKind::RunStarted { step_count: 2 });
        let ev = store.append_kind(a, FlowEventKind::RunFinished { completed: 1, skipped: 0 });
        assert_eq!(ev.seq, 2);
        assert_eq!(store.list(a).len(), 2);
        assert_eq!(store.list(b).len(), 1);
    }

    #[test]
    fn limit_drops_oldest() {
        let mut store = InMemoryEventStore::with_limit(2);
        let run = Uuid::new_v4();
        for i in 0..3 {
            store.append_kind(run, FlowEventKind::StepCompleted { step_index: i, kind: crate::step::StepKind::Title });
        }
        let seqs: Vec<u64> = store.all().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2]);
    }
}
