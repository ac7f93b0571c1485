//! Catálogo en memoria de flujos, indexado por nombre.
//!
//! Mantiene el orden de creación (`IndexMap`) y entrega a cada flujo nuevo
//! el `Workspace` y el límite de historial configurados.
use chrono::{DateTime, Utc};
use flow_core::{Flow, InMemoryEventStore, Workspace};
use indexmap::IndexMap;
use log::info;
use serde::Serialize;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Fila del listado de flujos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowListing {
    pub position: usize,
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub steps: usize,
    pub started: u32,
}

#[derive(Debug)]
pub struct FlowCatalog {
    flows: IndexMap<String, Flow>,
    workspace: Workspace,
    history_limit: usize,
}

impl FlowCatalog {
    pub fn new(workspace: Workspace, history_limit: usize) -> Self {
        Self { flows: IndexMap::new(),
               workspace,
               history_limit }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.workspace(), config.history.limit)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Crea un flujo vacío. El nombre (recortado) no puede ser vacío ni repetido.
    pub fn create(&mut self, name: &str) -> Result<&mut Flow, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("el nombre del flujo no puede estar vacío".into()));
        }
        if self.flows.contains_key(name) {
            return Err(AppError::DuplicateFlow(name.to_string()));
        }
        let flow = Flow::new(name).with_workspace(self.workspace.clone())
                                  .with_event_store(Box::new(InMemoryEventStore::with_limit(self.history_limit)));
        info!("flujo creado: {name} ({})", flow.id());
        let entry = self.flows.entry(name.to_string()).or_insert(flow);
        Ok(entry)
    }

    pub fn list(&self) -> Vec<FlowListing> {
        self.flows
            .values()
            .enumerate()
            .map(|(i, f)| FlowListing { position: i + 1,
                                        id: f.id(),
                                        name: f.name().to_string(),
                                        created_at: f.created_at(),
                                        steps: f.len(),
                                        started: f.started() })
            .collect()
    }

    pub fn get(&self, name: &str) -> Result<&Flow, AppError> {
        self.flows.get(name.trim()).ok_or_else(|| AppError::FlowNotFound(name.trim().to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Flow, AppError> {
        self.flows.get_mut(name.trim()).ok_or_else(|| AppError::FlowNotFound(name.trim().to_string()))
    }

    /// Elimina un flujo conservando el orden de los demás.
    pub fn delete(&mut self, name: &str) -> Result<Flow, AppError> {
        let flow = self.flows
                       .shift_remove(name.trim())
                       .ok_or_else(|| AppError::FlowNotFound(name.trim().to_string()))?;
        info!("flujo eliminado: {}", flow.name());
        Ok(flow)
    }
}

impl Default for FlowCatalog {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_core::step::TitleStep;

    #[test]
    fn create_rejects_empty_and_duplicate_names() {
        let mut catalog = FlowCatalog::default();
        catalog.create("demo").unwrap();
        assert!(matches!(catalog.create("  "), Err(AppError::Validation(_))));
        assert!(matches!(catalog.create(" demo "), Err(AppError::DuplicateFlow(n)) if n == "demo"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn list_keeps_creation_order_after_delete() {
        let mut catalog = FlowCatalog::default();
        for name in ["a", "b", "c"] {
            catalog.create(name).unwrap();
        }
        catalog.get_mut("b").unwrap().push(TitleStep::new());
        assert_eq!(catalog.get("b").unwrap().len(), 1);

        let removed = catalog.delete("a").unwrap();
        assert_eq!(removed.name(), "a");
        let listing = catalog.list();
        assert_eq!(listing.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(listing[0].position, 1);
        assert_eq!(listing[0].steps, 1);
        assert!(matches!(catalog.delete("a"), Err(AppError::FlowNotFound(_))));
    }

    #[test]
    fn created_flows_share_the_catalog_workspace() {
        let catalog_ws = Workspace::new("entrada", "reportes");
        let mut catalog = FlowCatalog::new(catalog_ws.clone(), 10);
        let flow = catalog.create("x").unwrap();
        assert_eq!(flow.workspace(), &catalog_ws);
    }
}
