use uuid::Uuid;

use super::RunRegistry;
use crate::step::{RegistryCategory, Step};
use crate::workspace::Workspace;

/// Vista de una corrida entregada a `Step::execute`.
///
/// Expone sólo los steps que ya terminaron en esta corrida (los anteriores
/// al step en curso) y el registro que los clasifica.
pub struct RunContext<'a> {
    run_id: Uuid,
    registry: &'a RunRegistry,
    executed: &'a [Box<dyn Step>],
    workspace: &'a Workspace,
}

impl<'a> RunContext<'a> {
    #[inline]
    pub fn new(run_id: Uuid,
               registry: &'a RunRegistry,
               executed: &'a [Box<dyn Step>],
               workspace: &'a Workspace)
               -> Self {
        Self { run_id,
               registry,
               executed,
               workspace }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn registry(&self) -> &'a RunRegistry {
        self.registry
    }

    pub fn workspace(&self) -> &'a Workspace {
        self.workspace
    }

    pub fn count(&self, category: RegistryCategory) -> usize {
        self.registry.count(category)
    }

    /// Steps registrados en `category`, en orden de registro.
    pub fn steps_in(&self, category: RegistryCategory) -> impl Iterator<Item = &'a dyn Step> + 'a {
        let executed = self.executed;
        self.registry
            .indices(category)
            .iter()
            .filter_map(move |&i| executed.get(i).map(|s| &**s))
    }
}
