/// Estado de inicialización de un step.
///
/// Todo step nace `Pending` con valores por defecto. Cada `execute` lo deja en
/// `Configured` (se ejecutó y sus campos son reales) o `Skipped` (se omitió).
/// No existe transición de vuelta a `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StepStatus {
    /// Aún no se ha ejecutado nunca.
    #[default]
    Pending,
    /// La última ejecución completó el step.
    Configured,
    /// La última ejecución omitió el step.
    Skipped,
}

/// Resultado de una llamada a `Step::execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Skipped,
}

impl StepOutcome {
    pub fn status(self) -> StepStatus {
        match self {
            StepOutcome::Completed => StepStatus::Configured,
            StepOutcome::Skipped => StepStatus::Skipped,
        }
    }
}
