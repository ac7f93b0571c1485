use flow_core::FlowError;
use thiserror::Error;

/// Errores de la aplicación: catálogo de flujos y configuración.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Ya existe un flujo llamado '{0}'")]
    DuplicateFlow(String),
    #[error("Flujo no encontrado: {0}")]
    FlowNotFound(String),
    #[error("Validación fallida: {0}")]
    Validation(String),
    #[error(transparent)]
    Flow(#[from] FlowError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_variant_format() {
        let err = AppError::Config("PROCFLOW_HISTORY_LIMIT no es un número".into());
        assert_eq!(err.to_string(), "Error de configuración: PROCFLOW_HISTORY_LIMIT no es un número");
    }

    #[test]
    fn test_catalog_variants_format() {
        assert_eq!(AppError::DuplicateFlow("demo".into()).to_string(), "Ya existe un flujo llamado 'demo'");
        assert_eq!(AppError::FlowNotFound("otro".into()).to_string(), "Flujo no encontrado: otro");
    }

    #[test]
    fn test_flow_error_is_transparent() {
        let err: AppError = FlowError::NoData.into();
        assert_eq!(err.to_string(), FlowError::NoData.to_string());
    }
}
