//! Errores del motor de pasos.
//!
//! Casi todo error interactivo se resuelve dentro del propio step (se cuenta y
//! se vuelve a preguntar). Lo que llega hasta aquí es lo que no se puede
//! reintentar: la superficie interactiva se cerró, IO del sistema, o
//! analíticas sin datos.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("sin datos: el flujo no tiene pasos o nunca se ha ejecutado")]
    NoData,
    #[error("entrada interactiva cerrada")]
    InputClosed,
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de serialización: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FlowError {
    fn from(e: serde_json::Error) -> Self {
        FlowError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_reads_as_a_defined_outcome() {
        assert_eq!(FlowError::NoData.to_string(),
                   "sin datos: el flujo no tiene pasos o nunca se ha ejecutado");
    }

    #[test]
    fn io_variant_from() {
        let err: FlowError = std::io::Error::other("disco lleno").into();
        assert_eq!(err.to_string(), "Error en IO: disco lleno");
    }

    #[test]
    fn serialization_variant_from_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FlowError = bad.into();
        assert!(err.to_string().starts_with("Error de serialización"));
    }
}
