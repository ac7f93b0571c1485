//! Superficie interactiva orientada a líneas.
//!
//! Los steps nunca tocan stdin/stdout directamente: todo pasa por un
//! `Interaction`. La consola real usa `LineInteraction` sobre stdin/stdout y
//! las pruebas usan `ScriptedInteraction` con respuestas encoladas.

mod line;
mod scripted;

pub use line::{ConsoleInteraction, LineInteraction};
pub use scripted::ScriptedInteraction;

use crate::errors::FlowError;

/// Contrato mínimo de la superficie interactiva.
pub trait Interaction {
    /// Muestra `message` y espera una línea de respuesta (sin espacios en los
    /// extremos). Devuelve `FlowError::InputClosed` si la entrada terminó.
    fn prompt(&mut self, message: &str) -> Result<String, FlowError>;

    /// Emite una línea completa hacia la superficie.
    fn say(&mut self, line: &str);
}
