use std::collections::VecDeque;

use super::Interaction;
use crate::errors::FlowError;

/// Interacción guionada: responde con líneas encoladas y guarda todo lo
/// emitido. Cuando se agotan las respuestas se comporta como una entrada
/// cerrada.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(answers: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { answers: answers.into_iter().map(Into::into).collect(),
               prompts: Vec::new(),
               output: Vec::new() }
    }

    /// Mensajes de `prompt` en el orden en que se mostraron.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Líneas emitidas con `say`.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// `true` si alguna línea emitida contiene `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.output.iter().any(|l| l.contains(needle))
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt(&mut self, message: &str) -> Result<String, FlowError> {
        self.prompts.push(message.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or(FlowError::InputClosed)
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
