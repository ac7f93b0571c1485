use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::warn;

use super::Interaction;
use crate::errors::FlowError;

/// Interacción sobre cualquier par lector/escritor de líneas.
#[derive(Debug)]
pub struct LineInteraction<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

/// Consola estándar del proceso.
pub type ConsoleInteraction = LineInteraction<StdinLock<'static>, Stdout>;

impl LineInteraction<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInteraction<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Interaction for LineInteraction<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String, FlowError> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(FlowError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            warn!("no se pudo escribir en la superficie interactiva: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_trims_and_writes_message() {
        let mut ui = LineInteraction::new(Cursor::new("  42 \nfin\n"), Vec::new());
        assert_eq!(ui.prompt("Número: ").unwrap(), "42");
        ui.say("hola");
        assert_eq!(ui.prompt("> ").unwrap(), "fin");
        let written = String::from_utf8(ui.into_writer()).unwrap();
        assert_eq!(written, "Número: hola\n> ");
    }

    #[test]
    fn exhausted_reader_is_input_closed() {
        let mut ui = LineInteraction::new(Cursor::new(""), Vec::new());
        assert!(matches!(ui.prompt("? "), Err(FlowError::InputClosed)));
    }
}
