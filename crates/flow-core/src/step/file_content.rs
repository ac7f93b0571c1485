//! Steps respaldados por archivo (sabores texto y CSV).
//!
//! El archivo sólo se abre cuando se pide su contenido y se cierra antes de
//! volver; ningún handle sobrevive entre steps. Un archivo inexistente se
//! reporta y a partir de ahí su lectura simplemente no produce líneas.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;

use super::protocol::{await_choice, read_text, RunChoice};
use super::{Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::constants::{CSV_EXTENSION, DEFAULT_FILE_NAME, TEXT_EXTENSION};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::RunContext;
use crate::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFlavor {
    Text,
    Csv,
}

impl FileFlavor {
    pub fn extension(self) -> &'static str {
        match self {
            FileFlavor::Text => TEXT_EXTENSION,
            FileFlavor::Csv => CSV_EXTENSION,
        }
    }

    pub fn kind(self) -> StepKind {
        match self {
            FileFlavor::Text => StepKind::TextFile,
            FileFlavor::Csv => StepKind::CsvFile,
        }
    }
}

/// Referencia a un archivo de contenido ya resuelto (con extensión).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    name: String,
    path: PathBuf,
}

impl FileSource {
    pub fn resolve(dir: &Path, name: &str, flavor: FileFlavor) -> Self {
        let name = format!("{}{}", name.trim(), flavor.extension());
        Self { path: dir.join(&name),
               name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Lee todas las líneas. Un archivo ausente o ilegible produce una lista
    /// vacía; el handle se libera al salir.
    pub fn read_lines(&self) -> Vec<String> {
        match File::open(&self.path) {
            Ok(file) => BufReader::new(file).lines().map_while(Result::ok).collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct FileContentStep {
    flavor: FileFlavor,
    description: String,
    source: Option<FileSource>,
    /// `true` si el nombre se fijó al construir; si no, se pide al ejecutar.
    literal: bool,
    status: StepStatus,
    stats: StepStats,
}

impl FileContentStep {
    /// Step cuyo archivo se pide en cada ejecución.
    pub fn new(flavor: FileFlavor, description: impl Into<String>) -> Self {
        Self { flavor,
               description: description.into(),
               source: None,
               literal: false,
               status: StepStatus::Pending,
               stats: StepStats::default() }
    }

    /// Step con nombre literal; la existencia se comprueba aquí.
    pub fn with_file(flavor: FileFlavor, description: impl Into<String>, name: &str, workspace: &Workspace) -> Self {
        let source = workspace.resolve_input(name, flavor);
        if !source.exists() {
            warn!("archivo no encontrado: {}", source.path().display());
        }
        Self { source: Some(source),
               literal: true,
               ..Self::new(flavor, description) }
    }

    /// Nombre del archivo con extensión, o `NOFILE` si aún no hay uno.
    pub fn file_name(&self) -> &str {
        self.source.as_ref().map(FileSource::name).unwrap_or(DEFAULT_FILE_NAME)
    }

    pub fn is_missing(&self) -> bool {
        self.source.as_ref().is_some_and(|s| !s.exists())
    }

    pub fn lines(&self) -> Vec<String> {
        self.source.as_ref().map(FileSource::read_lines).unwrap_or_default()
    }
}

impl Step for FileContentStep {
    fn kind(&self) -> StepKind {
        self.flavor.kind()
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn stats(&self) -> &StepStats {
        &self.stats
    }

    fn execute(&mut self, ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
        if !self.literal {
            self.source = None;
        }
        let outcome = match await_choice(self.step_name(), &mut self.stats, io)? {
            RunChoice::Skip => StepOutcome::Skipped,
            RunChoice::Run => {
                if self.description.is_empty() {
                    self.description = read_text("Descripción: ", io)?;
                }
                if !self.literal {
                    let name = read_text("Nombre del archivo (sin extensión): ", io)?;
                    self.source = Some(ctx.workspace().resolve_input(&name, self.flavor));
                }
                if self.is_missing() {
                    warn!("archivo no encontrado: {}", self.file_name());
                    io.say(&format!("Error: archivo no encontrado ({})", self.file_name()));
                }
                io.say(&format!("Process Description: {}", self.description));
                io.say(&format!("File Name: {}", self.file_name()));
                for line in self.lines() {
                    io.say(&line);
                }
                StepOutcome::Completed
            }
        };
        self.status = outcome.status();
        Ok(outcome)
    }

    fn label(&self) -> String {
        format!("{}: {} ({})", self.step_name(), self.description, self.file_name())
    }

    fn report(&self) -> String {
        let mut block = format!("Description: {}\nFile Name: {}", self.description, self.file_name());
        for line in self.lines() {
            block.push('\n');
            block.push_str(&line);
        }
        block
    }

    fn file_source(&self) -> Option<&FileSource> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_appends_flavor_extension() {
        let txt = FileSource::resolve(Path::new("datos"), "notas", FileFlavor::Text);
        let csv = FileSource::resolve(Path::new("datos"), "tabla", FileFlavor::Csv);
        assert_eq!(txt.name(), "notas.txt");
        assert_eq!(csv.path(), Path::new("datos").join("tabla.csv"));
    }

    #[test]
    fn missing_file_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let step = FileContentStep::with_file(FileFlavor::Text, "x", "missing", &Workspace::single(dir.path()));
        assert!(step.is_missing());
        assert!(step.lines().is_empty());
        assert_eq!(step.file_name(), "missing.txt");
    }

    #[test]
    fn existing_file_is_read_line_by_line() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tabla.csv"), "a,b\n1,2\n").unwrap();
        let step = FileContentStep::with_file(FileFlavor::Csv, "tabla", "tabla", &Workspace::single(dir.path()));
        assert_eq!(step.kind(), StepKind::CsvFile);
        assert_eq!(step.lines(), vec!["a,b".to_string(), "1,2".to_string()]);
        assert!(step.report().ends_with("a,b\n1,2"));
    }

    #[test]
    fn unnamed_step_has_no_file() {
        let step = FileContentStep::new(FileFlavor::Text, "");
        assert_eq!(step.file_name(), "NOFILE");
        assert!(!step.is_missing());
        assert!(step.file_source().is_none());
    }
}
