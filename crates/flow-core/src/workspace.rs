//! Directorios contra los que se resuelven los archivos de un flujo.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::constants::REPORT_EXTENSION;
use crate::step::{FileFlavor, FileSource};

/// Directorio de entrada (archivos de texto/CSV) y de reportes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub input_dir: PathBuf,
    pub report_dir: PathBuf,
}

impl Workspace {
    pub fn new(input_dir: impl Into<PathBuf>, report_dir: impl Into<PathBuf>) -> Self {
        Self { input_dir: input_dir.into(),
               report_dir: report_dir.into() }
    }

    /// Ambos directorios apuntan a `dir`.
    pub fn single(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref(), dir.as_ref())
    }

    /// Resuelve un nombre sin extensión dentro del directorio de entrada.
    pub fn resolve_input(&self, name: &str, flavor: FileFlavor) -> FileSource {
        FileSource::resolve(&self.input_dir, name, flavor)
    }

    /// Ruta del reporte `<title>.txt`.
    pub fn report_path(&self, title: &str) -> PathBuf {
        self.report_dir.join(format!("{title}{REPORT_EXTENSION}"))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::single(".")
    }
}

/// Agrega `block` al final de `path` (creándolo si no existe). Nunca trunca.
pub fn append_block(path: &Path, block: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{block}")?;
    Ok(())
}
