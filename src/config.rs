//! Configuración central de la aplicación.
//! Carga variables de entorno (.env ya aplicado por `main`) y expone una
//! estructura inmutable (`CONFIG`) con los directorios de trabajo y el tamaño
//! del historial de corridas.
use std::env;
use std::path::PathBuf;

use flow_core::constants::DEFAULT_HISTORY_LIMIT;
use flow_core::Workspace;
use log::warn;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::AppError;

pub const INPUT_DIR_VAR: &str = "PROCFLOW_INPUT_DIR";
pub const REPORT_DIR_VAR: &str = "PROCFLOW_REPORT_DIR";
pub const HISTORY_LIMIT_VAR: &str = "PROCFLOW_HISTORY_LIMIT";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Directorios de archivos de entrada y de reportes.
    pub files: FilesConfig,
    /// Historial de eventos por flujo.
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilesConfig {
    pub input_dir: PathBuf,
    pub report_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryConfig {
    /// Eventos retenidos por flujo en el store en memoria.
    pub limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { files: FilesConfig { input_dir: PathBuf::from("."),
                                    report_dir: PathBuf::from(".") },
               history: HistoryConfig { limit: DEFAULT_HISTORY_LIMIT } }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let input_dir = lookup(INPUT_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.files.input_dir);
        let report_dir = lookup(REPORT_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.files.report_dir);
        let limit = match lookup(HISTORY_LIMIT_VAR) {
            Some(raw) => raw.trim()
                            .parse::<usize>()
                            .map_err(|e| AppError::Config(format!("{HISTORY_LIMIT_VAR}='{raw}': {e}")))?,
            None => defaults.history.limit,
        };
        Ok(Self { files: FilesConfig { input_dir, report_dir },
                  history: HistoryConfig { limit } })
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(&self.files.input_dir, &self.files.report_dir)
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
/// Una configuración inválida se reporta y se usan los valores por defecto.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_env().unwrap_or_else(|e| {
                             warn!("{e}; usando configuración por defecto");
                             AppConfig::default()
                         })
});
