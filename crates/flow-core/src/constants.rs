//! Constantes del motor de pasos.
//!
//! Agrupa los literales que forman parte del contrato observable: las
//! respuestas del protocolo ejecutar/omitir, los valores centinela con los que
//! nace cada step y las extensiones que se añaden a los archivos.

/// Respuesta que elige ejecutar un step.
pub const RUN_CHOICE: &str = "1";
/// Respuesta que elige omitir un step.
pub const SKIP_CHOICE: &str = "2";

/// Respuesta afirmativa en preguntas sí/no.
pub const YES_CHOICE: &str = "1";
/// Respuesta negativa en preguntas sí/no.
pub const NO_CHOICE: &str = "2";

/// Cantidad de pantallas (puntos de interacción) con contador de errores propio.
pub const ERROR_SCREENS: usize = 3;

pub const DEFAULT_TITLE: &str = "NO TITLE";
pub const DEFAULT_SUBTITLE: &str = "NO SUBTITLE";
pub const DEFAULT_COPY: &str = "NO COPY";
pub const DEFAULT_TEXT: &str = "NO TEXT";
pub const DEFAULT_FILE_NAME: &str = "NOFILE";

pub const TEXT_EXTENSION: &str = ".txt";
pub const CSV_EXTENSION: &str = ".csv";
/// Extensión de los reportes generados por `OutputStep`.
pub const REPORT_EXTENSION: &str = ".txt";

/// Máximo de eventos retenidos por flujo cuando no se configura otro valor.
pub const DEFAULT_HISTORY_LIMIT: usize = 200;
