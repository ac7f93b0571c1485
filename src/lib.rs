//! procflow
//!
//! Librería del constructor de flujos interactivos:
//! - `config`: directorios de trabajo y límite de historial desde el entorno.
//! - `errors`: errores de catálogo y configuración.
//! - `catalog`: flujos en memoria indexados por nombre.
//! - `builder` y `menu`: la interfaz de texto sobre el catálogo.
//!
//! El motor de pasos vive en `flow-core`.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod menu;

pub use catalog::{FlowCatalog, FlowListing};
pub use config::{AppConfig, CONFIG};
pub use errors::AppError;
pub use menu::{run_menu, MenuAction};
