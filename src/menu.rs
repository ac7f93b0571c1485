//! Menú de texto sobre un `FlowCatalog`.
//!
//! Corre contra cualquier `Interaction`; el binario usa la consola. Los
//! errores de una acción se muestran y el menú sigue. Cerrar la entrada
//! termina el menú.
use flow_core::{FlowError, Interaction};
use log::{info, warn};

use crate::builder::prompt_step;
use crate::catalog::FlowCatalog;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateFlow,
    ListFlows,
    DeleteFlow,
    AddStep,
    RunFlow,
    ShowSkips,
    ShowErrors,
    ShowAverageErrors,
    ShowHistory,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 10] = [MenuAction::CreateFlow,
                                       MenuAction::ListFlows,
                                       MenuAction::DeleteFlow,
                                       MenuAction::AddStep,
                                       MenuAction::RunFlow,
                                       MenuAction::ShowSkips,
                                       MenuAction::ShowErrors,
                                       MenuAction::ShowAverageErrors,
                                       MenuAction::ShowHistory,
                                       MenuAction::Exit];

    pub fn key(self) -> &'static str {
        match self {
            MenuAction::CreateFlow => "1",
            MenuAction::ListFlows => "2",
            MenuAction::DeleteFlow => "3",
            MenuAction::AddStep => "4",
            MenuAction::RunFlow => "5",
            MenuAction::ShowSkips => "6",
            MenuAction::ShowErrors => "7",
            MenuAction::ShowAverageErrors => "8",
            MenuAction::ShowHistory => "9",
            MenuAction::Exit => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::CreateFlow => "Crear flujo",
            MenuAction::ListFlows => "Listar flujos",
            MenuAction::DeleteFlow => "Eliminar flujo",
            MenuAction::AddStep => "Agregar paso",
            MenuAction::RunFlow => "Ejecutar flujo",
            MenuAction::ShowSkips => "Ver omisiones",
            MenuAction::ShowErrors => "Ver errores",
            MenuAction::ShowAverageErrors => "Promedio de errores",
            MenuAction::ShowHistory => "Historial de corridas (JSON)",
            MenuAction::Exit => "Salir",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == raw.trim())
    }
}

fn show_menu(io: &mut dyn Interaction) {
    io.say("== procflow ==");
    for action in MenuAction::ALL {
        io.say(&format!("{}. {}", action.key(), action.label()));
    }
}

/// Ciclo principal del menú. Devuelve `Ok(())` al elegir salir o cuando la
/// entrada se cierra.
pub fn run_menu(catalog: &mut FlowCatalog, io: &mut dyn Interaction) -> Result<(), AppError> {
    loop {
        show_menu(io);
        let answer = match io.prompt("Opción: ") {
            Ok(answer) => answer,
            Err(FlowError::InputClosed) => {
                info!("entrada cerrada; saliendo del menú");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let Some(action) = MenuAction::parse(&answer) else {
            warn!("opción de menú inválida '{answer}'");
            io.say("Opción inválida.");
            continue;
        };
        if action == MenuAction::Exit {
            return Ok(());
        }
        match dispatch(action, catalog, io) {
            Ok(()) => {}
            Err(AppError::Flow(FlowError::InputClosed)) => {
                info!("entrada cerrada durante '{}'", action.label());
                return Ok(());
            }
            Err(e) => {
                warn!("{}: {e}", action.label());
                io.say(&format!("Error: {e}"));
            }
        }
    }
}

fn ask_flow_name(io: &mut dyn Interaction) -> Result<String, AppError> {
    Ok(io.prompt("Nombre del flujo: ")?)
}

fn dispatch(action: MenuAction, catalog: &mut FlowCatalog, io: &mut dyn Interaction) -> Result<(), AppError> {
    match action {
        MenuAction::CreateFlow => {
            let name = ask_flow_name(io)?;
            let flow = catalog.create(&name)?;
            io.say(&format!("Flujo '{}' creado.", flow.name()));
        }
        MenuAction::ListFlows => {
            let listing = catalog.list();
            if listing.is_empty() {
                io.say("No hay flujos.");
            }
            for l in listing {
                io.say(&format!("{}. {} ({} pasos, {} inicios, creado {})",
                                l.position,
                                l.name,
                                l.steps,
                                l.started,
                                l.created_at.format("%Y-%m-%d %H:%M")));
            }
        }
        MenuAction::DeleteFlow => {
            let name = ask_flow_name(io)?;
            let flow = catalog.delete(&name)?;
            io.say(&format!("Flujo '{}' eliminado.", flow.name()));
        }
        MenuAction::AddStep => {
            let name = ask_flow_name(io)?;
            catalog.get(&name)?;
            let workspace = catalog.workspace().clone();
            let step = prompt_step(&workspace, io)?;
            let flow = catalog.get_mut(&name)?;
            let position = flow.add_step(step) + 1;
            io.say(&format!("Paso #{position} agregado a '{}'.", flow.name()));
        }
        MenuAction::RunFlow => {
            let name = ask_flow_name(io)?;
            let flow = catalog.get_mut(&name)?;
            let run = flow.execute(io)?;
            io.say(&format!("Corrida terminada: {} completados, {} omitidos.", run.completed, run.skipped));
        }
        MenuAction::ShowSkips => catalog.get(&ask_flow_name(io)?)?.display_skips(io),
        MenuAction::ShowErrors => catalog.get(&ask_flow_name(io)?)?.display_errors(io),
        MenuAction::ShowAverageErrors => catalog.get(&ask_flow_name(io)?)?.display_average_errors(io),
        MenuAction::ShowHistory => {
            let json = catalog.get(&ask_flow_name(io)?)?.events_json()?;
            io.say(&json);
        }
        MenuAction::Exit => {}
    }
    Ok(())
}
