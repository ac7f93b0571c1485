use std::process::ExitCode;

use flow_core::ConsoleInteraction;
use log::{error, info};
use procflow::{run_menu, FlowCatalog, CONFIG};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match serde_json::to_string(&*CONFIG) {
        Ok(json) => info!("configuración: {json}"),
        Err(e) => error!("no se pudo serializar la configuración: {e}"),
    }

    let mut catalog = FlowCatalog::from_config(&CONFIG);
    let mut io = ConsoleInteraction::stdio();
    match run_menu(&mut catalog, &mut io) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
