use std::fs;

use flow_core::{ScriptedInteraction, Workspace};
use procflow::{run_menu, FlowCatalog};

#[test]
fn build_and_run_a_calculation_flow_from_the_menu() {
    let mut catalog = FlowCatalog::default();
    let mut io = ScriptedInteraction::new([// crear (y repetir el nombre)
                                           "1", "demo", "1", "demo",
                                           // dos entradas numéricas y un cálculo
                                           "4", "demo", "4", "A", "4", "demo", "4", "B", "4", "demo", "5",
                                           // listar
                                           "2",
                                           // ejecutar: A=3, B=4, 1 + 2
                                           "5", "demo", "1", "3", "1", "4", "1", "1", "2", "+",
                                           // analíticas e historial
                                           "8", "demo", "9", "demo",
                                           // eliminar uno inexistente y salir
                                           "3", "nada", "0"]);

    run_menu(&mut catalog, &mut io).expect("menu");

    assert!(io.said("Flujo 'demo' creado."));
    assert!(io.said("Error: Ya existe un flujo llamado 'demo'"));
    assert!(io.said("Paso #3 agregado a 'demo'."));
    assert!(io.said("1. demo (3 pasos, 0 inicios"));
    assert!(io.said("Result: 7"));
    assert!(io.said("Corrida terminada: 3 completados, 0 omitidos."));
    assert!(io.said("Promedio de errores: 0.00"));
    assert!(io.said("RunFinished"));
    assert!(io.said("Error: Flujo no encontrado: nada"));
    assert_eq!(io.remaining(), 0);

    let flow = catalog.get("demo").unwrap();
    assert_eq!(flow.started(), 1);
    assert!(flow.registry().is_empty());
}

#[test]
fn closing_input_mid_run_leaves_the_menu_cleanly() {
    let mut catalog = FlowCatalog::default();
    let mut io = ScriptedInteraction::new(["1", "corto", "4", "corto", "4", "n", "5", "corto", "1"]);

    run_menu(&mut catalog, &mut io).expect("closed input is not an error");

    let flow = catalog.get("corto").unwrap();
    assert_eq!(flow.started(), 1);
    assert!(flow.registry().is_empty());
}

#[test]
fn file_display_and_report_from_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notas.txt"), "hola\n").unwrap();
    let mut catalog = FlowCatalog::new(Workspace::single(dir.path()), 50);
    let mut io = ScriptedInteraction::new(["1", "docs",
                                           "4", "docs", "6", "apuntes", "notas",
                                           "4", "docs", "8",
                                           "4", "docs", "9",
                                           "5", "docs",
                                           // archivo, mostrar el 1, reporte con una copia
                                           "1", "1", "1", "1", "informe", "resumen", "1", "1", "2",
                                           "0"]);

    run_menu(&mut catalog, &mut io).expect("menu");

    assert!(io.said("hola"));
    let report = fs::read_to_string(dir.path().join("informe.txt")).unwrap();
    assert_eq!(report, "resumen\nDescription: apuntes\nFile Name: notas.txt\nhola\n");
}
