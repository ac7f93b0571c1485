//! Creación interactiva de steps para agregarlos a un flujo.
use flow_core::step::{blank, FileContentStep, FileFlavor, NumberInputStep, TextInputStep};
use flow_core::{FlowError, Interaction, Step, StepKind, Workspace};
use log::{debug, warn};

/// Muestra los tipos disponibles y lee uno por su número (1-based).
pub fn prompt_kind(io: &mut dyn Interaction) -> Result<StepKind, FlowError> {
    for (i, kind) in StepKind::ALL.iter().enumerate() {
        io.say(&format!("{}. {kind}", i + 1));
    }
    loop {
        let answer = io.prompt("Tipo de paso: ")?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=StepKind::ALL.len()).contains(&n) => return Ok(StepKind::ALL[n - 1]),
            _ => {
                warn!("tipo de paso inválido '{answer}'");
                io.say(&format!("Elige un número entre 1 y {}.", StepKind::ALL.len()));
            }
        }
    }
}

/// Pregunta el tipo y los datos de configuración que ese tipo admite.
///
/// Las entradas de texto/número piden una descripción; vacía significa que se
/// preguntará al ejecutar. Los archivos aceptan además un nombre literal,
/// resuelto contra `workspace`.
pub fn prompt_step(workspace: &Workspace, io: &mut dyn Interaction) -> Result<Box<dyn Step>, FlowError> {
    let kind = prompt_kind(io)?;
    let step: Box<dyn Step> = match kind {
        StepKind::TextInput => Box::new(TextInputStep::new(io.prompt("Descripción: ")?)),
        StepKind::NumberInput => Box::new(NumberInputStep::new(io.prompt("Descripción: ")?)),
        StepKind::TextFile | StepKind::CsvFile => {
            let flavor = if kind == StepKind::TextFile { FileFlavor::Text } else { FileFlavor::Csv };
            let description = io.prompt("Descripción: ")?;
            let name = io.prompt("Nombre del archivo sin extensión (vacío = preguntar al ejecutar): ")?;
            if name.is_empty() {
                Box::new(FileContentStep::new(flavor, description))
            } else {
                let step = FileContentStep::with_file(flavor, description, &name, workspace);
                if step.is_missing() {
                    io.say(&format!("Error: archivo no encontrado ({})", step.file_name()));
                }
                Box::new(step)
            }
        }
        other => blank(other),
    };
    debug!("paso creado: {}", step.label());
    Ok(step)
}
