//! Protocolo ejecutar/omitir y lectores validados compartidos por los steps.
//!
//! Cada lector vuelve a preguntar hasta obtener una respuesta válida y anota
//! el error en la pantalla indicada. Lo único que corta el ciclo es que la
//! superficie se cierre.

use log::{debug, warn};

use super::{Screen, StepStats};
use crate::constants::{NO_CHOICE, RUN_CHOICE, SKIP_CHOICE, YES_CHOICE};
use crate::errors::FlowError;
use crate::interaction::Interaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunChoice {
    Run,
    Skip,
}

/// Estado `AwaitChoice`: "1" ejecuta, "2" omite (y cuenta la omisión),
/// cualquier otra cosa es error de pantalla 0.
pub(crate) fn await_choice(step_name: &str,
                           stats: &mut StepStats,
                           io: &mut dyn Interaction)
                           -> Result<RunChoice, FlowError> {
    io.say(&format!("== {step_name} =="));
    loop {
        let answer = io.prompt(&format!("{RUN_CHOICE}. Ejecutar  {SKIP_CHOICE}. Omitir\nOpción: "))?;
        match answer.as_str() {
            RUN_CHOICE => {
                debug!("{step_name}: ejecutar");
                return Ok(RunChoice::Run);
            }
            SKIP_CHOICE => {
                debug!("{step_name}: omitir");
                stats.add_skip();
                return Ok(RunChoice::Skip);
            }
            other => {
                warn!("{step_name}: opción inválida '{other}'");
                stats.add_error(Screen::Choice);
                io.say("Opción inválida. Escribe 1 o 2.");
            }
        }
    }
}

/// Pregunta sí/no; "1" es sí, "2" es no. Errores en pantalla 0.
pub(crate) fn confirm(message: &str, stats: &mut StepStats, io: &mut dyn Interaction) -> Result<bool, FlowError> {
    loop {
        let answer = io.prompt(&format!("{message}\n{YES_CHOICE}. Sí  {NO_CHOICE}. No\nOpción: "))?;
        match answer.as_str() {
            YES_CHOICE => return Ok(true),
            NO_CHOICE => return Ok(false),
            _ => {
                stats.add_error(Screen::Choice);
                io.say("Opción inválida. Escribe 1 o 2.");
            }
        }
    }
}

/// Texto libre; cualquier línea es válida.
pub(crate) fn read_text(message: &str, io: &mut dyn Interaction) -> Result<String, FlowError> {
    io.prompt(message)
}

/// Texto que no puede quedar vacío; cada línea vacía suma un error en `screen`.
pub(crate) fn read_non_empty(message: &str,
                             screen: Screen,
                             stats: &mut StepStats,
                             io: &mut dyn Interaction)
                             -> Result<String, FlowError> {
    loop {
        let answer = io.prompt(message)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        stats.add_error(screen);
        io.say("El valor no puede estar vacío.");
    }
}

/// Interpreta `raw` como número. Sólo acepta valores finitos.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Número válido; cada intento ilegible suma un error en `screen`.
pub(crate) fn read_number(message: &str,
                          screen: Screen,
                          stats: &mut StepStats,
                          io: &mut dyn Interaction)
                          -> Result<f64, FlowError> {
    loop {
        let answer = io.prompt(message)?;
        match parse_number(&answer) {
            Some(n) => return Ok(n),
            None => {
                warn!("número inválido '{answer}'");
                stats.add_error(screen);
                io.say("Número inválido, inténtalo de nuevo.");
            }
        }
    }
}

/// Posición 1-based dentro de `[1, count]`. Texto no numérico o posiciones
/// fuera de rango suman un error en `screen`.
pub(crate) fn read_position(message: &str,
                            count: usize,
                            screen: Screen,
                            stats: &mut StepStats,
                            io: &mut dyn Interaction)
                            -> Result<usize, FlowError> {
    loop {
        let answer = io.prompt(message)?;
        match answer.parse::<usize>() {
            Ok(pos) if (1..=count).contains(&pos) => return Ok(pos),
            _ => {
                warn!("selección inválida '{answer}' (rango 1..={count})");
                stats.add_error(screen);
                io.say(&format!("Selección inválida. Elige un número entre 1 y {count}."));
            }
        }
    }
}
