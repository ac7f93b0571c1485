//! Step de cálculo sobre dos entradas numéricas previas de la misma corrida.
//!
//! Máquina de estados dentro de `Collecting`:
//! `ChooseOperand1` -> `ChooseOperand2` -> `ChooseOperation` -> `Done`.
//! Los operandos son posiciones 1-based sobre las entradas numéricas
//! registradas (pantalla 1); la operación se elige por ordinal, símbolo o
//! palabra clave (pantalla 2). Una vez elegido "ejecutar" no hay omisión.

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::protocol::{await_choice, read_position, RunChoice};
use super::{Screen, Step, StepKind, StepOutcome, StepStats, StepStatus};
use crate::errors::FlowError;
use crate::interaction::Interaction;
use crate::registry::{CatalogView, RunContext};
use crate::step::RegistryCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Min,
    Max,
}

impl Operation {
    pub const ALL: [Operation; 6] = [Operation::Addition,
                                     Operation::Subtraction,
                                     Operation::Multiplication,
                                     Operation::Division,
                                     Operation::Min,
                                     Operation::Max];

    /// Acepta ordinal (`1`..`6`), símbolo (`+ - * /`) o palabra clave.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "+" | "add" | "addition" => Some(Operation::Addition),
            "2" | "-" | "subtract" | "subtraction" => Some(Operation::Subtraction),
            "3" | "*" | "multiply" | "multiplication" => Some(Operation::Multiplication),
            "4" | "/" | "divide" | "division" => Some(Operation::Division),
            "5" | "min" => Some(Operation::Min),
            "6" | "max" => Some(Operation::Max),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
            Operation::Min => "Min",
            Operation::Max => "Max",
        }
    }

    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Operation::Addition => Some("+"),
            Operation::Subtraction => Some("-"),
            Operation::Multiplication => Some("*"),
            Operation::Division => Some("/"),
            Operation::Min | Operation::Max => None,
        }
    }

    /// División entre cero sigue IEEE-754 (±inf / NaN).
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => a / b,
            Operation::Min => {
                if a < b {
                    a
                } else {
                    b
                }
            }
            Operation::Max => {
                if a > b {
                    a
                } else {
                    b
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resultado retenido de la última ejecución completa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub operand1: f64,
    pub operand2: f64,
    pub operation: Operation,
    pub result: f64,
}

impl Calculation {
    pub fn compute(operand1: f64, operand2: f64, operation: Operation) -> Self {
        Self { operand1,
               operand2,
               operation,
               result: operation.apply(operand1, operand2) }
    }
}

#[derive(Debug, Default)]
pub struct CalculusStep {
    calculation: Option<Calculation>,
    status: StepStatus,
    stats: StepStats,
}

impl CalculusStep {
    pub fn new() -> Self {
        Self::default()
    }

    fn choose_operand(&mut self,
                      ordinal: &str,
                      ctx: &RunContext<'_>,
                      io: &mut dyn Interaction)
                      -> Result<f64, FlowError> {
        let view = CatalogView::new(ctx, &[RegistryCategory::NumberInput]);
        view.show(io);
        let pos = read_position(&format!("{ordinal} operando: "), view.len(), Screen::Input, &mut self.stats, io)?;
        Ok(view.get(pos).and_then(|entry| entry.step.number()).unwrap_or_default())
    }

    fn choose_operation(&mut self, io: &mut dyn Interaction) -> Result<Operation, FlowError> {
        for (i, op) in Operation::ALL.iter().enumerate() {
            match op.symbol() {
                Some(sym) => io.say(&format!("{}. {} ({sym})", i + 1, op.name())),
                None => io.say(&format!("{}. {}", i + 1, op.name())),
            }
        }
        loop {
            let answer = io.prompt("Operación: ")?;
            if let Some(op) = Operation::parse(&answer) {
                return Ok(op);
            }
            self.stats.add_error(Screen::Operation);
            io.say("Operación no soportada.");
        }
    }
}

impl Step for CalculusStep {
    fn kind(&self) -> StepKind {
        StepKind::Calculus
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn stats(&self) -> &StepStats {
        &self.stats
    }

    fn execute(&mut self, ctx: &RunContext<'_>, io: &mut dyn Interaction) -> Result<StepOutcome, FlowError> {
        // Un resultado sólo vale para la corrida que lo calculó.
        self.calculation = None;
        if ctx.count(RegistryCategory::NumberInput) == 0 {
            io.say(&format!("== {} ==", self.step_name()));
            io.say("No hay entradas numéricas en esta corrida; se omite el cálculo.");
            self.stats.add_skip();
            self.status = StepStatus::Skipped;
            return Ok(StepOutcome::Skipped);
        }
        if await_choice(self.step_name(), &mut self.stats, io)? == RunChoice::Skip {
            self.status = StepStatus::Skipped;
            return Ok(StepOutcome::Skipped);
        }

        let operand1 = self.choose_operand("Primer", ctx, io)?;
        let operand2 = self.choose_operand("Segundo", ctx, io)?;
        let operation = self.choose_operation(io)?;
        let calc = Calculation::compute(operand1, operand2, operation);
        debug!("cálculo {operand1} {operation} {operand2} = {}", calc.result);
        info!("Calculus: {} -> {}", operation, calc.result);
        io.say(&format!("Operation: {}", operation.name()));
        io.say(&format!("Result: {}", calc.result));

        self.calculation = Some(calc);
        self.status = StepStatus::Configured;
        Ok(StepOutcome::Completed)
    }

    fn label(&self) -> String {
        match &self.calculation {
            Some(c) => format!("{}: {} = {}", self.step_name(), c.operation, c.result),
            None => format!("{}: (sin resultado)", self.step_name()),
        }
    }

    fn report(&self) -> String {
        match &self.calculation {
            Some(c) => format!("Operation: {}\nOperand 1: {}\nOperand 2: {}\nResult: {}",
                               c.operation, c.operand1, c.operand2, c.result),
            None => "Operation: NONE\nResult: NONE".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_ordinal_symbol_and_keyword() {
        assert_eq!(Operation::parse("1"), Some(Operation::Addition));
        assert_eq!(Operation::parse("+"), Some(Operation::Addition));
        assert_eq!(Operation::parse("-"), Some(Operation::Subtraction));
        assert_eq!(Operation::parse(" * "), Some(Operation::Multiplication));
        assert_eq!(Operation::parse("/"), Some(Operation::Division));
        assert_eq!(Operation::parse("5"), Some(Operation::Min));
        assert_eq!(Operation::parse("MAX"), Some(Operation::Max));
        assert_eq!(Operation::parse("divide"), Some(Operation::Division));
        assert_eq!(Operation::parse("7"), None);
        assert_eq!(Operation::parse("%"), None);
    }

    #[test]
    fn apply_matches_each_operation() {
        assert_eq!(Operation::Addition.apply(3.0, 4.0), 7.0);
        assert_eq!(Operation::Subtraction.apply(3.0, 4.0), -1.0);
        assert_eq!(Operation::Multiplication.apply(3.0, 4.0), 12.0);
        assert_eq!(Operation::Division.apply(3.0, 4.0), 0.75);
        assert_eq!(Operation::Min.apply(3.0, 4.0), 3.0);
        assert_eq!(Operation::Max.apply(3.0, 4.0), 4.0);
    }

    #[test]
    fn division_by_zero_is_not_guarded() {
        assert_eq!(Operation::Division.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Division.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Division.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn calculation_keeps_operands() {
        let c = Calculation::compute(10.0, 2.0, Operation::Division);
        assert_eq!((c.operand1, c.operand2, c.result), (10.0, 2.0, 5.0));
        assert_eq!(c.operation.name(), "Division");
    }
}
