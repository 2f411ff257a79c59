//! Terminal form for the three process values.
//!
//! Each prompt shows the current value; an empty answer (or end of input)
//! keeps it. A comma is accepted as decimal separator.

use crate::core::ProcessInput;
use crate::core::solver::MAX_BRIX;
use crate::utils::error::{BrixError, Result};
use crate::utils::validation::{validate_range, validate_strictly_positive};
use std::io::{BufRead, Write};

pub const MAX_ATTEMPTS: usize = 3;

struct Field {
    name: &'static str,
    label: &'static str,
    check: fn(&str, f64) -> Result<()>,
}

fn check_brix(name: &str, value: f64) -> Result<()> {
    validate_range(name, value, 0.0, MAX_BRIX)
}

const MASS: Field = Field {
    name: "initial_mass",
    label: "Initial pulp mass (kg)",
    check: validate_strictly_positive,
};

const INITIAL_BRIX: Field = Field {
    name: "initial_brix",
    label: "Initial °Brix of the pulp (%)",
    check: check_brix,
};

const TARGET_BRIX: Field = Field {
    name: "target_brix",
    label: "Desired final °Brix (%)",
    check: check_brix,
};

pub fn prompt_process_input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    defaults: ProcessInput,
) -> Result<ProcessInput> {
    let initial_mass = prompt_field(reader, writer, &MASS, defaults.initial_mass)?;
    let initial_brix = prompt_field(reader, writer, &INITIAL_BRIX, defaults.initial_brix)?;
    let target_brix = prompt_field(reader, writer, &TARGET_BRIX, defaults.target_brix)?;

    Ok(ProcessInput::new(initial_mass, initial_brix, target_brix))
}

fn prompt_field<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: &Field,
    default: f64,
) -> Result<f64> {
    let mut last_answer = String::new();

    for _ in 0..MAX_ATTEMPTS {
        write!(writer, "{} [{}]: ", field.label, default)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(default);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }

        match answer.replace(',', ".").parse::<f64>() {
            Ok(value) => match (field.check)(field.name, value) {
                Ok(()) => return Ok(value),
                Err(e) => writeln!(writer, "{}", e.user_friendly_message())?,
            },
            Err(_) => writeln!(writer, "'{}' is not a number, try again", answer)?,
        }
        last_answer = answer.to_string();
    }

    Err(BrixError::InvalidConfigValueError {
        field: field.name.to_string(),
        value: last_answer,
        reason: format!("No valid value after {} attempts", MAX_ATTEMPTS),
    })
}
