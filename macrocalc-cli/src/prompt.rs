use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;
use macrocalc_model::{ActivityLevel, Goal};
use strum::IntoEnumIterator;

use crate::{Calculator, Error, Field, Result};

const TEXT_QUESTIONS: [(Field, &str); 5] = [
    (Field::Gender, "Gender (male/female)"),
    (Field::Age, "Age (years)"),
    (Field::Weight, "Weight (lbs)"),
    (Field::HeightFt, "Height (ft)"),
    (Field::HeightIn, "Height (in)"),
];

/// Asks for every field in turn. An empty answer keeps the current value and
/// an unknown choice is asked again. Stops quietly at end of input.
pub fn fill_form<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    for (field, question) in TEXT_QUESTIONS {
        let Some(answer) = ask(input, output, question)? else {
            return Ok(());
        };
        if !answer.trim().is_empty() {
            calculator.set_field(field, &answer)?;
        }
    }

    writeln!(output, "Daily Activity Level")?;
    for level in ActivityLevel::iter() {
        writeln!(output, "  {:<10} {}", level, level.label())?;
    }
    let choices = ActivityLevel::iter().join("/");
    if !ask_choice(calculator, input, output, Field::ActivityLevel, &choices)? {
        return Ok(());
    }

    writeln!(output, "Describe Your Goal")?;
    for goal in Goal::iter() {
        writeln!(output, "  {:<12} {}: {}", goal, goal.label(), goal.description())?;
    }
    let choices = Goal::iter().join("/");
    ask_choice(calculator, input, output, Field::Goal, &choices)?;

    Ok(())
}

/// Returns false once input is exhausted.
fn ask_choice<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    input: &mut R,
    output: &mut W,
    field: Field,
    choices: &str,
) -> Result<bool> {
    loop {
        let Some(answer) = ask(input, output, choices)? else {
            return Ok(false);
        };
        if answer.trim().is_empty() {
            return Ok(true);
        }
        match calculator.set_field(field, &answer) {
            Ok(()) => return Ok(true),
            Err(e @ Error::UnknownChoice { .. }) => writeln!(output, "{}", e)?,
            Err(e) => return Err(e),
        }
    }
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(output, "{}: ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("End of input while asking for {}", question);
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}
