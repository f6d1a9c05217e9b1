// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Interactive input for when the formula is not given on the command line.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

/// Asks one question and returns the trimmed answer.  End of input is an error.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("failed to read from standard input")?;
    if read == 0 {
        bail!("no answer to {:?}", question.trim_end());
    }
    Ok(answer.trim().to_owned())
}

/// Asks for the formula until a non-empty one is given.
pub fn ask_formula<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        let formula = ask(input, output, "Formula: ")?;
        if !formula.is_empty() {
            return Ok(formula);
        }
    }
}

/// Asks for the molecular charge.  An empty answer means a neutral molecule.
pub fn ask_charge<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    let charge = ask(input, output, "Charge [0]: ")?;
    Ok(if charge.is_empty() {
        "0".to_owned()
    } else {
        charge
    })
}

/// Prompts on the terminal, reading answers from standard input.
pub fn stdin_prompts(charge: Option<String>) -> Result<(String, String)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();

    let formula = ask_formula(&mut input, &mut output)?;
    let charge = match charge {
        Some(charge) => charge,
        None => ask_charge(&mut input, &mut output)?,
    };
    Ok((formula, charge))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_formula_answers_are_asked_again() {
        let mut input = "\n  \nH2O\n".as_bytes();
        let mut output = Vec::new();

        assert_eq!(ask_formula(&mut input, &mut output).unwrap(), "H2O");
        assert_eq!(String::from_utf8(output).unwrap(), "Formula: ".repeat(3));
    }

    #[test]
    fn empty_charge_is_neutral() {
        let mut input = "\n".as_bytes();
        assert_eq!(ask_charge(&mut input, &mut Vec::new()).unwrap(), "0");
    }

    #[test]
    fn charge_answer_is_kept_verbatim() {
        let mut input = " -2 \n".as_bytes();
        assert_eq!(ask_charge(&mut input, &mut Vec::new()).unwrap(), "-2");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = "".as_bytes();
        assert!(ask_formula(&mut input, &mut Vec::new()).is_err());
    }
}

// End of File
