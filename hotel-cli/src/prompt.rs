//! Line-oriented terminal input.
//!
//! [`Prompter`] owns the input and output streams so the menus can be
//! driven from a real terminal or from a scripted buffer in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::CliError;

/// Reads answers to prompts and writes user-facing text.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for table printing.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    ///
    /// Returns [`CliError::EndOfInput`] once the input is exhausted.
    pub fn line(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            writeln!(self.output)?;
            return Err(CliError::EndOfInput);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads a value with the library's parser for its type.
    ///
    /// A malformed entry aborts the workflow with an input error.
    pub fn value<T>(&mut self, prompt: &str) -> Result<T, CliError>
    where
        T: FromStr<Err = hotel::Error>,
    {
        let entry = self.line(prompt)?;
        entry.parse().map_err(CliError::Library)
    }

    /// Reads a coordinate.
    pub fn coordinate(&mut self, prompt: &str, field: &str) -> Result<f64, CliError> {
        let entry = self.line(prompt)?;
        entry
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                CliError::Library(hotel::Error::invalid_input(
                    field,
                    format!("'{}' is not a number", entry.trim()),
                ))
            })
    }

    /// Reads a menu choice, asking again until a number is entered.
    pub fn choice(&mut self) -> Result<u32, CliError> {
        loop {
            let entry = self.line("Please make your choice: ")?;
            match entry.trim().parse() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say("Your input is invalid!")?,
            }
        }
    }
}
